use crate::math::{Axis, Field};
use crate::scene::{EntityId, Scene};

/// Constant rotation added to an entity every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDelta {
    pub entity: EntityId,
    pub axis: Axis,
    pub delta: f32,
}

/// `field = base + amplitude * sin(frequency * t + phase)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillation {
    pub entity: EntityId,
    pub field: Field,
    pub base: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub phase: f32,
}

impl Oscillation {
    pub fn value_at(&self, time: f32) -> f32 {
        self.base + self.amplitude * (self.frequency * time + self.phase).sin()
    }
}

/// Per-frame animation of one scene, independent of scroll
#[derive(Debug, Clone, Default)]
pub struct FrameTicker {
    deltas: Vec<FrameDelta>,
    oscillations: Vec<Oscillation>,
}

impl FrameTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spin(&mut self, entity: EntityId, axis: Axis, delta: f32) -> &mut Self {
        self.deltas.push(FrameDelta { entity, axis, delta });
        self
    }

    pub fn oscillate(&mut self, oscillation: Oscillation) -> &mut Self {
        self.oscillations.push(oscillation);
        self
    }

    pub fn deltas(&self) -> &[FrameDelta] {
        &self.deltas
    }

    pub fn oscillations(&self) -> &[Oscillation] {
        &self.oscillations
    }

    /// One frame: accumulate every delta into its entity's spin, then set
    /// each oscillating field for `time` seconds. Spin is never wrapped.
    pub fn tick(&self, scene: &mut Scene, time: f32) {
        for d in &self.deltas {
            if let Some(entity) = scene.entity_mut(d.entity) {
                entity.add_spin(d.axis, d.delta);
            }
        }
        for o in &self.oscillations {
            if let Some(entity) = scene.entity_mut(o.entity) {
                entity.transform.set(o.field, o.value_at(time));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{EntityBuilder, PerspectiveCamera};

    #[test]
    fn spin_accumulates_linearly() {
        let mut scene = Scene::new("test", PerspectiveCamera::default());
        let id = scene.add(EntityBuilder::new("reel").build());
        let mut ticker = FrameTicker::new();
        ticker.spin(id, Axis::Z, 0.005);

        for _ in 0..1000 {
            ticker.tick(&mut scene, 0.0);
        }

        let spin = scene.entity(id).map(|e| e.spin().z).unwrap_or_default();
        assert!((spin - 5.0).abs() < 1e-3);
    }

    #[test]
    fn oscillation_sets_absolute_value() {
        let mut scene = Scene::new("test", PerspectiveCamera::default());
        let id = scene.add(EntityBuilder::new("icon").at(0.0, 0.0, -3.0).build());
        let mut ticker = FrameTicker::new();
        ticker.oscillate(Oscillation {
            entity: id,
            field: Field::POSITION_Z,
            base: 2.0,
            amplitude: 0.5,
            frequency: 0.5,
            phase: 0.0,
        });

        ticker.tick(&mut scene, 0.0);
        assert_eq!(scene.entity(id).map(|e| e.transform.position.z), Some(2.0));

        ticker.tick(&mut scene, std::f32::consts::PI);
        let z = scene.entity(id).map(|e| e.transform.position.z).unwrap_or_default();
        assert!((z - 2.5).abs() < 1e-5);
    }
}
