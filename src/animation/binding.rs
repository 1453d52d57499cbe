use crate::math::{Axis, Field};
use crate::page::PageLayout;
use crate::scene::{EntityId, Scene};

use super::trigger::TriggerRegion;

/// A single scalar in a scene that a binding may drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Entity(EntityId, Field),
    CameraPosition(Axis),
}

impl Target {
    pub fn read(self, scene: &Scene) -> Option<f32> {
        match self {
            Target::Entity(id, field) => scene.entity(id).map(|e| e.transform.get(field)),
            Target::CameraPosition(axis) => Some(scene.camera.position[axis.index()]),
        }
    }

    pub fn write(self, scene: &mut Scene, value: f32) {
        match self {
            Target::Entity(id, field) => {
                if let Some(entity) = scene.entity_mut(id) {
                    entity.transform.set(field, value);
                }
            }
            Target::CameraPosition(axis) => scene.camera.position[axis.index()] = value,
        }
    }
}

/// Linear interpolation of one target across a trigger region
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollBinding {
    pub target: Target,
    pub from: f32,
    pub to: f32,
    pub trigger: TriggerRegion,
}

impl ScrollBinding {
    pub fn value_at(&self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        self.from + p * (self.to - self.from)
    }

    /// Value for the given scroll offset; an absent trigger element holds `from`
    pub fn evaluate(&self, layout: &PageLayout, scroll: f32) -> f32 {
        match self.trigger.progress(layout, scroll) {
            Some(p) => self.value_at(p),
            None => self.from,
        }
    }
}

/// All scroll bindings of one scene. Evaluation reads nothing but the current
/// scroll offset, so scrolling back and forth never drifts.
#[derive(Debug, Clone, Default)]
pub struct ScrollEngine {
    bindings: Vec<ScrollBinding>,
}

impl ScrollEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `target` to travel from its current value to `to`
    pub fn to(&mut self, scene: &Scene, target: Target, to: f32, trigger: TriggerRegion) {
        match target.read(scene) {
            Some(from) => self.between(target, from, to, trigger),
            None => log::debug!("{}: skipped binding for missing target {:?}", scene.name(), target),
        }
    }

    pub fn between(&mut self, target: Target, from: f32, to: f32, trigger: TriggerRegion) {
        log::debug!(
            "bound {:?} {} -> {} on '{}'",
            target,
            from,
            to,
            trigger.element
        );
        self.bindings.push(ScrollBinding {
            target,
            from,
            to,
            trigger,
        });
    }

    pub fn bindings(&self) -> &[ScrollBinding] {
        &self.bindings
    }

    pub fn apply(&self, scene: &mut Scene, layout: &PageLayout, scroll: f32) {
        for binding in &self.bindings {
            let value = binding.evaluate(layout, scroll);
            binding.target.write(scene, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{EntityBuilder, PerspectiveCamera};

    #[test]
    fn to_captures_current_value() {
        let mut scene = Scene::new("test", PerspectiveCamera::default());
        let id = scene.add(EntityBuilder::new("a").at(-8.0, 3.0, 0.0).build());

        let mut engine = ScrollEngine::new();
        engine.to(
            &scene,
            Target::Entity(id, Field::POSITION_X),
            2.0,
            TriggerRegion::while_visible("section-1"),
        );

        assert_eq!(engine.bindings()[0].from, -8.0);
        assert_eq!(engine.bindings()[0].to, 2.0);
    }

    #[test]
    fn value_at_interpolates_and_clamps() {
        let binding = ScrollBinding {
            target: Target::CameraPosition(Axis::Y),
            from: -2.5,
            to: 2.5,
            trigger: TriggerRegion::while_visible("body"),
        };
        assert_eq!(binding.value_at(0.0), -2.5);
        assert_eq!(binding.value_at(0.5), 0.0);
        assert_eq!(binding.value_at(1.0), 2.5);
        assert_eq!(binding.value_at(-3.0), -2.5);
        assert_eq!(binding.value_at(7.0), 2.5);
    }
}
