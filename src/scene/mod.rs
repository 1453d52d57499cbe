// scene/ - Scene graph: primitives grouped into entities, one camera, a light set
//
// Entities are only ever added, so an `EntityId` stays valid for the
// scene's whole lifetime.

mod camera;
mod entity;
mod light;
mod primitive;

pub use camera::{PerspectiveCamera, DEFAULT_FAR, DEFAULT_FOV, DEFAULT_NEAR};
pub use entity::{Entity, EntityBuilder};
pub use light::Light;
pub use primitive::{Emissive, Material, Primitive, Shape};

/// Handle to an entity inside the scene that returned it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(usize);

impl EntityId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    name: String,
    pub camera: PerspectiveCamera,
    lights: Vec<Light>,
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new(name: impl Into<String>, camera: PerspectiveCamera) -> Self {
        Self {
            name: name.into(),
            camera,
            lights: Vec::new(),
            entities: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    pub fn add(&mut self, entity: Entity) -> EntityId {
        log::debug!(
            "{}: added '{}' ({} primitives)",
            self.name,
            entity.name(),
            entity.primitives().len()
        );
        self.entities.push(entity);
        EntityId(self.entities.len() - 1)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.0)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn find(&self, name: &str) -> Option<EntityId> {
        self.entities.iter().position(|e| e.name() == name).map(EntityId)
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn primitive_count(&self) -> usize {
        self.entities.iter().map(|e| e.primitives().len()).sum()
    }

    /// Match the camera to a new drawing surface size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }
}
