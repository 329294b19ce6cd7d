use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::role::BodyRole;

/// Simple entity storage using a flat Vec.
/// The widget holds a few dozen bodies at most, so linear lookups are fine.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.swap_remove(idx))
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Role of the entity with this ID, if it is still alive.
    pub fn role_of(&self, id: EntityId) -> Option<BodyRole> {
        self.get(id).map(|e| e.role)
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> + Clone {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// IDs of every entity whose role matches the predicate.
    pub fn ids_where(&self, mut pred: impl FnMut(&BodyRole) -> bool) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| pred(&e.role))
            .map(|e| e.id)
            .collect()
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
