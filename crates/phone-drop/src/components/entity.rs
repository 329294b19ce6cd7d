use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::role::BodyRole;
use crate::core::physics::PhysicsBody;

/// A body in the widget: role, pose and the physics handle that drives it.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// What this body means to the entry widget.
    pub role: BodyRole,
    /// Position in world space, synced from physics after every step.
    pub pos: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// Rendered glyph size in world units.
    pub size: f32,
    /// Physics body, if the entity takes part in the simulation.
    pub body: Option<PhysicsBody>,
}

impl Entity {
    /// Create a new entity with the given ID and role at the origin.
    pub fn new(id: EntityId, role: BodyRole) -> Self {
        Self {
            id,
            role,
            pos: Vec2::ZERO,
            rotation: 0.0,
            size: 1.0,
            body: None,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_body(mut self, body: PhysicsBody) -> Self {
        self.body = Some(body);
        self
    }
}
