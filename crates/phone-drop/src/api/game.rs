use glam::Vec2;

use crate::api::types::{EntityId, GameEvent};
use crate::components::entity::Entity;
use crate::components::role::BodyRole;
use crate::core::physics::{BodyDesc, ColliderMaterial, CollisionLayers, CollisionPair, PhysicsWorld};
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::render::glyph::GlyphBuffer;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Gravity vector. Y points down.
    pub gravity: Vec2,
    /// Maximum number of glyph stamps per frame (default: 256).
    pub max_glyphs: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Maximum simulation ticks run for a single frame (default: 10).
    pub max_steps_per_frame: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 500.0,
            world_height: 500.0,
            gravity: Vec2::new(0.0, 981.0),
            max_glyphs: 256,
            max_events: 32,
            max_steps_per_frame: 10,
        }
    }
}

/// The contract a widget fulfills. The runner calls the phases in a fixed
/// order each tick: `update`, physics step, `after_step`; `render` runs once
/// per frame after every tick of that frame has been applied.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the initial scene.
    fn init(&mut self, session: &mut SimulationSession);

    /// Pre-step phase: drain input, spawn bodies, steer kinematic bodies.
    fn update(&mut self, session: &mut SimulationSession, input: &InputQueue);

    /// Post-step phase: react to the collisions of the step that just ran.
    fn after_step(&mut self, _session: &mut SimulationSession) {}

    /// Read-only render pass. Stamps glyphs for the host renderer.
    fn render(&self, _session: &SimulationSession, _ctx: &mut RenderContext) {}
}

/// Everything one running widget owns: entities, the physics world, the
/// collision batch of the last step and the outgoing host events.
/// Created once per runner and torn down with it.
pub struct SimulationSession {
    pub scene: Scene,
    pub physics: PhysicsWorld,
    pub events: Vec<GameEvent>,
    next_id: u32,
    collision_events: Vec<CollisionPair>,
}

impl SimulationSession {
    pub fn new(config: &GameConfig) -> Self {
        let mut physics = PhysicsWorld::new(config.gravity);
        physics.set_dt(config.fixed_dt);
        Self {
            scene: Scene::new(),
            physics,
            events: Vec::with_capacity(config.max_events),
            next_id: 1,
            collision_events: Vec::new(),
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Spawn an entity with a physics body. Returns the EntityId.
    /// The entity's position is set from the BodyDesc.
    pub fn spawn_with_body(
        &mut self,
        entity: Entity,
        desc: BodyDesc,
        material: ColliderMaterial,
    ) -> EntityId {
        let id = entity.id;
        let body = self.physics.create_body(id, &desc, material);
        let entity = entity
            .with_pos(desc.position)
            .with_rotation(desc.rotation)
            .with_body(body);
        self.scene.spawn(entity);
        id
    }

    /// Despawn an entity, removing its physics body if present.
    /// Returns the removed entity.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let entity = self.scene.despawn(id)?;
        if let Some(body) = &entity.body {
            self.physics.remove_body(body);
        }
        Some(entity)
    }

    /// Role of a live entity.
    pub fn role_of(&self, id: EntityId) -> Option<BodyRole> {
        self.scene.role_of(id)
    }

    /// Entities whose collider contains `point`, with their roles.
    pub fn entities_at_point(&self, point: Vec2) -> Vec<(EntityId, BodyRole)> {
        self.physics
            .entities_at_point(point)
            .into_iter()
            .filter_map(|id| self.role_of(id).map(|role| (id, role)))
            .collect()
    }

    /// Set the linear velocity of an entity's physics body.
    pub fn set_velocity(&mut self, id: EntityId, vel: Vec2) {
        if let Some(body) = self.scene.get(id).and_then(|e| e.body) {
            self.physics.set_velocity(&body, vel);
        }
    }

    /// Get the linear velocity of an entity's physics body.
    pub fn velocity(&self, id: EntityId) -> Vec2 {
        self.scene
            .get(id)
            .and_then(|e| e.body.as_ref())
            .map(|body| self.physics.velocity(body))
            .unwrap_or(Vec2::ZERO)
    }

    /// Move a kinematic body to `pos` over the next step.
    pub fn set_kinematic_position(&mut self, id: EntityId, pos: Vec2) {
        if let Some(body) = self.scene.get(id).and_then(|e| e.body) {
            self.physics.set_kinematic_position(&body, pos, 0.0);
        }
    }

    /// Switch an entity's collider between its normal layers and no layers at all.
    pub fn set_collisions_enabled(&mut self, id: EntityId, layers_when_enabled: CollisionLayers, enabled: bool) {
        if let Some(body) = self.scene.get(id).and_then(|e| e.body) {
            let layers = if enabled { layers_when_enabled } else { CollisionLayers::NONE };
            self.physics.set_layers(&body, layers);
        }
    }

    /// Collision events from the most recent physics step.
    pub fn collisions(&self) -> &[CollisionPair] {
        &self.collision_events
    }

    /// Step the physics simulation and sync positions back to entities.
    pub fn step_physics(&mut self) {
        self.collision_events.clear();
        self.physics.step_into(&mut self.collision_events);

        for entity in self.scene.iter_mut() {
            if let Some(body) = &entity.body {
                let (pos, rot) = self.physics.body_position(body);
                entity.pos = pos;
                entity.rotation = rot;
            }
        }
    }

    /// Inject a synthetic collision batch in place of the last step's events.
    pub fn replace_collisions(&mut self, pairs: Vec<CollisionPair>) {
        self.collision_events = pairs;
    }
}

impl Default for SimulationSession {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

/// Render context for the per-frame glyph pass.
pub struct RenderContext<'a> {
    pub glyphs: &'a mut GlyphBuffer,
}
