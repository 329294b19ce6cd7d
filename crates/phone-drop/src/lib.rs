pub mod api;
pub mod components;
pub mod core;
pub mod entry;
pub mod input;
pub mod render;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, RenderContext, SimulationSession};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::role::BodyRole;
pub use core::physics::{
    BodyDesc, BodyType, ColliderDesc, ColliderMaterial, CollisionLayers, CollisionPair,
    PhysicsBody, PhysicsWorld,
};
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use entry::{
    Digit, DigitToken, Direction, EntryError, EntrySequence, FillOutcome, InteractionDispatcher,
    PointerAction, SlotBounds, SlotSet, SlotState, TokenFactory,
};
pub use input::queue::{InputEvent, InputQueue};
pub use render::glyph::{build_glyph_buffer, GlyphBuffer, GlyphInstance};
