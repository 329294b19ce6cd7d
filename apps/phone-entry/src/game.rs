use glam::Vec2;
use phone_drop::entry::layers;
use phone_drop::entry::{apply, resolve};
use phone_drop::*;

use crate::layout::EntryLayout;

/// Custom event kinds from the host page.
pub const CUSTOM_START: u32 = 1;
pub const CUSTOM_RESET: u32 = 2;

pub struct PhoneEntry {
    layout: EntryLayout,
    dispatcher: InteractionDispatcher,
    slots: SlotSet,
    fixed_dt: f32,
    keypad_built: bool,
    completed: bool,
}

impl PhoneEntry {
    pub fn new() -> Self {
        Self::with_layout(EntryLayout::default())
    }

    pub fn with_layout(layout: EntryLayout) -> Self {
        let factory = TokenFactory::new(layout.spawn_clearance, layout.token_radius)
            .with_material(layout.token_material());
        Self {
            dispatcher: InteractionDispatcher::new(factory, layout.drag_stiffness),
            slots: SlotSet::new(Vec::new(), layout.slot_speed),
            fixed_dt: GameConfig::default().fixed_dt,
            keypad_built: false,
            completed: false,
            layout,
        }
    }

    pub fn layout(&self) -> &EntryLayout {
        &self.layout
    }

    pub fn slots(&self) -> &SlotSet {
        &self.slots
    }

    pub fn sequence(&self) -> EntrySequence {
        self.slots.current_sequence()
    }

    /// The entry with `_` in every Empty slot.
    pub fn entry_text(&self) -> String {
        self.sequence().to_text(EntrySequence::PLACEHOLDER)
    }

    pub fn is_complete(&self) -> bool {
        self.slots.is_complete()
    }

    fn spawn_obstacle(session: &mut SimulationSession, center: Vec2, half: Vec2, rotation: f32) {
        let id = session.next_id();
        let desc = BodyDesc::fixed(ColliderDesc::Cuboid {
            half_width: half.x,
            half_height: half.y,
        })
        .with_position(center)
        .with_rotation(rotation)
        .with_layers(layers::OBSTACLE);
        session.spawn_with_body(Entity::new(id, BodyRole::Obstacle), desc, ColliderMaterial::default());
    }

    /// Side walls and floor, just outside the visible square.
    fn build_walls(&self, session: &mut SimulationSession) {
        let size = self.layout.world_size;
        let t = self.layout.wall_thickness;
        let side = Vec2::new(t / 2.0, size / 2.0);

        Self::spawn_obstacle(session, Vec2::new(-t / 2.0, size / 2.0), side, 0.0);
        Self::spawn_obstacle(session, Vec2::new(size + t / 2.0, size / 2.0), side, 0.0);
        Self::spawn_obstacle(
            session,
            Vec2::new(size / 2.0, size + t / 2.0),
            Vec2::new(size / 2.0 + t, t / 2.0),
            0.0,
        );
    }

    fn build_maze(&self, session: &mut SimulationSession) {
        for o in &self.layout.obstacles {
            Self::spawn_obstacle(session, o.center(), Vec2::new(o.half_width, o.half_height), o.rotation);
        }
    }

    fn build_keypad(&mut self, session: &mut SimulationSession) {
        let half = self.layout.tile_size / 2.0;
        for (digit, center) in Digit::ALL.into_iter().zip(self.layout.keypad_centers()) {
            let id = session.next_id();
            let entity = Entity::new(id, BodyRole::KeypadTile(digit)).with_size(self.layout.tile_size);
            let desc = BodyDesc::fixed(ColliderDesc::Cuboid {
                half_width: half,
                half_height: half,
            })
            .with_position(center)
            .with_layers(layers::KEYPAD);
            session.spawn_with_body(entity, desc, ColliderMaterial::default());
        }
        self.keypad_built = true;
    }

    fn build_slots(&mut self, session: &mut SimulationSession) {
        self.slots = SlotSet::spawn(
            session,
            &self.layout.slot_centers(),
            self.layout.tile_size,
            self.layout.slot_speed,
        );
        self.completed = false;
    }

    fn start(&mut self, session: &mut SimulationSession) {
        if self.keypad_built {
            log::debug!("start ignored, keypad already shown");
            return;
        }
        self.build_keypad(session);
        log::info!("keypad shown");
    }

    /// Drop every token and replace the slot row with a fresh, empty one.
    fn reset(&mut self, session: &mut SimulationSession) {
        for id in session.scene.ids_where(|role| role.is_token()) {
            session.despawn(id);
        }
        let old = std::mem::replace(&mut self.slots, SlotSet::new(Vec::new(), self.layout.slot_speed));
        old.despawn(session);
        self.build_slots(session);
        self.dispatcher.on_pointer_up();
        log::info!("entry reset");
    }
}

impl Default for PhoneEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for PhoneEntry {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: self.layout.world_size,
            world_height: self.layout.world_size,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, session: &mut SimulationSession) {
        self.fixed_dt = self.config().fixed_dt;
        self.build_walls(session);
        self.build_maze(session);
        self.build_slots(session);
        if self.layout.auto_start {
            self.build_keypad(session);
        }
        log::info!(
            "phone entry ready: {} slots, {} obstacles",
            self.slots.len(),
            self.layout.obstacles.len()
        );
    }

    fn update(&mut self, session: &mut SimulationSession, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    if let Err(e) = self.dispatcher.on_pointer_down(session, Vec2::new(x, y)) {
                        log::warn!("pointer press dropped: {}", e);
                    }
                }
                InputEvent::PointerMove { x, y } => self.dispatcher.on_pointer_move(Vec2::new(x, y)),
                InputEvent::PointerUp { .. } => self.dispatcher.on_pointer_up(),
                InputEvent::Custom { kind: CUSTOM_START, .. } => self.start(session),
                InputEvent::Custom { kind: CUSTOM_RESET, .. } => self.reset(session),
                InputEvent::Custom { kind, .. } => log::debug!("unknown custom event {}", kind),
            }
        }

        self.dispatcher.apply_drag(session, self.fixed_dt);
    }

    fn after_step(&mut self, session: &mut SimulationSession) {
        let catches = resolve(session.collisions(), |id| session.role_of(id), &mut self.slots);
        apply(session, &catches);

        self.slots.tick(self.layout.slot_bounds());
        self.slots.sync_bodies(session);

        if !self.completed && self.slots.is_complete() {
            self.completed = true;
            log::info!("entry complete: {}", self.sequence());
            session.emit_event(GameEvent::complete(self.slots.len()));
        }
    }

    fn render(&self, session: &SimulationSession, ctx: &mut RenderContext) {
        build_glyph_buffer(session.scene.iter(), &self.slots, ctx.glyphs);
    }
}
