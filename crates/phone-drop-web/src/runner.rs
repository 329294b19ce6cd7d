use phone_drop::{
    FixedTimestep, Game, GameConfig, GameEvent, GlyphBuffer, GlyphInstance, InputEvent,
    InputQueue, RenderContext, SimulationSession,
};

/// Generic runner that wires a widget to the per-frame loop.
///
/// Each concrete widget creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export generic
/// structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    session: SimulationSession,
    input: InputQueue,
    glyphs: GlyphBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt, config.max_steps_per_frame);

        Self {
            game,
            session: SimulationSession::new(&config),
            input: InputQueue::new(),
            glyphs: GlyphBuffer::with_capacity(config.max_glyphs),
            timestep,
            config,
            initialized: false,
        }
    }

    /// Initialize the widget. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.session);
        self.initialized = true;
        self.render();
    }

    /// Queue an input event for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: every due fixed step, then the render pass.
    ///
    /// Queued input is handed to the first step of the frame and then
    /// dropped. A frame too short to run any step keeps it queued.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.session.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.session, &self.input);
            self.input.clear();
            self.session.step_physics();
            self.game.after_step(&mut self.session);
        }

        if self.session.events.len() > self.config.max_events {
            log::warn!(
                "dropping {} game events over the per-frame limit",
                self.session.events.len() - self.config.max_events
            );
            self.session.events.truncate(self.config.max_events);
        }

        self.render();
    }

    fn render(&mut self) {
        self.glyphs.clear();
        let mut ctx = RenderContext {
            glyphs: &mut self.glyphs,
        };
        self.game.render(&self.session, &mut ctx);
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn session(&self) -> &SimulationSession {
        &self.session
    }

    // ---- Pointer accessors for host reads ----

    pub fn glyphs_ptr(&self) -> *const f32 {
        self.glyphs.instances_ptr()
    }

    pub fn glyph_count(&self) -> u32 {
        self.glyphs.instance_count()
    }

    pub fn glyph_floats(&self) -> u32 {
        GlyphInstance::FLOATS as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.session.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.session.events.len() as u32
    }

    pub fn game_event_floats(&self) -> u32 {
        GameEvent::FLOATS as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors ----

    pub fn max_glyphs(&self) -> u32 {
        self.config.max_glyphs as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }
}
