use bytemuck::{Pod, Zeroable};

use crate::components::entity::Entity;
use crate::components::role::BodyRole;
use crate::entry::sequence::EntrySequence;
use crate::entry::slots::{SlotSet, SlotState};

/// Per-stamp data read by the host renderer through a raw pointer.
/// 6 floats = 24 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GlyphInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// World-space size of the stamped body.
    pub size: f32,
    /// Character code to draw on the body.
    pub glyph: f32,
    /// One of the `GlyphInstance::KIND_*` values.
    pub kind: f32,
}

impl GlyphInstance {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub const KIND_TILE: f32 = 0.0;
    pub const KIND_TOKEN: f32 = 1.0;
    pub const KIND_SLOT_EMPTY: f32 = 2.0;
    pub const KIND_SLOT_FILLED: f32 = 3.0;

    fn stamp(entity: &Entity, glyph: char, kind: f32) -> Self {
        Self {
            x: entity.pos.x,
            y: entity.pos.y,
            rotation: entity.rotation,
            size: entity.size,
            glyph: glyph as u32 as f32,
            kind,
        }
    }
}

/// Glyph stamps for one frame.
pub struct GlyphBuffer {
    pub instances: Vec<GlyphInstance>,
    capacity: usize,
}

impl GlyphBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Append a stamp. Stamps past capacity are dropped.
    pub fn push(&mut self, instance: GlyphInstance) {
        if self.instances.len() < self.capacity {
            self.instances.push(instance);
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for GlyphBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Stamp every keypad tile, live token and slot.
/// Tiles come first, then slots in index order, then tokens, so tokens draw on top.
/// Empty slots show `EntrySequence::PLACEHOLDER`; obstacles are left to the host.
pub fn build_glyph_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity> + Clone,
    slots: &SlotSet,
    buffer: &mut GlyphBuffer,
) {
    buffer.clear();

    for entity in entities.clone() {
        if let BodyRole::KeypadTile(d) = entity.role {
            buffer.push(GlyphInstance::stamp(entity, d.as_char(), GlyphInstance::KIND_TILE));
        }
    }

    for slot in slots.iter() {
        let Some(entity) = entities.clone().find(|e| e.id == slot.entity) else {
            continue;
        };
        let (glyph, kind) = match slot.state() {
            SlotState::Empty => (EntrySequence::PLACEHOLDER, GlyphInstance::KIND_SLOT_EMPTY),
            SlotState::Filled(d) => (d.as_char(), GlyphInstance::KIND_SLOT_FILLED),
        };
        buffer.push(GlyphInstance::stamp(entity, glyph, kind));
    }

    for entity in entities {
        if let BodyRole::DigitToken(d) = entity.role {
            buffer.push(GlyphInstance::stamp(entity, d.as_char(), GlyphInstance::KIND_TOKEN));
        }
    }
}
