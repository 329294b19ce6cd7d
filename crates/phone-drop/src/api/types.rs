use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// A notification sent from the simulation to the host page.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// A slot caught a token. `a` = slot index, `b` = digit value.
    pub const SLOT_FILLED: f32 = 1.0;
    /// Every slot is filled. `a` = slot count.
    pub const COMPLETE: f32 = 2.0;

    pub fn slot_filled(index: usize, digit: u8) -> Self {
        Self {
            kind: Self::SLOT_FILLED,
            a: index as f32,
            b: digit as f32,
            c: 0.0,
        }
    }

    pub fn complete(slot_count: usize) -> Self {
        Self {
            kind: Self::COMPLETE,
            a: slot_count as f32,
            b: 0.0,
            c: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_event_is_4_floats() {
        assert_eq!(std::mem::size_of::<GameEvent>(), GameEvent::FLOATS * 4);
    }

    #[test]
    fn slot_filled_payload() {
        let e = GameEvent::slot_filled(3, 7);
        assert_eq!(e.kind, GameEvent::SLOT_FILLED);
        assert_eq!(e.a, 3.0);
        assert_eq!(e.b, 7.0);
    }
}
