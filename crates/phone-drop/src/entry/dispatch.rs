//! Pointer handling: keypad taps spawn tokens, presses on a live token drag it.

use glam::Vec2;

use crate::api::game::SimulationSession;
use crate::api::types::EntityId;
use crate::components::role::BodyRole;
use crate::entry::error::EntryError;
use crate::entry::token::{DigitToken, TokenFactory};

/// What a pointer press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Spawned(DigitToken),
    Grabbed(EntityId),
    None,
}

/// Maps pointer presses to keypad tiles and pulls grabbed tokens toward the pointer.
#[derive(Debug, Clone)]
pub struct InteractionDispatcher {
    pub factory: TokenFactory,
    /// Fraction of the pointer gap a grabbed token closes per tick.
    pub drag_stiffness: f32,
    grab: Option<Grab>,
}

#[derive(Debug, Clone, Copy)]
struct Grab {
    token: EntityId,
    target: Vec2,
}

impl InteractionDispatcher {
    pub fn new(factory: TokenFactory, drag_stiffness: f32) -> Self {
        Self {
            factory,
            drag_stiffness,
            grab: None,
        }
    }

    /// Handle a press at `point`. A keypad tile under the pointer always wins
    /// and spawns a token below it; otherwise a token under the pointer is
    /// grabbed. Slots and obstacles are never acted on.
    pub fn on_pointer_down(
        &mut self,
        session: &mut SimulationSession,
        point: Vec2,
    ) -> Result<PointerAction, EntryError> {
        let hits = session.entities_at_point(point);

        let tile = hits.iter().find_map(|&(id, role)| match role {
            BodyRole::KeypadTile(digit) => Some((id, digit)),
            _ => None,
        });
        if let Some((tile_id, digit)) = tile {
            let origin = session.scene.get(tile_id).map(|e| e.pos).unwrap_or(point);
            let token = self.factory.spawn(session, digit.as_char(), origin)?;
            return Ok(PointerAction::Spawned(token));
        }

        if let Some(&(token, _)) = hits.iter().find(|(_, role)| role.is_token()) {
            log::debug!("token {:?} grabbed", token);
            self.grab = Some(Grab { token, target: point });
            return Ok(PointerAction::Grabbed(token));
        }

        Ok(PointerAction::None)
    }

    pub fn on_pointer_move(&mut self, point: Vec2) {
        if let Some(grab) = &mut self.grab {
            grab.target = point;
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.grab = None;
    }

    pub fn grabbed(&self) -> Option<EntityId> {
        self.grab.map(|g| g.token)
    }

    /// Steer the grabbed token toward the pointer. Drops the grab once the
    /// token is gone (caught by a slot or removed by a reset).
    pub fn apply_drag(&mut self, session: &mut SimulationSession, dt: f32) {
        let Some(grab) = self.grab else {
            return;
        };
        let Some(pos) = session.scene.get(grab.token).map(|e| e.pos) else {
            self.grab = None;
            return;
        };
        let vel = (grab.target - pos) * self.drag_stiffness / dt;
        session.set_velocity(grab.token, vel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::game::GameConfig;
    use crate::components::entity::Entity;
    use crate::core::physics::{BodyDesc, ColliderDesc, ColliderMaterial};
    use crate::entry::digit::Digit;
    use crate::entry::layers;

    fn session() -> SimulationSession {
        SimulationSession::new(&GameConfig {
            gravity: Vec2::ZERO,
            ..GameConfig::default()
        })
    }

    fn tile(session: &mut SimulationSession, c: char, pos: Vec2) -> EntityId {
        let id = session.next_id();
        let digit = Digit::from_char(c).unwrap();
        let desc = BodyDesc::fixed(ColliderDesc::Cuboid { half_width: 15.0, half_height: 15.0 })
            .with_position(pos)
            .with_layers(layers::KEYPAD);
        session.spawn_with_body(Entity::new(id, BodyRole::KeypadTile(digit)), desc, ColliderMaterial::default());
        id
    }

    fn dispatcher() -> InteractionDispatcher {
        InteractionDispatcher::new(TokenFactory::new(30.0, 12.0), 0.2)
    }

    #[test]
    fn press_on_tile_spawns_matching_token_below_it() {
        let mut s = session();
        tile(&mut s, '3', Vec2::new(100.0, 30.0));
        tile(&mut s, '4', Vec2::new(140.0, 30.0));
        let mut d = dispatcher();

        let action = d.on_pointer_down(&mut s, Vec2::new(105.0, 25.0)).unwrap();

        let PointerAction::Spawned(token) = action else {
            panic!("expected a spawn, got {:?}", action);
        };
        assert_eq!(token.digit.as_char(), '3');
        assert_eq!(s.scene.get(token.id).unwrap().pos, Vec2::new(100.0, 60.0));
    }

    #[test]
    fn press_on_empty_space_does_nothing() {
        let mut s = session();
        tile(&mut s, '3', Vec2::new(100.0, 30.0));
        let mut d = dispatcher();

        assert_eq!(d.on_pointer_down(&mut s, Vec2::new(300.0, 300.0)).unwrap(), PointerAction::None);
        assert_eq!(s.scene.len(), 1);
    }

    #[test]
    fn press_on_slot_does_not_spawn() {
        let mut s = session();
        let id = s.next_id();
        let desc = BodyDesc::kinematic(ColliderDesc::Cuboid { half_width: 15.0, half_height: 15.0 })
            .with_position(Vec2::new(200.0, 400.0));
        s.spawn_with_body(Entity::new(id, BodyRole::Slot(0)), desc, ColliderMaterial::default());
        let mut d = dispatcher();

        assert_eq!(d.on_pointer_down(&mut s, Vec2::new(200.0, 400.0)).unwrap(), PointerAction::None);
        assert_eq!(s.scene.len(), 1);
    }

    #[test]
    fn press_on_token_grabs_and_drag_pulls_it() {
        let mut s = session();
        tile(&mut s, '8', Vec2::new(100.0, 30.0));
        let mut d = dispatcher();
        let PointerAction::Spawned(token) = d.on_pointer_down(&mut s, Vec2::new(100.0, 30.0)).unwrap() else {
            panic!("expected a spawn");
        };

        let action = d.on_pointer_down(&mut s, Vec2::new(100.0, 60.0)).unwrap();
        assert_eq!(action, PointerAction::Grabbed(token.id));

        d.on_pointer_move(Vec2::new(200.0, 60.0));
        d.apply_drag(&mut s, 1.0 / 60.0);
        let vel = s.velocity(token.id);
        assert!((vel.x - 100.0 * 0.2 * 60.0).abs() < 0.01, "vel={:?}", vel);

        d.on_pointer_up();
        assert_eq!(d.grabbed(), None);
    }

    #[test]
    fn grab_is_dropped_when_token_disappears() {
        let mut s = session();
        tile(&mut s, '1', Vec2::new(100.0, 30.0));
        let mut d = dispatcher();
        let PointerAction::Spawned(token) = d.on_pointer_down(&mut s, Vec2::new(100.0, 30.0)).unwrap() else {
            panic!("expected a spawn");
        };
        d.on_pointer_down(&mut s, Vec2::new(100.0, 60.0)).unwrap();
        s.despawn(token.id);

        d.apply_drag(&mut s, 1.0 / 60.0);
        assert_eq!(d.grabbed(), None);
    }
}
