use glam::Vec2;

use crate::api::game::SimulationSession;
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::role::BodyRole;
use crate::core::physics::{BodyDesc, ColliderDesc, ColliderMaterial};
use crate::entry::digit::Digit;
use crate::entry::error::EntryError;
use crate::entry::layers;

/// A tapped digit in flight. The session's scene owns the entity and its
/// body until a slot consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitToken {
    pub id: EntityId,
    pub digit: Digit,
}

/// Creates digit tokens below the tile that was tapped.
#[derive(Debug, Clone)]
pub struct TokenFactory {
    /// Downward offset from the tile center to the spawn point.
    pub clearance: f32,
    pub radius: f32,
    pub material: ColliderMaterial,
}

impl TokenFactory {
    pub fn new(clearance: f32, radius: f32) -> Self {
        Self {
            clearance,
            radius,
            material: ColliderMaterial::default(),
        }
    }

    pub fn with_material(mut self, material: ColliderMaterial) -> Self {
        self.material = material;
        self
    }

    /// Spawn a rolling token for `digit` just below `origin`.
    pub fn spawn(
        &self,
        session: &mut SimulationSession,
        digit: char,
        origin: Vec2,
    ) -> Result<DigitToken, EntryError> {
        let digit = Digit::from_char(digit).inspect_err(|e| log::warn!("token rejected: {}", e))?;

        let pos = origin + Vec2::new(0.0, self.clearance);
        let id = session.next_id();
        let entity = Entity::new(id, BodyRole::DigitToken(digit)).with_size(self.radius * 2.0);
        let desc = BodyDesc::dynamic(ColliderDesc::Ball { radius: self.radius })
            .with_position(pos)
            .with_layers(layers::TOKEN)
            .with_ccd(true);
        session.spawn_with_body(entity, desc, self.material);

        log::debug!("token {} spawned at ({:.1}, {:.1})", digit, pos.x, pos.y);
        Ok(DigitToken { id, digit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_below_origin_with_token_role() {
        let mut session = SimulationSession::default();
        let factory = TokenFactory::new(30.0, 12.0);

        let token = factory.spawn(&mut session, '3', Vec2::new(100.0, 30.0)).unwrap();

        assert_eq!(token.digit.as_char(), '3');
        let entity = session.scene.get(token.id).unwrap();
        assert_eq!(entity.role, BodyRole::DigitToken(token.digit));
        assert_eq!(entity.pos, Vec2::new(100.0, 60.0));
        assert_eq!(session.physics.body_count(), 1);
    }

    #[test]
    fn invalid_digit_spawns_nothing() {
        let mut session = SimulationSession::default();
        let factory = TokenFactory::new(30.0, 12.0);

        let err = factory.spawn(&mut session, '#', Vec2::ZERO).unwrap_err();

        assert_eq!(err, EntryError::InvalidDigit('#'));
        assert!(session.scene.is_empty());
        assert_eq!(session.physics.body_count(), 0);
    }
}
