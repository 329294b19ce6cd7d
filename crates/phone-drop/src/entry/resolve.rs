//! Turns contact reports into catches.
//!
//! `resolve` is a pure function of one step's collision batch, a role lookup
//! and the slot row; it never touches the physics world, so it can be driven
//! by synthetic batches. `apply` then performs the side effects in the session.

use crate::api::game::SimulationSession;
use crate::api::types::{EntityId, GameEvent};
use crate::components::role::BodyRole;
use crate::core::physics::CollisionPair;
use crate::entry::digit::Digit;
use crate::entry::layers;
use crate::entry::slots::{FillOutcome, SlotSet};

/// A token locked into a slot during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catch {
    pub slot: usize,
    pub slot_entity: EntityId,
    pub token: EntityId,
    pub digit: Digit,
}

/// Fill slots from one step's collision batch, in event order.
///
/// Only started token↔slot contacts count, in either member order. A token
/// is consumed by at most one slot per batch, and a slot that is already
/// filled ignores further contacts.
pub fn resolve(
    pairs: &[CollisionPair],
    role_of: impl Fn(EntityId) -> Option<BodyRole>,
    slots: &mut SlotSet,
) -> Vec<Catch> {
    let mut catches: Vec<Catch> = Vec::new();

    for pair in pairs.iter().filter(|p| p.started) {
        let roles = (role_of(pair.entity_a), role_of(pair.entity_b));
        let (slot_entity, index, token, digit) = match roles {
            (Some(BodyRole::Slot(i)), Some(BodyRole::DigitToken(d))) => (pair.entity_a, i, pair.entity_b, d),
            (Some(BodyRole::DigitToken(d)), Some(BodyRole::Slot(i))) => (pair.entity_b, i, pair.entity_a, d),
            _ => continue,
        };

        if catches.iter().any(|c| c.token == token) {
            continue;
        }

        // A slot entity left over from a replaced row does not belong to this set.
        match slots.get(index) {
            Some(slot) if slot.entity == slot_entity && slot.collision_enabled() => {}
            _ => continue,
        }

        if let Ok(FillOutcome::Filled) = slots.fill(index, digit) {
            catches.push(Catch {
                slot: index,
                slot_entity,
                token,
                digit,
            });
        }
    }

    catches
}

/// Remove caught tokens from the world, mask the filled slots out of
/// collision detection and notify the host.
pub fn apply(session: &mut SimulationSession, catches: &[Catch]) {
    for catch in catches {
        session.despawn(catch.token);
        session.set_collisions_enabled(catch.slot_entity, layers::SLOT, false);
        log::info!("slot {} filled with {}", catch.slot, catch.digit);
        session.emit_event(GameEvent::slot_filled(catch.slot, catch.digit.value()));
    }
}
