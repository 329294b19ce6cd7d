//! The oscillating slot row.
//!
//! Every Empty slot moves by the same step each tick. The row turns around as
//! one rigid unit when its lead slot (the foremost Empty slot in the direction
//! of travel) reaches a bound. Filled slots are frozen where they caught their
//! token and no longer count toward the lead.

use glam::Vec2;

use crate::api::game::SimulationSession;
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::role::BodyRole;
use crate::core::physics::{BodyDesc, ColliderDesc, ColliderMaterial};
use crate::entry::digit::Digit;
use crate::entry::error::EntryError;
use crate::entry::layers;

/// Whether a slot is still waiting for a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Empty,
    Filled(Digit),
}

impl SlotState {
    pub fn digit(&self) -> Option<Digit> {
        match *self {
            SlotState::Empty => None,
            SlotState::Filled(d) => Some(d),
        }
    }
}

/// Travel direction of the whole row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    MovingRight,
    MovingLeft,
}

impl Direction {
    fn sign(self) -> f32 {
        match self {
            Direction::MovingRight => 1.0,
            Direction::MovingLeft => -1.0,
        }
    }
}

/// Travel range for slot centers along the X axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotBounds {
    pub min_x: f32,
    pub max_x: f32,
}

/// Result of a fill request. A repeated fill is not an error: duplicate
/// contact reports are expected, and the first digit stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    Filled,
    AlreadyFilled,
}

/// One position of the target sequence.
#[derive(Debug, Clone)]
pub struct Slot {
    pub index: usize,
    pub entity: EntityId,
    state: SlotState,
    position: Vec2,
    collision_enabled: bool,
}

impl Slot {
    pub fn state(&self) -> SlotState {
        self.state
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn collision_enabled(&self) -> bool {
        self.collision_enabled
    }

    pub fn is_empty(&self) -> bool {
        self.state == SlotState::Empty
    }
}

/// Owns every slot of the row and their physics bodies.
#[derive(Debug, Clone)]
pub struct SlotSet {
    slots: Vec<Slot>,
    direction: Direction,
    step: f32,
}

impl SlotSet {
    /// Build a row from `(entity, center)` placements, in slot order.
    /// The row starts out moving right.
    pub fn new(placements: impl IntoIterator<Item = (EntityId, Vec2)>, step: f32) -> Self {
        let slots = placements
            .into_iter()
            .enumerate()
            .map(|(index, (entity, position))| Slot {
                index,
                entity,
                state: SlotState::Empty,
                position,
                collision_enabled: true,
            })
            .collect();
        Self {
            slots,
            direction: Direction::MovingRight,
            step,
        }
    }

    /// Create one kinematic square body per center and build the row from them.
    pub fn spawn(session: &mut SimulationSession, centers: &[Vec2], size: f32, step: f32) -> Self {
        let half = size / 2.0;
        let placements: Vec<(EntityId, Vec2)> = centers
            .iter()
            .enumerate()
            .map(|(index, &center)| {
                let id = session.next_id();
                let desc = BodyDesc::kinematic(ColliderDesc::Cuboid {
                    half_width: half,
                    half_height: half,
                })
                .with_position(center)
                .with_layers(layers::SLOT);
                let entity = Entity::new(id, BodyRole::Slot(index)).with_size(size);
                session.spawn_with_body(entity, desc, ColliderMaterial::default());
                (id, center)
            })
            .collect();
        Self::new(placements, step)
    }

    /// Remove every slot body from the session.
    pub fn despawn(self, session: &mut SimulationSession) {
        for slot in self.slots {
            session.despawn(slot.entity);
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Slot backed by this entity, if any.
    pub fn by_entity(&self, entity: EntityId) -> Option<&Slot> {
        self.slots.iter().find(|s| s.entity == entity)
    }

    /// Advance one tick: reverse first if the lead slot has reached the bound
    /// it is heading for, then move every Empty slot by one step.
    pub fn tick(&mut self, bounds: SlotBounds) {
        let lead = match self.direction {
            Direction::MovingRight => self
                .empty_xs()
                .fold(None, |acc: Option<f32>, x| Some(acc.map_or(x, |m| m.max(x)))),
            Direction::MovingLeft => self
                .empty_xs()
                .fold(None, |acc: Option<f32>, x| Some(acc.map_or(x, |m| m.min(x)))),
        };
        let Some(lead_x) = lead else {
            return;
        };

        self.direction = match self.direction {
            Direction::MovingRight if lead_x >= bounds.max_x => Direction::MovingLeft,
            Direction::MovingLeft if lead_x <= bounds.min_x => Direction::MovingRight,
            unchanged => unchanged,
        };

        let dx = self.step * self.direction.sign();
        for slot in self.slots.iter_mut().filter(|s| s.is_empty()) {
            slot.position.x += dx;
        }
    }

    /// Lock `digit` into slot `index` and take the slot out of collision detection.
    pub fn fill(&mut self, index: usize, digit: Digit) -> Result<FillOutcome, EntryError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(EntryError::SlotOutOfRange { index, len })?;

        match slot.state {
            SlotState::Filled(existing) => {
                log::debug!("slot {} already holds {}, ignoring {}", index, existing, digit);
                Ok(FillOutcome::AlreadyFilled)
            }
            SlotState::Empty => {
                slot.state = SlotState::Filled(digit);
                slot.collision_enabled = false;
                Ok(FillOutcome::Filled)
            }
        }
    }

    /// Hand the Empty slots' positions to their kinematic bodies.
    /// Filled slots get no new target, so their bodies stay put.
    pub fn sync_bodies(&self, session: &mut SimulationSession) {
        for slot in self.slots.iter().filter(|s| s.is_empty()) {
            session.set_kinematic_position(slot.entity, slot.position);
        }
    }

    fn empty_xs(&self) -> impl Iterator<Item = f32> + '_ {
        self.slots.iter().filter(|s| s.is_empty()).map(|s| s.position.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn digit(c: char) -> Digit {
        Digit::from_char(c).unwrap()
    }

    fn row(xs: &[f32], step: f32) -> SlotSet {
        SlotSet::new(
            xs.iter()
                .enumerate()
                .map(|(i, &x)| (EntityId(100 + i as u32), Vec2::new(x, 450.0))),
            step,
        )
    }

    const BOUNDS: SlotBounds = SlotBounds { min_x: 20.0, max_x: 480.0 };

    #[test]
    fn starts_empty_and_moving_right() {
        let set = row(&[50.0, 90.0, 130.0], 2.0);
        assert_eq!(set.len(), 3);
        assert_eq!(set.direction(), Direction::MovingRight);
        assert!(set.iter().all(|s| s.is_empty() && s.collision_enabled()));
        assert_eq!(set.get(1).unwrap().index, 1);
        assert_eq!(set.by_entity(EntityId(102)).unwrap().index, 2);
    }

    #[test]
    fn tick_moves_every_empty_slot_in_lock_step() {
        let mut set = row(&[50.0, 90.0, 130.0], 2.0);
        set.tick(BOUNDS);
        let xs: Vec<f32> = set.iter().map(|s| s.position().x).collect();
        assert_eq!(xs, vec![52.0, 92.0, 132.0]);
    }

    #[test]
    fn reverses_when_rightmost_reaches_right_bound() {
        let mut set = row(&[400.0, 440.0, 480.0], 2.0);
        set.tick(BOUNDS);
        assert_eq!(set.direction(), Direction::MovingLeft);
        assert_eq!(set.get(2).unwrap().position().x, 478.0);
        assert_eq!(set.get(0).unwrap().position().x, 398.0);
    }

    #[test]
    fn reverses_when_leftmost_reaches_left_bound() {
        let mut set = row(&[21.0, 61.0], 2.0);
        set.direction = Direction::MovingLeft;
        set.tick(BOUNDS);
        assert_eq!(set.direction(), Direction::MovingLeft);
        assert_eq!(set.get(0).unwrap().position().x, 19.0);
        set.tick(BOUNDS);
        assert_eq!(set.direction(), Direction::MovingRight);
        assert_eq!(set.get(0).unwrap().position().x, 21.0);
    }

    #[test]
    fn only_lead_slot_is_checked_against_the_bound() {
        // Trailing slot sits past the left bound while moving right: no reversal.
        let mut set = row(&[10.0, 200.0], 2.0);
        set.tick(BOUNDS);
        assert_eq!(set.direction(), Direction::MovingRight);
    }

    #[test]
    fn filled_slot_freezes_and_stops_leading() {
        let mut set = row(&[400.0, 440.0, 480.0], 2.0);
        assert_eq!(set.fill(2, digit('5')), Ok(FillOutcome::Filled));

        // The filled slot sits on the bound but the lead is now slot 1 at 440.
        set.tick(BOUNDS);
        assert_eq!(set.direction(), Direction::MovingRight);
        assert_eq!(set.get(2).unwrap().position().x, 480.0);
        assert_eq!(set.get(1).unwrap().position().x, 442.0);
        assert!(!set.get(2).unwrap().collision_enabled());
    }

    #[test]
    fn fully_filled_row_does_not_move() {
        let mut set = row(&[100.0, 140.0], 2.0);
        set.fill(0, digit('1')).unwrap();
        set.fill(1, digit('2')).unwrap();
        set.tick(BOUNDS);
        assert_eq!(set.get(0).unwrap().position().x, 100.0);
        assert_eq!(set.get(1).unwrap().position().x, 140.0);
    }

    #[test]
    fn second_fill_is_absorbed() {
        let mut set = row(&[100.0], 2.0);
        assert_eq!(set.fill(0, digit('3')), Ok(FillOutcome::Filled));
        assert_eq!(set.fill(0, digit('9')), Ok(FillOutcome::AlreadyFilled));
        assert_eq!(set.get(0).unwrap().state(), SlotState::Filled(digit('3')));
    }

    #[test]
    fn fill_out_of_range_is_an_error() {
        let mut set = row(&[100.0, 140.0], 2.0);
        assert_eq!(
            set.fill(2, digit('0')),
            Err(EntryError::SlotOutOfRange { index: 2, len: 2 })
        );
    }

    proptest! {
        #[test]
        fn first_fill_wins_and_state_never_reverts(
            ops in prop::collection::vec((0usize..10, 0u8..10), 0..64),
            ticks in 0usize..200,
        ) {
            let xs: Vec<f32> = (0..10).map(|i| 60.0 + i as f32 * 40.0).collect();
            let mut set = row(&xs, 1.5);
            let mut first: [Option<Digit>; 10] = [None; 10];

            for (i, (index, value)) in ops.into_iter().enumerate() {
                let d = Digit::new(value).unwrap();
                let before = set.get(index).unwrap().state();
                let outcome = set.fill(index, d).unwrap();
                match before {
                    SlotState::Empty => prop_assert_eq!(outcome, FillOutcome::Filled),
                    SlotState::Filled(_) => prop_assert_eq!(outcome, FillOutcome::AlreadyFilled),
                }
                first[index].get_or_insert(d);
                if i % 3 == 0 {
                    for _ in 0..(ticks % 7) {
                        set.tick(BOUNDS);
                    }
                }
                for (slot, expected) in set.iter().zip(first.iter()) {
                    prop_assert_eq!(slot.state().digit(), *expected);
                    prop_assert_eq!(slot.collision_enabled(), expected.is_none());
                }
            }
        }
    }
}
