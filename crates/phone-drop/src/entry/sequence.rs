use std::fmt;

use crate::entry::digit::Digit;
use crate::entry::slots::SlotSet;

/// The entered number as read off the slot row, left to right by slot index.
/// Derived on demand; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySequence {
    digits: Vec<Option<Digit>>,
}

impl EntrySequence {
    pub const PLACEHOLDER: char = '_';

    pub fn from_slots(slots: &SlotSet) -> Self {
        Self {
            digits: slots.iter().map(|s| s.state().digit()).collect(),
        }
    }

    /// One entry per slot; `None` where the slot is still Empty.
    pub fn digits(&self) -> &[Option<Digit>] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn filled_count(&self) -> usize {
        self.digits.iter().filter(|d| d.is_some()).count()
    }

    /// True iff every slot holds a digit.
    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    /// Render with `placeholder` standing in for Empty slots.
    pub fn to_text(&self, placeholder: char) -> String {
        self.digits
            .iter()
            .map(|d| d.map_or(placeholder, Digit::as_char))
            .collect()
    }

    /// The finished number, once every slot is filled.
    pub fn number(&self) -> Option<String> {
        self.digits.iter().map(|d| d.map(Digit::as_char)).collect()
    }
}

impl fmt::Display for EntrySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(Self::PLACEHOLDER))
    }
}

impl SlotSet {
    /// Current entry, one position per slot.
    pub fn current_sequence(&self) -> EntrySequence {
        EntrySequence::from_slots(self)
    }

    /// True iff every slot is Filled.
    pub fn is_complete(&self) -> bool {
        self.iter().all(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use glam::Vec2;

    fn row(n: u32) -> SlotSet {
        SlotSet::new((0..n).map(|i| (EntityId(i + 1), Vec2::new(i as f32 * 40.0, 0.0))), 1.0)
    }

    fn d(c: char) -> Digit {
        Digit::from_char(c).unwrap()
    }

    #[test]
    fn empty_row_is_all_placeholders() {
        let set = row(10);
        let seq = set.current_sequence();
        assert_eq!(seq.len(), 10);
        assert_eq!(seq.filled_count(), 0);
        assert_eq!(seq.to_string(), "__________");
        assert!(!seq.is_complete());
        assert!(!set.is_complete());
        assert_eq!(seq.number(), None);
    }

    #[test]
    fn filled_positions_follow_slot_index() {
        let mut set = row(5);
        set.fill(3, d('7')).unwrap();
        set.fill(0, d('0')).unwrap();

        let seq = set.current_sequence();
        assert_eq!(seq.filled_count(), 2);
        assert_eq!(seq.digits()[3], Some(d('7')));
        assert_eq!(seq.to_text('*'), "0**7*");
    }

    #[test]
    fn complete_only_when_every_slot_is_filled() {
        let mut set = row(11);
        for (i, c) in "0101234567".chars().enumerate() {
            set.fill(i, d(c)).unwrap();
            assert!(!set.is_complete());
        }
        set.fill(10, d('8')).unwrap();
        assert!(set.is_complete());
        assert_eq!(set.current_sequence().number().as_deref(), Some("01012345678"));
    }

    #[test]
    fn reading_does_not_mutate() {
        let mut set = row(3);
        set.fill(1, d('4')).unwrap();
        let a = set.current_sequence();
        let b = set.current_sequence();
        assert_eq!(a, b);
        assert_eq!(set.get(1).unwrap().state().digit(), Some(d('4')));
    }
}
