use crate::entry::digit::Digit;

/// What a body stands for in the entry widget.
/// Attached to every entity at spawn time and never derived from display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRole {
    /// Static spawn trigger on the keypad row.
    KeypadTile(Digit),
    /// A tapped digit travelling toward the slots.
    DigitToken(Digit),
    /// Position `index` of the target sequence.
    Slot(usize),
    /// Walls and maze pieces.
    Obstacle,
}

impl BodyRole {
    pub fn is_token(&self) -> bool {
        matches!(self, BodyRole::DigitToken(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_digit_tokens_are_tokens() {
        let d = Digit::new(4).unwrap();
        assert!(!BodyRole::Slot(2).is_token());
        assert!(!BodyRole::Obstacle.is_token());
        assert!(BodyRole::DigitToken(d).is_token());
        assert!(!BodyRole::KeypadTile(d).is_token());
    }
}
