use std::fmt;

use super::error::EntryError;

/// One decimal digit, `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// All ten digits in keypad order.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Digit(value))
    }

    /// Parse a single character. Only ASCII `'0'..='9'` is accepted.
    pub fn from_char(c: char) -> Result<Self, EntryError> {
        if c.is_ascii_digit() {
            Ok(Digit(c as u8 - b'0'))
        } else {
            Err(EntryError::InvalidDigit(c))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<char> for Digit {
    type Error = EntryError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Digit::from_char(c)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_decimal_digit() {
        for (i, c) in "0123456789".chars().enumerate() {
            let d = Digit::from_char(c).unwrap();
            assert_eq!(d.value() as usize, i);
            assert_eq!(d.as_char(), c);
        }
    }

    #[test]
    fn rejects_non_digits() {
        for c in ['a', ' ', '-', '+', '٣', 'x'] {
            assert_eq!(Digit::from_char(c), Err(EntryError::InvalidDigit(c)));
        }
    }

    #[test]
    fn new_bounds() {
        assert!(Digit::new(9).is_some());
        assert!(Digit::new(10).is_none());
    }
}
