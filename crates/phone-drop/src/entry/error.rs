use thiserror::Error;

/// Errors surfaced synchronously by the entry state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryError {
    /// A spawn request named something other than a decimal digit.
    #[error("invalid digit {0:?}: expected one of '0'..='9'")]
    InvalidDigit(char),
    /// A fill addressed a slot the set does not have.
    #[error("slot index {index} out of range for {len} slots")]
    SlotOutOfRange { index: usize, len: usize },
}
