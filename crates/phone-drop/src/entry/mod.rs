//! The phone-number entry rules: tokens, the slot row, catches and the
//! resulting digit sequence.

pub mod digit;
pub mod dispatch;
pub mod error;
pub mod layers;
pub mod resolve;
pub mod sequence;
pub mod slots;
pub mod token;

pub use digit::Digit;
pub use dispatch::{InteractionDispatcher, PointerAction};
pub use error::EntryError;
pub use resolve::{apply, resolve, Catch};
pub use sequence::EntrySequence;
pub use slots::{Direction, FillOutcome, Slot, SlotBounds, SlotSet, SlotState};
pub use token::{DigitToken, TokenFactory};
