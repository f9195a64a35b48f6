//! Error types for deck and hand operations.

use thiserror::Error;

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Every card has been dealt.
    #[error("no cards left in the deck")]
    Exhausted,
    /// No dealt card is available to step back to.
    #[error("nothing to undo")]
    NothingToUndo,
}

/// Errors that can occur when changing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Every slot is occupied.
    #[error("hand is full")]
    Full,
    /// The card is a sentinel, not a real card.
    #[error("not a valid card")]
    InvalidCard,
    /// Slot index is outside the hand.
    #[error("slot {slot} is out of range for a hand of {capacity}")]
    SlotOutOfRange {
        /// The requested slot.
        slot: usize,
        /// Number of slots in the hand.
        capacity: usize,
    },
}
