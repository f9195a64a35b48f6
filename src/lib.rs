//! Playing card decks and card hands with optional `no_std` support.
//!
//! The crate provides a [`CardDeck`] that builds, shuffles and deals one or
//! more decks (standard, with jokers, or pinochle), and a fixed-capacity
//! [`Hand`] that can keep its cards sorted in one of three orders.
//!
//! # Example
//!
//! ```
//! use playing_cards::{CardDeck, DeckOptions, Hand};
//!
//! let mut deck = CardDeck::new(DeckOptions::default(), 42);
//! deck.shuffle();
//!
//! let mut hand = Hand::default();
//! while !hand.is_full() {
//!     hand.add(deck.deal());
//! }
//! assert_eq!(deck.cards_left(), 47);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod image;
pub mod options;
pub mod shared;
mod shuffle;
mod sync;

// Re-export main types
pub use card::{Card, Color, Rank, Suit};
pub use deck::{CardDeck, PINOCHLE_DECK_SIZE, STANDARD_DECK_SIZE};
pub use error::{DeckError, HandError};
pub use hand::{FIRST_SLOT, Hand, NEXT_SLOT};
pub use image::{CardBack, CardPlaceholder, ImageKey, JokerImage};
pub use options::{
    CompareMode, DEFAULT_HAND_SIZE, DeckOption, DeckOptions, HandOptions, MAX_DECKS, MIN_DECKS,
    MIN_HAND_SIZE,
};
pub use shared::SharedDeck;
