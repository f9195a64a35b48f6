//! A deck shared between threads behind a single lock.

use crate::card::Card;
use crate::deck::CardDeck;
use crate::error::DeckError;
use crate::sync::Mutex;

/// A [`CardDeck`] guarded by one lock.
///
/// Every call takes the lock for its whole duration, so deals and undos from
/// different threads never interleave.
pub struct SharedDeck {
    deck: Mutex<CardDeck>,
}

impl SharedDeck {
    /// Wraps a deck.
    #[must_use]
    pub const fn new(deck: CardDeck) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }

    /// Shuffles and resets the deck.
    pub fn shuffle(&self) {
        self.deck.lock().shuffle();
    }

    /// Deals the next card, or [`Card::EMPTY`] when the deck is exhausted.
    pub fn deal(&self) -> Card {
        self.deck.lock().deal()
    }

    /// Returns the next card, only peeking at it when `leave_in_deck` is set.
    /// See [`CardDeck::next_card`].
    pub fn next_card(&self, leave_in_deck: bool) -> Card {
        self.deck.lock().next_card(leave_in_deck)
    }

    /// Returns the next card without dealing it.
    pub fn peek(&self) -> Card {
        self.deck.lock().peek()
    }

    /// Returns whether any cards are left to deal.
    pub fn has_more_cards(&self) -> bool {
        self.deck.lock().has_more_cards()
    }

    /// Deals the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if every card has been dealt.
    pub fn try_deal(&self) -> Result<Card, DeckError> {
        self.deck.lock().try_deal()
    }

    /// Steps back one dealt card. See [`CardDeck::undo`].
    pub fn undo(&self) -> Card {
        self.deck.lock().undo()
    }

    /// Returns the number of cards left to deal.
    pub fn cards_left(&self) -> usize {
        self.deck.lock().cards_left()
    }

    /// Returns a copy of the deck as it is now.
    pub fn snapshot(&self) -> CardDeck {
        self.deck.lock().clone()
    }

    /// Unwraps the deck.
    pub fn into_inner(self) -> CardDeck {
        self.deck.into_inner()
    }
}

impl From<CardDeck> for SharedDeck {
    fn from(deck: CardDeck) -> Self {
        Self::new(deck)
    }
}
