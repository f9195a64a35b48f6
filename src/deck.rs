//! Deck composition, shuffling and dealing.

extern crate alloc;

use core::fmt;

use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank, Suit};
use crate::error::DeckError;
use crate::options::{DeckOption, DeckOptions};
use crate::shuffle::pseudo_shuffle;

/// Number of cards in a standard deck (without jokers).
pub const STANDARD_DECK_SIZE: usize = 52;
/// Number of cards in a pinochle deck.
pub const PINOCHLE_DECK_SIZE: usize = 48;

/// One or more decks of playing cards dealt in order from a cursor.
///
/// The deck is built in suit-major, rank-minor order and is not randomized
/// until [`CardDeck::shuffle`] is called. Shuffling also resets the deck so
/// every card can be dealt again.
#[derive(Debug, Clone)]
pub struct CardDeck {
    /// Cards in the deck, dealt from index `next`.
    cards: Vec<Card>,
    /// Index of the next card to deal.
    next: usize,
    /// Number of real cards in the deck.
    last: usize,
    /// Number of decks combined.
    decks: u8,
    /// Whether the deck has ever been shuffled.
    shuffled: bool,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl CardDeck {
    /// Creates a new, unshuffled deck. `seed` drives every later shuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use playing_cards::{CardDeck, DeckOptions};
    ///
    /// let deck = CardDeck::new(DeckOptions::default().with_decks(2), 7);
    /// assert_eq!(deck.cards_left(), 104);
    /// assert!(!deck.is_shuffled());
    /// ```
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new, unshuffled deck that shuffles with the given generator.
    #[must_use]
    pub fn with_rng(options: DeckOptions, rng: ChaCha8Rng) -> Self {
        let decks = options.effective_decks();
        let cards = Self::build(decks, options.option);
        let last = cards.len();

        log::debug!(
            "built deck: decks={decks} option={:?} cards={last}",
            options.option
        );

        Self {
            cards,
            next: 0,
            last,
            decks,
            shuffled: false,
            rng,
        }
    }

    /// Builds the ordered card sequence for the given composition.
    fn build(decks: u8, option: DeckOption) -> Vec<Card> {
        let per_deck = match option {
            DeckOption::PinochleDeck => PINOCHLE_DECK_SIZE,
            DeckOption::None | DeckOption::IncludeJokers => STANDARD_DECK_SIZE,
        };
        let mut cards = Vec::with_capacity(decks as usize * per_deck + 2);

        if option == DeckOption::PinochleDeck {
            for _ in 0..decks {
                for _ in 0..2 {
                    for suit in Suit::ALL {
                        for rank in Rank::PINOCHLE {
                            cards.push(Card::new(suit, rank));
                        }
                    }
                }
            }
            // Aces go after the doubled Nine-King run.
            for _ in 0..decks {
                for suit in Suit::ALL {
                    cards.push(Card::new(suit, Rank::Ace));
                    cards.push(Card::new(suit, Rank::Ace));
                }
            }
        } else {
            for _ in 0..decks {
                for suit in Suit::ALL {
                    for rank in Rank::STANDARD {
                        cards.push(Card::new(suit, rank));
                    }
                }
            }
        }

        if option == DeckOption::IncludeJokers {
            cards.push(Card::RED_JOKER);
            cards.push(Card::BLACK_JOKER);
        }

        cards
    }

    /// Shuffles the deck with its own generator and resets it.
    ///
    /// Should be called before dealing, since a new deck is in order.
    pub fn shuffle(&mut self) {
        self.reset();
        pseudo_shuffle(&mut self.cards[..self.last], &mut self.rng);
    }

    /// Shuffles the deck with a caller-provided generator and resets it.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset();
        pseudo_shuffle(&mut self.cards[..self.last], rng);
    }

    fn reset(&mut self) {
        log::debug!("shuffling deck of {} cards", self.last);
        self.next = 0;
        self.shuffled = true;
    }

    /// Returns whether any cards are left to deal.
    #[must_use]
    pub const fn has_more_cards(&self) -> bool {
        self.next < self.last
    }

    /// Returns the next card, or [`Card::EMPTY`] when the deck is exhausted.
    ///
    /// With `leave_in_deck` set the card is only peeked at and the cursor
    /// does not move.
    pub fn next_card(&mut self, leave_in_deck: bool) -> Card {
        if !self.has_more_cards() {
            return Card::EMPTY;
        }

        let card = self.cards[self.next];
        if !leave_in_deck {
            self.next += 1;
            log::trace!("dealt {card}, {} left", self.cards_left());
        }
        card
    }

    /// Deals the next card, or [`Card::EMPTY`] when the deck is exhausted.
    pub fn deal(&mut self) -> Card {
        self.next_card(false)
    }

    /// Returns the next card without dealing it.
    #[must_use]
    pub fn peek(&self) -> Card {
        if self.has_more_cards() {
            self.cards[self.next]
        } else {
            Card::EMPTY
        }
    }

    /// Deals the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if every card has been dealt.
    pub fn try_deal(&mut self) -> Result<Card, DeckError> {
        if self.has_more_cards() {
            Ok(self.deal())
        } else {
            Err(DeckError::Exhausted)
        }
    }

    /// Steps back one dealt card and returns the card now available again.
    ///
    /// Returns [`Card::EMPTY`] if nothing was dealt, or if only the top card
    /// was dealt (the cursor is still reset to the top in that case).
    /// Shuffling clears the undo history.
    pub fn undo(&mut self) -> Card {
        self.try_undo().unwrap_or(Card::EMPTY)
    }

    /// Steps back one dealt card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NothingToUndo`] when fewer than two cards have
    /// been dealt. With exactly one card dealt the cursor still moves back
    /// to the top.
    pub fn try_undo(&mut self) -> Result<Card, DeckError> {
        match self.next {
            0 => Err(DeckError::NothingToUndo),
            1 => {
                self.next = 0;
                Err(DeckError::NothingToUndo)
            }
            n => {
                self.next = n - 2;
                let card = self.cards[self.next];
                log::trace!("undo back to {card}");
                Ok(card)
            }
        }
    }

    /// Returns the full card sequence in its current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the deck has been shuffled at least once.
    #[must_use]
    pub const fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Returns the number of decks combined in this deck.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the number of cards in the deck, dealt or not.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.last
    }

    /// Returns whether the deck holds no cards at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last == 0
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub const fn cards_left(&self) -> usize {
        self.last - self.next
    }
}

impl Default for CardDeck {
    fn default() -> Self {
        Self::new(DeckOptions::default(), 0)
    }
}

impl fmt::Display for CardDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CardDeck: (Decks-{}, Number of Cards-{}, CurrentCard-{})",
            self.decks, self.last, self.next
        )
    }
}
