//! Fixed-capacity card hands.

extern crate alloc;

use core::fmt;

use alloc::boxed::Box;
use rand::Rng;

use crate::card::{Card, Rank, Suit};
use crate::error::HandError;
use crate::options::{CompareMode, HandOptions, MIN_HAND_SIZE};
use crate::shuffle::pseudo_shuffle;

/// Slot index of the first card in a hand.
pub const FIRST_SLOT: usize = 0;
/// Slot index of the card after the first one.
pub const NEXT_SLOT: usize = 1;

impl CompareMode {
    /// Maps a card to the key a sorted hand orders by. Lower keys go first.
    #[must_use]
    pub const fn key(self, card: &Card) -> u8 {
        match self {
            Self::DeckValue => card.deck_value(),
            Self::SuitsEqual => card.point_value(),
            Self::FaceCards10 => card.point_value_face10(),
        }
    }
}

/// The cards a player is holding.
///
/// A hand has a fixed number of slots, each holding a card or
/// [`Card::EMPTY`]. Sorted hands put every added card into order according
/// to their [`CompareMode`] and keep empty slots at the back.
///
/// Cloning a hand gives an independent copy, which callers can keep around
/// to undo changes to the hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Card slots.
    slots: Box<[Card]>,
    /// Number of occupied slots.
    count: usize,
    /// Whether cards are sorted as they are added.
    sorted: bool,
    /// Ordering used when sorted.
    compare: CompareMode,
}

impl Hand {
    /// Creates an empty hand with `capacity` slots.
    ///
    /// A capacity below 1 is raised to 1.
    #[must_use]
    pub fn new(capacity: usize, sorted: bool) -> Self {
        Self::with_options(
            HandOptions::default()
                .with_capacity(capacity)
                .with_sorted(sorted),
        )
    }

    /// Creates an empty hand from the given options.
    #[must_use]
    pub fn with_options(options: HandOptions) -> Self {
        let capacity = options.capacity.max(MIN_HAND_SIZE);
        Self {
            slots: alloc::vec![Card::EMPTY; capacity].into_boxed_slice(),
            count: 0,
            sorted: options.sorted,
            compare: options.compare,
        }
    }

    /// Returns the number of slots in the hand.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns whether the hand holds no cards.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns whether every slot holds a card.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Returns whether the hand is kept sorted.
    #[must_use]
    pub const fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Returns the ordering used by a sorted hand.
    #[must_use]
    pub const fn compare_mode(&self) -> CompareMode {
        self.compare
    }

    /// Sets the ordering used by a sorted hand.
    ///
    /// Cards already in the hand are reordered on the next add.
    pub const fn set_compare_mode(&mut self, compare: CompareMode) {
        self.compare = compare;
    }

    /// Returns every slot, empty ones included.
    #[must_use]
    pub fn slots(&self) -> &[Card] {
        &self.slots
    }

    /// Iterates over the cards in the hand, skipping empty slots.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.slots.iter().filter(|card| !card.is_empty())
    }

    /// Adds a card to the first empty slot, then sorts a sorted hand.
    ///
    /// Returns `false` and leaves the hand alone if it is full or the card
    /// is not a valid card.
    pub fn add(&mut self, card: Card) -> bool {
        self.try_add(card).is_ok()
    }

    /// Adds a card to the first empty slot, then sorts a sorted hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is full or the card is a sentinel.
    pub fn try_add(&mut self, card: Card) -> Result<(), HandError> {
        if self.is_full() {
            return Err(HandError::Full);
        }
        if !card.is_valid() {
            return Err(HandError::InvalidCard);
        }

        let slot = self
            .slots
            .iter()
            .position(Card::is_empty)
            .ok_or(HandError::Full)?;
        self.slots[slot] = card;
        self.count += 1;
        log::trace!("added {card} to slot {slot}");

        if self.sorted {
            self.sort();
        }
        Ok(())
    }

    /// Removes the card at `slot` and returns it.
    ///
    /// Returns [`Card::BAD`] for a slot outside the hand, and
    /// [`Card::EMPTY`] if the slot was already empty.
    pub fn remove(&mut self, slot: usize) -> Card {
        self.try_remove(slot).unwrap_or(Card::BAD)
    }

    /// Removes the card at `slot` and returns it.
    ///
    /// Removing from an empty slot returns [`Card::EMPTY`] and leaves the
    /// count alone.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::SlotOutOfRange`] if `slot` is outside the hand.
    pub fn try_remove(&mut self, slot: usize) -> Result<Card, HandError> {
        self.check_slot(slot)?;

        let card = core::mem::take(&mut self.slots[slot]);
        if card.is_empty() {
            log::warn!("removed empty slot {slot}");
        } else {
            self.count -= 1;
            log::trace!("removed {card} from slot {slot}");
        }
        Ok(card)
    }

    /// Empties every slot.
    pub fn remove_all(&mut self) {
        self.slots.fill(Card::EMPTY);
        self.count = 0;
    }

    /// Moves every card to the front of the hand, keeping their order.
    pub fn compress(&mut self) {
        let mut write = FIRST_SLOT;
        for read in 0..self.slots.len() {
            if !self.slots[read].is_empty() {
                self.slots.swap(write, read);
                write += 1;
            }
        }
    }

    /// Returns the card at `slot` without removing it.
    ///
    /// Returns [`Card::BAD`] for a slot outside the hand.
    #[must_use]
    pub fn card_at(&self, slot: usize) -> Card {
        self.try_card_at(slot).unwrap_or(Card::BAD)
    }

    /// Returns the card at `slot` without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::SlotOutOfRange`] if `slot` is outside the hand.
    pub fn try_card_at(&self, slot: usize) -> Result<Card, HandError> {
        self.check_slot(slot)?;
        Ok(self.slots[slot])
    }

    /// Replaces the card at `slot` and returns the card that was there.
    ///
    /// Returns [`Card::BAD`] and leaves the hand alone if the slot is
    /// outside the hand or `card` is not a valid card.
    pub fn replace(&mut self, card: Card, slot: usize) -> Card {
        self.try_replace(card, slot).unwrap_or(Card::BAD)
    }

    /// Replaces the card at `slot` and returns the card that was there.
    ///
    /// A sorted hand sorts the new card into place; an unsorted hand puts
    /// it in `slot`.
    ///
    /// # Errors
    ///
    /// Returns an error if `card` is a sentinel or `slot` is outside the hand.
    pub fn try_replace(&mut self, card: Card, slot: usize) -> Result<Card, HandError> {
        if !card.is_valid() {
            return Err(HandError::InvalidCard);
        }

        let old = self.try_remove(slot)?;
        if self.sorted {
            self.try_add(card)?;
        } else {
            self.slots[slot] = card;
            self.count += 1;
        }
        Ok(old)
    }

    /// Returns whether the hand holds this exact card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        card.is_valid() && self.cards().any(|held| held == card)
    }

    /// Returns whether the hand holds any card of `suit`.
    ///
    /// Always `false` for [`Suit::None`].
    #[must_use]
    pub fn contains_suit(&self, suit: Suit) -> bool {
        suit != Suit::None && self.cards().any(|held| held.suit() == suit)
    }

    /// Returns whether the hand holds any card of `rank`.
    ///
    /// Always `false` for [`Rank::None`].
    #[must_use]
    pub fn contains_rank(&self, rank: Rank) -> bool {
        rank != Rank::None && self.cards().any(|held| held.rank() == rank)
    }

    /// Removes and returns the first card in the hand (the card is played).
    ///
    /// Returns [`Card::EMPTY`] if the hand holds no cards.
    pub fn first_available_card(&mut self) -> Card {
        if self.is_empty() {
            return Card::EMPTY;
        }

        let first = self.slots.iter().position(|card| !card.is_empty());
        first.map_or(Card::EMPTY, |slot| self.remove(slot))
    }

    /// Shuffles the cards of an unsorted hand, then compresses it.
    ///
    /// Does nothing for sorted hands or hands with fewer than two cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.sorted || self.count <= 1 {
            return;
        }

        pseudo_shuffle(&mut self.slots, rng);
        self.compress();
    }

    /// Sorts the slots by the compare mode, empty slots last.
    fn sort(&mut self) {
        if self.count <= 1 {
            return;
        }

        let len = self.slots.len();
        for i in FIRST_SLOT..len - 1 {
            for j in (i + 1)..len {
                if self.goes_after(&self.slots[i], &self.slots[j]) {
                    self.slots.swap(i, j);
                }
            }
        }
    }

    /// Returns whether `first` belongs after `second`.
    fn goes_after(&self, first: &Card, second: &Card) -> bool {
        match (first.is_empty(), second.is_empty()) {
            (true, _) => true,
            (false, true) => false,
            (false, false) => self.compare.key(first) > self.compare.key(second),
        }
    }

    fn check_slot(&self, slot: usize) -> Result<(), HandError> {
        if slot < self.slots.len() {
            Ok(())
        } else {
            Err(HandError::SlotOutOfRange {
                slot,
                capacity: self.slots.len(),
            })
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::with_options(HandOptions::default())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CardHand: [")?;
        for (slot, card) in self.slots.iter().enumerate() {
            if slot > FIRST_SLOT {
                f.write_str(", ")?;
            }
            if card.is_empty() {
                write!(f, "({slot}) Empty")?;
            } else {
                write!(f, "({slot}) {card}")?;
            }
        }
        f.write_str("]")
    }
}
