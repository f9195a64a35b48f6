//! Deck and hand configuration options.

/// Minimum number of decks combined into one [`CardDeck`](crate::CardDeck).
pub const MIN_DECKS: u8 = 1;
/// Maximum number of decks combined into one [`CardDeck`](crate::CardDeck).
pub const MAX_DECKS: u8 = 7;
/// Default number of slots in a [`Hand`](crate::Hand).
pub const DEFAULT_HAND_SIZE: usize = 5;
/// Minimum number of slots in a [`Hand`](crate::Hand).
pub const MIN_HAND_SIZE: usize = 1;

/// Extra composition rules for a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeckOption {
    /// Standard 52-card decks.
    #[default]
    None,
    /// Standard decks plus one red and one black joker.
    ///
    /// Only two jokers are added no matter how many decks are combined.
    IncludeJokers,
    /// Pinochle decks: two of each Nine through King plus two Aces per suit.
    PinochleDeck,
}

/// How a sorted [`Hand`](crate::Hand) orders its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompareMode {
    /// Ace through King with Clubs first, then Diamonds, Hearts and Spades.
    DeckValue,
    /// Ace through King, suit ignored.
    #[default]
    SuitsEqual,
    /// Same as `SuitsEqual`, except Jack, Queen and King count as 10.
    FaceCards10,
}

/// Configuration options for a [`CardDeck`](crate::CardDeck).
///
/// ```
/// use playing_cards::{DeckOption, DeckOptions};
///
/// let options = DeckOptions::default().with_decks(2).with_jokers();
/// assert_eq!(options.decks, 2);
/// assert_eq!(options.option, DeckOption::IncludeJokers);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of decks to combine (1 to 7, 0 means the default of 1).
    pub decks: u8,
    /// Composition option.
    pub option: DeckOption,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: MIN_DECKS,
            option: DeckOption::None,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use playing_cards::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the composition option.
    #[must_use]
    pub const fn with_option(mut self, option: DeckOption) -> Self {
        self.option = option;
        self
    }

    /// Adds the two jokers.
    #[must_use]
    pub const fn with_jokers(self) -> Self {
        self.with_option(DeckOption::IncludeJokers)
    }

    /// Builds pinochle decks instead of standard ones.
    ///
    /// # Example
    ///
    /// ```
    /// use playing_cards::{DeckOption, DeckOptions};
    ///
    /// let options = DeckOptions::default().pinochle();
    /// assert_eq!(options.option, DeckOption::PinochleDeck);
    /// ```
    #[must_use]
    pub const fn pinochle(self) -> Self {
        self.with_option(DeckOption::PinochleDeck)
    }

    /// Returns the deck count clamped into `MIN_DECKS..=MAX_DECKS`.
    #[must_use]
    pub fn effective_decks(&self) -> u8 {
        match self.decks {
            0 => MIN_DECKS,
            n if n > MAX_DECKS => {
                log::warn!("deck count {n} above {MAX_DECKS}, clamping");
                MAX_DECKS
            }
            n => n,
        }
    }
}

/// Configuration options for a [`Hand`](crate::Hand).
///
/// ```
/// use playing_cards::{CompareMode, HandOptions};
///
/// let options = HandOptions::default()
///     .with_capacity(13)
///     .with_compare(CompareMode::DeckValue);
/// assert_eq!(options.capacity, 13);
/// assert!(options.sorted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandOptions {
    /// Number of slots in the hand (at least 1).
    pub capacity: usize,
    /// Whether cards are sorted into place as they are added.
    pub sorted: bool,
    /// Initial ordering for sorted hands.
    pub compare: CompareMode,
}

impl Default for HandOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HAND_SIZE,
            sorted: true,
            compare: CompareMode::SuitsEqual,
        }
    }
}

impl HandOptions {
    /// Sets the number of slots.
    ///
    /// # Example
    ///
    /// ```
    /// use playing_cards::HandOptions;
    ///
    /// let options = HandOptions::default().with_capacity(7);
    /// assert_eq!(options.capacity, 7);
    /// ```
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets whether the hand is kept sorted.
    ///
    /// # Example
    ///
    /// ```
    /// use playing_cards::HandOptions;
    ///
    /// let options = HandOptions::default().with_sorted(false);
    /// assert_eq!(options.sorted, false);
    /// ```
    #[must_use]
    pub const fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Sets the initial compare mode.
    #[must_use]
    pub const fn with_compare(mut self, compare: CompareMode) -> Self {
        self.compare = compare;
        self
    }
}
