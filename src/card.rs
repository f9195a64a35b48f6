//! Card types and derived card values.

use core::fmt;

/// Card suit.
///
/// Jokers only use [`Suit::Hearts`] (red) or [`Suit::Spades`] (black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Suit {
    /// No suit (sentinel cards only).
    #[default]
    None,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// The four real suits in deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Position of the suit in deck order (Clubs = 1, Spades = 4, None = 0).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    const fn name(self) -> &'static str {
        match self {
            Self::None => "?",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rank {
    /// No rank (sentinel cards only).
    #[default]
    None,
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Joker.
    Joker,
}

impl Rank {
    /// Ace through King, in ascending order.
    pub const STANDARD: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Nine through King, the ranks doubled in a pinochle deck.
    pub const PINOCHLE: [Self; 5] = [Self::Nine, Self::Ten, Self::Jack, Self::Queen, Self::King];

    const fn name(self) -> &'static str {
        match self {
            Self::None => "?",
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Joker => "Joker",
        }
    }
}

/// Card color, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// No suit.
    Unknown,
    /// Diamonds or Hearts.
    Red,
    /// Clubs or Spades.
    Black,
}

/// A playing card.
///
/// Two sentinel values share this type: [`Card::EMPTY`] marks a slot with no
/// card in it, and [`Card::BAD`] is handed back for invalid arguments. Neither
/// equals any real card or the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Empty-slot marker (no suit, no rank).
    pub const EMPTY: Self = Self::new(Suit::None, Rank::None);
    /// Bad-card marker (no suit, joker rank).
    pub const BAD: Self = Self::new(Suit::None, Rank::Joker);
    /// The red joker.
    pub const RED_JOKER: Self = Self::new(Suit::Hearts, Rank::Joker);
    /// The black joker.
    pub const BLACK_JOKER: Self = Self::new(Suit::Spades, Rank::Joker);

    /// Creates a new card.
    ///
    /// Note: no combination is rejected here. Use [`Card::is_valid`] to tell
    /// real cards apart from the sentinels.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns whether this is the empty-slot marker.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.suit, Suit::None) && matches!(self.rank, Rank::None)
    }

    /// Returns whether this is the bad-card marker.
    #[must_use]
    pub const fn is_bad(&self) -> bool {
        matches!(self.suit, Suit::None) && matches!(self.rank, Rank::Joker)
    }

    /// Returns whether the card has both a suit and a rank.
    ///
    /// Both sentinels are invalid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self.suit, Suit::None) && !matches!(self.rank, Rank::None)
    }

    /// Returns whether the card is a joker (of either color).
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.rank, Rank::Joker) && !matches!(self.suit, Suit::None)
    }

    /// Returns the color of the card.
    #[must_use]
    pub const fn color(&self) -> Color {
        match self.suit {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::None => Color::Unknown,
        }
    }

    /// Returns the point value of the card (Ace = 1 through King = 13).
    ///
    /// Jokers and the sentinels are worth 0.
    #[must_use]
    pub const fn point_value(&self) -> u8 {
        match self.rank {
            Rank::Joker => 0,
            rank => rank as u8,
        }
    }

    /// Returns the point value with Jack, Queen and King counted as 10.
    #[must_use]
    pub const fn point_value_face10(&self) -> u8 {
        let value = self.point_value();
        if value > 10 { 10 } else { value }
    }

    /// Returns the position of the card in a standard ordered deck.
    ///
    /// Clubs are 1-13, Diamonds 14-26, Hearts 27-39 and Spades 40-52.
    /// Jokers and anything without both a suit and a rank return 0.
    #[must_use]
    pub const fn deck_value(&self) -> u8 {
        if !self.is_valid() || self.is_joker() {
            return 0;
        }
        Rank::King as u8 * (self.suit.index() - 1) + self.rank as u8
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rank, self.suit) {
            (Rank::Joker, Suit::Hearts) => f.write_str("Red Joker"),
            (Rank::Joker, Suit::Spades) => f.write_str("Black Joker"),
            (Rank::Joker | Rank::None, _) => f.write_str("Not a valid card/No card"),
            (rank, Suit::None) => write!(f, "{} of ?0?", rank.name()),
            (rank, suit) => write!(f, "{} of {}", rank.name(), suit.name()),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
