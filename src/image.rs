//! Image resource numbers for card artwork.
//!
//! Loading and caching the images is left to the presentation layer; this
//! module only maps cards and other artwork to the number each image is
//! stored under (`<number>.gif`).

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::card::{Card, Rank, Suit};

/// Card back designs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardBack {
    /// Spheres.
    Spheres = 200,
    /// Plain blue.
    Blue,
    /// Plain red.
    Red,
    /// Mountains.
    Mountains,
    /// Checkerboard.
    CheckerBoard,
    /// Music notes.
    Music,
    /// Beany.
    Beany,
    /// Duke.
    Duke,
}

/// Placeholder images for empty piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardPlaceholder {
    /// Red X (pile can't be used).
    RedX = 300,
    /// Green circle (pile can be recycled).
    GreenCircle,
    /// Gray outline.
    Gray,
    /// White outline.
    White,
    /// Club outline.
    Club,
    /// Diamond outline.
    Diamond,
    /// Heart outline.
    Heart,
    /// Spade outline.
    Spade,
}

/// Joker images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JokerImage {
    /// The red joker (Hearts).
    Red = 400,
    /// The black joker (Spades).
    Black,
}

/// Anything that has an image resource number.
pub trait ImageKey {
    /// Returns the image number, or `None` if there is no image.
    fn image_key(&self) -> Option<u16>;

    /// Returns the resource file name, such as `"14.gif"`.
    fn resource_name(&self) -> Option<String> {
        self.image_key().map(|key| format!("{key}.gif"))
    }
}

impl ImageKey for Card {
    /// Real cards map to their deck value (1-52) and jokers to their
    /// [`JokerImage`]. The sentinels have no image.
    fn image_key(&self) -> Option<u16> {
        match (self.rank(), self.suit()) {
            (Rank::Joker, Suit::Hearts) => JokerImage::Red.image_key(),
            (Rank::Joker, Suit::Spades) => JokerImage::Black.image_key(),
            _ => match self.deck_value() {
                0 => None,
                value => Some(u16::from(value)),
            },
        }
    }
}

impl ImageKey for CardBack {
    fn image_key(&self) -> Option<u16> {
        Some(*self as u16)
    }
}

impl ImageKey for CardPlaceholder {
    fn image_key(&self) -> Option<u16> {
        Some(*self as u16)
    }
}

impl ImageKey for JokerImage {
    fn image_key(&self) -> Option<u16> {
        Some(*self as u16)
    }
}
