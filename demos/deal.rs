//! Deals a few hands from a freshly shuffled deck.
//!
//! Usage: `cargo run --example deal -- [decks] [none|jokers|pinochle]`

use std::time::{SystemTime, UNIX_EPOCH};

use playing_cards::{CardDeck, DeckOption, DeckOptions, Hand, HandOptions};

const PLAYERS: usize = 4;

fn main() {
    let mut args = std::env::args().skip(1);
    let decks = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(1);
    let option = match args.next().as_deref() {
        Some("jokers") => DeckOption::IncludeJokers,
        Some("pinochle") => DeckOption::PinochleDeck,
        _ => DeckOption::None,
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = CardDeck::new(
        DeckOptions::default().with_decks(decks).with_option(option),
        seed,
    );
    println!("{deck}");

    deck.shuffle();
    let hand_size = deck.len() / PLAYERS;
    let mut hands: Vec<Hand> = (0..PLAYERS)
        .map(|_| Hand::with_options(HandOptions::default().with_capacity(hand_size)))
        .collect();

    'deal: loop {
        for hand in &mut hands {
            if !hand.add(deck.deal()) {
                break 'deal;
            }
        }
    }

    for (player, hand) in hands.iter().enumerate() {
        println!("Player {}: {hand}", player + 1);
    }
    println!("{deck}");
}
