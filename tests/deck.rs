//! Deck integration tests.

use std::collections::HashMap;

use playing_cards::{
    Card, CardDeck, DeckError, DeckOption, DeckOptions, MAX_DECKS, Rank, STANDARD_DECK_SIZE,
    SharedDeck, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for &card in cards {
        *counts.entry(card).or_insert(0) += 1;
    }
    counts
}

#[test]
fn standard_deck_has_each_card_once() {
    let deck = CardDeck::new(DeckOptions::default(), 1);
    assert_eq!(deck.len(), STANDARD_DECK_SIZE);
    assert_eq!(deck.cards_left(), 52);
    assert_eq!(deck.decks(), 1);

    let counts = counts(deck.cards());
    assert_eq!(counts.len(), 52);
    for suit in Suit::ALL {
        for rank in Rank::STANDARD {
            assert_eq!(counts[&Card::new(suit, rank)], 1);
        }
    }
}

#[test]
fn new_deck_is_in_order() {
    let deck = CardDeck::new(DeckOptions::default(), 1);
    assert!(!deck.is_shuffled());
    assert_eq!(deck.cards()[0], Card::new(Suit::Clubs, Rank::Ace));
    assert_eq!(deck.cards()[13], Card::new(Suit::Diamonds, Rank::Ace));
    assert_eq!(deck.cards()[51], Card::new(Suit::Spades, Rank::King));
}

#[test]
fn jokers_are_never_multiplied() {
    let deck = CardDeck::new(DeckOptions::default().with_decks(2).with_jokers(), 1);
    assert_eq!(deck.len(), 106);

    let counts = counts(deck.cards());
    assert_eq!(counts[&Card::RED_JOKER], 1);
    assert_eq!(counts[&Card::BLACK_JOKER], 1);
    assert_eq!(counts[&Card::new(Suit::Hearts, Rank::Seven)], 2);
}

#[test]
fn pinochle_deck_composition() {
    let deck = CardDeck::new(DeckOptions::default().pinochle(), 1);
    assert_eq!(deck.len(), 48);

    let counts = counts(deck.cards());
    assert_eq!(counts[&Card::new(Suit::Clubs, Rank::Ace)], 2);
    for suit in Suit::ALL {
        for rank in [
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ] {
            assert_eq!(counts[&Card::new(suit, rank)], 2);
        }
    }
    assert!(deck.cards().iter().all(|card| card.rank() != Rank::Two));
    assert!(!deck.cards().iter().any(Card::is_joker));
}

#[test]
fn pinochle_scales_with_deck_count() {
    let deck = CardDeck::new(DeckOptions::default().pinochle().with_decks(3), 1);
    assert_eq!(deck.len(), 144);
    assert_eq!(counts(deck.cards())[&Card::new(Suit::Spades, Rank::Ace)], 6);
}

#[test]
fn deck_count_is_clamped() {
    let deck = CardDeck::new(DeckOptions::default().with_decks(0), 1);
    assert_eq!(deck.decks(), 1);
    assert_eq!(deck.len(), 52);

    let deck = CardDeck::new(DeckOptions::default().with_decks(12), 1);
    assert_eq!(deck.decks(), MAX_DECKS);
    assert_eq!(deck.len(), 52 * 7);
}

#[test]
fn shuffle_keeps_composition_and_resets() {
    let mut deck = CardDeck::new(DeckOptions::default().with_option(DeckOption::IncludeJokers), 9);
    let before = counts(deck.cards());
    deck.deal();
    deck.deal();

    deck.shuffle();
    assert!(deck.is_shuffled());
    assert_eq!(deck.cards_left(), 54);
    assert_eq!(counts(deck.cards()), before);
}

#[test]
fn shuffle_changes_order() {
    let ordered = CardDeck::new(DeckOptions::default(), 3);
    let mut deck = ordered.clone();
    deck.shuffle();

    // Probabilistic: a 52-card deck staying in order is practically impossible.
    let unmoved = deck
        .cards()
        .iter()
        .zip(ordered.cards())
        .filter(|(a, b)| a == b)
        .count();
    assert!(unmoved < 20, "{unmoved} cards never moved");
}

#[test]
fn shuffle_with_caller_rng() {
    let mut deck = CardDeck::new(DeckOptions::default(), 0);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    deck.shuffle_with(&mut rng);
    assert!(deck.is_shuffled());
    assert_eq!(counts(deck.cards()).len(), 52);
}

#[test]
fn deals_until_exhausted() {
    let mut deck = CardDeck::new(DeckOptions::default(), 11);
    deck.shuffle();

    for dealt in 0..52 {
        assert!(deck.has_more_cards());
        assert_eq!(deck.cards_left(), 52 - dealt);
        assert!(deck.deal().is_valid());
    }

    assert!(!deck.has_more_cards());
    assert_eq!(deck.deal(), Card::EMPTY);
    assert_eq!(deck.try_deal(), Err(DeckError::Exhausted));
    assert_eq!(deck.cards_left(), 0);
}

#[test]
fn peeking_leaves_card_in_deck() {
    let mut deck = CardDeck::new(DeckOptions::default(), 2);
    deck.shuffle();

    let top = deck.next_card(true);
    assert_eq!(deck.peek(), top);
    assert_eq!(deck.cards_left(), 52);
    assert_eq!(deck.deal(), top);
    assert_eq!(deck.cards_left(), 51);
}

#[test]
fn undo_steps_back() {
    let mut deck = CardDeck::new(DeckOptions::default(), 4);
    deck.shuffle();

    assert_eq!(deck.undo(), Card::EMPTY);
    assert_eq!(deck.try_undo(), Err(DeckError::NothingToUndo));

    let first = deck.deal();
    assert_eq!(deck.undo(), Card::EMPTY);
    assert_eq!(deck.cards_left(), 52);
    assert_eq!(deck.deal(), first);

    let second = deck.deal();
    let third = deck.deal();
    assert_ne!(second, third);
    assert_eq!(deck.undo(), second);
    assert_eq!(deck.deal(), second);
    assert_eq!(deck.deal(), third);
}

#[test]
fn shuffle_clears_undo() {
    let mut deck = CardDeck::new(DeckOptions::default(), 4);
    deck.shuffle();
    deck.deal();
    deck.deal();
    deck.shuffle();
    assert_eq!(deck.undo(), Card::EMPTY);
}

#[test]
fn display_summary() {
    let mut deck = CardDeck::new(DeckOptions::default().with_decks(2), 1);
    deck.deal();
    assert_eq!(
        deck.to_string(),
        "CardDeck: (Decks-2, Number of Cards-104, CurrentCard-1)"
    );
}

#[test]
fn shared_deck_peeks_without_dealing() {
    let shared = SharedDeck::new(CardDeck::new(DeckOptions::default(), 6));
    shared.shuffle();

    let top = shared.peek();
    assert_eq!(shared.next_card(true), top);
    assert!(shared.has_more_cards());
    assert_eq!(shared.cards_left(), 52);

    assert_eq!(shared.next_card(false), top);
    assert_eq!(shared.cards_left(), 51);
    assert_ne!(shared.peek(), top);

    for _ in 0..51 {
        shared.deal();
    }
    assert!(!shared.has_more_cards());
    assert_eq!(shared.peek(), Card::EMPTY);
}

#[test]
fn shared_deck_deals_across_threads() {
    let shared = std::sync::Arc::new(SharedDeck::new(CardDeck::new(DeckOptions::default(), 8)));
    shared.shuffle();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || (0..13).map(|_| shared.deal()).collect::<Vec<_>>())
        })
        .collect();

    let mut dealt = Vec::new();
    for handle in handles {
        dealt.extend(handle.join().unwrap());
    }

    assert_eq!(shared.cards_left(), 0);
    assert_eq!(counts(&dealt).len(), 52);
    assert_eq!(shared.try_deal(), Err(DeckError::Exhausted));
}
