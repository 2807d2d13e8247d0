//! Deck and player tests.

use gauntlet::{
    Card, Deck, Effect, HandError, Player, ReshuffleError, build_hero_deck_cards,
    build_thanos_deck_cards,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn ids(cards: &[Card]) -> Vec<u8> {
    let mut ids: Vec<u8> = cards.iter().map(|card| card.id).collect();
    ids.sort_unstable();
    ids
}

#[test]
fn shuffling_is_a_reproducible_permutation() {
    let first = Deck::shuffled(build_hero_deck_cards(), &mut rng(3));
    let second = Deck::shuffled(build_hero_deck_cards(), &mut rng(3));
    let other = Deck::shuffled(build_hero_deck_cards(), &mut rng(4));

    assert_eq!(first, second);
    assert_ne!(first.draw_pile(), other.draw_pile());
    assert_eq!(ids(first.draw_pile()), (0..16).collect::<Vec<u8>>());
}

#[test]
fn draw_takes_from_the_top() {
    let cards = build_hero_deck_cards();
    let mut deck = Deck::new(cards.clone());
    let mut rng = rng(1);

    assert_eq!(deck.peek(0), cards.last());
    assert_eq!(deck.peek(1), cards.get(14));
    assert_eq!(deck.peek(16), None);
    assert_eq!(deck.draw(&mut rng), cards.last().copied());
    assert_eq!(deck.len(), 15);

    let top: Vec<_> = deck.peek_top(2).iter().map(|card| card.id).collect();
    assert_eq!(top, [14, 13]);
}

#[test]
fn empty_draw_pile_reshuffles_the_discard() {
    let mut rng = rng(7);
    let mut deck = Deck::new(build_thanos_deck_cards());

    let drawn = deck.draw_multiple(13, &mut rng);
    assert_eq!(drawn.len(), 13);
    assert!(deck.is_empty());
    for card in drawn {
        deck.discard(card);
    }
    assert_eq!(deck.discard_len(), 13);

    let card = deck.draw(&mut rng).unwrap();
    assert_eq!(deck.discard_len(), 0);
    assert_eq!(deck.len(), 12);
    assert_eq!(deck.total(), 12);

    let mut all = deck.draw_pile().to_vec();
    all.push(card);
    assert_eq!(ids(&all), (0..13).collect::<Vec<u8>>());
}

#[test]
fn draw_multiple_returns_what_is_left() {
    let mut rng = rng(2);
    let mut deck = Deck::new(build_hero_deck_cards());

    assert_eq!(deck.draw_multiple(20, &mut rng).len(), 16);
    assert!(deck.is_exhausted());
    assert_eq!(deck.draw(&mut rng), None);
    assert!(deck.draw_multiple(3, &mut rng).is_empty());
}

#[test]
fn reshuffle_needs_a_discard_pile() {
    let mut rng = rng(2);
    let mut deck = Deck::new(build_hero_deck_cards());
    assert_eq!(
        deck.reshuffle_from_discard(&mut rng),
        Err(ReshuffleError::EmptyDiscard)
    );
    assert_eq!(deck.len(), 16);

    let card = deck.draw(&mut rng).unwrap();
    deck.discard(card);
    deck.reshuffle_from_discard(&mut rng).unwrap();
    assert_eq!(deck.len(), 16);
    assert_eq!(deck.discard_len(), 0);
}

#[test]
fn cards_go_on_top_or_bottom() {
    let mut rng = rng(5);
    let mut deck = Deck::new(Vec::new());
    let cards = build_thanos_deck_cards();

    deck.add_to_bottom(cards[0]);
    deck.add_to_top(cards[1]);
    deck.add_to_bottom(cards[2]);

    assert_eq!(ids(deck.draw_pile()), [0, 1, 2]);
    assert_eq!(deck.draw_pile()[0], cards[2]);
    assert_eq!(deck.draw(&mut rng), Some(cards[1]));
}

#[test]
fn take_finds_a_card_in_either_pile() {
    let cards = build_thanos_deck_cards();
    let mut deck = Deck::new(cards.clone());
    let mut rng = rng(5);

    let top = deck.draw(&mut rng).unwrap();
    deck.discard(top);

    assert_eq!(deck.take(top.id), Some(top));
    assert_eq!(deck.discard_len(), 0);
    assert_eq!(deck.take(0), Some(cards[0]));
    assert_eq!(deck.take(0), None);
    assert_eq!(deck.total(), 11);
}

#[test]
fn rearrange_top_reorders_only_valid_permutations() {
    let cards = build_hero_deck_cards();
    let mut deck = Deck::new(cards.clone());

    assert!(!deck.rearrange_top(&[0, 0, 1]));
    assert!(!deck.rearrange_top(&[0, 3, 1]));
    assert_eq!(deck.draw_pile(), cards.as_slice());

    assert!(deck.rearrange_top(&[2, 0, 1]));
    let top: Vec<_> = deck.peek_top(3).iter().map(|card| card.id).collect();
    assert_eq!(top, [13, 15, 14]);

    let mut short = Deck::new(cards[..2].to_vec());
    assert!(!short.rearrange_top(&[0, 1, 2]));
    assert!(short.rearrange_top(&[]));
}

#[test]
fn hand_operations() {
    let cards = build_thanos_deck_cards();
    let mut player = Player::new(0, "Thanos", true);
    assert!(player.is_thanos());
    assert_eq!(player.name(), "Thanos");

    player.add_to_hand(cards[0]);
    player.add_to_hand(cards[6]);
    player.add_to_hand(cards[12]);

    assert_eq!(player.hand_size(), 3);
    assert!(player.has_card_of_value(7));
    assert!(!player.has_card_of_value(4));
    assert_eq!(player.position_of_value(2), Some(1));
    assert_eq!(player.cards_of_value(1), [cards[0]]);
    assert!(player.has_infinity_stones());
    assert_eq!(player.infinity_stones(), [cards[0]]);

    assert_eq!(player.remove_from_hand(3), Err(HandError::IndexOutOfRange));
    assert_eq!(player.remove_from_hand(0), Ok(cards[0]));
    assert!(!player.has_infinity_stones());

    assert_eq!(player.clear_hand().len(), 2);
    assert_eq!(player.hand_size(), 0);
}

#[test]
fn tokens_never_go_negative() {
    let mut player = Player::new(1, "Ada", false);
    assert!(!player.spend_token());

    player.add_token();
    player.add_tokens(2);
    assert_eq!(player.tokens(), 3);
    assert!(player.spend_token());
    assert_eq!(player.tokens(), 2);
}

#[test]
fn thanos_card_is_recognisable() {
    let thanos = build_thanos_deck_cards()[12];
    assert_eq!(thanos.effect, Effect::Thanos);
    assert!(!thanos.is_playable());
    assert!(thanos.returns_to_deck_on_defeat);
    assert_eq!(thanos.stone(), None);
    assert_eq!(thanos.to_string(), "Thanos (7)");
}
