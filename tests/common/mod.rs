//! Helpers for staging table positions.
//!
//! Cards are only ever moved between a deck and a hand, so staged games
//! still hold every card exactly once.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use gauntlet::{
    Card, Game, GameOptions, GameState, HERO_DECK_SIZE, PlayerId, THANOS_DECK_SIZE,
    build_hero_deck_cards, build_thanos_deck_cards,
};

/// Seat of Thanos in the games built here.
pub const THANOS: PlayerId = 0;

/// Starts a seeded game with Thanos in seat 0 and `heroes` Heroes after.
pub fn started(heroes: usize, seed: u64) -> Game {
    let game = Game::new(GameOptions::default(), seed);
    let names: Vec<String> = core::iter::once("Thanos".to_owned())
        .chain((1..=heroes).map(|seat| format!("Hero {seat}")))
        .collect();
    game.initialize(&names, 0).unwrap();
    game
}

fn catalog_for(state: &GameState, seat: PlayerId) -> Vec<Card> {
    if state.players[usize::from(seat)].is_thanos() {
        build_thanos_deck_cards()
    } else {
        build_hero_deck_cards()
    }
}

/// Moves every card in the seat's hand to the bottom of its deck.
pub fn empty_hand(game: &Game, seat: PlayerId) {
    let mut state = game.state.lock();
    let index = usize::from(seat);
    let cards = state.players[index].clear_hand();
    let deck = if state.players[index].is_thanos() {
        &mut state.thanos_deck
    } else {
        &mut state.hero_deck
    };
    for card in cards {
        deck.add_to_bottom(card);
    }
}

/// Pulls the named card out of the seat's deck, or failing that out of the
/// hand of another player on the same side.
fn pull(state: &mut GameState, seat: PlayerId, name: &str) -> Option<Card> {
    let catalog = catalog_for(state, seat);
    let is_thanos = state.players[usize::from(seat)].is_thanos();
    let deck = if is_thanos {
        &mut state.thanos_deck
    } else {
        &mut state.hero_deck
    };
    let from_deck = catalog
        .iter()
        .filter(|card| card.name == name)
        .find_map(|card| deck.take(card.id));
    if from_deck.is_some() {
        return from_deck;
    }

    state
        .players
        .iter_mut()
        .filter(|player| player.is_thanos() == is_thanos && player.id() != seat)
        .find_map(|player| {
            let index = player.hand().iter().position(|card| card.name == name)?;
            player.remove_from_hand(index).ok()
        })
}

/// Moves the named card from the seat's deck into its hand.
///
/// Panics if no copy is left in the deck.
pub fn give(game: &Game, seat: PlayerId, name: &str) -> Card {
    let mut state = game.state.lock();
    let card = pull(&mut state, seat, name).unwrap_or_else(|| panic!("{name} is not in the deck"));
    state.players[usize::from(seat)].add_to_hand(card);
    card
}

/// Replaces the seat's hand with the named cards, in order.
pub fn hand_of(game: &Game, seat: PlayerId, names: &[&str]) {
    empty_hand(game, seat);
    for name in names {
        give(game, seat, name);
    }
}

/// Puts the named card on top of the seat's draw pile.
pub fn stack_top(game: &Game, seat: PlayerId, name: &str) {
    let mut state = game.state.lock();
    let card = pull(&mut state, seat, name).unwrap_or_else(|| panic!("{name} is not in the deck"));
    if state.players[usize::from(seat)].is_thanos() {
        state.thanos_deck.add_to_top(card);
    } else {
        state.hero_deck.add_to_top(card);
    }
}

/// Gives the seat `count` tokens straight from the pool.
pub fn give_tokens(game: &Game, seat: PlayerId, count: u32) {
    let mut state = game.state.lock();
    state.power_token_pool -= count;
    state.players[usize::from(seat)].add_tokens(count);
}

/// Names of the cards in the seat's hand.
pub fn hand_names(game: &Game, seat: PlayerId) -> Vec<&'static str> {
    game.state.lock().players[usize::from(seat)]
        .hand()
        .iter()
        .map(|card| card.name)
        .collect()
}

/// Asserts that every card is in exactly one place.
pub fn assert_conserved(game: &Game) {
    let state = game.state.lock();

    let hero_in_hands: usize = state.heroes().map(|player| player.hand_size()).sum();
    assert_eq!(state.hero_deck.total() + hero_in_hands, HERO_DECK_SIZE);

    let thanos_in_hand = state.thanos().map_or(0, |player| player.hand_size());
    assert_eq!(state.thanos_deck.total() + thanos_in_hand, THANOS_DECK_SIZE);

    let mut hero_ids: Vec<u8> = state
        .hero_deck
        .draw_pile()
        .iter()
        .chain(state.hero_deck.discard_pile())
        .chain(state.heroes().flat_map(|player| player.hand()))
        .map(|card| card.id)
        .collect();
    hero_ids.sort_unstable();
    hero_ids.dedup();
    assert_eq!(hero_ids.len(), HERO_DECK_SIZE);

    let mut thanos_ids: Vec<u8> = state
        .thanos_deck
        .draw_pile()
        .iter()
        .chain(state.thanos_deck.discard_pile())
        .chain(state.thanos().into_iter().flat_map(|player| player.hand()))
        .map(|card| card.id)
        .collect();
    thanos_ids.sort_unstable();
    thanos_ids.dedup();
    assert_eq!(thanos_ids.len(), THANOS_DECK_SIZE);
}
