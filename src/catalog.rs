//! The fixed Hero and Thanos card lists.

use alloc::vec::Vec;

use crate::card::{Card, Effect, Stone};

/// Number of cards in the Hero deck.
pub const HERO_DECK_SIZE: usize = 16;

/// Number of cards in the Thanos deck.
pub const THANOS_DECK_SIZE: usize = 13;

const HERO_CARDS: [(&str, u8, Effect); HERO_DECK_SIZE] = [
    ("Nebula", 1, Effect::GuessThanosHand),
    ("Spider-Man", 1, Effect::GuessThanosHand),
    ("Star-Lord", 1, Effect::GuessThanosHand),
    ("Black Widow", 2, Effect::PeekAtThanosHand),
    ("Gamora", 2, Effect::PeekAtThanosHand),
    ("Ant-Man & Wasp", 2, Effect::PeekAtThanosHand),
    ("Captain America", 3, Effect::MayFightThanos),
    ("Hulk", 3, Effect::MayFightThanos),
    ("Thor", 3, Effect::MayFightThanos),
    ("Black Panther", 4, Effect::TakePowerToken),
    ("Falcon", 4, Effect::TakePowerToken),
    ("Doctor Strange", 4, Effect::TakePowerToken),
    ("Scarlet Witch", 5, Effect::RearrangeHeroDeck),
    ("Vision", 5, Effect::RearrangeHeroDeck),
    ("Captain Marvel", 6, Effect::CompelFight),
    ("Iron Man", 6, Effect::CompelFight),
];

// Henchmen and the Thanos card; the stones are generated from `Stone::ALL`.
const THANOS_HENCHMEN: [(&str, u8, Effect); THANOS_DECK_SIZE - Stone::ALL.len() - 1] = [
    ("Outrider", 2, Effect::Outrider),
    ("Outrider", 2, Effect::Outrider),
    ("Corvus Glaive", 2, Effect::CorvusGlaive),
    ("Black Dwarf", 3, Effect::BlackDwarf),
    ("Proxima Midnight", 4, Effect::ProximaMidnight),
    ("Ebony Maw", 5, Effect::EbonyMaw),
];

/// Builds the 16 Hero cards in catalog order (unshuffled).
#[must_use]
pub fn build_hero_deck_cards() -> Vec<Card> {
    HERO_CARDS
        .iter()
        .enumerate()
        .map(|(id, &(name, value, effect))| Card::new(id as u8, name, value, effect, false, false))
        .collect()
}

/// Builds the 13 Thanos cards in catalog order (unshuffled).
///
/// The six Infinity Stones and the Thanos card return to the bottom of the
/// deck when defeated.
#[must_use]
pub fn build_thanos_deck_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(THANOS_DECK_SIZE);

    for stone in Stone::ALL {
        cards.push(Card::new(
            cards.len() as u8,
            stone.name(),
            stone.value(),
            stone.effect(),
            true,
            true,
        ));
    }

    for &(name, value, effect) in &THANOS_HENCHMEN {
        cards.push(Card::new(cards.len() as u8, name, value, effect, false, false));
    }

    cards.push(Card::new(
        cards.len() as u8,
        "Thanos",
        7,
        Effect::Thanos,
        false,
        true,
    ));

    cards
}

/// Returns the human-readable rules text for an effect.
#[must_use]
pub const fn describe_effect(effect: Effect) -> &'static str {
    effect.description()
}
