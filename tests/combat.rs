//! Catalog and fight resolution tests.

use gauntlet::{
    Card, Effect, HERO_DECK_SIZE, Outcome, Stone, THANOS_DECK_SIZE, build_hero_deck_cards,
    build_thanos_deck_cards, describe_effect, effective_value, resolve,
};

const fn card(value: u8) -> Card {
    Card::new(0, "Test", value, Effect::TakePowerToken, false, false)
}

#[test]
fn equal_values_tie() {
    assert_eq!(resolve(&card(3), &card(3), false, false), Outcome::Tie);
    assert_eq!(resolve(&card(3), &card(5), true, false), Outcome::Tie);
}

#[test]
fn token_bonus_can_swing_a_fight() {
    assert_eq!(resolve(&card(4), &card(3), false, true), Outcome::DefenderWins);
    assert_eq!(resolve(&card(4), &card(3), false, false), Outcome::AttackerWins);
    assert_eq!(resolve(&card(1), &card(2), true, false), Outcome::AttackerWins);
    assert_eq!(effective_value(&card(5), true), 7);
    assert_eq!(effective_value(&card(5), false), 5);
}

#[test]
fn resolve_is_pure() {
    for attacker in 1..=7 {
        for defender in 1..=7 {
            for bonus in [(false, false), (true, false), (false, true), (true, true)] {
                let first = resolve(&card(attacker), &card(defender), bonus.0, bonus.1);
                let second = resolve(&card(attacker), &card(defender), bonus.0, bonus.1);
                assert_eq!(first, second);
            }
        }
    }
}

#[test]
fn hero_catalog() {
    let cards = build_hero_deck_cards();
    assert_eq!(cards.len(), HERO_DECK_SIZE);

    let per_value: Vec<usize> = (1..=6)
        .map(|value| cards.iter().filter(|card| card.value == value).count())
        .collect();
    assert_eq!(per_value, [3, 3, 3, 3, 2, 2]);

    assert!(cards.iter().all(|card| !card.is_infinity_stone));
    assert!(cards.iter().all(|card| !card.returns_to_deck_on_defeat));
    assert!(cards.iter().all(Card::is_playable));
    assert!(
        cards
            .iter()
            .enumerate()
            .all(|(index, card)| usize::from(card.id) == index)
    );
}

#[test]
fn thanos_catalog() {
    let cards = build_thanos_deck_cards();
    assert_eq!(cards.len(), THANOS_DECK_SIZE);

    let stones: Vec<Stone> = cards.iter().filter_map(Card::stone).collect();
    assert_eq!(stones, Stone::ALL);
    for stone in Stone::ALL {
        let card = cards.iter().find(|card| card.stone() == Some(stone)).unwrap();
        assert_eq!(card.value, stone.value());
        assert_eq!(card.name, stone.name());
        assert!(card.returns_to_deck_on_defeat);
    }

    let outriders = cards.iter().filter(|card| card.effect == Effect::Outrider).count();
    assert_eq!(outriders, 2);

    let unplayable: Vec<&str> = cards
        .iter()
        .filter(|card| !card.is_playable())
        .map(|card| card.name)
        .collect();
    assert_eq!(unplayable, ["Thanos"]);

    let returning = cards.iter().filter(|card| card.returns_to_deck_on_defeat).count();
    assert_eq!(returning, 7);
    assert!(cards.iter().all(|card| (1..=7).contains(&card.value)));

    let mut ids: Vec<u8> = cards.iter().map(|card| card.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), THANOS_DECK_SIZE);
}

#[test]
fn effects_have_descriptions() {
    assert_eq!(describe_effect(Effect::PowerStone), "Take 3 Power Tokens.");
    assert_eq!(describe_effect(Effect::Thanos), "Cannot be played.");
    assert_eq!(
        describe_effect(Effect::TakePowerToken),
        describe_effect(Effect::ProximaMidnight)
    );
    assert_eq!(Stone::Reality.to_string(), "Reality Stone");
}
