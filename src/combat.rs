//! Fight resolution.
//!
//! These functions only compare values. The game applies the consequences
//! (defeats, life loss, redraws) after reading the [`Outcome`].

use crate::card::Card;

/// Bonus a power token adds to a card's value in a fight.
pub const TOKEN_BONUS: u8 = 2;

/// Result of comparing two cards in a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome {
    /// The attacker's card is higher.
    AttackerWins,
    /// The defender's card is higher.
    DefenderWins,
    /// Equal values. Neither card is defeated.
    Tie,
}

/// Returns a card's value in a fight, with the token bonus if one is spent.
#[must_use]
pub const fn effective_value(card: &Card, token_bonus: bool) -> u8 {
    if token_bonus {
        card.value + TOKEN_BONUS
    } else {
        card.value
    }
}

/// Compares an attacking card against a defending card.
///
/// # Example
///
/// ```
/// use gauntlet::{Card, Effect, Outcome, resolve};
///
/// let hulk = Card::new(7, "Hulk", 3, Effect::MayFightThanos, false, false);
/// let outrider = Card::new(6, "Outrider", 2, Effect::Outrider, false, false);
///
/// assert_eq!(resolve(&hulk, &outrider, false, false), Outcome::AttackerWins);
/// assert_eq!(resolve(&hulk, &outrider, false, true), Outcome::DefenderWins);
/// ```
#[must_use]
pub const fn resolve(
    attacker: &Card,
    defender: &Card,
    attacker_has_token_bonus: bool,
    defender_has_token_bonus: bool,
) -> Outcome {
    let attacker_value = effective_value(attacker, attacker_has_token_bonus);
    let defender_value = effective_value(defender, defender_has_token_bonus);

    if attacker_value > defender_value {
        Outcome::AttackerWins
    } else if defender_value > attacker_value {
        Outcome::DefenderWins
    } else {
        Outcome::Tie
    }
}
