//! Result types returned by game actions.

use alloc::vec::Vec;

use crate::card::{Card, Effect, Stone};
use crate::combat::Outcome;
use crate::player::PlayerId;

/// The side that won the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Winner {
    /// The Thanos player.
    Thanos,
    /// The Hero team.
    Heroes,
}

/// How the game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum WinReason {
    /// The losing side's life reached zero.
    Life,
    /// Thanos collected all six Infinity Stones.
    Snap,
}

/// The end of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WinResult {
    /// Winning side.
    pub winner: Winner,
    /// Win condition that was met.
    pub reason: WinReason,
}

/// A card that was defeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Defeat {
    /// Player who lost the card.
    pub player: PlayerId,
    /// The defeated card.
    pub card: Card,
    /// Whether the card went back to the bottom of its deck.
    pub shuffled_back: bool,
    /// Life left on the player's side afterwards.
    pub life_remaining: u32,
}

/// A fight between two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FightReport {
    /// Player who started the fight.
    pub attacker: PlayerId,
    /// Player who was fought.
    pub defender: PlayerId,
    /// Card the attacker fought with.
    pub attacker_card: Card,
    /// Card the defender fought with.
    pub defender_card: Card,
    /// Attacker's value after any token bonus.
    pub attacker_value: u8,
    /// Defender's value after any token bonus.
    pub defender_value: u8,
    /// Who won.
    pub outcome: Outcome,
}

/// What an effect did.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EffectResult {
    /// The effect that resolved.
    pub effect: Effect,
    /// Power tokens granted.
    pub tokens_granted: u32,
    /// Cards defeated, in order.
    pub defeats: Vec<Defeat>,
    /// Fights resolved, in order.
    pub fights: Vec<FightReport>,
    /// Whether the effect did nothing (declined, no target, or a miss).
    pub fizzled: bool,
}

impl EffectResult {
    /// Creates an empty result for the given effect.
    #[must_use]
    pub const fn new(effect: Effect) -> Self {
        Self {
            effect,
            tokens_granted: 0,
            defeats: Vec::new(),
            fights: Vec::new(),
            fizzled: false,
        }
    }
}

/// Result of playing a card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayOutcome {
    /// The card that was played.
    pub card: Card,
    /// Stone newly collected by Thanos, if any.
    pub stone_collected: Option<Stone>,
    /// What the card's effect did. Fizzled if the stone ended the game first.
    pub effect: EffectResult,
    /// Replacement card drawn into the player's hand.
    pub replacement: Option<Card>,
    /// Set if this play ended the game.
    pub game_over: Option<WinResult>,
}
