//! Serializable view of the table for a presentation layer.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Stone};
use crate::deck::Deck;
use crate::game::{GameState, Phase};
use crate::player::{Player, PlayerId};
use crate::result::WinResult;

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerSnapshot {
    /// Player ID.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Whether the player is Thanos.
    pub is_thanos: bool,
    /// Number of cards in hand.
    pub hand_size: usize,
    /// Power tokens held.
    pub tokens: u32,
    /// Cards in hand.
    pub hand: Vec<Card>,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().into(),
            is_thanos: player.is_thanos(),
            hand_size: player.hand_size(),
            tokens: player.tokens(),
            hand: player.hand().to_vec(),
        }
    }
}

/// Pile sizes of one deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DeckCounts {
    /// Cards in the draw pile.
    pub draw_pile: usize,
    /// Cards in the discard pile.
    pub discard_pile: usize,
}

impl From<&Deck> for DeckCounts {
    fn from(deck: &Deck) -> Self {
        Self {
            draw_pile: deck.len(),
            discard_pile: deck.discard_len(),
        }
    }
}

/// Everything a presentation layer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameSnapshot {
    /// Seats in turn order.
    pub players: Vec<PlayerSnapshot>,
    /// Player whose turn it is, once the game is set up.
    pub current_player_id: Option<PlayerId>,
    /// Hero team life.
    pub hero_life: u32,
    /// Thanos's life.
    pub thanos_life: u32,
    /// Hero deck pile sizes.
    pub hero_deck: DeckCounts,
    /// Thanos deck pile sizes.
    pub thanos_deck: DeckCounts,
    /// Tokens left in the pool.
    pub power_token_pool: u32,
    /// Stones Thanos has collected, in value order.
    pub collected_stones: Vec<Stone>,
    /// Turn number.
    pub turn_number: u32,
    /// Current phase.
    pub phase: Phase,
    /// Result, once the game is over.
    pub winner: Option<WinResult>,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        let mut collected_stones: Vec<Stone> = state.collected_stones.iter().copied().collect();
        collected_stones.sort_unstable();

        Self {
            players: state.players.iter().map(PlayerSnapshot::from).collect(),
            current_player_id: state.current_player().map(Player::id),
            hero_life: state.hero_life,
            thanos_life: state.thanos_life,
            hero_deck: DeckCounts::from(&state.hero_deck),
            thanos_deck: DeckCounts::from(&state.thanos_deck),
            power_token_pool: state.power_token_pool,
            collected_stones,
            turn_number: state.turn_number,
            phase: state.phase,
            winner: state.winner,
        }
    }
}
