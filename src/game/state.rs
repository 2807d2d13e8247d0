//! Game state types.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, Stone};
use crate::deck::Deck;
use crate::error::ActionError;
use crate::log::{self, LogCategory, LogEntry};
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};
use crate::result::{Defeat, WinReason, WinResult, Winner};

/// Stones Thanos needs for the snap.
pub const STONES_TO_SNAP: usize = Stone::ALL.len();

/// Game phase.
///
/// Phases only move forward. Leaving `GameOver` requires [`Game::reset`].
///
/// [`Game::reset`]: crate::Game::reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Phase {
    /// Waiting for [`Game::initialize`](crate::Game::initialize).
    Setup,
    /// Players are taking turns.
    Playing,
    /// A win condition was met.
    GameOver,
}

/// Everything on the table.
///
/// The fields are public so tests and tooling can stage positions through
/// [`Game::state`](crate::Game::state). Writing them directly bypasses every
/// rule check; a presentation layer should go through [`Game`](crate::Game)
/// methods instead.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seats in turn order. A player's id is its index.
    pub players: Vec<Player>,
    /// Index of the Thanos player in `players`.
    pub thanos_index: usize,
    /// Index of the player whose turn it is.
    pub current_player_index: usize,
    /// Turn number, starting at 1. Increases when play wraps to seat 0.
    pub turn_number: u32,
    /// Shared life of the Hero team.
    pub hero_life: u32,
    /// Thanos's life.
    pub thanos_life: u32,
    /// Deck the Heroes draw from.
    pub hero_deck: Deck,
    /// Deck Thanos draws from.
    pub thanos_deck: Deck,
    /// Power tokens not held by any player.
    pub power_token_pool: u32,
    /// Stones Thanos has played.
    pub collected_stones: HashSet<Stone>,
    /// Current phase.
    pub phase: Phase,
    /// Set once the game is over.
    pub winner: Option<WinResult>,
    /// Append-only event log.
    pub(crate) log: Vec<LogEntry>,
}

const fn side_name(is_thanos: bool) -> &'static str {
    if is_thanos { "Thanos" } else { "Hero" }
}

impl GameState {
    /// Creates the pre-setup state: no players, empty decks, empty log.
    pub(crate) fn new(options: &GameOptions) -> Self {
        Self {
            players: Vec::new(),
            thanos_index: 0,
            current_player_index: 0,
            turn_number: 1,
            hero_life: 0,
            thanos_life: options.thanos_life,
            hero_deck: Deck::default(),
            thanos_deck: Deck::default(),
            power_token_pool: options.power_tokens,
            collected_stones: HashSet::new(),
            phase: Phase::Setup,
            winner: None,
            log: Vec::new(),
        }
    }

    /// Returns the index of the player with the given id.
    #[must_use]
    pub fn player_index(&self, player_id: PlayerId) -> Option<usize> {
        let index = usize::from(player_id);
        self.players
            .get(index)
            .filter(|player| player.id() == player_id)
            .map(|_| index)
    }

    /// Returns the player with the given id.
    #[must_use]
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.player_index(player_id).map(|index| &self.players[index])
    }

    /// Returns the Thanos player, if the game has been set up.
    #[must_use]
    pub fn thanos(&self) -> Option<&Player> {
        self.players.get(self.thanos_index)
    }

    /// Returns the Hero players in seat order.
    pub fn heroes(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|player| !player.is_thanos())
    }

    /// Returns the player whose turn it is, if the game has been set up.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Returns the log.
    #[must_use]
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Returns the deck the player at `index` draws from.
    #[must_use]
    pub fn deck_of(&self, index: usize) -> &Deck {
        if self.players[index].is_thanos() {
            &self.thanos_deck
        } else {
            &self.hero_deck
        }
    }

    pub(crate) fn deck_of_mut(&mut self, index: usize) -> &mut Deck {
        if self.players[index].is_thanos() {
            &mut self.thanos_deck
        } else {
            &mut self.hero_deck
        }
    }

    /// Indices of the Hero players.
    pub(crate) fn hero_indices(&self) -> Vec<usize> {
        (0..self.players.len())
            .filter(|&index| index != self.thanos_index)
            .collect()
    }

    /// Evaluates the win conditions without changing anything.
    ///
    /// When several hold at once, Hero life is checked first, then Thanos
    /// life, then the stones.
    #[must_use]
    pub fn check_win_conditions(&self) -> Option<WinResult> {
        if self.phase == Phase::Setup {
            return None;
        }

        if self.hero_life == 0 {
            Some(WinResult {
                winner: Winner::Thanos,
                reason: WinReason::Life,
            })
        } else if self.thanos_life == 0 {
            Some(WinResult {
                winner: Winner::Heroes,
                reason: WinReason::Life,
            })
        } else if self.collected_stones.len() >= STONES_TO_SNAP {
            Some(WinResult {
                winner: Winner::Thanos,
                reason: WinReason::Snap,
            })
        } else {
            None
        }
    }

    pub(crate) fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub(crate) fn add_log(&mut self, message: String, category: LogCategory) {
        let sequence = self.log.len() as u64;
        self.log.push(LogEntry {
            sequence,
            timestamp: log::timestamp(sequence),
            turn: self.turn_number,
            message,
            category,
        });
    }

    /// Ends the game if a win condition holds.
    pub(crate) fn settle(&mut self) -> Option<WinResult> {
        if self.phase != Phase::Playing {
            return self.winner;
        }

        let result = self.check_win_conditions()?;
        self.phase = Phase::GameOver;
        self.winner = Some(result);

        let message = match (result.winner, result.reason) {
            (Winner::Thanos, WinReason::Snap) => {
                "Thanos has collected all 6 Infinity Stones and snaps his fingers! Thanos wins!"
            }
            (Winner::Thanos, WinReason::Life) => "The Heroes have fallen. Thanos wins!",
            (Winner::Heroes, _) => "Thanos has been defeated. The Heroes win!",
        };
        self.add_log(message.into(), LogCategory::GameOver);

        Some(result)
    }

    /// Draws a card from the player's deck into their hand.
    pub(crate) fn draw_into_hand(&mut self, index: usize, rng: &mut ChaCha8Rng) -> Option<Card> {
        let is_thanos = self.players[index].is_thanos();
        let deck = self.deck_of_mut(index);
        let reshuffling = deck.is_empty() && deck.discard_len() > 0;
        let card = deck.draw(rng);

        if reshuffling {
            self.add_log(
                format!(
                    "The {} deck is reshuffled from its discard pile.",
                    side_name(is_thanos)
                ),
                LogCategory::Shuffle,
            );
        }

        if let Some(card) = card {
            self.players[index].add_to_hand(card);
        }
        card
    }

    /// Defeats the card at `hand_index`: discards it (or returns it to the
    /// bottom of its deck), costs the owner's side one life, and redraws.
    ///
    /// Does not settle the win conditions.
    pub(crate) fn defeat(
        &mut self,
        index: usize,
        hand_index: usize,
        rng: &mut ChaCha8Rng,
    ) -> Result<Defeat, ActionError> {
        let card = self.players[index]
            .remove_from_hand(hand_index)
            .map_err(|_| ActionError::InvalidCardIndex)?;
        let is_thanos = self.players[index].is_thanos();

        let deck = self.deck_of_mut(index);
        deck.discard(card);
        let shuffled_back = if card.returns_to_deck_on_defeat {
            match deck.take(card.id) {
                Some(returned) => {
                    deck.add_to_bottom(returned);
                    true
                }
                None => false,
            }
        } else {
            false
        };

        let life_remaining = if is_thanos {
            self.thanos_life = self.thanos_life.saturating_sub(1);
            self.thanos_life
        } else {
            self.hero_life = self.hero_life.saturating_sub(1);
            self.hero_life
        };

        let player = &self.players[index];
        let message = format!(
            "{}'s {} is defeated! {} life: {}.",
            player.name(),
            card,
            side_name(is_thanos),
            life_remaining
        );
        let player_id = player.id();
        self.add_log(message, LogCategory::LifeLoss);

        if shuffled_back {
            self.add_log(
                format!(
                    "{} returns to the bottom of the {} deck.",
                    card.name,
                    side_name(is_thanos)
                ),
                LogCategory::Shuffle,
            );
        }

        self.draw_into_hand(index, rng);

        Ok(Defeat {
            player: player_id,
            card,
            shuffled_back,
            life_remaining,
        })
    }

    /// Moves up to `count` tokens from the pool to the player. Returns how
    /// many moved.
    pub(crate) fn grant_tokens(&mut self, index: usize, count: u32) -> u32 {
        let granted = count.min(self.power_token_pool);
        self.power_token_pool -= granted;
        self.players[index].add_tokens(granted);

        let name = self.players[index].name();
        let message = if granted == 0 {
            format!("{name} gains no power tokens; the pool is empty.")
        } else {
            format!(
                "{name} takes {granted} power token{}. {} left in the pool.",
                if granted == 1 { "" } else { "s" },
                self.power_token_pool
            )
        };
        self.add_log(message, LogCategory::CardEffect);

        granted
    }

    /// Records a stone Thanos just played. Returns it if it was new.
    pub(crate) fn collect_stone(&mut self, index: usize, card: Card) -> Option<Stone> {
        let stone = card.stone()?;
        if !self.players[index].is_thanos() || !self.collected_stones.insert(stone) {
            return None;
        }

        let message = format!(
            "Thanos collects the {stone}! ({}/{STONES_TO_SNAP})",
            self.collected_stones.len()
        );
        self.add_log(message, LogCategory::InfinityStone);
        Some(stone)
    }
}
