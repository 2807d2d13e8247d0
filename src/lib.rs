//! A rules engine for the Infinity Gauntlet bluffing card game with optional
//! `no_std` support.
//!
//! One player takes the role of Thanos and plays against a team of Heroes.
//! The crate provides a [`Game`] type that owns both decks, every player, the
//! power token pool, the collected Infinity Stones, and an append-only log of
//! everything that happens. A presentation layer drives the game through
//! [`Game`] methods, answers interactive card effects through a
//! [`ChoiceProvider`], and follows along by subscribing to the log.
//!
//! # Example
//!
//! ```
//! use gauntlet::{DeclineAll, Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.initialize(&["Ada", "Grace", "Linus"], 0).unwrap();
//!
//! // Thanos opens with two cards, at most one of which is the unplayable
//! // Thanos card.
//! let index = game.snapshot().players[0]
//!     .hand
//!     .iter()
//!     .position(|card| card.is_playable())
//!     .unwrap();
//! let outcome = game.play_card(0, index, &mut DeclineAll).unwrap();
//! assert_eq!(game.log()[2].message, format!("Ada plays {}.", outcome.card));
//! assert!(outcome.game_over.is_none());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod catalog;
pub mod choice;
pub mod combat;
pub mod deck;
pub mod error;
pub mod game;
pub mod log;
pub mod options;
pub mod player;
pub mod result;
pub mod snapshot;
mod sync;

// Re-export main types
pub use card::{Card, Effect, MAX_CARD_VALUE, Stone};
pub use catalog::{
    HERO_DECK_SIZE, THANOS_DECK_SIZE, build_hero_deck_cards, build_thanos_deck_cards,
    describe_effect,
};
pub use choice::{Choice, ChoiceKind, ChoiceProvider, ChoiceRequest, DeclineAll, ScriptedChoices};
pub use combat::{Outcome, TOKEN_BONUS, effective_value, resolve};
pub use deck::Deck;
pub use error::{ActionError, HandError, ReshuffleError, SetupError, TurnError};
pub use game::{Game, GameState, Phase, SubscriptionId};
pub use log::{LogCategory, LogEntry};
pub use options::{GameOptions, HERO_LIFE_FALLBACK, hero_starting_life};
pub use player::{Player, PlayerId};
pub use result::{Defeat, EffectResult, FightReport, PlayOutcome, WinReason, WinResult, Winner};
pub use snapshot::{DeckCounts, GameSnapshot, PlayerSnapshot};
