//! Error types for game operations.
//!
//! Every error here is recoverable: the rejected call leaves the game exactly
//! as it was, and the caller may retry with different input.

use thiserror::Error;

/// Errors that can occur when initializing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No player names were supplied.
    #[error("at least one player is required")]
    NoPlayers,
    /// The Thanos seat does not exist.
    #[error("thanos player index is out of range")]
    ThanosIndexOutOfRange,
    /// More players than player ids can address.
    #[error("too many players")]
    TooManyPlayers,
    /// The game has already left the setup phase.
    #[error("game has already started")]
    AlreadyStarted,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// No card at the given hand index.
    #[error("no card at that hand index")]
    InvalidCardIndex,
    /// The card can never be played.
    #[error("this card cannot be played")]
    UnplayableCard,
    /// An effect needed a target or choice that was missing or invalid.
    #[error("missing or invalid target for this effect")]
    InvalidEffectTarget,
}

/// Errors that can occur when advancing the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Invalid game state for advancing the turn.
    #[error("invalid game state for advancing the turn")]
    InvalidState,
}

/// Errors that can occur when taking a card out of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// No card at the given index.
    #[error("hand index out of range")]
    IndexOutOfRange,
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// There is nothing in the discard pile to shuffle back.
    #[error("discard pile is empty")]
    EmptyDiscard,
}
