//! Interactive choices requested while a card effect resolves.
//!
//! Many effects need input: a guessed number, a target, a card to fight with.
//! The game asks a [`ChoiceProvider`] for each decision as it comes up and
//! continues synchronously once the answer is returned. A presentation layer
//! implements the provider by prompting a human; tests and bots use
//! [`ScriptedChoices`] or [`DeclineAll`].

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::card::{Card, Effect};
use crate::player::PlayerId;

/// What kind of decision is being asked for, with its constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ChoiceKind {
    /// Name a card value in `min..=max`. Answer with [`Choice::Value`].
    GuessValue {
        /// Lowest value that may be named.
        min: u8,
        /// Highest value that may be named.
        max: u8,
    },
    /// Pick an opponent. Answer with [`Choice::Player`].
    ChooseOpponent {
        /// Players that may be picked.
        candidates: Vec<PlayerId>,
    },
    /// Pick a Hero. Answer with [`Choice::Player`].
    ChooseHero {
        /// Players that may be picked.
        candidates: Vec<PlayerId>,
    },
    /// Decide whether to carry out an optional action. Answer with
    /// [`Choice::Confirm`].
    Confirm,
    /// Pick a card from a hand. Answer with [`Choice::Card`].
    ChooseHandCard {
        /// Owner of the hand.
        owner: PlayerId,
        /// The hand, in index order.
        hand: Vec<Card>,
    },
    /// Put cards in a new order. Answer with [`Choice::Order`]; entry `i`
    /// indexes `cards` and names the card for position `i` (0 is the top).
    ArrangeCards {
        /// Cards to arrange, top card first.
        cards: Vec<Card>,
    },
    /// Pick a card from a discard pile. Answer with [`Choice::Card`].
    ChooseDiscard {
        /// Cards that may be picked.
        candidates: Vec<Card>,
    },
}

/// A decision the game needs before it can continue resolving an effect.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChoiceRequest {
    /// Player who makes the decision.
    pub chooser: PlayerId,
    /// Effect being resolved.
    pub effect: Effect,
    /// The decision and its constraints.
    pub kind: ChoiceKind,
}

/// An answer to a [`ChoiceRequest`].
///
/// An answer that does not fit the request (wrong variant, out of range,
/// not a candidate) rejects the whole action with
/// [`ActionError::InvalidEffectTarget`](crate::ActionError::InvalidEffectTarget).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Choice {
    /// A card value.
    Value(u8),
    /// A player.
    Player(PlayerId),
    /// Yes or no.
    Confirm(bool),
    /// An index into the offered cards.
    Card(usize),
    /// A new order for the offered cards.
    Order(Vec<usize>),
    /// Skip the decision. Optional effects end; mandatory ones use their
    /// default.
    Decline,
}

/// Supplies decisions while effects resolve.
///
/// Calls happen while the game is locked, so implementations must not call
/// back into the same [`Game`](crate::Game).
pub trait ChoiceProvider {
    /// Answers a decision.
    fn request_choice(&mut self, request: &ChoiceRequest) -> Choice;

    /// Shows `cards` privately to `viewer`.
    ///
    /// Used when an effect lets a player look at hidden cards. Default
    /// implementation does nothing.
    fn reveal(&mut self, _viewer: PlayerId, _cards: &[Card]) {}
}

/// A provider that declines every decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclineAll;

impl ChoiceProvider for DeclineAll {
    fn request_choice(&mut self, _request: &ChoiceRequest) -> Choice {
        Choice::Decline
    }
}

/// A provider that answers from a fixed queue, then declines.
///
/// Every request and reveal is recorded for later inspection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoices {
    /// Answers not yet given.
    queue: VecDeque<Choice>,
    /// Requests received so far.
    requests: Vec<ChoiceRequest>,
    /// Reveals received so far.
    reveals: Vec<(PlayerId, Vec<Card>)>,
}

impl ScriptedChoices {
    /// Creates a provider that gives the answers in order.
    pub fn new(choices: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            queue: choices.into_iter().collect(),
            requests: Vec::new(),
            reveals: Vec::new(),
        }
    }

    /// Returns the number of answers not yet given.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Returns the requests received so far.
    #[must_use]
    pub fn requests(&self) -> &[ChoiceRequest] {
        &self.requests
    }

    /// Returns the reveals received so far.
    #[must_use]
    pub fn reveals(&self) -> &[(PlayerId, Vec<Card>)] {
        &self.reveals
    }
}

impl ChoiceProvider for ScriptedChoices {
    fn request_choice(&mut self, request: &ChoiceRequest) -> Choice {
        self.requests.push(request.clone());
        self.queue.pop_front().unwrap_or(Choice::Decline)
    }

    fn reveal(&mut self, viewer: PlayerId, cards: &[Card]) {
        self.reveals.push((viewer, cards.to_vec()));
    }
}
