//! Players and their hands.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandError;

/// Player identifier (the player's seat index).
pub type PlayerId = u8;

/// A seat at the table: the Thanos player or one of the Heroes.
///
/// Turn ownership is not checked here; that is the game's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Seat identifier.
    id: PlayerId,
    /// Display name.
    name: String,
    /// Whether this player is Thanos.
    is_thanos: bool,
    /// Cards in hand, in the order received.
    hand: Vec<Card>,
    /// Power tokens held.
    tokens: u32,
}

impl Player {
    /// Creates a player with an empty hand and no tokens.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, is_thanos: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_thanos,
            hand: Vec::new(),
            tokens: 0,
        }
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether this player is Thanos.
    #[must_use]
    pub const fn is_thanos(&self) -> bool {
        self.is_thanos
    }

    /// Returns the cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Returns the number of power tokens held.
    #[must_use]
    pub const fn tokens(&self) -> u32 {
        self.tokens
    }

    /// Adds a card to the hand.
    pub fn add_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no card at `index`.
    pub fn remove_from_hand(&mut self, index: usize) -> Result<Card, HandError> {
        if index >= self.hand.len() {
            return Err(HandError::IndexOutOfRange);
        }
        Ok(self.hand.remove(index))
    }

    /// Empties the hand, returning what was in it.
    pub fn clear_hand(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.hand)
    }

    /// Adds one power token.
    pub const fn add_token(&mut self) {
        self.add_tokens(1);
    }

    /// Adds `count` power tokens.
    pub const fn add_tokens(&mut self, count: u32) {
        self.tokens = self.tokens.saturating_add(count);
    }

    /// Spends one power token. Returns `false` if the player has none.
    pub const fn spend_token(&mut self) -> bool {
        if self.tokens == 0 {
            return false;
        }
        self.tokens -= 1;
        true
    }

    /// Returns whether the hand holds a card of the given value.
    #[must_use]
    pub fn has_card_of_value(&self, value: u8) -> bool {
        self.hand.iter().any(|card| card.value == value)
    }

    /// Returns the hand index of the first card of the given value.
    #[must_use]
    pub fn position_of_value(&self, value: u8) -> Option<usize> {
        self.hand.iter().position(|card| card.value == value)
    }

    /// Returns all cards in hand with the given value.
    #[must_use]
    pub fn cards_of_value(&self, value: u8) -> Vec<Card> {
        self.hand
            .iter()
            .filter(|card| card.value == value)
            .copied()
            .collect()
    }

    /// Returns whether the hand holds any Infinity Stone.
    #[must_use]
    pub fn has_infinity_stones(&self) -> bool {
        self.hand.iter().any(|card| card.is_infinity_stone)
    }

    /// Returns the Infinity Stones in hand.
    #[must_use]
    pub fn infinity_stones(&self) -> Vec<Card> {
        self.hand
            .iter()
            .filter(|card| card.is_infinity_stone)
            .copied()
            .collect()
    }
}
