//! Draw pile and discard pile for one side of the table.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::ReshuffleError;

/// An ordered draw pile with its paired discard pile.
///
/// The top of the draw pile is the end of the underlying vector; the bottom is
/// index 0. Randomness is always supplied by the caller, so a seeded RNG makes
/// every shuffle reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    /// Cards waiting to be drawn.
    draw_pile: Vec<Card>,
    /// Cards that have been played or defeated.
    discard_pile: Vec<Card>,
}

impl Deck {
    /// Creates a deck from cards in the given order, last card on top.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
        }
    }

    /// Creates a deck from cards and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(cards: Vec<Card>, rng: &mut R) -> Self {
        let mut deck = Self::new(cards);
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the draw pile (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.draw_pile.shuffle(rng);
    }

    /// Draws the top card.
    ///
    /// An empty draw pile is first refilled from the discard pile. Returns
    /// `None` only when both piles are empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.draw_pile.is_empty() && self.reshuffle_from_discard(rng).is_err() {
            return None;
        }
        self.draw_pile.pop()
    }

    /// Draws up to `count` cards, one at a time.
    ///
    /// Returns fewer than `count` cards when both piles run dry.
    pub fn draw_multiple<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            match self.draw(rng) {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Puts a card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Puts a card on top of the draw pile.
    pub fn add_to_top(&mut self, card: Card) {
        self.draw_pile.push(card);
    }

    /// Puts a card on the bottom of the draw pile.
    pub fn add_to_bottom(&mut self, card: Card) {
        self.draw_pile.insert(0, card);
    }

    /// Moves the whole discard pile into the draw pile and shuffles it.
    ///
    /// # Errors
    ///
    /// Returns an error (and changes nothing) if the discard pile is empty.
    pub fn reshuffle_from_discard<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), ReshuffleError> {
        if self.discard_pile.is_empty() {
            return Err(ReshuffleError::EmptyDiscard);
        }

        self.draw_pile.append(&mut self.discard_pile);
        self.shuffle(rng);
        Ok(())
    }

    /// Removes a specific card from the deck, looking in the discard pile
    /// first and then the draw pile.
    pub fn take(&mut self, id: u8) -> Option<Card> {
        if let Some(index) = self.discard_pile.iter().rposition(|card| card.id == id) {
            return Some(self.discard_pile.remove(index));
        }
        let index = self.draw_pile.iter().rposition(|card| card.id == id)?;
        Some(self.draw_pile.remove(index))
    }

    /// Returns the card `index` positions below the top, without removing it.
    #[must_use]
    pub fn peek(&self, index: usize) -> Option<&Card> {
        let position = self.draw_pile.len().checked_sub(index + 1)?;
        self.draw_pile.get(position)
    }

    /// Returns up to `count` cards from the top, top card first.
    #[must_use]
    pub fn peek_top(&self, count: usize) -> Vec<Card> {
        self.draw_pile.iter().rev().take(count).copied().collect()
    }

    /// Reorders the top `order.len()` cards.
    ///
    /// `order[i]` is an index into [`Deck::peek_top`]; the card it names ends
    /// up at position `i`, with position 0 being the new top. Returns `false`
    /// (and changes nothing) if `order` is not a permutation of
    /// `0..order.len()` or the draw pile is too short.
    pub fn rearrange_top(&mut self, order: &[usize]) -> bool {
        let count = order.len();
        if count > self.draw_pile.len() {
            return false;
        }

        let mut seen = alloc::vec![false; count];
        for &index in order {
            if index >= count || seen[index] {
                return false;
            }
            seen[index] = true;
        }

        let top = self.peek_top(count);
        let base = self.draw_pile.len() - count;
        // New top is the last element of the vector.
        for (position, &index) in order.iter().enumerate() {
            self.draw_pile[base + count - 1 - position] = top[index];
        }
        true
    }

    /// Returns the draw pile, bottom card first.
    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    /// Returns the discard pile, oldest card first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Returns the number of cards in the draw pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Returns whether the draw pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Returns the number of cards across both piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// Returns whether a draw would come up empty.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.draw_pile.is_empty() && self.discard_pile.is_empty()
    }
}
