use alloc::format;

use crate::card::{Card, Effect};
use crate::choice::ChoiceProvider;
use crate::error::{ActionError, TurnError};
use crate::log::LogCategory;
use crate::player::PlayerId;
use crate::result::{Defeat, EffectResult, PlayOutcome};

use super::effects::Resolver;
use super::{Game, GameState, Phase};

impl GameState {
    fn ensure_playing(&self) -> Result<(), ActionError> {
        if self.phase != Phase::Playing {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    fn seat_of(&self, player_id: PlayerId) -> Result<usize, ActionError> {
        self.player_index(player_id).ok_or(ActionError::PlayerNotFound)
    }
}

impl Game {
    /// Player action: play the card at `hand_index`.
    ///
    /// The card is discarded, a Thanos stone is collected, the card's effect
    /// resolves (asking `provider` for every decision), and the player draws
    /// a replacement. Collecting the sixth stone ends the game before the
    /// effect resolves.
    ///
    /// # Errors
    ///
    /// Checked in this order: the player does not exist; the card is the
    /// Thanos card (in any phase, on any turn); the game is not being played;
    /// it is not the player's turn; there is no card at `hand_index`. An
    /// unusable answer from `provider` fails with
    /// [`ActionError::InvalidEffectTarget`]. On any error nothing changes.
    ///
    /// # Example
    ///
    /// ```
    /// use gauntlet::{ActionError, DeclineAll, Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 3);
    /// game.initialize(&["Thanos", "Hero"], 0).unwrap();
    ///
    /// // Seat 1 is a Hero, and Thanos moves first.
    /// let result = game.play_card(1, 0, &mut DeclineAll);
    /// assert_eq!(result.unwrap_err(), ActionError::NotYourTurn);
    /// ```
    pub fn play_card<P: ChoiceProvider + ?Sized>(
        &self,
        player_id: PlayerId,
        hand_index: usize,
        provider: &mut P,
    ) -> Result<PlayOutcome, ActionError> {
        self.transact(|state, rng| {
            let index = state.seat_of(player_id)?;
            if state.players[index]
                .hand()
                .get(hand_index)
                .is_some_and(|card| !card.is_playable())
            {
                return Err(ActionError::UnplayableCard);
            }
            state.ensure_playing()?;
            if index != state.current_player_index {
                return Err(ActionError::NotYourTurn);
            }

            let card = state.players[index]
                .remove_from_hand(hand_index)
                .map_err(|_| ActionError::InvalidCardIndex)?;
            state.deck_of_mut(index).discard(card);

            let message = format!("{} plays {card}.", state.players[index].name());
            state.add_log(message, LogCategory::CardPlay);

            let stone_collected = state.collect_stone(index, card);
            if stone_collected.is_some() {
                if let Some(result) = state.settle() {
                    let mut effect = EffectResult::new(card.effect);
                    effect.fizzled = true;
                    return Ok(PlayOutcome {
                        card,
                        stone_collected,
                        effect,
                        replacement: None,
                        game_over: Some(result),
                    });
                }
            }

            let effect = Resolver::new(state, rng, provider, index, card.effect).run()?;
            let replacement = if state.is_over() {
                None
            } else {
                state.draw_into_hand(index, rng)
            };

            Ok(PlayOutcome {
                card,
                stone_collected,
                effect,
                replacement,
                game_over: state.winner,
            })
        })
    }

    /// Resolves `effect` for a player outside of a card play.
    ///
    /// Used by a presentation layer that runs an effect on its own terms,
    /// for example a house rule. Turn ownership is not checked.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist, the game is not being
    /// played, or `provider` gives an unusable answer. On any error nothing
    /// changes.
    pub fn resolve_effect<P: ChoiceProvider + ?Sized>(
        &self,
        effect: Effect,
        player_id: PlayerId,
        provider: &mut P,
    ) -> Result<EffectResult, ActionError> {
        self.transact(|state, rng| {
            let index = state.seat_of(player_id)?;
            state.ensure_playing()?;
            Resolver::new(state, rng, provider, index, effect).run()
        })
    }

    /// Defeats the card at `hand_index` in a player's hand.
    ///
    /// The card is discarded, or put on the bottom of its deck if it returns
    /// on defeat. The player's side loses one life (never below zero) and the
    /// player draws a replacement. Not tied to the current turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist, the game is not being
    /// played, or there is no card at `hand_index`.
    pub fn defeat_card(
        &self,
        player_id: PlayerId,
        hand_index: usize,
    ) -> Result<Defeat, ActionError> {
        self.transact(|state, rng| {
            let index = state.seat_of(player_id)?;
            state.ensure_playing()?;
            let defeat = state.defeat(index, hand_index, rng)?;
            state.settle();
            Ok(defeat)
        })
    }

    /// Moves up to `count` tokens from the pool to a player.
    ///
    /// Returns how many were granted, which is less than `count` (possibly
    /// zero) when the pool runs short.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist or the game is not being
    /// played.
    pub fn take_power_token(&self, player_id: PlayerId, count: u32) -> Result<u32, ActionError> {
        self.transact(|state, _| {
            let index = state.seat_of(player_id)?;
            state.ensure_playing()?;
            Ok(state.grant_tokens(index, count))
        })
    }

    /// Player action: draw one card from the player's own deck.
    ///
    /// A Hero starts with a single card, so drawing first is how a Hero keeps
    /// a card in hand to fight with after playing one. Returns `None` when
    /// both piles of the deck are empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist, the game is not being
    /// played, or it is not the player's turn.
    pub fn draw_card(&self, player_id: PlayerId) -> Result<Option<Card>, ActionError> {
        self.transact(|state, rng| {
            let index = state.seat_of(player_id)?;
            state.ensure_playing()?;
            if index != state.current_player_index {
                return Err(ActionError::NotYourTurn);
            }

            let card = state.draw_into_hand(index, rng);
            let name = state.players[index].name();
            let message = if card.is_some() {
                format!("{name} draws a card.")
            } else {
                format!("{name} has no card left to draw.")
            };
            state.add_log(message, LogCategory::CardPlay);
            Ok(card)
        })
    }

    /// Passes the turn to the next seat, wrapping around the table.
    ///
    /// The turn number increases each time play wraps back to seat 0.
    /// Returns the player whose turn it now is.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not being played.
    pub fn next_turn(&self) -> Result<PlayerId, TurnError> {
        self.transact(|state, _| {
            if state.phase != Phase::Playing || state.players.is_empty() {
                return Err(TurnError::InvalidState);
            }

            state.current_player_index = (state.current_player_index + 1) % state.players.len();
            if state.current_player_index == 0 {
                state.turn_number += 1;
            }

            let player = &state.players[state.current_player_index];
            let player_id = player.id();
            let message = format!("Turn {}: {}'s turn.", state.turn_number, player.name());
            state.add_log(message, LogCategory::Turn);

            Ok(player_id)
        })
    }
}
