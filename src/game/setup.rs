use alloc::format;
use alloc::vec::Vec;

use crate::catalog::{build_hero_deck_cards, build_thanos_deck_cards};
use crate::deck::Deck;
use crate::error::SetupError;
use crate::log::LogCategory;
use crate::options::hero_starting_life;
use crate::player::{Player, PlayerId};

use super::{Game, GameState, Phase};

impl Game {
    /// Seats the players, builds and shuffles both decks, deals opening
    /// hands, and starts play with Thanos to move.
    ///
    /// Player ids are seat indices into `player_names`.
    ///
    /// # Errors
    ///
    /// Returns an error if `player_names` is empty or longer than 256 names,
    /// `thanos_index` is not a seat, or the game has already started.
    ///
    /// # Example
    ///
    /// ```
    /// use gauntlet::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 7);
    /// game.initialize(&["Ada", "Grace", "Linus"], 1).unwrap();
    ///
    /// assert_eq!(game.phase(), Phase::Playing);
    /// assert_eq!(game.current_player(), Some(1));
    /// assert_eq!(game.hero_life(), 24);
    /// ```
    pub fn initialize<S: AsRef<str>>(
        &self,
        player_names: &[S],
        thanos_index: usize,
    ) -> Result<(), SetupError> {
        if player_names.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        if thanos_index >= player_names.len() {
            return Err(SetupError::ThanosIndexOutOfRange);
        }
        if player_names.len() > usize::from(PlayerId::MAX) + 1 {
            return Err(SetupError::TooManyPlayers);
        }

        let options = &self.options;
        self.transact(|state, rng| {
            if state.phase != Phase::Setup {
                return Err(SetupError::AlreadyStarted);
            }

            state.players = player_names
                .iter()
                .zip(0..=PlayerId::MAX)
                .map(|(name, id)| Player::new(id, name.as_ref(), usize::from(id) == thanos_index))
                .collect::<Vec<_>>();
            state.thanos_index = thanos_index;
            state.current_player_index = thanos_index;
            state.turn_number = 1;
            state.hero_life = hero_starting_life(player_names.len());
            state.thanos_life = options.thanos_life;
            state.power_token_pool = options.power_tokens;
            state.hero_deck = Deck::shuffled(build_hero_deck_cards(), rng);
            state.thanos_deck = Deck::shuffled(build_thanos_deck_cards(), rng);

            for index in 0..state.players.len() {
                let count = if index == thanos_index {
                    options.thanos_opening_hand
                } else {
                    options.hero_opening_hand
                };
                let dealt = state.deck_of_mut(index).draw_multiple(count, rng);
                for card in dealt {
                    state.players[index].add_to_hand(card);
                }
            }

            state.phase = Phase::Playing;

            let thanos_name = state.players[thanos_index].name();
            let message = format!("Game started! {thanos_name} is Thanos and begins the game.");
            state.add_log(message, LogCategory::Setup);
            let message = format!("Heroes start with {} life.", state.hero_life);
            state.add_log(message, LogCategory::Setup);

            Ok(())
        })
    }

    /// Returns the game to the setup phase with default life totals, no
    /// players, empty decks, and an empty log.
    ///
    /// Log listeners stay registered and the random number generator keeps its
    /// position, so a reset game does not replay the previous shuffles.
    pub fn reset(&self) {
        self.state.replace(GameState::new(&self.options));
    }
}
