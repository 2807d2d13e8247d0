use alloc::format;

use crate::choice::{Choice, ChoiceKind, ChoiceProvider};
use crate::combat::{self, Outcome};
use crate::error::ActionError;
use crate::log::LogCategory;
use crate::result::FightReport;

use super::effects::Resolver;

impl<P: ChoiceProvider + ?Sized> Resolver<'_, P> {
    /// Resolves a fight between two seats.
    ///
    /// Returns `false` if the fight fizzled because a combatant had no card.
    pub(super) fn fight(&mut self, attacker: usize, defender: usize) -> Result<bool, ActionError> {
        for index in [attacker, defender] {
            if self.state.players[index].hand().is_empty() {
                let message = format!(
                    "{} has no card to fight with. The fight fizzles.",
                    self.name_of(index)
                );
                self.log(message, LogCategory::Combat);
                return Ok(false);
            }
        }

        let attacker_index = self.pick_fighter(attacker)?;
        let defender_index = self.pick_fighter(defender)?;
        let attacker_card = self.state.players[attacker].hand()[attacker_index];
        let defender_card = self.state.players[defender].hand()[defender_index];

        let attacker_bonus = self.spend_token(attacker);
        let defender_bonus = self.spend_token(defender);
        let outcome = combat::resolve(&attacker_card, &defender_card, attacker_bonus, defender_bonus);
        let attacker_value = combat::effective_value(&attacker_card, attacker_bonus);
        let defender_value = combat::effective_value(&defender_card, defender_bonus);

        let attacker_side = format!(
            "{}'s {} ({attacker_value})",
            self.name_of(attacker),
            attacker_card.name
        );
        let defender_side = format!(
            "{}'s {} ({defender_value})",
            self.name_of(defender),
            defender_card.name
        );
        let message = match outcome {
            Outcome::AttackerWins => format!("{attacker_side} defeats {defender_side}."),
            Outcome::DefenderWins => format!("{defender_side} defeats {attacker_side}."),
            Outcome::Tie => format!("Tie! {attacker_side} and {defender_side} hold each other off."),
        };
        self.log(message, LogCategory::Combat);

        self.result.fights.push(FightReport {
            attacker: self.id_of(attacker),
            defender: self.id_of(defender),
            attacker_card,
            defender_card,
            attacker_value,
            defender_value,
            outcome,
        });

        match outcome {
            Outcome::AttackerWins => {
                self.defeat(defender, defender_index)?;
            }
            Outcome::DefenderWins => {
                self.defeat(attacker, attacker_index)?;
            }
            Outcome::Tie => {}
        }
        Ok(true)
    }

    /// Asks a combatant which card to fight with. A single card is used
    /// without asking; declining picks the first card.
    fn pick_fighter(&mut self, index: usize) -> Result<usize, ActionError> {
        let hand = self.state.players[index].hand().to_vec();
        if hand.len() == 1 {
            return Ok(0);
        }

        let count = hand.len();
        let owner = self.id_of(index);
        match self.ask(index, ChoiceKind::ChooseHandCard { owner, hand }) {
            Choice::Card(hand_index) if hand_index < count => Ok(hand_index),
            Choice::Decline => Ok(0),
            _ => Err(ActionError::InvalidEffectTarget),
        }
    }

    /// Spends one of the player's tokens for the fight bonus, returning it to
    /// the pool.
    fn spend_token(&mut self, index: usize) -> bool {
        if !self.state.players[index].spend_token() {
            return false;
        }
        self.state.power_token_pool += 1;

        let message = format!(
            "{} spends a power token for +{}.",
            self.name_of(index),
            combat::TOKEN_BONUS
        );
        self.log(message, LogCategory::Combat);
        true
    }
}
