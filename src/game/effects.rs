//! Card effect resolution.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Effect, MAX_CARD_VALUE};
use crate::choice::{Choice, ChoiceKind, ChoiceProvider, ChoiceRequest};
use crate::error::ActionError;
use crate::log::LogCategory;
use crate::player::PlayerId;
use crate::result::EffectResult;

use super::GameState;

/// Cards a Hero may look at with [`Effect::RearrangeHeroDeck`].
const REARRANGE_COUNT: usize = 3;

/// Lowest value that can be defeated by the Soul Stone.
const SOUL_STONE_MIN: u8 = 3;

/// Highest value that can be defeated by Corvus Glaive.
const CORVUS_GLAIVE_MAX: u8 = 3;

/// Resolves one effect for one actor against a working copy of the state.
///
/// Every decision goes through the provider. Any answer that does not fit its
/// request aborts resolution with [`ActionError::InvalidEffectTarget`], and the
/// caller discards the working copy.
pub(super) struct Resolver<'a, P: ChoiceProvider + ?Sized> {
    pub(super) state: &'a mut GameState,
    rng: &'a mut ChaCha8Rng,
    provider: &'a mut P,
    /// Seat of the player resolving the effect.
    actor: usize,
    /// Effect named in choice requests. Differs from the result's effect
    /// while the Time Stone copies another card.
    current: Effect,
    pub(super) result: EffectResult,
}

impl<'a, P: ChoiceProvider + ?Sized> Resolver<'a, P> {
    pub(super) const fn new(
        state: &'a mut GameState,
        rng: &'a mut ChaCha8Rng,
        provider: &'a mut P,
        actor: usize,
        effect: Effect,
    ) -> Self {
        Self {
            state,
            rng,
            provider,
            actor,
            current: effect,
            result: EffectResult::new(effect),
        }
    }

    /// Resolves the effect and returns what it did.
    pub(super) fn run(mut self) -> Result<EffectResult, ActionError> {
        self.apply(self.result.effect)?;
        Ok(self.result)
    }

    fn apply(&mut self, effect: Effect) -> Result<(), ActionError> {
        self.current = effect;

        match effect {
            Effect::TakePowerToken | Effect::ProximaMidnight => self.grant(1),
            Effect::PowerStone => self.grant(3),
            Effect::GuessThanosHand => {
                let thanos = self.state.thanos_index;
                self.guess_and_defeat(thanos)
            }
            Effect::Outrider => {
                let opponents = self.opponents();
                match self.choose_opponent(&opponents)? {
                    Some(target) => self.guess_and_defeat(target),
                    None => self.fizzle("declines to choose an opponent"),
                }
            }
            Effect::MindStone => self.mind_stone(),
            Effect::PeekAtThanosHand => self.peek_at_thanos_hand(),
            Effect::MayFightThanos => self.may_fight_thanos(),
            Effect::CompelFight => self.compel_fight(),
            Effect::SoulStone => {
                self.defeat_matching(|card| card.value >= SOUL_STONE_MIN, "3 or higher")
            }
            Effect::CorvusGlaive => {
                self.defeat_matching(|card| card.value <= CORVUS_GLAIVE_MAX, "3 or lower")
            }
            Effect::SpaceStone => self.fight_opponents(2),
            Effect::BlackDwarf => self.fight_opponents(1),
            Effect::RearrangeHeroDeck => self.rearrange_hero_deck(),
            Effect::RealityStone => self.draw_and_bury(2, 2),
            Effect::EbonyMaw => self.draw_and_bury(1, 1),
            Effect::TimeStone => self.time_stone(),
            Effect::Thanos => self.fizzle("cannot use the Thanos card"),
        }
    }

    pub(super) fn id_of(&self, index: usize) -> PlayerId {
        self.state.players[index].id()
    }

    pub(super) fn name_of(&self, index: usize) -> &str {
        self.state.players[index].name()
    }

    /// Asks `chooser` to make a decision for the current effect.
    pub(super) fn ask(&mut self, chooser: usize, kind: ChoiceKind) -> Choice {
        let request = ChoiceRequest {
            chooser: self.id_of(chooser),
            effect: self.current,
            kind,
        };
        self.provider.request_choice(&request)
    }

    pub(super) fn log(&mut self, message: String, category: LogCategory) {
        self.state.add_log(message, category);
    }

    /// Logs that the effect did nothing and marks the result.
    pub(super) fn fizzle(&mut self, reason: &str) -> Result<(), ActionError> {
        let message = format!("{} {reason}. Nothing happens.", self.name_of(self.actor));
        self.log(message, LogCategory::CardEffect);
        self.result.fizzled = true;
        Ok(())
    }

    /// Defeats a card and settles the win conditions. Returns whether the
    /// game is over.
    pub(super) fn defeat(&mut self, index: usize, hand_index: usize) -> Result<bool, ActionError> {
        let defeat = self.state.defeat(index, hand_index, self.rng)?;
        self.result.defeats.push(defeat);
        self.state.settle();
        Ok(self.state.is_over())
    }

    /// Thanos fights the Heroes; a Hero fights Thanos.
    fn opponents(&self) -> Vec<usize> {
        if self.actor == self.state.thanos_index {
            self.state.hero_indices()
        } else {
            alloc::vec![self.state.thanos_index]
        }
    }

    fn ids_of(&self, indices: &[usize]) -> Vec<PlayerId> {
        indices.iter().map(|&index| self.id_of(index)).collect()
    }

    /// Maps a [`Choice::Player`] answer onto one of `candidates`.
    fn pick_player(
        choice: Choice,
        candidates: &[usize],
        ids: &[PlayerId],
    ) -> Result<Option<usize>, ActionError> {
        match choice {
            Choice::Player(id) => ids
                .iter()
                .position(|&candidate| candidate == id)
                .map(|position| Some(candidates[position]))
                .ok_or(ActionError::InvalidEffectTarget),
            Choice::Decline => Ok(None),
            _ => Err(ActionError::InvalidEffectTarget),
        }
    }

    /// Asks the actor to choose an opponent. `None` means declined.
    fn choose_opponent(&mut self, candidates: &[usize]) -> Result<Option<usize>, ActionError> {
        if candidates.is_empty() {
            return Ok(None);
        }
        let ids = self.ids_of(candidates);
        let choice = self.ask(
            self.actor,
            ChoiceKind::ChooseOpponent {
                candidates: ids.clone(),
            },
        );
        Self::pick_player(choice, candidates, &ids)
    }

    /// Asks the actor to choose a Hero. `None` means declined.
    fn choose_hero(&mut self, candidates: &[usize]) -> Result<Option<usize>, ActionError> {
        if candidates.is_empty() {
            return Ok(None);
        }
        let ids = self.ids_of(candidates);
        let choice = self.ask(
            self.actor,
            ChoiceKind::ChooseHero {
                candidates: ids.clone(),
            },
        );
        Self::pick_player(choice, candidates, &ids)
    }

    /// Asks the actor to name a card value. `None` means declined.
    fn guess(&mut self) -> Result<Option<u8>, ActionError> {
        let choice = self.ask(
            self.actor,
            ChoiceKind::GuessValue {
                min: 1,
                max: MAX_CARD_VALUE,
            },
        );
        match choice {
            Choice::Value(value) if (1..=MAX_CARD_VALUE).contains(&value) => Ok(Some(value)),
            Choice::Decline => Ok(None),
            _ => Err(ActionError::InvalidEffectTarget),
        }
    }

    fn confirm(&mut self) -> Result<bool, ActionError> {
        match self.ask(self.actor, ChoiceKind::Confirm) {
            Choice::Confirm(confirmed) => Ok(confirmed),
            Choice::Decline => Ok(false),
            _ => Err(ActionError::InvalidEffectTarget),
        }
    }

    fn grant(&mut self, count: u32) -> Result<(), ActionError> {
        let granted = self.state.grant_tokens(self.actor, count);
        self.result.tokens_granted += granted;
        if granted == 0 {
            self.result.fizzled = true;
        }
        Ok(())
    }

    /// Guesses a value in `target`'s hand and defeats one matching card.
    fn guess_and_defeat(&mut self, target: usize) -> Result<(), ActionError> {
        let Some(value) = self.guess()? else {
            return self.fizzle("declines to guess");
        };

        let found = self.state.players[target].position_of_value(value);
        let message = format!(
            "{} guesses {value}: {} {}.",
            self.name_of(self.actor),
            self.name_of(target),
            if found.is_some() { "has it" } else { "does not have it" }
        );
        self.log(message, LogCategory::CardEffect);

        match found {
            Some(hand_index) => self.defeat(target, hand_index).map(|_| ()),
            None => {
                self.result.fizzled = true;
                Ok(())
            }
        }
    }

    fn mind_stone(&mut self) -> Result<(), ActionError> {
        let Some(value) = self.guess()? else {
            return self.fizzle("declines to guess");
        };

        let message = format!("{} names {value} with the Mind Stone.", self.name_of(self.actor));
        self.log(message, LogCategory::CardEffect);

        let mut hits = 0;
        for target in self.opponents() {
            let Some(hand_index) = self.state.players[target].position_of_value(value) else {
                continue;
            };
            hits += 1;
            if self.defeat(target, hand_index)? {
                break;
            }
        }

        if hits == 0 {
            return self.fizzle(&format!("finds no opponent holding a {value}"));
        }
        Ok(())
    }

    fn peek_at_thanos_hand(&mut self) -> Result<(), ActionError> {
        let candidates: Vec<usize> = self
            .state
            .hero_indices()
            .into_iter()
            .filter(|&index| index != self.actor)
            .collect();

        if candidates.is_empty() {
            return self.fizzle("has no other Hero to share a peek with");
        }
        let Some(viewer) = self.choose_hero(&candidates)? else {
            return self.fizzle("declines to share a peek");
        };

        let hand = self.state.players[self.state.thanos_index].hand().to_vec();
        let viewer_id = self.id_of(viewer);
        self.provider.reveal(viewer_id, &hand);

        let message = format!(
            "{} lets {} peek at Thanos's hand.",
            self.name_of(self.actor),
            self.name_of(viewer)
        );
        self.log(message, LogCategory::CardEffect);
        Ok(())
    }

    fn may_fight_thanos(&mut self) -> Result<(), ActionError> {
        let thanos = self.state.thanos_index;
        if self.actor == thanos {
            return self.fizzle("cannot fight Thanos as Thanos");
        }
        if !self.confirm()? {
            return self.fizzle("chooses not to fight");
        }
        if !self.fight(self.actor, thanos)? {
            self.result.fizzled = true;
        }
        Ok(())
    }

    fn compel_fight(&mut self) -> Result<(), ActionError> {
        let heroes = self.state.hero_indices();
        let Some(hero) = self.choose_hero(&heroes)? else {
            return self.fizzle("compels no one to fight");
        };

        let message = format!(
            "{} compels {} to fight Thanos.",
            self.name_of(self.actor),
            self.name_of(hero)
        );
        self.log(message, LogCategory::CardEffect);

        if !self.fight(hero, self.state.thanos_index)? {
            self.result.fizzled = true;
        }
        Ok(())
    }

    /// Defeats the first card in a chosen opponent's hand that satisfies
    /// `matches`.
    fn defeat_matching(
        &mut self,
        matches: impl Fn(&Card) -> bool,
        description: &str,
    ) -> Result<(), ActionError> {
        let opponents = self.opponents();
        let Some(target) = self.choose_opponent(&opponents)? else {
            return self.fizzle("declines to choose an opponent");
        };

        let Some(hand_index) = self.state.players[target].hand().iter().position(matches) else {
            let reason = format!("finds no card {description} in {}'s hand", self.name_of(target));
            return self.fizzle(&reason);
        };

        self.defeat(target, hand_index).map(|_| ())
    }

    /// Fights up to `count` different opponents, one at a time.
    fn fight_opponents(&mut self, count: usize) -> Result<(), ActionError> {
        let mut remaining = self.opponents();
        let mut fought = 0;

        while fought < count && !self.state.is_over() {
            let Some(target) = self.choose_opponent(&remaining)? else {
                break;
            };
            remaining.retain(|&index| index != target);
            if self.fight(self.actor, target)? {
                fought += 1;
            }
        }

        if fought == 0 && !self.state.is_over() {
            self.result.fizzled = true;
        }
        Ok(())
    }

    fn rearrange_hero_deck(&mut self) -> Result<(), ActionError> {
        let cards = self.state.hero_deck.peek_top(REARRANGE_COUNT);
        if cards.is_empty() {
            return self.fizzle("finds the Hero deck empty");
        }

        let count = cards.len();
        match self.ask(self.actor, ChoiceKind::ArrangeCards { cards }) {
            Choice::Order(order) => {
                if order.len() != count || !self.state.hero_deck.rearrange_top(&order) {
                    return Err(ActionError::InvalidEffectTarget);
                }
            }
            Choice::Decline => {}
            _ => return Err(ActionError::InvalidEffectTarget),
        }

        let message = format!(
            "{} looks at the top {count} cards of the Hero deck.",
            self.name_of(self.actor)
        );
        self.log(message, LogCategory::CardEffect);
        Ok(())
    }

    /// Draws `draw` cards, then puts `bury` cards from hand on the bottom of
    /// the actor's deck.
    fn draw_and_bury(&mut self, draw: usize, bury: usize) -> Result<(), ActionError> {
        let mut drawn = 0;
        for _ in 0..draw {
            if self.state.draw_into_hand(self.actor, self.rng).is_some() {
                drawn += 1;
            }
        }

        let mut buried = 0;
        while buried < bury {
            let hand = self.state.players[self.actor].hand().to_vec();
            if hand.is_empty() {
                break;
            }

            let owner = self.id_of(self.actor);
            let last = hand.len() - 1;
            let hand_index = match self.ask(self.actor, ChoiceKind::ChooseHandCard { owner, hand }) {
                Choice::Card(index) if index <= last => index,
                Choice::Decline => last,
                _ => return Err(ActionError::InvalidEffectTarget),
            };

            let card = self.state.players[self.actor]
                .remove_from_hand(hand_index)
                .map_err(|_| ActionError::InvalidEffectTarget)?;
            self.state.deck_of_mut(self.actor).add_to_bottom(card);
            buried += 1;
        }

        let message = format!(
            "{} draws {drawn} card{} and places {buried} on the bottom of the deck.",
            self.name_of(self.actor),
            if drawn == 1 { "" } else { "s" }
        );
        self.log(message, LogCategory::CardEffect);
        Ok(())
    }

    fn time_stone(&mut self) -> Result<(), ActionError> {
        let candidates: Vec<Card> = self
            .state
            .deck_of(self.actor)
            .discard_pile()
            .iter()
            .filter(|card| !matches!(card.effect, Effect::TimeStone | Effect::Thanos))
            .copied()
            .collect();
        if candidates.is_empty() {
            return self.fizzle("finds nothing in the discard pile to copy");
        }

        let choice = self.ask(
            self.actor,
            ChoiceKind::ChooseDiscard {
                candidates: candidates.clone(),
            },
        );
        let copied = match choice {
            Choice::Card(index) => *candidates
                .get(index)
                .ok_or(ActionError::InvalidEffectTarget)?,
            Choice::Decline => return self.fizzle("declines to copy a card"),
            _ => return Err(ActionError::InvalidEffectTarget),
        };

        let message = format!("The Time Stone copies {}.", copied.name);
        self.log(message, LogCategory::CardEffect);
        self.apply(copied.effect)
    }
}
