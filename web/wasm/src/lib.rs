use core::num::TryFromIntError;

use gauntlet::{
    Choice, Game, GameOptions, GameSnapshot, LogEntry, Phase, PlayOutcome, PlayerId,
    ScriptedChoices, WinReason, Winner,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&self) {
        self.game.reset();
    }

    pub fn reseed(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    pub fn initialize(&self, names: JsValue, thanos_index: u32) -> Result<(), JsValue> {
        let names: Vec<String> = serde_wasm_bindgen::from_value(names).map_err(js_err)?;
        self.game
            .initialize(&names, thanos_index as usize)
            .map_err(js_err)
    }

    /// Plays a card, answering the effect's decisions from `choices` in order.
    pub fn play_card(
        &self,
        player_id: u32,
        hand_index: u32,
        choices: JsValue,
    ) -> Result<JsValue, JsValue> {
        let player_id = seat(player_id).map_err(js_err)?;
        let mut provider = scripted(choices)?;
        let outcome = self
            .game
            .play_card(player_id, hand_index as usize, &mut provider)
            .map_err(js_err)?;
        to_js_value(&JsPlay::new(outcome, &provider))
    }

    pub fn defeat_card(&self, player_id: u32, hand_index: u32) -> Result<JsValue, JsValue> {
        let player_id = seat(player_id).map_err(js_err)?;
        let defeat = self
            .game
            .defeat_card(player_id, hand_index as usize)
            .map_err(js_err)?;
        to_js_value(&defeat)
    }

    pub fn take_power_token(&self, player_id: u32, count: u32) -> Result<u32, JsValue> {
        let player_id = seat(player_id).map_err(js_err)?;
        self.game
            .take_power_token(player_id, count)
            .map_err(js_err)
    }

    pub fn draw_card(&self, player_id: u32) -> Result<JsValue, JsValue> {
        let player_id = seat(player_id).map_err(js_err)?;
        let card = self.game.draw_card(player_id).map_err(js_err)?;
        to_js_value(&card)
    }

    pub fn next_turn(&self) -> Result<u32, JsValue> {
        self.game
            .next_turn()
            .map(|player_id| player_id as u32)
            .map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.game.snapshot();
        let winner = snapshot.winner.map(|result| JsWinner {
            side: winner_to_str(result.winner),
            reason: reason_to_str(result.reason),
        });

        to_js_value(&Snapshot {
            phase: phase_to_str(snapshot.phase),
            winner,
            table: snapshot,
        })
    }

    pub fn log_since(&self, sequence: f64) -> Result<JsValue, JsValue> {
        let entries: Vec<LogEntry> = self.game.log_since(sequence as u64);
        to_js_value(&entries)
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    winner: Option<JsWinner>,
    table: GameSnapshot,
}

#[derive(Serialize)]
struct JsWinner {
    side: &'static str,
    reason: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsPlay {
    outcome: PlayOutcome,
    reveals: Vec<JsReveal>,
    unused_choices: u32,
}

impl JsPlay {
    fn new(outcome: PlayOutcome, provider: &ScriptedChoices) -> Self {
        Self {
            outcome,
            reveals: provider
                .reveals()
                .iter()
                .map(|(viewer, cards)| JsReveal {
                    viewer: *viewer as u32,
                    cards: cards.iter().map(ToString::to_string).collect(),
                })
                .collect(),
            unused_choices: provider.remaining() as u32,
        }
    }
}

#[derive(Serialize)]
struct JsReveal {
    viewer: u32,
    cards: Vec<String>,
}

/// Player ids from JS are `u32`; anything past the last seat id is rejected
/// rather than wrapped onto a real seat.
fn seat(player_id: u32) -> Result<PlayerId, TryFromIntError> {
    PlayerId::try_from(player_id)
}

fn scripted(choices: JsValue) -> Result<ScriptedChoices, JsValue> {
    if choices.is_undefined() || choices.is_null() {
        return Ok(ScriptedChoices::default());
    }
    let choices: Vec<Choice> = serde_wasm_bindgen::from_value(choices).map_err(js_err)?;
    Ok(ScriptedChoices::new(choices))
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Setup => "Setup",
        Phase::Playing => "Playing",
        Phase::GameOver => "GameOver",
    }
}

fn winner_to_str(winner: Winner) -> &'static str {
    match winner {
        Winner::Thanos => "Thanos",
        Winner::Heroes => "Heroes",
    }
}

fn reason_to_str(reason: WinReason) -> &'static str {
    match reason {
        WinReason::Life => "Life",
        WinReason::Snap => "Snap",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
