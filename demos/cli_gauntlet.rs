//! CLI Infinity Gauntlet example (hot-seat).

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use gauntlet::{
    Card, Choice, ChoiceKind, ChoiceProvider, ChoiceRequest, Game, GameOptions, LogCategory,
    LogEntry, Phase, PlayerId, Winner,
};

fn main() {
    println!("Infinity Gauntlet CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);
    game.on_log_entry(print_entry);

    let names = prompt_names();
    if names.is_empty() {
        return;
    }
    let Some(thanos) = prompt_usize(&format!("Who plays Thanos? (1-{}): ", names.len())) else {
        return;
    };
    if let Err(err) = game.initialize(&names, thanos.saturating_sub(1)) {
        println!("Setup error: {err}");
        return;
    }

    let mut provider = Stdin;
    while game.phase() == Phase::Playing {
        let Some(player_id) = game.current_player() else {
            break;
        };
        print_table(&game, player_id);

        if prompt_line("Draw a card first? (y/n): ") == "y" {
            if let Err(err) = game.draw_card(player_id) {
                game.add_log(format!("Rejected: {err}."), LogCategory::Error);
            }
            print_table(&game, player_id);
        }

        let Some(index) = prompt_usize("Card to play (number, 0 to pass): ") else {
            return;
        };
        if index > 0 {
            if let Err(err) = game.play_card(player_id, index - 1, &mut provider) {
                game.add_log(format!("Rejected: {err}."), LogCategory::Error);
                continue;
            }
        }

        if game.phase() == Phase::Playing {
            let _ = game.next_turn();
        }
    }

    if let Some(result) = game.winner() {
        let side = match result.winner {
            Winner::Thanos => "Thanos",
            Winner::Heroes => "The Heroes",
        };
        println!("{side} won ({:?}).", result.reason);
    }
}

/// Asks the player at the keyboard for every decision.
struct Stdin;

impl ChoiceProvider for Stdin {
    fn request_choice(&mut self, request: &ChoiceRequest) -> Choice {
        println!(
            "Player {} resolving {:?}: {}",
            request.chooser,
            request.effect,
            request.effect.description()
        );

        match &request.kind {
            ChoiceKind::GuessValue { min, max } => {
                prompt_number(&format!("Guess a value ({min}-{max}): "))
                    .map_or(Choice::Decline, |value| {
                        Choice::Value(u8::try_from(value).unwrap_or(u8::MAX))
                    })
            }
            ChoiceKind::ChooseOpponent { candidates } | ChoiceKind::ChooseHero { candidates } => {
                let listed: Vec<String> = candidates.iter().map(ToString::to_string).collect();
                prompt_number(&format!("Choose a player ({}): ", listed.join(", ")))
                    .map_or(Choice::Decline, |id| {
                        Choice::Player(PlayerId::try_from(id).unwrap_or(PlayerId::MAX))
                    })
            }
            ChoiceKind::Confirm => match prompt_line("Go ahead? (y/n): ").as_str() {
                "y" | "yes" => Choice::Confirm(true),
                _ => Choice::Confirm(false),
            },
            ChoiceKind::ChooseHandCard { hand, .. } => {
                println!("{}", format_cards(hand));
                pick_card("Pick a card: ")
            }
            ChoiceKind::ChooseDiscard { candidates } => {
                println!("{}", format_cards(candidates));
                pick_card("Pick a card to copy: ")
            }
            ChoiceKind::ArrangeCards { cards } => {
                println!("Top of the Hero deck: {}", format_cards(cards));
                let input = prompt_line("New order, top first (e.g. 3 1 2, blank keeps it): ");
                if input.is_empty() {
                    return Choice::Decline;
                }
                let order: Option<Vec<usize>> = input
                    .split_whitespace()
                    .map(|part| part.parse::<usize>().ok()?.checked_sub(1))
                    .collect();
                order.map_or(Choice::Decline, Choice::Order)
            }
        }
    }

    fn reveal(&mut self, viewer: PlayerId, cards: &[Card]) {
        println!(
            "{}",
            colorize(
                &format!("(Player {viewer} only) Thanos holds: {}", format_cards(cards)),
                "35"
            )
        );
    }
}

fn pick_card(prompt: &str) -> Choice {
    prompt_number(prompt)
        .and_then(|number| number.checked_sub(1))
        .map_or(Choice::Decline, Choice::Card)
}

fn print_entry(entry: &LogEntry) {
    let code = match entry.category {
        LogCategory::Setup | LogCategory::Turn => "36",
        LogCategory::CardPlay | LogCategory::CardEffect => "37",
        LogCategory::Combat => "33",
        LogCategory::LifeLoss | LogCategory::Error => "31",
        LogCategory::InfinityStone | LogCategory::GameOver => "35",
        LogCategory::Shuffle => "90",
    };
    println!("{}", colorize(&entry.to_string(), code));
}

fn print_table(game: &Game, player_id: PlayerId) {
    let snapshot = game.snapshot();
    println!(
        "\nTurn {} | Hero life {} | Thanos life {} | Tokens in pool {} | Stones {}/6",
        snapshot.turn_number,
        snapshot.hero_life,
        snapshot.thanos_life,
        snapshot.power_token_pool,
        snapshot.collected_stones.len()
    );

    for player in &snapshot.players {
        let marker = if player.id == player_id { "*" } else { " " };
        let role = if player.is_thanos { "Thanos" } else { "Hero" };
        println!(
            "{marker} [{}] {} ({role}) | {} card(s) | {} token(s)",
            player.id, player.name, player.hand_size, player.tokens
        );
    }

    if let Some(player) = snapshot.players.iter().find(|player| player.id == player_id) {
        println!("\n{}'s hand: {}", player.name, format_cards(&player.hand));
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{}) {card}", index + 1))
        .collect::<Vec<_>>()
        .join("  ")
}

fn prompt_names() -> Vec<String> {
    let input = prompt_raw("Player names, comma separated: ");
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_owned()
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).to_lowercase()
}

/// Reads a number; a blank line declines.
fn prompt_number(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number, or nothing to decline."),
        }
    }
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
