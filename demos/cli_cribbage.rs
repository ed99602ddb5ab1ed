//! CLI cribbage example.
//!
//! Plays a seeded game between automated teams and prints each round.
//! Usage: `cargo run --example cli_cribbage -- [teams] [players-per-team] [seed]`.
//! Set `RUST_LOG=cribrs=debug` to follow the engine's decisions.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use cribrs::{Card, Game, GameOptions, PlayEvent, RoundResult};
use tracing_subscriber::EnvFilter;

const MAX_ROUNDS: u32 = 500;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let teams = parse_arg(args.next(), 2);
    let players_per_team = parse_arg(args.next(), 1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let options = GameOptions::default()
        .with_teams(teams)
        .with_players_per_team(players_per_team);
    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    println!(
        "Cribbage: {teams} team(s) of {players_per_team}, seed {seed} (target {})",
        options.target_score
    );

    let mut round_number = 0;
    while !game.is_game_over() && round_number < MAX_ROUNDS {
        round_number += 1;
        match game.play_round() {
            Ok(result) => print_round(round_number, &result),
            Err(err) => {
                println!("Round error: {err}");
                break;
            }
        }
    }

    match game.winner() {
        Some(team) => println!("\nTeam {team} wins with {} points.", game.team_score(team)),
        None => println!("\nNo winner after {round_number} rounds."),
    }
}

fn parse_arg(arg: Option<String>, default: u8) -> u8 {
    arg.and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn print_round(number: u32, result: &RoundResult) {
    println!("\n== Round {number} (dealer: seat {}) ==", result.dealer);
    if let Some(cut) = result.cut {
        println!("Cut: {cut}");
    }
    if result.his_heels > 0 {
        println!("His heels: {} for the dealer", result.his_heels);
    }

    let mut line = String::new();
    for event in &result.play_events {
        match *event {
            PlayEvent::Played {
                seat,
                card,
                points,
                count,
            } => {
                line.push_str(&format!(" {seat}:{card}({count})"));
                if points > 0 {
                    line.push_str(&format!("+{points}"));
                }
                if count == 31 {
                    println!("Play:{line}");
                    line.clear();
                }
            }
            PlayEvent::Pass { .. } => {}
            PlayEvent::LastCard { seat, points } => {
                println!("Play:{line} | go, seat {seat} +{points}");
                line.clear();
            }
        }
    }
    if !line.is_empty() {
        println!("Play:{line}");
    }

    for show in &result.shows {
        println!(
            "Seat {} shows {}: {} ({:?})",
            show.seat,
            format_cards(&show.cards),
            show.score.total(),
            show.score
        );
    }
    if let Some(crib) = result.crib {
        println!("Crib: {} ({crib:?})", crib.total());
    }

    let scores: Vec<String> = result
        .team_scores
        .iter()
        .enumerate()
        .map(|(team, score)| format!("team {team}: {score}"))
        .collect();
    println!("Scores: {}", scores.join(", "));
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
