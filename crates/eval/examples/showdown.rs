// Copyright (C) 2025 Showdown contributors
// SPDX-License-Identifier: Apache-2.0
//
// Deals a table of players and a board from a shuffled deck, evaluates each
// player's best hand and announces the winner:
//
// ```bash
// $ RUST_LOG=info cargo r --example showdown -- --players 4 --seed 7
// Board: QD 8C 5S 2H TD
// Player 1: KD 3C    One Pair
// ...
// ```
use anyhow::{Result, ensure};
use clap::Parser;
use rand::prelude::*;

use showdown_eval::{Card, Deck, HandValue};

#[derive(Parser)]
struct Args {
    /// Number of players at the table.
    #[arg(long, default_value_t = 4)]
    players: usize,
    /// Seed for the deck shuffle, random if not given.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    ensure!(
        (2..=22).contains(&args.players),
        "players must be between 2 and 22"
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut deck = Deck::new_and_shuffled(&mut rng);

    // Two hole cards per player, then the board.
    let holes = (0..args.players)
        .map(|_| [deck.deal(), deck.deal()])
        .collect::<Vec<_>>();
    let board = (0..5).map(|_| deck.deal()).collect::<Vec<_>>();
    log::info!("{} cards left in the deck", deck.count());

    let board_str = board
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("Board: {board_str}");

    let mut winner = 0;
    let mut best = None;

    for (player, hole) in holes.iter().enumerate() {
        let mut cards = hole.to_vec();
        cards.extend_from_slice(&board);

        let value = HandValue::eval_best_of_seven(&cards)?;
        log::debug!("player {} value {:#010x}", player + 1, value.value());
        println!("Player {}: {} {}    {}", player + 1, hole[0], hole[1], value);

        if best.is_none_or(|b| value > b) {
            best = Some(value);
            winner = player;
        }
    }

    println!("Player {} wins", winner + 1);

    Ok(())
}
