// Copyright (C) 2025 Showdown contributors
// SPDX-License-Identifier: Apache-2.0
//
// Samples random 7 cards hands and prints the category frequencies:
//
// ```bash
// $ cargo r --release --example hand_stats -- --hands 1000000 --seed 42
// Total hands      1000000
// Elapsed:         0.812s
// Hands/sec:       1231527
//
// High Card:       173415
// One Pair:        438576
// ...
// ```
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use rand::prelude::*;

use showdown_eval::{Deck, HandRank, HandValue};

#[derive(Parser)]
struct Args {
    /// Number of hands to sample.
    #[arg(long, default_value_t = 100_000)]
    hands: usize,
    /// Seed for the deck shuffles, random if not given.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let now = Instant::now();
    let mut counts = [0usize; 9];
    let mut hand = Vec::with_capacity(7);

    for _ in 0..args.hands {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        hand.clear();
        hand.extend((0..7).map(|_| deck.deal()));

        let value = HandValue::eval_best_of_seven(&hand)?;
        counts[value.rank() as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandRank::HighCard as usize]);
    println!("One Pair:        {}", counts[HandRank::OnePair as usize]);
    println!("Two Pair:        {}", counts[HandRank::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandRank::Straight as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Full House:      {}", counts[HandRank::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandRank::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandRank::StraightFlush as usize]);

    Ok(())
}
