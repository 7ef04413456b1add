// Copyright (C) 2025 Showdown contributors
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Given a 7 cards hand this crate finds the best 5 cards poker hand and
//! returns a [HandValue] that totally orders hands by the standard poker
//! ranking, breaking ties by kickers. The evaluation is a brute force scan of
//! the 21 distinct 5 cards subsets, classifying each with a count based
//! classifier.
//!
//! To rank players hands evaluate each 7 cards hand and compare the values:
//!
//! ```
//! # use showdown_eval::*;
//! let royal = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::Queen, Suit::Spades),
//!     Card::new(Rank::Jack, Suit::Spades),
//!     Card::new(Rank::Ten, Suit::Spades),
//!     Card::new(Rank::Deuce, Suit::Hearts),
//!     Card::new(Rank::Trey, Suit::Hearts),
//! ];
//! let value = HandValue::eval_best_of_seven(&royal).unwrap();
//! assert_eq!(value.rank(), HandRank::StraightFlush);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combos;
pub mod eval;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
