// Copyright (C) 2025 Showdown contributors
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classification and ranking.
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use showdown_cards::Card;

use crate::combos::Combos5;

/// Poker hand categories from the weakest to the strongest.
///
/// Any hand of a higher category beats any hand of a lower category
/// regardless of kickers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HandRank {
    /// No pair, ranked by the five cards.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five consecutive ranks, the wheel A2345 plays the ace low.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of a classified poker hand.
///
/// A value packs the hand category and its tie break ranks into a single
/// scalar so that comparing two values follows the poker ordering: the
/// category occupies the most significant bits, below it each tie break rank
/// takes a 4 bits field, most significant first. Values compare by the scalar
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    value: u32,
}

impl HandValue {
    /// Evaluates a 5 cards hand.
    ///
    /// Classifies the hand into its category and tie break ranks. The result
    /// depends only on the multiset of cards, not their order. Fails unless
    /// given exactly 5 cards.
    pub fn eval_five(cards: &[Card]) -> Result<HandValue> {
        ensure!(
            cards.len() == 5,
            "expected 5 cards, got {}",
            cards.len()
        );

        Ok(classify(cards.try_into()?))
    }

    /// Evaluates the best 5 cards hand out of a 7 cards hand.
    ///
    /// Scans all 21 distinct 5 cards subsets and returns the highest value.
    /// Fails unless given exactly 7 cards.
    pub fn eval_best_of_seven(cards: &[Card]) -> Result<HandValue> {
        ensure!(
            cards.len() == 7,
            "expected 7 cards, got {}",
            cards.len()
        );

        let mut subset: [Card; 5] = cards[..5].try_into()?;
        let mut best = classify(&subset);

        for combo in Combos5::new(7).skip(1) {
            for (slot, &i) in subset.iter_mut().zip(combo.iter()) {
                *slot = cards[i];
            }

            let value = classify(&subset);
            if value > best {
                best = value;
            }
        }

        Ok(best)
    }

    /// Returns the hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// Returns the packed category and tie break ranks scalar.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Packs a category and its tie break ranks into a value.
    ///
    /// The primary `keys` come first, then the `kickers` tail, up to 7 fields
    /// of 4 bits each below the category. Unused fields stay zero; fields
    /// redundant with the keys cannot change the comparison because the
    /// earlier fields dominate.
    fn encode(rank: HandRank, keys: &[u8], kickers: &[u8]) -> HandValue {
        debug_assert!(keys.len() + kickers.len() <= 7);

        let mut value = (rank as u32) << 28;
        for (i, &r) in keys.iter().chain(kickers).enumerate() {
            value |= (r as u32) << (24 - 4 * i as u32);
        }

        HandValue { rank, value }
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)
    }
}

/// Classifies a 5 cards hand.
fn classify(cards: &[Card; 5]) -> HandValue {
    let mut rank_counts = [0u8; 13];
    let mut suit_counts = [0u8; 4];

    for card in cards {
        rank_counts[card.rank() as usize] += 1;
        suit_counts[card.suit() as usize] += 1;
    }

    let is_flush = suit_counts.contains(&5);
    let straight_high = straight_high(&rank_counts);
    let ordered = ranks_descending(&rank_counts);

    // Priority ordered checks, a higher category can coexist with a lower
    // one so the first match wins.
    if is_flush && straight_high > 0 {
        return HandValue::encode(HandRank::StraightFlush, &[straight_high], &[]);
    }

    if let Some(quad) = find_of_a_kind(&rank_counts, 4) {
        return HandValue::encode(HandRank::FourOfAKind, &[quad], &ordered);
    }

    if let Some((trips, pair)) = find_full_house(&rank_counts) {
        return HandValue::encode(HandRank::FullHouse, &[trips, pair], &[]);
    }

    if is_flush {
        return HandValue::encode(HandRank::Flush, &ordered, &[]);
    }

    if straight_high > 0 {
        return HandValue::encode(HandRank::Straight, &[straight_high], &[]);
    }

    if let Some(trips) = find_of_a_kind(&rank_counts, 3) {
        return HandValue::encode(HandRank::ThreeOfAKind, &[trips], &ordered);
    }

    if let Some((high, low)) = find_two_pair(&rank_counts) {
        return HandValue::encode(HandRank::TwoPair, &[high, low], &ordered);
    }

    if let Some(pair) = find_of_a_kind(&rank_counts, 2) {
        return HandValue::encode(HandRank::OnePair, &[pair], &ordered);
    }

    HandValue::encode(HandRank::HighCard, &ordered, &[])
}

/// Returns the poker value of the straight top card, or 0 if there is no
/// straight.
///
/// The wheel A2345 reports 5, the lowest straight.
fn straight_high(rank_counts: &[u8; 13]) -> u8 {
    if rank_counts[12] > 0 && rank_counts[..4].iter().all(|&c| c > 0) {
        return 5;
    }

    for i in (0..=8).rev() {
        if rank_counts[i..i + 5].iter().all(|&c| c > 0) {
            return (i + 6) as u8;
        }
    }

    0
}

/// Expands the rank counts into the 5 poker values in descending order,
/// duplicates adjacent.
fn ranks_descending(rank_counts: &[u8; 13]) -> [u8; 5] {
    let mut ranks = [0u8; 5];
    let mut next = 0;

    for i in (0..13).rev() {
        for _ in 0..rank_counts[i] {
            ranks[next] = (i + 2) as u8;
            next += 1;
        }
    }

    ranks
}

/// Returns the highest rank with exactly `count` cards.
fn find_of_a_kind(rank_counts: &[u8; 13], count: u8) -> Option<u8> {
    (0..13)
        .rev()
        .find(|&i| rank_counts[i] == count)
        .map(|i| (i + 2) as u8)
}

/// Returns the trips and pair ranks of a full house.
fn find_full_house(rank_counts: &[u8; 13]) -> Option<(u8, u8)> {
    let trips = find_of_a_kind(rank_counts, 3)?;
    let pair = (0..13)
        .rev()
        .find(|&i| rank_counts[i] >= 2 && (i + 2) as u8 != trips)
        .map(|i| (i + 2) as u8)?;

    Some((trips, pair))
}

/// Returns the two pair ranks, higher first.
fn find_two_pair(rank_counts: &[u8; 13]) -> Option<(u8, u8)> {
    let mut high = None;
    for i in (0..13).rev() {
        if rank_counts[i] == 2 {
            match high {
                None => high = Some((i + 2) as u8),
                Some(h) => return Some((h, (i + 2) as u8)),
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::{Rank, Suit};

    fn card(s: &str) -> Card {
        let mut chars = s.chars();
        let rank = match chars.next().unwrap() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            c => panic!("invalid rank {c}"),
        };
        let suit = match chars.next().unwrap() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            c => panic!("invalid suit {c}"),
        };
        Card::new(rank, suit)
    }

    fn hand(s: &str) -> Vec<Card> {
        s.split_whitespace().map(card).collect()
    }

    fn eval5(s: &str) -> HandValue {
        HandValue::eval_five(&hand(s)).unwrap()
    }

    fn eval7(s: &str) -> HandValue {
        HandValue::eval_best_of_seven(&hand(s)).unwrap()
    }

    #[test]
    fn high_card() {
        let v = eval5("AS KD QC JH 9S");
        assert_eq!(v.rank(), HandRank::HighCard);

        // Packed as category then the five descending ranks.
        assert_eq!(
            v.value(),
            (14 << 24) | (13 << 20) | (12 << 16) | (11 << 12) | (9 << 8)
        );

        // Last kicker decides.
        assert!(v > eval5("AS KD QC JH 8S"));
        assert_eq!(v, eval5("AS KD QC JH 9C"));
    }

    #[test]
    fn one_pair() {
        let v = eval5("AS AD KC QH JS");
        assert_eq!(v.rank(), HandRank::OnePair);

        // Same pair, kickers decide.
        assert!(v > eval5("AS AD KC QH 9S"));

        // Higher pair beats higher kickers.
        assert!(eval5("QS QD 4C 3H 2S") > eval5("JS JD AC KH QC"));
    }

    #[test]
    fn two_pair() {
        let v = eval5("KS KD 2C 2H AS");
        assert_eq!(v.rank(), HandRank::TwoPair);

        // Higher pair dominates.
        assert!(v > eval5("QS QD JC JH AD"));

        // Same high pair, lower pair decides.
        assert!(eval5("AS AD KC KH 2S") > eval5("AS AD QC QH KD"));

        // Same pairs, kicker decides.
        assert!(eval5("KS KD QC QH 3S") > eval5("KS KD QC QH 2S"));
    }

    #[test]
    fn three_of_a_kind() {
        let v = eval5("QS QD QC AH 9S");
        assert_eq!(v.rank(), HandRank::ThreeOfAKind);

        // Kickers break the tie.
        assert!(v > eval5("QS QD QC KH JS"));

        // Higher trips win.
        assert!(eval5("KS KD KC 3H 2S") > eval5("QS QD QC AH KH"));
    }

    #[test]
    fn straight() {
        let v = eval5("2S 3D 4H 5C 6S");
        assert_eq!(v.rank(), HandRank::Straight);

        // Ranked by the top card only.
        assert!(eval5("3S 4D 5H 6C 7S") > v);
        assert!(eval5("TS JD QH KC AS") > eval5("9S TD JH QC KS"));
    }

    #[test]
    fn wheel() {
        let v = eval5("AS 2D 3H 4C 5S");
        assert_eq!(v.rank(), HandRank::Straight);

        // The ace plays low, the wheel loses to the 6 high straight but
        // beats any high card or pair hand.
        assert!(v < eval5("2S 3D 4H 5C 6S"));
        assert!(v > eval5("AS KD QC JH 9S"));
        assert!(v > eval5("AS AD KC QH JS"));
    }

    #[test]
    fn flush() {
        let v = eval5("AH KH QH 9H 4H");
        assert_eq!(v.rank(), HandRank::Flush);

        // Ranked by all five cards.
        assert!(v > eval5("AH KH QH 9H 3H"));
        assert!(v > eval5("AS KS QS 8S 7S"));

        // A flush that is also a straight is a straight flush.
        assert_ne!(eval5("5H 6H 7H 8H 9H").rank(), HandRank::Flush);
    }

    #[test]
    fn full_house() {
        let v = eval5("7C 7D 7H 2S 2C");
        assert_eq!(v.rank(), HandRank::FullHouse);

        // Keyed by trips then pair.
        assert_eq!(v.value(), (6 << 28) | (7 << 24) | (2 << 20));

        // Higher trips win regardless of the pair.
        assert!(eval5("8S 8D 8C 2H 2D") > eval5("7S 7D 7C AH AD"));

        // Same trips, pair decides.
        assert!(eval5("7S 7D 7C AH AD") > eval5("7C 7D 7H KS KC"));
    }

    #[test]
    fn four_of_a_kind() {
        let v = eval5("7S 7D 7C 7H AS");
        assert_eq!(v.rank(), HandRank::FourOfAKind);

        // Same quads, kicker decides.
        assert!(v > eval5("7S 7D 7C 7H KS"));

        // Higher quads win.
        assert!(eval5("8S 8D 8C 8H 2S") > v);
    }

    #[test]
    fn straight_flush() {
        let v = eval5("9S 8S 7S 6S 5S");
        assert_eq!(v.rank(), HandRank::StraightFlush);
        assert!(v > eval5("8H 7H 6H 5H 4H"));

        // Royal flush packs the ace as the top card.
        let royal = eval5("AS KS QS JS TS");
        assert_eq!(royal.value(), (8 << 28) | (14 << 24));

        // The steel wheel plays the ace low.
        let wheel = eval5("AH 2H 3H 4H 5H");
        assert_eq!(wheel.rank(), HandRank::StraightFlush);
        assert!(wheel < eval5("2H 3H 4H 5H 6H"));
    }

    #[test]
    fn category_monotonicity() {
        // Weak hands of each category in ascending order, each must beat the
        // strongest texture of every category below it.
        let hands = [
            eval5("AS KD QC JH 9S"), // high card
            eval5("2S 2D 5C 4H 3D"), // one pair
            eval5("3S 3D 2C 2H 4D"), // two pair
            eval5("2S 2D 2C 4H 3D"), // three of a kind
            eval5("AS 2D 3H 4C 5S"), // straight (wheel)
            eval5("7H 5H 4H 3H 2H"), // flush
            eval5("2S 2D 2C 3H 3D"), // full house
            eval5("2S 2D 2C 2H 3D"), // four of a kind
            eval5("AH 2H 3H 4H 5H"), // straight flush (wheel)
        ];

        for pair in hands.windows(2) {
            assert!(pair[1] > pair[0], "{} <= {}", pair[1], pair[0]);
            assert!(pair[1].rank() > pair[0].rank());
        }
    }

    #[test]
    fn order_independent() {
        let v = eval5("AS KD QC JH 9S");
        assert_eq!(v, eval5("9S JH KD AS QC"));
        assert_eq!(v, eval5("QC AS 9S KD JH"));
    }

    #[test]
    fn eval_five_invalid_size() {
        assert!(HandValue::eval_five(&hand("AS KD QC JH")).is_err());
        assert!(HandValue::eval_five(&hand("AS KD QC JH 9S 8S")).is_err());
        assert!(HandValue::eval_five(&[]).is_err());
    }

    #[test]
    fn best_of_seven_royal_flush() {
        let v = eval7("AS KS QS JS TS 2H 3H");
        assert_eq!(v.rank(), HandRank::StraightFlush);
        assert_eq!(v, eval5("AS KS QS JS TS"));
    }

    #[test]
    fn best_of_seven_full_house() {
        let v = eval7("7C 7D 7H 2S 2C 9D 4H");
        assert_eq!(v.rank(), HandRank::FullHouse);
        assert_eq!(v, eval5("7C 7D 7H 2S 2C"));
    }

    #[test]
    fn best_of_seven_straight_over_pair() {
        // The 2-6 straight beats the pair of nines.
        let v = eval7("2S 3D 4H 5C 6S 9D 9H");
        assert_eq!(v.rank(), HandRank::Straight);
        assert_eq!(v, eval5("2S 3D 4H 5C 6S"));
    }

    #[test]
    fn best_of_seven_matches_exhaustive() {
        let pools = [
            "AS KS QS JS TS 2H 3H",
            "7C 7D 7H 2S 2C 9D 4H",
            "2S 3D 4H 5C 6S 9D 9H",
            "AS AD KC KH 2S 2D 3C",
            "AH KH QH 9H 4H 4S 4D",
            "TS 9D 8H 7C 6S 5D 4H",
            "AS KD QC JH 9S 7D 5C",
        ];

        for pool in pools {
            let cards = hand(pool);
            let best = Combos5::new(7)
                .map(|combo| {
                    let subset = combo.map(|i| cards[i]);
                    HandValue::eval_five(&subset).unwrap()
                })
                .max()
                .unwrap();
            assert_eq!(eval7(pool), best, "pool {pool}");
        }
    }

    #[test]
    fn best_of_seven_invalid_size() {
        assert!(HandValue::eval_best_of_seven(&hand("AS KS QS JS TS 2H")).is_err());
        assert!(
            HandValue::eval_best_of_seven(&hand("AS KS QS JS TS 2H 3H 4H")).is_err()
        );
        assert!(HandValue::eval_best_of_seven(&[]).is_err());
    }

    #[test]
    fn best_of_seven_deterministic() {
        let cards = hand("AS AD KC KH 2S 2D 3C");
        let v1 = HandValue::eval_best_of_seven(&cards).unwrap();
        let v2 = HandValue::eval_best_of_seven(&cards).unwrap();
        assert_eq!(v1, v2);
        assert_eq!(v1.rank(), HandRank::TwoPair);
    }

    #[test]
    fn rank_display() {
        assert_eq!(HandRank::HighCard.to_string(), "High Card");
        assert_eq!(HandRank::FullHouse.to_string(), "Full House");
        assert_eq!(eval5("AS KS QS JS TS").to_string(), "Straight Flush");
    }
}
