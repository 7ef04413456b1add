// Copyright (C) 2025 Showdown contributors
// SPDX-License-Identifier: Apache-2.0

//! Combinations of 5 indices used by the best hand search.

/// An iterator over all 5-index combinations of `0..n`.
///
/// Yields index tuples `[a, b, c, d, e]` with `a < b < c < d < e < n` in
/// lexicographic order, `C(n, 5)` tuples in total. For a 7 cards hand this
/// enumerates the 21 candidate 5 cards subsets.
#[derive(Debug, Clone)]
pub struct Combos5 {
    n: usize,
    indices: [usize; 5],
    done: bool,
}

impl Combos5 {
    /// Creates an iterator over the 5-index combinations of `0..n`.
    ///
    /// The iterator is empty if `n < 5`.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            indices: [0, 1, 2, 3, 4],
            done: n < 5,
        }
    }
}

impl Iterator for Combos5 {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self.indices;

        // Advance the rightmost index that can still move, then reset the
        // indices to its right to the consecutive run above it.
        let mut i = 4;
        loop {
            if self.indices[i] < self.n - 5 + i {
                self.indices[i] += 1;
                for j in i + 1..5 {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }

            if i == 0 {
                self.done = true;
                break;
            }

            i -= 1;
        }

        Some(current)
    }
}
