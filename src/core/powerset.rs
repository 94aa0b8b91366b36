//! Powerset enumeration over a [`FeatureSet`].
//!
//! Combinations come out grouped by size (0, 1, ..., N). Within one size they
//! follow lexicographic order of member positions, so the result depends only
//! on the order of the input names.

use crate::domain::model::{Combination, CombinationList, FeatureSet};

/// Above this many features the matrix gets large enough to warn about.
pub const LARGE_FEATURE_COUNT: usize = 16;

/// All `k`-element index combinations of `0..n`, in lexicographic order.
#[derive(Debug, Clone)]
pub struct IndexCombinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl IndexCombinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            exhausted: k > n,
        }
    }

    /// Moves `indices` to the next combination. Returns false when done.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        // Rightmost slot that has not reached its maximum value n - k + i.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] != i + self.n - k) else {
            return false;
        };

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl Iterator for IndexCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.exhausted = true;
            return None;
        }

        Some(self.indices.clone())
    }
}

/// Lazily yields every [`Combination`] of a feature set in powerset order.
pub fn combinations(features: &FeatureSet) -> impl Iterator<Item = Combination<'_>> + '_ {
    let names = features.names();
    let n = names.len();

    (0..=n).flat_map(move |k| {
        IndexCombinations::new(n, k).map(move |indices| {
            Combination::new(indices.into_iter().map(|i| names[i].as_str()).collect())
        })
    })
}

/// Materializes the full powerset of `features` (2^N entries).
pub fn powerset(features: &FeatureSet) -> CombinationList {
    if features.len() > LARGE_FEATURE_COUNT {
        tracing::warn!(
            "{} features declared; the matrix will hold 2^{} combinations",
            features.len(),
            features.len()
        );
    }

    combinations(features).collect()
}
