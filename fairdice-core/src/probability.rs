//! Exact pairwise win probabilities of a dice set.

use crate::dice::{DiceSet, Die};
use serde::{Deserialize, Serialize};

/// Exact count of winning outcomes out of all face pairings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRate {
    pub wins: u64,
    pub total: u64,
}

impl WinRate {
    pub fn probability(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.wins as f64 / self.total as f64
        }
    }

    /// Compare against `numerator / denominator` without rounding
    pub fn equals_fraction(&self, numerator: u64, denominator: u64) -> bool {
        self.wins as u128 * denominator as u128 == numerator as u128 * self.total as u128
    }

    pub fn beats_even(&self) -> bool {
        self.wins * 2 > self.total
    }
}

/// `rates[i][j]` is P(die i beats die j); the diagonal is zero by convention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityMatrix {
    rates: Vec<Vec<WinRate>>,
}

impl ProbabilityMatrix {
    pub fn compute(dice: &DiceSet) -> Self {
        let n = dice.len();
        let rates: Vec<Vec<WinRate>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| match (i == j, dice.get(i), dice.get(j)) {
                        (false, Some(a), Some(b)) => win_rate(a, b),
                        _ => WinRate { wins: 0, total: 0 },
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        tracing::debug!("Computed {}x{} probability matrix", n, n);
        Self { rates }
    }

    pub fn size(&self) -> usize {
        self.rates.len()
    }

    pub fn rate(&self, i: usize, j: usize) -> Option<WinRate> {
        self.rates.get(i).and_then(|row| row.get(j)).copied()
    }

    pub fn probability(&self, i: usize, j: usize) -> f64 {
        self.rate(i, j).map_or(0.0, |rate| rate.probability())
    }

    pub fn rows(&self) -> &[Vec<WinRate>] {
        &self.rates
    }

    /// Rows as floating-point probabilities
    pub fn to_probabilities(&self) -> Vec<Vec<f64>> {
        self.rates
            .iter()
            .map(|row| row.iter().map(WinRate::probability).collect())
            .collect()
    }
}

/// Exhaustive count over the Cartesian product of faces; ties count for neither
fn win_rate(a: &Die, b: &Die) -> WinRate {
    let wins = a
        .faces()
        .iter()
        .flat_map(|x| b.faces().iter().map(move |y| (x, y)))
        .filter(|(x, y)| x > y)
        .count() as u64;
    WinRate {
        wins,
        total: (a.face_count() * b.face_count()) as u64,
    }
}
