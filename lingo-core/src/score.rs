//! Similarity scoring between free-text queries and catalog entries.
//!
//! Scores are computed on a 0–100 scale from the longest common subsequence
//! of the two normalised strings, so `"yorba"` still lands close to
//! `"yoruba"` while unrelated names fall away.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A similarity score in the range `0..=100`.
///
/// `100` means the strings are identical after normalisation; `0` means they
/// share no characters in order. Also used as the resolver's cut-off
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Score(u8);

impl Score {
    /// Threshold applied by the resolver when none is configured: candidates
    /// scoring below 75 are considered noise and dropped.
    pub const DEFAULT_THRESHOLD: Self = Self(75);

    /// Creates a `Score` from a value in `0..=100`.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidScore`] if `value` exceeds 100.
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > 100 {
            return Err(CoreError::InvalidScore { value });
        }
        Ok(Self(value))
    }

    /// Returns the inner `u8` value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Computes the similarity of two strings on the 0–100 scale.
///
/// Both inputs are normalised first: every non-alphanumeric character becomes
/// a space, then the string is lowercased and trimmed. The score is the
/// matching-subsequence ratio `2·lcs / (|a| + |b|)` over Unicode scalar
/// values, scaled to 0–100 and rounded.
///
/// Two empty strings are identical (score 100); an empty string matches
/// nothing else (score 0).
#[must_use]
pub fn similarity(a: &str, b: &str) -> Score {
    let a = normalise(a);
    let b = normalise(b);

    let total = a.len() + b.len();
    if total == 0 {
        return Score(100);
    }

    let lcs = longest_common_subsequence(&a, &b);
    #[expect(clippy::cast_possible_truncation, reason = "2·lcs never exceeds |a|+|b|, so the rounded ratio is at most 100")]
    let ratio = ((200 * lcs + total / 2) / total) as u8;
    Score(ratio)
}

/// Maps non-alphanumeric characters to spaces, lowercases, and trims.
fn normalise(s: &str) -> Vec<char> {
    let mapped: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    mapped.to_lowercase().trim().chars().collect()
}

/// Length of the longest common subsequence of two character sequences.
///
/// Two-row dynamic programming: `O(|a|·|b|)` time, `O(|b|)` space.
fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0_usize; b.len() + 1];
    let mut row = vec![0_usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            row[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(row[j])
            };
        }
        std::mem::swap(&mut prev, &mut row);
    }

    prev[b.len()]
}
