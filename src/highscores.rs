//! High score leaderboard
//!
//! Always exactly [`NUM_TOP_SCORES`] entries, sorted descending. Zeros fill
//! unused slots, so a fresh board reads `[0, 0, 0, 0, 0]`.

use serde::{Deserialize, Serialize};

use crate::consts::NUM_TOP_SCORES;

/// Top scores leaderboard, serialized as `{"scores": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawLeaderboard")]
pub struct Leaderboard {
    scores: Vec<u64>,
}

/// On-disk shape before normalization (any length, any order)
#[derive(Deserialize)]
struct RawLeaderboard {
    #[serde(default)]
    scores: Option<Vec<u64>>,
}

impl From<RawLeaderboard> for Leaderboard {
    fn from(raw: RawLeaderboard) -> Self {
        match raw.scores {
            Some(scores) => Self::from_scores(scores),
            None => Self::new(),
        }
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Leaderboard {
    /// Create a board of zeros
    pub fn new() -> Self {
        Self {
            scores: vec![0; NUM_TOP_SCORES],
        }
    }

    /// Build a board from an arbitrary list: pad with zeros, sort descending, truncate
    pub fn from_scores(mut scores: Vec<u64>) -> Self {
        if scores.len() < NUM_TOP_SCORES {
            scores.resize(NUM_TOP_SCORES, 0);
        }
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(NUM_TOP_SCORES);
        Self { scores }
    }

    /// Scores, highest first
    pub fn scores(&self) -> &[u64] {
        &self.scores
    }

    /// Check if a score would make it onto the board
    pub fn qualifies(&self, score: u64) -> bool {
        self.scores.last().map(|&lowest| score >= lowest).unwrap_or(true)
    }

    /// Insert a score, keep the board sorted and trimmed.
    /// Returns the rank achieved (1-indexed) or None if it fell off the end.
    pub fn insert(&mut self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        // Ties go after existing equal scores
        let pos = self
            .scores
            .iter()
            .position(|&s| score > s)
            .unwrap_or(self.scores.len());
        self.scores.insert(pos, score);
        self.scores.truncate(NUM_TOP_SCORES);
        (pos < NUM_TOP_SCORES).then_some(pos + 1)
    }

    /// Reset every entry to zero
    pub fn clear(&mut self) {
        self.scores.iter_mut().for_each(|s| *s = 0);
    }

    /// Get the top score
    pub fn top_score(&self) -> u64 {
        self.scores.first().copied().unwrap_or(0)
    }

    /// Check if no score has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.scores.iter().all(|&s| s == 0)
    }
}
