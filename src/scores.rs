//! In-memory score board
//!
//! Tracks the best score across sessions plus the top 10 session results.
//! Lives only as long as the process.


use crate::sim::{EndReason, SessionOutcome};

/// Maximum number of results to keep
pub const MAX_ENTRIES: usize = 10;

/// A single finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub score: u32,
    /// Ticks the session lasted
    pub ticks: u64,
    pub reason: EndReason,
    /// 1-based session number within this process
    pub session: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    best: u32,
    sessions_played: u32,
    entries: Vec<ScoreEntry>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best score seen so far (never decreases)
    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn sessions_played(&self) -> u32 {
        self.sessions_played
    }

    /// Kept results, highest score first
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Check if a score would make the board
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Raise the best score without recording a result (abandoned sessions)
    pub fn raise_best(&mut self, score: u32) {
        self.best = self.best.max(score);
    }

    /// Fold a finished session in. Returns the rank achieved (1-indexed), if any.
    pub fn record(&mut self, outcome: &SessionOutcome) -> Option<usize> {
        self.sessions_played += 1;
        self.best = self.best.max(outcome.best_score).max(outcome.score);

        if !self.qualifies(outcome.score) {
            return None;
        }

        let entry = ScoreEntry {
            score: outcome.score,
            ticks: outcome.ticks,
            reason: outcome.reason,
            session: self.sessions_played,
        };

        // Sorted descending; ties keep the earlier session first
        let pos = self.entries.iter().position(|e| outcome.score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_ENTRIES);

        Some(rank)
    }
}
