//! Bounded record of successful evaluations

use crate::core::format::format_result;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

/// One evaluated expression and its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression as entered
    pub expression: String,
    /// Unrounded value
    pub result: f64,
    /// Unix epoch millis at evaluation time
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time
    #[must_use]
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
        Self {
            expression: expression.into(),
            result,
            timestamp,
        }
    }

    /// `"<expression> = <result>"` with the result in display form
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, format_result(self.result))
    }
}

/// Calculation history, oldest first
///
/// Once `capacity` entries are held, each new entry evicts the oldest.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Capacity of [`History::new`]
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Empty history with [`History::DEFAULT_CAPACITY`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Empty history holding at most `capacity` entries (minimum 1)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Restores a history saved with [`History::to_json`]
    ///
    /// When the array is longer than `capacity`, the newest entries are kept.
    pub fn from_json(json: &str, capacity: usize) -> Result<Self, serde_json::Error> {
        let saved: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut history = Self::with_capacity(capacity);
        let skip = saved.len().saturating_sub(history.capacity);
        history.entries.extend(saved.into_iter().skip(skip));
        Ok(history)
    }

    /// Records an evaluated expression
    pub fn record(&mut self, expression: &str, result: f64) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry::new(expression, result));
    }

    /// Number of entries held
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries held
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// JSON array of entries, oldest first
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// One `expression = result` line per entry, oldest first
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(HistoryEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
