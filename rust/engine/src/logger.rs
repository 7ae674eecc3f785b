use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Default number of entries kept by [`ActionLog`].
pub const LOG_CAPACITY: usize = 20;

/// Bounded, human-readable record of the actions taken in the current hand.
/// Pushing past capacity evicts the oldest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLog {
    capacity: usize,
    entries: VecDeque<String>,
    // pushes since creation or the last clear, evicted entries included
    #[serde(default)]
    pushed: usize,
}

impl ActionLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
            pushed: 0,
        }
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.into());
        self.pushed += 1;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.pushed = 0;
    }

    /// Running count of pushes, usable as a cursor for [`entries_since`].
    /// Unlike [`len`] it keeps growing once the log starts evicting.
    ///
    /// [`entries_since`]: ActionLog::entries_since
    /// [`len`]: ActionLog::len
    pub fn total_pushed(&self) -> usize {
        self.pushed
    }

    /// Retained entries pushed after the first `mark` pushes, oldest first.
    /// Entries already evicted are gone and are skipped.
    pub fn entries_since(&self, mark: usize) -> impl Iterator<Item = &str> {
        let fresh = self.pushed.saturating_sub(mark);
        let skip = self.entries.len().saturating_sub(fresh);
        self.entries.iter().skip(skip).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::with_capacity(LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_past_capacity() {
        let mut log = ActionLog::default();
        for i in 0..25 {
            log.push(format!("entry {i}"));
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        assert_eq!(log.entries().next(), Some("entry 5"));
        assert_eq!(log.last(), Some("entry 24"));
    }

    #[test]
    fn clear_empties_log() {
        let mut log = ActionLog::with_capacity(2);
        log.push("a");
        log.push("b");
        log.push("c");
        assert_eq!(log.entries().collect::<Vec<_>>(), vec!["b", "c"]);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.total_pushed(), 0);
    }

    #[test]
    fn cursor_survives_eviction() {
        let mut log = ActionLog::with_capacity(3);
        log.push("a");
        log.push("b");
        let mark = log.total_pushed();
        for e in ["c", "d", "e", "f", "g"] {
            log.push(e);
        }
        assert_eq!(log.total_pushed(), 7);
        assert_eq!(log.len(), 3);
        // c and d were evicted before anyone read them
        assert_eq!(log.entries_since(mark).collect::<Vec<_>>(), vec!["e", "f", "g"]);

        let mark = log.total_pushed();
        assert_eq!(log.entries_since(mark).count(), 0);
        log.push("h");
        assert_eq!(log.entries_since(mark).collect::<Vec<_>>(), vec!["h"]);
        assert_eq!(log.entries_since(0).collect::<Vec<_>>(), vec!["f", "g", "h"]);
    }
}
