//! Deadline-ordered queue of deferred work.
//!
//! Entries fire in due-time order; entries due at the same instant fire in the order they were
//! scheduled.

use std::collections::BTreeMap;

#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: BTreeMap<(u64, u64), T>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_seq: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: u64, item: T) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.entries.insert((due_ms, seq), item);
    }

    /// Remove and return the earliest entry due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(u64, T)> {
        let (&(due_ms, _), _) = self.entries.first_key_value()?;
        if due_ms > now_ms {
            return None;
        }
        self.entries
            .pop_first()
            .map(|((due_ms, _), item)| (due_ms, item))
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.keys().next().map(|(due_ms, _)| *due_ms)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
