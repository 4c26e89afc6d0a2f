//! Virtual-time timer schedule.
//!
//! The engine owns its clock. The host only reports elapsed milliseconds and the
//! schedule hands back due timers one at a time, ordered by due time and then by
//! registration order, so overlapping timers resolve the same way on every run.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Everything the engine can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum Timer {
    /// Periodic automated production.
    Produce,
    /// Periodic energy regeneration.
    Regenerate,
    /// One catch's pause is over.
    FishingDone,
    /// A floating "+N" popup has faded.
    EffectExpired(u64),
    /// The hunger message has faded.
    HungerExpired,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    due: u64,
    seq: u64,
    period: Option<u64>,
    timer: Timer,
}

impl Entry {
    const fn key(&self) -> (u64, u64) {
        (self.due, self.seq)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed so the max-heap yields the earliest entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Schedule {
    now: u64,
    next_seq: u64,
    queue: BinaryHeap<Entry>,
}

impl Schedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.now
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Fire `timer` every `period_ms`, first at `now + period_ms`.
    pub fn every(&mut self, period_ms: u64, timer: Timer) {
        let period = period_ms.max(1);
        self.push(self.now.saturating_add(period), Some(period), timer);
    }

    /// Fire `timer` once, `delay_ms` from now.
    pub fn after(&mut self, delay_ms: u64, timer: Timer) {
        self.push(self.now.saturating_add(delay_ms), None, timer);
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to its
    /// due time. Periodic timers are re-armed one period later.
    pub fn pop_due(&mut self, until: u64) -> Option<(u64, Timer)> {
        if self.queue.peek().is_none_or(|entry| entry.due > until) {
            return None;
        }
        let entry = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        if let Some(period) = entry.period {
            self.push(entry.due.saturating_add(period), Some(period), entry.timer);
        }
        Some((entry.due, entry.timer))
    }

    /// Move the clock forward without firing anything. Never moves backwards.
    pub fn settle(&mut self, until: u64) {
        self.now = self.now.max(until);
    }

    /// Deregister every periodic and pending one-shot timer.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    fn push(&mut self, due: u64, period: Option<u64>, timer: Timer) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry {
            due,
            seq,
            period,
            timer,
        });
    }
}
