use bevy::utils::HashSet;
use std::hash::Hash;

/// Transitions between two successive overlap results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDiff<K> {
    /// Overlapping now, not in the previous frame. In current order.
    pub entered: Vec<K>,
    /// Overlapping in both frames. In current order.
    pub continuing: Vec<K>,
    /// Overlapping in the previous frame only. In previous order.
    pub exited: Vec<K>,
}

impl<K> Default for ContactDiff<K> {
    fn default() -> Self {
        Self {
            entered: Vec::new(),
            continuing: Vec::new(),
            exited: Vec::new(),
        }
    }
}

impl<K> ContactDiff<K> {
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.continuing.is_empty() && self.exited.is_empty()
    }
}

/// Diffs the per-frame results of `evaluate` into entered / continuing /
/// exited contacts. The evaluator itself is stateless; this is the consumer
/// side that remembers the previous frame.
#[derive(Debug, Clone)]
pub struct ContactTracker<K> {
    current: Vec<K>,
}

impl<K> Default for ContactTracker<K> {
    fn default() -> Self {
        Self {
            current: Vec::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> ContactTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contacts as of the last `advance`.
    pub fn current(&self) -> &[K] {
        &self.current
    }

    /// Records this frame's overlaps and returns what changed since the last call.
    /// Duplicate keys in `now` are collapsed to their first occurrence.
    pub fn advance(&mut self, now: &[K]) -> ContactDiff<K> {
        let previous: HashSet<K> = self.current.iter().copied().collect();
        let mut seen: HashSet<K> = HashSet::default();
        let mut diff = ContactDiff::default();
        let mut next = Vec::with_capacity(now.len());

        for &key in now {
            if !seen.insert(key) {
                continue;
            }
            if previous.contains(&key) {
                diff.continuing.push(key);
            } else {
                diff.entered.push(key);
            }
            next.push(key);
        }

        diff.exited = self
            .current
            .iter()
            .copied()
            .filter(|key| !seen.contains(key))
            .collect();

        self.current = next;
        diff
    }

    /// Forgets every contact and hands back the forgotten keys, in previous order.
    /// Nothing is diffed; the next `advance` sees an empty previous frame.
    pub fn clear(&mut self) -> Vec<K> {
        std::mem::take(&mut self.current)
    }
}
