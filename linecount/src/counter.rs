//! Deduplicating directional counters

use std::collections::HashSet;

/// Running totals of identities counted in each direction.
///
/// Both sets are append-only: an identity is a member of a direction's
/// set at most once for the life of the run, and nothing ever removes a
/// member. Only the crossing monitor can insert.
#[derive(Debug, Clone, Default)]
pub struct DirectionalCounts {
    down: HashSet<u32>,
    up: HashSet<u32>,
}

impl DirectionalCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the identity was already counted downward
    pub(crate) fn insert_down(&mut self, id: u32) -> bool {
        self.down.insert(id)
    }

    /// Returns false if the identity was already counted upward
    pub(crate) fn insert_up(&mut self, id: u32) -> bool {
        self.up.insert(id)
    }

    pub fn contains_down(&self, id: u32) -> bool {
        self.down.contains(&id)
    }

    pub fn contains_up(&self, id: u32) -> bool {
        self.up.contains(&id)
    }

    /// Number of identities counted downward
    pub fn down(&self) -> usize {
        self.down.len()
    }

    /// Number of identities counted upward
    pub fn up(&self) -> usize {
        self.up.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut counts = DirectionalCounts::new();
        assert!(counts.insert_down(3));
        assert!(!counts.insert_down(3));
        assert_eq!(counts.down(), 1);
        assert_eq!(counts.up(), 0);
    }

    #[test]
    fn test_directions_are_independent() {
        let mut counts = DirectionalCounts::new();
        counts.insert_down(7);
        counts.insert_up(7);
        assert!(counts.contains_down(7));
        assert!(counts.contains_up(7));
        assert_eq!(counts.down(), 1);
        assert_eq!(counts.up(), 1);
    }
}
