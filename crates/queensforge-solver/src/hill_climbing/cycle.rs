//! Bounded window of recently adopted states.

use std::collections::HashSet;

/// Approximate recent-history set used to detect cycles within a restart.
///
/// When the set grows past its capacity it is cleared and reseeded with the
/// state that overflowed it, so only a rough window of recent states is
/// remembered rather than an exact sliding one.
#[derive(Debug, Clone)]
pub(crate) struct CycleWindow {
    capacity: usize,
    seen: HashSet<Box<[usize]>>,
}

impl CycleWindow {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            seen: HashSet::with_capacity(capacity.saturating_add(1).min(1024)),
        }
    }

    /// Records `rows` as adopted.
    ///
    /// Returns false if `rows` is already in the window.
    pub(crate) fn insert(&mut self, rows: &[usize]) -> bool {
        if self.seen.contains(rows) {
            return false;
        }
        self.seen.insert(rows.into());
        if self.seen.len() > self.capacity {
            self.seen.clear();
            self.seen.insert(rows.into());
        }
        true
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_detected() {
        let mut window = CycleWindow::new(10);
        assert!(window.insert(&[0, 1, 2]));
        assert!(window.insert(&[2, 1, 0]));
        assert!(!window.insert(&[0, 1, 2]));
    }

    #[test]
    fn test_overflow_reseeds() {
        let mut window = CycleWindow::new(2);
        assert!(window.insert(&[0]));
        assert!(window.insert(&[1]));
        assert!(window.insert(&[2]));
        assert_eq!(window.len(), 1);

        // Older states are forgotten, the overflowing one is kept.
        assert!(window.insert(&[0]));
        assert!(!window.insert(&[2]));
    }
}
