//! Accumulates the minimum and maximum of a stream of timestamps.

use serde::{Deserialize, Serialize};

/// The inclusive `[t_min, t_max]` envelope of the timestamps added so far.
///
/// Starts with `t_min` above any incoming time and `t_max` below it, so the
/// first `add` pins both ends without special-casing and later times ratchet
/// them outward. Ranges order by `t_max` first, then `t_min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    t_min: i64,
    t_max: i64,
}

impl TimeRange {
    pub fn new() -> Self {
        Self {
            t_min: i64::MAX,
            t_max: i64::MIN,
        }
    }

    /// Expand the range to encompass `timestamp`.
    pub fn add(&mut self, timestamp: i64) {
        if timestamp < self.t_min {
            self.t_min = timestamp;
        }
        if timestamp > self.t_max {
            self.t_max = timestamp;
        }
    }

    /// True until the first `add`.
    pub fn is_empty(&self) -> bool {
        self.t_min > self.t_max
    }

    pub fn t_min(&self) -> i64 {
        self.t_min
    }

    pub fn t_max(&self) -> i64 {
        self.t_max
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialOrd for TimeRange {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeRange {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.t_max, self.t_min).cmp(&(other.t_max, other.t_min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_add_pins_both_ends() {
        let mut range = TimeRange::new();
        assert!(range.is_empty());
        range.add(100);
        assert!(!range.is_empty());
        assert_eq!((range.t_min(), range.t_max()), (100, 100));
    }

    #[test]
    fn later_adds_ratchet_outward() {
        let mut range = TimeRange::new();
        range.add(100);
        range.add(50);
        range.add(200);
        range.add(150); // interior, no effect
        assert_eq!((range.t_min(), range.t_max()), (50, 200));
    }

    #[test]
    fn orders_by_t_max_then_t_min() {
        let mut a = TimeRange::new();
        a.add(10);
        a.add(100);

        let mut b = TimeRange::new();
        b.add(20);
        b.add(100);

        let mut c = TimeRange::new();
        c.add(10);
        c.add(200);

        assert!(a < b, "same t_max, smaller t_min sorts first");
        assert!(b < c, "smaller t_max sorts first");
        assert!(a < c);
    }
}
