//! Time-range queries over interval data.
//!
//! Two variants are provided:
//! - [`filter`]: O(log n) lookup for data sorted by start time whose intervals
//!   are non-overlapping and contiguous (each `end_time` equals the next
//!   `start_time`). Returns a borrowed sub-slice of the input.
//! - [`filter_multi`]: O(n) scan that tolerates unsorted, overlapping or
//!   duplicate intervals.
//!
//! Both treat the query and every entry as half-open intervals. An entry that
//! only touches the query at a boundary is excluded.

use serde::{Deserialize, Serialize};

use crate::data::entry::TimeInterval;

/// Query window `[start, end)` in milliseconds since the UNIX epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

impl TimeRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// `true` for zero-width and inverted ranges.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn duration_ms(&self) -> i64 {
        self.end - self.start
    }
}

/// Return the contiguous run of `data` overlapping `[query_start, query_end)`.
///
/// `data` must be sorted ascending by start time with non-overlapping,
/// contiguous intervals. This is assumed, not checked: other input gives an
/// unspecified (but non-panicking) slice.
///
/// ```
/// # use historian_utils::{filter, Entry};
/// let data = [Entry::new(0, 10, 1.0), Entry::new(10, 20, 2.0), Entry::new(20, 30, 3.0)];
/// assert_eq!(filter(5, 15, &data), &data[0..2]);
/// assert_eq!(filter(10, 20, &data), &data[1..2]);
/// assert!(filter(20, 20, &data).is_empty());
/// ```
pub fn filter<T: TimeInterval>(query_start: i64, query_end: i64, data: &[T]) -> &[T] {
    let (first, last) = match (data.first(), data.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return data,
    };
    if query_start >= last.end_time() || query_end <= first.start_time() {
        log::trace!(
            "filter(): [{}, {}) outside covered span [{}, {})",
            query_start,
            query_end,
            first.start_time(),
            last.end_time()
        );
        return &data[..0];
    }

    // No entry starts exactly at query_start: the one before the insertion
    // point is the entry still open at query_start.
    let start_idx = match data.binary_search_by_key(&query_start, |d| d.start_time()) {
        Ok(i) => i,
        Err(i) => i.saturating_sub(1),
    };
    // The insertion point is the first entry ending after query_end, which is
    // still part of the result.
    let end_idx = match data.binary_search_by_key(&query_end, |d| d.end_time()) {
        Ok(i) | Err(i) => i,
    };
    let end_excl = (end_idx + 1).min(data.len());

    log::trace!(
        "filter(): [{}, {}) -> indices {}..{} of {}",
        query_start,
        query_end,
        start_idx,
        end_excl,
        data.len()
    );

    if start_idx >= end_excl {
        return &data[..0];
    }
    &data[start_idx..end_excl]
}

/// Return every entry of `data` overlapping `[query_start, query_end)`, in input order.
///
/// No ordering is assumed; overlapping and duplicate entries are all kept.
pub fn filter_multi<T: TimeInterval>(query_start: i64, query_end: i64, data: &[T]) -> Vec<&T> {
    data.iter()
        .filter(|d| d.overlaps(query_start, query_end))
        .collect()
}

/// [`filter`] with a [`TimeRange`] query.
pub fn filter_range<T: TimeInterval>(range: TimeRange, data: &[T]) -> &[T] {
    filter(range.start, range.end, data)
}
