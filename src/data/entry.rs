//! Interval records fed to the dashboard: plain entries, aggregated entries and samples.
//!
//! All times are milliseconds since the UNIX epoch. An entry covers the
//! half-open interval `[start_time, end_time)`. Field names serialize in
//! camelCase (`startTime`, `endTime`) to match the dashboard's JSON payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ─────────────────────────────────────────────────────────────────────────────
// TimeInterval
// ─────────────────────────────────────────────────────────────────────────────

/// Anything with a half-open `[start_time, end_time)` span in milliseconds.
///
/// The range queries in [`crate::data::time_range`] are generic over this trait,
/// so both [`Entry`] and [`AggregatedEntry`] can be filtered.
pub trait TimeInterval {
    fn start_time(&self) -> i64;
    fn end_time(&self) -> i64;

    /// Length of the interval in milliseconds. Negative for malformed records.
    fn duration_ms(&self) -> i64 {
        self.end_time() - self.start_time()
    }

    /// Whether this interval overlaps the half-open query `[start, end)`.
    ///
    /// Touching only at a boundary does not count:
    ///
    /// ```
    /// # use historian_utils::{Entry, TimeInterval};
    /// let e = Entry::new(10, 20, 1.0);
    /// assert!(e.overlaps(15, 25));
    /// assert!(!e.overlaps(20, 30));
    /// assert!(!e.overlaps(0, 10));
    /// ```
    fn overlaps(&self, start: i64, end: i64) -> bool {
        self.start_time() < end && self.end_time() > start
    }

    /// Start of the interval as a UTC datetime, `None` if outside chrono's range.
    fn start_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.start_time())
    }

    /// End of the interval as a UTC datetime, `None` if outside chrono's range.
    fn end_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.end_time())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry
// ─────────────────────────────────────────────────────────────────────────────

/// A time interval carrying one numeric value (e.g. a current reading in mA).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub start_time: i64,
    pub end_time: i64,
    pub value: f64,
}

impl Entry {
    pub fn new(start_time: i64, end_time: i64, value: f64) -> Self {
        Self { start_time, end_time, value }
    }
}

impl TimeInterval for Entry {
    #[inline]
    fn start_time(&self) -> i64 {
        self.start_time
    }
    #[inline]
    fn end_time(&self) -> i64 {
        self.end_time
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AggregatedEntry
// ─────────────────────────────────────────────────────────────────────────────

/// One contributor to an [`AggregatedEntry`], e.g. a wakelock or service name
/// together with how often and how long it was seen in the interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedValue {
    pub id: i64,
    pub count: u32,
    /// Total time in milliseconds.
    pub duration: i64,
    pub value: String,
}

/// An interval whose payload is the set of values active during it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedEntry {
    pub start_time: i64,
    pub end_time: i64,
    #[serde(default)]
    pub services: Vec<AggregatedValue>,
}

impl TimeInterval for AggregatedEntry {
    #[inline]
    fn start_time(&self) -> i64 {
        self.start_time
    }
    #[inline]
    fn end_time(&self) -> i64 {
        self.end_time
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DataPoint
// ─────────────────────────────────────────────────────────────────────────────

/// A single sample: a value observed at `start_time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub start_time: i64,
    pub value: f64,
}

impl DataPoint {
    pub fn new(start_time: i64, value: f64) -> Self {
        Self { start_time, value }
    }
}

impl From<&Entry> for DataPoint {
    fn from(e: &Entry) -> Self {
        Self { start_time: e.start_time, value: e.value }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON loading
// ─────────────────────────────────────────────────────────────────────────────

/// Parse a JSON array of `{startTime, endTime, value}` objects.
pub fn parse_entries(json: &str) -> Result<Vec<Entry>> {
    let entries: Vec<Entry> = serde_json::from_str(json)?;
    log::debug!("parse_entries(): parsed {} entries", entries.len());
    Ok(entries)
}

/// Parse a JSON array of aggregated entries (`{startTime, endTime, services: [...]}`).
pub fn parse_aggregated_entries(json: &str) -> Result<Vec<AggregatedEntry>> {
    let entries: Vec<AggregatedEntry> = serde_json::from_str(json)?;
    log::debug!("parse_aggregated_entries(): parsed {} entries", entries.len());
    Ok(entries)
}
