//! Presentation helpers: byte sizes, charge totals, element IDs and padding.
//!
//! The formatter structs are plain configuration values with sensible
//! defaults; the free functions use those defaults.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// ByteFormatter
// ─────────────────────────────────────────────────────────────────────────────

const BYTE_UNITS: [&str; 3] = ["KB", "MB", "GB"];

/// Renders a byte count with the largest unit (KB, MB, GB) in which the value
/// reaches [`threshold`](Self::threshold). Units step by 1024.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ByteFormatter {
    /// Minimum value in a unit for that unit to be chosen.
    ///
    /// Default: `0.5`, so 512 bytes already render as `0.50 KB`.
    pub threshold: f64,
    /// Decimal places rendered. Default: `2`.
    pub decimal_places: usize,
}

impl Default for ByteFormatter {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            decimal_places: 2,
        }
    }
}

impl ByteFormatter {
    pub fn format(&self, bytes: f64) -> String {
        let mut scaled = [0.0; 3];
        let mut v = bytes;
        for s in scaled.iter_mut() {
            v /= 1024.0;
            *s = v;
        }
        // Largest unit first.
        for (value, unit) in scaled.iter().zip(BYTE_UNITS).rev() {
            if *value >= self.threshold {
                return format!("{:.*} {}", self.decimal_places, value, unit);
            }
        }
        format!("{:.*} bytes", self.decimal_places, bytes)
    }
}

/// Human-readable size using the default [`ByteFormatter`].
///
/// ```
/// # use historian_utils::describe_bytes;
/// assert_eq!(describe_bytes(511.0), "511.00 bytes");
/// assert_eq!(describe_bytes(512.0), "0.50 KB");
/// assert_eq!(describe_bytes(1024.0 * 1024.0), "1.00 MB");
/// ```
pub fn describe_bytes(bytes: f64) -> String {
    ByteFormatter::default().format(bytes)
}

// ─────────────────────────────────────────────────────────────────────────────
// ChargeFormatter
// ─────────────────────────────────────────────────────────────────────────────

/// Renders a charge total with fixed decimal places and an optional unit suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeFormatter {
    /// Default: `2`.
    pub decimal_places: usize,
    /// Optional unit suffix appended after the number (e.g. `"mAh"`).
    pub unit: Option<String>,
}

impl Default for ChargeFormatter {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            unit: None,
        }
    }
}

impl ChargeFormatter {
    pub fn format(&self, mah: f64) -> String {
        let s = format!("{:.*}", self.decimal_places, mah);
        match &self.unit {
            Some(u) => format!("{} {}", s, u),
            None => s,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Strings
// ─────────────────────────────────────────────────────────────────────────────

/// Lowercase `s` and drop every character outside `[a-z0-9_-]`.
///
/// ```
/// # use historian_utils::to_valid_id;
/// assert_eq!(to_valid_id("Wakelock: *alarm*_1"), "wakelockalarm_1");
/// ```
pub fn to_valid_id(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-'))
        .collect()
}

/// Left-pad `s` with `pad` until it is at least `len` characters long.
pub fn pad_string(s: &str, len: usize, pad: char) -> String {
    let count = s.chars().count();
    if count >= len {
        return s.to_string();
    }
    let mut out: String = std::iter::repeat(pad).take(len - count).collect();
    out.push_str(s);
    out
}
