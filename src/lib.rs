//! historian-utils crate root: re-exports and module wiring.
//!
//! Small, stateless helpers backing the battery-history dashboard:
//! - `data::time_range`: binary-search time-range queries over sorted interval data
//! - `data::charge`: total charge (mAh) over current readings
//! - `data::math`: Pearson correlation and derivative series
//! - `data::geometry`: line/segment intersection tests
//! - `data::formatter`: byte sizes, element IDs and padding
//! - `config`: formatter settings with YAML persistence

pub mod config;
pub mod data;
pub mod error;

// Public re-exports for a compact external API
pub use config::HistorianConfig;
pub use data::charge::{calculate_total_charge, calculate_total_charge_formatted, MSECS_IN_HOUR};
pub use data::entry::{AggregatedEntry, AggregatedValue, DataPoint, Entry, TimeInterval};
pub use data::formatter::{describe_bytes, pad_string, to_valid_id, ByteFormatter, ChargeFormatter};
pub use data::geometry::{intersect_line_seg, intersect_seg_seg, Point, INTERSECT_EPSILON};
pub use data::math::{generate_derivative, pearson_correlation};
pub use data::time_range::{filter, filter_multi, filter_range, TimeRange};
pub use error::{HistorianError, Result};
