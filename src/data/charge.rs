//! Total charge over a series of current readings.
//!
//! Each entry's `value` is a current in mA held for `[start_time, end_time)`;
//! the total charge is the sum of `value * duration` expressed in mAh.

use crate::data::entry::{Entry, TimeInterval};
use crate::data::formatter::ChargeFormatter;
use crate::error::{HistorianError, Result};

/// Milliseconds in one hour.
pub const MSECS_IN_HOUR: f64 = 3_600_000.0;

/// Total charge in mAh.
///
/// Fails with [`HistorianError::NegativeDuration`] on the first entry whose
/// `end_time` precedes its `start_time`.
///
/// ```
/// # use historian_utils::{calculate_total_charge, Entry};
/// // 100 mA for one hour, then 50 mA for half an hour
/// let data = [Entry::new(0, 3_600_000, 100.0), Entry::new(3_600_000, 5_400_000, 50.0)];
/// assert!((calculate_total_charge(&data).unwrap() - 125.0).abs() < 1e-9);
/// ```
pub fn calculate_total_charge(data: &[Entry]) -> Result<f64> {
    let mut total = 0.0;
    for e in data {
        let duration = e.duration_ms();
        if duration < 0 {
            log::warn!(
                "calculate_total_charge(): entry [{}, {}) has negative duration",
                e.start_time,
                e.end_time
            );
            return Err(HistorianError::NegativeDuration { start_time: e.start_time, end_time: e.end_time });
        }
        total += e.value * duration as f64 / MSECS_IN_HOUR;
    }
    Ok(total)
}

/// Total charge in mAh rendered with two decimal places, e.g. `"125.00"`.
pub fn calculate_total_charge_formatted(data: &[Entry]) -> Result<String> {
    calculate_total_charge_with(data, &ChargeFormatter::default())
}

/// Total charge rendered by a custom [`ChargeFormatter`].
pub fn calculate_total_charge_with(data: &[Entry], formatter: &ChargeFormatter) -> Result<String> {
    calculate_total_charge(data).map(|total| formatter.format(total))
}
