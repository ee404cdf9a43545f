pub mod charge;
pub mod entry;
pub mod formatter;
pub mod geometry;
pub mod math;
pub mod time_range;
