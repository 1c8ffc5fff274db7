//! On-disk ledger: `<root>/<YYYY>/<MM>.csv`, one row per day, plus an
//! optional `adjustments.csv` at the root.

pub mod append;
pub mod loader;

/// Header row of every month file.
pub const MONTH_FILE_HEADER: &str = "day,day_type,checkin,checkout";

/// Optional manual-corrections file at the ledger root.
pub const ADJUSTMENTS_FILE: &str = "adjustments.csv";
