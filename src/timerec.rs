//! Import adapter for the timerec Android app CSV export.
//!
//! The export carries `Data,Check-In,Check-Out` columns plus a trailing
//! summary row whose date field reads "Total"; that row is a trailer, not
//! a day, and is skipped. Imported days are normal working days.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::models::day::DayRecord;
use crate::models::day_type::DayType;
use crate::utils::time::parse_time_field;

const TOTAL_MARKER: &str = "Total";

#[derive(Debug, Deserialize)]
struct ExportRow {
    #[serde(rename = "Data")]
    date: String,
    #[serde(rename = "Check-In")]
    checkin: String,
    #[serde(rename = "Check-Out")]
    checkout: String,
}

/// Parse a timerec export into day records, ready for the append path.
pub fn day_records_from_export(path: &Path) -> AppResult<Vec<DayRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let row: ExportRow = row?;
        if row.date == TOTAL_MARKER {
            continue;
        }

        let day = NaiveDate::parse_from_str(&row.date, "%Y/%m/%d")
            .map_err(|_| AppError::InvalidDate(row.date.clone()))?;

        records.push(DayRecord::new(
            day,
            DayType::Normal,
            parse_time_field(&row.checkin, day)?,
            parse_time_field(&row.checkout, day)?,
        ));
    }

    Ok(records)
}
