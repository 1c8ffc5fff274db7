//! Read the on-disk CSV tree into the record model.
//!
//! Structural problems inside a loaded record (bad day type, inconsistent
//! check times) are left for `validate()`; a row that cannot be mapped to a
//! calendar day or a parsable time aborts the load instead.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::ledger::ADJUSTMENTS_FILE;
use crate::models::adjustment::AdjustmentRecord;
use crate::models::day::DayRecord;
use crate::models::day_type::DayType;
use crate::models::month::MonthRecord;
use crate::models::sheet::Timesheet;
use crate::models::year::YearRecord;
use crate::utils::date::parse_date;
use crate::utils::time::{parse_delta, parse_time_field};

#[derive(Debug, Deserialize)]
struct RawDayRow {
    day: String,
    day_type: String,
    checkin: String,
    checkout: String,
}

#[derive(Debug, Deserialize)]
struct RawAdjustmentRow {
    day: String,
    delta: String,
}

/// Load the whole ledger tree rooted at `root`.
pub fn parse_ledger(root: &Path) -> AppResult<Timesheet> {
    let year_pattern = Regex::new(r"^\d{4}$").unwrap();

    let mut year_dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if entry.path().is_dir() && year_pattern.is_match(&name) {
            year_dirs.push(name);
        }
    }
    year_dirs.sort();

    let mut years = Vec::new();
    for name in &year_dirs {
        years.push(parse_year(&root.join(name))?);
    }

    let adjustments = parse_adjustments(&root.join(ADJUSTMENTS_FILE))?;

    Ok(Timesheet::new(years, adjustments))
}

/// Load one year directory (four-digit name), months sorted ascending.
pub fn parse_year(year_path: &Path) -> AppResult<YearRecord> {
    let year = dir_basename(year_path)?
        .parse::<i32>()
        .map_err(|_| AppError::Ledger(format!("Invalid year directory: {}", year_path.display())))?;

    let month_pattern = Regex::new(r"^\d{2}\.csv$").unwrap();

    let mut month_files = Vec::new();
    for entry in fs::read_dir(year_path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if month_pattern.is_match(&name) {
            month_files.push(name);
        }
    }
    month_files.sort();

    let mut months = Vec::new();
    for name in &month_files {
        months.push(parse_month(&year_path.join(name), year)?);
    }

    Ok(YearRecord::new(year, months))
}

/// Load one month file (two-digit name), rows in file order.
pub fn parse_month(month_path: &Path, year: i32) -> AppResult<MonthRecord> {
    let month = month_path
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(|| AppError::Ledger(format!("Invalid month file: {}", month_path.display())))?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(month_path)?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let row: RawDayRow = row?;
        records.push(day_from_row(&row, year, month)?);
    }

    Ok(MonthRecord::new(year, month, records))
}

/// Reconstruct the calendar date from the enclosing year/month and the
/// row's day number, and anchor the optional check times to it.
fn day_from_row(row: &RawDayRow, year: i32, month: u32) -> AppResult<DayRecord> {
    let day_number = row
        .day
        .parse::<u32>()
        .map_err(|_| AppError::InvalidDate(format!("{}-{:02}-{}", year, month, row.day)))?;
    let day = NaiveDate::from_ymd_opt(year, month, day_number)
        .ok_or_else(|| AppError::InvalidDate(format!("{}-{:02}-{}", year, month, row.day)))?;

    Ok(DayRecord::new(
        day,
        DayType::from_code(&row.day_type),
        parse_time_field(&row.checkin, day)?,
        parse_time_field(&row.checkout, day)?,
    ))
}

/// Load `adjustments.csv` (`day,delta` with `YYYY-MM-DD` and signed
/// `HH:MM`). A missing file simply means no adjustments.
fn parse_adjustments(path: &Path) -> AppResult<Vec<AdjustmentRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut adjustments = Vec::new();
    for row in reader.deserialize() {
        let row: RawAdjustmentRow = row?;
        let day = parse_date(&row.day).ok_or_else(|| AppError::InvalidDate(row.day.clone()))?;
        adjustments.push(AdjustmentRecord::new(day, parse_delta(&row.delta)?));
    }

    Ok(adjustments)
}

fn dir_basename(path: &Path) -> AppResult<&str> {
    path.file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| AppError::Ledger(format!("Invalid path: {}", path.display())))
}
