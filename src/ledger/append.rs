//! Single-record append path, shared by direct entry and the timerec
//! import.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::Datelike;

use crate::errors::AppResult;
use crate::ledger::MONTH_FILE_HEADER;
use crate::ledger::loader::parse_month;
use crate::models::day::DayRecord;
use crate::models::month::MonthRecord;
use crate::utils::time::time_field;

/// What happened to an appended record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Inserted,
    Discarded,
}

/// Append one day record to the ledger, creating the year directory and
/// the month file (with header) as needed.
///
/// The month file is re-read before writing; if a record for that day
/// number already exists the append is discarded, which makes the
/// operation idempotent per day. The read-modify-append sequence is not
/// atomic: concurrent invocations against the same ledger may race, and
/// callers are expected to serialize their own invocations.
pub fn append_day_record(root: &Path, record: &DayRecord) -> AppResult<AppendOutcome> {
    let year_dir = root.join(format!("{:04}", record.day.year()));
    fs::create_dir_all(&year_dir)?;

    let month_path = year_dir.join(format!("{:02}.csv", record.day.month()));
    if !month_path.exists() {
        fs::write(&month_path, format!("{}\n", MONTH_FILE_HEADER))?;
    }

    let month: MonthRecord = parse_month(&month_path, record.day.year())?;
    if month.get_day_record(record.day.day()).is_some() {
        return Ok(AppendOutcome::Discarded);
    }

    let mut file = OpenOptions::new().append(true).open(&month_path)?;
    writeln!(
        file,
        "{},{},{},{}",
        record.day.day(),
        record.day_type.code(),
        time_field(record.checkin),
        time_field(record.checkout)
    )?;

    Ok(AppendOutcome::Inserted)
}
