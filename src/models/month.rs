use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use super::day::DayRecord;
use super::record::{Record, collect_child_errors, sum_worked};
use crate::utils::date::last_day_of_month;

/// All day records of one `(year, month)` ledger file, in file order.
#[derive(Debug, Clone)]
pub struct MonthRecord {
    pub year: i32,
    pub month: u32,
    pub records: Vec<DayRecord>,
}

impl MonthRecord {
    pub fn new(year: i32, month: u32, records: Vec<DayRecord>) -> Self {
        Self {
            year,
            month,
            records,
        }
    }

    /// First (and only, in a valid ledger) record for the given day number.
    pub fn get_day_record(&self, day_number: u32) -> Option<&DayRecord> {
        self.records.iter().find(|r| r.day.day() == day_number)
    }

    /// Last day number that must be covered by a record.
    ///
    /// The current month is validated only up to yesterday, so an
    /// in-progress month does not demand data for future days. On the 1st
    /// this stays at 1 rather than an impossible day 0.
    fn end_day(&self, today: NaiveDate) -> u32 {
        if self.year == today.year() && self.month == today.month() {
            if today.day() == 1 { 1 } else { today.day() - 1 }
        } else {
            last_day_of_month(self.year, self.month)
        }
    }
}

impl Record for MonthRecord {
    fn worked(&self) -> Duration {
        sum_worked(&self.records)
    }

    fn validate(&self, today: NaiveDate) -> Vec<String> {
        let mut errors = collect_child_errors(&self.records, today);

        for r in &self.records {
            if r.day.year() != self.year || r.day.month() != self.month {
                errors.push(format!("Record belongs to another month: {}", r.identifier()));
            }
        }

        for i in 1..=self.end_day(today) {
            if self.get_day_record(i).is_none() {
                errors.push(format!("Missing day: {}.", i));
            }
        }

        // Overlap scan: stable sort by checkin (absent sorts last), then
        // compare each record against its immediate successor only. Three
        // or more mutually overlapping records are therefore not reported
        // pairwise exhaustively; this matches the historical behavior.
        let mut sorted: Vec<&DayRecord> = self.records.iter().collect();
        sorted.sort_by_key(|r| r.checkin.unwrap_or(NaiveDateTime::MAX));
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if let (Some(a_in), Some(a_out), Some(b_in)) = (a.checkin, a.checkout, b.checkin)
                && a_in <= b_in
                && b_in <= a_out
            {
                errors.push(format!("Overlapping records: ({}) and ({})", a, b));
            }
        }

        errors
    }

    fn identifier(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }
}
