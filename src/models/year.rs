use chrono::{Duration, NaiveDate};

use super::month::MonthRecord;
use super::record::{Record, collect_child_errors, sum_worked};

/// All month records found under one year directory, one per month file.
#[derive(Debug, Clone)]
pub struct YearRecord {
    pub year: i32,
    pub records: Vec<MonthRecord>,
}

impl YearRecord {
    pub fn new(year: i32, records: Vec<MonthRecord>) -> Self {
        Self { year, records }
    }
}

impl Record for YearRecord {
    fn worked(&self) -> Duration {
        sum_worked(&self.records)
    }

    fn validate(&self, today: NaiveDate) -> Vec<String> {
        let mut errors = collect_child_errors(&self.records, today);

        for r in &self.records {
            if r.year != self.year {
                errors.push(format!("Record belongs to another year: {}", r.identifier()));
            }
        }

        errors
    }

    fn identifier(&self) -> String {
        self.year.to_string()
    }
}
