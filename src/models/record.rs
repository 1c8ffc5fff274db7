//! The shared capability every timesheet period satisfies.

use chrono::{Duration, NaiveDate};

/// A period of time in a timesheet: a single day, a month, a year, the whole
/// sheet, or a manual adjustment.
///
/// `validate` takes `today` explicitly so that in-progress-month checks are
/// deterministic; only the CLI layer reads the clock.
pub trait Record {
    /// Amount of time worked in the period.
    fn worked(&self) -> Duration;

    /// Error messages for the record, empty if the record is ok.
    fn validate(&self, today: NaiveDate) -> Vec<String>;

    /// Unique string identifying the record.
    fn identifier(&self) -> String;
}

/// Composite validation rule shared by month, year and sheet records:
/// every child error is reported as `"{child.identifier()}: {error}"`,
/// keeping child order and per-child error order.
pub fn collect_child_errors<R: Record>(children: &[R], today: NaiveDate) -> Vec<String> {
    let mut errors = Vec::new();
    for child in children {
        for e in child.validate(today) {
            errors.push(format!("{}: {}", child.identifier(), e));
        }
    }
    errors
}

/// Zero-identity sum used by all composite `worked()` implementations.
pub fn sum_worked<R: Record>(children: &[R]) -> Duration {
    children
        .iter()
        .fold(Duration::zero(), |acc, r| acc + r.worked())
}
