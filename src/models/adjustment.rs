use chrono::{Duration, NaiveDate};

use super::record::Record;
use crate::utils::formatting::format_delta;

/// A manual signed correction applied to the sheet balance, outside the
/// policy model. Adjustments participate in balance only: no aggregate
/// `worked()` includes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustmentRecord {
    pub day: NaiveDate,
    pub delta: Duration,
}

impl AdjustmentRecord {
    pub fn new(day: NaiveDate, delta: Duration) -> Self {
        Self { day, delta }
    }
}

impl Record for AdjustmentRecord {
    fn worked(&self) -> Duration {
        self.delta
    }

    fn validate(&self, _today: NaiveDate) -> Vec<String> {
        Vec::new()
    }

    fn identifier(&self) -> String {
        format!(
            "Adjustment of {} [{}]",
            format_delta(self.delta),
            self.day.format("%Y-%m-%d")
        )
    }
}
