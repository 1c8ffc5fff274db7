use chrono::{Duration, NaiveDate};

use super::adjustment::AdjustmentRecord;
use super::record::{Record, collect_child_errors, sum_worked};
use super::year::YearRecord;

/// Root aggregate: every year found in the ledger, plus manual balance
/// adjustments.
#[derive(Debug, Clone, Default)]
pub struct Timesheet {
    pub records: Vec<YearRecord>,
    pub adjustments: Vec<AdjustmentRecord>,
}

impl Timesheet {
    pub fn new(records: Vec<YearRecord>, adjustments: Vec<AdjustmentRecord>) -> Self {
        Self {
            records,
            adjustments,
        }
    }
}

impl Record for Timesheet {
    /// Strictly the sum over year records. Adjustments correct the balance
    /// (see `BalancePolicy::sheet_balance`), never the raw worked time.
    fn worked(&self) -> Duration {
        sum_worked(&self.records)
    }

    fn validate(&self, today: NaiveDate) -> Vec<String> {
        collect_child_errors(&self.records, today)
    }

    fn identifier(&self) -> String {
        "timesheet".to_string()
    }
}
