//! Balance policies: turn worked time into a signed balance against a quota.

use chrono::Duration;

use crate::models::day::DayRecord;
use crate::models::day_type::DayType;
use crate::models::month::MonthRecord;
use crate::models::record::Record;
use crate::models::sheet::Timesheet;
use crate::models::year::YearRecord;

/// Daily quota applied when no policy is configured.
pub const DEFAULT_HOURS_PER_DAY: i64 = 7;

/// Strategy mapping a day record to a signed balance delta, aggregated
/// bottom-up. Implementations must be pure functions of the record so a
/// policy can be swapped without touching the record model.
pub trait BalancePolicy {
    fn day_balance(&self, day: &DayRecord) -> Duration;

    fn month_balance(&self, month: &MonthRecord) -> Duration {
        month
            .records
            .iter()
            .fold(Duration::zero(), |acc, d| acc + self.day_balance(d))
    }

    fn year_balance(&self, year: &YearRecord) -> Duration {
        year.records
            .iter()
            .fold(Duration::zero(), |acc, m| acc + self.month_balance(m))
    }

    /// Sheet balance = sum over years plus all manual adjustment deltas.
    /// Adjustments enter here and only here; `Timesheet::worked` ignores
    /// them.
    fn sheet_balance(&self, sheet: &Timesheet) -> Duration {
        let years = sheet
            .records
            .iter()
            .fold(Duration::zero(), |acc, y| acc + self.year_balance(y));
        sheet
            .adjustments
            .iter()
            .fold(years, |acc, a| acc + a.worked())
    }
}

/// Default policy: a fixed hour quota per normal working day.
///
/// - Normal: worked minus the quota (overtime positive, undertime negative)
/// - Absence: the full quota as a penalty
/// - Weekend: any worked time counts fully as credit
/// - everything else: zero
pub struct HoursPerDayPolicy {
    hours_per_day: i64,
}

impl HoursPerDayPolicy {
    pub fn new(hours_per_day: i64) -> Self {
        Self { hours_per_day }
    }
}

impl Default for HoursPerDayPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_HOURS_PER_DAY)
    }
}

impl BalancePolicy for HoursPerDayPolicy {
    fn day_balance(&self, day: &DayRecord) -> Duration {
        match day.day_type {
            DayType::Normal => day.worked() - Duration::hours(self.hours_per_day),
            DayType::Absence => -Duration::hours(self.hours_per_day),
            DayType::Weekend => day.worked(),
            _ => Duration::zero(),
        }
    }
}
