use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use super::day_type::DayType;
use super::record::Record;
use crate::utils::time::time_field;

/// One calendar day of the ledger.
///
/// Check times are anchored to `day`; both are optional and the pair is
/// immutable after construction. Inconsistent pairs (checkin without
/// checkout, checkout before checkin, ...) are reported by `validate`,
/// never rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub day: NaiveDate,
    pub day_type: DayType,
    pub checkin: Option<NaiveDateTime>,
    pub checkout: Option<NaiveDateTime>,
}

impl DayRecord {
    pub fn new(
        day: NaiveDate,
        day_type: DayType,
        checkin: Option<NaiveDateTime>,
        checkout: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            day,
            day_type,
            checkin,
            checkout,
        }
    }
}

impl Record for DayRecord {
    fn worked(&self) -> Duration {
        match (self.checkin, self.checkout) {
            // Raw difference: a checkout before checkin yields a negative
            // duration and is reported by validate, not clamped here.
            (Some(checkin), Some(checkout)) => checkout - checkin,
            _ => Duration::zero(),
        }
    }

    fn validate(&self, _today: NaiveDate) -> Vec<String> {
        // Checks run independently so one record can report several errors.
        let mut errors = Vec::new();

        if self.day_type.is_unknown() {
            errors.push("Invalid day_type.".to_string());
        }

        if self.checkin.is_some() && self.checkout.is_none() {
            errors.push("Checkin without checkout.".to_string());
        }

        if self.checkin.is_none() && self.checkout.is_some() {
            errors.push("Checkout without checkin.".to_string());
        }

        if let (Some(checkin), Some(checkout)) = (self.checkin, self.checkout)
            && checkout < checkin
        {
            errors.push("Checkout before checkin.".to_string());
        }

        if self.day_type == DayType::Normal && (self.checkin.is_none() || self.checkout.is_none()) {
            errors.push("Day type is \"NOR\" but no checkin or checkout.".to_string());
        }

        if self.day_type.forbids_check_times() && (self.checkin.is_some() || self.checkout.is_some())
        {
            errors.push("Day type cannot have checkin or checkout.".to_string());
        }

        errors
    }

    fn identifier(&self) -> String {
        self.day.format("%y-%m-%d").to_string()
    }
}

impl fmt::Display for DayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:<5} {:<5} {:<5}",
            self.identifier(),
            self.day_type.code(),
            time_field(self.checkin),
            time_field(self.checkout)
        )
    }
}
