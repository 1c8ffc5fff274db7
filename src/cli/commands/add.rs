use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ledger::append::{AppendOutcome, append_day_record};
use crate::models::day::DayRecord;
use crate::models::day_type::DayType;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_optional_time;

/// Append one day record entered on the command line.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        ledger,
        date,
        day_type,
        start,
        end,
    } = cmd
    {
        let day = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        // Direct entry rejects bad codes up front; only the loader keeps
        // them for validate() to report.
        let day_type = DayType::known_from_code(day_type)
            .ok_or_else(|| AppError::InvalidDayType(day_type.to_string()))?;

        let record = DayRecord::new(
            day,
            day_type,
            parse_optional_time(start.as_ref(), day)?,
            parse_optional_time(end.as_ref(), day)?,
        );

        match append_day_record(&expand_tilde(ledger), &record)? {
            AppendOutcome::Inserted => success(format!("Inserted {}", record)),
            AppendOutcome::Discarded => warning(format!("Discarded: {}", record)),
        }
    }
    Ok(())
}
