use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::policy::{BalancePolicy, HoursPerDayPolicy};
use crate::errors::AppResult;
use crate::ledger::loader::parse_ledger;
use crate::models::record::Record;
use crate::report::write_report;
use crate::ui::translations::get_translations;
use crate::utils::date;
use crate::utils::format_delta;
use crate::utils::path::expand_tilde;

/// Validate the ledger, print the findings, render the report tree.
/// Validation findings never halt the run: the report is written even for
/// a ledger with errors.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        ledger,
        out,
        lang,
        hours,
    } = cmd
    {
        let root = expand_tilde(ledger);
        let sheet = parse_ledger(&root)?;

        for e in sheet.validate(date::today()) {
            println!("{}", e);
        }

        let lang = lang.as_deref().or(cfg.language.as_deref());
        let translations = get_translations(lang)?;
        let policy = HoursPerDayPolicy::new(hours.unwrap_or(cfg.hours_per_day));

        write_report(&sheet, &policy, Path::new(out), &translations)?;

        println!("Balance: {}", format_delta(policy.sheet_balance(&sheet)));
    }
    Ok(())
}
