use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ledger::append::{AppendOutcome, append_day_record};
use crate::timerec::day_records_from_export;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

/// Import a timerec export, one append per exported day. Days already in
/// the ledger come back as Discarded, so re-running an import is harmless.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Import { ledger, csv } = cmd {
        let root = expand_tilde(ledger);
        let records = day_records_from_export(Path::new(csv))?;

        for record in &records {
            match append_day_record(&root, record)? {
                AppendOutcome::Inserted => success(format!("Inserted {}", record)),
                AppendOutcome::Discarded => warning(format!("Discarded: {}", record)),
            }
        }
    }
    Ok(())
}
