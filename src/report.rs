//! Render the report tree: sheet totals at the root, per-year totals, one
//! fixed-width table per month. The output directory is destroyed and
//! recreated on every run.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chrono::Datelike;

use crate::core::policy::BalancePolicy;
use crate::errors::AppResult;
use crate::models::day::DayRecord;
use crate::models::month::MonthRecord;
use crate::models::record::Record;
use crate::models::sheet::Timesheet;
use crate::ui::translations::Translations;
use crate::utils::formatting::{format_delta, pad_left, pad_right};
use crate::utils::time::time_field;

const COLUMN_GAP: &str = "    ";
const DAY_WIDTH: usize = 3;
const TYPE_WIDTH: usize = 5;
const TIME_WIDTH: usize = 5;
const WORKED_WIDTH: usize = 10;
const BALANCE_WIDTH: usize = 8;

pub fn write_report(
    sheet: &Timesheet,
    policy: &dyn BalancePolicy,
    out: &Path,
    tr: &Translations,
) -> AppResult<()> {
    if out.exists() {
        fs::remove_dir_all(out)?;
    }
    fs::create_dir_all(out)?;

    write_sheet_totals(sheet, policy, &out.join("totals.txt"), tr)?;

    for year in &sheet.records {
        let year_path = out.join(year.year.to_string());
        fs::create_dir_all(&year_path)?;

        let mut totals = File::create(year_path.join("totals.txt"))?;
        writeln!(totals, "{}: {}", tr.lookup("Worked"), format_delta(year.worked()))?;
        writeln!(
            totals,
            "{}: {}",
            tr.lookup("Balance"),
            format_delta(policy.year_balance(year))
        )?;

        for month in &year.records {
            write_month_table(
                month,
                policy,
                &year_path.join(format!("{:02}.txt", month.month)),
                tr,
            )?;
        }
    }

    Ok(())
}

fn write_sheet_totals(
    sheet: &Timesheet,
    policy: &dyn BalancePolicy,
    path: &Path,
    tr: &Translations,
) -> AppResult<()> {
    let mut f = File::create(path)?;
    writeln!(f, "{}: {}", tr.lookup("Worked"), format_delta(sheet.worked()))?;
    writeln!(
        f,
        "{}: {}",
        tr.lookup("Balance"),
        format_delta(policy.sheet_balance(sheet))
    )?;

    if !sheet.adjustments.is_empty() {
        writeln!(f, "Adjustments:")?;
        for a in &sheet.adjustments {
            writeln!(f, "    {}", a.identifier())?;
        }
    }

    Ok(())
}

fn write_month_table(
    month: &MonthRecord,
    policy: &dyn BalancePolicy,
    path: &Path,
    tr: &Translations,
) -> AppResult<()> {
    let mut f = File::create(path)?;

    writeln!(f, "{}", header_line(tr))?;
    for day in &month.records {
        writeln!(f, "{}", day_line(day, policy, tr))?;
    }

    writeln!(f, "{}: {}", tr.lookup("Worked"), format_delta(month.worked()))?;
    writeln!(
        f,
        "{}: {}",
        tr.lookup("Balance"),
        format_delta(policy.month_balance(month))
    )?;

    Ok(())
}

fn header_line(tr: &Translations) -> String {
    [
        pad_right(tr.lookup("day"), DAY_WIDTH),
        pad_right(tr.lookup("type"), TYPE_WIDTH),
        pad_right(tr.lookup("in"), TIME_WIDTH),
        pad_right(tr.lookup("out"), TIME_WIDTH),
        pad_right(tr.lookup("worked"), WORKED_WIDTH),
        pad_left(tr.lookup("balance"), BALANCE_WIDTH),
    ]
    .join(COLUMN_GAP)
}

fn day_line(day: &DayRecord, policy: &dyn BalancePolicy, tr: &Translations) -> String {
    [
        format!("{:02} ", day.day.day()),
        pad_right(tr.lookup(day.day_type.code()), TYPE_WIDTH),
        pad_right(&time_field(day.checkin), TIME_WIDTH),
        pad_right(&time_field(day.checkout), TIME_WIDTH),
        pad_right(&format_delta(day.worked()), WORKED_WIDTH),
        pad_left(&format_delta(policy.day_balance(day)), BALANCE_WIDTH),
    ]
    .join(COLUMN_GAP)
}
