#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn tsh() -> Command {
    cargo_bin_cmd!("tracksheet")
}

/// Create a unique empty ledger root inside the system temp dir, removing
/// any leftovers from a previous run
pub fn setup_ledger(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tracksheet_ledger", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).unwrap();
    path
}

/// Unique output directory path for report runs (not created)
pub fn temp_out(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tracksheet_out", name));
    fs::remove_dir_all(&path).ok();
    path
}

/// Write one month file with the standard header and the given data rows
pub fn write_month<S: AsRef<str>>(root: &Path, year: i32, month: u32, rows: &[S]) {
    let year_dir = root.join(format!("{:04}", year));
    fs::create_dir_all(&year_dir).unwrap();

    let mut content = String::from("day,day_type,checkin,checkout\n");
    for row in rows {
        content.push_str(row.as_ref());
        content.push('\n');
    }

    fs::write(year_dir.join(format!("{:02}.csv", month)), content).unwrap();
}

/// Rows for a fully-covered month of normal days with identical times
pub fn full_month_rows(days: u32, checkin: &str, checkout: &str) -> Vec<String> {
    (1..=days)
        .map(|d| format!("{},NOR,{},{}", d, checkin, checkout))
        .collect()
}
