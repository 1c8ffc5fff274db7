use chrono::NaiveDate;

use tracksheet::models::day::DayRecord;
use tracksheet::models::day_type::DayType;
use tracksheet::models::month::MonthRecord;
use tracksheet::models::record::Record;
use tracksheet::models::sheet::Timesheet;
use tracksheet::models::year::YearRecord;
use tracksheet::utils::time::anchor_time;

/// Fixed reference date so in-progress-month logic never kicks in for the
/// 2024 fixtures below
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn day(
    year: i32,
    month: u32,
    day_of_month: u32,
    day_type: DayType,
    checkin: Option<&str>,
    checkout: Option<&str>,
) -> DayRecord {
    let date = NaiveDate::from_ymd_opt(year, month, day_of_month).unwrap();
    DayRecord::new(
        date,
        day_type,
        checkin.map(|t| anchor_time(t, date).unwrap()),
        checkout.map(|t| anchor_time(t, date).unwrap()),
    )
}

#[test]
fn normal_day_requires_both_check_times() {
    let missing_both = day(2024, 1, 8, DayType::Normal, None, None);
    assert_eq!(
        missing_both.validate(today()),
        vec!["Day type is \"NOR\" but no checkin or checkout.".to_string()]
    );

    let complete = day(2024, 1, 8, DayType::Normal, Some("09:00"), Some("17:00"));
    assert!(complete.validate(today()).is_empty());
}

#[test]
fn checkin_without_checkout_is_reported() {
    let record = day(2024, 1, 8, DayType::Weekend, Some("09:00"), None);
    assert_eq!(
        record.validate(today()),
        vec!["Checkin without checkout.".to_string()]
    );
}

#[test]
fn checkout_before_checkin_is_reported() {
    let record = day(2024, 1, 8, DayType::Weekend, Some("17:00"), Some("09:00"));
    assert_eq!(
        record.validate(today()),
        vec!["Checkout before checkin.".to_string()]
    );
}

#[test]
fn unknown_day_type_is_reported() {
    let record = day(2024, 1, 8, DayType::from_code("XYZ"), None, None);
    assert_eq!(record.validate(today()), vec!["Invalid day_type.".to_string()]);
}

#[test]
fn vacation_day_must_not_have_check_times() {
    let record = day(2024, 1, 8, DayType::Vacation, Some("09:00"), Some("17:00"));
    assert_eq!(
        record.validate(today()),
        vec!["Day type cannot have checkin or checkout.".to_string()]
    );
}

#[test]
fn checks_run_independently() {
    // A bad type together with a dangling checkin reports both findings.
    let record = day(2024, 1, 8, DayType::from_code("XYZ"), Some("09:00"), None);
    assert_eq!(
        record.validate(today()),
        vec![
            "Invalid day_type.".to_string(),
            "Checkin without checkout.".to_string(),
        ]
    );
}

#[test]
fn day_identifier_uses_two_digit_year() {
    let record = day(2024, 1, 8, DayType::Normal, None, None);
    assert_eq!(record.identifier(), "24-01-08");
}

#[test]
fn month_worked_is_sum_of_days() {
    let month = MonthRecord::new(
        2024,
        1,
        vec![
            day(2024, 1, 1, DayType::Normal, Some("09:00"), Some("17:00")),
            day(2024, 1, 2, DayType::Normal, Some("08:00"), Some("12:30")),
        ],
    );
    assert_eq!(month.worked().num_minutes(), 8 * 60 + 4 * 60 + 30);
}

#[test]
fn month_reports_each_missing_day() {
    let month = MonthRecord::new(
        2024,
        1,
        vec![day(2024, 1, 1, DayType::Normal, Some("09:00"), Some("17:00"))],
    );

    let errors = month.validate(today());
    let missing: Vec<&String> = errors.iter().filter(|e| e.starts_with("Missing day")).collect();
    assert_eq!(missing.len(), 30);
    assert!(errors.contains(&"Missing day: 2.".to_string()));
    assert!(errors.contains(&"Missing day: 31.".to_string()));
}

#[test]
fn current_month_is_validated_up_to_yesterday() {
    let month = MonthRecord::new(2025, 6, Vec::new());

    let errors = month.validate(NaiveDate::from_ymd_opt(2025, 6, 4).unwrap());
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0], "Missing day: 1.");
    assert_eq!(errors[2], "Missing day: 3.");
}

#[test]
fn current_month_on_the_first_still_expects_day_one() {
    let month = MonthRecord::new(2025, 6, Vec::new());

    let errors = month.validate(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    assert_eq!(errors, vec!["Missing day: 1.".to_string()]);
}

#[test]
fn month_flags_record_of_another_month() {
    let month = MonthRecord::new(
        2024,
        2,
        vec![day(2024, 3, 1, DayType::Normal, Some("09:00"), Some("17:00"))],
    );

    let errors = month.validate(today());
    assert!(errors.contains(&"Record belongs to another month: 24-03-01".to_string()));
}

#[test]
fn overlapping_records_are_reported_once() {
    let a = day(2024, 1, 1, DayType::Normal, Some("09:00"), Some("17:00"));
    let b = day(2024, 1, 2, DayType::Normal, Some("12:00"), Some("18:00"));
    let month = MonthRecord::new(2024, 1, vec![a.clone(), b.clone()]);

    let errors = month.validate(today());
    let overlaps: Vec<&String> = errors
        .iter()
        .filter(|e| e.starts_with("Overlapping records"))
        .collect();
    assert_eq!(
        overlaps,
        vec![&format!("Overlapping records: ({}) and ({})", a, b)]
    );
}

#[test]
fn overlap_scan_compares_adjacent_pairs_only() {
    // Three mutually overlapping intervals: only neighbors in checkin
    // order are compared, so two findings come back, not three.
    let month = MonthRecord::new(
        2024,
        1,
        vec![
            day(2024, 1, 1, DayType::Normal, Some("09:00"), Some("18:00")),
            day(2024, 1, 2, DayType::Normal, Some("10:00"), Some("17:00")),
            day(2024, 1, 3, DayType::Normal, Some("11:00"), Some("16:00")),
        ],
    );

    let overlaps = month
        .validate(today())
        .into_iter()
        .filter(|e| e.starts_with("Overlapping records"))
        .count();
    assert_eq!(overlaps, 2);
}

#[test]
fn records_without_checkin_sort_last_in_overlap_scan() {
    let month = MonthRecord::new(
        2024,
        1,
        vec![
            day(2024, 1, 1, DayType::Vacation, None, None),
            day(2024, 1, 2, DayType::Normal, Some("09:00"), Some("17:00")),
            day(2024, 1, 3, DayType::Normal, Some("12:00"), Some("18:00")),
        ],
    );

    let overlaps = month
        .validate(today())
        .into_iter()
        .filter(|e| e.starts_with("Overlapping records"))
        .count();
    assert_eq!(overlaps, 1);
}

#[test]
fn year_flags_month_of_another_year() {
    let year = YearRecord::new(2024, vec![MonthRecord::new(2023, 5, Vec::new())]);

    let errors = year.validate(today());
    assert!(errors.contains(&"Record belongs to another year: 2023-05".to_string()));
}

#[test]
fn child_errors_are_prefixed_with_identifiers() {
    let month = MonthRecord::new(
        2024,
        1,
        vec![day(2024, 1, 1, DayType::from_code("XYZ"), None, None)],
    );
    let sheet = Timesheet::new(vec![YearRecord::new(2024, vec![month])], Vec::new());

    let errors = sheet.validate(today());
    assert_eq!(errors[0], "2024: 2024-01: 24-01-01: Invalid day_type.");
    assert!(errors.contains(&"2024: 2024-01: Missing day: 2.".to_string()));
}

#[test]
fn validation_is_idempotent() {
    let month = MonthRecord::new(
        2024,
        1,
        vec![
            day(2024, 1, 1, DayType::Normal, Some("09:00"), Some("17:00")),
            day(2024, 1, 2, DayType::Normal, Some("12:00"), Some("18:00")),
        ],
    );

    let first = month.validate(today());
    let second = month.validate(today());
    assert_eq!(first, second);
}

#[test]
fn sheet_identifier_is_fixed() {
    assert_eq!(Timesheet::default().identifier(), "timesheet");
}
