use chrono::{Duration, NaiveDate};

use tracksheet::utils::formatting::{format_delta, pad_left, pad_right};
use tracksheet::utils::time::{anchor_time, parse_delta, parse_time, time_field};

#[test]
fn negative_durations_format_with_a_leading_sign() {
    assert_eq!(format_delta(-Duration::minutes(90)), "-01:30");
}

#[test]
fn zero_formats_without_a_sign() {
    assert_eq!(format_delta(Duration::zero()), "00:00");
}

#[test]
fn positive_durations_format_without_a_sign() {
    assert_eq!(format_delta(Duration::minutes(125)), "02:05");
}

#[test]
fn hours_grow_past_two_digits() {
    assert_eq!(format_delta(Duration::hours(217)), "217:00");
}

#[test]
fn parse_delta_accepts_signed_values() {
    assert_eq!(parse_delta("01:30").unwrap(), Duration::minutes(90));
    assert_eq!(parse_delta("-00:45").unwrap(), -Duration::minutes(45));
    assert!(parse_delta("90m").is_err());
}

#[test]
fn parse_delta_round_trips_format_delta() {
    for minutes in [-95, -1, 0, 59, 60, 600] {
        let delta = Duration::minutes(minutes);
        assert_eq!(parse_delta(&format_delta(delta)).unwrap(), delta);
    }
}

#[test]
fn times_parse_and_anchor_to_the_day() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    let anchored = anchor_time("09:15", day).unwrap();

    assert_eq!(anchored.date(), day);
    assert_eq!(anchored.format("%H:%M").to_string(), "09:15");
    assert!(parse_time("9h15").is_none());
    assert!(anchor_time("25:00", day).is_err());
}

#[test]
fn absent_times_render_as_placeholder() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();

    assert_eq!(time_field(None), "-");
    assert_eq!(time_field(Some(anchor_time("09:15", day).unwrap())), "09:15");
}

#[test]
fn padding_is_display_width_aware() {
    assert_eq!(pad_right("saída", 7), "saída  ");
    assert_eq!(pad_left("saída", 7), "  saída");
    assert_eq!(pad_right("worked", 3), "worked");
}
