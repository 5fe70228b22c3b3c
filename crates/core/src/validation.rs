//! Reusable validation rules shared by the entity services.
//!
//! Each rule returns violations instead of failing fast so callers can
//! report every problem with a request in one response.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use uuid::Uuid;

use crate::character::{self, AllowedCharacterType};
use crate::errors::Violation;
use crate::settings::PolicySettings;

/// Checks a field against its allowed character classes.
pub fn allowed_characters(
    field: &str,
    value: &str,
    classes: Option<&[AllowedCharacterType]>,
) -> Option<Violation> {
    if character::allowed(value, classes) {
        None
    } else {
        Some(Violation::CantContain {
            field: field.to_string(),
            classes: character::describe(classes),
        })
    }
}

/// Length, required-class and allowed-class rules for a password.
pub fn password(password: &str, policy: &PolicySettings) -> Vec<Violation> {
    let mut violations = Vec::new();
    let length = password.chars().count();

    if length < policy.password_min_length {
        violations.push(Violation::ShortPassword(policy.password_min_length));
    }
    if length > policy.password_max_length {
        violations.push(Violation::LongPassword(policy.password_max_length));
    }

    let required = policy.password_required_characters.as_deref();
    if !character::required(password, required) {
        violations.push(Violation::PasswordMustContain(character::describe(required)));
    }

    violations.extend(allowed_characters(
        "Password",
        password,
        policy.password_characters.as_deref(),
    ));

    violations
}

/// Formats a date the way range errors present it
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Checks `from <= to` first; only an ordered range is checked against
/// the school year.
pub fn date_range(
    from: NaiveDate,
    to: NaiveDate,
    year_start: NaiveDate,
    year_end: NaiveDate,
) -> Result<(), Violation> {
    if from > to {
        return Err(Violation::DateOrder);
    }
    within_school_year(from, year_start, year_end)?;
    within_school_year(to, year_start, year_end)
}

pub fn within_school_year(
    date: NaiveDate,
    year_start: NaiveDate,
    year_end: NaiveDate,
) -> Result<(), Violation> {
    if date < year_start || date > year_end {
        return Err(Violation::DateOutOfRange {
            start: format_date(year_start),
            end: format_date(year_end),
        });
    }
    Ok(())
}

/// Reports each id that appears more than once, in order of first repeat.
pub fn duplicate_ids(kind: &str, ids: &[Uuid]) -> Vec<Violation> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut violations = Vec::new();

    for id in ids {
        if !seen.insert(*id) && reported.insert(*id) {
            violations.push(Violation::DuplicateData {
                kind: kind.to_string(),
                value: id.to_string(),
            });
        }
    }

    violations
}

/// School days are seven `0`/`1` flags, Monday first.
pub fn valid_school_days(days: &str) -> bool {
    days.len() == 7 && days.chars().all(|c| c == '0' || c == '1')
}

pub fn is_school_day(days: &str, date: NaiveDate) -> bool {
    let index = date.weekday().num_days_from_monday() as usize;
    days.as_bytes().get(index) == Some(&b'1')
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Two lesson periods overlap when they start less than one school hour apart,
/// measured either way around midnight.
pub fn periods_overlap(a: NaiveTime, b: NaiveTime, school_hour_minutes: i32) -> bool {
    let minutes = (a - b).num_minutes().abs() % MINUTES_PER_DAY;
    let gap = minutes.min(MINUTES_PER_DAY - minutes);
    gap < i64::from(school_hour_minutes)
}

/// True when any two of `starts` overlap at the given school hour.
pub fn any_overlap(starts: &[NaiveTime], school_hour_minutes: i32) -> bool {
    starts.iter().enumerate().any(|(i, a)| {
        starts[i + 1..]
            .iter()
            .any(|b| periods_overlap(*a, *b, school_hour_minutes))
    })
}
