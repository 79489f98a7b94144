//! # Formatting helpers
//!
//! Prices in francs CFA, French dates and times, and Ivorian phone numbers.
//!
//! - [`format_price`] - `5000` → `"5 000 FCFA"`
//! - [`format_date`] / [`format_long_date`] / [`format_time`]
//! - [`format_relative`] - "il y a 5 min" style ages
//! - [`normalize_phone`] / [`format_phone`]

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Timelike, Utc, Weekday};
use thiserror::Error;

const COUNTRY_CODE: &str = "225";
const LOCAL_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid phone number '{0}': expected 10 digits")]
    InvalidPhone(String),
}

/// Group digits by thousands with a space (`1234567` → `"1 234 567"`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

pub fn format_price(amount: u64) -> String {
    format!("{} FCFA", group_thousands(amount))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn weekday_fr(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lundi",
        Weekday::Tue => "mardi",
        Weekday::Wed => "mercredi",
        Weekday::Thu => "jeudi",
        Weekday::Fri => "vendredi",
        Weekday::Sat => "samedi",
        Weekday::Sun => "dimanche",
    }
}

fn month_fr(month: u32) -> &'static str {
    match month {
        1 => "janvier",
        2 => "février",
        3 => "mars",
        4 => "avril",
        5 => "mai",
        6 => "juin",
        7 => "juillet",
        8 => "août",
        9 => "septembre",
        10 => "octobre",
        11 => "novembre",
        _ => "décembre",
    }
}

/// `"vendredi 16 octobre 2026"`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {} {} {}",
        weekday_fr(date.weekday()),
        date.day(),
        month_fr(date.month()),
        date.year()
    )
}

/// `"14h30"`
pub fn format_time(time: NaiveTime) -> String {
    format!("{:02}h{:02}", time.hour(), time.minute())
}

/// Age of `then` relative to `now`, for notification lists.
pub fn format_relative(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    if elapsed.num_seconds() < 60 {
        return "à l'instant".to_string();
    }
    if elapsed.num_minutes() < 60 {
        return format!("il y a {} min", elapsed.num_minutes());
    }
    if elapsed.num_hours() < 24 {
        return format!("il y a {} h", elapsed.num_hours());
    }
    if elapsed.num_days() < 7 {
        return format!("il y a {} j", elapsed.num_days());
    }
    format_date(then.date_naive())
}

/// Canonical `+225XXXXXXXXXX` form.
///
/// Accepts separators (spaces, dots, dashes) and an optional `+225` or
/// `00225` prefix.
pub fn normalize_phone(raw: &str) -> Result<String, FormatError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let has_junk = raw
        .chars()
        .any(|c| !(c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '.' | '-' | '(' | ')')));
    if has_junk {
        return Err(FormatError::InvalidPhone(raw.to_string()));
    }

    let local = if digits.len() == LOCAL_DIGITS {
        digits.as_str()
    } else if let Some(rest) = digits.strip_prefix("00225") {
        rest
    } else if let Some(rest) = digits.strip_prefix(COUNTRY_CODE) {
        rest
    } else {
        digits.as_str()
    };

    if local.len() != LOCAL_DIGITS {
        return Err(FormatError::InvalidPhone(raw.to_string()));
    }
    Ok(format!("+{}{}", COUNTRY_CODE, local))
}

/// `"+225 07 07 07 07 07"`
pub fn format_phone(raw: &str) -> Result<String, FormatError> {
    let normalized = normalize_phone(raw)?;
    let local = normalized
        .strip_prefix('+')
        .and_then(|n| n.strip_prefix(COUNTRY_CODE))
        .unwrap_or(&normalized);
    let pairs: Vec<String> = local
        .as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair).into_owned())
        .collect();
    Ok(format!("+{} {}", COUNTRY_CODE, pairs.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0 FCFA");
        assert_eq!(format_price(500), "500 FCFA");
        assert_eq!(format_price(5000), "5 000 FCFA");
        assert_eq!(format_price(1234567), "1 234 567 FCFA");
    }

    #[test]
    fn test_dates_and_times() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(format_date(date), "16/10/2026");
        assert_eq!(format_long_date(date), "vendredi 16 octobre 2026");
        assert_eq!(format_time(NaiveTime::from_hms_opt(9, 5, 0).unwrap()), "09h05");
    }

    #[test]
    fn test_format_relative() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        assert_eq!(format_relative(now, now), "à l'instant");
        assert_eq!(
            format_relative(now, now - chrono::Duration::minutes(5)),
            "il y a 5 min"
        );
        assert_eq!(format_relative(now, now - chrono::Duration::hours(3)), "il y a 3 h");
        assert_eq!(format_relative(now, now - chrono::Duration::days(2)), "il y a 2 j");
        assert_eq!(format_relative(now, now - chrono::Duration::days(30)), "16/09/2026");
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("07 07 07 07 07").unwrap(), "+2250707070707");
        assert_eq!(normalize_phone("+225 0707070707").unwrap(), "+2250707070707");
        assert_eq!(normalize_phone("00225-07.07.07.07.07").unwrap(), "+2250707070707");
        assert!(normalize_phone("0707").is_err());
        assert!(normalize_phone("07a7070707").is_err());
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("0102030405").unwrap(), "+225 01 02 03 04 05");
        assert_eq!(format_phone("2250123456").unwrap(), "+225 22 50 12 34 56");
    }
}
