//! Pure input validators. Each function checks one raw operator input
//! and either returns the parsed value or a `Validation` error carrying
//! the message to show. Callers own the retry loop: validation never
//! aborts an operation, it just asks again.

use crate::error::{CitasError, Result};
use crate::model::{Dentist, Reason};
use chrono::{NaiveDate, NaiveTime};

/// Letters and spaces only, non-empty. Unicode-alphabetic, so accented
/// names pass.
pub fn patient_name(input: &str) -> Result<String> {
    if input.trim().is_empty() {
        return Err(CitasError::Validation(
            "The name cannot be empty".to_string(),
        ));
    }
    if !input.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        return Err(CitasError::Validation(
            "The name may only contain letters and spaces".to_string(),
        ));
    }
    Ok(input.trim().to_string())
}

pub fn date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CitasError::Validation("The date must be in YYYY-MM-DD format".to_string())
    })
}

pub fn time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| CitasError::Validation("The time must be in HH:MM format".to_string()))
}

/// 1-based choice into the dentist roster.
pub fn dentist_choice(input: &str) -> Result<usize> {
    choice(input, Dentist::ALL.len(), "dentist")
}

/// 1-based choice into the reason list.
pub fn reason_choice(input: &str) -> Result<usize> {
    choice(input, Reason::ALL.len(), "reason")
}

fn choice(input: &str, count: usize, what: &str) -> Result<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n),
        _ => Err(CitasError::Validation(format!(
            "Enter a number between 1 and {count} for the {what}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_accented_names_with_spaces() {
        assert_eq!(patient_name("Ana Pérez").unwrap(), "Ana Pérez");
    }

    #[test]
    fn rejects_empty_and_non_alphabetic_names() {
        assert!(patient_name("").is_err());
        assert!(patient_name("   ").is_err());
        assert!(patient_name("Ana123").is_err());
        assert!(patient_name("Ana-Pérez").is_err());
    }

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(
            date("2999-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2999, 1, 1).unwrap()
        );
        assert!(date("01/01/2999").is_err());
        assert!(date("2999-13-01").is_err());
        assert!(date("mañana").is_err());
    }

    #[test]
    fn parses_hh_mm_times_only() {
        assert_eq!(
            time("10:00").unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap()
        );
        assert!(time("25:00").is_err());
        assert!(time("10").is_err());
    }

    #[test]
    fn choices_must_be_in_range() {
        assert_eq!(dentist_choice("1").unwrap(), 1);
        assert_eq!(dentist_choice(" 3 ").unwrap(), 3);
        assert!(dentist_choice("0").is_err());
        assert!(dentist_choice("4").is_err());
        assert!(dentist_choice("-1").is_err());
        assert!(dentist_choice("dos").is_err());
        assert_eq!(reason_choice("2").unwrap(), 2);
        assert!(reason_choice("4").is_err());
    }
}
