//! Age and BMI calculator commands.

use chrono::Local;

use crate::cli::args::OutputFormat;
use crate::error::DeskError;
use crate::features::age::{parse_moment, AgeBreakdown};
use crate::features::bmi::BmiReading;
use crate::output::{format_age, format_bmi};

/// Execute the age command.
///
/// # Errors
///
/// Returns an error if a date cannot be parsed or the birth date is later
/// than the comparison date.
pub fn age(birth: &str, on: Option<&str>, format: OutputFormat) -> Result<String, DeskError> {
    let birth = parse_moment(birth)?;
    let at = match on {
        Some(on) => parse_moment(on)?,
        None => Local::now().naive_local(),
    };
    let breakdown = AgeBreakdown::between(birth, at)?;
    format_age(&breakdown, birth, at, format)
}

/// Execute the bmi command.
///
/// # Errors
///
/// Returns an error if weight or height is not a positive number.
pub fn bmi(weight_kg: f64, height_cm: f64, format: OutputFormat) -> Result<String, DeskError> {
    let reading = BmiReading::calculate(weight_kg, height_cm)?;
    format_bmi(&reading, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_json() {
        let out = age("1990-05-15", Some("2024-03-10"), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed["age"]["years"], 33);
        assert_eq!(parsed["age"]["months"], 9);
        assert_eq!(parsed["age"]["days"], 24);
        assert_eq!(parsed["birth"], "1990-05-15T00:00:00");
    }

    #[test]
    fn test_age_future_birth_rejected() {
        assert!(age("2030-01-01", Some("2024-01-01"), OutputFormat::Pretty).is_err());
    }

    #[test]
    fn test_age_bad_date() {
        let err = age("15/05/1990", None, OutputFormat::Pretty).unwrap_err();
        assert!(matches!(err, DeskError::InvalidInput(_)));
    }

    #[test]
    fn test_bmi_json() {
        let out = bmi(70.0, 175.0, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed["category"], "normal");
        assert!((parsed["bmi"].as_f64().unwrap() - 22.857).abs() < 0.001);
    }

    #[test]
    fn test_bmi_invalid() {
        assert!(bmi(70.0, 0.0, OutputFormat::Pretty).is_err());
    }
}
