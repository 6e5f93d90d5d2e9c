use crate::error::{EstimateError, Result};
use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Two-sided interval coverage offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum ConfidenceLevel {
    P80,
    P90,
    #[default]
    P95,
    P99,
}

impl ConfidenceLevel {
    pub fn value(&self) -> f64 {
        match self {
            ConfidenceLevel::P80 => 0.80,
            ConfidenceLevel::P90 => 0.90,
            ConfidenceLevel::P95 => 0.95,
            ConfidenceLevel::P99 => 0.99,
        }
    }

    /// Probability mass left out on each side of the interval.
    pub fn tail_mass(&self) -> f64 {
        (1.0 - self.value()) / 2.0
    }

    pub fn allowed_values() -> String {
        ConfidenceLevel::iter().map(|c| c.to_string()).join(", ")
    }

    fn invalid(input: impl fmt::Display) -> EstimateError {
        EstimateError::InputValidation(format!(
            "confidence level {} is not one of {}",
            input,
            ConfidenceLevel::allowed_values()
        ))
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}", self.value())
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = EstimateError;

    fn try_from(value: f64) -> Result<Self> {
        ConfidenceLevel::iter()
            .find(|c| (c.value() - value).abs() < 1e-9)
            .ok_or_else(|| ConfidenceLevel::invalid(value))
    }
}

impl FromStr for ConfidenceLevel {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (number, percent) = match trimmed.strip_suffix('%') {
            Some(number) => (number.trim(), true),
            None => (trimmed, false),
        };
        let value: f64 = number.parse().map_err(|_| ConfidenceLevel::invalid(s))?;
        // "95" and "95%" both mean 0.95
        let value = if percent || value > 1.0 { value / 100.0 } else { value };
        ConfidenceLevel::try_from(value).map_err(|_| ConfidenceLevel::invalid(s))
    }
}

impl Serialize for ConfidenceLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_mass() {
        for (level, expected) in vec![
            (ConfidenceLevel::P80, 0.10),
            (ConfidenceLevel::P90, 0.05),
            (ConfidenceLevel::P95, 0.025),
            (ConfidenceLevel::P99, 0.005),
        ] {
            assert!((level.tail_mass() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_default_is_95() {
        assert_eq!(ConfidenceLevel::default(), ConfidenceLevel::P95);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfidenceLevel::P80.to_string(), "0.80");
        assert_eq!(ConfidenceLevel::P99.to_string(), "0.99");
        assert_eq!(ConfidenceLevel::allowed_values(), "0.80, 0.90, 0.95, 0.99");
    }

    #[test]
    fn test_try_from_f64() {
        assert_eq!(ConfidenceLevel::try_from(0.9).unwrap(), ConfidenceLevel::P90);
        assert_eq!(ConfidenceLevel::try_from(0.99).unwrap(), ConfidenceLevel::P99);
        for value in vec![0.5, 0.85, 1.0, 0.0, -0.95, f64::NAN] {
            assert!(ConfidenceLevel::try_from(value).is_err(), "{} accepted", value);
        }
    }

    #[test]
    fn test_from_str() {
        for (s, expected) in vec![
            ("0.8", ConfidenceLevel::P80),
            ("0.80", ConfidenceLevel::P80),
            ("90", ConfidenceLevel::P90),
            ("95%", ConfidenceLevel::P95),
            (" 0.99 ", ConfidenceLevel::P99),
        ] {
            assert_eq!(s.parse::<ConfidenceLevel>().unwrap(), expected);
        }
    }

    #[test]
    fn test_from_str_error() {
        for s in vec!["0.85", "high", "", "100%", "-95"] {
            let level = s.parse::<ConfidenceLevel>();
            match level {
                Err(EstimateError::InputValidation(msg)) => {
                    assert!(msg.contains("0.80, 0.90, 0.95, 0.99"))
                }
                other => panic!("expected validation error for {:?}, got {:?}", s, other),
            }
        }
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ConfidenceLevel::P90).unwrap();
        assert_eq!(json, "0.9");
    }
}
