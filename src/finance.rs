//! Small financial calculators: return on investment and tax estimate

use serde::Serialize;

use crate::error::{Result, ScoutError};

/// Tax rate used when none is given, in percent
pub const DEFAULT_TAX_RATE: f64 = 25.0;

/// A labelled calculator output
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub label: &'static str,
    pub value: f64,
    pub percent: bool,
}

impl std::fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.percent {
            write!(f, "{}: {:.2}%", self.label, self.value)
        } else {
            write!(f, "{}: {:.2}", self.label, self.value)
        }
    }
}

/// Parse a user-entered amount such as `"1,250.50"` or `" 300 "`
pub fn parse_amount(label: &str, text: &str) -> Result<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    let value: f64 = cleaned
        .parse()
        .map_err(|_| ScoutError::validation(format!("{} must be a number, got '{}'", label, text.trim())))?;

    require_finite(label, value)
}

fn require_finite(label: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoutError::validation(format!("{} must be a finite number", label)))
    }
}

/// `((revenue - expenses - investment) / investment) * 100`
pub fn roi(investment: f64, revenue: f64, expenses: f64) -> Result<CalculationResult> {
    let investment = require_finite("investment", investment)?;
    let revenue = require_finite("revenue", revenue)?;
    let expenses = require_finite("expenses", expenses)?;
    if investment == 0.0 {
        return Err(ScoutError::validation("investment must be a non-zero amount"));
    }

    let value = require_finite("return on investment", ((revenue - expenses - investment) / investment) * 100.0)?;
    Ok(CalculationResult {
        label: "Return on Investment",
        value,
        percent: true,
    })
}

/// Tax owed on `revenue` at `rate_percent`
pub fn tax_estimate(revenue: f64, rate_percent: f64) -> Result<CalculationResult> {
    let revenue = require_finite("annual revenue", revenue)?;
    if revenue < 0.0 {
        return Err(ScoutError::validation("annual revenue cannot be negative"));
    }
    if !(0.0..=100.0).contains(&rate_percent) {
        return Err(ScoutError::validation(format!(
            "tax rate must be between 0 and 100, got {}",
            rate_percent
        )));
    }

    Ok(CalculationResult {
        label: "Estimated Tax",
        value: require_finite("estimated tax", revenue * rate_percent / 100.0)?,
        percent: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roi() {
        let result = roi(1000.0, 2500.0, 1250.0).unwrap();
        assert_eq!(result.value, 25.0);
        assert_eq!(result.to_string(), "Return on Investment: 25.00%");
    }

    #[test]
    fn test_negative_roi() {
        let result = roi(1000.0, 500.0, 0.0).unwrap();
        assert_eq!(result.to_string(), "Return on Investment: -50.00%");
    }

    #[test]
    fn test_roi_zero_investment() {
        assert!(matches!(roi(0.0, 10.0, 5.0), Err(ScoutError::Validation { .. })));
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert!(roi(f64::INFINITY, 10.0, 5.0).is_err());
        assert!(roi(100.0, f64::NAN, 5.0).is_err());
        assert!(roi(100.0, 10.0, f64::NEG_INFINITY).is_err());

        let err = tax_estimate(f64::NAN, 25.0).unwrap_err();
        assert!(err.to_string().contains("annual revenue must be a finite number"));
        assert!(tax_estimate(f64::INFINITY, 25.0).is_err());
        assert!(tax_estimate(100.0, f64::NAN).is_err());

        // finite inputs that overflow
        assert!(roi(1e-300, f64::MAX, 0.0).is_err());
    }

    #[test]
    fn test_tax_estimate() {
        let result = tax_estimate(80_000.0, DEFAULT_TAX_RATE).unwrap();
        assert_eq!(result.value, 20_000.0);
        assert_eq!(result.to_string(), "Estimated Tax: 20000.00");

        assert!(tax_estimate(-1.0, 25.0).is_err());
        assert!(tax_estimate(100.0, 120.0).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("investment", " 1,250.50 ").unwrap(), 1250.5);
        assert_eq!(parse_amount("expenses", "-3").unwrap(), -3.0);
        let err = parse_amount("revenue", "lots").unwrap_err();
        assert!(err.to_string().contains("revenue must be a number"));
        assert!(parse_amount("revenue", "inf").is_err());
    }
}
