//! Field-level constraint checks for catalog records
//!
//! Every record type (persistent rows and request shapes) implements
//! [`Validate`]. Checks mirror the column definitions: string lengths,
//! integer bounds and `NUMERIC(max_digits, decimal_places)` precision.
//! All violations of one record are collected and reported together.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shared column lengths
pub mod lengths {
    pub const SERIES_ID: usize = 100;
    pub const UNIT: usize = 50;
    pub const REGION: usize = 100;
    pub const CREATED_BY: usize = 100;
    pub const SCENARIO_NAME: usize = 200;
    pub const DESCRIPTION: usize = 1000;
    pub const SEASONAL_ADJUSTMENT: usize = 50;
    pub const PRICE_TYPE: usize = 50;
    pub const LOCATION: usize = 100;
    pub const HURRICANE_NAME: usize = 100;
    pub const NOTES: usize = 1000;
    pub const CONFIG_NAME: usize = 100;
    pub const DASHBOARD_TYPE: usize = 50;
    pub const TEMPLATE_NAME: usize = 200;
    pub const REPORT_TYPE: usize = 50;
    pub const OUTPUT_FORMAT: usize = 20;
    pub const SCHEDULE_PATTERN: usize = 100;
    pub const ALERT_NAME: usize = 200;
    pub const ALERT_TYPE: usize = 50;
    pub const THRESHOLD_OPERATOR: usize = 10;
}

/// Precision and scale of a `NUMERIC` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeric {
    pub max_digits: u32,
    pub decimal_places: u32,
}

/// Volumes and balance quantities
pub const QUANTITY: Numeric = Numeric::new(15, 2);
/// Percentages bounded to +/-999.99
pub const PERCENT: Numeric = Numeric::new(5, 2);
/// Hurricane price spikes, which can exceed 999%
pub const SPIKE_PERCENT: Numeric = Numeric::new(8, 2);
/// Unit prices
pub const PRICE: Numeric = Numeric::new(10, 4);
/// Price volatility
pub const VOLATILITY: Numeric = Numeric::new(8, 4);
/// Seasonal index, trend and volatility multipliers
pub const FACTOR: Numeric = Numeric::new(6, 4);
/// Alert thresholds
pub const THRESHOLD: Numeric = Numeric::new(15, 4);

impl Numeric {
    pub const fn new(max_digits: u32, decimal_places: u32) -> Self {
        Self {
            max_digits,
            decimal_places,
        }
    }

    /// Whether `value` fits the column.
    ///
    /// Trailing fractional zeros are ignored, so `1.500` fits a scale of 2.
    /// Leading zeros of a pure fraction count as digits (`0.05` has 2).
    pub fn admits(&self, value: Decimal) -> bool {
        let (digits, decimals) = digit_counts(value);
        let whole_digits = digits - decimals;

        digits <= self.max_digits
            && decimals <= self.decimal_places
            && whole_digits <= self.max_digits - self.decimal_places
    }
}

/// Returns (significant digits, fractional digits) of the normalized value
fn digit_counts(value: Decimal) -> (u32, u32) {
    let normalized = value.normalize();
    let decimals = normalized.scale();
    let mantissa = normalized.mantissa().unsigned_abs();
    let mantissa_digits = if mantissa == 0 { 1 } else { mantissa.ilog10() + 1 };

    (mantissa_digits.max(decimals), decimals)
}

/// A single failed constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// All constraint failures found on one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} field constraint(s) violated", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "; {}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Structural validation of a record against its column constraints
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Accumulates violations while a record is checked field by field
#[derive(Debug, Default)]
pub struct Constraints {
    violations: Vec<FieldViolation>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(&mut self, field: &str, message: String) -> &mut Self {
        self.violations.push(FieldViolation {
            field: field.to_string(),
            message,
        });
        self
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        let len = value.chars().count();
        if len > max {
            return self.reject(
                field,
                format!("must be at most {} characters (got {})", max, len),
            );
        }
        self
    }

    pub fn max_len_opt(&mut self, field: &str, value: Option<&str>, max: usize) -> &mut Self {
        match value {
            Some(value) => self.max_len(field, value, max),
            None => self,
        }
    }

    /// Each element of a string list must fit `max`; used for region lists
    pub fn max_len_each(&mut self, field: &str, values: &[String], max: usize) -> &mut Self {
        for (i, value) in values.iter().enumerate() {
            self.max_len(&format!("{}[{}]", field, i), value, max);
        }
        self
    }

    pub fn numeric(&mut self, field: &str, value: Decimal, spec: Numeric) -> &mut Self {
        if !spec.admits(value) {
            return self.reject(
                field,
                format!(
                    "{} exceeds NUMERIC({}, {})",
                    value, spec.max_digits, spec.decimal_places
                ),
            );
        }
        self
    }

    pub fn numeric_opt(&mut self, field: &str, value: Option<Decimal>, spec: Numeric) -> &mut Self {
        match value {
            Some(value) => self.numeric(field, value, spec),
            None => self,
        }
    }

    pub fn between(&mut self, field: &str, value: i32, min: i32, max: i32) -> &mut Self {
        if value < min || value > max {
            return self.reject(
                field,
                format!("must be between {} and {} (got {})", min, max, value),
            );
        }
        self
    }

    pub fn between_opt(&mut self, field: &str, value: Option<i32>, min: i32, max: i32) -> &mut Self {
        match value {
            Some(value) => self.between(field, value, min, max),
            None => self,
        }
    }

    pub fn at_least(&mut self, field: &str, value: i32, min: i32) -> &mut Self {
        if value < min {
            return self.reject(field, format!("must be at least {} (got {})", min, value));
        }
        self
    }

    /// JSON column that must hold an array of strings
    pub fn string_list(&mut self, field: &str, value: &Value) -> &mut Self {
        let all_strings = value
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_string));
        if !all_strings {
            return self.reject(field, "must be a JSON array of strings".to_string());
        }
        self
    }

    /// JSON column that must hold an object
    pub fn object(&mut self, field: &str, value: &Value) -> &mut Self {
        if !value.is_object() {
            return self.reject(field, "must be a JSON object".to_string());
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: std::mem::take(&mut self.violations),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_quantity_precision() {
        assert!(QUANTITY.admits(dec!(1234567890123.45)));
        assert!(QUANTITY.admits(dec!(-1234567890123.45)));
        assert!(QUANTITY.admits(dec!(0)));
        // Third decimal place
        assert!(!QUANTITY.admits(dec!(1.234)));
        // 14 whole digits leaves no room for scale 2
        assert!(!QUANTITY.admits(dec!(12345678901234)));
    }

    #[test]
    fn test_trailing_zeros_ignored() {
        assert!(QUANTITY.admits(dec!(1.500)));
        assert!(PRICE.admits(dec!(2.45670000)));
    }

    #[test]
    fn test_percent_precision() {
        assert!(PERCENT.admits(dec!(999.99)));
        assert!(PERCENT.admits(dec!(-45.5)));
        assert!(!PERCENT.admits(dec!(1000)));
        assert!(!PERCENT.admits(dec!(12.345)));
    }

    #[test]
    fn test_factor_precision() {
        assert!(FACTOR.admits(dec!(1.0)));
        assert!(FACTOR.admits(dec!(12.3456)));
        assert!(!FACTOR.admits(dec!(123.4)));
        assert!(!FACTOR.admits(dec!(0.12345)));
    }

    #[test]
    fn test_pure_fraction_digits() {
        // 0.05 counts as two digits, both fractional
        assert_eq!(digit_counts(dec!(0.05)), (2, 2));
        assert_eq!(digit_counts(dec!(100)), (3, 0));
        assert_eq!(digit_counts(dec!(0)), (1, 0));
    }

    #[test]
    fn test_constraints_collect_all_violations() {
        let mut checks = Constraints::new();
        checks
            .max_len("unit", "barrels per day, seasonally adjusted, four week average", 50)
            .numeric("value", dec!(1.001), QUANTITY)
            .between("month", 13, 1, 12)
            .at_least("years_of_data", 0, 1);

        let err = checks.finish().unwrap_err();
        assert_eq!(err.fields(), vec!["unit", "value", "month", "years_of_data"]);
    }

    #[test]
    fn test_optional_fields_skipped_when_absent() {
        let mut checks = Constraints::new();
        checks
            .max_len_opt("region", None, 100)
            .numeric_opt("volume", None, QUANTITY)
            .between_opt("hurricane_category", None, 1, 5);

        assert!(checks.finish().is_ok());
    }

    #[test]
    fn test_max_len_counts_characters() {
        let mut checks = Constraints::new();
        // 10 multi-byte characters fit a 10 character column
        checks.max_len("threshold_operator", "≥≥≥≥≥≥≥≥≥≥", 10);
        assert!(checks.finish().is_ok());
    }

    #[test]
    fn test_json_shapes() {
        let mut checks = Constraints::new();
        checks
            .string_list("recipients", &json!(["ops@example.com"]))
            .string_list("data_sources", &json!([]))
            .object("parameters", &json!({}));
        assert!(checks.finish().is_ok());

        checks
            .string_list("recipients", &json!("ops@example.com"))
            .string_list("regions_included", &json!([null]))
            .object("parameters", &json!(null));
        let err = checks.finish().unwrap_err();
        assert_eq!(err.fields(), vec!["recipients", "regions_included", "parameters"]);
    }

    #[test]
    fn test_list_element_field_names() {
        let mut checks = Constraints::new();
        let regions = vec!["PADD 3".to_string(), "x".repeat(101)];
        checks.max_len_each("affected_regions", &regions, 100);

        let err = checks.finish().unwrap_err();
        assert_eq!(err.fields(), vec!["affected_regions[1]"]);
    }
}
