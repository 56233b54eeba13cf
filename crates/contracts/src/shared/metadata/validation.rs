//! Validation rules for metadata fields

use serde_json::Value;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            max_length: None,
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} is required", field_label));
        }
        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }
        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }
        Ok(())
    }

    /// Validate a JSON value taken from a serialized resource.
    ///
    /// `null` and trimmed-empty strings count as missing; `0` and `false`
    /// count as present.
    pub fn validate_value(&self, value: &Value, field_label: &str) -> Result<(), String> {
        match value {
            Value::Null => {
                if self.required {
                    return Err(format!("{} is required", field_label));
                }
                Ok(())
            }
            Value::String(s) => self.validate_string(s, field_label),
            Value::Number(n) => match n.as_f64() {
                Some(v) => self.validate_number(v, field_label),
                None => Ok(()),
            },
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("A Corp", "Customer").is_ok());
        assert_eq!(
            rules.validate_string("   ", "Customer"),
            Err("Customer is required".to_string())
        );
        assert!(ValidationRules::none().validate_string("", "Note").is_ok());
    }

    #[test]
    fn test_number_range() {
        let rules = ValidationRules {
            min: Some(0.0),
            max: Some(100.0),
            ..ValidationRules::none()
        };
        assert!(rules.validate_number(0.0, "Rate").is_ok());
        assert!(rules.validate_number(-1.0, "Rate").is_err());
        assert!(rules.validate_number(100.5, "Rate").is_err());
    }

    #[test]
    fn test_validate_value_treats_zero_as_present() {
        let rules = ValidationRules::required();
        assert!(rules.validate_value(&json!(0), "Quantity").is_ok());
        assert!(rules.validate_value(&Value::Null, "Quantity").is_err());
        assert!(rules.validate_value(&json!(""), "Quantity").is_err());
    }

    #[test]
    fn test_max_length_counts_chars() {
        let rules = ValidationRules {
            max_length: Some(3),
            ..ValidationRules::none()
        };
        assert!(rules.validate_string("äöü", "Code").is_ok());
        assert!(rules.validate_string("abcd", "Code").is_err());
    }
}
