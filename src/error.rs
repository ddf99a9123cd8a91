// src/error.rs
use thiserror::Error;

/// Errors raised by the pricing, Greeks and sweep kernels
#[derive(Debug, Error)]
pub enum PricingError {
    /// A numeric input lies outside the model's domain
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Option type string was neither "call" nor "put"
    #[error("Invalid option type '{value}': must be 'call' or 'put'")]
    InvalidOptionType { value: String },

    /// Sweep range or sample count is unusable
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Valid inputs combined into a non-finite intermediate or result
    #[error("Numerical domain error computing {quantity}: {reason}")]
    DomainError { quantity: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PricingError {
    /// True for every rejection of caller-supplied inputs, including a bad option type.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            PricingError::InvalidParameter { .. } | PricingError::InvalidOptionType { .. }
        )
    }

    pub fn is_domain_error(&self) -> bool {
        matches!(self, PricingError::DomainError { .. })
    }
}

/// Result type alias for bsm-greeks operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PricingResult};

    /// Upper bound on sweep samples
    pub const MAX_SAMPLES: usize = 1_000_000;

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricingResult<()> {
        if !value.is_finite() {
            Err(PricingError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is finite and strictly positive
    pub fn validate_positive(name: &str, value: f64) -> PricingResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(PricingError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a sweep range: finite, strictly positive, and `low < high`
    pub fn validate_range_order(low: f64, high: f64) -> PricingResult<()> {
        if !low.is_finite() || !high.is_finite() {
            return Err(PricingError::InvalidConfiguration {
                field: "underlying_range".to_string(),
                reason: format!("bounds must be finite, got [{}, {}]", low, high),
            });
        }
        if low <= 0.0 {
            return Err(PricingError::InvalidConfiguration {
                field: "underlying_range".to_string(),
                reason: format!("lower bound must be positive, got {}", low),
            });
        }
        if low >= high {
            return Err(PricingError::InvalidConfiguration {
                field: "underlying_range".to_string(),
                reason: format!("lower bound {} must be below upper bound {}", low, high),
            });
        }
        Ok(())
    }

    /// Validate sweep sample count
    pub fn validate_sample_count(samples: usize) -> PricingResult<()> {
        if samples < 2 {
            Err(PricingError::InvalidConfiguration {
                field: "samples".to_string(),
                reason: "must be at least 2".to_string(),
            })
        } else if samples > MAX_SAMPLES {
            Err(PricingError::InvalidConfiguration {
                field: "samples".to_string(),
                reason: format!("exceeds maximum allowed ({})", MAX_SAMPLES),
            })
        } else {
            Ok(())
        }
    }

    /// Reject a computed quantity that is NaN or infinite
    pub fn ensure_finite(quantity: &str, value: f64) -> PricingResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            tracing::warn!(quantity, value, "non-finite result rejected");
            Err(PricingError::DomainError {
                quantity: quantity.to_string(),
                reason: format!("evaluated to {}", value),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("vol", 0.2).is_ok());
        assert!(validate_positive("vol", 0.0).is_err());
        assert!(validate_positive("vol", -0.1).is_err());
        assert!(validate_positive("vol", f64::NAN).is_err());
        assert!(validate_positive("vol", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("r", -0.01).is_ok());
        assert!(validate_finite("r", f64::NAN).is_err());
        assert!(validate_finite("r", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_range_order() {
        assert!(validate_range_order(20.0, 60.0).is_ok());
        assert!(validate_range_order(60.0, 20.0).is_err());
        assert!(validate_range_order(20.0, 20.0).is_err());
        assert!(validate_range_order(0.0, 20.0).is_err());
        assert!(validate_range_order(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_sample_count() {
        assert!(validate_sample_count(2).is_ok());
        assert!(validate_sample_count(100).is_ok());
        assert!(validate_sample_count(1).is_err());
        assert!(validate_sample_count(0).is_err());
        assert!(validate_sample_count(MAX_SAMPLES + 1).is_err());
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("price", 4.76).unwrap(), 4.76);
        let err = ensure_finite("d1", f64::NAN).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_error_display() {
        let error = PricingError::InvalidParameter {
            parameter: "vol".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("vol"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
        assert!(error.is_invalid_parameter());
    }

    #[test]
    fn test_option_type_error_is_invalid_parameter() {
        let error = PricingError::InvalidOptionType {
            value: "straddle".to_string(),
        };
        assert!(error.is_invalid_parameter());
        assert!(format!("{}", error).contains("straddle"));
    }
}
