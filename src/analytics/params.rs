// src/analytics/params.rs
//! Validated inputs to the Black-Scholes-Merton kernels
//!
//! A [`PricingParameters`] value can only be obtained through
//! [`PricingParameters::new`], so every instance satisfies:
//! - all numeric fields finite
//! - `S > 0`, `K > 0`, `T > 0`, `σ > 0`
//!
//! The risk-free rate carries no sign constraint. Rate and volatility are
//! decimals (0.05 = 5%); percent inputs are converted at the request boundary.

use crate::error::{validation::*, PricingError, PricingResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PricingParameters {
    underlying_price: f64,
    strike_price: f64,
    time_to_expiry: f64,
    risk_free_rate: f64,
    volatility: f64,
    option_type: OptionType,
}

impl PricingParameters {
    /// Validate and build a parameter set.
    ///
    /// # Errors
    /// `InvalidParameter` if S, K, T or σ is non-positive or non-finite, or r is non-finite.
    pub fn new(
        underlying_price: f64,
        strike_price: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> PricingResult<Self> {
        validate_positive("underlying_price", underlying_price)?;
        validate_positive("strike_price", strike_price)?;
        validate_positive("time_to_expiry", time_to_expiry)?;
        validate_finite("risk_free_rate", risk_free_rate)?;
        validate_positive("volatility", volatility)?;

        Ok(Self {
            underlying_price,
            strike_price,
            time_to_expiry,
            risk_free_rate,
            volatility,
            option_type,
        })
    }

    pub fn underlying_price(&self) -> f64 {
        self.underlying_price
    }

    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    pub fn time_to_expiry(&self) -> f64 {
        self.time_to_expiry
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Copy with a different underlying price, re-validated
    pub fn with_underlying(&self, underlying_price: f64) -> PricingResult<Self> {
        validate_positive("underlying_price", underlying_price)?;
        Ok(Self {
            underlying_price,
            ..*self
        })
    }

    /// Copy with a different option type
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Discount factor e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiry).exp()
    }
}

// Deserialisation goes through `new` so a decoded value is always valid.
impl<'de> Deserialize<'de> for PricingParameters {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            underlying_price: f64,
            strike_price: f64,
            time_to_expiry: f64,
            risk_free_rate: f64,
            volatility: f64,
            option_type: OptionType,
        }

        let raw = Raw::deserialize(deserializer)?;
        PricingParameters::new(
            raw.underlying_price,
            raw.strike_price,
            raw.time_to_expiry,
            raw.risk_free_rate,
            raw.volatility,
            raw.option_type,
        )
        .map_err(serde::de::Error::custom)
    }
}

/// Standardised intermediates of the closed-form solution
///
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntermediateTerms {
    pub d1: f64,
    pub d2: f64,
    /// σ√T
    pub vol_sqrt_t: f64,
}

impl IntermediateTerms {
    /// Recompute d1, d2 for a parameter set.
    ///
    /// # Errors
    /// `DomainError` if σ√T underflows or d1/d2 come out non-finite.
    pub fn compute(params: &PricingParameters) -> PricingResult<Self> {
        let vol_sqrt_t = params.volatility * params.time_to_expiry.sqrt();
        if !(vol_sqrt_t.is_normal() && vol_sqrt_t > 0.0) {
            tracing::warn!(vol_sqrt_t, "degenerate σ√T denominator");
            return Err(PricingError::DomainError {
                quantity: "vol_sqrt_t".to_string(),
                reason: format!("σ√T = {} is too small to divide by", vol_sqrt_t),
            });
        }

        let log_moneyness = (params.underlying_price / params.strike_price).ln();
        let drift = (params.risk_free_rate + 0.5 * params.volatility * params.volatility)
            * params.time_to_expiry;
        let d1 = ensure_finite("d1", (log_moneyness + drift) / vol_sqrt_t)?;
        let d2 = ensure_finite("d2", d1 - vol_sqrt_t)?;

        Ok(Self { d1, d2, vol_sqrt_t })
    }
}
