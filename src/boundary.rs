// src/boundary.rs
//! Request-side adapters
//!
//! Helpers for a form- or JSON-driven caller. The kernels take decimal rates
//! and volatilities; [`OptionRequest`] is the one place where percent inputs
//! are divided by 100.

use crate::analytics::{bs_analytic, OptionType, PricingParameters};
use crate::error::PricingResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw calculator input as submitted by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionRequest {
    pub stock_price: f64,
    pub strike_price: f64,
    /// Years
    pub time_to_maturity: f64,
    /// Percent, e.g. 10.0 for 10%
    pub risk_free_rate: f64,
    /// Percent, e.g. 20.0 for 20%
    pub volatility: f64,
    pub option_type: String,
}

impl OptionRequest {
    /// Convert percent fields to decimals and validate.
    ///
    /// # Errors
    /// `InvalidOptionType` for an unknown option type, `InvalidParameter` for
    /// out-of-domain numbers.
    pub fn to_parameters(&self) -> PricingResult<PricingParameters> {
        let option_type: OptionType = self.option_type.parse()?;
        PricingParameters::new(
            self.stock_price,
            self.strike_price,
            self.time_to_maturity,
            self.risk_free_rate / 100.0,
            self.volatility / 100.0,
            option_type,
        )
    }
}

/// Immutable audit record of one priced request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub parameters: PricingParameters,
    pub option_price: f64,
    pub created_at: DateTime<Utc>,
}

impl CalculationRecord {
    /// Price `parameters` and stamp the result with the current time
    pub fn compute(parameters: PricingParameters) -> PricingResult<Self> {
        let option_price = bs_analytic::price(&parameters)?;
        tracing::info!(
            option_type = %parameters.option_type(),
            option_price,
            "option priced"
        );
        Ok(Self {
            parameters,
            option_price,
            created_at: Utc::now(),
        })
    }
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Option ({}) - Price: {:.2}",
            self.parameters.option_type().as_str().to_uppercase(),
            self.option_price
        )
    }
}

/// Currency display, rounded to cents: `$4.76`
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
