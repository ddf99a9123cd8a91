// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes-Merton prices for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options, this has closed-form solutions involving
//! the cumulative normal distribution function Φ(x). All functions here take
//! an already-validated [`PricingParameters`], so the only failure left is a
//! non-finite intermediate (`DomainError`).

use super::params::{IntermediateTerms, OptionType, PricingParameters};
use crate::error::{validation::ensure_finite, PricingResult};
use crate::math_utils::norm_cdf;
use serde::{Deserialize, Serialize};

/// Call and put prices for the same inputs
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePair {
    pub call: f64,
    pub put: f64,
}

/// d1 and d2 for a parameter set
pub fn intermediate_terms(params: &PricingParameters) -> PricingResult<IntermediateTerms> {
    IntermediateTerms::compute(params)
}

fn call_from_terms(params: &PricingParameters, terms: &IntermediateTerms) -> f64 {
    let s = params.underlying_price();
    let k = params.strike_price();
    s * norm_cdf(terms.d1) - k * params.discount_factor() * norm_cdf(terms.d2)
}

fn put_from_terms(params: &PricingParameters, terms: &IntermediateTerms) -> f64 {
    let s = params.underlying_price();
    let k = params.strike_price();
    k * params.discount_factor() * norm_cdf(-terms.d2) - s * norm_cdf(-terms.d1)
}

/// Black-Scholes European call price
///
/// # Formula
/// ```text
/// C(S,K,r,σ,T) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
///
/// The `option_type` carried by `params` is ignored.
pub fn call_price(params: &PricingParameters) -> PricingResult<f64> {
    let terms = IntermediateTerms::compute(params)?;
    ensure_finite("call_price", call_from_terms(params, &terms))
}

/// Black-Scholes European put price
///
/// # Formula
/// ```text
/// P(S,K,r,σ,T) = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
///
/// The `option_type` carried by `params` is ignored.
pub fn put_price(params: &PricingParameters) -> PricingResult<f64> {
    let terms = IntermediateTerms::compute(params)?;
    ensure_finite("put_price", put_from_terms(params, &terms))
}

/// Theoretical price of the option described by `params`
///
/// # Errors
/// `DomainError` if the closed form produces a non-finite value.
pub fn price(params: &PricingParameters) -> PricingResult<f64> {
    match params.option_type() {
        OptionType::Call => call_price(params),
        OptionType::Put => put_price(params),
    }
}

/// Both prices from a single d1/d2 evaluation
pub fn price_pair(params: &PricingParameters) -> PricingResult<PricePair> {
    let terms = IntermediateTerms::compute(params)?;
    Ok(PricePair {
        call: ensure_finite("call_price", call_from_terms(params, &terms))?,
        put: ensure_finite("put_price", put_from_terms(params, &terms))?,
    })
}

/// Payoff if exercised now: max(S-K, 0) for calls, max(K-S, 0) for puts
pub fn intrinsic_value(params: &PricingParameters) -> f64 {
    let s = params.underlying_price();
    let k = params.strike_price();
    match params.option_type() {
        OptionType::Call => (s - k).max(0.0),
        OptionType::Put => (k - s).max(0.0),
    }
}
