// src/analytics/greeks.rs
//! Closed-form Black-Scholes Greeks
//!
//! | Greek | Call                              | Put                                |
//! |-------|-----------------------------------|------------------------------------|
//! | Δ     | Φ(d₁)                             | Φ(d₁) − 1                          |
//! | Γ     | φ(d₁) / (S σ √T)                  | same                               |
//! | ν     | S φ(d₁) √T                        | same                               |
//! | Θ     | −S φ(d₁) σ / (2√T) − r K e^(−rT) Φ(d₂) | −S φ(d₁) σ / (2√T) + r K e^(−rT) Φ(−d₂) |
//! | ρ     | K T e^(−rT) Φ(d₂)                 | −K T e^(−rT) Φ(−d₂)                |
//!
//! Units are raw derivatives: vega per unit of σ, rho per unit of r,
//! theta per year.

use super::params::{IntermediateTerms, OptionType, PricingParameters};
use crate::error::{validation::ensure_finite, PricingError, PricingResult};
use crate::math_utils::{norm_cdf, norm_pdf};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Greek {
    Delta,
    Gamma,
    Vega,
    Theta,
    Rho,
}

impl Greek {
    pub const ALL: [Greek; 5] = [Greek::Delta, Greek::Gamma, Greek::Vega, Greek::Theta, Greek::Rho];

    pub fn name(&self) -> &'static str {
        match self {
            Greek::Delta => "delta",
            Greek::Gamma => "gamma",
            Greek::Vega => "vega",
            Greek::Theta => "theta",
            Greek::Rho => "rho",
        }
    }

    /// Whether the value differs between calls and puts
    pub fn depends_on_option_type(&self) -> bool {
        !matches!(self, Greek::Gamma | Greek::Vega)
    }

    fn flag(&self) -> GreekSet {
        match self {
            Greek::Delta => GreekSet::DELTA,
            Greek::Gamma => GreekSet::GAMMA,
            Greek::Vega => GreekSet::VEGA,
            Greek::Theta => GreekSet::THETA,
            Greek::Rho => GreekSet::RHO,
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Greek {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Greek::ALL
            .iter()
            .copied()
            .find(|g| g.name() == wanted)
            .ok_or_else(|| PricingError::InvalidConfiguration {
                field: "greek".to_string(),
                reason: format!("unknown greek '{}'", s),
            })
    }
}

bitflags! {
    /// Subset of Greeks to chart
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct GreekSet: u32 {
        const NONE  = 0;
        const DELTA = 1 << 0;
        const GAMMA = 1 << 1;
        const VEGA  = 1 << 2;
        const THETA = 1 << 3;
        const RHO   = 1 << 4;
    }
}

impl GreekSet {
    /// Delta and gamma, the pair charted alongside the price curve
    pub fn default_charts() -> Self {
        GreekSet::DELTA | GreekSet::GAMMA
    }

    pub fn contains_greek(&self, greek: Greek) -> bool {
        self.contains(greek.flag())
    }

    /// Selected Greeks in canonical order (delta, gamma, vega, theta, rho)
    pub fn greeks(&self) -> Vec<Greek> {
        Greek::ALL
            .iter()
            .copied()
            .filter(|g| self.contains_greek(*g))
            .collect()
    }
}

impl From<Greek> for GreekSet {
    fn from(greek: Greek) -> Self {
        greek.flag()
    }
}

/// First and second order sensitivities for one parameter set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreeksResult {
    pub option_type: OptionType,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂t
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

impl GreeksResult {
    pub fn get(&self, greek: Greek) -> f64 {
        match greek {
            Greek::Delta => self.delta,
            Greek::Gamma => self.gamma,
            Greek::Vega => self.vega,
            Greek::Theta => self.theta,
            Greek::Rho => self.rho,
        }
    }
}

// Shared per-evaluation quantities; d1/d2 come from the pricing kernel.
struct Kernel {
    s: f64,
    k: f64,
    t: f64,
    r: f64,
    vol: f64,
    df: f64,
    sqrt_t: f64,
    pdf_d1: f64,
    terms: IntermediateTerms,
}

impl Kernel {
    fn new(params: &PricingParameters) -> PricingResult<Self> {
        let terms = IntermediateTerms::compute(params)?;
        let t = params.time_to_expiry();
        Ok(Self {
            s: params.underlying_price(),
            k: params.strike_price(),
            t,
            r: params.risk_free_rate(),
            vol: params.volatility(),
            df: params.discount_factor(),
            sqrt_t: t.sqrt(),
            pdf_d1: norm_pdf(terms.d1),
            terms,
        })
    }

    fn delta(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => norm_cdf(self.terms.d1),
            OptionType::Put => norm_cdf(self.terms.d1) - 1.0,
        }
    }

    fn gamma(&self) -> f64 {
        self.pdf_d1 / (self.s * self.vol * self.sqrt_t)
    }

    fn vega(&self) -> f64 {
        self.s * self.pdf_d1 * self.sqrt_t
    }

    fn theta(&self, option_type: OptionType) -> f64 {
        let decay = -(self.s * self.pdf_d1 * self.vol) / (2.0 * self.sqrt_t);
        let carry = self.r * self.k * self.df;
        match option_type {
            OptionType::Call => decay - carry * norm_cdf(self.terms.d2),
            OptionType::Put => decay + carry * norm_cdf(-self.terms.d2),
        }
    }

    fn rho(&self, option_type: OptionType) -> f64 {
        let scale = self.k * self.t * self.df;
        match option_type {
            OptionType::Call => scale * norm_cdf(self.terms.d2),
            OptionType::Put => -scale * norm_cdf(-self.terms.d2),
        }
    }

    fn eval(&self, greek: Greek, option_type: OptionType) -> f64 {
        match greek {
            Greek::Delta => self.delta(option_type),
            Greek::Gamma => self.gamma(),
            Greek::Vega => self.vega(),
            Greek::Theta => self.theta(option_type),
            Greek::Rho => self.rho(option_type),
        }
    }
}

/// All five Greeks for `params`
///
/// # Errors
/// `DomainError` if any Greek evaluates to a non-finite value.
pub fn greeks(params: &PricingParameters) -> PricingResult<GreeksResult> {
    let kernel = Kernel::new(params)?;
    let option_type = params.option_type();

    Ok(GreeksResult {
        option_type,
        delta: ensure_finite("delta", kernel.delta(option_type))?,
        gamma: ensure_finite("gamma", kernel.gamma())?,
        vega: ensure_finite("vega", kernel.vega())?,
        theta: ensure_finite("theta", kernel.theta(option_type))?,
        rho: ensure_finite("rho", kernel.rho(option_type))?,
    })
}

/// A single named Greek for `params`
pub fn greek(params: &PricingParameters, greek: Greek) -> PricingResult<f64> {
    let kernel = Kernel::new(params)?;
    ensure_finite(greek.name(), kernel.eval(greek, params.option_type()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference(option_type: OptionType) -> PricingParameters {
        PricingParameters::new(42.0, 40.0, 0.5, 0.1, 0.2, option_type).unwrap()
    }

    #[test]
    fn test_reference_call_greeks() {
        let g = greeks(&reference(OptionType::Call)).unwrap();
        assert_eq!(g.option_type, OptionType::Call);
        assert_relative_eq!(g.delta, 0.779_131_290_942_669, max_relative = 1e-9);
        assert_relative_eq!(g.gamma, 0.049_962_670_405_911_85, max_relative = 1e-9);
        assert_relative_eq!(g.vega, 8.813_415_059_602_853, max_relative = 1e-9);
        assert_relative_eq!(g.theta, -4.559_092_194_592_626, max_relative = 1e-9);
        assert_relative_eq!(g.rho, 13.982_045_913_360_281, max_relative = 1e-9);
    }

    #[test]
    fn test_reference_put_greeks() {
        let g = greeks(&reference(OptionType::Put)).unwrap();
        assert_relative_eq!(g.delta, -0.220_868_709_057_331, max_relative = 1e-9);
        assert_relative_eq!(g.theta, -0.754_174_496_589_770_5, max_relative = 1e-9);
        assert_relative_eq!(g.rho, -5.042_542_576_653_999, max_relative = 1e-9);
    }

    #[test]
    fn test_textbook_atm_greeks() {
        // S = K = 100, r = 5%, σ = 20%, T = 1
        let p = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
        let g = greeks(&p).unwrap();
        assert_relative_eq!(g.gamma, 0.018_762_017_345_847, max_relative = 1e-9);
        assert_relative_eq!(g.vega, 37.524_034_691_693_79, max_relative = 1e-9);
        assert_relative_eq!(g.theta, -6.414_027_546_438_197, max_relative = 1e-9);
    }

    #[test]
    fn test_single_greek_matches_bundle() {
        for option_type in [OptionType::Call, OptionType::Put] {
            let p = reference(option_type);
            let all = greeks(&p).unwrap();
            for g in Greek::ALL {
                assert_eq!(greek(&p, g).unwrap(), all.get(g), "{} {}", option_type, g);
            }
        }
    }

    #[test]
    fn test_delta_parity() {
        let call = greeks(&reference(OptionType::Call)).unwrap();
        let put = greeks(&reference(OptionType::Put)).unwrap();
        assert_relative_eq!(call.delta - put.delta, 1.0, epsilon = 1e-14);
        assert_eq!(call.gamma, put.gamma);
        assert_eq!(call.vega, put.vega);
    }

    #[test]
    fn test_greek_parsing_and_sets() {
        assert_eq!("Vega".parse::<Greek>().unwrap(), Greek::Vega);
        assert!("vanna".parse::<Greek>().is_err());

        let set = GreekSet::default_charts();
        assert_eq!(set.greeks(), vec![Greek::Delta, Greek::Gamma]);
        assert!(set.contains_greek(Greek::Gamma));
        assert!(!set.contains_greek(Greek::Rho));
        assert_eq!(GreekSet::all().greeks(), Greek::ALL.to_vec());
        assert!(GreekSet::NONE.greeks().is_empty());
        assert_eq!(GreekSet::from(Greek::Theta), GreekSet::THETA);
    }

    #[test]
    fn test_type_dependence_flags() {
        assert!(!Greek::Gamma.depends_on_option_type());
        assert!(!Greek::Vega.depends_on_option_type());
        assert!(Greek::Delta.depends_on_option_type());
        assert!(Greek::Theta.depends_on_option_type());
        assert!(Greek::Rho.depends_on_option_type());
    }
}
