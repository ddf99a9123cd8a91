//! # bsm-greeks: Closed-Form European Option Analytics
//!
//! Black-Scholes-Merton theoretical prices, the five standard Greeks, and
//! sensitivity curves of either as a function of the underlying price.
//!
//! ## Key Features
//!
//! - **Validated Inputs**: `PricingParameters` can only hold finite, in-domain values
//! - **Pricing Kernel**: call/put prices and the d1/d2 intermediates
//! - **Sensitivity Kernel**: Delta, Gamma, Vega, Theta, Rho in closed form
//! - **Curve Sweeps**: price and Greek curves over an underlying range, parallel with Rayon
//! - **Explicit Errors**: invalid or degenerate inputs are rejected, never turned into NaN
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_greeks::analytics::{greeks, price, OptionType, PricingParameters};
//! use bsm_greeks::sweep::{sweep, SweepConfig, SweepTarget};
//!
//! // S = 42, K = 40, T = 0.5y, r = 10%, σ = 20%
//! let params = PricingParameters::new(42.0, 40.0, 0.5, 0.1, 0.2, OptionType::Call)
//!     .expect("Valid parameters");
//!
//! let call = price(&params).expect("Finite price");
//! assert_eq!(format!("{:.2}", call), "4.76");
//!
//! let g = greeks(&params).expect("Finite greeks");
//! assert!(g.delta > 0.0 && g.delta < 1.0);
//!
//! let curve = sweep(&params, &SweepConfig::default(), SweepTarget::Price).expect("Valid sweep");
//! assert_eq!(curve.len(), 100);
//! ```
//!
//! ## Mathematical Foundation
//!
//! ```text
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! C  = S Φ(d₁) - K e^(-rT) Φ(d₂)
//! P  = K e^(-rT) Φ(-d₂) - S Φ(-d₁)
//! ```

// Module declarations
pub mod error;
pub mod math_utils;
pub mod analytics;
pub mod sweep;
pub mod boundary;
pub mod output;

// Re-export commonly used types for convenience
pub use analytics::{greeks, price, Greek, GreekSet, GreeksResult, OptionType, PricingParameters};
pub use error::{PricingError, PricingResult};
pub use sweep::{CurveSeries, SweepConfig, SweepTarget};
