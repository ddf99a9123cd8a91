// src/analytics/mod.rs
pub mod bs_analytic;
pub mod greeks;
pub mod params;

pub use bs_analytic::{call_price, intermediate_terms, intrinsic_value, price, price_pair, put_price, PricePair};
pub use greeks::{greek, greeks, Greek, GreekSet, GreeksResult};
pub use params::{IntermediateTerms, OptionType, PricingParameters};
