// src/sweep/mod.rs
//! Sensitivity curves: price and Greeks as functions of the underlying price
//!
//! Every other input is held fixed while the underlying price is swept over
//! an evenly spaced grid. Each sample is an independent kernel call, so the
//! grid is evaluated on the rayon pool unless [`SweepConfig::parallel`] is off.

pub mod curve;
pub mod sweep_engine;

pub use curve::{CurvePoint, CurveSeries, PriceCurves};
pub use sweep_engine::{greek_curves, price_curves, sweep, SweepConfig, SweepTarget};
