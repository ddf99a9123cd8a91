// src/sweep/sweep_engine.rs
use super::curve::{CurvePoint, CurveSeries, PriceCurves};
use crate::analytics::{bs_analytic, greeks, Greek, GreekSet, OptionType, PricingParameters};
use crate::error::{validation::*, PricingError, PricingResult};
use rayon::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    pub low: f64,
    pub high: f64,
    pub samples: usize,
    pub parallel: bool,
}

impl SweepConfig {
    pub fn new(low: f64, high: f64, samples: usize) -> Self {
        SweepConfig {
            low,
            high,
            samples,
            ..Default::default()
        }
    }

    /// Range of ±`width_fraction` around `spot`, e.g. 0.5 gives [0.5·S, 1.5·S]
    pub fn around(spot: f64, width_fraction: f64, samples: usize) -> PricingResult<Self> {
        validate_positive("spot", spot)?;
        if !(width_fraction > 0.0 && width_fraction < 1.0) {
            return Err(PricingError::InvalidConfiguration {
                field: "width_fraction".to_string(),
                reason: format!("must be in (0, 1), got {}", width_fraction),
            });
        }
        let cfg = SweepConfig::new(spot * (1.0 - width_fraction), spot * (1.0 + width_fraction), samples);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate the sweep configuration
    pub fn validate(&self) -> PricingResult<()> {
        validate_range_order(self.low, self.high)?;
        validate_sample_count(self.samples)?;
        Ok(())
    }

    /// Evenly spaced underlying prices from `low` to `high` inclusive
    pub fn grid(&self) -> PricingResult<Vec<f64>> {
        self.validate()?;
        let last = self.samples - 1;
        let step = (self.high - self.low) / last as f64;
        Ok((0..self.samples)
            .map(|i| if i == last { self.high } else { self.low + step * i as f64 })
            .collect())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            low: 20.0,
            high: 60.0,
            samples: 100,
            parallel: true,
        }
    }
}

/// What a sweep evaluates at each underlying price
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepTarget {
    /// Price of the option type carried by the parameters
    Price,
    CallPrice,
    PutPrice,
    /// A Greek for the option type carried by the parameters
    Greek(Greek),
}

impl SweepTarget {
    fn label(&self, option_type: OptionType) -> String {
        match self {
            SweepTarget::Price => format!("{}_price", option_type),
            SweepTarget::CallPrice => "call_price".to_string(),
            SweepTarget::PutPrice => "put_price".to_string(),
            SweepTarget::Greek(g) => g.name().to_string(),
        }
    }

    fn option_type(&self, params: &PricingParameters) -> OptionType {
        match self {
            SweepTarget::CallPrice => OptionType::Call,
            SweepTarget::PutPrice => OptionType::Put,
            _ => params.option_type(),
        }
    }

    fn evaluate(&self, params: &PricingParameters) -> PricingResult<f64> {
        match self {
            SweepTarget::Price => bs_analytic::price(params),
            SweepTarget::CallPrice => bs_analytic::call_price(params),
            SweepTarget::PutPrice => bs_analytic::put_price(params),
            SweepTarget::Greek(g) => greeks::greek(params, *g),
        }
    }
}

// Evaluate `f` at every grid point with all other parameters held fixed.
// Samples are independent, so rayon may finish them in any order; callers
// get them back sorted through `CurveSeries::new`.
fn evaluate_grid<T, F>(params: &PricingParameters, cfg: &SweepConfig, f: F) -> PricingResult<Vec<(f64, T)>>
where
    T: Send,
    F: Fn(&PricingParameters) -> PricingResult<T> + Sync,
{
    let grid = cfg.grid()?;
    let eval_one = |s: f64| -> PricingResult<(f64, T)> {
        let shifted = params.with_underlying(s)?;
        Ok((s, f(&shifted)?))
    };

    if cfg.parallel {
        grid.into_par_iter().map(eval_one).collect()
    } else {
        grid.into_iter().map(eval_one).collect()
    }
}

/// Sweep the underlying price over `cfg` and evaluate `target` at each sample
///
/// # Returns
/// `cfg.samples` points in strictly ascending underlying price, the first at
/// `cfg.low` and the last at `cfg.high`.
///
/// # Errors
/// `InvalidConfiguration` for a bad range or sample count; any kernel error
/// raised at a sample aborts the whole sweep.
pub fn sweep(params: &PricingParameters, cfg: &SweepConfig, target: SweepTarget) -> PricingResult<CurveSeries> {
    tracing::debug!(
        low = cfg.low,
        high = cfg.high,
        samples = cfg.samples,
        parallel = cfg.parallel,
        ?target,
        "sweeping underlying price"
    );

    let values = evaluate_grid(params, cfg, |p| target.evaluate(p))?;
    let points = values
        .into_iter()
        .map(|(underlying, value)| CurvePoint { underlying, value })
        .collect();

    Ok(CurveSeries::new(
        target.label(params.option_type()),
        target.option_type(params),
        points,
    ))
}

/// Call and put price curves from one pass over the grid
pub fn price_curves(params: &PricingParameters, cfg: &SweepConfig) -> PricingResult<PriceCurves> {
    tracing::debug!(low = cfg.low, high = cfg.high, samples = cfg.samples, "building price curves");

    let pairs = evaluate_grid(params, cfg, bs_analytic::price_pair)?;
    let (call_points, put_points): (Vec<_>, Vec<_>) = pairs
        .into_iter()
        .map(|(underlying, pair)| {
            (
                CurvePoint { underlying, value: pair.call },
                CurvePoint { underlying, value: pair.put },
            )
        })
        .unzip();

    Ok(PriceCurves {
        call: CurveSeries::new(SweepTarget::CallPrice.label(OptionType::Call), OptionType::Call, call_points),
        put: CurveSeries::new(SweepTarget::PutPrice.label(OptionType::Put), OptionType::Put, put_points),
    })
}

/// One curve per selected Greek, in canonical Greek order
pub fn greek_curves(params: &PricingParameters, cfg: &SweepConfig, selection: GreekSet) -> PricingResult<Vec<CurveSeries>> {
    selection
        .greeks()
        .into_iter()
        .map(|g| sweep(params, cfg, SweepTarget::Greek(g)))
        .collect()
}
