// src/sweep/curve.rs
use crate::analytics::OptionType;
use serde::{Deserialize, Serialize};

/// One sample of a sensitivity curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub underlying: f64,
    pub value: f64,
}

/// Ordered (underlying price, value) pairs, ascending in underlying price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSeries {
    label: String,
    option_type: OptionType,
    points: Vec<CurvePoint>,
}

impl CurveSeries {
    /// Build a series, sorting the points by underlying price.
    pub fn new(label: impl Into<String>, option_type: OptionType, mut points: Vec<CurvePoint>) -> Self {
        points.sort_by(|a, b| a.underlying.total_cmp(&b.underlying));
        Self {
            label: label.into(),
            option_type,
            points,
        }
    }

    /// e.g. "call_price", "delta"
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurvePoint> {
        self.points.iter()
    }

    pub fn underlyings(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.underlying).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Sample whose underlying price is closest to `underlying`
    pub fn nearest(&self, underlying: f64) -> Option<&CurvePoint> {
        self.points.iter().min_by(|a, b| {
            (a.underlying - underlying)
                .abs()
                .total_cmp(&(b.underlying - underlying).abs())
        })
    }
}

impl<'a> IntoIterator for &'a CurveSeries {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Call and put price curves over the same grid, plotted together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCurves {
    pub call: CurveSeries,
    pub put: CurveSeries,
}
