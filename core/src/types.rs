//! Shared primitive types used across the whole analysis.

use crate::error::{AnalysisError, AnalysisResult};
use std::collections::HashMap;

/// A time period index. One period = one revenue column (e.g. a month).
pub type Period = usize;

/// A stable identifier for a customer, taken verbatim from column 0.
pub type CustomerId = String;

/// Revenue per period, index 0 = earliest period in the series's own framing.
pub type RevenueSeries = Vec<f64>;

/// Customer → revenue series. Iteration order is unspecified.
pub type CustomerSeriesMap = HashMap<CustomerId, RevenueSeries>;

/// Customer → first confirmed churn period, `None` when no churn was detected.
pub type ChurnMap = HashMap<CustomerId, Option<Period>>;

/// Number of consecutive zero-revenue periods required to confirm churn.
/// Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChurnPeriod(u32);

impl ChurnPeriod {
    pub fn new(value: u32) -> AnalysisResult<Self> {
        if value == 0 {
            return Err(AnalysisError::InvalidChurnPeriod { value });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Window length as an index offset.
    pub fn window(self) -> usize {
        self.0 as usize
    }
}

impl Default for ChurnPeriod {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u32> for ChurnPeriod {
    type Error = AnalysisError;

    fn try_from(value: u32) -> AnalysisResult<Self> {
        Self::new(value)
    }
}

impl std::fmt::Display for ChurnPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
