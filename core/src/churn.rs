//! Churn classification — per-customer churn point detection.
//!
//! A customer churns at period `t` when:
//!   1. they have started (some period <= t had revenue > 0)
//!   2. revenue at `t` is exactly 0
//!   3. every period in the window `t..t + churn_period` exists and is 0
//!
//! The earliest such `t` wins. A window that runs past the end of the data
//! never confirms churn: missing future periods are not evidence.
//! Later reactivation is not tracked.

use crate::types::{ChurnMap, ChurnPeriod, CustomerSeriesMap, Period};
use serde::{Deserialize, Serialize};

// ── Public types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CustomerStatus {
    /// No period with positive revenue.
    NeverStarted,
    /// Started, no confirmed churn within the available data.
    Active,
    Churned { period: Period },
}

impl CustomerStatus {
    pub fn churn_period(self) -> Option<Period> {
        match self {
            CustomerStatus::Churned { period } => Some(period),
            CustomerStatus::NeverStarted | CustomerStatus::Active => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CustomerStatus::NeverStarted => "never_started",
            CustomerStatus::Active => "active",
            CustomerStatus::Churned { .. } => "churned",
        }
    }
}

// ── Classification ───────────────────────────────────────────────────────────

/// Whether every period of the window rooted at `tp` exists and is zero.
fn window_is_zero(series: &[f64], tp: Period, churn_period: ChurnPeriod) -> bool {
    let end = tp + churn_period.window();
    if end > series.len() {
        return false;
    }
    series[tp..end].iter().all(|revenue| *revenue == 0.0)
}

/// Full three-state classification of one series.
pub fn classify_status(series: &[f64], churn_period: ChurnPeriod) -> CustomerStatus {
    let mut started = false;

    for (tp, &revenue) in series.iter().enumerate() {
        if revenue > 0.0 {
            started = true;
        }
        if started && revenue == 0.0 && window_is_zero(series, tp, churn_period) {
            return CustomerStatus::Churned { period: tp };
        }
    }

    if started {
        CustomerStatus::Active
    } else {
        CustomerStatus::NeverStarted
    }
}

/// First confirmed churn period of one series, or `None`.
pub fn churn_period_of(series: &[f64], churn_period: ChurnPeriod) -> Option<Period> {
    classify_status(series, churn_period).churn_period()
}

/// Classify every customer independently. The result has the same key set.
pub fn churn_map(series_map: &CustomerSeriesMap, churn_period: ChurnPeriod) -> ChurnMap {
    let churn: ChurnMap = series_map
        .iter()
        .map(|(customer, series)| (customer.clone(), churn_period_of(series, churn_period)))
        .collect();

    log::debug!(
        "Classified {} customers at churn period {churn_period}: {} churned",
        churn.len(),
        churn.values().filter(|tp| tp.is_some()).count()
    );
    churn
}
