//! Analysis facade — loads a revenue table once and exposes both churn framings.
//!
//! All four maps are computed at construction and never mutated afterwards.

use crate::{
    churn::{churn_map, classify_status, CustomerStatus},
    config::AnalysisConfig,
    error::AnalysisResult,
    loader::{load_series_from_path, load_series_from_reader, LoadedSeries},
    series::relative_series,
    types::{ChurnMap, ChurnPeriod, CustomerSeriesMap, Period, RevenueSeries},
};
use std::io::Read;

#[derive(Debug, Clone)]
pub struct ChurnAnalysis {
    churn_period:   ChurnPeriod,
    absolute:       CustomerSeriesMap,
    relative:       CustomerSeriesMap,
    absolute_churn: ChurnMap,
    relative_churn: ChurnMap,
}

impl ChurnAnalysis {
    /// Load `path` with default table settings.
    pub fn from_path(path: &str, churn_period: ChurnPeriod) -> AnalysisResult<Self> {
        let loaded = load_series_from_path(path, &AnalysisConfig::default())?;
        Ok(Self::from_series(loaded, churn_period))
    }

    pub fn from_path_with_config(path: &str, config: &AnalysisConfig) -> AnalysisResult<Self> {
        let churn_period = config.churn_period()?;
        let loaded = load_series_from_path(path, config)?;
        Ok(Self::from_series(loaded, churn_period))
    }

    pub fn from_reader<R: Read>(reader: R, config: &AnalysisConfig) -> AnalysisResult<Self> {
        let churn_period = config.churn_period()?;
        let loaded = load_series_from_reader(reader, config)?;
        Ok(Self::from_series(loaded, churn_period))
    }

    /// Classify an in-memory absolute map; the relative framing is derived here.
    pub fn from_absolute(absolute: CustomerSeriesMap, churn_period: ChurnPeriod) -> Self {
        let relative = absolute
            .iter()
            .map(|(customer, series)| (customer.clone(), relative_series(series)))
            .collect();
        Self::from_series(LoadedSeries { absolute, relative }, churn_period)
    }

    fn from_series(loaded: LoadedSeries, churn_period: ChurnPeriod) -> Self {
        let absolute_churn = churn_map(&loaded.absolute, churn_period);
        let relative_churn = churn_map(&loaded.relative, churn_period);

        log::info!(
            "Churn analysis at period {churn_period}: {} customers, {} churned (absolute), {} churned (relative)",
            loaded.absolute.len(),
            count_churned(&absolute_churn),
            count_churned(&relative_churn),
        );

        Self {
            churn_period,
            absolute: loaded.absolute,
            relative: loaded.relative,
            absolute_churn,
            relative_churn,
        }
    }

    pub fn churn_period(&self) -> ChurnPeriod {
        self.churn_period
    }

    pub fn absolute(&self) -> &CustomerSeriesMap {
        &self.absolute
    }

    pub fn relative(&self) -> &CustomerSeriesMap {
        &self.relative
    }

    pub fn absolute_churn(&self) -> &ChurnMap {
        &self.absolute_churn
    }

    pub fn relative_churn(&self) -> &ChurnMap {
        &self.relative_churn
    }

    pub fn customer_count(&self) -> usize {
        self.absolute.len()
    }

    pub fn customers(&self) -> impl Iterator<Item = &str> {
        self.absolute.keys().map(String::as_str)
    }

    pub fn absolute_series_of(&self, customer: &str) -> Option<&RevenueSeries> {
        self.absolute.get(customer)
    }

    pub fn relative_series_of(&self, customer: &str) -> Option<&RevenueSeries> {
        self.relative.get(customer)
    }

    /// Outer `None`: unknown customer. Inner `None`: no churn detected.
    pub fn absolute_churn_of(&self, customer: &str) -> Option<Option<Period>> {
        self.absolute_churn.get(customer).copied()
    }

    /// Outer `None`: unknown customer. Inner `None`: no churn detected.
    pub fn relative_churn_of(&self, customer: &str) -> Option<Option<Period>> {
        self.relative_churn.get(customer).copied()
    }

    pub fn absolute_status_of(&self, customer: &str) -> Option<CustomerStatus> {
        self.absolute
            .get(customer)
            .map(|series| classify_status(series, self.churn_period))
    }

    pub fn relative_status_of(&self, customer: &str) -> Option<CustomerStatus> {
        self.relative
            .get(customer)
            .map(|series| classify_status(series, self.churn_period))
    }
}

fn count_churned(churn: &ChurnMap) -> usize {
    churn.values().filter(|tp| tp.is_some()).count()
}
