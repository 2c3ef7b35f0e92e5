//! churn-core: per-customer churn detection over period revenue tables.
//!
//! Pipeline:
//!   1. loader   — read the delimited table, coerce cells (series)
//!   2. series   — derive the relative framing per customer
//!   3. churn    — classify every customer under the churn period
//!   4. analysis — own the four read-only result maps
//!   5. report   — serializable view for tooling

pub mod analysis;
pub mod churn;
pub mod config;
pub mod error;
pub mod loader;
pub mod report;
pub mod series;
pub mod types;

pub use analysis::ChurnAnalysis;
pub use churn::{churn_map, churn_period_of, classify_status, CustomerStatus};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, AnalysisResult};
pub use report::{ChurnReport, CustomerChurnRecord};
pub use series::{coerce_revenue, relative_series};
pub use types::{ChurnMap, ChurnPeriod, CustomerId, CustomerSeriesMap, Period, RevenueSeries};
