//! Serializable per-customer churn report.

use crate::{
    analysis::ChurnAnalysis,
    churn::CustomerStatus,
    series::first_revenue_period,
    types::{CustomerId, Period},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerChurnRecord {
    pub customer_id:          CustomerId,
    pub periods_observed:     usize,
    /// Absolute index of the first non-zero period.
    pub first_revenue_period: Option<Period>,
    #[serde(flatten)]
    pub status:               CustomerStatus,
    pub absolute_churn:       Option<Period>,
    pub relative_churn:       Option<Period>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChurnReport {
    pub churn_period: u32,
    /// Sorted by customer_id.
    pub customers:    Vec<CustomerChurnRecord>,
}

impl ChurnReport {
    pub fn from_analysis(analysis: &ChurnAnalysis) -> Self {
        let mut customers: Vec<CustomerChurnRecord> = analysis
            .absolute()
            .iter()
            .map(|(customer_id, series)| CustomerChurnRecord {
                customer_id:          customer_id.clone(),
                periods_observed:     series.len(),
                first_revenue_period: first_revenue_period(series),
                status:               analysis
                    .absolute_status_of(customer_id)
                    .unwrap_or(CustomerStatus::NeverStarted),
                absolute_churn:       analysis.absolute_churn_of(customer_id).flatten(),
                relative_churn:       analysis.relative_churn_of(customer_id).flatten(),
            })
            .collect();
        customers.sort_by(|a, b| a.customer_id.cmp(&b.customer_id));

        Self {
            churn_period: analysis.churn_period().get(),
            customers,
        }
    }

    pub fn started_count(&self) -> usize {
        self.customers
            .iter()
            .filter(|c| c.status != CustomerStatus::NeverStarted)
            .count()
    }

    pub fn absolute_churned_count(&self) -> usize {
        self.customers.iter().filter(|c| c.absolute_churn.is_some()).count()
    }

    pub fn relative_churned_count(&self) -> usize {
        self.customers.iter().filter(|c| c.relative_churn.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;

    #[test]
    fn records_are_sorted_and_carry_both_framings() {
        let analysis = ChurnAnalysis::from_reader(
            "zed,0,3,0\namy,1,1,1\n".as_bytes(),
            &AnalysisConfig::default_test(),
        )
        .unwrap();
        let report = ChurnReport::from_analysis(&analysis);

        let ids: Vec<&str> = report.customers.iter().map(|c| c.customer_id.as_str()).collect();
        assert_eq!(ids, vec!["amy", "zed"]);

        let zed = &report.customers[1];
        assert_eq!(zed.first_revenue_period, Some(1));
        assert_eq!(zed.absolute_churn, Some(2));
        assert_eq!(zed.relative_churn, Some(1));
        assert_eq!(zed.status, CustomerStatus::Churned { period: 2 });

        assert_eq!(report.started_count(), 2);
        assert_eq!(report.absolute_churned_count(), 1);
    }

    #[test]
    fn no_churn_serializes_as_null() {
        let analysis =
            ChurnAnalysis::from_reader("bob,0,0\n".as_bytes(), &AnalysisConfig::default_test())
                .unwrap();
        let json = serde_json::to_value(ChurnReport::from_analysis(&analysis)).unwrap();

        let bob = &json["customers"][0];
        assert_eq!(bob["customer_id"], "bob");
        assert!(bob["absolute_churn"].is_null());
        assert!(bob["relative_churn"].is_null());
        assert!(bob["first_revenue_period"].is_null());
        assert_eq!(bob["status"], "never_started");
    }
}
