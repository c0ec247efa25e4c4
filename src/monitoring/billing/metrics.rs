//! Billing metric factory.

use crate::metrics::{MetricHandle, Statistic};

/// Region the billing metrics live in; billing is global but its series
/// reside in this single region
pub const BILLING_REGION: &str = "us-east-1";

/// Currency all billing metrics are reported in
pub const BILLING_CURRENCY: &str = "USD";

/// Billing metrics are reported roughly every 4 hours; one day keeps the
/// series smooth
const BILLING_PERIOD_SECONDS: u64 = 86_400;

/// Produces the account-wide cost metric handles
#[derive(Debug, Clone, Default)]
pub struct BillingMetricFactory;

impl BillingMetricFactory {
    pub fn new() -> Self {
        Self
    }

    /// Most expensive services, one series per service
    pub fn metric_search_top_cost_by_service_in_usd(&self) -> MetricHandle {
        MetricHandle::expression(
            "SEARCH('{AWS/Billing,Currency,ServiceName} MetricName=\"EstimatedCharges\"', \
             'Maximum', 86400)",
            "Cost by service",
        )
        .with_period_seconds(BILLING_PERIOD_SECONDS)
        .with_region(BILLING_REGION)
    }

    /// Total estimated charges across the account
    pub fn metric_total_cost_in_usd(&self) -> MetricHandle {
        MetricHandle::metric("AWS/Billing", "EstimatedCharges")
            .with_label("Total cost")
            .with_statistic(Statistic::Maximum)
            .with_period_seconds(BILLING_PERIOD_SECONDS)
            .with_dimension("Currency", BILLING_CURRENCY)
            .with_region(BILLING_REGION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_metrics_pinned_to_home_region() {
        let factory = BillingMetricFactory::new();
        assert_eq!(
            factory
                .metric_search_top_cost_by_service_in_usd()
                .region(),
            Some(BILLING_REGION)
        );
        assert_eq!(
            factory.metric_total_cost_in_usd().region(),
            Some(BILLING_REGION)
        );
    }
}
