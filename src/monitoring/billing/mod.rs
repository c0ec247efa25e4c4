//! Account billing monitoring.

pub mod metrics;

use tracing::debug;

use crate::alarms::CreatedAlarm;
use crate::error::Result;
use crate::metrics::MetricHandle;
use crate::monitoring::{BaseMonitoring, BaseMonitoringProps, Monitoring};
use crate::scope::MonitoringScope;
use crate::dashboard::NamingStrategy;
use crate::widgets::{GraphView, WidgetHeight, WidgetSpec, WidgetWidth, YAxisSpec};

pub use metrics::{BillingMetricFactory, BILLING_CURRENCY, BILLING_REGION};

/// Options for [`BillingMonitoring`]
#[derive(Clone, Default)]
pub struct BillingMonitoringProps {
    pub base: BaseMonitoringProps,
}

/// Monitors the account's estimated charges
///
/// Falls back to the scope's account id for its title. Billing has no alarm
/// kinds; `created_alarms()` is always empty.
pub struct BillingMonitoring {
    base: BaseMonitoring,
    cost_by_service_metric: MetricHandle,
    total_cost_metric: MetricHandle,
}

impl BillingMonitoring {
    pub fn new(scope: &MonitoringScope, props: BillingMonitoringProps) -> Result<Self> {
        let naming = NamingStrategy::new(scope.account_id())
            .with_human_readable_override(props.base.human_readable_name.clone())
            .with_alarm_friendly_override(props.base.alarm_friendly_name.clone());
        let base = BaseMonitoring::new(&naming)?;

        let metric_factory = BillingMetricFactory::new();
        let unit = Self {
            base,
            cost_by_service_metric: metric_factory.metric_search_top_cost_by_service_in_usd(),
            total_cost_metric: metric_factory.metric_total_cost_in_usd(),
        };

        unit.base.consume_created_alarms(&props.base);
        debug!(title = %unit.base.title(), "built billing monitoring");
        Ok(unit)
    }

    /// Resolved title
    pub fn title(&self) -> &str {
        self.base.title()
    }

    fn title_widget(&self) -> WidgetSpec {
        self.base.header_widget("AWS Account Billing", None)
    }

    fn charges_by_service_widget(&self, width: WidgetWidth, height: WidgetHeight) -> WidgetSpec {
        WidgetSpec::graph(
            format!("Most Expensive Services ({BILLING_CURRENCY})"),
            width,
            height,
            vec![self.cost_by_service_metric.clone()],
            YAxisSpec::currency_usd_from_zero(),
        )
        .with_view(GraphView::Bar)
        // billing is global but resides in a single region
        .with_region(BILLING_REGION)
    }

    fn total_charges_widget(&self, width: WidgetWidth, height: WidgetHeight) -> WidgetSpec {
        WidgetSpec::single_value(
            format!("Total Cost ({BILLING_CURRENCY})"),
            width,
            height,
            vec![self.total_cost_metric.clone()],
        )
        // billing is global but resides in a single region
        .with_region(BILLING_REGION)
    }
}

impl Monitoring for BillingMonitoring {
    fn summary_widgets(&self) -> Vec<WidgetSpec> {
        vec![
            self.title_widget(),
            self.total_charges_widget(WidgetWidth::Full, WidgetHeight::Summary),
        ]
    }

    fn widgets(&self) -> Vec<WidgetSpec> {
        vec![
            self.title_widget(),
            self.charges_by_service_widget(WidgetWidth::ThreeQuarters, WidgetHeight::Graph),
            self.total_charges_widget(WidgetWidth::Quarter, WidgetHeight::Graph),
        ]
    }

    fn created_alarms(&self) -> &[CreatedAlarm] {
        self.base.created_alarms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> MonitoringScope {
        MonitoringScope::new("123456789012", "eu-west-1").unwrap()
    }

    #[test]
    fn test_title_falls_back_to_account_id() {
        let unit = BillingMonitoring::new(&scope(), BillingMonitoringProps::default()).unwrap();
        assert_eq!(unit.title(), "123456789012");
    }

    #[test]
    fn test_title_override() {
        let props = BillingMonitoringProps {
            base: BaseMonitoringProps {
                human_readable_name: Some("Production Account".to_string()),
                ..Default::default()
            },
        };
        let unit = BillingMonitoring::new(&scope(), props).unwrap();
        assert_eq!(unit.title(), "Production Account");
    }

    #[test]
    fn test_widget_counts_and_region_pinning() {
        let unit = BillingMonitoring::new(&scope(), BillingMonitoringProps::default()).unwrap();

        let summary = unit.summary_widgets();
        assert_eq!(summary.len(), 2);
        assert!(summary[0].is_header());
        assert_eq!(summary[1].region(), Some(BILLING_REGION));

        let detail = unit.widgets();
        assert_eq!(detail.len(), 3);
        assert!(detail[0].is_header());
        // pinned to the billing home region even though the scope deploys elsewhere
        assert_eq!(detail[1].region(), Some(BILLING_REGION));
        assert_eq!(detail[2].region(), Some(BILLING_REGION));

        assert!(unit.created_alarms().is_empty());
    }
}
