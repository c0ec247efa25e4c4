//! RDS database cluster monitoring.

pub mod metrics;

use tracing::debug;

use crate::alarms::{Annotation, CreatedAlarm, ThresholdSet, UsageAlarmFactory};
use crate::dashboard::NamingStrategy;
use crate::error::Result;
use crate::metrics::MetricHandle;
use crate::monitoring::{BaseMonitoring, BaseMonitoringProps, Monitoring};
use crate::scope::MonitoringScope;
use crate::widgets::{WidgetHeight, WidgetSpec, WidgetWidth, YAxisSpec};

pub use metrics::{RdsClusterMetricFactory, RdsClusterMetricFactoryProps};

/// Options for [`RdsClusterMonitoring`]
#[derive(Clone, Default)]
pub struct RdsClusterMonitoringProps {
    pub cluster_identifier: String,
    /// Opt-in disk usage alarms, keyed by disambiguator
    pub add_disk_space_usage_alarm: ThresholdSet,
    /// Opt-in CPU usage alarms, keyed by disambiguator
    pub add_cpu_usage_alarm: ThresholdSet,
    pub base: BaseMonitoringProps,
}

/// Monitors one RDS database cluster
///
/// Falls back to the cluster identifier for its title. Supports the
/// disk-usage and CPU-usage alarm kinds; their annotations are drawn on the
/// usage widget of both rendering tiers.
pub struct RdsClusterMonitoring {
    base: BaseMonitoring,
    url: String,
    usage_annotations: Vec<Annotation>,
    connections_metric: MetricHandle,
    disk_space_usage_metric: MetricHandle,
    cpu_usage_metric: MetricHandle,
    select_latency_metric: MetricHandle,
    insert_latency_metric: MetricHandle,
    update_latency_metric: MetricHandle,
    delete_latency_metric: MetricHandle,
    commit_latency_metric: MetricHandle,
}

impl RdsClusterMonitoring {
    pub fn new(scope: &MonitoringScope, props: RdsClusterMonitoringProps) -> Result<Self> {
        let metric_factory = RdsClusterMetricFactory::new(RdsClusterMetricFactoryProps {
            cluster_identifier: props.cluster_identifier.clone(),
        });

        let naming = NamingStrategy::new(metric_factory.cluster_identifier())
            .with_human_readable_override(props.base.human_readable_name.clone())
            .with_alarm_friendly_override(props.base.alarm_friendly_name.clone());
        let base = BaseMonitoring::new(&naming)?;

        let url = scope
            .console_url_factory()
            .rds_cluster_url(metric_factory.cluster_identifier());
        let mut usage_alarm_factory =
            UsageAlarmFactory::new(scope.alarm_factory(base.alarm_friendly_name()));

        let mut unit = Self {
            base,
            url,
            usage_annotations: Vec::new(),
            connections_metric: metric_factory.metric_total_connection_count(),
            disk_space_usage_metric: metric_factory.metric_disk_space_usage_in_percent(),
            cpu_usage_metric: metric_factory.metric_average_cpu_usage_in_percent(),
            select_latency_metric: metric_factory.metric_select_latency_p90_in_millis(),
            insert_latency_metric: metric_factory.metric_insert_latency_p90_in_millis(),
            update_latency_metric: metric_factory.metric_update_latency_p90_in_millis(),
            delete_latency_metric: metric_factory.metric_delete_latency_p90_in_millis(),
            commit_latency_metric: metric_factory.metric_commit_latency_p90_in_millis(),
        };

        for (disambiguator, threshold) in props.add_disk_space_usage_alarm.iter() {
            let created = usage_alarm_factory.add_max_disk_usage_percent_alarm(
                &unit.disk_space_usage_metric,
                threshold,
                disambiguator,
            )?;
            unit.usage_annotations.push(created.annotation.clone());
            unit.base.add_alarm(created);
        }

        for (disambiguator, threshold) in props.add_cpu_usage_alarm.iter() {
            let created = usage_alarm_factory.add_max_cpu_usage_percent_alarm(
                &unit.cpu_usage_metric,
                threshold,
                disambiguator,
            )?;
            unit.usage_annotations.push(created.annotation.clone());
            unit.base.add_alarm(created);
        }

        unit.base.consume_created_alarms(&props.base);
        debug!(
            title = %unit.base.title(),
            alarms = unit.base.created_alarms().len(),
            "built RDS cluster monitoring"
        );
        Ok(unit)
    }

    /// Resolved title
    pub fn title(&self) -> &str {
        self.base.title()
    }

    /// Console deep link to the cluster
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Annotations drawn on the usage widget, in alarm creation order
    pub fn usage_annotations(&self) -> &[Annotation] {
        &self.usage_annotations
    }

    fn title_widget(&self) -> WidgetSpec {
        self.base.header_widget("RDS Cluster", Some(&self.url))
    }

    fn cpu_and_disk_usage_widget(&self, width: WidgetWidth, height: WidgetHeight) -> WidgetSpec {
        WidgetSpec::graph(
            "CPU/Disk Usage",
            width,
            height,
            vec![
                self.cpu_usage_metric.clone(),
                self.disk_space_usage_metric.clone(),
            ],
            YAxisSpec::percentage_zero_to_hundred(),
        )
        .with_annotations(self.usage_annotations.clone())
    }

    fn connections_widget(&self, width: WidgetWidth, height: WidgetHeight) -> WidgetSpec {
        WidgetSpec::graph(
            "Connections",
            width,
            height,
            vec![self.connections_metric.clone()],
            YAxisSpec::count_from_zero(),
        )
    }

    fn latency_widget(&self, width: WidgetWidth, height: WidgetHeight) -> WidgetSpec {
        WidgetSpec::graph(
            "Query Duration",
            width,
            height,
            vec![
                self.select_latency_metric.clone(),
                self.insert_latency_metric.clone(),
                self.update_latency_metric.clone(),
                self.delete_latency_metric.clone(),
                self.commit_latency_metric.clone(),
            ],
            YAxisSpec::time_millis_from_zero(),
        )
    }
}

impl Monitoring for RdsClusterMonitoring {
    fn summary_widgets(&self) -> Vec<WidgetSpec> {
        vec![
            self.title_widget(),
            self.cpu_and_disk_usage_widget(WidgetWidth::Third, WidgetHeight::Summary),
            self.connections_widget(WidgetWidth::Third, WidgetHeight::Summary),
            self.latency_widget(WidgetWidth::Third, WidgetHeight::Summary),
        ]
    }

    fn widgets(&self) -> Vec<WidgetSpec> {
        vec![
            self.title_widget(),
            self.cpu_and_disk_usage_widget(WidgetWidth::Quarter, WidgetHeight::Graph),
            self.connections_widget(WidgetWidth::Quarter, WidgetHeight::Graph),
            self.latency_widget(WidgetWidth::Half, WidgetHeight::Graph),
        ]
    }

    fn created_alarms(&self) -> &[CreatedAlarm] {
        self.base.created_alarms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarms::UsageThreshold;

    fn scope() -> MonitoringScope {
        MonitoringScope::new("123456789012", "eu-west-1").unwrap()
    }

    fn props(cluster: &str) -> RdsClusterMonitoringProps {
        RdsClusterMonitoringProps {
            cluster_identifier: cluster.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_title_falls_back_to_cluster_identifier() {
        let unit = RdsClusterMonitoring::new(&scope(), props("orders-db")).unwrap();
        assert_eq!(unit.title(), "orders-db");
        assert!(unit.url().contains("orders-db"));
    }

    #[test]
    fn test_empty_cluster_identifier_rejected() {
        assert!(RdsClusterMonitoring::new(&scope(), props("")).is_err());
    }

    #[test]
    fn test_no_thresholds_means_no_alarms() {
        let unit = RdsClusterMonitoring::new(&scope(), props("orders-db")).unwrap();
        assert!(unit.created_alarms().is_empty());
        assert!(unit.usage_annotations().is_empty());
    }

    #[test]
    fn test_alarm_order_follows_kind_then_insertion() {
        let mut cpu = ThresholdSet::new();
        cpu.insert("Warning", UsageThreshold::new(70.0)).unwrap();
        cpu.insert("Critical", UsageThreshold::new(90.0)).unwrap();
        let disk = ThresholdSet::single("Warning", UsageThreshold::new(80.0));

        let unit = RdsClusterMonitoring::new(
            &scope(),
            RdsClusterMonitoringProps {
                cluster_identifier: "orders-db".to_string(),
                add_disk_space_usage_alarm: disk,
                add_cpu_usage_alarm: cpu,
                ..Default::default()
            },
        )
        .unwrap();

        // disk alarms register before CPU alarms; each kind keeps insertion order
        let names: Vec<&str> = unit
            .created_alarms()
            .iter()
            .map(|a| a.alarm_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "orders-db-Disk-Usage-Warning",
                "orders-db-CPU-Usage-Warning",
                "orders-db-CPU-Usage-Critical",
            ]
        );
        assert_eq!(unit.usage_annotations().len(), 3);
        assert_eq!(unit.usage_annotations()[0].value, 80.0);
    }

    #[test]
    fn test_widget_layout_tiers() {
        let unit = RdsClusterMonitoring::new(&scope(), props("orders-db")).unwrap();

        let summary = unit.summary_widgets();
        assert_eq!(summary.len(), 4);
        assert!(summary[0].is_header());
        for widget in &summary[1..] {
            assert_eq!(widget.width, WidgetWidth::Third);
            assert_eq!(widget.height, WidgetHeight::Summary);
        }

        let detail = unit.widgets();
        assert_eq!(detail.len(), 4);
        assert!(detail[0].is_header());
        assert_eq!(detail[1].width, WidgetWidth::Quarter);
        assert_eq!(detail[2].width, WidgetWidth::Quarter);
        assert_eq!(detail[3].width, WidgetWidth::Half);
    }

    #[test]
    fn test_annotations_drawn_on_usage_widget() {
        let unit = RdsClusterMonitoring::new(
            &scope(),
            RdsClusterMonitoringProps {
                cluster_identifier: "orders-db".to_string(),
                add_cpu_usage_alarm: ThresholdSet::single("Warning", UsageThreshold::new(80.0)),
                ..Default::default()
            },
        )
        .unwrap();

        let detail = unit.widgets();
        let usage = &detail[1];
        assert_eq!(usage.title(), "CPU/Disk Usage");
        assert_eq!(usage.annotations().len(), 1);
        assert_eq!(usage.annotations()[0].value, 80.0);
        // other widgets carry no usage annotations
        assert!(detail[2].annotations().is_empty());
        assert!(detail[3].annotations().is_empty());
    }
}
