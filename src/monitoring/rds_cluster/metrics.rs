//! RDS cluster metric factory.

use crate::metrics::{MetricHandle, Statistic};

const RDS_NAMESPACE: &str = "AWS/RDS";
const CLUSTER_DIMENSION: &str = "DBClusterIdentifier";

/// Inputs for [`RdsClusterMetricFactory`]
#[derive(Debug, Clone)]
pub struct RdsClusterMetricFactoryProps {
    pub cluster_identifier: String,
}

/// Produces the per-cluster metric handles
#[derive(Debug, Clone)]
pub struct RdsClusterMetricFactory {
    cluster_identifier: String,
}

impl RdsClusterMetricFactory {
    pub fn new(props: RdsClusterMetricFactoryProps) -> Self {
        Self {
            cluster_identifier: props.cluster_identifier,
        }
    }

    pub fn cluster_identifier(&self) -> &str {
        &self.cluster_identifier
    }

    pub fn metric_total_connection_count(&self) -> MetricHandle {
        self.metric("DatabaseConnections", "Connections", Statistic::Sum)
    }

    pub fn metric_disk_space_usage_in_percent(&self) -> MetricHandle {
        // Math expression over the cluster's used/available volume bytes;
        // the derivation stays behind the handle.
        MetricHandle::expression(
            "100 * (volume_used / (volume_used + volume_available))",
            "Disk Usage",
        )
    }

    pub fn metric_average_cpu_usage_in_percent(&self) -> MetricHandle {
        self.metric("CPUUtilization", "CPU Usage", Statistic::Average)
    }

    pub fn metric_select_latency_p90_in_millis(&self) -> MetricHandle {
        self.metric("SelectLatency", "Select", Statistic::P90)
    }

    pub fn metric_insert_latency_p90_in_millis(&self) -> MetricHandle {
        self.metric("InsertLatency", "Insert", Statistic::P90)
    }

    pub fn metric_update_latency_p90_in_millis(&self) -> MetricHandle {
        self.metric("UpdateLatency", "Update", Statistic::P90)
    }

    pub fn metric_delete_latency_p90_in_millis(&self) -> MetricHandle {
        self.metric("DeleteLatency", "Delete", Statistic::P90)
    }

    pub fn metric_commit_latency_p90_in_millis(&self) -> MetricHandle {
        self.metric("CommitLatency", "Commit", Statistic::P90)
    }

    fn metric(&self, metric_name: &str, label: &str, statistic: Statistic) -> MetricHandle {
        MetricHandle::metric(RDS_NAMESPACE, metric_name)
            .with_label(label)
            .with_statistic(statistic)
            .with_dimension(CLUSTER_DIMENSION, &self.cluster_identifier)
    }
}
