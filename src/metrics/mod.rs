//! Metric handles bound to monitored resources.
//!
//! A [`MetricHandle`] identifies one queryable time series. The rest of the
//! crate never inspects how the series is computed; handles are cloned into
//! widgets and alarms as opaque references.

use serde::{Deserialize, Serialize};

/// Statistic applied when a metric is graphed or alarmed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statistic {
    Average,
    Sum,
    Minimum,
    Maximum,
    P90,
}

/// One name/value dimension pair narrowing a metric to a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

/// A queryable time series bound to one resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MetricHandle {
    /// A dimensioned metric queried from a namespace
    Metric {
        namespace: String,
        metric_name: String,
        label: String,
        statistic: Statistic,
        period_seconds: u64,
        dimensions: Vec<Dimension>,
        /// Home region of the series, when it differs from the viewer's
        region: Option<String>,
    },
    /// A search or math expression producing one or more series
    Expression {
        expression: String,
        label: String,
        period_seconds: u64,
        region: Option<String>,
    },
}

/// Default query period in seconds
const DEFAULT_PERIOD_SECONDS: u64 = 300;

impl MetricHandle {
    /// Create a dimensioned metric handle with default label and statistic
    pub fn metric(namespace: impl Into<String>, metric_name: impl Into<String>) -> Self {
        let metric_name = metric_name.into();
        Self::Metric {
            namespace: namespace.into(),
            label: metric_name.clone(),
            metric_name,
            statistic: Statistic::Average,
            period_seconds: DEFAULT_PERIOD_SECONDS,
            dimensions: Vec::new(),
            region: None,
        }
    }

    /// Create an expression-backed metric handle
    pub fn expression(expression: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Expression {
            expression: expression.into(),
            label: label.into(),
            period_seconds: DEFAULT_PERIOD_SECONDS,
            region: None,
        }
    }

    /// Set the display label
    pub fn with_label(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Metric { label, .. } | Self::Expression { label, .. } => *label = value.into(),
        }
        self
    }

    /// Set the statistic; no-op for expression handles
    pub fn with_statistic(mut self, value: Statistic) -> Self {
        if let Self::Metric { statistic, .. } = &mut self {
            *statistic = value;
        }
        self
    }

    /// Set the query period in seconds
    pub fn with_period_seconds(mut self, value: u64) -> Self {
        match &mut self {
            Self::Metric { period_seconds, .. } | Self::Expression { period_seconds, .. } => {
                *period_seconds = value
            }
        }
        self
    }

    /// Add a dimension; no-op for expression handles
    pub fn with_dimension(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Metric { dimensions, .. } = &mut self {
            dimensions.push(Dimension {
                name: name.into(),
                value: value.into(),
            });
        }
        self
    }

    /// Pin the series to its home region
    pub fn with_region(mut self, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Metric { region, .. } | Self::Expression { region, .. } => {
                *region = Some(value.into())
            }
        }
        self
    }

    /// Display label of the series
    pub fn label(&self) -> &str {
        match self {
            Self::Metric { label, .. } | Self::Expression { label, .. } => label,
        }
    }

    /// Home region of the series, if pinned
    pub fn region(&self) -> Option<&str> {
        match self {
            Self::Metric { region, .. } | Self::Expression { region, .. } => region.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_defaults() {
        let metric = MetricHandle::metric("AWS/RDS", "CPUUtilization");
        match &metric {
            MetricHandle::Metric {
                namespace,
                metric_name,
                label,
                statistic,
                period_seconds,
                dimensions,
                region,
            } => {
                assert_eq!(namespace, "AWS/RDS");
                assert_eq!(metric_name, "CPUUtilization");
                assert_eq!(label, "CPUUtilization");
                assert_eq!(*statistic, Statistic::Average);
                assert_eq!(*period_seconds, 300);
                assert!(dimensions.is_empty());
                assert!(region.is_none());
            }
            _ => panic!("expected dimensioned metric"),
        }
    }

    #[test]
    fn test_metric_builder_chain() {
        let metric = MetricHandle::metric("AWS/RDS", "SelectLatency")
            .with_label("Select")
            .with_statistic(Statistic::P90)
            .with_dimension("DBClusterIdentifier", "my-cluster")
            .with_region("eu-west-1");

        assert_eq!(metric.label(), "Select");
        assert_eq!(metric.region(), Some("eu-west-1"));
        match metric {
            MetricHandle::Metric {
                statistic,
                dimensions,
                ..
            } => {
                assert_eq!(statistic, Statistic::P90);
                assert_eq!(dimensions.len(), 1);
                assert_eq!(dimensions[0].name, "DBClusterIdentifier");
            }
            _ => panic!("expected dimensioned metric"),
        }
    }

    #[test]
    fn test_expression_handle() {
        let metric = MetricHandle::expression("SEARCH('{AWS/Billing}', 'Maximum', 86400)", "Cost")
            .with_period_seconds(86400);
        assert_eq!(metric.label(), "Cost");
        match metric {
            MetricHandle::Expression { period_seconds, .. } => assert_eq!(period_seconds, 86400),
            _ => panic!("expected expression metric"),
        }
    }
}
