//! Created-alarm and annotation types.

use serde::{Deserialize, Serialize};

use crate::metrics::MetricHandle;

/// Comparison applied between the metric value and the threshold
///
/// Passed through opaquely to the alarm descriptor; this crate never
/// evaluates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOperator {
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl ComparisonOperator {
    /// Symbol used in annotation labels
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::GreaterThanOrEqual => ">=",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::LessThanOrEqual => "<=",
        }
    }
}

/// Horizontal reference line drawn on a graph widget
///
/// Derived 1:1 from a created alarm's threshold; carries no identity of
/// its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub value: f64,
    pub label: String,
}

/// An alarm created from one threshold entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedAlarm {
    /// Full alarm name, unique within the owning unit
    pub alarm_name: String,
    /// Alarm kind, e.g. `"CPU-Usage"`
    pub kind: String,
    /// Caller-chosen disambiguator within the kind
    pub disambiguator: String,
    /// Threshold the alarm fires at
    pub threshold_value: f64,
    pub comparison: ComparisonOperator,
    /// Reference line drawn on graphs showing this alarm's metric
    pub annotation: Annotation,
    /// Metric the alarm watches
    pub metric: MetricHandle,
}
