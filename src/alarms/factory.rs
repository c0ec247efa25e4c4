//! Alarm factories.
//!
//! [`AlarmFactory`] validates thresholds, enforces disambiguator uniqueness
//! per alarm kind, and produces [`CreatedAlarm`]s with their annotations.
//! [`UsageAlarmFactory`] wraps it with the usage-percentage alarm kinds.

use std::collections::HashSet;

use tracing::debug;

use crate::alarms::alarm::{Annotation, ComparisonOperator, CreatedAlarm};
use crate::alarms::threshold::UsageThreshold;
use crate::error::{Error, Result};
use crate::metrics::MetricHandle;

/// Inputs for one alarm creation
#[derive(Debug, Clone)]
pub struct AlarmCreateProps {
    /// Alarm kind, e.g. `"Disk-Usage"`
    pub kind: String,
    /// Caller-chosen disambiguator within the kind
    pub disambiguator: String,
    /// Threshold the alarm fires at; must be positive
    pub threshold_value: f64,
    pub comparison: ComparisonOperator,
}

/// Creates alarms for one monitoring unit
///
/// Seeded with the unit's alarm-friendly name, which prefixes every alarm
/// name it produces. Tracks `(kind, disambiguator)` pairs so a duplicate is
/// rejected here rather than silently producing two alarms with one name.
#[derive(Debug)]
pub struct AlarmFactory {
    alarm_name_prefix: String,
    registered: HashSet<String>,
}

impl AlarmFactory {
    /// Create a factory whose alarms are prefixed with the given name
    pub fn new(alarm_name_prefix: impl Into<String>) -> Self {
        Self {
            alarm_name_prefix: alarm_name_prefix.into(),
            registered: HashSet::new(),
        }
    }

    /// Create one alarm and its annotation from a threshold
    pub fn create_alarm(
        &mut self,
        metric: &MetricHandle,
        props: AlarmCreateProps,
    ) -> Result<CreatedAlarm> {
        if !(props.threshold_value > 0.0) {
            return Err(Error::Configuration(format!(
                "threshold for {} alarm '{}' must be positive, got {}",
                props.kind, props.disambiguator, props.threshold_value
            )));
        }

        let suffix = format!("{}-{}", props.kind, props.disambiguator);
        if !self.registered.insert(suffix.clone()) {
            return Err(Error::Configuration(format!(
                "duplicate disambiguator '{}' for alarm kind '{}'",
                props.disambiguator, props.kind
            )));
        }

        let alarm_name = format!("{}-{}", self.alarm_name_prefix, suffix);
        let annotation = Annotation {
            value: props.threshold_value,
            label: format!(
                "{} {} {}",
                metric.label(),
                props.comparison.symbol(),
                props.threshold_value
            ),
        };

        debug!(
            alarm = %alarm_name,
            threshold = props.threshold_value,
            "created alarm"
        );

        Ok(CreatedAlarm {
            alarm_name,
            kind: props.kind,
            disambiguator: props.disambiguator,
            threshold_value: props.threshold_value,
            comparison: props.comparison,
            annotation,
            metric: metric.clone(),
        })
    }
}

/// Alarm factory for usage-percentage metrics
#[derive(Debug)]
pub struct UsageAlarmFactory {
    alarm_factory: AlarmFactory,
}

impl UsageAlarmFactory {
    pub fn new(alarm_factory: AlarmFactory) -> Self {
        Self { alarm_factory }
    }

    /// Alarm on maximum CPU usage percentage
    pub fn add_max_cpu_usage_percent_alarm(
        &mut self,
        metric: &MetricHandle,
        threshold: &UsageThreshold,
        disambiguator: &str,
    ) -> Result<CreatedAlarm> {
        self.add_usage_alarm("CPU-Usage", metric, threshold, disambiguator)
    }

    /// Alarm on maximum disk usage percentage
    pub fn add_max_disk_usage_percent_alarm(
        &mut self,
        metric: &MetricHandle,
        threshold: &UsageThreshold,
        disambiguator: &str,
    ) -> Result<CreatedAlarm> {
        self.add_usage_alarm("Disk-Usage", metric, threshold, disambiguator)
    }

    fn add_usage_alarm(
        &mut self,
        kind: &str,
        metric: &MetricHandle,
        threshold: &UsageThreshold,
        disambiguator: &str,
    ) -> Result<CreatedAlarm> {
        self.alarm_factory.create_alarm(
            metric,
            AlarmCreateProps {
                kind: kind.to_string(),
                disambiguator: disambiguator.to_string(),
                threshold_value: threshold.max_usage_percent,
                comparison: ComparisonOperator::GreaterThanOrEqual,
            },
        )
    }
}
