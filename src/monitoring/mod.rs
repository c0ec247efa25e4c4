//! Monitoring units.
//!
//! Every monitored resource type implements the [`Monitoring`] trait: a
//! unit resolves its title and creates its alarms at construction time,
//! then renders two widget tiers on demand. [`BaseMonitoring`] carries the
//! bookkeeping shared by all units so a resource type only declares which
//! metrics and thresholds apply.

pub mod billing;
pub mod rds_cluster;

use std::sync::Arc;

use crate::alarms::CreatedAlarm;
use crate::dashboard::NamingStrategy;
use crate::error::Result;
use crate::widgets::WidgetSpec;

pub use billing::{BillingMonitoring, BillingMonitoringProps};
pub use rds_cluster::{RdsClusterMonitoring, RdsClusterMonitoringProps};

/// Sink receiving a unit's complete alarm sequence
///
/// Invoked exactly once per unit, after every alarm kind has finished
/// registering, so the sink never observes a partial set.
pub trait AlarmConsumer {
    fn consume(&self, alarms: &[CreatedAlarm]);
}

/// Options shared by every monitoring unit
#[derive(Clone, Default)]
pub struct BaseMonitoringProps {
    /// Explicit title override; fallback identity is used when absent
    pub human_readable_name: Option<String>,
    /// Explicit alarm-name override
    pub alarm_friendly_name: Option<String>,
    /// Optional sink for cross-unit alarm aggregation
    pub use_created_alarms: Option<Arc<dyn AlarmConsumer>>,
}

/// Capability set every monitoring unit exposes
///
/// Both widget methods are pure: they rebuild widget descriptors from state
/// resolved at construction and may be called any number of times. The
/// first widget of either tier is always the unit's header.
pub trait Monitoring {
    /// Condensed widgets for at-a-glance review
    fn summary_widgets(&self) -> Vec<WidgetSpec>;

    /// Full, detailed widgets
    fn widgets(&self) -> Vec<WidgetSpec>;

    /// Alarms created at construction, in creation order
    fn created_alarms(&self) -> &[CreatedAlarm];
}

/// State and bookkeeping shared by all monitoring units
#[derive(Debug)]
pub struct BaseMonitoring {
    title: String,
    alarm_friendly_name: String,
    alarms: Vec<CreatedAlarm>,
}

impl BaseMonitoring {
    /// Resolve names and start with an empty alarm collection
    pub fn new(naming: &NamingStrategy) -> Result<Self> {
        Ok(Self {
            title: naming.resolve_human_readable_name()?,
            alarm_friendly_name: naming.resolve_alarm_friendly_name()?,
            alarms: Vec::new(),
        })
    }

    /// Resolved title, immutable after construction
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Resolved alarm-safe identifier
    pub fn alarm_friendly_name(&self) -> &str {
        &self.alarm_friendly_name
    }

    /// Append an alarm; duplicates are the alarm factory's concern
    pub fn add_alarm(&mut self, alarm: CreatedAlarm) {
        self.alarms.push(alarm);
    }

    /// Accumulated alarms in creation order
    pub fn created_alarms(&self) -> &[CreatedAlarm] {
        &self.alarms
    }

    /// Header widget opening both rendering tiers
    pub fn header_widget(&self, family: &str, url: Option<&str>) -> WidgetSpec {
        let widget = WidgetSpec::header(family, &self.title);
        match url {
            Some(url) => widget.with_link(url),
            None => widget,
        }
    }

    /// Hand the complete alarm sequence to the caller's sink, if any
    pub fn consume_created_alarms(&self, props: &BaseMonitoringProps) {
        if let Some(sink) = &props.use_created_alarms {
            sink.consume(self.created_alarms());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarms::{AlarmFactory, UsageAlarmFactory, UsageThreshold};
    use crate::metrics::MetricHandle;
    use std::sync::Mutex;

    struct CollectingSink {
        calls: Mutex<Vec<Vec<CreatedAlarm>>>,
    }

    impl AlarmConsumer for CollectingSink {
        fn consume(&self, alarms: &[CreatedAlarm]) {
            self.calls.lock().unwrap().push(alarms.to_vec());
        }
    }

    #[test]
    fn test_base_resolves_names() {
        let base = BaseMonitoring::new(&NamingStrategy::new("my cluster")).unwrap();
        assert_eq!(base.title(), "my cluster");
        assert_eq!(base.alarm_friendly_name(), "my-cluster");
        assert!(base.created_alarms().is_empty());
    }

    #[test]
    fn test_alarms_kept_in_creation_order() {
        let mut base = BaseMonitoring::new(&NamingStrategy::new("db")).unwrap();
        let metric = MetricHandle::metric("AWS/RDS", "CPUUtilization");
        let mut factory = UsageAlarmFactory::new(AlarmFactory::new(base.alarm_friendly_name()));

        for disambiguator in ["Warning", "Critical"] {
            let created = factory
                .add_max_cpu_usage_percent_alarm(
                    &metric,
                    &UsageThreshold::new(80.0),
                    disambiguator,
                )
                .unwrap();
            base.add_alarm(created);
        }

        let names: Vec<&str> = base
            .created_alarms()
            .iter()
            .map(|a| a.disambiguator.as_str())
            .collect();
        assert_eq!(names, vec!["Warning", "Critical"]);
    }

    #[test]
    fn test_sink_receives_full_sequence_once() {
        let sink = Arc::new(CollectingSink {
            calls: Mutex::new(Vec::new()),
        });
        let props = BaseMonitoringProps {
            use_created_alarms: Some(sink.clone()),
            ..Default::default()
        };

        let base = BaseMonitoring::new(&NamingStrategy::new("db")).unwrap();
        base.consume_created_alarms(&props);

        let calls = sink.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].is_empty());
    }
}
