//! # cwmon-rs
//!
//! Declarative generation of monitoring dashboards and alarms for cloud
//! resources.
//!
//! Given a resource's identity and a set of thresholds, this crate produces
//! metric time series bound to that resource, a widget layout at two levels
//! of detail (summary and full), and threshold-triggered alarms whose
//! crossing lines are rendered as annotations on the relevant graphs.
//! Everything runs once, at infrastructure-definition time; the output is a
//! static description for a dashboard backend to materialize.

pub mod alarms;
pub mod dashboard;
pub mod error;
pub mod metrics;
pub mod monitoring;
pub mod scope;
pub mod widgets;

pub use error::{Error, Result};
pub use monitoring::{AlarmConsumer, BaseMonitoringProps, Monitoring};
pub use scope::MonitoringScope;
