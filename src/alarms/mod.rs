//! Threshold-driven alarm creation and bookkeeping.

pub mod alarm;
pub mod factory;
pub mod threshold;

pub use alarm::{Annotation, ComparisonOperator, CreatedAlarm};
pub use factory::{AlarmCreateProps, AlarmFactory, UsageAlarmFactory};
pub use threshold::{ThresholdSet, UsageThreshold};
