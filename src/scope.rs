//! Deployment scope and console deep links.

use crate::alarms::AlarmFactory;
use crate::error::{Error, Result};

/// Deployment context a monitoring unit is constructed in
///
/// Carries the account and region identity and hands out the per-unit
/// factories. Shared read-only across units.
#[derive(Debug, Clone)]
pub struct MonitoringScope {
    account_id: String,
    region: String,
}

impl MonitoringScope {
    /// Create a scope for the given account and region
    pub fn new(account_id: impl Into<String>, region: impl Into<String>) -> Result<Self> {
        let account_id = account_id.into();
        let region = region.into();
        if account_id.is_empty() {
            return Err(Error::Configuration(
                "monitoring scope requires a non-empty account id".to_string(),
            ));
        }
        if region.is_empty() {
            return Err(Error::Configuration(
                "monitoring scope requires a non-empty region".to_string(),
            ));
        }
        Ok(Self { account_id, region })
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Alarm factory seeded with a unit's alarm-friendly name
    pub fn alarm_factory(&self, alarm_friendly_name: &str) -> AlarmFactory {
        AlarmFactory::new(alarm_friendly_name)
    }

    /// Console URL factory for this scope's region
    pub fn console_url_factory(&self) -> ConsoleUrlFactory {
        ConsoleUrlFactory {
            region: self.region.clone(),
        }
    }
}

/// Builds console deep links for monitored resources
#[derive(Debug, Clone)]
pub struct ConsoleUrlFactory {
    region: String,
}

impl ConsoleUrlFactory {
    /// Deep link to an RDS cluster's console page
    pub fn rds_cluster_url(&self, cluster_identifier: &str) -> String {
        format!(
            "https://{region}.console.aws.amazon.com/rds/home?region={region}#database:id={id};is-cluster=true",
            region = self.region,
            id = urlencoding::encode(cluster_identifier),
        )
    }
}
