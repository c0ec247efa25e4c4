//! Title and alarm-name resolution.

use crate::error::{Error, Result};

/// Resolves a unit's human-readable title and alarm-safe identifier
///
/// Explicit overrides win verbatim; otherwise both names derive from the
/// fallback identity the concrete unit supplies (account id, cluster
/// identifier). A unit with neither override nor usable fallback is a
/// programmer error and fails construction.
#[derive(Debug, Clone, Default)]
pub struct NamingStrategy {
    fallback_name: String,
    human_readable_override: Option<String>,
    alarm_friendly_override: Option<String>,
}

impl NamingStrategy {
    /// Create a strategy with the unit's fallback identity
    pub fn new(fallback_name: impl Into<String>) -> Self {
        Self {
            fallback_name: fallback_name.into(),
            human_readable_override: None,
            alarm_friendly_override: None,
        }
    }

    /// Set the explicit title override
    pub fn with_human_readable_override(mut self, value: Option<String>) -> Self {
        self.human_readable_override = value;
        self
    }

    /// Set the explicit alarm-name override
    pub fn with_alarm_friendly_override(mut self, value: Option<String>) -> Self {
        self.alarm_friendly_override = value;
        self
    }

    /// Title shown on header widgets
    pub fn resolve_human_readable_name(&self) -> Result<String> {
        if let Some(name) = &self.human_readable_override {
            return Ok(name.clone());
        }
        if self.fallback_name.is_empty() {
            return Err(Error::Configuration(
                "no human-readable name override and no fallback identity; \
                 supply one explicitly"
                    .to_string(),
            ));
        }
        Ok(self.fallback_name.clone())
    }

    /// Identifier safe to embed in alarm names
    pub fn resolve_alarm_friendly_name(&self) -> Result<String> {
        let candidate = match &self.alarm_friendly_override {
            Some(name) => name.clone(),
            None => self.fallback_name.clone(),
        };
        let sanitized = sanitize_alarm_name(&candidate);
        if sanitized.is_empty() {
            return Err(Error::Configuration(format!(
                "cannot derive an alarm-friendly name from '{candidate}'"
            )));
        }
        Ok(sanitized)
    }
}

/// Keep ASCII alphanumerics and dashes; collapse everything else to one dash
fn sanitize_alarm_name(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_was_dash = false;
    for c in input.chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            out.push(c);
            last_was_dash = c == '-';
        } else if !last_was_dash {
            out.push('-');
            last_was_dash = true;
        }
    }
    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_used_without_override() {
        let naming = NamingStrategy::new("my-cluster");
        assert_eq!(naming.resolve_human_readable_name().unwrap(), "my-cluster");
        assert_eq!(naming.resolve_alarm_friendly_name().unwrap(), "my-cluster");
    }

    #[test]
    fn test_overrides_win_verbatim() {
        let naming = NamingStrategy::new("my-cluster")
            .with_human_readable_override(Some("Orders Database".to_string()))
            .with_alarm_friendly_override(Some("OrdersDb".to_string()));
        assert_eq!(
            naming.resolve_human_readable_name().unwrap(),
            "Orders Database"
        );
        assert_eq!(naming.resolve_alarm_friendly_name().unwrap(), "OrdersDb");
    }

    #[test]
    fn test_alarm_name_sanitized() {
        let naming = NamingStrategy::new("orders db (prod)");
        assert_eq!(
            naming.resolve_alarm_friendly_name().unwrap(),
            "orders-db-prod"
        );
    }

    #[test]
    fn test_missing_fallback_is_configuration_error() {
        let naming = NamingStrategy::new("");
        assert!(naming.resolve_human_readable_name().is_err());
        assert!(naming.resolve_alarm_friendly_name().is_err());

        let named = NamingStrategy::new("")
            .with_human_readable_override(Some("Billing".to_string()))
            .with_alarm_friendly_override(Some("Billing".to_string()));
        assert!(named.resolve_human_readable_name().is_ok());
        assert!(named.resolve_alarm_friendly_name().is_ok());
    }
}
