//! Y-axis presets shared across graph widgets.

use serde::{Deserialize, Serialize};

/// Vertical axis configuration for a graph widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxisSpec {
    pub label: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub show_units: bool,
}

impl YAxisSpec {
    /// Percentage axis clamped to 0..100
    pub fn percentage_zero_to_hundred() -> Self {
        Self {
            label: Some("%".to_string()),
            min: Some(0.0),
            max: Some(100.0),
            show_units: false,
        }
    }

    /// Count axis starting at zero
    pub fn count_from_zero() -> Self {
        Self {
            label: Some("Count".to_string()),
            min: Some(0.0),
            max: None,
            show_units: false,
        }
    }

    /// Millisecond time axis starting at zero
    pub fn time_millis_from_zero() -> Self {
        Self {
            label: Some("ms".to_string()),
            min: Some(0.0),
            max: None,
            show_units: false,
        }
    }

    /// USD currency axis starting at zero
    pub fn currency_usd_from_zero() -> Self {
        Self {
            label: Some("USD".to_string()),
            min: Some(0.0),
            max: None,
            show_units: false,
        }
    }
}
