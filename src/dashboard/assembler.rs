//! Dashboard page assembly.
//!
//! Collects monitoring units and lays their widgets into rows of at most
//! [`FULL_ROW_WIDTH`] grid units. Pixel-level rendering stays out of scope;
//! the output is an ordered widget list plus a JSON dashboard body.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::alarms::CreatedAlarm;
use crate::error::Result;
use crate::monitoring::Monitoring;
use crate::widgets::{WidgetSpec, FULL_ROW_WIDTH};

/// Collects units and assembles their widgets into dashboard pages
#[derive(Default)]
pub struct DashboardAssembler {
    units: Vec<Arc<dyn Monitoring>>,
}

impl DashboardAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a unit; page order follows registration order
    pub fn add_unit(&mut self, unit: Arc<dyn Monitoring>) {
        self.units.push(unit);
    }

    /// Condensed widgets of every unit, in registration order
    pub fn summary_widgets(&self) -> Vec<WidgetSpec> {
        self.units
            .iter()
            .flat_map(|unit| unit.summary_widgets())
            .collect()
    }

    /// Detailed widgets of every unit, in registration order
    pub fn detail_widgets(&self) -> Vec<WidgetSpec> {
        self.units.iter().flat_map(|unit| unit.widgets()).collect()
    }

    /// All alarms created by the registered units
    pub fn created_alarms(&self) -> Vec<CreatedAlarm> {
        self.units
            .iter()
            .flat_map(|unit| unit.created_alarms().to_vec())
            .collect()
    }

    /// Split a widget list into rows of at most [`FULL_ROW_WIDTH`] units
    ///
    /// Greedy first-fit in order; a header widget always opens a new row so
    /// each unit's section starts at the left edge.
    pub fn rows(widgets: &[WidgetSpec]) -> Vec<Vec<WidgetSpec>> {
        let mut rows: Vec<Vec<WidgetSpec>> = Vec::new();
        let mut current: Vec<WidgetSpec> = Vec::new();
        let mut used = 0u32;

        for widget in widgets {
            let width = widget.width.grid_units();
            if !current.is_empty() && (widget.is_header() || used + width > FULL_ROW_WIDTH) {
                rows.push(std::mem::take(&mut current));
                used = 0;
            }
            used += width;
            current.push(widget.clone());
        }
        if !current.is_empty() {
            rows.push(current);
        }
        rows
    }

    /// Serialize a widget list into a positioned JSON dashboard body
    pub fn to_json(widgets: &[WidgetSpec]) -> Result<serde_json::Value> {
        let mut positioned = Vec::new();
        let mut y = 0u32;

        for row in Self::rows(widgets) {
            let row_height = row
                .iter()
                .map(|w| w.height.grid_units())
                .max()
                .unwrap_or(0);
            let mut x = 0u32;
            for widget in &row {
                positioned.push(json!({
                    "x": x,
                    "y": y,
                    "width": widget.width.grid_units(),
                    "height": widget.height.grid_units(),
                    "widget": serde_json::to_value(widget)?,
                }));
                x += widget.width.grid_units();
            }
            y += row_height;
        }

        debug!(widgets = positioned.len(), "assembled dashboard body");
        Ok(json!({ "widgets": positioned }))
    }
}
