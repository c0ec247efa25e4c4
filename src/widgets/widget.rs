//! Widget descriptor types.
//!
//! A [`WidgetSpec`] is a sized, titled visual element bound to one or more
//! metric handles. Units produce them fresh on every render call; nothing in
//! this crate mutates a returned widget.

use serde::{Deserialize, Serialize};

use crate::alarms::Annotation;
use crate::metrics::MetricHandle;
use crate::widgets::axis::YAxisSpec;

/// Total grid units per dashboard row
pub const FULL_ROW_WIDTH: u32 = 24;

/// Widget width as a fraction of the 24-unit row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetWidth {
    Quarter,
    Third,
    Half,
    ThreeQuarters,
    Full,
}

impl WidgetWidth {
    /// Width in grid units
    pub fn grid_units(&self) -> u32 {
        match self {
            WidgetWidth::Quarter => 6,
            WidgetWidth::Third => 8,
            WidgetWidth::Half => 12,
            WidgetWidth::ThreeQuarters => 18,
            WidgetWidth::Full => 24,
        }
    }
}

/// Widget height tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetHeight {
    /// Condensed height used on summary dashboards
    Summary,
    /// Taller height used on detail dashboards
    Graph,
}

impl WidgetHeight {
    /// Height in grid units
    pub fn grid_units(&self) -> u32 {
        match self {
            WidgetHeight::Summary => 5,
            WidgetHeight::Graph => 8,
        }
    }
}

/// Graph rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphView {
    Line,
    Bar,
}

/// Widget content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WidgetPayload {
    /// Section header naming the monitored resource
    Header {
        /// Resource family, e.g. `"RDS Cluster"`
        family: String,
        title: String,
        go_to_link_url: Option<String>,
    },
    /// Time-series graph of one or more metrics
    Graph {
        title: String,
        metrics: Vec<MetricHandle>,
        y_axis: YAxisSpec,
        annotations: Vec<Annotation>,
        view: GraphView,
        /// Region override for globally-scoped metrics
        region: Option<String>,
    },
    /// Latest-value readout of one or more metrics
    SingleValue {
        title: String,
        metrics: Vec<MetricHandle>,
        region: Option<String>,
        full_precision: bool,
        set_period_to_time_range: bool,
    },
}

/// A sized, titled visual element bound to metric handles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSpec {
    pub width: WidgetWidth,
    pub height: WidgetHeight,
    pub payload: WidgetPayload,
}

impl WidgetSpec {
    /// Create a full-width header widget
    pub fn header(family: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            width: WidgetWidth::Full,
            height: WidgetHeight::Summary,
            payload: WidgetPayload::Header {
                family: family.into(),
                title: title.into(),
                go_to_link_url: None,
            },
        }
    }

    /// Create a graph widget
    pub fn graph(
        title: impl Into<String>,
        width: WidgetWidth,
        height: WidgetHeight,
        metrics: Vec<MetricHandle>,
        y_axis: YAxisSpec,
    ) -> Self {
        Self {
            width,
            height,
            payload: WidgetPayload::Graph {
                title: title.into(),
                metrics,
                y_axis,
                annotations: Vec::new(),
                view: GraphView::Line,
                region: None,
            },
        }
    }

    /// Create a single-value widget
    pub fn single_value(
        title: impl Into<String>,
        width: WidgetWidth,
        height: WidgetHeight,
        metrics: Vec<MetricHandle>,
    ) -> Self {
        Self {
            width,
            height,
            payload: WidgetPayload::SingleValue {
                title: title.into(),
                metrics,
                region: None,
                full_precision: false,
                set_period_to_time_range: false,
            },
        }
    }

    /// Attach a console deep link; meaningful on header widgets only
    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        if let WidgetPayload::Header { go_to_link_url, .. } = &mut self.payload {
            *go_to_link_url = Some(url.into());
        }
        self
    }

    /// Attach horizontal annotations; meaningful on graph widgets only
    pub fn with_annotations(mut self, values: Vec<Annotation>) -> Self {
        if let WidgetPayload::Graph { annotations, .. } = &mut self.payload {
            *annotations = values;
        }
        self
    }

    /// Set the graph rendering style
    pub fn with_view(mut self, value: GraphView) -> Self {
        if let WidgetPayload::Graph { view, .. } = &mut self.payload {
            *view = value;
        }
        self
    }

    /// Pin the widget to a metric's home region, overriding the viewer's
    pub fn with_region(mut self, value: impl Into<String>) -> Self {
        match &mut self.payload {
            WidgetPayload::Graph { region, .. } | WidgetPayload::SingleValue { region, .. } => {
                *region = Some(value.into())
            }
            WidgetPayload::Header { .. } => {}
        }
        self
    }

    /// Widget title
    pub fn title(&self) -> &str {
        match &self.payload {
            WidgetPayload::Header { title, .. }
            | WidgetPayload::Graph { title, .. }
            | WidgetPayload::SingleValue { title, .. } => title,
        }
    }

    /// Region override, if pinned
    pub fn region(&self) -> Option<&str> {
        match &self.payload {
            WidgetPayload::Header { .. } => None,
            WidgetPayload::Graph { region, .. } | WidgetPayload::SingleValue { region, .. } => {
                region.as_deref()
            }
        }
    }

    /// Whether this is a header widget
    pub fn is_header(&self) -> bool {
        matches!(self.payload, WidgetPayload::Header { .. })
    }

    /// Metric handles shown by the widget
    pub fn metrics(&self) -> &[MetricHandle] {
        match &self.payload {
            WidgetPayload::Header { .. } => &[],
            WidgetPayload::Graph { metrics, .. } | WidgetPayload::SingleValue { metrics, .. } => {
                metrics
            }
        }
    }

    /// Annotations drawn on the widget
    pub fn annotations(&self) -> &[Annotation] {
        match &self.payload {
            WidgetPayload::Graph { annotations, .. } => annotations,
            _ => &[],
        }
    }
}
