//! Widget descriptors emitted by monitoring units.

pub mod axis;
pub mod widget;

pub use axis::YAxisSpec;
pub use widget::{GraphView, WidgetHeight, WidgetPayload, WidgetSpec, WidgetWidth, FULL_ROW_WIDTH};
