//! Toolkit-independent view of the poller widget.

use crate::widget::status::Status;
use crate::widget::table::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleStyle {
    Primary,
    Danger,
}

/// State of the Go/Stop control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Go,
    Stop,
}

impl Toggle {
    pub fn label(self) -> &'static str {
        match self {
            Toggle::Go => "Go",
            Toggle::Stop => "Stop",
        }
    }

    pub fn style(self) -> ToggleStyle {
        match self {
            Toggle::Go => ToggleStyle::Primary,
            Toggle::Stop => ToggleStyle::Danger,
        }
    }
}

/// Rendering hooks the widget drives. Calls are synchronous; `alert` is the
/// blocking, user-visible message channel.
pub trait Surface: Send + Sync {
    fn show_status(&self, status: &Status);
    fn show_rows(&self, rows: &[Row]);
    fn show_toggle(&self, toggle: Toggle);
    fn set_interval_enabled(&self, enabled: bool);
    fn alert(&self, message: &str);
}
