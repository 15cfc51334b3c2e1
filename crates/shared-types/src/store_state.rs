// UI selection state for the widget and change detection between snapshots

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use tsify::Tsify;

use crate::{MenuTab, TimeRange};

/// The three independent UI toggles. None constrains another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub time_range: TimeRange,
    pub menu_tab: MenuTab,
    /// Mirrors the browser's fullscreen state; never drives it.
    pub fullscreen: bool,
}

/// Detailed change detection result
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateChangeDetection {
    pub has_changes: bool,
    pub time_range_changed: bool,
    pub menu_tab_changed: bool,
    pub fullscreen_changed: bool,
    pub requires_data_fetch: bool,
    pub requires_render: bool,
    pub change_summary: Vec<String>,
}

impl UiState {
    pub fn new(time_range: TimeRange) -> Self {
        Self {
            time_range,
            ..Default::default()
        }
    }

    /// Compare with a newer state.
    ///
    /// Only a range change requires a fetch. Tab changes only restyle the
    /// header, and fullscreen changes resize the canvases.
    pub fn detect_changes(&self, new_state: &UiState) -> StateChangeDetection {
        let mut detection = StateChangeDetection::default();

        if self.time_range != new_state.time_range {
            detection.time_range_changed = true;
            detection.requires_data_fetch = true;
            detection.change_summary.push(format!(
                "Time range changed: {} -> {}",
                self.time_range, new_state.time_range
            ));
        }

        if self.menu_tab != new_state.menu_tab {
            detection.menu_tab_changed = true;
            detection.change_summary.push(format!(
                "Menu tab changed: {} -> {}",
                self.menu_tab, new_state.menu_tab
            ));
        }

        if self.fullscreen != new_state.fullscreen {
            detection.fullscreen_changed = true;
            detection.requires_render = true;
            detection.change_summary.push(format!(
                "Fullscreen changed: {} -> {}",
                self.fullscreen, new_state.fullscreen
            ));
        }

        detection.has_changes = detection.time_range_changed
            || detection.menu_tab_changed
            || detection.fullscreen_changed;

        detection
    }
}
