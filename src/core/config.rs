//! Configuration for the dashboard's backend endpoint and popup geometry.

use crate::core::constants::{POPUP_ANCHOR_MARGIN, POPUP_WIDTH};

/// Options for the info popup's fixed geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupOptions {
    /// Fixed container width in pixels; the popup is centered horizontally on
    /// its anchor by offsetting half of this.
    pub width: f64,
    /// Gap in pixels between the anchor pixel and the popup's bottom edge.
    pub anchor_margin: f64,
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            width: POPUP_WIDTH,
            anchor_margin: POPUP_ANCHOR_MARGIN,
        }
    }
}

/// Top-level configuration for the dashboard support utilities.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Base URL of the device backend, without a trailing slash.
    pub base_url: String,
    /// Path of the child-device listing endpoint.
    pub device_list_path: String,
    /// Info popup geometry.
    pub popup: PopupOptions,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            device_list_path: "/lamp-pole/list".to_string(),
            popup: PopupOptions::default(),
        }
    }
}

impl DashboardConfig {
    /// Full URL of the child-device listing endpoint.
    pub fn device_list_url(&self) -> String {
        format!("{}{}", self.base_url, self.device_list_path)
    }
}
