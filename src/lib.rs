//! # Lampmap
//!
//! Support utilities for a map-based smart lamp-pole monitoring dashboard.
//!
//! This crate provides the pieces the dashboard's map view needs around a
//! host map engine: a single-active info popup with its overlay lifecycle,
//! zoom-dependent icon sizing, GCJ-02 to BD-09 coordinate conversion, and
//! the static column schemas consumed by the dashboard's table component.
//! The popup logic depends only on the [`traits::OverlayHost`] capability
//! interface, so any concrete map adapter can drive it.

pub mod core;
pub mod data;
pub mod prelude;
pub mod traits;
pub mod ui;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::DashboardConfig,
    geo::{GeoPoint, ScreenPoint},
};

pub use crate::data::{
    conversion::{gcj02_to_bd09, Converter, CoordinateSystem, ConversionError},
    devices::{ChildDevice, Device, DeviceApi, HttpDeviceApi},
};

pub use crate::traits::{ClickTarget, ContainerId, EventOutcome, Overlay, OverlayEvent, OverlayHost};

pub use crate::ui::{
    columns::{Align, ColumnDescriptor, ALARM_LOG_COLUMNS, DEVICE_STATS_COLUMNS},
    icon::icon_size,
    manager::{OverlayManager, RequestToken, ShowOutcome},
    popup::InfoPopup,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Device API error: {0}")]
    Api(String),

    #[error("Overlay error: {0}")]
    Overlay(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = DashboardError;
