//! Prelude module for common lampmap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use lampmap::prelude::*;`

pub use crate::core::{
    config::{DashboardConfig, PopupOptions},
    constants,
    geo::{GeoPoint, ScreenPoint},
};

pub use crate::data::{
    conversion::{gcj02_to_bd09, Converter, CoordinateSystem, ConversionError},
    devices::{ChildDevice, Device, DeviceApi, HttpDeviceApi, LAMP_CONTROLLER_TYPE},
};

pub use crate::traits::{
    ClickTarget, ContainerId, EventOutcome, Overlay, OverlayEvent, OverlayHost,
};

pub use crate::ui::{
    columns::{Align, ColumnDescriptor, ALARM_LOG_COLUMNS, DEVICE_STATS_COLUMNS},
    icon::icon_size,
    manager::{OverlayManager, RequestToken, ShowOutcome},
    markup::popup_markup,
    popup::InfoPopup,
};

pub use crate::{DashboardError, Result};
