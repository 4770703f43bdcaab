pub mod columns;
pub mod icon;
pub mod manager;
pub mod markup;
pub mod popup;

pub use columns::{Align, ColumnDescriptor, ALARM_LOG_COLUMNS, DEVICE_STATS_COLUMNS};
pub use icon::icon_size;
pub use manager::{OverlayManager, RequestToken, ShowOutcome};
pub use popup::InfoPopup;
