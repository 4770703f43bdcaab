//! Dashboard-wide constants: icon scaling thresholds, popup geometry, and the
//! popup color theme. Keeping them in a single place makes it easier to tweak
//! the dashboard's magic numbers.

/// Device icon size at or below [`ICON_MIN_ZOOM`], in pixels.
pub const MIN_ICON_SIZE: u32 = 16;

/// Device icon size at or above [`ICON_MAX_ZOOM`], in pixels.
pub const MAX_ICON_SIZE: u32 = 32;

/// Zoom level at and below which icons stay at the minimum size.
pub const ICON_MIN_ZOOM: f64 = 18.0;

/// Zoom level at and above which icons stay at the maximum size.
pub const ICON_MAX_ZOOM: f64 = 20.0;

/// Fixed width of the info popup container in pixels.
pub const POPUP_WIDTH: f64 = 300.0;

/// Vertical gap between the anchor pixel and the popup's bottom edge.
pub const POPUP_ANCHOR_MARGIN: f64 = 20.0;

/// Accent color used for the child-list heading.
pub const ACCENT_COLOR: &str = "#00e4ff";

/// Status tag color for online devices.
pub const ONLINE_COLOR: &str = "#52c41a";

/// Status tag color for offline devices.
pub const OFFLINE_COLOR: &str = "#f5222d";

/// Truncation box for child device names (min/max width in pixels).
pub const CHILD_NAME_MIN_WIDTH: u32 = 80;
pub const CHILD_NAME_MAX_WIDTH: u32 = 218;
