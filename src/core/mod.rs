pub mod config;
pub mod constants;
pub mod geo;

// Re-export the essential types
pub use config::DashboardConfig;
pub use geo::{GeoPoint, ScreenPoint};
