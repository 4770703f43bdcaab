pub mod conversion;
pub mod devices;

// Re-exports for convenience
pub use conversion::{gcj02_to_bd09, Converter, CoordinateSystem};
pub use devices::{ChildDevice, Device, DeviceApi, HttpDeviceApi};
