//! Shared trait abstractions for the host-map boundary
//!
//! The dashboard does not subclass the host map's overlay base type. Instead
//! the popup implements [`Overlay`] and the map adapter implements
//! [`OverlayHost`], so the lifecycle logic stays independent of any concrete
//! map SDK.

use crate::{
    core::geo::{GeoPoint, ScreenPoint},
    Result,
};

/// Handle to a positioned container element created by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(pub u64);

/// Capabilities the host map must provide to overlays.
///
/// Mirrors the surface the dashboard consumes from its map engine: geographic
/// to pixel projection, plus creation, placement, measurement and removal of
/// a positioned content container inside the map's overlay pane.
pub trait OverlayHost {
    /// Projects a geographic point to the current screen pixel location.
    fn geo_to_pixel(&self, point: &GeoPoint) -> ScreenPoint;

    /// Creates a positioned container in the overlay pane with the given
    /// markup and returns its handle.
    fn create_container(&mut self, markup: &str) -> ContainerId;

    /// Removes a container from the overlay pane. Removing a handle that was
    /// already removed has no effect.
    fn remove_container(&mut self, container: ContainerId);

    /// Moves a container so its top-left corner sits at `(left, top)` in
    /// pixel coordinates.
    fn position_container(&mut self, container: ContainerId, left: f64, top: f64);

    /// Reports the actual rendered height of a container. Content length
    /// varies (the child-device block may be absent), so positioning must not
    /// assume a fixed height.
    fn container_height(&self, container: ContainerId) -> f64;
}

/// An overlay attached to the host map at a geographic point.
pub trait Overlay {
    /// Invoked once when the host attaches the overlay. Creates the content
    /// container and returns its handle.
    fn on_attach(&mut self, host: &mut dyn OverlayHost) -> Result<ContainerId>;

    /// Invoked on every viewport change. Repositions the container relative
    /// to the overlay's anchor point.
    fn on_redraw(&mut self, host: &mut dyn OverlayHost);

    /// Handles an input event routed to this overlay.
    fn on_event(&mut self, event: OverlayEvent) -> EventOutcome;

    /// Removes the overlay's container from the host.
    fn detach(&mut self, host: &mut dyn OverlayHost);
}

/// Input events a host routes to an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    Click { target: ClickTarget },
}

/// Where inside the overlay a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Body,
    CloseButton,
}

/// Outcome of routing an event to an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The overlay consumed the event; it must not reach map handlers.
    Consumed,
    /// The event is not for this overlay; the host may propagate it.
    Propagate,
    /// The overlay asks to be removed from the map.
    RequestClose,
}
