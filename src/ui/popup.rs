//! The on-map info popup overlay.

use crate::{
    core::config::PopupOptions,
    core::geo::GeoPoint,
    traits::{ClickTarget, ContainerId, EventOutcome, Overlay, OverlayEvent, OverlayHost},
    Result,
};

/// A popup anchored above a geographic point, carrying composed markup.
///
/// The host attaches it once ([`Overlay::on_attach`]) and repositions it on
/// every viewport change ([`Overlay::on_redraw`]). Clicks on the popup body
/// are consumed so they do not fall through to map click handlers; a click on
/// the close affordance asks the owner to remove this overlay.
pub struct InfoPopup {
    position: GeoPoint,
    content: String,
    options: PopupOptions,
    container: Option<ContainerId>,
}

impl InfoPopup {
    pub fn new(position: GeoPoint, content: String) -> Self {
        Self {
            position,
            content,
            options: PopupOptions::default(),
            container: None,
        }
    }

    pub fn with_options(mut self, options: PopupOptions) -> Self {
        self.options = options;
        self
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Handle of the attached container, if the popup is on a map.
    pub fn container(&self) -> Option<ContainerId> {
        self.container
    }
}

impl Overlay for InfoPopup {
    fn on_attach(&mut self, host: &mut dyn OverlayHost) -> Result<ContainerId> {
        let container = host.create_container(&self.content);
        self.container = Some(container);
        log::debug!("info popup attached as {:?}", container);
        Ok(container)
    }

    fn on_redraw(&mut self, host: &mut dyn OverlayHost) {
        let Some(container) = self.container else {
            return;
        };
        let anchor = host.geo_to_pixel(&self.position);
        // Center horizontally on the anchor; the vertical offset uses the
        // container's actual rendered height so variable-length content does
        // not misalign the popup.
        let height = host.container_height(container);
        let left = anchor.x - self.options.width / 2.0;
        let top = anchor.y - height - self.options.anchor_margin;
        host.position_container(container, left, top);
    }

    fn on_event(&mut self, event: OverlayEvent) -> EventOutcome {
        match event {
            OverlayEvent::Click {
                target: ClickTarget::CloseButton,
            } => EventOutcome::RequestClose,
            OverlayEvent::Click {
                target: ClickTarget::Body,
            } => EventOutcome::Consumed,
        }
    }

    fn detach(&mut self, host: &mut dyn OverlayHost) {
        if let Some(container) = self.container.take() {
            host.remove_container(container);
            log::debug!("info popup detached from {:?}", container);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::ScreenPoint;

    /// Minimal host: projects degrees to pixels 1:100 and records container
    /// positions.
    struct TestHost {
        next_id: u64,
        containers: Vec<ContainerId>,
        positions: Vec<(ContainerId, f64, f64)>,
        height: f64,
    }

    impl TestHost {
        fn new(height: f64) -> Self {
            Self {
                next_id: 0,
                containers: Vec::new(),
                positions: Vec::new(),
                height,
            }
        }
    }

    impl OverlayHost for TestHost {
        fn geo_to_pixel(&self, point: &GeoPoint) -> ScreenPoint {
            ScreenPoint::new(point.lng * 100.0, point.lat * 100.0)
        }

        fn create_container(&mut self, _markup: &str) -> ContainerId {
            self.next_id += 1;
            let id = ContainerId(self.next_id);
            self.containers.push(id);
            id
        }

        fn remove_container(&mut self, container: ContainerId) {
            self.containers.retain(|c| *c != container);
        }

        fn position_container(&mut self, container: ContainerId, left: f64, top: f64) {
            self.positions.push((container, left, top));
        }

        fn container_height(&self, _container: ContainerId) -> f64 {
            self.height
        }
    }

    #[test]
    fn test_attach_creates_container() {
        let mut host = TestHost::new(120.0);
        let mut popup = InfoPopup::new(GeoPoint::new(1.0, 2.0), "<div/>".to_string());
        let id = popup.on_attach(&mut host).unwrap();
        assert_eq!(popup.container(), Some(id));
        assert_eq!(host.containers, vec![id]);
    }

    #[test]
    fn test_redraw_positions_above_anchor_using_measured_height() {
        let mut host = TestHost::new(120.0);
        let mut popup = InfoPopup::new(GeoPoint::new(1.0, 2.0), "<div/>".to_string());
        popup.on_attach(&mut host).unwrap();
        popup.on_redraw(&mut host);

        // Anchor pixel is (100, 200); width 300 and margin 20 by default.
        let (_, left, top) = host.positions[0];
        assert_eq!(left, 100.0 - 150.0);
        assert_eq!(top, 200.0 - 120.0 - 20.0);

        // Taller content moves the popup further up on the next redraw.
        host.height = 200.0;
        popup.on_redraw(&mut host);
        let (_, _, top) = host.positions[1];
        assert_eq!(top, 200.0 - 200.0 - 20.0);
    }

    #[test]
    fn test_redraw_before_attach_is_inert() {
        let mut host = TestHost::new(120.0);
        let mut popup = InfoPopup::new(GeoPoint::new(1.0, 2.0), "<div/>".to_string());
        popup.on_redraw(&mut host);
        assert!(host.positions.is_empty());
    }

    #[test]
    fn test_click_routing() {
        let mut popup = InfoPopup::new(GeoPoint::default(), String::new());
        assert_eq!(
            popup.on_event(OverlayEvent::Click {
                target: ClickTarget::Body
            }),
            EventOutcome::Consumed
        );
        assert_eq!(
            popup.on_event(OverlayEvent::Click {
                target: ClickTarget::CloseButton
            }),
            EventOutcome::RequestClose
        );
    }

    #[test]
    fn test_detach_removes_container() {
        let mut host = TestHost::new(120.0);
        let mut popup = InfoPopup::new(GeoPoint::new(1.0, 2.0), "<div/>".to_string());
        popup.on_attach(&mut host).unwrap();
        popup.detach(&mut host);
        assert!(host.containers.is_empty());
        assert_eq!(popup.container(), None);
    }
}
