//! Lifecycle management for the single active info popup.
//!
//! The manager owns the active overlay handle outright and removes it
//! directly when a new popup is requested, so at most one popup exists on the
//! host at any time without scanning the host's overlay collection. Requests
//! carry a monotonically increasing token: a fetch that resolves after a
//! newer request has started is discarded, making the most-recently-requested
//! popup win rather than the most-recently-resolved one.

use crate::{
    core::config::PopupOptions,
    data::devices::{ChildDevice, Device, DeviceApi},
    traits::{EventOutcome, Overlay, OverlayEvent, OverlayHost},
    ui::{markup::popup_markup, popup::InfoPopup},
    Result,
};

/// Token identifying one show request. Stale tokens lose to newer ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// How a show request concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    /// Popup attached with the fetched child-device data.
    Shown,
    /// Child lookup failed; popup attached without child data.
    Degraded,
    /// A newer request started before this one resolved; nothing attached.
    Superseded,
}

/// Owns the dashboard's single active info popup.
pub struct OverlayManager {
    active: Option<InfoPopup>,
    latest_request: u64,
    popup_options: PopupOptions,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self {
            active: None,
            latest_request: 0,
            popup_options: PopupOptions::default(),
        }
    }

    pub fn with_popup_options(mut self, options: PopupOptions) -> Self {
        self.popup_options = options;
        self
    }

    /// Starts a new show request: removes the active popup and returns a
    /// token that supersedes all earlier ones.
    pub fn begin_request(&mut self, host: &mut dyn OverlayHost) -> RequestToken {
        self.close_active(host);
        self.latest_request += 1;
        RequestToken(self.latest_request)
    }

    /// Whether no newer request has started since `token` was issued.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest_request
    }

    /// Attaches a popup for `device` unless `token` has been superseded.
    /// Returns `false` when the request was stale and nothing was attached.
    pub fn attach_popup(
        &mut self,
        host: &mut dyn OverlayHost,
        token: RequestToken,
        device: &Device,
        children: &[ChildDevice],
    ) -> Result<bool> {
        if !self.is_current(token) {
            log::debug!(
                "discarding popup for {}: request {} superseded by {}",
                device.device_id,
                token.0,
                self.latest_request
            );
            return Ok(false);
        }
        self.close_active(host);

        let content = popup_markup(device, children);
        let mut popup = InfoPopup::new(device.position(), content)
            .with_options(self.popup_options.clone());
        popup.on_attach(host)?;
        popup.on_redraw(host);
        self.active = Some(popup);
        Ok(true)
    }

    /// Fetches child devices and shows the info popup for `device`.
    ///
    /// A failed lookup is recoverable: the popup is shown without child data
    /// and the outcome reports the degradation. Only overlay attachment
    /// failures surface as errors.
    pub async fn show_info_popup(
        &mut self,
        host: &mut dyn OverlayHost,
        api: &dyn DeviceApi,
        device: &Device,
    ) -> Result<ShowOutcome> {
        let token = self.begin_request(host);
        let (children, degraded) = match api.list_children(&device.device_id).await {
            Ok(children) => (children, false),
            Err(e) => {
                log::warn!(
                    "child device lookup for {} failed: {}; showing popup without children",
                    device.device_id,
                    e
                );
                (Vec::new(), true)
            }
        };
        if !self.attach_popup(host, token, device, &children)? {
            return Ok(ShowOutcome::Superseded);
        }
        Ok(if degraded {
            ShowOutcome::Degraded
        } else {
            ShowOutcome::Shown
        })
    }

    /// Repositions the active popup; the host calls this on every viewport
    /// change.
    pub fn redraw(&mut self, host: &mut dyn OverlayHost) {
        if let Some(popup) = self.active.as_mut() {
            popup.on_redraw(host);
        }
    }

    /// Routes an input event to the active popup. A close request is carried
    /// out immediately and reported as consumed.
    pub fn handle_event(&mut self, host: &mut dyn OverlayHost, event: OverlayEvent) -> EventOutcome {
        let Some(popup) = self.active.as_mut() else {
            return EventOutcome::Propagate;
        };
        match popup.on_event(event) {
            EventOutcome::RequestClose => {
                self.close_active(host);
                EventOutcome::Consumed
            }
            outcome => outcome,
        }
    }

    /// Detaches and drops the active popup, if any.
    pub fn close_active(&mut self, host: &mut dyn OverlayHost) {
        if let Some(mut popup) = self.active.take() {
            popup.detach(host);
        }
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&InfoPopup> {
        self.active.as_ref()
    }
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::{GeoPoint, ScreenPoint};
    use crate::traits::{ClickTarget, ContainerId};

    struct TestHost {
        next_id: u64,
        containers: Vec<ContainerId>,
    }

    impl TestHost {
        fn new() -> Self {
            Self {
                next_id: 0,
                containers: Vec::new(),
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

        fn position_container(&mut self, _container: ContainerId, _left: f64, _top: f64) {}

        fn container_height(&self, _container: ContainerId) -> f64 {
            120.0
        }
    }

    fn device(id: &str, lng: f64, lat: f64) -> Device {
        Device {
            device_id: id.to_string(),
            name: format!("Pole {}", id),
            longitude: lng,
            latitude: lat,
            status: true,
        }
    }

    #[test]
    fn test_newer_request_supersedes_older_token() {
        let mut host = TestHost::new();
        let mut manager = OverlayManager::new();
        let first = manager.begin_request(&mut host);
        let second = manager.begin_request(&mut host);
        assert!(!manager.is_current(first));
        assert!(manager.is_current(second));
    }

    #[test]
    fn test_stale_attach_is_discarded() {
        let mut host = TestHost::new();
        let mut manager = OverlayManager::new();
        let p1 = device("1", 1.0, 1.0);
        let p2 = device("2", 2.0, 2.0);

        let t1 = manager.begin_request(&mut host);
        let t2 = manager.begin_request(&mut host);

        // The later request resolves first and attaches.
        assert!(manager.attach_popup(&mut host, t2, &p2, &[]).unwrap());
        // The earlier one resolves late and must not replace it.
        assert!(!manager.attach_popup(&mut host, t1, &p1, &[]).unwrap());

        assert_eq!(host.containers.len(), 1);
        assert_eq!(
            manager.active().unwrap().position(),
            GeoPoint::new(2.0, 2.0)
        );
    }

    #[test]
    fn test_sequential_shows_keep_one_container() {
        let mut host = TestHost::new();
        let mut manager = OverlayManager::new();
        for i in 0..3 {
            let d = device(&i.to_string(), i as f64, i as f64);
            let token = manager.begin_request(&mut host);
            assert!(manager.attach_popup(&mut host, token, &d, &[]).unwrap());
        }
        assert_eq!(host.containers.len(), 1);
        assert!(manager.has_active());
    }

    #[test]
    fn test_close_event_removes_popup() {
        let mut host = TestHost::new();
        let mut manager = OverlayManager::new();
        let d = device("1", 1.0, 1.0);
        let token = manager.begin_request(&mut host);
        manager.attach_popup(&mut host, token, &d, &[]).unwrap();

        let outcome = manager.handle_event(
            &mut host,
            OverlayEvent::Click {
                target: ClickTarget::CloseButton,
            },
        );
        assert_eq!(outcome, EventOutcome::Consumed);
        assert!(!manager.has_active());
        assert!(host.containers.is_empty());
    }

    #[test]
    fn test_body_click_is_consumed_without_closing() {
        let mut host = TestHost::new();
        let mut manager = OverlayManager::new();
        let d = device("1", 1.0, 1.0);
        let token = manager.begin_request(&mut host);
        manager.attach_popup(&mut host, token, &d, &[]).unwrap();

        let outcome = manager.handle_event(
            &mut host,
            OverlayEvent::Click {
                target: ClickTarget::Body,
            },
        );
        assert_eq!(outcome, EventOutcome::Consumed);
        assert!(manager.has_active());
    }

    #[test]
    fn test_event_without_popup_propagates() {
        let mut host = TestHost::new();
        let mut manager = OverlayManager::new();
        let outcome = manager.handle_event(
            &mut host,
            OverlayEvent::Click {
                target: ClickTarget::Body,
            },
        );
        assert_eq!(outcome, EventOutcome::Propagate);
    }
}
