use lampmap::prelude::*;
use std::collections::HashMap;

/// Console walkthrough of the dashboard utilities: shows the info popup
/// lifecycle against an in-memory host map, then prints icon sizes,
/// a coordinate conversion, and the table column schemas.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut host = ConsoleHost::new();
    let mut manager = OverlayManager::new();
    let api = CannedDeviceApi::default();

    let device = Device {
        device_id: "pole-7".to_string(),
        name: "Main Street 7".to_string(),
        longitude: 116.403847,
        latitude: 39.915526,
        status: true,
    };

    let outcome = manager.show_info_popup(&mut host, &api, &device).await?;
    println!("show_info_popup -> {:?}", outcome);
    host.print_containers();

    // A pan or zoom triggers a redraw; the popup follows its anchor.
    host.pan(40.0, -25.0);
    manager.redraw(&mut host);
    println!("after pan:");
    host.print_containers();

    // A click on the popup body stays inside the popup.
    let body = manager.handle_event(
        &mut host,
        OverlayEvent::Click {
            target: ClickTarget::Body,
        },
    );
    println!("body click -> {:?}", body);

    // The close affordance removes the popup.
    let close = manager.handle_event(
        &mut host,
        OverlayEvent::Click {
            target: ClickTarget::CloseButton,
        },
    );
    println!("close click -> {:?} (active: {})", close, manager.has_active());

    println!("\nicon sizes by zoom:");
    for zoom in [17.0, 18.0, 18.5, 19.0, 19.5, 20.0, 21.0] {
        println!("  zoom {:>4} -> {}px", zoom, icon_size(zoom));
    }

    let (bd_lng, bd_lat) = gcj02_to_bd09(device.longitude, device.latitude);
    println!(
        "\nGCJ-02 ({}, {}) -> BD-09 ({}, {})",
        device.longitude, device.latitude, bd_lng, bd_lat
    );

    println!("\nalarm log columns:");
    println!("{}", serde_json::to_string_pretty(&ALARM_LOG_COLUMNS)?);
    println!("device statistics columns:");
    println!("{}", serde_json::to_string_pretty(&DEVICE_STATS_COLUMNS)?);

    Ok(())
}

/// In-memory host map: projects degrees to pixels at a fixed scale around a
/// pannable origin and derives container height from the markup's row count.
struct ConsoleHost {
    next_id: u64,
    containers: HashMap<ContainerId, (String, f64, f64)>,
    origin: ScreenPoint,
}

impl ConsoleHost {
    fn new() -> Self {
        Self {
            next_id: 0,
            containers: HashMap::new(),
            origin: ScreenPoint::new(0.0, 0.0),
        }
    }

    fn pan(&mut self, dx: f64, dy: f64) {
        self.origin = ScreenPoint::new(self.origin.x + dx, self.origin.y + dy);
    }

    fn print_containers(&self) {
        for (id, (markup, left, top)) in &self.containers {
            println!(
                "  container {:?} at ({:.1}, {:.1}), {} bytes of markup",
                id,
                left,
                top,
                markup.len()
            );
        }
    }
}

impl OverlayHost for ConsoleHost {
    fn geo_to_pixel(&self, point: &GeoPoint) -> ScreenPoint {
        ScreenPoint::new(
            point.lng * 10.0 + self.origin.x,
            point.lat * 10.0 + self.origin.y,
        )
    }

    fn create_container(&mut self, markup: &str) -> ContainerId {
        self.next_id += 1;
        let id = ContainerId(self.next_id);
        self.containers.insert(id, (markup.to_string(), 0.0, 0.0));
        id
    }

    fn remove_container(&mut self, container: ContainerId) {
        self.containers.remove(&container);
    }

    fn position_container(&mut self, container: ContainerId, left: f64, top: f64) {
        if let Some(entry) = self.containers.get_mut(&container) {
            entry.1 = left;
            entry.2 = top;
        }
    }

    fn container_height(&self, container: ContainerId) -> f64 {
        self.containers
            .get(&container)
            .map(|(markup, _, _)| markup.matches("<div").count() as f64 * 22.0)
            .unwrap_or(0.0)
    }
}

/// Canned backend standing in for the device service.
#[derive(Default)]
struct CannedDeviceApi;

#[async_trait::async_trait]
impl DeviceApi for CannedDeviceApi {
    async fn list_children(
        &self,
        parent_id: &str,
    ) -> std::result::Result<Vec<ChildDevice>, DashboardError> {
        Ok(vec![
            ChildDevice {
                name: format!("{} controller", parent_id),
                device_type: LAMP_CONTROLLER_TYPE.to_string(),
                status: true,
            },
            ChildDevice {
                name: format!("{} camera", parent_id),
                device_type: "camera".to_string(),
                status: false,
            },
        ])
    }
}
