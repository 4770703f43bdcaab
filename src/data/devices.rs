//! Device records and the child-device listing API.
//!
//! The backend keys child devices by their parent lamp pole and delivers
//! camelCase JSON. [`DeviceApi`] is the seam between the overlay manager and
//! the transport so tests and demos can inject a canned backend.

use crate::{core::config::DashboardConfig, core::geo::GeoPoint, DashboardError};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Device type string of the lamp controller child, which renders without a
/// status tag.
pub const LAMP_CONTROLLER_TYPE: &str = "lamp-controller";

/// Shared async HTTP client with a custom User-Agent. Building the client
/// once avoids the cost of TLS and connection pool setup for every request.
pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent("lampmap/0.1 (+https://github.com/PoHsuanLai/lampmap)")
        .build()
        .expect("failed to build reqwest async client")
});

/// A monitored lamp-pole device as supplied by the caller per popup request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: String,
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    /// Online (`true`) or offline (`false`).
    pub status: bool,
}

impl Device {
    /// The device's anchor point in geographic coordinates.
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.longitude, self.latitude)
    }
}

/// A child device mounted on a lamp pole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildDevice {
    pub name: String,
    pub device_type: String,
    pub status: bool,
}

impl ChildDevice {
    pub fn is_controller(&self) -> bool {
        self.device_type == LAMP_CONTROLLER_TYPE
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListChildrenRequest<'a> {
    parent_id: &'a str,
}

/// Backend capability for listing the children of a device.
#[async_trait]
pub trait DeviceApi: Send + Sync {
    /// Lists the child devices of `parent_id`, in backend order.
    async fn list_children(&self, parent_id: &str) -> Result<Vec<ChildDevice>, DashboardError>;
}

/// [`DeviceApi`] implementation over the dashboard backend's HTTP endpoint.
pub struct HttpDeviceApi {
    url: String,
}

impl HttpDeviceApi {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            url: config.device_list_url(),
        }
    }
}

#[async_trait]
impl DeviceApi for HttpDeviceApi {
    async fn list_children(&self, parent_id: &str) -> Result<Vec<ChildDevice>, DashboardError> {
        log::debug!("listing children of {} via {}", parent_id, self.url);
        let response = HTTP_CLIENT
            .post(&self.url)
            .json(&ListChildrenRequest { parent_id })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(DashboardError::Api(format!("HTTP {}", response.status())));
        }
        // The endpoint answers with a JSON array, or null when the parent has
        // no children at all.
        let children: Option<Vec<ChildDevice>> = response.json().await?;
        let children = children.unwrap_or_default();
        log::debug!("{} child devices for {}", children.len(), parent_id);
        Ok(children)
    }
}
