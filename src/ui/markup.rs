//! Markup composition for the device info popup.
//!
//! The host map injects this markup into the popup's container element. The
//! structure is a header bar with the device name and a close affordance, a
//! body listing name/type/status/longitude/latitude, and a child-device block
//! that is omitted entirely when the device has no children.

use crate::core::constants::{
    ACCENT_COLOR, CHILD_NAME_MAX_WIDTH, CHILD_NAME_MIN_WIDTH, OFFLINE_COLOR, ONLINE_COLOR,
    POPUP_WIDTH,
};
use crate::core::geo::GeoPoint;
use crate::data::devices::{ChildDevice, Device};

/// Product label shown as the parent device's type.
const DEVICE_TYPE_LABEL: &str = "Smart lamp pole";

/// Class name of the close affordance, used by host adapters for hit testing.
pub const CLOSE_BUTTON_CLASS: &str = "close-btn";

/// Class name of the child-device list block.
pub const CHILD_LIST_CLASS: &str = "child-list";

fn status_tag(status: bool) -> String {
    let (color, label) = if status {
        (ONLINE_COLOR, "Online")
    } else {
        (OFFLINE_COLOR, "Offline")
    };
    format!(r#"<span style="color: {color}">{label}</span>"#)
}

fn body_row(label: &str, value: &str, bottom_margin: u32) -> String {
    format!(
        concat!(
            r#"<div style="display: flex; align-items: center; margin-bottom: {margin}px">"#,
            r#"<span style="min-width: 80px; color: rgba(255, 255, 255, 0.7)">{label}</span>"#,
            r#"{value}"#,
            r#"</div>"#,
        ),
        margin = bottom_margin,
        label = label,
        value = value,
    )
}

/// A child entry row. The name sits in a fixed truncation box with an
/// ellipsis; the `title` attribute carries the untruncated name for the
/// tooltip. Controller children render bare; every other type carries a
/// colored status tag pushed to the row's end.
fn child_row(child: &ChildDevice) -> String {
    let name_span = format!(
        concat!(
            r#"<span style="min-width: {min}px; max-width: {max}px; overflow: hidden; "#,
            r#"text-overflow: ellipsis; white-space: nowrap" title="{name}">{name}</span>"#,
        ),
        min = CHILD_NAME_MIN_WIDTH,
        max = CHILD_NAME_MAX_WIDTH,
        name = child.name,
    );
    let tag = if child.is_controller() {
        String::new()
    } else {
        let (color, label) = if child.status {
            (ONLINE_COLOR, "Online")
        } else {
            (OFFLINE_COLOR, "Offline")
        };
        format!(r#"<span style="margin-left: auto; color: {color}">{label}</span>"#)
    };
    format!(
        r#"<div style="display: flex; align-items: center; margin-bottom: 8px">{name_span}{tag}</div>"#
    )
}

/// The child-device list block, or an empty string when there are no
/// children. The block is absent from the markup, not rendered empty.
fn child_list_block(children: &[ChildDevice]) -> String {
    if children.is_empty() {
        return String::new();
    }
    let mut block = format!(
        concat!(
            r#"<div class="{class}" style="margin-top: 15px; "#,
            r#"border-top: 1px solid rgba(255, 255, 255, 0.1); padding-top: 10px">"#,
            r#"<div style="margin-bottom: 10px; font-weight: bold; color: {accent}">Child devices</div>"#,
        ),
        class = CHILD_LIST_CLASS,
        accent = ACCENT_COLOR,
    );
    for child in children {
        block.push_str(&child_row(child));
    }
    block.push_str("</div>");
    block
}

/// Composes the full popup markup for a device and its children.
pub fn popup_markup(device: &Device, children: &[ChildDevice]) -> String {
    let children_block = child_list_block(children);
    // The latitude row keeps its bottom margin only when a child block
    // follows it.
    let last_row_margin = if children_block.is_empty() { 0 } else { 10 };

    let header = format!(
        concat!(
            r#"<div class="{close_class}" style="position: absolute; right: 10px; top: 10px; "#,
            r#"cursor: pointer; z-index: 1">"#,
            r#"<span style="color: rgba(255, 255, 255, 0.7); font-size: 18px">&times;</span>"#,
            r#"</div>"#,
            r#"<div style="font-size: 16px; font-weight: bold; padding: 8px 15px; "#,
            r#"background: rgba(0, 228, 255, 0.1); "#,
            r#"border-bottom: 1px solid rgba(255, 255, 255, 0.1)">{name}</div>"#,
        ),
        close_class = CLOSE_BUTTON_CLASS,
        name = device.name,
    );

    let mut body = String::from(r#"<div style="padding: 15px">"#);
    body.push_str(&body_row(
        "Name:",
        &format!("<span>{}</span>", device.name),
        10,
    ));
    body.push_str(&body_row(
        "Type:",
        &format!("<span>{}</span>", DEVICE_TYPE_LABEL),
        10,
    ));
    body.push_str(&body_row("Status:", &status_tag(device.status), 10));
    body.push_str(&body_row(
        "Longitude:",
        &format!("<span>{}</span>", GeoPoint::coord_text(device.longitude)),
        10,
    ));
    body.push_str(&body_row(
        "Latitude:",
        &format!("<span>{}</span>", GeoPoint::coord_text(device.latitude)),
        last_row_margin,
    ));
    body.push_str(&children_block);
    body.push_str("</div>");

    format!(
        concat!(
            r#"<div class="info-popup" style="width: {width}px; background: rgba(0, 0, 0, 0.7); "#,
            r#"backdrop-filter: blur(10px); border-radius: 8px; color: #fff; "#,
            r#"box-shadow: 0 2px 6px rgba(0, 0, 0, 0.3); position: relative">"#,
            r#"{header}{body}</div>"#,
        ),
        width = POPUP_WIDTH as u32,
        header = header,
        body = body,
    )
}
