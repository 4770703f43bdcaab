//! Static column schemas for the dashboard's table component.
//!
//! Purely declarative: the table component reads these sequences verbatim.
//! Field keys follow the backend's camelCase record fields; widths are
//! relative percentages and are not required to sum to 100 across a schema.

use serde::Serialize;

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

impl std::fmt::Display for Align {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Align::Left => write!(f, "left"),
            Align::Center => write!(f, "center"),
            Align::Right => write!(f, "right"),
        }
    }
}

/// One table column: title text, source field key, alignment, truncation
/// flag, and relative width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub title: &'static str,
    pub data_index: &'static str,
    pub align: Align,
    pub ellipsis: bool,
    pub width: &'static str,
}

/// Columns of the emergency alarm log grid.
pub const ALARM_LOG_COLUMNS: [ColumnDescriptor; 4] = [
    ColumnDescriptor {
        title: "No.",
        data_index: "index",
        align: Align::Center,
        ellipsis: true,
        width: "15%",
    },
    ColumnDescriptor {
        title: "Time",
        data_index: "startDateTime",
        align: Align::Center,
        ellipsis: true,
        width: "30%",
    },
    ColumnDescriptor {
        title: "Device",
        data_index: "oneClickAlarmName",
        align: Align::Center,
        ellipsis: true,
        width: "30%",
    },
    ColumnDescriptor {
        title: "Actions",
        data_index: "operation",
        align: Align::Center,
        ellipsis: true,
        width: "25%",
    },
];

/// Columns of the device statistics grid.
pub const DEVICE_STATS_COLUMNS: [ColumnDescriptor; 5] = [
    ColumnDescriptor {
        title: "Device statistics",
        data_index: "name",
        align: Align::Center,
        ellipsis: true,
        width: "25%",
    },
    ColumnDescriptor {
        title: "Total",
        data_index: "total",
        align: Align::Center,
        ellipsis: true,
        width: "20%",
    },
    ColumnDescriptor {
        title: "Online",
        data_index: "onlineNum",
        align: Align::Center,
        ellipsis: true,
        width: "20%",
    },
    ColumnDescriptor {
        title: "Online rate",
        data_index: "onlineRate",
        align: Align::Center,
        ellipsis: true,
        width: "20%",
    },
    ColumnDescriptor {
        title: "Fault rate",
        data_index: "faultRate",
        align: Align::Center,
        ellipsis: true,
        width: "15%",
    },
];
