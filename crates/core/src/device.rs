//! Device model: discovery, interface classification, and selection.
//!
//! The G400 family exposes two HID interfaces: interface 0 carries the
//! ordinary mouse input, interface 1 carries the vendor feature reports and
//! button-event frames this tool drives. Selection narrows the enumerated
//! candidates down to exactly one interface-1 handle and detects the model.

use crate::error::{Error, Result};
use crate::{pids, LOGITECH_VID};
use tracing::{debug, info, warn};

/// Supported mouse models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseModel {
    G400,
    G400s,
}

impl MouseModel {
    /// Look up model from USB product ID.
    pub fn from_pid(pid: u16) -> Option<Self> {
        match pid {
            pids::G400 => Some(Self::G400),
            pids::G400S => Some(Self::G400s),
            _ => None,
        }
    }

    /// Human-readable name, as printed by `show`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::G400 => "G400",
            Self::G400s => "G400s",
        }
    }

    /// USB Product ID.
    pub fn pid(&self) -> u16 {
        match self {
            Self::G400 => pids::G400,
            Self::G400s => pids::G400S,
        }
    }
}

impl std::fmt::Display for MouseModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One enumerated HID interface of a recognized mouse.
#[derive(Debug, Clone)]
pub struct DeviceCandidate {
    pub vendor_id: u16,
    pub product_id: u16,
    /// Platform interface index; -1 where the platform does not report one.
    pub interface_number: i32,
    pub path: String,
}

/// Role of one HID interface of the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceRole {
    /// Interface 1: feature reports and vendor button events.
    Control,
    /// Interface 0: ordinary mouse input, unused by this tool.
    Other,
}

/// The control interface of the G400 family.
const CONTROL_INTERFACE: i32 = 1;

/// Classify a candidate's interface role.
///
/// Uses the numeric interface index when the platform reports one; otherwise
/// falls back to the interface token embedded in the platform path (Windows
/// encodes `mi_00`/`mi_01`). Returns `None` when neither discriminator
/// applies.
pub fn classify_interface(candidate: &DeviceCandidate) -> Option<InterfaceRole> {
    if candidate.interface_number >= 0 {
        return match candidate.interface_number {
            n if n == CONTROL_INTERFACE => Some(InterfaceRole::Control),
            0 => Some(InterfaceRole::Other),
            _ => None,
        };
    }

    let path = candidate.path.to_lowercase();
    if path.contains("mi_01") {
        Some(InterfaceRole::Control)
    } else if path.contains("mi_00") {
        Some(InterfaceRole::Other)
    } else {
        None
    }
}

/// A selected control interface plus the detected model.
#[derive(Debug, Clone)]
pub struct Selection {
    pub candidate: DeviceCandidate,
    pub model: MouseModel,
}

/// Narrow the enumerated candidates down to the single control interface.
///
/// Every candidate must classify as control or other; an unclassifiable
/// candidate aborts selection rather than risking driving the wrong
/// interface. Control and other counts must match (one interface pair per
/// attached mouse), and exactly one mouse may be attached.
pub fn select_control_interface(candidates: &[DeviceCandidate]) -> Result<Selection> {
    let mut control = Vec::new();
    let mut other = Vec::new();
    let mut unclassified = Vec::new();

    for candidate in candidates {
        match classify_interface(candidate) {
            Some(InterfaceRole::Control) => control.push(candidate),
            Some(InterfaceRole::Other) => other.push(candidate),
            None => {
                warn!(
                    path = %candidate.path,
                    interface_number = candidate.interface_number,
                    "Cannot classify HID interface"
                );
                unclassified.push(candidate);
            }
        }
    }

    if !unclassified.is_empty() {
        let paths: Vec<&str> = unclassified.iter().map(|c| c.path.as_str()).collect();
        return Err(Error::UnexpectedTopology(format!(
            "unclassifiable interface(s): {}",
            paths.join(", ")
        )));
    }

    if control.len() != other.len() {
        return Err(Error::UnexpectedTopology(format!(
            "{} control interface(s) but {} input interface(s)",
            control.len(),
            other.len()
        )));
    }

    let candidate = match control.len() {
        0 => return Err(Error::NotAttached),
        1 => control[0].clone(),
        _ => return Err(Error::MultipleDevices),
    };

    let model = MouseModel::from_pid(candidate.product_id).ok_or_else(|| {
        Error::UnexpectedTopology(format!(
            "unrecognized product id 0x{:04x}",
            candidate.product_id
        ))
    })?;

    info!(
        model = model.name(),
        path = %candidate.path,
        "Selected control interface"
    );
    Ok(Selection { candidate, model })
}

/// Enumerate all HID interfaces of attached G400-family mice.
pub fn discover_candidates() -> Result<Vec<DeviceCandidate>> {
    debug!("Starting HID device enumeration");
    let api = hidapi::HidApi::new().map_err(|e| Error::Hid(e.to_string()))?;

    let mut candidates = Vec::new();
    for info in api.device_list() {
        if info.vendor_id() != LOGITECH_VID || MouseModel::from_pid(info.product_id()).is_none() {
            continue;
        }

        debug!(
            vid = format_args!("0x{:04X}", info.vendor_id()),
            pid = format_args!("0x{:04X}", info.product_id()),
            interface_number = info.interface_number(),
            path = %info.path().to_string_lossy(),
            "Found G400-family interface"
        );
        candidates.push(DeviceCandidate {
            vendor_id: info.vendor_id(),
            product_id: info.product_id(),
            interface_number: info.interface_number(),
            path: info.path().to_string_lossy().into_owned(),
        });
    }

    debug!(count = candidates.len(), "Device enumeration complete");
    Ok(candidates)
}
