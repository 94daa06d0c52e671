//! Feature-report client: the two-byte register get/set protocol.
//!
//! The G400 family exposes two vendor feature ids on the control interface:
//!   - 0x20: polling rate register
//!   - 0x8E: DPI level register
//!
//! Writes send exactly `[feature_id, value]` and read nothing back. Reads
//! request a 2-byte report tagged with the feature id; byte 0 of the reply
//! is framing and byte 1 is the register value.

use crate::error::{Error, Result};
use crate::transport::HidTransport;
use tracing::trace;

/// Polling-rate register feature id.
pub const FEATURE_RATE: u8 = 0x20;
/// DPI register feature id.
pub const FEATURE_DPI: u8 = 0x8E;

const REPORT_LEN: usize = 2;

/// Write a raw value into a device register.
///
/// The effect is not verified; callers that need confirmation must follow
/// with [`get_variable`].
pub fn set_variable(transport: &dyn HidTransport, feature_id: u8, value: u8) -> Result<()> {
    trace!(
        feature_id = format_args!("0x{feature_id:02X}"),
        value = format_args!("0x{value:02X}"),
        "feature TX"
    );
    transport.send_feature_report(&[feature_id, value])
}

/// Read the current raw value of a device register.
pub fn get_variable(transport: &dyn HidTransport, feature_id: u8) -> Result<u8> {
    let report = transport.get_feature_report(feature_id, REPORT_LEN)?;
    if report.len() < REPORT_LEN {
        return Err(Error::ShortReport {
            expected: REPORT_LEN,
            actual: report.len(),
        });
    }

    trace!(
        feature_id = format_args!("0x{feature_id:02X}"),
        value = format_args!("0x{:02X}", report[1]),
        "feature RX"
    );
    Ok(report[1])
}
