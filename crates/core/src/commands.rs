//! Command orchestration: the show and set flows over a transport.
//!
//! Validation is split from application so the CLI can resolve symbolic
//! labels before it even opens the device handle. A bad label therefore
//! aborts with zero device writes, and a good rate followed by a bad DPI
//! cannot partially apply.

use crate::device::MouseModel;
use crate::error::{Error, Result};
use crate::feature::{self, FEATURE_DPI, FEATURE_RATE};
use crate::settings::{dpi_table, SAMPLE_RATES};
use crate::transport::HidTransport;
use tracing::debug;

/// Current device settings, as rendered by `show`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSettings {
    pub model: MouseModel,
    pub sample_rate: String,
    pub dpi_level: String,
}

impl std::fmt::Display for DeviceSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "model: {}", self.model)?;
        writeln!(f, "sampling_rate: {}", self.sample_rate)?;
        write!(f, "dpi_level: {}", self.dpi_level)
    }
}

/// Read both registers and map them to labels, with fallback for values the
/// tables do not document.
pub fn read_settings(transport: &dyn HidTransport, model: MouseModel) -> Result<DeviceSettings> {
    let rate_raw = feature::get_variable(transport, FEATURE_RATE)?;
    let dpi_raw = feature::get_variable(transport, FEATURE_DPI)?;

    Ok(DeviceSettings {
        model,
        sample_rate: SAMPLE_RATES.describe_raw(rate_raw),
        dpi_level: dpi_table(model).describe_raw(dpi_raw),
    })
}

/// Requested settings, as symbolic labels from the command line.
#[derive(Debug, Clone, Default)]
pub struct SettingsRequest {
    pub sample_rate: Option<String>,
    pub dpi_level: Option<String>,
}

/// Requested settings resolved to raw register values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub sample_rate: Option<u8>,
    pub dpi_level: Option<u8>,
}

/// Validate every requested label against the model's tables.
///
/// Pure lookup with no device I/O, so the caller can fail before opening
/// the handle.
pub fn resolve_settings(model: MouseModel, request: &SettingsRequest) -> Result<ResolvedSettings> {
    let sample_rate = request
        .sample_rate
        .as_deref()
        .map(|label| {
            SAMPLE_RATES.label_to_raw(label).ok_or_else(|| Error::UnknownLabel {
                kind: SAMPLE_RATES.name(),
                label: label.to_string(),
            })
        })
        .transpose()?;

    let table = dpi_table(model);
    let dpi_level = request
        .dpi_level
        .as_deref()
        .map(|label| {
            table.label_to_raw(label).ok_or_else(|| Error::UnknownLabel {
                kind: table.name(),
                label: label.to_string(),
            })
        })
        .transpose()?;

    Ok(ResolvedSettings {
        sample_rate,
        dpi_level,
    })
}

/// Write each resolved setting, rate first. No readback.
pub fn apply_settings(transport: &dyn HidTransport, resolved: &ResolvedSettings) -> Result<()> {
    if let Some(raw) = resolved.sample_rate {
        debug!(raw = format_args!("0x{raw:02X}"), "Writing sampling rate");
        feature::set_variable(transport, FEATURE_RATE, raw)?;
    }
    if let Some(raw) = resolved.dpi_level {
        debug!(raw = format_args!("0x{raw:02X}"), "Writing DPI level");
        feature::set_variable(transport, FEATURE_DPI, raw)?;
    }
    Ok(())
}
