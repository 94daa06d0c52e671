//! g400-config CLI: command-line configuration for the G400/G400s mouse.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use g400_config_core::commands::{self, SettingsRequest};
use g400_config_core::device::{self, classify_interface, InterfaceRole, Selection};
use g400_config_core::error::Error as CoreError;
use g400_config_core::trace;
use g400_config_core::transport::HidTransport;
use std::ffi::CString;

/// hidapi-backed transport for the opened control interface.
struct CliHidTransport {
    device: hidapi::HidDevice,
}

impl CliHidTransport {
    /// Open the selected control interface by platform path.
    fn open(selection: &Selection) -> Result<Self> {
        let api = hidapi::HidApi::new().context("hidapi init")?;
        let path = CString::new(selection.candidate.path.as_bytes())
            .context("device path contains NUL")?;
        let device = api.open_path(&path).with_context(|| {
            format!(
                "open HID device {} (VID=0x{:04X} PID=0x{:04X})",
                selection.candidate.path,
                selection.candidate.vendor_id,
                selection.candidate.product_id
            )
        })?;

        Ok(Self { device })
    }
}

impl HidTransport for CliHidTransport {
    fn send_feature_report(&self, data: &[u8]) -> g400_config_core::error::Result<()> {
        self.device
            .send_feature_report(data)
            .map_err(|e| CoreError::Hid(format!("send_feature_report: {e}")))
    }

    fn get_feature_report(
        &self,
        report_id: u8,
        len: usize,
    ) -> g400_config_core::error::Result<Vec<u8>> {
        let mut report = vec![0u8; len];
        report[0] = report_id;
        let n = self
            .device
            .get_feature_report(&mut report)
            .map_err(|e| CoreError::Hid(format!("get_feature_report: {e}")))?;
        report.truncate(n);
        Ok(report)
    }

    fn read_interrupt(&self, timeout_ms: i32) -> g400_config_core::error::Result<Vec<u8>> {
        let mut buf = [0u8; 8];
        let n = self
            .device
            .read_timeout(&mut buf, timeout_ms)
            .map_err(|e| CoreError::Hid(format!("read_timeout: {e}")))?;
        Ok(buf[..n].to_vec())
    }
}

/// Enumerate and select the single attached mouse's control interface.
fn select_device() -> Result<Selection> {
    let candidates = device::discover_candidates()?;
    Ok(device::select_control_interface(&candidates)?)
}

#[derive(Parser)]
#[command(
    name = "g400-config",
    version,
    about = "Configure a Logitech G400/G400s mouse without the vendor driver"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the model and current sampling-rate and DPI settings (default).
    Show,
    /// Write sampling-rate and/or DPI registers.
    Set {
        /// Sampling rate in Hz: 125, 250, 500, or 1000.
        #[arg(short = 'r', value_name = "RATE")]
        rate: Option<String>,
        /// DPI label, e.g. 400, 800, 1800, 3600, 3600_locked
        /// (G400s also: 400_locked, 800_locked, 1800_locked).
        #[arg(short = 'd', value_name = "DPI")]
        dpi: Option<String>,
    },
    /// Stream decoded button-event frames until interrupted.
    Trace,
    /// List enumerated G400-family HID interfaces.
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => {
            let selection = select_device()?;
            let transport = CliHidTransport::open(&selection)?;
            let settings = commands::read_settings(&transport, selection.model)?;
            println!("{settings}");
        }
        Commands::Set { rate, dpi } => {
            let selection = select_device()?;
            let request = SettingsRequest {
                sample_rate: rate,
                dpi_level: dpi,
            };
            // Validate every label before opening the handle, so a bad
            // argument cannot partially apply.
            let resolved = commands::resolve_settings(selection.model, &request)?;
            let transport = CliHidTransport::open(&selection)?;
            commands::apply_settings(&transport, &resolved)?;
        }
        Commands::Trace => {
            let selection = select_device()?;
            let transport = CliHidTransport::open(&selection)?;
            trace::run_trace(&transport, |event| println!("{event}"))?;
        }
        Commands::List => {
            let candidates = device::discover_candidates()?;
            if candidates.is_empty() {
                println!("none");
            }
            for candidate in &candidates {
                let role = match classify_interface(candidate) {
                    Some(InterfaceRole::Control) => "control",
                    Some(InterfaceRole::Other) => "input",
                    None => "unclassified",
                };
                let model = device::MouseModel::from_pid(candidate.product_id)
                    .map(|m| m.name())
                    .unwrap_or("unknown");
                println!("{model} {role} {}", candidate.path);
            }
        }
    }

    Ok(())
}
