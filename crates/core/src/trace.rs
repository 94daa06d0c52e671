//! Interrupt-frame decoder for `trace` mode.
//!
//! The control interface emits 2-byte frames `[0x80, bitmask]` on button
//! state changes, including the DPI+/DPI- buttons that never reach the
//! ordinary input interface. The rest of the frame vocabulary is not
//! reverse-engineered, so anything else passes through as raw hex.

use crate::error::Result;
use crate::transport::HidTransport;
use tracing::trace;

/// Per-read timeout for the interrupt channel.
pub const INTERRUPT_READ_TIMEOUT_MS: i32 = 1000;

/// Header byte of a button-state frame.
const BUTTON_FRAME_HEADER: u8 = 0x80;

/// One decoded interrupt frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// Button-state frame: bit i set means button i is currently pressed.
    Buttons(u8),
    /// Undocumented frame, passed through for diagnosis.
    Unknown(Vec<u8>),
}

impl std::fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buttons(mask) => {
                write!(f, "pressed:")?;
                for bit in 0..8 {
                    if mask & (1 << bit) != 0 {
                        write!(f, " {bit}")?;
                    }
                }
                Ok(())
            }
            Self::Unknown(bytes) => {
                write!(f, "unknown:")?;
                for byte in bytes {
                    write!(f, " {byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}

/// Decode one interrupt frame. An empty frame (read timeout) yields nothing.
pub fn decode_frame(frame: &[u8]) -> Option<TraceEvent> {
    match *frame {
        [] => None,
        [BUTTON_FRAME_HEADER, mask] => Some(TraceEvent::Buttons(mask)),
        _ => Some(TraceEvent::Unknown(frame.to_vec())),
    }
}

/// Read and decode interrupt frames until the transport fails.
///
/// Each frame is decoded independently; timeouts produce no event and the
/// loop continues. In real use this runs until the operator interrupts the
/// process.
pub fn run_trace(
    transport: &dyn HidTransport,
    mut sink: impl FnMut(TraceEvent),
) -> Result<()> {
    loop {
        let frame = transport.read_interrupt(INTERRUPT_READ_TIMEOUT_MS)?;
        trace!(frame_hex = format_args!("{frame:02X?}"), "interrupt RX");
        if let Some(event) = decode_frame(&frame) {
            sink(event);
        }
    }
}
