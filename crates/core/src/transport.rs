//! HID transport abstraction for device communication.
//!
//! Provides a trait-based transport layer so that real HID devices and
//! mock devices share the same interface. The core never touches hidapi
//! handles directly; the CLI supplies the real implementation.

use crate::error::Result;

/// Abstraction over the HID channels this tool uses.
///
/// Implementations must cover both the feature-report (control) channel and
/// the interrupt (input-report) channel of the already-opened config
/// interface.
pub trait HidTransport: Send {
    /// Send a feature report. `data[0]` is the report id.
    fn send_feature_report(&self, data: &[u8]) -> Result<()>;

    /// Request a feature report of `len` bytes tagged with `report_id`.
    ///
    /// The returned bytes include the leading report-id/echo byte.
    fn get_feature_report(&self, report_id: u8, len: usize) -> Result<Vec<u8>>;

    /// Blocking read of one interrupt report, up to `timeout_ms`.
    ///
    /// Returns an empty vec when the timeout elapsed with no data.
    fn read_interrupt(&self, timeout_ms: i32) -> Result<Vec<u8>>;
}


#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;

    #[test]
    fn mock_round_trips_registers() {
        let mock = MockTransport::new();
        mock.set_register(0x20, 0x01);

        let report = mock.get_feature_report(0x20, 2).unwrap();
        assert_eq!(report, vec![0x20, 0x01]);
    }

    #[test]
    fn mock_records_writes_in_order() {
        let mock = MockTransport::new();
        mock.send_feature_report(&[0x20, 0x03]).unwrap();
        mock.send_feature_report(&[0x8E, 0x04]).unwrap();

        assert_eq!(mock.writes(), vec![vec![0x20, 0x03], vec![0x8E, 0x04]]);
    }

    #[test]
    fn mock_write_updates_register() {
        let mock = MockTransport::new();
        mock.send_feature_report(&[0x8E, 0x05]).unwrap();

        let report = mock.get_feature_report(0x8E, 2).unwrap();
        assert_eq!(report[1], 0x05);
    }

    #[test]
    fn mock_errors_on_unknown_register() {
        let mock = MockTransport::new();
        assert!(mock.get_feature_report(0x42, 2).is_err());
    }

    #[test]
    fn mock_replays_interrupt_frames() {
        let mock = MockTransport::new();
        mock.push_frame(&[0x80, 0x01]);
        mock.push_frame(&[]);

        assert_eq!(mock.read_interrupt(1000).unwrap(), vec![0x80, 0x01]);
        assert_eq!(mock.read_interrupt(1000).unwrap(), Vec::<u8>::new());
        assert!(mock.read_interrupt(1000).is_err());
    }
}
