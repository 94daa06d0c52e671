//! Integration tests: exercise the full flows using a simulated mouse.
//!
//! These tests drive the same select→resolve→read/write pipeline the CLI
//! uses, against a mock transport standing in for the hardware.

#[cfg(test)]
mod tests {
    use crate::commands::{self, SettingsRequest};
    use crate::device::{self, DeviceCandidate, MouseModel};
    use crate::feature::{FEATURE_DPI, FEATURE_RATE};
    use crate::trace::{self, TraceEvent};
    use crate::transport::mock::MockTransport;
    use crate::{pids, LOGITECH_VID};

    fn attached_mouse(pid: u16) -> Vec<DeviceCandidate> {
        vec![
            DeviceCandidate {
                vendor_id: LOGITECH_VID,
                product_id: pid,
                interface_number: 0,
                path: "/dev/hidraw0".into(),
            },
            DeviceCandidate {
                vendor_id: LOGITECH_VID,
                product_id: pid,
                interface_number: 1,
                path: "/dev/hidraw1".into(),
            },
        ]
    }

    /// A mock with both registers at the factory-ish defaults.
    fn factory_mock() -> MockTransport {
        let mock = MockTransport::new();
        mock.set_register(FEATURE_RATE, 0x01); // 500 Hz
        mock.set_register(FEATURE_DPI, 0x04); // 800 DPI
        mock
    }

    #[test]
    fn show_flow_g400() {
        let selection = device::select_control_interface(&attached_mouse(pids::G400)).unwrap();
        let mock = factory_mock();

        let settings = commands::read_settings(&mock, selection.model).unwrap();
        assert_eq!(
            settings.to_string(),
            "model: G400\nsampling_rate: 500\ndpi_level: 800"
        );
    }

    #[test]
    fn set_flow_writes_both_registers_in_order() {
        let selection = device::select_control_interface(&attached_mouse(pids::G400)).unwrap();
        let mock = MockTransport::new();

        let request = SettingsRequest {
            sample_rate: Some("500".into()),
            dpi_level: Some("3600".into()),
        };
        let resolved = commands::resolve_settings(selection.model, &request).unwrap();
        commands::apply_settings(&mock, &resolved).unwrap();

        assert_eq!(mock.writes(), vec![vec![0x20, 0x01], vec![0x8E, 0x06]]);
        assert_eq!(mock.reads(), 0);
    }

    #[test]
    fn set_flow_bad_label_issues_zero_writes() {
        let selection = device::select_control_interface(&attached_mouse(pids::G400S)).unwrap();
        let mock = MockTransport::new();

        let request = SettingsRequest {
            sample_rate: Some("500".into()),
            dpi_level: Some("BAD_LABEL".into()),
        };
        let result = commands::resolve_settings(selection.model, &request);
        assert!(result.is_err());
        assert!(mock.writes().is_empty());
    }

    #[test]
    fn set_then_show_reflects_new_values() {
        let mock = factory_mock();

        let request = SettingsRequest {
            sample_rate: Some("125".into()),
            dpi_level: Some("1800_locked".into()),
        };
        let resolved = commands::resolve_settings(MouseModel::G400s, &request).unwrap();
        commands::apply_settings(&mock, &resolved).unwrap();

        let settings = commands::read_settings(&mock, MouseModel::G400s).unwrap();
        assert_eq!(settings.sample_rate, "125");
        assert_eq!(settings.dpi_level, "1800_locked");
    }

    #[test]
    fn locked_dpi_raw_values_differ_per_model() {
        let request = SettingsRequest {
            sample_rate: None,
            dpi_level: Some("3600_locked".into()),
        };
        let g400 = commands::resolve_settings(MouseModel::G400, &request).unwrap();
        let g400s = commands::resolve_settings(MouseModel::G400s, &request).unwrap();
        assert_eq!(g400.dpi_level, Some(0x07));
        assert_eq!(g400s.dpi_level, Some(0x0A));
    }

    #[test]
    fn trace_flow_renders_button_and_unknown_frames() {
        let mock = MockTransport::new();
        mock.push_frame(&[0x80, 0b0000_0101]);
        mock.push_frame(&[]);
        mock.push_frame(&[0x12, 0x34]);
        mock.push_frame(&[0x80, 0x00]);

        let mut lines = Vec::new();
        let _ = trace::run_trace(&mock, |event: TraceEvent| lines.push(event.to_string()));

        assert_eq!(lines, vec!["pressed: 0 2", "unknown: 12 34", "pressed:"]);
    }
}
