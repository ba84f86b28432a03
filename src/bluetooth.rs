// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Mapping, Value};
use crate::report::{get, get_bool};

/// Command line that produces the Bluetooth report on macOS.
pub const SYSTEM_PROFILER_COMMAND: [&str; 2] = ["system_profiler", "SPBluetoothDataType"];

pub const BLUETOOTH_SECTION: &str = "Bluetooth";
pub const DEVICES_SECTION: &str = "Devices (Paired, Configured, etc.)";
pub const CONNECTED_KEY: &str = "Connected";

/// Whether `device` is listed as connected. Unknown devices count as disconnected.
pub fn device_connected(tree: &Mapping, device: &str) -> bool {
    get_bool(tree, &[BLUETOOTH_SECTION, DEVICES_SECTION, device, CONNECTED_KEY])
}

/// Names of all paired devices, in report order.
pub fn paired_devices(tree: &Mapping) -> Vec<&str> {
    match get(tree, &[BLUETOOTH_SECTION, DEVICES_SECTION]) {
        Ok(Value::Mapping(devices)) => devices
            .iter()
            .filter(|(_, v)| matches!(v, Value::Mapping(_)))
            .map(|(k, _)| k.as_str())
            .collect(),
        _ => Vec::new(),
    }
}

/// Names of the devices currently connected.
pub fn connected_devices(tree: &Mapping) -> Vec<&str> {
    paired_devices(tree)
        .into_iter()
        .filter(|name| device_connected(tree, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_str;

    const REPORT: &str = "Bluetooth:\n\n      Apple Bluetooth Software Version: 6.0.7f16\n      Devices (Paired, Configured, etc.):\n          Magic Keyboard:\n              Connected: No\n          Studio Headphones:\n              Address: 00-11-22-33-44-55\n              Connected: Yes\n          Orphan Note: none\n";

    #[test]
    fn test_device_connected() {
        let tree = parse_str(REPORT).unwrap();
        assert!(device_connected(&tree, "Studio Headphones"));
        assert!(!device_connected(&tree, "Magic Keyboard"));
        assert!(!device_connected(&tree, "Unknown Device"));
    }

    #[test]
    fn test_paired_and_connected_devices() {
        let tree = parse_str(REPORT).unwrap();
        assert_eq!(paired_devices(&tree), vec!["Magic Keyboard", "Studio Headphones"]);
        assert_eq!(connected_devices(&tree), vec!["Studio Headphones"]);
    }

    #[test]
    fn test_missing_bluetooth_section() {
        let tree = parse_str("Power: On\n").unwrap();
        assert!(paired_devices(&tree).is_empty());
        assert!(!device_connected(&tree, "Anything"));
    }
}
