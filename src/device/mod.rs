//! Removable-media device reports
//!
//! Shapes device records coming out of an external media-discovery facility
//! into the fixed report the auto-eject pipeline persists as JSON. Discovery
//! tools differ in which attributes they expose per platform, so every input
//! field other than `path` is optional; the report always carries every key
//! with an explicit default so the serialized shape is stable everywhere.

use serde::{Deserialize, Serialize};

/// A discovered device as reported by the media-discovery facility
///
/// All attributes beyond `path` are optional; platforms that cannot provide
/// one omit it or set it to null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Device node path (e.g. /dev/sdb1)
    pub path: String,

    /// Human-readable device description
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the device reports itself as removable
    #[serde(default)]
    pub is_removable: Option<bool>,

    /// Human-readable capacity (e.g. "29.7 GB")
    #[serde(default)]
    pub human_size: Option<String>,

    /// Bus the device is attached to (e.g. "usb")
    #[serde(default)]
    pub bus: Option<String>,

    /// Mountpoints, absent or empty when the device is not mounted
    #[serde(default)]
    pub mountpoints: Option<Vec<String>>,

    /// Opaque platform identifier, required verbatim by the Windows
    /// disk-offline step of the eject helper. Kept as raw JSON because its
    /// type is platform-defined (a disk number on Windows, a string on BSD).
    #[serde(default)]
    pub system_id: Option<serde_json::Value>,
}

/// Fixed-shape metadata report for one device
///
/// Every key is always present: absent attributes become `null`, a missing
/// removability flag becomes `false` and missing mountpoints become `[]`, so
/// downstream JSON consumers never probe for keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceReport {
    pub path: String,
    pub description: Option<String>,
    pub is_removable: bool,
    pub human_size: Option<String>,
    pub bus: Option<String>,
    pub mountpoints: Vec<String>,
    pub system_id: Option<serde_json::Value>,
}

impl DeviceReport {
    /// The minimal report for a path no discovered device matched
    fn not_found(path: &str) -> Self {
        Self {
            path: path.to_string(),
            description: None,
            is_removable: false,
            human_size: None,
            bus: None,
            mountpoints: Vec::new(),
            system_id: None,
        }
    }
}

/// Return the metadata report for the device whose `path` matches the target
///
/// The first matching device wins; later duplicates are ignored. `system_id`
/// is copied verbatim whenever the device exposes one, never synthesized,
/// because the downstream eject operation depends on exact identity.
pub fn describe_device(devices: &[Device], path: &str) -> DeviceReport {
    for device in devices {
        if device.path != path {
            continue;
        }

        return DeviceReport {
            path: path.to_string(),
            description: device.description.clone(),
            is_removable: device.is_removable.unwrap_or(false),
            human_size: device.human_size.clone(),
            bus: device.bus.clone(),
            mountpoints: normalize_mountpoints(device),
            system_id: device.system_id.clone(),
        };
    }

    DeviceReport::not_found(path)
}

/// Return a deterministic mountpoint list for a device
///
/// Discovery reports `mountpoints` as absent when the device has never been
/// mounted; the report normalizes that to an empty list so serialization
/// stays stable across platforms.
fn normalize_mountpoints(device: &Device) -> Vec<String> {
    device.mountpoints.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_device(path: &str) -> Device {
        Device {
            path: path.to_string(),
            description: None,
            is_removable: None,
            human_size: None,
            bus: None,
            mountpoints: None,
            system_id: None,
        }
    }

    #[test]
    fn test_describe_copies_all_fields() {
        let device = Device {
            path: "/dev/sdb1".to_string(),
            description: Some("SanDisk Ultra".to_string()),
            is_removable: Some(true),
            human_size: Some("29.7 GB".to_string()),
            bus: Some("usb".to_string()),
            mountpoints: Some(vec!["/media/usb0".to_string()]),
            system_id: Some(serde_json::json!("\\\\.\\PhysicalDrive2")),
        };

        let report = describe_device(&[device], "/dev/sdb1");
        assert_eq!(report.path, "/dev/sdb1");
        assert_eq!(report.description.as_deref(), Some("SanDisk Ultra"));
        assert!(report.is_removable);
        assert_eq!(report.human_size.as_deref(), Some("29.7 GB"));
        assert_eq!(report.bus.as_deref(), Some("usb"));
        assert_eq!(report.mountpoints, vec!["/media/usb0"]);
        assert_eq!(report.system_id, Some(serde_json::json!("\\\\.\\PhysicalDrive2")));
    }

    #[test]
    fn test_absent_attributes_default() {
        let mut device = bare_device("/dev/sdb1");
        device.system_id = Some(serde_json::json!(7));

        let report = describe_device(&[device], "/dev/sdb1");
        assert_eq!(report.mountpoints, Vec::<String>::new());
        assert!(!report.is_removable);
        assert_eq!(report.description, None);
        // Verbatim copy even when everything else is absent
        assert_eq!(report.system_id, Some(serde_json::json!(7)));
    }

    #[test]
    fn test_no_match_yields_minimal_report() {
        let report = describe_device(&[bare_device("/dev/sda1")], "/dev/sdb1");
        assert_eq!(report, DeviceReport::not_found("/dev/sdb1"));
        assert_eq!(report.path, "/dev/sdb1");
        assert_eq!(report.system_id, None);
    }

    #[test]
    fn test_first_matching_device_wins() {
        let mut first = bare_device("/dev/sdb1");
        first.bus = Some("usb".to_string());
        let mut second = bare_device("/dev/sdb1");
        second.bus = Some("scsi".to_string());

        let report = describe_device(&[first, second], "/dev/sdb1");
        assert_eq!(report.bus.as_deref(), Some("usb"));
    }

    #[test]
    fn test_report_json_shape_is_stable() {
        let report = describe_device(&[bare_device("/dev/sdb1")], "/dev/sdb1");
        let json = serde_json::to_value(&report).unwrap();

        // Every key present even when the device exposed nothing
        let obj = json.as_object().unwrap();
        for key in [
            "path",
            "description",
            "is_removable",
            "human_size",
            "bus",
            "mountpoints",
            "system_id",
        ] {
            assert!(obj.contains_key(key), "missing key: {}", key);
        }
        assert_eq!(json["mountpoints"], serde_json::json!([]));
        assert_eq!(json["system_id"], serde_json::Value::Null);
    }

    #[test]
    fn test_device_list_roundtrip_from_discovery_json() {
        // Discovery facilities omit attributes they cannot provide
        let raw = r#"[{"path": "/dev/sdb1", "bus": "usb"}]"#;
        let devices: Vec<Device> = serde_json::from_str(raw).unwrap();

        let report = describe_device(&devices, "/dev/sdb1");
        assert_eq!(report.bus.as_deref(), Some("usb"));
        assert_eq!(report.mountpoints, Vec::<String>::new());
    }
}
