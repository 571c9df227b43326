//! Design file reading and writing.
//!
//! Save files wrap the design payload in a metadata envelope; the loader
//! also accepts the legacy format where the top-level object *is* the
//! design (detected by the absence of a `design` key). All writes go
//! through a temp file and rename so a failed write never clobbers an
//! existing save.

use super::{StorageError, StorageResult};
use crate::components::ComponentType;
use crate::schema::DesignData;
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Application name written into save metadata.
pub const APP_NAME: &str = "WireDraft - UI Wireframe Designer";

/// Save file format version.
pub const FILE_VERSION: &str = "1.0";

/// Metadata envelope of a save file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMetadata {
    pub version: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    pub app_name: String,
    /// Set on autosave files so recovery can tell them apart.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_save: bool,
    /// For autosave files, the user's last explicit save target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_file: Option<PathBuf>,
}

impl SaveMetadata {
    /// Metadata for a regular save, stamped now.
    pub fn new() -> Self {
        Self {
            version: FILE_VERSION.to_string(),
            created_at: Utc::now().to_rfc3339(),
            app_name: APP_NAME.to_string(),
            auto_save: false,
            original_file: None,
        }
    }
}

impl Default for SaveMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete save file: metadata plus the design payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFile {
    pub metadata: SaveMetadata,
    pub design: DesignData,
}

/// Save a design to `path`, wrapped in fresh metadata. Parent directories
/// are created as needed.
pub fn save_design(data: &DesignData, path: &Path) -> StorageResult<()> {
    let save_file = SaveFile {
        metadata: SaveMetadata::new(),
        design: data.clone(),
    };
    write_json(path, &save_file)
}

/// Export the bare design payload as JSON, without the metadata envelope.
pub fn export_design(data: &DesignData, path: &Path) -> StorageResult<()> {
    write_json(path, data)
}

/// Serialize `value` and atomically replace `path` with it.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> StorageResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| StorageError::Serialization(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::Io(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)
        .map_err(|e| StorageError::Io(format!("failed to write {}: {e}", tmp.display())))?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        StorageError::Io(format!("failed to replace {}: {e}", path.display()))
    })
}

/// Load a design from `path`, accepting both wrapped and legacy formats.
pub fn load_design(path: &Path) -> StorageResult<DesignData> {
    if !path.exists() {
        return Err(StorageError::NotFound(path.display().to_string()));
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("failed to read {}: {e}", path.display())))?;
    parse_design(&raw)
}

/// Parse design JSON, accepting both wrapped and legacy formats. The
/// design payload is validated before it is handed to the typed parser so
/// malformed files fail with an indexed, human-readable cause.
pub fn parse_design(raw: &str) -> StorageResult<DesignData> {
    let mut value: Value = serde_json::from_str(raw)
        .map_err(|e| StorageError::Serialization(format!("invalid JSON: {e}")))?;

    let design = if value.get("design").is_some() {
        if let Some(version) = value.pointer("/metadata/version").and_then(Value::as_str) {
            if version != FILE_VERSION {
                log::warn!("file version {version} may not be fully compatible");
            }
        }
        value
            .get_mut("design")
            .map(Value::take)
            .unwrap_or_default()
    } else {
        // Legacy format: the whole object is the design data.
        value
    };

    validate_design_value(&design)?;
    serde_json::from_value(design).map_err(|e| StorageError::Validation(e.to_string()))
}

/// Validate a design payload: `components` (when present) must be an array
/// of component objects carrying the required fields, a known type, and
/// numeric geometry. Group children are validated recursively.
pub fn validate_design_value(design: &Value) -> StorageResult<()> {
    let Some(object) = design.as_object() else {
        return Err(StorageError::Validation(
            "design data must be an object".to_string(),
        ));
    };
    // A missing component list is tolerated and loads as an empty design.
    let Some(components) = object.get("components") else {
        return Ok(());
    };
    let Some(list) = components.as_array() else {
        return Err(StorageError::Validation(
            "'components' must be an array".to_string(),
        ));
    };

    for (index, component) in list.iter().enumerate() {
        validate_component_value(&format!("component {index}"), component)?;
    }
    Ok(())
}

fn validate_component_value(context: &str, component: &Value) -> StorageResult<()> {
    let Some(object) = component.as_object() else {
        return Err(StorageError::Validation(format!(
            "{context} must be an object"
        )));
    };

    for field in ["id", "type", "x", "y", "width", "height"] {
        if !object.contains_key(field) {
            return Err(StorageError::Validation(format!(
                "{context} is missing required field '{field}'"
            )));
        }
    }

    match object.get("type").and_then(Value::as_str) {
        Some(name) if ComponentType::parse(name).is_some() => {}
        Some(name) => {
            return Err(StorageError::Validation(format!(
                "{context} has invalid type '{name}'"
            )));
        }
        None => {
            return Err(StorageError::Validation(format!(
                "{context} field 'type' must be a string"
            )));
        }
    }

    for field in ["x", "y", "width", "height"] {
        if !object.get(field).is_some_and(Value::is_number) {
            return Err(StorageError::Validation(format!(
                "{context} field '{field}' must be numeric"
            )));
        }
    }

    if let Some(children) = object.get("children").and_then(Value::as_array) {
        for (index, child) in children.iter().enumerate() {
            validate_component_value(&format!("{context} child {index}"), child)?;
        }
    }
    Ok(())
}

/// Write a timestamped copy of the design into a `backups/` directory next
/// to the original file. Returns the backup path.
pub fn create_backup(data: &DesignData, original_path: &Path) -> StorageResult<PathBuf> {
    let stem = original_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("design");
    let extension = original_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("json");
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");

    let backup_path = original_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("backups")
        .join(format!("{stem}_backup_{timestamp}.{extension}"));

    save_design(data, &backup_path)?;
    Ok(backup_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Component, ComponentType};
    use tempfile::tempdir;

    fn sample_design() -> DesignData {
        let components = vec![
            Component::create(ComponentType::Rectangle, 10.0, 10.0),
            Component::create(ComponentType::Button, 300.0, 40.0),
        ];
        DesignData::new(components.iter().map(Component::to_record).collect())
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mockup.json");
        let design = sample_design();

        save_design(&design, &path).unwrap();
        let loaded = load_design(&path).unwrap();

        assert_eq!(loaded, design);
    }

    #[test]
    fn test_save_writes_metadata_envelope() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mockup.json");
        save_design(&sample_design(), &path).unwrap();

        let value: Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["metadata"]["version"], FILE_VERSION);
        assert_eq!(value["metadata"]["app_name"], APP_NAME);
        assert!(value["metadata"]["created_at"].is_string());
        assert!(value["design"]["components"].is_array());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mockup.json");
        save_design(&sample_design(), &path).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["mockup.json".to_string()]);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("mockup.json");
        save_design(&sample_design(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let result = load_design(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_json_is_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        let result = load_design(&path);
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_legacy_format_loads_like_wrapped() {
        let design = sample_design();
        let legacy = serde_json::to_string(&design).unwrap();
        let parsed = parse_design(&legacy).unwrap();
        assert_eq!(parsed, design);
    }

    #[test]
    fn test_missing_components_defaults_to_empty() {
        let parsed = parse_design(r#"{"version": "1.0"}"#).unwrap();
        assert!(parsed.components.is_empty());
    }

    #[test]
    fn test_unknown_component_type_is_rejected() {
        let raw = r#"{"components": [
            {"id": "5e2c3f1a-0000-4000-8000-000000000001", "type": "ellipse",
             "x": 0, "y": 0, "width": 10, "height": 10}
        ]}"#;
        let result = parse_design(raw);
        let Err(StorageError::Validation(message)) = result else {
            panic!("expected a validation error");
        };
        assert!(message.contains("invalid type 'ellipse'"));
        assert!(message.contains("component 0"));
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let raw = r#"{"components": [
            {"id": "5e2c3f1a-0000-4000-8000-000000000001", "type": "button",
             "x": 0, "y": 0, "width": 10}
        ]}"#;
        let Err(StorageError::Validation(message)) = parse_design(raw) else {
            panic!("expected a validation error");
        };
        assert!(message.contains("missing required field 'height'"));
    }

    #[test]
    fn test_non_numeric_geometry_is_rejected() {
        let raw = r#"{"components": [
            {"id": "5e2c3f1a-0000-4000-8000-000000000001", "type": "button",
             "x": "left", "y": 0, "width": 10, "height": 10}
        ]}"#;
        let Err(StorageError::Validation(message)) = parse_design(raw) else {
            panic!("expected a validation error");
        };
        assert!(message.contains("'x' must be numeric"));
    }

    #[test]
    fn test_group_children_are_validated() {
        let raw = r#"{"components": [
            {"id": "5e2c3f1a-0000-4000-8000-000000000001", "type": "group",
             "x": 0, "y": 0, "width": 100, "height": 100,
             "children": [
                {"id": "5e2c3f1a-0000-4000-8000-000000000002", "type": "star",
                 "x": 0, "y": 0, "width": 10, "height": 10}
             ]}
        ]}"#;
        let Err(StorageError::Validation(message)) = parse_design(raw) else {
            panic!("expected a validation error");
        };
        assert!(message.contains("child 0"));
        assert!(message.contains("invalid type 'star'"));
    }

    #[test]
    fn test_export_omits_metadata() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("export.json");
        export_design(&sample_design(), &path).unwrap();

        let value: Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value.get("metadata").is_none());
        assert!(value["components"].is_array());
    }

    #[test]
    fn test_create_backup_under_backups_dir() {
        let dir = tempdir().unwrap();
        let original = dir.path().join("mockup.json");
        save_design(&sample_design(), &original).unwrap();

        let backup = create_backup(&sample_design(), &original).unwrap();
        assert!(backup.exists());
        assert_eq!(backup.parent().unwrap(), dir.path().join("backups"));
        let name = backup.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("mockup_backup_"));
        assert!(name.ends_with(".json"));
    }
}
