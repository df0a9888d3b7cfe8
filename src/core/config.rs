//! Session configuration shared by every session of a deployment.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::{ItemId, Result};

/// Deployment-wide settings read by sessions. Read-only once sessions exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Item used for pick-based region selection (wooden axe by default).
    pub wand_item: ItemId,
    /// Item used for navigation (compass by default).
    pub navigation_wand: ItemId,
    /// Print the version notice the first time a session is used.
    pub show_first_use_version: bool,
    /// Maximum number of edits kept for undo, per session.
    pub history_capacity: usize,
    /// Block change limit given to new sessions. `None` = unlimited.
    pub default_change_limit: Option<usize>,
    /// Upper bound a session may raise its change limit to. `None` = no bound.
    pub max_change_limit: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            wand_item: 271,
            navigation_wand: 345,
            show_first_use_version: true,
            history_capacity: 15,
            default_change_limit: None,
            max_change_limit: None,
        }
    }
}

impl SessionConfig {
    /// Parse a config from JSON text. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("Loaded session config from {}", path.display());
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(Error::Config("history_capacity must be at least 1".into()));
        }
        if self.wand_item == self.navigation_wand {
            return Err(Error::Config(format!(
                "wand_item and navigation_wand are both {}",
                self.wand_item
            )));
        }
        if let (Some(default_limit), Some(max)) = (self.default_change_limit, self.max_change_limit) {
            if default_limit > max {
                return Err(Error::Config(format!(
                    "default_change_limit {} exceeds max_change_limit {}",
                    default_limit, max
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.wand_item, 271);
        assert_eq!(config.navigation_wand, 345);
        assert_eq!(config.history_capacity, 15);
        assert!(config.show_first_use_version);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SessionConfig::from_json_str(r#"{ "wand_item": 260 }"#).unwrap();
        assert_eq!(config.wand_item, 260);
        assert_eq!(config.navigation_wand, 345);
        assert_eq!(config.history_capacity, 15);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let result = SessionConfig::from_json_str(r#"{ "history_capacity": 0 }"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_shared_wand_item() {
        let result = SessionConfig::from_json_str(r#"{ "wand_item": 345 }"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_default_limit_above_max() {
        let result = SessionConfig::from_json_str(
            r#"{ "default_change_limit": 5000, "max_change_limit": 1000 }"#,
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = SessionConfig::from_json_str("{ wand_item: }");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "history_capacity": 4, "show_first_use_version": false }}"#).unwrap();

        let config = SessionConfig::load(file.path()).unwrap();
        assert_eq!(config.history_capacity, 4);
        assert!(!config.show_first_use_version);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SessionConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
