//! Serializable settings for rolling toggles.
//!
//! Every field has a default, so `{}` is a valid configuration:
//!
//! ```json
//! { "rotation_count": 2, "axis": "vertical", "animation": { "curve": "linear", "duration": 0.3 } }
//! ```

use std::path::{Path, PathBuf};

use rollkit_core::Animation;
use serde::{Deserialize, Serialize};

use crate::Axis;

/// Errors raised while loading a [`RollingConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The text is not a valid configuration, including negative rotation counts.
    #[error("invalid rolling toggle configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How a rolling toggle turns and moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollingConfig {
    /// Full turns made when switching off. `0` only cross-fades.
    pub rotation_count: u32,
    /// The direction the toggle rolls along.
    pub axis: Axis,
    /// The curve used when a tap switches the toggle.
    pub animation: Animation,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            rotation_count: 1,
            axis: Axis::Horizontal,
            animation: Animation::bouncy(),
        }
    }
}

impl RollingConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed input or out-of-range values.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Renders this configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded rolling toggle config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        assert_eq!(RollingConfig::from_json("{}").unwrap(), RollingConfig::default());
    }

    #[test]
    fn parses_every_field() {
        let config = RollingConfig::from_json(
            r#"{
                "rotation_count": 3,
                "axis": "vertical",
                "animation": { "curve": "ease_in_out", "duration": 0.25 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.rotation_count, 3);
        assert_eq!(config.axis, Axis::Vertical);
        assert_eq!(config.animation, Animation::EaseInOut { duration: 0.25 });
    }

    #[test]
    fn negative_rotation_count_is_rejected() {
        let err = RollingConfig::from_json(r#"{ "rotation_count": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_axis_is_rejected() {
        assert!(RollingConfig::from_json(r#"{ "axis": "diagonal" }"#).is_err());
    }

    #[test]
    fn json_output_reads_back() {
        let config = RollingConfig {
            rotation_count: 2,
            axis: Axis::Vertical,
            animation: Animation::smooth(),
        };
        let text = config.to_json().unwrap();
        assert_eq!(RollingConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RollingConfig::load("/definitely/not/here.json").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, PathBuf::from("/definitely/not/here.json")),
            ConfigError::Parse(other) => panic!("unexpected parse error: {other}"),
        }
    }
}
