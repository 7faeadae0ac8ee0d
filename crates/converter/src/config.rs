// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Converter configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! name = "iris-svc"
//! doc_string = "SVC trained on iris"
//! targeted_onnx = "1.2"
//! float_precision = 16
//! model_version = 3
//! ```

use model_ir::{ModelComponentContainer, OnnxVersion};
use std::path::Path;

/// Default ONNX release targeted by conversions.
pub const DEFAULT_TARGETED_ONNX: &str = "1.3.0";

/// Producer name stamped on assembled models.
pub const PRODUCER_NAME: &str = "onnx-graph-builder";

/// Configuration for one model conversion.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Graph name.
    pub name: String,
    /// Model documentation.
    pub doc_string: String,
    /// ONNX release the produced model must be valid for (e.g. `"1.2"`).
    pub targeted_onnx: String,
    /// Float width in bits: `32` or `16`.
    pub float_precision: u32,
    /// Model domain (reverse-DNS), usually empty.
    pub domain: String,
    pub producer_name: String,
    pub producer_version: String,
    pub model_version: i64,
}

impl ConverterConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, super::ConvertError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            super::ConvertError::ConfigError(format!(
                "cannot read config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, super::ConvertError> {
        toml::from_str(toml_str).map_err(|e| {
            super::ConvertError::ConfigError(format!("TOML parse error: {e}"))
        })
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, super::ConvertError> {
        toml::to_string_pretty(self).map_err(|e| {
            super::ConvertError::ConfigError(format!("TOML serialise error: {e}"))
        })
    }

    /// Parses the targeted ONNX release.
    pub fn targeted_version(&self) -> Result<OnnxVersion, super::ConvertError> {
        Ok(OnnxVersion::parse(&self.targeted_onnx)?)
    }

    /// Creates an empty graph component container for this configuration.
    pub fn create_container(&self) -> Result<ModelComponentContainer, super::ConvertError> {
        Ok(ModelComponentContainer::new(
            &self.targeted_onnx,
            self.float_precision,
        )?)
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            name: "model".to_string(),
            doc_string: String::new(),
            targeted_onnx: DEFAULT_TARGETED_ONNX.to_string(),
            float_precision: 32,
            domain: String::new(),
            producer_name: PRODUCER_NAME.to_string(),
            producer_version: env!("CARGO_PKG_VERSION").to_string(),
            model_version: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConvertError;
    use model_ir::{FloatPrecision, GraphError};

    #[test]
    fn test_default() {
        let c = ConverterConfig::default();
        assert_eq!(c.targeted_onnx, "1.3.0");
        assert_eq!(c.float_precision, 32);
        assert_eq!(c.producer_name, PRODUCER_NAME);
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
name = "iris-svc"
doc_string = "SVC trained on iris"
targeted_onnx = "1.2"
float_precision = 16
model_version = 3
"#;
        let c = ConverterConfig::from_toml(toml).unwrap();
        assert_eq!(c.name, "iris-svc");
        assert_eq!(c.targeted_onnx, "1.2");
        assert_eq!(c.float_precision, 16);
        assert_eq!(c.model_version, 3);
        // Unset keys fall back to defaults.
        assert_eq!(c.producer_name, PRODUCER_NAME);
    }

    #[test]
    fn test_from_toml_error() {
        assert!(matches!(
            ConverterConfig::from_toml("float_precision = \"sixteen\""),
            Err(ConvertError::ConfigError(_))
        ));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = ConverterConfig {
            name: "roundtrip".into(),
            float_precision: 16,
            ..Default::default()
        };
        let toml = c.to_toml().unwrap();
        let back = ConverterConfig::from_toml(&toml).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convert.toml");
        std::fs::write(&path, "targeted_onnx = \"1.1.2\"\n").unwrap();
        let c = ConverterConfig::from_file(&path).unwrap();
        assert_eq!(c.targeted_version().unwrap(), OnnxVersion::new(1, 1, 2));

        let err = ConverterConfig::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read config"));
    }

    #[test]
    fn test_create_container() {
        let c = ConverterConfig {
            float_precision: 16,
            ..Default::default()
        };
        let container = c.create_container().unwrap();
        assert_eq!(container.float_precision(), FloatPrecision::Half);
        assert_eq!(container.targeted_onnx_version(), OnnxVersion::new(1, 3, 0));
    }

    #[test]
    fn test_create_container_rejects_bad_precision() {
        let c = ConverterConfig {
            float_precision: 64,
            ..Default::default()
        };
        assert!(matches!(
            c.create_container(),
            Err(ConvertError::GraphError(GraphError::InvalidConfiguration(_)))
        ));
    }
}
