// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! JSON model descriptions.
//!
//! Some model formats ship a description of their interface next to the
//! parameters: the features the model reads and the features it predicts.
//! [`ModelDescription`] is that interface, in the order the model declares it.
//!
//! # Format
//! ```json
//! {
//!   "name": "iris-svc",
//!   "inputs": [
//!     { "name": "input", "type": { "tensor": { "elem_type": "float", "shape": { "dims": [{ "value": 1 }, { "value": 3 }] } } } }
//!   ],
//!   "outputs": [
//!     { "name": "classLabel", "type": { "scalar": "int64" } },
//!     { "name": "classProbability", "short_description": "per-class probabilities", "type": { ... } }
//!   ],
//!   "predicted_feature_name": "classLabel"
//! }
//! ```

use crate::SourceError;
use model_ir::VariableType;
use std::collections::HashSet;
use std::path::Path;

/// One named input or output feature.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeatureDescription {
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(rename = "type")]
    pub ty: VariableType,
}

/// The declared interface of a source model.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModelDescription {
    #[serde(default)]
    pub name: String,
    pub inputs: Vec<FeatureDescription>,
    pub outputs: Vec<FeatureDescription>,
    /// Output that carries the predicted label, for classifiers.
    #[serde(default)]
    pub predicted_feature_name: Option<String>,
    /// Output that carries class probabilities, for classifiers.
    #[serde(default)]
    pub predicted_probabilities_name: Option<String>,
}

impl ModelDescription {
    /// Loads a description from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let description: Self = serde_json::from_str(json)?;
        Ok(description)
    }

    /// Checks that the description is internally consistent.
    ///
    /// Checks:
    /// - Every feature has a non-empty name.
    /// - No duplicate names among inputs, nor among outputs.
    /// - The predicted feature names, when given, refer to outputs.
    pub fn validate(&self) -> Result<(), SourceError> {
        for (role, features) in [("input", &self.inputs), ("output", &self.outputs)] {
            let mut seen = HashSet::new();
            for feature in features {
                if feature.name.is_empty() {
                    return Err(SourceError::InvalidDescription(format!(
                        "{role} feature with an empty name"
                    )));
                }
                if !seen.insert(feature.name.as_str()) {
                    return Err(SourceError::InvalidDescription(format!(
                        "duplicate {role} feature '{}'",
                        feature.name
                    )));
                }
            }
        }

        for predicted in [&self.predicted_feature_name, &self.predicted_probabilities_name]
            .into_iter()
            .flatten()
        {
            if !self.outputs.iter().any(|f| &f.name == predicted) {
                return Err(SourceError::InvalidDescription(format!(
                    "predicted feature '{predicted}' is not an output"
                )));
            }
        }

        if self.inputs.is_empty() {
            tracing::warn!("model description '{}' declares no inputs", self.name);
        }
        Ok(())
    }

    /// Looks up a feature among inputs, then outputs.
    pub fn feature(&self, name: &str) -> Option<&FeatureDescription> {
        self.inputs
            .iter()
            .chain(&self.outputs)
            .find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensor_core::DType;

    const IRIS: &str = r#"{
        "name": "iris-svc",
        "inputs": [
            { "name": "input", "type": { "tensor": { "elem_type": "float", "shape": { "dims": [{ "value": 1 }, { "value": 3 }] } } } }
        ],
        "outputs": [
            { "name": "classLabel", "type": { "scalar": "int64" } },
            { "name": "classProbability", "short_description": "per-class probabilities",
              "type": { "dictionary": { "key_type": "int64", "value_type": { "scalar": "double" } } } }
        ],
        "predicted_feature_name": "classLabel",
        "predicted_probabilities_name": "classProbability"
    }"#;

    #[test]
    fn test_parse() {
        let d = ModelDescription::from_json(IRIS).unwrap();
        assert_eq!(d.name, "iris-svc");
        assert_eq!(d.inputs.len(), 1);
        assert_eq!(d.inputs[0].ty, VariableType::float_tensor([1, 3]));
        assert_eq!(d.outputs[0].ty, VariableType::Scalar(DType::Int64));
        assert_eq!(d.outputs[1].short_description, "per-class probabilities");
        d.validate().unwrap();
    }

    #[test]
    fn test_feature_lookup() {
        let d = ModelDescription::from_json(IRIS).unwrap();
        assert!(d.feature("input").is_some());
        assert!(d.feature("classProbability").is_some());
        assert!(d.feature("missing").is_none());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            ModelDescription::from_json("{ not json"),
            Err(SourceError::DescriptionParse(_))
        ));
    }

    #[test]
    fn test_duplicate_output_rejected() {
        let mut d = ModelDescription::from_json(IRIS).unwrap();
        d.outputs[1].name = "classLabel".into();
        d.predicted_probabilities_name = None;
        let err = d.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate output feature 'classLabel'"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut d = ModelDescription::from_json(IRIS).unwrap();
        d.inputs[0].name.clear();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_predicted_name_must_be_output() {
        let mut d = ModelDescription::from_json(IRIS).unwrap();
        d.predicted_feature_name = Some("input".into());
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("description.json");
        std::fs::write(&path, IRIS).unwrap();
        let d = ModelDescription::from_file(&path).unwrap();
        assert_eq!(d.outputs.len(), 2);

        assert!(matches!(
            ModelDescription::from_file(&dir.path().join("missing.json")),
            Err(SourceError::DescriptionRead(_))
        ));
    }
}
