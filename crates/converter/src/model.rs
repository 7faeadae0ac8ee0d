// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Graph and model assembly.
//!
//! Once every converter has run, the container's collections become a
//! [`GraphProto`], wrapped in a [`ModelProto`] whose operator-set imports
//! are derived from the (domain, version) pairs the nodes used.

use crate::{ConvertError, ConverterConfig};
use model_ir::{GraphComponents, NodeProto, OnnxVersion, ValueInfoProto};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tensor_core::TensorProto;

/// First ONNX release for each IR version, newest first.
const IR_VERSIONS: [(OnnxVersion, i64); 7] = [
    (OnnxVersion::new(1, 16, 0), 10),
    (OnnxVersion::new(1, 14, 0), 9),
    (OnnxVersion::new(1, 10, 0), 8),
    (OnnxVersion::new(1, 7, 0), 7),
    (OnnxVersion::new(1, 6, 0), 6),
    (OnnxVersion::new(1, 5, 0), 5),
    (OnnxVersion::new(1, 4, 0), 4),
];

/// IR version of the releases before 1.4.
const BASE_IR_VERSION: i64 = 3;

/// Returns the IR version a model targeting `target` must declare.
pub fn ir_version_for(target: OnnxVersion) -> i64 {
    IR_VERSIONS
        .iter()
        .find(|(first, _)| target >= *first)
        .map_or(BASE_IR_VERSION, |&(_, ir)| ir)
}

/// An operator-set import: the domain and the highest version used from it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OperatorSetId {
    /// Empty for the default ONNX domain.
    pub domain: String,
    pub version: i64,
}

/// A complete computation graph.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct GraphProto {
    pub name: String,
    pub node: Vec<NodeProto>,
    pub initializer: Vec<TensorProto>,
    pub input: Vec<ValueInfoProto>,
    pub output: Vec<ValueInfoProto>,
    #[serde(default)]
    pub value_info: Vec<ValueInfoProto>,
}

impl GraphProto {
    /// Returns a one-line summary of the graph.
    pub fn summary(&self) -> String {
        format!(
            "Graph '{}': {} inputs, {} outputs, {} nodes, {} initializers",
            self.name,
            self.input.len(),
            self.output.len(),
            self.node.len(),
            self.initializer.len(),
        )
    }
}

impl fmt::Display for GraphProto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        for node in &self.node {
            let domain = if node.domain.is_empty() { "ai.onnx" } else { &node.domain };
            writeln!(
                f,
                "  {}::{}({}) -> ({})",
                domain,
                node.op_type,
                node.input.join(", "),
                node.output.join(", "),
            )?;
        }
        Ok(())
    }
}

/// A graph together with the metadata a model file carries.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModelProto {
    pub ir_version: i64,
    pub opset_import: Vec<OperatorSetId>,
    pub producer_name: String,
    pub producer_version: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub model_version: i64,
    #[serde(default)]
    pub doc_string: String,
    pub graph: GraphProto,
}

impl ModelProto {
    /// Serialises the model as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConvertError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a model from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the model as JSON to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConvertError> {
        std::fs::write(path, self.to_json()?)?;
        tracing::debug!("wrote model '{}' to {}", self.graph.name, path.display());
        Ok(())
    }

    /// Returns the imported version of a domain.
    pub fn opset_version(&self, domain: &str) -> Option<i64> {
        self.opset_import
            .iter()
            .find(|op| op.domain == domain)
            .map(|op| op.version)
    }
}

/// Builds a graph from container components.
pub fn assemble_graph(name: &str, components: GraphComponents) -> GraphProto {
    GraphProto {
        name: name.to_string(),
        node: components.nodes,
        initializer: components.initializers,
        input: components.inputs,
        output: components.outputs,
        value_info: components.value_info,
    }
}

/// Derives operator-set imports: one per domain, at the highest version used.
pub fn opset_imports<'a>(pairs: impl IntoIterator<Item = &'a (String, i64)>) -> Vec<OperatorSetId> {
    let mut highest: BTreeMap<&str, i64> = BTreeMap::new();
    for (domain, version) in pairs {
        let entry = highest.entry(domain.as_str()).or_insert(*version);
        *entry = (*entry).max(*version);
    }
    highest
        .into_iter()
        .map(|(domain, version)| OperatorSetId {
            domain: domain.to_string(),
            version,
        })
        .collect()
}

/// Builds a model from container components and the converter configuration.
pub fn assemble_model(config: &ConverterConfig, components: GraphComponents) -> ModelProto {
    let opset_import = opset_imports(&components.domain_versions);
    let ir_version = ir_version_for(components.targeted_onnx_version);
    let graph = assemble_graph(&config.name, components);
    tracing::info!("{} (IR version {ir_version})", graph.summary());

    ModelProto {
        ir_version,
        opset_import,
        producer_name: config.producer_name.clone(),
        producer_version: config.producer_version.clone(),
        domain: config.domain.clone(),
        model_version: config.model_version,
        doc_string: config.doc_string.clone(),
        graph,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_ir::{Attributes, ModelComponentContainer, Variable, VariableType};
    use tensor_core::DType;

    fn v(s: &str) -> OnnxVersion {
        s.parse().unwrap()
    }

    #[test]
    fn test_ir_version_for() {
        assert_eq!(ir_version_for(v("1.1.2")), 3);
        assert_eq!(ir_version_for(v("1.3")), 3);
        assert_eq!(ir_version_for(v("1.4.1")), 4);
        assert_eq!(ir_version_for(v("1.8")), 7);
        assert_eq!(ir_version_for(v("1.10")), 8);
        assert_eq!(ir_version_for(v("1.16.1")), 10);
        assert_eq!(ir_version_for(v("1.4.0b1")), 3);
    }

    #[test]
    fn test_opset_imports_keep_highest_version() {
        let pairs = vec![
            ("ai.onnx.ml".to_string(), 1),
            (String::new(), 1),
            (String::new(), 7),
            ("ai.onnx.ml".to_string(), 1),
        ];
        let imports = opset_imports(&pairs);
        assert_eq!(
            imports,
            vec![
                OperatorSetId { domain: String::new(), version: 7 },
                OperatorSetId { domain: "ai.onnx.ml".into(), version: 1 },
            ]
        );
    }

    fn components() -> GraphComponents {
        let mut c = ModelComponentContainer::new("1.2", 32).unwrap();
        c.add_input(&Variable::named("X", VariableType::float_tensor([1, 3])));
        c.add_initializer("W", DType::Float, [3, 1], vec![0.1f32, 0.2, 0.3])
            .unwrap();
        c.add_node("MatMul", ["X", "W"], "Y", "", 1, Attributes::new())
            .unwrap();
        c.add_output(&Variable::named("Y", VariableType::float_tensor([1, 1])));
        c.into_components()
    }

    #[test]
    fn test_assemble_model() {
        let config = ConverterConfig {
            name: "linear".into(),
            doc_string: "x @ W".into(),
            model_version: 2,
            ..Default::default()
        };
        let model = assemble_model(&config, components());
        assert_eq!(model.ir_version, 3);
        assert_eq!(model.opset_version(""), Some(1));
        assert_eq!(model.opset_version("ai.onnx.ml"), None);
        assert_eq!(model.graph.name, "linear");
        assert_eq!(model.graph.node.len(), 1);
        assert_eq!(model.doc_string, "x @ W");
        assert_eq!(model.model_version, 2);
    }

    #[test]
    fn test_graph_display() {
        let graph = assemble_graph("g", components());
        let text = graph.to_string();
        assert!(text.contains("1 nodes, 1 initializers"));
        assert!(text.contains("ai.onnx::MatMul(X, W) -> (Y)"));
    }

    #[test]
    fn test_json_roundtrip_and_save() {
        let model = assemble_model(&ConverterConfig::default(), components());
        let json = model.to_json().unwrap();
        assert!(json.contains("\"op_type\": \"MatMul\""));
        assert_eq!(ModelProto::from_json(&json).unwrap(), model);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        model.save(&path).unwrap();
        let back = ModelProto::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back.graph.initializer[0].name, "W");
    }
}
