// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The graph component container.
//!
//! During conversion, operator converters push everything the final graph
//! needs into one [`ModelComponentContainer`]:
//!
//! ```text
//! add_input / add_output / add_value_info  →  ValueInfoProto
//! add_initializer                          →  TensorProto
//! add_node                                 →  NodeProto + (domain, version)
//! ```
//!
//! Each addition is validated at the call; a failed call appends nothing.
//! The container only grows: there is no removal, replacement or sealing.
//! Float precision is applied here, once, so converters never need to know
//! whether they are emitting a 16-bit model.

use crate::node::ResolvedAttributes;
use crate::{
    Attributes, FloatPrecision, GraphError, IntoEndpoints, NodeProto, OnnxVersion, ValueInfoProto,
    Variable,
};
use std::collections::BTreeSet;
use tensor_core::{make_tensor, DType, Shape, TensorData, TensorProto};

/// Accumulates the inputs, outputs, initializers, intermediate value
/// declarations and nodes of one ONNX graph, together with the
/// (domain, version) pairs its nodes use.
///
/// # Examples
/// ```
/// use model_ir::{Attributes, ModelComponentContainer, Variable, VariableType};
/// use tensor_core::DType;
///
/// let mut c = ModelComponentContainer::new("1.2", 32).unwrap();
/// c.add_input(&Variable::named("X", VariableType::float_tensor([1, 3])));
/// c.add_initializer("W", DType::Float, [3, 1], vec![0.1f32, 0.2, 0.3]).unwrap();
/// c.add_node("MatMul", ["X", "W"], "Y", "", 1, Attributes::new()).unwrap();
/// c.add_output(&Variable::named("Y", VariableType::float_tensor([1, 1])));
///
/// assert_eq!(c.nodes()[0].op_type, "MatMul");
/// assert!(c.domain_versions().contains(&(String::new(), 1)));
/// ```
#[derive(Debug, Clone)]
pub struct ModelComponentContainer {
    inputs: Vec<ValueInfoProto>,
    outputs: Vec<ValueInfoProto>,
    initializers: Vec<TensorProto>,
    value_info: Vec<ValueInfoProto>,
    nodes: Vec<NodeProto>,
    /// Feeds the opset imports of the final model.
    domain_versions: BTreeSet<(String, i64)>,
    float_precision: FloatPrecision,
    targeted_onnx_version: OnnxVersion,
}

/// Owned contents of a container, handed to graph assembly.
#[derive(Debug, Clone)]
pub struct GraphComponents {
    pub inputs: Vec<ValueInfoProto>,
    pub outputs: Vec<ValueInfoProto>,
    pub initializers: Vec<TensorProto>,
    pub value_info: Vec<ValueInfoProto>,
    pub nodes: Vec<NodeProto>,
    pub domain_versions: BTreeSet<(String, i64)>,
    pub float_precision: FloatPrecision,
    pub targeted_onnx_version: OnnxVersion,
}

impl ModelComponentContainer {
    /// Creates a container for the targeted ONNX release (e.g. `"1.2"`) and
    /// a float precision given in bits.
    ///
    /// # Errors
    /// - [`GraphError::InvalidVersion`] if `targeted_onnx` does not parse.
    /// - [`GraphError::InvalidConfiguration`] unless `float_precision` is 16 or 32.
    pub fn new(targeted_onnx: &str, float_precision: u32) -> Result<Self, GraphError> {
        let precision = FloatPrecision::try_from(float_precision)?;
        let version = OnnxVersion::parse(targeted_onnx)?;
        Ok(Self::with_precision(version, precision))
    }

    /// Creates a container from already-validated settings.
    pub fn with_precision(targeted_onnx_version: OnnxVersion, float_precision: FloatPrecision) -> Self {
        tracing::info!(
            "graph container created: targeting ONNX {targeted_onnx_version}, {float_precision} floats"
        );
        Self {
            inputs: Vec::new(),
            outputs: Vec::new(),
            initializers: Vec::new(),
            value_info: Vec::new(),
            nodes: Vec::new(),
            domain_versions: BTreeSet::new(),
            float_precision,
            targeted_onnx_version,
        }
    }

    // ── Value declarations ─────────────────────────────────────────

    /// Declares a graph input.
    pub fn add_input(&mut self, variable: &Variable) {
        let info = self.make_value_info(variable);
        tracing::debug!("input '{}': {}", info.name, info.ty);
        self.inputs.push(info);
    }

    /// Declares a graph output.
    pub fn add_output(&mut self, variable: &Variable) {
        let info = self.make_value_info(variable);
        tracing::debug!("output '{}': {}", info.name, info.ty);
        self.outputs.push(info);
    }

    /// Declares an intermediate value.
    pub fn add_value_info(&mut self, variable: &Variable) {
        let info = self.make_value_info(variable);
        tracing::debug!("value info '{}': {}", info.name, info.ty);
        self.value_info.push(info);
    }

    fn make_value_info(&self, variable: &Variable) -> ValueInfoProto {
        let mut ty = variable.ty.to_onnx_type();
        ty.map_tensor_elem_type(|elem| self.float_precision.apply(elem));
        ValueInfoProto {
            name: variable.onnx_name.clone(),
            ty,
            doc_string: variable
                .doc_string
                .as_deref()
                .filter(|doc| !doc.is_empty())
                .map(str::to_string)
                .unwrap_or_default(),
        }
    }

    // ── Initializers ───────────────────────────────────────────────

    /// Adds a constant tensor.
    ///
    /// `content` holds the flattened values. Under 16-bit precision a
    /// `FLOAT` tensor is stored as `FLOAT16`.
    ///
    /// # Errors
    /// - [`GraphError::MalformedShape`] if any dimension is unknown or symbolic.
    /// - [`GraphError::Tensor`] if the content does not fit the shape or type.
    pub fn add_initializer(
        &mut self,
        name: &str,
        dtype: DType,
        shape: impl Into<Shape>,
        content: impl Into<TensorData>,
    ) -> Result<(), GraphError> {
        let shape = shape.into();
        let dims = shape.to_concrete().ok_or_else(|| {
            let axis = shape.first_unresolved().unwrap_or_default();
            GraphError::MalformedShape {
                name: name.to_string(),
                axis,
                dim: shape.dims()[axis].to_string(),
            }
        })?;

        let dtype = self.float_precision.apply(dtype);
        let tensor = make_tensor(name, dtype, &dims, content.into())?;

        tracing::debug!("initializer '{name}': {dtype}{shape}");
        self.initializers.push(tensor);
        Ok(())
    }

    // ── Nodes ──────────────────────────────────────────────────────

    /// Adds an operator node and records its `(domain, version)` pair.
    ///
    /// `inputs` and `outputs` may be a single name or a list of names. An
    /// empty `domain` selects the default ONNX domain.
    ///
    /// # Errors
    /// - [`GraphError::MalformedEndpoint`] if inputs or outputs are not
    ///   names (only possible for JSON endpoints).
    /// - [`GraphError::InvalidAttribute`] if an attribute has no value.
    pub fn add_node(
        &mut self,
        op_type: &str,
        inputs: impl IntoEndpoints,
        outputs: impl IntoEndpoints,
        domain: &str,
        version: i64,
        attributes: Attributes,
    ) -> Result<(), GraphError> {
        let endpoint_error = |role: &'static str, found: String| GraphError::MalformedEndpoint {
            op_type: op_type.to_string(),
            role,
            found,
        };
        let input = inputs
            .into_endpoints()
            .map_err(|found| endpoint_error("inputs", found))?;
        let output = outputs
            .into_endpoints()
            .map_err(|found| endpoint_error("outputs", found))?;

        let ResolvedAttributes {
            node_name,
            doc_string,
            attribute,
        } = attributes
            .resolve()
            .map_err(|(key, reason)| GraphError::InvalidAttribute {
                op_type: op_type.to_string(),
                key,
                reason,
            })?;

        if op_type.is_empty() {
            tracing::warn!("adding a node with an empty op type (outputs: {output:?})");
        }

        let node = NodeProto {
            name: node_name,
            op_type: op_type.to_string(),
            domain: domain.to_string(),
            input,
            output,
            attribute,
            doc_string,
        };

        if self.domain_versions.insert((domain.to_string(), version)) {
            tracing::debug!("operator set in use: domain '{domain}' version {version}");
        }
        tracing::debug!(
            "node {} ({}): {:?} -> {:?}",
            self.nodes.len(),
            node.op_type,
            node.input,
            node.output
        );
        self.nodes.push(node);
        Ok(())
    }

    // ── Accessors ──────────────────────────────────────────────────

    pub fn inputs(&self) -> &[ValueInfoProto] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[ValueInfoProto] {
        &self.outputs
    }

    pub fn initializers(&self) -> &[TensorProto] {
        &self.initializers
    }

    pub fn value_info(&self) -> &[ValueInfoProto] {
        &self.value_info
    }

    pub fn nodes(&self) -> &[NodeProto] {
        &self.nodes
    }

    /// Every `(domain, version)` pair passed to [`add_node`](Self::add_node).
    pub fn domain_versions(&self) -> &BTreeSet<(String, i64)> {
        &self.domain_versions
    }

    pub fn float_precision(&self) -> FloatPrecision {
        self.float_precision
    }

    pub fn targeted_onnx_version(&self) -> OnnxVersion {
        self.targeted_onnx_version
    }

    /// Consumes the container, yielding its collections for assembly.
    pub fn into_components(self) -> GraphComponents {
        GraphComponents {
            inputs: self.inputs,
            outputs: self.outputs,
            initializers: self.initializers,
            value_info: self.value_info,
            nodes: self.nodes,
            domain_versions: self.domain_versions,
            float_precision: self.float_precision,
            targeted_onnx_version: self.targeted_onnx_version,
        }
    }
}
