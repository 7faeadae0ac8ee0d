// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for graph construction.

/// Errors raised while building graph components.
///
/// Every variant is returned at the call that caused it; nothing is
/// appended to the container when an error is returned.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The container was configured with an unsupported setting.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The targeted ONNX version string could not be parsed.
    #[error("invalid version '{input}': {detail}")]
    InvalidVersion { input: String, detail: String },

    /// An initializer shape contains a dimension that is not concrete.
    #[error("initializer '{name}' has unresolved dimension {dim} at axis {axis}")]
    MalformedShape {
        name: String,
        axis: usize,
        dim: String,
    },

    /// Node inputs or outputs are not a name or a list of names.
    #[error("{role} of '{op_type}' node must be a string or a list of strings, got [{found}]")]
    MalformedEndpoint {
        op_type: String,
        role: &'static str,
        found: String,
    },

    /// A node attribute has no value, or one that no attribute kind can hold.
    #[error("failed to create '{op_type}' node: attribute '{key}' {reason}")]
    InvalidAttribute {
        op_type: String,
        key: String,
        reason: String,
    },

    /// The constant tensor could not be encoded.
    #[error(transparent)]
    Tensor(#[from] tensor_core::TensorError),
}
