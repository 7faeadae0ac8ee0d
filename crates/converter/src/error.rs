// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for model conversion.

/// Errors that can occur while converting a model.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// A graph input or output names a variable the scope never declared.
    #[error("unknown variable '{name}' listed as graph {role}")]
    UnknownVariable { name: String, role: &'static str },

    /// Building a graph component failed.
    #[error("graph error: {0}")]
    GraphError(#[from] model_ir::GraphError),

    /// Reading the source model's description failed.
    #[error("source error: {0}")]
    SourceError(#[from] model_source::SourceError),

    /// Writing the assembled model failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The assembled model could not be (de)serialised.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
