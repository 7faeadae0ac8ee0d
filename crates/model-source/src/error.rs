// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for reading source model descriptions.

/// Errors that can occur when loading a model description.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The description file could not be read.
    #[error("failed to read model description: {0}")]
    DescriptionRead(#[from] std::io::Error),

    /// The description JSON is malformed.
    #[error("failed to parse model description: {0}")]
    DescriptionParse(#[from] serde_json::Error),

    /// The description is well-formed JSON but inconsistent.
    #[error("invalid model description: {0}")]
    InvalidDescription(String),
}
