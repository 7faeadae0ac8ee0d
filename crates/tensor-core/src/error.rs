// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for tensor encoding.

use crate::DType;

/// Errors that can occur while encoding a constant tensor.
#[derive(Debug, thiserror::Error)]
pub enum TensorError {
    /// The number of content values does not match the product of the dims.
    #[error("tensor '{name}': expected {expected} values for its shape, got {actual}")]
    ContentLengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// The shape's element count or a dimension does not fit the encoding.
    #[error("tensor '{name}': shape {dims:?} is too large to encode")]
    ShapeOverflow { name: String, dims: Vec<usize> },

    /// The content kind cannot be stored as the requested element type.
    #[error("tensor '{name}': {content} content cannot be encoded as {dtype}")]
    IncompatibleContent {
        name: String,
        dtype: DType,
        content: &'static str,
    },

    /// A value does not fit the element type's range.
    #[error("tensor '{name}': value {value} is out of range for {dtype}")]
    ValueOutOfRange {
        name: String,
        dtype: DType,
        value: i64,
    },
}
