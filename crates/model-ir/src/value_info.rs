// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! ONNX type encodings and value-info declarations.

use tensor_core::{DType, Shape};

/// The ONNX encoding of a value's type.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeProto {
    /// A dense tensor. `shape: None` leaves even the rank unspecified.
    Tensor {
        elem_type: DType,
        shape: Option<Shape>,
    },
    /// A map from scalar keys to values.
    Map {
        key_type: DType,
        value_type: Box<TypeProto>,
    },
    /// A sequence of values of one type.
    Sequence { elem_type: Box<TypeProto> },
}

impl TypeProto {
    /// Creates a tensor type.
    pub fn tensor(elem_type: DType, shape: impl Into<Shape>) -> Self {
        Self::Tensor {
            elem_type,
            shape: Some(shape.into()),
        }
    }

    /// Returns the element type when this is a tensor type.
    pub fn tensor_elem_type(&self) -> Option<DType> {
        match self {
            Self::Tensor { elem_type, .. } => Some(*elem_type),
            _ => None,
        }
    }

    /// Returns the shape when this is a tensor type with a known rank.
    pub fn tensor_shape(&self) -> Option<&Shape> {
        match self {
            Self::Tensor { shape, .. } => shape.as_ref(),
            _ => None,
        }
    }

    /// Replaces the element type of a tensor type; other types are untouched.
    pub(crate) fn map_tensor_elem_type(&mut self, f: impl FnOnce(DType) -> DType) {
        if let Self::Tensor { elem_type, .. } = self {
            *elem_type = f(*elem_type);
        }
    }
}

impl std::fmt::Display for TypeProto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tensor {
                elem_type,
                shape: Some(shape),
            } => write!(f, "tensor({elem_type}){shape}"),
            Self::Tensor {
                elem_type,
                shape: None,
            } => write!(f, "tensor({elem_type})"),
            Self::Map {
                key_type,
                value_type,
            } => write!(f, "map({key_type}, {value_type})"),
            Self::Sequence { elem_type } => write!(f, "seq({elem_type})"),
        }
    }
}

/// A named, typed declaration of a graph input, output or intermediate value.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValueInfoProto {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeProto,
    /// Empty when the source variable carried no documentation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub doc_string: String,
}
