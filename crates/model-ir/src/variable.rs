// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Variables declared by conversion drivers.
//!
//! A [`Variable`] is what a driver knows about one value flowing through
//! the converted model: the name the source model uses, the unique name it
//! gets in the ONNX graph, and its semantic type. The container reads these
//! fields when emitting value-info entries and never keeps the variable.

use crate::TypeProto;
use tensor_core::{DType, Shape};

/// The semantic type of a variable.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableType {
    /// A dense tensor with the given element type and shape.
    Tensor { elem_type: DType, shape: Shape },
    /// A single value, emitted as a one-element tensor.
    Scalar(DType),
    /// A dictionary from scalar keys to values (e.g. class probabilities).
    Dictionary {
        key_type: DType,
        value_type: Box<VariableType>,
    },
    /// A sequence of values of one type.
    Sequence(Box<VariableType>),
}

impl VariableType {
    pub fn float_tensor(shape: impl Into<Shape>) -> Self {
        Self::tensor(DType::Float, shape)
    }

    pub fn double_tensor(shape: impl Into<Shape>) -> Self {
        Self::tensor(DType::Double, shape)
    }

    pub fn int64_tensor(shape: impl Into<Shape>) -> Self {
        Self::tensor(DType::Int64, shape)
    }

    pub fn int32_tensor(shape: impl Into<Shape>) -> Self {
        Self::tensor(DType::Int32, shape)
    }

    pub fn string_tensor(shape: impl Into<Shape>) -> Self {
        Self::tensor(DType::String, shape)
    }

    pub fn bool_tensor(shape: impl Into<Shape>) -> Self {
        Self::tensor(DType::Bool, shape)
    }

    /// Creates a tensor type with an arbitrary element type.
    pub fn tensor(elem_type: DType, shape: impl Into<Shape>) -> Self {
        Self::Tensor {
            elem_type,
            shape: shape.into(),
        }
    }

    /// Renders this type into its ONNX encoding.
    pub fn to_onnx_type(&self) -> TypeProto {
        match self {
            Self::Tensor { elem_type, shape } => TypeProto::Tensor {
                elem_type: *elem_type,
                shape: Some(shape.clone()),
            },
            Self::Scalar(elem_type) => TypeProto::tensor(*elem_type, [1]),
            Self::Dictionary {
                key_type,
                value_type,
            } => TypeProto::Map {
                key_type: *key_type,
                value_type: Box::new(value_type.to_onnx_type()),
            },
            Self::Sequence(elem) => TypeProto::Sequence {
                elem_type: Box::new(elem.to_onnx_type()),
            },
        }
    }
}

/// A value known to a conversion driver.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Variable {
    /// Name used by the source model.
    pub raw_name: String,
    /// Name in the produced graph; unique within one graph.
    pub onnx_name: String,
    /// Declared semantic type.
    pub ty: VariableType,
    /// Optional human-readable documentation.
    #[serde(default)]
    pub doc_string: Option<String>,
}

impl Variable {
    /// Creates a variable whose graph name differs from its source name.
    pub fn new(raw_name: impl Into<String>, onnx_name: impl Into<String>, ty: VariableType) -> Self {
        Self {
            raw_name: raw_name.into(),
            onnx_name: onnx_name.into(),
            ty,
            doc_string: None,
        }
    }

    /// Creates a variable that keeps its source name in the graph.
    pub fn named(name: impl Into<String>, ty: VariableType) -> Self {
        let name = name.into();
        Self::new(name.clone(), name, ty)
    }

    /// Attaches a doc string.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_string = Some(doc.into());
        self
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.onnx_name, self.ty.to_onnx_type())
    }
}
