// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # model-ir
//!
//! The graph intermediate representation that model converters build into.
//!
//! A conversion walks a source model and, for each value or operation it
//! finds, calls into a [`ModelComponentContainer`]:
//!
//! - [`Variable`] / [`VariableType`] — what a converter knows about a value;
//!   rendered into [`ValueInfoProto`] / [`TypeProto`] by the container.
//! - [`NodeProto`] — one operator call; built from a name-or-list of
//!   endpoints ([`IntoEndpoints`]) and an ordered [`Attributes`] set.
//! - [`OnnxVersion`] — the targeted ONNX release, totally ordered.
//! - [`FloatPrecision`] — 32- or 16-bit floats for every float element the
//!   container emits.
//!
//! Validation happens at each `add_*` call, so an error points at the
//! converter call that caused it.
//!
//! # Example
//! ```
//! use model_ir::{Attributes, ModelComponentContainer, Variable, VariableType};
//! use tensor_core::DType;
//!
//! let mut container = ModelComponentContainer::new("1.2", 16).unwrap();
//! container.add_input(&Variable::named("X", VariableType::float_tensor([1, 3])));
//! container
//!     .add_initializer("W", DType::Float, [3, 1], vec![0.1f32, 0.2, 0.3])
//!     .unwrap();
//! container
//!     .add_node("MatMul", ["X", "W"], "Y", "", 1, Attributes::new())
//!     .unwrap();
//!
//! // 16-bit precision rewrote every float element.
//! assert_eq!(container.inputs()[0].ty.tensor_elem_type(), Some(DType::Float16));
//! assert_eq!(container.initializers()[0].dtype(), Some(DType::Float16));
//! ```

mod container;
mod error;
mod node;
mod precision;
mod value_info;
mod variable;
mod version;

pub use container::{GraphComponents, ModelComponentContainer};
pub use error::GraphError;
pub use node::{AttributeProto, AttributeValue, Attributes, IntoEndpoints, NodeProto};
pub use precision::FloatPrecision;
pub use value_info::{TypeProto, ValueInfoProto};
pub use variable::{Variable, VariableType};
pub use version::{OnnxVersion, PreRelease};
