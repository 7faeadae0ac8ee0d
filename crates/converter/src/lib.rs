// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # converter
//!
//! Drives a conversion from a source model to an ONNX model.
//!
//! A conversion takes:
//! - A [`ConverterConfig`] naming the targeted ONNX release and float precision.
//! - A `ModelSource` from `model-source` reporting the graph I/O names.
//! - A [`Scope`] in which the source's variables were declared.
//!
//! and hands a fresh `ModelComponentContainer` to the operator converters.
//! The filled container is then assembled into a [`ModelProto`] whose
//! operator-set imports come from the domains and versions the nodes used.
//!
//! # Example
//! ```
//! use converter::{convert, ConverterConfig, Scope};
//! use model_ir::{Attributes, VariableType};
//! use model_source::NamedSource;
//! use tensor_core::DType;
//!
//! let mut scope = Scope::new();
//! let x = scope.declare_local_variable("X", VariableType::float_tensor([1, 3]));
//! let y = scope.declare_local_variable("Y", VariableType::float_tensor([1, 1]));
//!
//! let mut source = NamedSource::new(());
//! source.add_input_name("X");
//! source.add_output_name("Y");
//!
//! let model = convert(&source, &scope, &ConverterConfig::default(), |c| {
//!     c.add_initializer("W", DType::Float, [3, 1], vec![0.1f32, 0.2, 0.3])?;
//!     c.add_node("MatMul", [x.onnx_name.as_str(), "W"], y.onnx_name.as_str(), "", 1, Attributes::new())?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(model.opset_version(""), Some(1));
//! assert_eq!(model.graph.output[0].name, "Y");
//! ```

mod config;
mod convert;
mod error;
mod model;
mod scope;

pub use config::{ConverterConfig, DEFAULT_TARGETED_ONNX, PRODUCER_NAME};
pub use convert::convert;
pub use error::ConvertError;
pub use model::{
    assemble_graph, assemble_model, ir_version_for, opset_imports, GraphProto, ModelProto,
    OperatorSetId,
};
pub use scope::Scope;
