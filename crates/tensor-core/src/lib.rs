// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tensor-core
//!
//! Element types, shapes and constant-tensor encoding for ONNX graphs.
//!
//! This crate provides:
//! - [`DType`] — ONNX tensor element types, tagged with their wire codes.
//! - [`Shape`] / [`Dim`] — shapes whose dimensions may be concrete, symbolic
//!   or unknown.
//! - [`TensorProto`] — a named constant tensor in ONNX layout, built with
//!   [`make_tensor`] from a flat [`TensorData`] buffer.
//!
//! Nothing here knows about graphs; the graph builder in `model-ir` calls
//! into this crate whenever it needs a type tag or an initializer.

mod dtype;
mod error;
mod shape;
mod tensor;

pub use dtype::DType;
pub use error::TensorError;
pub use shape::{Dim, Shape};
pub use tensor::{make_tensor, TensorData, TensorProto};
