// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # model-source
//!
//! A uniform view of a source model's graph inputs and outputs.
//!
//! Source formats disagree on whether a model names its inputs and outputs
//! at all. Each family gets one [`ModelSource`] implementation:
//!
//! | source            | names come from                                  | dedup key      |
//! |-------------------|--------------------------------------------------|----------------|
//! | [`DescribedSource`] | the model's own [`ModelDescription`]           | n/a (read-only) |
//! | [`NamedSource`]     | `add_input_name` / `add_output_name` calls     | name string    |
//! | [`VariableSource`]  | `add_input` / `add_output` with [`model_ir::Variable`]s | `onnx_name` |
//!
//! The implementations share only the trait; none depends on another.

mod description;
mod error;
pub mod source;

pub use description::{FeatureDescription, ModelDescription};
pub use error::SourceError;
pub use source::described::{DescribedModel, DescribedSource};
pub use source::named::NamedSource;
pub use source::variables::VariableSource;
pub use source::ModelSource;
