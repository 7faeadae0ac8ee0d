// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The conversion driver.
//!
//! A conversion registers the source's inputs, runs the operator converters
//! against a fresh container, registers the source's outputs and assembles
//! the result into a [`ModelProto`].

use crate::{assemble_model, ConvertError, ConverterConfig, ModelProto, Scope};
use model_ir::{ModelComponentContainer, Variable};
use model_source::ModelSource;
use std::collections::HashMap;

/// Converts a source model into an ONNX model.
///
/// `scope` must already hold a variable for every input and output name the
/// source reports. `build` emits the graph body into the container; it runs
/// after inputs are registered and before outputs are.
///
/// # Errors
/// - [`ConvertError::UnknownVariable`] if a source name was never declared,
///   or is listed more often than it was declared.
/// - Any error from creating the container or from `build`.
pub fn convert<S, F>(
    source: &S,
    scope: &Scope,
    config: &ConverterConfig,
    build: F,
) -> Result<ModelProto, ConvertError>
where
    S: ModelSource + ?Sized,
    F: FnOnce(&mut ModelComponentContainer) -> Result<(), ConvertError>,
{
    let inputs = resolve(scope, &source.input_names(), "input")?;
    let outputs = resolve(scope, &source.output_names(), "output")?;
    tracing::info!(
        "converting '{}': {} inputs, {} outputs, targeting ONNX {}",
        config.name,
        inputs.len(),
        outputs.len(),
        config.targeted_onnx,
    );

    let mut container = config.create_container()?;
    for variable in &inputs {
        container.add_input(variable);
    }
    build(&mut container)?;
    for variable in &outputs {
        container.add_output(variable);
    }

    Ok(assemble_model(config, container.into_components()))
}

/// Maps source names to declared variables.
///
/// A name listed once resolves to its newest declaration. A name listed `n`
/// times resolves to its `n` newest declarations, oldest first, so distinct
/// variables that share a source name stay distinct graph values.
fn resolve(
    scope: &Scope,
    names: &[String],
    role: &'static str,
) -> Result<Vec<Variable>, ConvertError> {
    let mut repeats: HashMap<&str, usize> = HashMap::new();
    for name in names {
        *repeats.entry(name.as_str()).or_default() += 1;
    }

    let mut taken: HashMap<&str, usize> = HashMap::new();
    names
        .iter()
        .map(|name| {
            let declared: Vec<&Variable> = scope.find_variables(name).collect();
            let seen = taken.entry(name.as_str()).or_default();
            let index = (declared.len() + *seen).checked_sub(repeats[name.as_str()]);
            *seen += 1;
            index
                .and_then(|i| declared.get(i))
                .map(|&variable| variable.clone())
                .ok_or_else(|| ConvertError::UnknownVariable {
                    name: name.clone(),
                    role,
                })
        })
        .collect()
}
