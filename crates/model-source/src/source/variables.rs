// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Sources for models with no native notion of named I/O, fed with variables.

use crate::source::ModelSource;
use model_ir::Variable;

/// Collects the variables a converter declares as graph inputs and outputs.
///
/// Deduplication is by the variable's `onnx_name`, its identity within one
/// graph: two distinct variables that share a source (`raw_name`) name are
/// both kept, while registering the same variable twice is a no-op. The
/// exposed names are the source names, in first-registration order.
#[derive(Debug, Clone)]
pub struct VariableSource<M> {
    raw_model: M,
    inputs: Vec<Variable>,
    outputs: Vec<Variable>,
}

impl<M> VariableSource<M> {
    pub fn new(raw_model: M) -> Self {
        Self {
            raw_model,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn raw_model(&self) -> &M {
        &self.raw_model
    }

    pub fn into_raw_model(self) -> M {
        self.raw_model
    }

    /// Registers a graph input variable.
    pub fn add_input(&mut self, variable: &Variable) {
        push_unique(&mut self.inputs, variable);
    }

    /// Registers a graph output variable.
    pub fn add_output(&mut self, variable: &Variable) {
        push_unique(&mut self.outputs, variable);
    }

    /// Registered input variables, in order.
    pub fn inputs(&self) -> &[Variable] {
        &self.inputs
    }

    /// Registered output variables, in order.
    pub fn outputs(&self) -> &[Variable] {
        &self.outputs
    }
}

fn push_unique(variables: &mut Vec<Variable>, variable: &Variable) {
    if variables.iter().any(|v| v.onnx_name == variable.onnx_name) {
        tracing::debug!("variable '{}' already registered", variable.onnx_name);
        return;
    }
    variables.push(variable.clone());
}

impl<M> ModelSource for VariableSource<M> {
    fn input_names(&self) -> Vec<String> {
        self.inputs.iter().map(|v| v.raw_name.clone()).collect()
    }

    fn output_names(&self) -> Vec<String> {
        self.outputs.iter().map(|v| v.raw_name.clone()).collect()
    }
}
