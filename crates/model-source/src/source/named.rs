// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Sources for models with no native notion of named I/O, fed by name.

use crate::source::ModelSource;

/// Collects input and output names as a converter discovers them.
///
/// Deduplication is by exact string equality: registering a name that is
/// already present is a no-op, and the first registration fixes its position.
#[derive(Debug, Clone)]
pub struct NamedSource<M> {
    raw_model: M,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl<M> NamedSource<M> {
    pub fn new(raw_model: M) -> Self {
        Self {
            raw_model,
            input_names: Vec::new(),
            output_names: Vec::new(),
        }
    }

    pub fn raw_model(&self) -> &M {
        &self.raw_model
    }

    pub fn into_raw_model(self) -> M {
        self.raw_model
    }

    /// Registers a graph input name.
    pub fn add_input_name(&mut self, name: impl Into<String>) {
        push_unique(&mut self.input_names, name.into());
    }

    /// Registers a graph output name.
    pub fn add_output_name(&mut self, name: impl Into<String>) {
        push_unique(&mut self.output_names, name.into());
    }
}

fn push_unique(names: &mut Vec<String>, name: String) {
    if names.contains(&name) {
        tracing::debug!("name '{name}' already registered");
        return;
    }
    names.push(name);
}

impl<M> ModelSource for NamedSource<M> {
    fn input_names(&self) -> Vec<String> {
        self.input_names.clone()
    }

    fn output_names(&self) -> Vec<String> {
        self.output_names.clone()
    }
}
