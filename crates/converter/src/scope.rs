// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Variable scopes and unique graph names.
//!
//! Every value and initializer in an ONNX graph needs a distinct name, but
//! operator converters pick names from the source model or from fixed seeds
//! like `"reshape_output"`. A [`Scope`] hands out names that have not been
//! used yet and remembers which variable each source name was declared as.

use model_ir::{Variable, VariableType};
use std::collections::{HashMap, HashSet};

/// Allocates unique names and tracks declared variables.
///
/// # Naming
/// A seed is first made C-identifier-like: characters other than ASCII
/// letters and digits become `_`, and a leading digit gets a `_` prefix.
/// If the result is taken, the smallest free numeric suffix is appended
/// (`W`, `W1`, `W2`, ...).
///
/// # Example
/// ```
/// use converter::Scope;
///
/// let mut scope = Scope::new();
/// assert_eq!(scope.get_unique_variable_name("gemm.B"), "gemm_B");
/// assert_eq!(scope.get_unique_variable_name("gemm.B"), "gemm_B1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scope {
    names: HashSet<String>,
    variables: Vec<Variable>,
    /// Source name → indices of the variables declared under it, oldest first.
    by_raw_name: HashMap<String, Vec<usize>>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh name derived from `seed` and reserves it.
    pub fn get_unique_variable_name(&mut self, seed: &str) -> String {
        let base = sanitize(seed);
        let name = if self.names.contains(&base) {
            (1..)
                .map(|i| format!("{base}{i}"))
                .find(|candidate| !self.names.contains(candidate))
                .unwrap_or_default()
        } else {
            base
        };
        self.names.insert(name.clone());
        name
    }

    /// Declares a variable under its source name, with a fresh graph name.
    ///
    /// Declaring the same source name again creates a new variable; later
    /// lookups by that name resolve to the newest one.
    pub fn declare_local_variable(&mut self, raw_name: &str, ty: VariableType) -> Variable {
        let onnx_name = self.get_unique_variable_name(raw_name);
        let variable = Variable::new(raw_name, onnx_name, ty);
        tracing::debug!("declared variable {variable}");
        self.by_raw_name
            .entry(raw_name.to_string())
            .or_default()
            .push(self.variables.len());
        self.variables.push(variable.clone());
        variable
    }

    /// Finds the newest variable declared under a source name.
    pub fn find_variable(&self, raw_name: &str) -> Option<&Variable> {
        self.find_variables(raw_name).last()
    }

    /// All variables declared under a source name, oldest first.
    pub fn find_variables<'a>(&'a self, raw_name: &str) -> impl Iterator<Item = &'a Variable> + 'a {
        let variables = &self.variables;
        self.by_raw_name
            .get(raw_name)
            .into_iter()
            .flatten()
            .map(move |&index| &variables[index])
    }

    /// All declared variables, in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Returns `true` if the name has been handed out.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

fn sanitize(seed: &str) -> String {
    let mut name: String = seed
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}
