// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`ModelSource`] trait and its implementations.

pub mod described;
pub mod named;
pub mod variables;

/// A read-only view of a source model's graph inputs and outputs, by name.
///
/// Each source family implements both accessors; there are no defaults.
/// The returned order is stable across calls and is the order the final
/// graph declares its inputs and outputs in: either the order the wrapped
/// model declares, or, for models without named I/O, the order names were
/// registered.
///
/// Sources hold no I/O and do no work beyond bookkeeping, so they are cheap
/// to construct in tests:
///
/// ```
/// use model_source::{ModelSource, NamedSource};
///
/// let mut source = NamedSource::new(());
/// source.add_input_name("b");
/// source.add_input_name("a");
/// source.add_input_name("b");
/// assert_eq!(source.input_names(), ["b", "a"]);
/// ```
pub trait ModelSource {
    /// Names of the graph inputs, in declaration order.
    fn input_names(&self) -> Vec<String>;

    /// Names of the graph outputs, in declaration order.
    fn output_names(&self) -> Vec<String>;
}

impl<S: ModelSource + ?Sized> ModelSource for &S {
    fn input_names(&self) -> Vec<String> {
        (**self).input_names()
    }

    fn output_names(&self) -> Vec<String> {
        (**self).output_names()
    }
}

impl<S: ModelSource + ?Sized> ModelSource for Box<S> {
    fn input_names(&self) -> Vec<String> {
        (**self).input_names()
    }

    fn output_names(&self) -> Vec<String> {
        (**self).output_names()
    }
}
