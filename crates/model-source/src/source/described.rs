// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Sources whose models declare their own named inputs and outputs.

use crate::source::ModelSource;
use crate::ModelDescription;

/// A model that carries a [`ModelDescription`] of its interface.
pub trait DescribedModel {
    fn description(&self) -> &ModelDescription;
}

impl DescribedModel for ModelDescription {
    fn description(&self) -> &ModelDescription {
        self
    }
}

/// Projects input and output names straight from the wrapped model's
/// description. Nothing can be registered; the view is read-only.
#[derive(Debug, Clone)]
pub struct DescribedSource<M> {
    raw_model: M,
}

impl<M: DescribedModel> DescribedSource<M> {
    pub fn new(raw_model: M) -> Self {
        Self { raw_model }
    }

    /// Returns the wrapped model.
    pub fn raw_model(&self) -> &M {
        &self.raw_model
    }

    pub fn into_raw_model(self) -> M {
        self.raw_model
    }
}

impl<M: DescribedModel> ModelSource for DescribedSource<M> {
    fn input_names(&self) -> Vec<String> {
        let description = self.raw_model.description();
        description.inputs.iter().map(|f| f.name.clone()).collect()
    }

    fn output_names(&self) -> Vec<String> {
        let description = self.raw_model.description();
        description.outputs.iter().map(|f| f.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FeatureDescription;
    use model_ir::VariableType;

    struct Pipeline {
        description: ModelDescription,
    }

    impl DescribedModel for Pipeline {
        fn description(&self) -> &ModelDescription {
            &self.description
        }
    }

    fn feature(name: &str) -> FeatureDescription {
        FeatureDescription {
            name: name.into(),
            short_description: String::new(),
            ty: VariableType::float_tensor([1]),
        }
    }

    fn description() -> ModelDescription {
        ModelDescription {
            name: "pipeline".into(),
            inputs: vec![feature("sepal"), feature("petal")],
            outputs: vec![feature("label"), feature("scores")],
            predicted_feature_name: None,
            predicted_probabilities_name: None,
        }
    }

    #[test]
    fn test_names_follow_declaration_order() {
        let source = DescribedSource::new(Pipeline {
            description: description(),
        });
        assert_eq!(source.input_names(), ["sepal", "petal"]);
        assert_eq!(source.output_names(), ["label", "scores"]);
        // Stable across calls.
        assert_eq!(source.input_names(), source.input_names());
    }

    #[test]
    fn test_description_is_its_own_model() {
        let source = DescribedSource::new(description());
        assert_eq!(source.raw_model().name, "pipeline");
        assert_eq!(source.output_names().len(), 2);
    }

    #[test]
    fn test_empty_description() {
        let mut d = description();
        d.inputs.clear();
        d.outputs.clear();
        let source = DescribedSource::new(d);
        assert!(source.input_names().is_empty());
        assert!(source.output_names().is_empty());
    }
}
