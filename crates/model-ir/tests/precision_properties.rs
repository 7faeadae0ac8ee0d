// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property tests: precision substitution and the domain-version registry.

use model_ir::{Attributes, ModelComponentContainer, Variable, VariableType};
use proptest::prelude::*;
use std::collections::BTreeSet;
use tensor_core::DType;

const DTYPES: [DType; 14] = [
    DType::Float,
    DType::Uint8,
    DType::Int8,
    DType::Uint16,
    DType::Int16,
    DType::Int32,
    DType::Int64,
    DType::String,
    DType::Bool,
    DType::Float16,
    DType::Double,
    DType::Uint32,
    DType::Uint64,
    DType::BFloat16,
];

fn dtype() -> impl Strategy<Value = DType> {
    prop::sample::select(DTYPES.to_vec())
}

proptest! {
    #[test]
    fn half_precision_rewrites_only_float(elems in prop::collection::vec(dtype(), 1..20)) {
        let mut c = ModelComponentContainer::new("1.3", 16).unwrap();
        for (i, &elem) in elems.iter().enumerate() {
            c.add_value_info(&Variable::named(format!("v{i}"), VariableType::tensor(elem, [2])));
        }
        for (info, &elem) in c.value_info().iter().zip(&elems) {
            let expected = if elem == DType::Float { DType::Float16 } else { elem };
            prop_assert_eq!(info.ty.tensor_elem_type(), Some(expected));
        }
    }

    #[test]
    fn full_precision_never_rewrites(elems in prop::collection::vec(dtype(), 1..20)) {
        let mut c = ModelComponentContainer::new("1.3", 32).unwrap();
        for (i, &elem) in elems.iter().enumerate() {
            c.add_input(&Variable::named(format!("x{i}"), VariableType::tensor(elem, [1])));
        }
        for (info, &elem) in c.inputs().iter().zip(&elems) {
            prop_assert_eq!(info.ty.tensor_elem_type(), Some(elem));
        }
    }

    #[test]
    fn registry_is_union_of_pairs(
        pairs in prop::collection::vec((prop::sample::select(vec!["", "ai.onnx.ml", "com.microsoft"]), 1i64..4), 0..30)
    ) {
        let mut c = ModelComponentContainer::new("1.3", 32).unwrap();
        for (i, (domain, version)) in pairs.iter().enumerate() {
            c.add_node("Op", format!("in{i}"), format!("out{i}"), domain, *version, Attributes::new())
                .unwrap();
        }
        let expected: BTreeSet<(String, i64)> =
            pairs.iter().map(|(d, v)| (d.to_string(), *v)).collect();
        prop_assert_eq!(c.domain_versions(), &expected);
        prop_assert_eq!(c.nodes().len(), pairs.len());
    }
}
