// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for appending to a graph component container.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use model_ir::{Attributes, ModelComponentContainer, Variable, VariableType};
use tensor_core::DType;

fn bench_add_node(c: &mut Criterion) {
    c.bench_function("add_node x1000", |b| {
        b.iter(|| {
            let mut container = ModelComponentContainer::new("1.2", 32).unwrap();
            for i in 0..1000 {
                let attrs = Attributes::new().set("alpha", 1.0).set("transB", 1);
                container
                    .add_node(
                        "Gemm",
                        [format!("x{i}").as_str(), "W", "B"],
                        format!("x{}", i + 1),
                        "",
                        7,
                        attrs,
                    )
                    .unwrap();
            }
            black_box(container.nodes().len())
        })
    });
}

fn bench_add_initializer_half(c: &mut Criterion) {
    let weights: Vec<f32> = (0..256 * 256).map(|i| i as f32 * 1e-3).collect();
    c.bench_function("add_initializer 256x256 fp16", |b| {
        b.iter(|| {
            let mut container = ModelComponentContainer::new("1.2", 16).unwrap();
            container
                .add_initializer("W", DType::Float, [256, 256], weights.clone())
                .unwrap();
            black_box(container.initializers().len())
        })
    });
}

fn bench_add_value_info(c: &mut Criterion) {
    let vars: Vec<Variable> = (0..1000)
        .map(|i| Variable::named(format!("v{i}"), VariableType::float_tensor([1, 64])))
        .collect();
    c.bench_function("add_value_info x1000", |b| {
        b.iter(|| {
            let mut container = ModelComponentContainer::new("1.2", 16).unwrap();
            for v in &vars {
                container.add_value_info(v);
            }
            black_box(container.value_info().len())
        })
    });
}

criterion_group!(
    benches,
    bench_add_node,
    bench_add_initializer_half,
    bench_add_value_info
);
criterion_main!(benches);
