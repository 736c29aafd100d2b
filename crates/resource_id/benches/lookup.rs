// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Benchmarks for identifier lookups.
//!
//! Run with: cargo bench -p resource_id

#![allow(missing_docs, reason = "benchmark code")]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use resource_id::{PathTemplate, value_by_name, value_by_template};

const ID: &str = "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/rg1/providers/Microsoft.Compute/virtualMachines/vm1/providers/Microsoft.Authorization/locks/l1";
const ROUTE: &str = "/{scope}/providers/Microsoft.Authorization/locks/{lockName}";

fn bench_by_name(c: &mut Criterion) {
    c.bench_function("by_name_hit", |b| b.iter(|| value_by_name(black_box(ID), black_box("locks"))));
    c.bench_function("by_name_miss", |b| b.iter(|| value_by_name(black_box(ID), black_box("vaults"))));
}

fn bench_by_template(c: &mut Criterion) {
    c.bench_function("by_template_single", |b| {
        b.iter(|| value_by_template(black_box(ID), black_box(ROUTE), black_box("lockName")));
    });
    c.bench_function("by_template_capture", |b| {
        b.iter(|| value_by_template(black_box(ID), black_box(ROUTE), black_box("scope")));
    });

    let route = PathTemplate::from_static(ROUTE).expect("route is valid");
    c.bench_function("path_template_single", |b| {
        b.iter(|| route.value_of(black_box(ID), black_box("lockName")));
    });
}

criterion_group!(benches, bench_by_name, bench_by_template);
criterion_main!(benches);
