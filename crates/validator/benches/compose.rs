use attrcheck_validator::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;

fn bench_validate(c: &mut Criterion) {
    let composer: Composer<()> = compose(
        spec! {
            "name" => [required()],
            "age" => [required(), json()],
            "bio" => [valid()],
            "settings" => [required(), json()],
        }
        .expect("non-empty spec"),
    );

    let passing = attributes_from_json(json!({
        "name": "Ada",
        "age": "36",
        "bio": "",
        "settings": r#"{"theme": "dark", "tags": [1, 2, 3]}"#
    }))
    .expect("object");
    let failing = attributes_from_json(json!({ "name": "", "age": "{" })).expect("object");

    let mut group = c.benchmark_group("composer");
    group.bench_function("all_valid", |b| {
        b.iter(|| composer.validate(black_box(&()), black_box(&passing)));
    });
    group.bench_function("mostly_invalid", |b| {
        b.iter(|| composer.validate(black_box(&()), black_box(&failing)));
    });
    group.finish();
}

fn bench_required(c: &mut Criterion) {
    let v = required();
    let value = AttributeValue::from("present");
    c.bench_function("required/string", |b| {
        b.iter(|| AttributeValidator::<()>::validate(&v, black_box(Some(&value)), "a", &()));
    });
}

criterion_group!(benches, bench_validate, bench_required);
criterion_main!(benches);
