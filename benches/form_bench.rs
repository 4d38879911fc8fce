//! Benchmark for re-evaluating forms after each edit.
//!
//! Every edit re-evaluates the whole form against the new state, so the cost
//! of one evaluation bounds how responsive an editor can be.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use formlets::form::{ChangeFn, EditContext};
use formlets::lens;
use formlets::simple::{ArrayOptions, RecordBuilder, array, fields};
use formlets::validation::Validated;
use std::hint::black_box;

#[derive(Clone, Debug)]
struct LineItem {
    label: Validated<String>,
    amount: Validated<String>,
    year: Validated<String>,
}

fn line_item(index: usize) -> LineItem {
    LineItem {
        label: Validated::touched(format!("item {index}")),
        amount: Validated::touched(format!("{index}.50")),
        year: Validated::touched("2024".to_string()),
    }
}

// =============================================================================
// Record of fields
// =============================================================================

fn benchmark_record(criterion: &mut Criterion) {
    let form = RecordBuilder::<LineItem>::new()
        .field_at("label", lens!(LineItem, label), fields::required_text("Label"))
        .field_at("amount", lens!(LineItem, amount), fields::dollars("Amount"))
        .field_at("year", lens!(LineItem, year), fields::year("Year", None))
        .build();
    let state = line_item(1);

    criterion.bench_function("record_revalidate", |bencher| {
        bencher.iter(|| black_box(form.revalidate(black_box(&state))));
    });

    criterion.bench_function("record_evaluate_and_render", |bencher| {
        bencher.iter(|| {
            let evaluation = form.evaluate(black_box(&state));
            black_box(evaluation.edit.render(EditContext::new(ChangeFn::ignore())))
        });
    });
}

// =============================================================================
// Array of records
// =============================================================================

fn benchmark_array(criterion: &mut Criterion) {
    let row = RecordBuilder::<LineItem>::new()
        .field_at("label", lens!(LineItem, label), fields::required_text("Label"))
        .field_at("amount", lens!(LineItem, amount), fields::dollars("Amount"))
        .field_at("year", lens!(LineItem, year), fields::year("Year", None))
        .build();
    let form = array(row, line_item(0), ArrayOptions::new());

    let mut group = criterion.benchmark_group("array_evaluate_and_render");
    for size in [10, 100, 1000] {
        let rows: Vec<LineItem> = (0..size).map(line_item).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |bencher, rows| {
            bencher.iter(|| {
                let evaluation = form.evaluate(black_box(rows));
                black_box(evaluation.edit.render(EditContext::new(ChangeFn::ignore())))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_record, benchmark_array);
criterion_main!(benches);
