use criterion::{black_box, criterion_group, criterion_main, Criterion};
use expense_core::ledger::{Ledger, TransactionKind};

fn build_sample_ledger(entry_count: usize) -> Ledger {
    let mut ledger = Ledger::new();
    for idx in 0..entry_count {
        let kind = if idx % 3 == 0 {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };
        let amount = format!("{}", 50 + (idx % 100));
        ledger
            .add_transaction("Entry", &amount, kind)
            .expect("valid submission");
    }
    ledger
}

fn bench_summary_recompute(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));

    c.bench_function("summary_10k", |b| {
        b.iter(|| black_box(ledger.summary()));
    });

    c.bench_function("chart_series_10k", |b| {
        b.iter(|| black_box(ledger.chart_series()));
    });
}

fn bench_append(c: &mut Criterion) {
    c.bench_function("append_1k", |b| {
        b.iter(|| build_sample_ledger(black_box(1_000)));
    });
}

criterion_group!(benches, bench_summary_recompute, bench_append);
criterion_main!(benches);
