use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use craps_table::{
    BetBook, BetCategory, CrapsTable, DiceSource, TableConfig,
    game::{PayoutTable, RollOutcome, settle},
};
use std::hint::black_box;

/// Helper to build a book with the first `n` categories staked
fn book_with_bets(n: usize) -> BetBook {
    let mut book = BetBook::new();
    for category in BetCategory::ALL.iter().take(n) {
        book.stage(*category, 10, u64::MAX).unwrap();
    }
    book
}

/// Benchmark settling a single pass line bet on the come-out
fn bench_settle_single_bet(c: &mut Criterion) {
    let book = book_with_bets(1);
    let payouts = PayoutTable::standard();
    let outcome = RollOutcome::new(3, 4).unwrap();

    c.bench_function("settle_single_bet", |b| {
        b.iter(|| settle(black_box(outcome), &book, None, &payouts));
    });
}

/// Benchmark settlement as the layout fills up
fn bench_settle_by_book_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("settle_by_book_size");
    let payouts = PayoutTable::standard();
    let outcome = RollOutcome::new(2, 2).unwrap();

    for size in [1, 6, 12, BetCategory::ALL.len()] {
        let book = book_with_bets(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| settle(black_box(outcome), book, Some(6), &payouts));
        });
    }

    group.finish();
}

/// Benchmark a full table roll: lock, draw, settle and apply
fn bench_table_roll(c: &mut Criterion) {
    c.bench_function("table_roll_seeded", |b| {
        let mut table = CrapsTable::with_balance(TableConfig::default(), u64::MAX / 2).unwrap();
        let mut dice = DiceSource::from_seed(Some(42));
        b.iter(|| {
            if table.book().is_empty() {
                table.add(BetCategory::PassLine, 10).unwrap();
                table.add(BetCategory::Field, 10).unwrap();
            }
            black_box(table.begin_roll(&mut dice).unwrap())
        });
    });
}

criterion_group!(settlement, bench_settle_single_bet, bench_settle_by_book_size);

criterion_group!(table_operations, bench_table_roll);

criterion_main!(settlement, table_operations);
