use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use itemset_miner::{mine, FPGrowthMiner, ItemSupportList, MinerConfig, StreamingState};
use itemset_miner::fp::streaming::{
    build_pass, count_pass, finalize_building, finalize_counts, mine_patterns,
};

/// Generate synthetic client/method usage
///
/// Parameters:
/// - num_transactions: Number of client transactions
/// - num_items: Number of distinct methods
/// - avg_transaction_size: Average methods called per client
/// - density: Chance each drawn method is kept (0.0-1.0)
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Vec<ItemSupportList> {
    let mut rng = rand::thread_rng();

    (0..num_transactions)
        .map(|tx_idx| {
            let random_factor: f64 = rng.r#gen();
            let num_items_in_tx =
                (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
            let num_items_in_tx = num_items_in_tx.min(num_items);

            let mut items = Vec::with_capacity(num_items_in_tx);
            for _ in 0..num_items_in_tx {
                let density_check: f64 = rng.r#gen();
                if density_check < density {
                    items.push(format!("method{}", rng.gen_range(0..num_items)));
                }
            }
            ItemSupportList::transaction(format!("Client{tx_idx}"), items, 1.0)
        })
        .collect()
}

/// Absolute support for a fraction of the transactions
fn min_count(num_transactions: usize, fraction: f64) -> i64 {
    (fraction * num_transactions as f64).ceil() as i64
}

/// Benchmark FP-Growth with different dataset sizes
fn bench_fp_growth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
        ("xlarge_5000tx", 5000, 100, 20),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);
        let min_support = min_count(num_tx, 0.1);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| mine(black_box(tx), black_box(min_support)));
        });
    }

    group.finish();
}

/// Benchmark FP-Growth with different min_support thresholds
fn bench_fp_growth_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_min_support");

    let transactions = generate_transactions(1000, 50, 10, 0.7);

    for fraction in [0.05, 0.1, 0.2, 0.3, 0.5] {
        let min_support = min_count(transactions.len(), fraction);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", fraction)),
            &min_support,
            |b, &sup| {
                b.iter(|| mine(black_box(&transactions), black_box(sup)));
            },
        );
    }

    group.finish();
}

/// Benchmark FP-Growth with different data densities
fn bench_fp_growth_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_density");

    let densities = vec![
        ("sparse_30", 0.3),
        ("medium_50", 0.5),
        ("dense_70", 0.7),
        ("very_dense_90", 0.9),
    ];

    for (name, density) in densities {
        let transactions = generate_transactions(1000, 50, 10, density);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| mine(black_box(tx), black_box(100)));
        });
    }

    group.finish();
}

/// Two-pass mining against the single call
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_streaming");

    let transactions = generate_transactions(2000, 60, 10, 0.7);
    let min_support = min_count(transactions.len(), 0.1);

    group.bench_function("single_call", |b| {
        b.iter(|| mine(black_box(&transactions), black_box(min_support)));
    });

    group.bench_function("batches_of_250", |b| {
        b.iter(|| {
            let mut state = StreamingState::new();
            for batch in transactions.chunks(250) {
                count_pass(&mut state, batch).unwrap();
            }
            finalize_counts(&mut state, MinerConfig::new(min_support)).unwrap();
            for batch in transactions.chunks(250) {
                build_pass(&mut state, batch).unwrap();
            }
            finalize_building(&mut state).unwrap();
            mine_patterns(&state).unwrap()
        });
    });

    group.finish();
}

/// Sequential against rayon-backed mining; the same unless `parallel` is on
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_parallel");

    let transactions = generate_transactions(5000, 80, 15, 0.8);
    let min_support = min_count(transactions.len(), 0.05);

    for parallel in [false, true] {
        let config = MinerConfig::new(min_support).with_parallel(parallel);
        let miner = FPGrowthMiner::from_config(config).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(parallel), &miner, |b, miner| {
            b.iter(|| miner.mine(black_box(&transactions)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fp_growth_scaling,
    bench_fp_growth_min_support,
    bench_fp_growth_density,
    bench_streaming,
    bench_parallel
);
criterion_main!(benches);
