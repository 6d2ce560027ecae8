use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use mcm_dp::MatrixChainProblem;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_dims(rng: &mut StdRng, matrices: usize) -> Vec<u64> {
    (0..=matrices).map(|_| rng.gen_range(1..=512)).collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(p) => p.memory() / 1024,
        None => 0,
    }
}

fn bench_matrix_chain_perf(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_chain_perf");
    group.sample_size(10);
    for &n in &[128usize, 256, 512] {
        group.bench_function(format!("matrices_{n}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_dims(&mut rng, n)
                },
                |p| {
                    let before = rss_kib();
                    let solution = MatrixChainProblem::new(p)
                        .and_then(MatrixChainProblem::solve)
                        .expect("random chain must solve");
                    let after = rss_kib();
                    criterion::black_box(solution.cost());
                    // record memory delta to stderr to avoid criterion noise
                    eprintln!(
                        "RSS KiB delta (matrix chain {n}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_matrix_chain_perf);
criterion_main!(benches);
