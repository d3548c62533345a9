use anyhow::{ensure, Context, Result};
use clap::Parser;
use classic_algos::fibonacci::{IterativeFibonacci, RecursiveFibonacci, MAX_INDEX};
use classic_algos::sorting::{BubbleSorter, EarlyExitBubbleSorter, StdSorter};
use classic_algos::{logging, Fibonacci, Sorter};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "benchmark",
    version,
    about = "Check and time every sort and Fibonacci strategy"
)]
struct Config {
    /// Length of each random input sorted
    #[arg(long, default_value_t = 200)]
    size: usize,

    /// Timed iterations per implementation
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    iterations: u32,

    /// Base seed for the random inputs
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Largest index timed for the Fibonacci strategies
    #[arg(long, default_value_t = 20)]
    fib_index: i64,
}

#[derive(Serialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum Kind {
    Sort,
    Fibonacci,
}

#[derive(Serialize)]
struct BenchmarkResult {
    name: String,
    kind: Kind,
    ops_per_second: f64,
    avg_ns: f64,
    correct: bool,
}

#[derive(Serialize)]
struct FullResults {
    results: Vec<BenchmarkResult>,
    correctness: bool,
}

const WARMUP_ITERATIONS: usize = 5;
const VERIFY_SEEDS: u64 = 20;

fn generate_random_data(seed: u64, size: usize) -> Vec<i32> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(-10000..10000)).collect()
}

fn seeds(config: &Config) -> Vec<u64> {
    // Seeds only need to be distinct, so wrap near u64::MAX
    (0..VERIFY_SEEDS)
        .map(|i| config.seed.wrapping_add(i * 7))
        .collect()
}

fn verify_sort<S: Sorter>(sorter: &S, config: &Config) -> bool {
    for seed in seeds(config) {
        let mut data = generate_random_data(seed, config.size);
        let mut expected = data.clone();
        expected.sort();
        sorter.sort(&mut data);
        if data != expected {
            warn!(sorter = sorter.name(), seed, "sort output differs from reference");
            return false;
        }
    }

    // Edge cases
    let mut empty: Vec<i32> = vec![];
    sorter.sort(&mut empty);

    let mut single = vec![42];
    sorter.sort(&mut single);

    let mut demo = vec![5, 1, 4, 2, 8];
    sorter.sort(&mut demo);

    single == vec![42] && demo == vec![1, 2, 4, 5, 8]
}

fn verify_fibonacci<F: Fibonacci>(fib: &F, config: &Config) -> bool {
    let reference = IterativeFibonacci;
    for n in 0..=config.fib_index {
        if fib.term(n) != reference.term(n) {
            warn!(strategy = fib.name(), n, "Fibonacci term differs from reference");
            return false;
        }
    }
    fib.term(-1).is_err() && fib.term(MAX_INDEX + 1).is_err()
}

fn failed(name: &str, kind: Kind) -> BenchmarkResult {
    BenchmarkResult {
        name: name.to_string(),
        kind,
        ops_per_second: 0.0,
        avg_ns: f64::INFINITY,
        correct: false,
    }
}

fn timed(name: &str, kind: Kind, total_time: Duration, iterations: u32) -> BenchmarkResult {
    let avg_ns = total_time.as_nanos() as f64 / iterations.max(1) as f64;
    let ops_per_second = if avg_ns > 0.0 {
        1_000_000_000.0 / avg_ns
    } else {
        f64::INFINITY
    };
    info!(name, avg_ns, "benchmarked");

    BenchmarkResult {
        name: name.to_string(),
        kind,
        ops_per_second,
        avg_ns,
        correct: true,
    }
}

fn benchmark_sorter<S: Sorter>(sorter: &S, config: &Config) -> BenchmarkResult {
    // Verify correctness first
    if !verify_sort(sorter, config) {
        return failed(sorter.name(), Kind::Sort);
    }

    let seeds = seeds(config);

    // Warmup
    for &seed in seeds.iter().take(WARMUP_ITERATIONS) {
        let mut data = generate_random_data(seed, config.size);
        sorter.sort(&mut data);
    }

    // Benchmark
    let mut total_time = Duration::ZERO;
    for &seed in seeds.iter().cycle().take(config.iterations as usize) {
        let mut data = generate_random_data(seed, config.size);

        let start = Instant::now();
        sorter.sort(&mut data);
        total_time += start.elapsed();
        std::hint::black_box(&data);
    }

    timed(sorter.name(), Kind::Sort, total_time, config.iterations)
}

fn benchmark_fibonacci<F: Fibonacci>(fib: &F, config: &Config) -> Result<BenchmarkResult> {
    if !verify_fibonacci(fib, config) {
        return Ok(failed(fib.name(), Kind::Fibonacci));
    }

    let n = std::hint::black_box(config.fib_index);
    for _ in 0..WARMUP_ITERATIONS {
        fib.term(n)?;
    }

    let mut total_time = Duration::ZERO;
    for _ in 0..config.iterations {
        let start = Instant::now();
        let term = fib.term(n)?;
        total_time += start.elapsed();
        std::hint::black_box(term);
    }

    Ok(timed(fib.name(), Kind::Fibonacci, total_time, config.iterations))
}

fn run(config: &Config) -> Result<FullResults> {
    ensure!(
        (0..=MAX_INDEX).contains(&config.fib_index),
        "--fib-index must be between 0 and {MAX_INDEX}, got {}",
        config.fib_index
    );

    let mut results = vec![
        benchmark_sorter(&BubbleSorter, config),
        benchmark_sorter(&EarlyExitBubbleSorter, config),
        benchmark_sorter(&StdSorter, config),
        benchmark_fibonacci(&IterativeFibonacci, config)?,
    ];

    // Exponential; skip it past where a run would take minutes
    if config.fib_index <= 40 {
        results.push(benchmark_fibonacci(&RecursiveFibonacci, config)?);
    } else {
        warn!(fib_index = config.fib_index, "skipping recursive strategy");
    }

    Ok(summarize(results))
}

fn summarize(results: Vec<BenchmarkResult>) -> FullResults {
    let correctness = results.iter().all(|r| r.correct);
    FullResults {
        results,
        correctness,
    }
}

fn main() {
    logging::init();
    let config = Config::parse();

    let outcome = run(&config).and_then(|full_results| {
        serde_json::to_string(&full_results).context("serializing benchmark results")
    });
    match outcome {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(1);
        }
    }
}
