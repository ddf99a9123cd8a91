// scripts/benchmark.rs
use bsm_greeks::analytics::{Greek, OptionType, PricingParameters};
use bsm_greeks::math_utils::Timer;
use bsm_greeks::sweep::{price_curves, sweep, SweepConfig, SweepTarget};
use bsm_greeks::PricingResult;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            cpu_cores: num_cpus::get(),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_cpu_model() -> String {
        std::fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|line| line.starts_with("model name"))
                    .and_then(|line| line.split(':').nth(1))
                    .map(|s| s.trim().to_string())
            })
            .unwrap_or_else(|| "Unknown CPU".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    samples: usize,
    parallel: bool,
    time_ms: f64,
    throughput_samples_per_sec: f64,
}

fn time_sweep<F>(name: &str, samples: usize, parallel: bool, run: F) -> PricingResult<BenchmarkResult>
where
    F: Fn(&SweepConfig) -> PricingResult<usize>,
{
    let cfg = SweepConfig {
        samples,
        parallel,
        ..Default::default()
    };

    // Warm-up pass so the rayon pool is spun up before timing.
    run(&cfg)?;

    let mut timer = Timer::new();
    timer.start();
    let evaluated = run(&cfg)?;
    let time_ms = timer.elapsed_ms();

    Ok(BenchmarkResult {
        name: name.to_string(),
        samples,
        parallel,
        time_ms,
        throughput_samples_per_sec: evaluated as f64 / (time_ms / 1000.0),
    })
}

fn run_sweep_benchmarks() -> PricingResult<Vec<BenchmarkResult>> {
    let params = PricingParameters::new(42.0, 40.0, 0.5, 0.1, 0.2, OptionType::Call)?;
    let mut results = Vec::new();

    for &samples in &[100, 10_000, 1_000_000] {
        println!("Running sweeps with {} samples...", samples);
        for parallel in [false, true] {
            results.push(time_sweep("Call price", samples, parallel, |cfg| {
                Ok(sweep(&params, cfg, SweepTarget::Price)?.len())
            })?);
            results.push(time_sweep("Call + put prices", samples, parallel, |cfg| {
                let curves = price_curves(&params, cfg)?;
                Ok(curves.call.len() + curves.put.len())
            })?);
            results.push(time_sweep("Theta", samples, parallel, |cfg| {
                Ok(sweep(&params, cfg, SweepTarget::Greek(Greek::Theta))?.len())
            })?);
        }
    }

    Ok(results)
}

fn write_results_to_csv(results: &[BenchmarkResult], system_info: &SystemInfo, filename: &str) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);

    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU: {}", system_info.cpu_model)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "Benchmark,Samples,Parallel,Time_ms,Throughput_samples_per_sec")?;

    for result in results {
        writeln!(
            file,
            "{},{},{},{:.3},{:.0}",
            result.name, result.samples, result.parallel, result.time_ms, result.throughput_samples_per_sec
        )?;
    }
    file.flush()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("bsm-greeks Sweep Benchmark");
    println!("==========================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU: {}", system_info.cpu_model);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let results = match run_sweep_benchmarks() {
        Ok(results) => results,
        Err(e) => {
            eprintln!("benchmark failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("\n{:<20}{:>10}{:>10}{:>14}{:>18}", "Benchmark", "Samples", "Parallel", "Time (ms)", "Samples/sec");
    for r in &results {
        println!(
            "{:<20}{:>10}{:>10}{:>14.3}{:>18.0}",
            r.name, r.samples, r.parallel, r.time_ms, r.throughput_samples_per_sec
        );
    }

    let filename = env::args().nth(1).unwrap_or_else(|| "benchmark_results.csv".to_string());
    match write_results_to_csv(&results, &system_info, &filename) {
        Ok(()) => println!("\nResults written to {}", filename),
        Err(e) => eprintln!("could not write {}: {}", filename, e),
    }
}
