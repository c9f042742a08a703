//! Performance benchmark comparing serial and parallel generation computation

use std::time::Instant;

use game_of_life::{Algorithm, Grid};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

const SOUP_DENSITY: f64 = 0.3;

/// Average milliseconds per generation over `iterations` steps on a random soup
fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> anyhow::Result<f64> {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut current = Grid::new(size, size)?;
    current.randomize(&mut rng, SOUP_DENSITY);
    let mut next = current.clone();

    let start = Instant::now();
    for _ in 0..iterations {
        current.step_into(&mut next, algorithm);
        std::mem::swap(&mut current, &mut next);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Game of Life generation benchmark starting...");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations)?;
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;

        println!(
            "{:>10} {:>10.2}ms {:>10.2}ms {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 2000;
    let cells = (size * size) as f64;
    let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;
    info!(
        "Throughput at {}x{}: {:.1}M cells/sec",
        size,
        size,
        cells / (parallel_ms / 1000.0) / 1_000_000.0
    );

    Ok(())
}
