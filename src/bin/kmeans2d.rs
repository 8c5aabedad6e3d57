use clap::Parser;
use env_logger::Env;
use kmeans2d::*;
use rand::prelude::*;
use std::process::ExitCode;

/// Cluster randomly generated integer-grid points with Lloyd's k-means.
#[derive(Debug, Parser)]
#[command(name = "kmeans2d")]
#[command(about = "Cluster random two-dimensional points and print the final centroids")]
struct Cli {
    /// Number of points to generate
    #[arg(short = 'n', long = "points", default_value_t = 100)]
    points: usize,
    /// Number of clusters
    #[arg(short = 'k', long = "clusters", default_value_t = 3)]
    clusters: usize,
    /// Maximal centroid movement at which the calculation counts as converged
    #[arg(short = 't', long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,
    /// Iteration limit
    #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
    max_iter: usize,
    /// Coordinates are drawn from the integers 0..range
    #[arg(long, default_value_t = 100)]
    range: u32,
    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// Pick initial centroids independently, allowing the same point to be picked twice
    #[arg(long)]
    with_replacement: bool,
    /// Move the worst represented point into clusters that run empty
    #[arg(long)]
    reseed_empty: bool,
}

fn generate_samples(rnd: &mut impl Rng, sample_cnt: usize, range: u32) -> Vec<Point<f64>> {
    (0..sample_cnt)
        .map(|_| Point::new(f64::from(rnd.gen_range(0..range)), f64::from(rnd.gen_range(0..range))))
        .collect()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::init_from_env(Env::default().filter_or("RUST_LOG", "info"));

    if cli.range == 0 {
        eprintln!("Error: invalid parameter range: must be at least 1");
        return ExitCode::FAILURE;
    }
    let mut rnd = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let samples = generate_samples(&mut rnd, cli.points, cli.range);

    let policy = if cli.reseed_empty { EmptyClusterPolicy::ReseedFarthest } else { EmptyClusterPolicy::Retain };
    let conf = KMeansConfig::build()
        .random_generator(rnd)
        .tolerance(cli.tolerance)
        .empty_clusters(policy)
        .build();

    let kmean = KMeans::new(samples);
    let result = if cli.with_replacement {
        kmean.kmeans_lloyd(cli.clusters, cli.max_iter, KMeans::init_random_sample_with_replacement, &conf)
    } else {
        kmean.kmeans_lloyd(cli.clusters, cli.max_iter, KMeans::init_random_sample, &conf)
    };

    match result {
        Ok(state) => {
            log::info!("{:?} after {} iterations, error: {:.4}", state.phase, state.iterations, state.distsum);
            print!("{}", state);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
