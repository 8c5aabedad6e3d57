//! # kmeans2d - API documentation
//!
//! Kmeans2d is a small rust library for the k-means-clustering of two-dimensional points.
//!
//! ## Design target
//! Its main target is a correct and easy to follow implementation of the classic batch
//! k-means algorithm (Lloyd), you will therefore find most of its API-surface rather plain.
//! Samples are given as a vector of [`Point`]s, and all intermediate state of a calculation
//! (assignments, cluster sizes, distances) is exposed in the returned [`KMeansState`].
//!
//! ## Supported centroid initializations
//! The outcome of each K-Means run depends on the initialization of its clusters. The supported
//! initialization methods are listed in the documentation of [`KMeans`]. Whether the same sample may be
//! picked for multiple clusters is an explicit choice between [`KMeans::init_random_sample`] and
//! [`KMeans::init_random_sample_with_replacement`].
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use kmeans2d::*;
//! use rand::prelude::*;
//!
//! let (sample_cnt, k) = (100, 3);
//!
//! // Generate some random data
//! let mut rnd = StdRng::seed_from_u64(1337);
//! let samples: Vec<Point<f64>> = (0..sample_cnt)
//!     .map(|_| Point::new(rnd.gen_range(0..100) as f64, rnd.gen_range(0..100) as f64))
//!     .collect();
//!
//! // Calculate kmeans, using random samples as initial centroids
//! let kmean = KMeans::new(samples);
//! let conf = KMeansConfig::build()
//!     .random_generator(rnd)
//!     .tolerance(0.0001)
//!     .build();
//! let result = kmean.kmeans_lloyd(k, DEFAULT_MAX_ITER, KMeans::init_random_sample, &conf).unwrap();
//!
//! print!("{}", result);
//! println!("Converged: {} after {} iterations", result.converged(), result.iterations);
//! println!("Cluster-Assignments: {:?}", result.assignments);
//! println!("Error: {}", result.distsum);
//! ```
//!
//! ## Example (using the status event callbacks)
//! ```rust
//! use kmeans2d::*;
//!
//! let samples = vec![
//!     Point::new(0.0f64, 0.0), Point::new(0.0, 1.0),
//!     Point::new(10.0, 0.0), Point::new(10.0, 1.0),
//! ];
//!
//! let conf = KMeansConfig::build()
//!     .init_done(&|_| println!("Initialization completed."))
//!     .iteration_done(&|s, nr, new_distsum|
//!         println!("Iteration {} - Error: {:.2} -> {:.2} | Improvement: {:.2}",
//!             nr, s.distsum, new_distsum, s.distsum - new_distsum))
//!     .build();
//!
//! let kmean = KMeans::new(samples);
//! let result = kmean.kmeans_lloyd(2, DEFAULT_MAX_ITER, KMeans::init_random_sample, &conf).unwrap();
//! print!("{}", result);
//! ```
//!
//! ## Short API-Overview / Description
//! Entry-point of the library is the [`KMeans`] struct. It takes over the samples into its ownership and
//! is generic over the primitive type and the [`DistanceFunction`] used for the calculations
//! ([`EuclideanDistance`] by default).
//!
//! Calling [`KMeans::kmeans_lloyd`] does not mutate the [`KMeans`] instance. Each calculation validates its
//! parameters first (returning a [`KMeansError`] for e.g. more clusters than samples), then initializes the
//! clusters, and alternates between assigning samples to their nearest centroid and moving each centroid
//! to the mean of its samples, until the configured [`AbortStrategy`] stops it or the iteration limit
//! is reached. Both outcomes are reported through [`KMeansState::phase`].

#[macro_use] mod helpers;
mod memory;
mod error;
mod distances;
mod api;
mod variants;
mod inits;
mod abort_strategy;

pub use abort_strategy::{has_converged, AbortStrategy};
pub use api::{
    Cluster, EmptyClusterPolicy, InitDoneCallbackFn, IterationDoneCallbackFn, KMeans, KMeansConfig, KMeansConfigBuilder,
    KMeansState, Phase, DEFAULT_MAX_ITER, DEFAULT_TOLERANCE,
};
pub use distances::{DistanceFunction, EuclideanDistance};
pub use error::{KMeansError, Result};
pub use memory::{Point, Primitive};
