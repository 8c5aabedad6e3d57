use crate::{memory::*, AbortStrategy, DistanceFunction, EuclideanDistance, KMeansError, Result};
use std::cell::RefCell;
use std::fmt;
use rand::prelude::*;

pub type InitDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>);
pub type IterationDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>, usize, T);

/// Iteration limit used by the command line tool, and a sensible default for library users.
pub const DEFAULT_MAX_ITER: usize = 100;
/// Default tolerance of [`AbortStrategy::CentroidShift`].
pub const DEFAULT_TOLERANCE: f64 = 0.0001;

/// Specifies what happens to a cluster that did not get any samples assigned during an iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EmptyClusterPolicy {
    /// The cluster keeps its previous centroid.
    #[default]
    Retain,
    /// The sample that is farthest away from its centroid (and not alone in its cluster) is moved
    /// into the empty cluster, which then consists of exactly this sample.
    ReseedFarthest
}

/// This is a structure holding various configuration options for the a k-means calculations, such as
/// the random number generator to use, or a couple of callbacks, that can be set to get status information from
/// a running k-means calculation.
///
/// For a more detailed information about all possible options, have a look at [`KMeansConfigBuilder`].
pub struct KMeansConfig<'a, T: Primitive> {
    /// Callback that is called, when the initialization phase finished
    /// ## Arguments
    /// - **state**: Current [`KMeansState`] after the initialization
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each iteration
    /// ## Arguments
    /// - **state**: Current[`KMeansState`] after the iteration
    /// - **iteration_id**: Number of the current iteration
    /// - **distsum**: New distance sum (**state** contains the distsum from the previous iteration)
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// Random number generator to use
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
    /// The abort-strategy to use for the running calculation
    pub(crate) abort_strategy: AbortStrategy<T>,
    /// How clusters without samples are treated
    pub(crate) empty_clusters: EmptyClusterPolicy
}
impl<'a, T: Primitive> Default for KMeansConfig<'a, T> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_,_,_| {},
            rnd: Box::new(RefCell::new(rand::thread_rng())),
            abort_strategy: AbortStrategy::<T>::CentroidShift {
                tolerance: T::from(DEFAULT_TOLERANCE).unwrap_or_else(T::epsilon)
            },
            empty_clusters: EmptyClusterPolicy::default()
        }
    }
}
impl<'a, T: Primitive> KMeansConfig<'a, T> {
    /// Use the [`KMeansConfigBuilder`] to build a [`KMeansConfig`] instance.
    pub fn build() -> KMeansConfigBuilder<'a, T> {
        KMeansConfigBuilder { config: KMeansConfig::default() }
    }
}
impl<'a, T: Primitive> fmt::Debug for KMeansConfig<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KMeansConfig")
            .field("abort_strategy", &self.abort_strategy)
            .field("empty_clusters", &self.empty_clusters)
            .finish_non_exhaustive()
    }
}

pub struct KMeansConfigBuilder<'a, T: Primitive> {
    config: KMeansConfig<'a, T>
}
impl<'a, T: Primitive> KMeansConfigBuilder<'a, T> {
    /// Set the callback that should be called after the centroid initialization, before the iteration starts.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Set the callback that should be called after each iteration during a running k-means calculation.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Set the random number generator that should be used in the k-means calculation.
    /// Use a seeded generator for deterministically repeatable results.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd)); self
    }
    /// Set the abort-strategy to use during a running k-means calculation. For more information,
    /// see documentation of [`AbortStrategy`].
    /// ## Default
    /// [`AbortStrategy::CentroidShift`] `{ tolerance: 0.0001 }`
    pub fn abort_strategy(mut self, abort_strategy: AbortStrategy<T>) -> Self {
        self.config.abort_strategy = abort_strategy; self
    }
    /// Shorthand for [`AbortStrategy::CentroidShift`] with the given tolerance.
    pub fn tolerance(self, tolerance: T) -> Self {
        self.abort_strategy(AbortStrategy::CentroidShift { tolerance })
    }
    /// Set how clusters that end up without any samples are handled.
    /// ## Default
    /// [`EmptyClusterPolicy::Retain`]
    pub fn empty_clusters(mut self, policy: EmptyClusterPolicy) -> Self {
        self.config.empty_clusters = policy; self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> KMeansConfig<'a, T> { self.config }
}


/// Lifecycle of a k-means calculation.
/// A returned [`KMeansState`] is always in one of the two terminal phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Iterating,
    /// The abort strategy stopped the calculation.
    Converged,
    /// The iteration limit was reached before the abort strategy stopped the calculation.
    Exhausted
}

/// A cluster's center, together with the amount of samples assigned to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cluster<T: Primitive> {
    pub centroid: Point<T>,
    pub size: usize
}

/// This is the internally used data-structure, storing the current state during calculation, as
/// well as the final result, as returned by the API.
/// All mutations are done in this structure, making [`KMeans`] immutable, so the dataset is never
/// touched by a calculation.
///
/// ## Generics
/// - **T**: Underlying primitive type that was used for the calculation
///
/// ## Fields
/// - **k**: The amount of clusters that were requested when calculating this k-means result
/// - **distsum**: The total sum of squared distances from all samples to their respective centroids
/// - **clusters**: Calculated cluster centers and their sample counts
/// - **assignments**: Vector mapping each sample to its respective nearest cluster
/// - **centroid_distances**: Vector containing each sample's distance to its centroid
/// - **iterations**: Amount of iterations that did not satisfy the abort strategy. The final pass of a
///   converged calculation only confirms convergence and is not counted, an exhausted one reports **max_iter**
/// - **phase**: [`Phase::Converged`] or [`Phase::Exhausted`] once the calculation finished
#[derive(Clone, Debug)]
pub struct KMeansState<T: Primitive> {
    pub k: usize,
    pub distsum: T,
    pub clusters: Vec<Cluster<T>>,
    pub assignments: Vec<usize>,
    pub centroid_distances: Vec<T>,
    pub iterations: usize,
    pub phase: Phase
}
impl<T: Primitive> KMeansState<T> {
    pub(crate) fn new(sample_cnt: usize, k: usize) -> Self {
        Self {
            k,
            distsum: T::infinity(),
            clusters: vec![Cluster { centroid: Point::origin(), size: 0 }; k],
            assignments: vec![0usize;sample_cnt],
            centroid_distances: vec![T::infinity();sample_cnt],
            iterations: 0,
            phase: Phase::Initializing
        }
    }

    pub(crate) fn set_centroid(&mut self, idx: usize, centroid: Point<T>) {
        self.clusters[idx] = Cluster { centroid, size: 0 };
    }

    pub(crate) fn centroid_snapshot(&self) -> Vec<Point<T>> {
        self.clusters.iter().map(|c| c.centroid).collect()
    }

    pub(crate) fn reset_frequencies(&mut self) {
        self.clusters.iter_mut().for_each(|c| c.size = 0);
    }

    /// The calculated centroids, in cluster order.
    pub fn centroids(&self) -> impl Iterator<Item = &Point<T>> + '_ {
        self.clusters.iter().map(|c| &c.centroid)
    }

    pub fn converged(&self) -> bool {
        self.phase == Phase::Converged
    }
}
/// Renders the final centroids, one line per cluster with two decimals and 1-based indices.
impl<T: Primitive> fmt::Display for KMeansState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final cluster centroids:")?;
        for (idx, c) in self.centroids().enumerate() {
            writeln!(f, "Cluster {}: ({:.2}, {:.2})", idx + 1, c.x, c.y)?;
        }
        Ok(())
    }
}




/// Entrypoint of this crate's API-Surface.
///
/// Create an instance of this struct, giving the samples you want to operate on. The primitive type
/// of the passed samples will be the type used internaly for all calculations, as well as the result
/// as stored in the returned [`KMeansState`] structure.
///
/// ## Supported variants
/// - k-Means clustering (Lloyd) [`KMeans::kmeans_lloyd`]
///
/// ## Supported initialization methods
/// - Random-Sample [`KMeans::init_random_sample`]
/// - Random-Sample, with replacement [`KMeans::init_random_sample_with_replacement`]
/// - Precomputed [`KMeans::init_precomputed`]
pub struct KMeans<T: Primitive, D: DistanceFunction<T> = EuclideanDistance> {
    pub(crate) samples: Vec<Point<T>>,
    pub(crate) distance: D
}
impl<T: Primitive> KMeans<T, EuclideanDistance> {
    /// Create a new instance of the [`KMeans`] structure, using [`EuclideanDistance`].
    pub fn new(samples: Vec<Point<T>>) -> Self {
        Self::with_distance(samples, EuclideanDistance)
    }
}
impl<T: Primitive, D: DistanceFunction<T>> KMeans<T, D> {
    /// Create a new instance of the [`KMeans`] structure.
    ///
    /// ## Arguments
    /// - **samples**: The samples to cluster
    /// - **distance**: Distance function used for assignment and convergence checks
    pub fn with_distance(samples: Vec<Point<T>>, distance: D) -> Self {
        Self { samples, distance }
    }

    /// Create a new instance from a row-major coordinate vector `[x0, y0, x1, y1, ...]`.
    pub fn from_coordinates(coordinates: &[T], distance: D) -> Result<Self> {
        if coordinates.len() % 2 != 0 {
            return Err(KMeansError::InvalidParameter { name: "coordinates", message: "length must be a multiple of 2" });
        }
        let samples = coordinates.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect();
        Ok(Self::with_distance(samples, distance))
    }

    pub fn samples(&self) -> &[Point<T>] {
        &self.samples
    }

    pub fn sample_cnt(&self) -> usize {
        self.samples.len()
    }

    /// Check everything that can be checked before any centroid is initialized.
    pub(crate) fn validate(&self, k: usize, max_iter: usize, config: &KMeansConfig<'_, T>) -> Result<()> {
        if self.samples.is_empty() {
            return Err(KMeansError::EmptyDataset);
        }
        if k == 0 || k > self.samples.len() {
            return Err(KMeansError::InvalidClusterCount { requested: k, sample_cnt: self.samples.len() });
        }
        if max_iter == 0 {
            return Err(KMeansError::InvalidParameter { name: "max_iter", message: "must be at least 1" });
        }
        if let Some(index) = self.samples.iter().position(|s| !s.is_finite()) {
            return Err(KMeansError::NonFiniteSample { index });
        }
        config.abort_strategy.validate()
    }

    /// Recalculate each sample's distance to the centroid it is currently assigned to.
    pub(crate) fn update_centroid_distances(&self, state: &mut KMeansState<T>) {
        let clusters = &state.clusters;
        self.samples.iter()
            .zip(state.assignments.iter().cloned())
            .zip(state.centroid_distances.iter_mut())
            .for_each(|((s, assignment), centroid_dist)| {
                *centroid_dist = self.distance.distance(s, &clusters[assignment].centroid);
            });
    }

    /// Assign every sample to its nearest centroid, ties going to the lower cluster index.
    /// Cluster sizes are expected to be reset beforehand, they are incremented here.
    pub(crate) fn update_cluster_assignments(&self, state: &mut KMeansState<T>) {
        let clusters = &mut state.clusters;
        self.samples.iter()
            .zip(state.assignments.iter_mut())
            .zip(state.centroid_distances.iter_mut())
            .for_each(|((s, assignment), centroid_dist)| {
                let mut best_idx = 0;
                let mut best_dist = self.distance.distance(s, &clusters[0].centroid);
                for (idx, c) in clusters.iter().enumerate().skip(1) {
                    let dist = self.distance.distance(s, &c.centroid);
                    if dist < best_dist {
                        best_idx = idx;
                        best_dist = dist;
                    }
                }
                *assignment = best_idx;
                *centroid_dist = best_dist;
                clusters[best_idx].size += 1;
            });
    }



    /// Normal K-Means algorithm implementation (Lloyd): alternating assignment and update steps, until
    /// the configured [`AbortStrategy`] stops the calculation or **max_iter** iterations have been run.
    ///
    /// ## Arguments
    /// - **k**: Amount of clusters to search for
    /// - **max_iter**: Limit the maximum amount of iterations (see [`DEFAULT_MAX_ITER`])
    /// - **init**: Initialization-Method to use for the initialization of the **k** centroids
    /// - **config**: [`KMeansConfig`] instance, containing several configuration options for the calculation.
    ///
    /// ## Returns
    /// Instance of [`KMeansState`], containing the final state (result), or a [`KMeansError`] if the
    /// calculation was configured incorrectly. Errors are detected before the initialization runs.
    ///
    /// ## Example
    /// ```rust
    /// use kmeans2d::*;
    ///
    /// let samples = vec![
    ///     Point::new(0.0f64, 0.0), Point::new(0.0, 1.0),
    ///     Point::new(10.0, 0.0), Point::new(10.0, 1.0),
    /// ];
    /// let kmean = KMeans::new(samples);
    /// let result = kmean.kmeans_lloyd(2, DEFAULT_MAX_ITER, KMeans::init_random_sample, &KMeansConfig::default()).unwrap();
    ///
    /// print!("{}", result);
    /// println!("Cluster-Assignments: {:?}", result.assignments);
    /// ```
    pub fn kmeans_lloyd<'a, F>(&self, k: usize, max_iter: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>>
                where for<'c> F: FnOnce(&KMeans<T, D>, &mut KMeansState<T>, &KMeansConfig<'c, T>) -> Result<()> {
        crate::variants::Lloyd::calculate(self, k, max_iter, init, config)
    }

    /// Random sample initialization method (a.k.a. Forgy)
    ///
    /// ## Description
    /// This initialization method randomly selects k distinct samples as initial centroids (sampling without replacement).
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass a reference to it, to an instance-method of [`KMeans`].
    pub fn init_random_sample<'a>(kmean: &KMeans<T, D>, state: &mut KMeansState<T>, config: &KMeansConfig<'a, T>) -> Result<()> {
        crate::inits::randomsample::calculate(kmean, state, config)
    }

    /// Random sample initialization method, drawing an independent sample for each cluster.
    ///
    /// ## Description
    /// The same sample can be selected for multiple clusters, which then start out as duplicates. Duplicate
    /// clusters stay duplicates under [`EmptyClusterPolicy::Retain`], since ties always go to the lower index.
    pub fn init_random_sample_with_replacement<'a>(kmean: &KMeans<T, D>, state: &mut KMeansState<T>, config: &KMeansConfig<'a, T>) -> Result<()> {
        crate::inits::randomsample::calculate_with_replacement(kmean, state, config)
    }

    /// Precomputed initialization method
    ///
    /// ## Description
    /// Uses the given centroids as initial clusters. Exactly **k** centroids have to be given.
    pub fn init_precomputed(centroids: Vec<Point<T>>) -> impl for<'c> FnOnce(&KMeans<T, D>, &mut KMeansState<T>, &KMeansConfig<'c, T>) -> Result<()> {
        move |kmean, state, config| crate::inits::precomputed::calculate(kmean, state, config, centroids)
    }
}
