use crate::{memory::*, Cluster, DistanceFunction, KMeansError, Result};

/// Enum with possible abort strategies.
/// These strategies specify when a running iteration (with the k-means calculation) is considered
/// finished. A calculation stopped by its abort strategy ends in [`crate::Phase::Converged`], while one
/// that runs into the iteration limit ends in [`crate::Phase::Exhausted`].
#[derive(Clone, Debug, PartialEq)]
pub enum AbortStrategy<T: Primitive> {
	/// This strategy aborts the calculation as soon as no centroid moved farther than `tolerance`
	/// (measured with the configured distance function) during the last iteration.
	/// ## Fields:
	/// - **tolerance**: Maximal centroid movement still considered "not moving" (`movement <= tolerance`)
	CentroidShift { tolerance: T },
	/// This strategy aborts the calculation directly after an iteration produced no improvement of the
	/// distance sum where `improvement > threshold` for the first time.
	/// ## Fields:
	/// - **threshold**: Threshold, used to detect an improvement (`improvement > threshold`)
	NoImprovement { threshold: T },
	/// This strategy aborts the calculation, when there have not been any improvements after **x** iterations,
	/// where `improvement > threshold`.
	/// ## Fields:
	/// - **x**: The amount of consecutive iterations without improvement, after which the calculation is aborted
	/// - **threshold**: Threshold, used to detect an improvement (`improvement > threshold`)
	/// - **abort_on_negative**: Specifies whether the strategy instantly aborts when a negative improvement occured (**true**), or if
	/// negative improvements are handled as "no improvements" (**false**).
	NoImprovementForXIterations { x: usize, threshold: T, abort_on_negative: bool }
}
impl<T: Primitive> AbortStrategy<T> {
	pub(crate) fn validate(&self) -> Result<()> {
		let (name, value) = match *self {
			AbortStrategy::CentroidShift { tolerance } => ("tolerance", tolerance),
			AbortStrategy::NoImprovement { threshold } => ("threshold", threshold),
			AbortStrategy::NoImprovementForXIterations { x, threshold, .. } => {
				if x == 0 {
					return Err(KMeansError::InvalidParameter { name: "x", message: "must be at least 1" });
				}
				("threshold", threshold)
			}
		};
		if value.is_nan() || value < T::zero() {
			return Err(KMeansError::InvalidParameter { name, message: "must be a non-negative number" });
		}
		Ok(())
	}

	pub(crate) fn create_logic(&self) -> Box<dyn AbortStrategyLogic<T>> {
		match *self {
			AbortStrategy::CentroidShift { tolerance } => Box::new(CentroidShiftLogic { tolerance }),
			AbortStrategy::NoImprovementForXIterations{x,threshold,abort_on_negative} => Box::new(NoImprovementForXIterationsLogic {
				x, threshold, abort_on_negative,
				prev_error: T::infinity(),
				no_improvement_counter: 0
			}),
			AbortStrategy::NoImprovement{threshold} => Box::new(NoImprovementLogic {
				threshold,
				prev_error: T::infinity()
			})
		}
	}
}

/// Returns **true** when every cluster's centroid is within `tolerance` of its position in `previous`.
///
/// `clusters` and `previous` are compared index by index. Slices of different length never count
/// as converged.
pub fn has_converged<T, D>(clusters: &[Cluster<T>], previous: &[Point<T>], tolerance: T, distance: &D) -> bool
		where T: Primitive, D: DistanceFunction<T> + ?Sized {
	if clusters.len() != previous.len() {
		return false;
	}
	clusters.iter()
		.zip(previous.iter())
		.all(|(c, p)| distance.distance(&c.centroid, p) <= tolerance)
}

/// What an abort strategy gets to see after each iteration.
pub(crate) struct IterationProgress<'a, T: Primitive> {
	pub previous_centroids: &'a [Point<T>],
	pub clusters: &'a [Cluster<T>],
	pub distsum: T,
	pub distance: &'a dyn DistanceFunction<T>
}

pub(crate) trait AbortStrategyLogic<T: Primitive> {
	/// Function that has to be called once an iteration of the calculation ended.
	/// ## Returns
	/// - **true** if the calculation should continue
	/// - **false** if the calculation should abort
	fn next(&mut self, progress: &IterationProgress<'_, T>) -> bool;
}


pub(crate) struct CentroidShiftLogic<T: Primitive> {
	tolerance: T
}
impl<T: Primitive> AbortStrategyLogic<T> for CentroidShiftLogic<T> {
	fn next(&mut self, progress: &IterationProgress<'_, T>) -> bool {
		!has_converged(progress.clusters, progress.previous_centroids, self.tolerance, progress.distance)
	}
}


pub(crate) struct NoImprovementLogic<T: Primitive> {
	threshold: T,
	prev_error: T
}
impl<T: Primitive> AbortStrategyLogic<T> for NoImprovementLogic<T> {
	fn next(&mut self, progress: &IterationProgress<'_, T>) -> bool {
		let improvement = self.prev_error - progress.distsum;
		self.prev_error = progress.distsum;
		improvement > self.threshold
	}
}


pub(crate) struct NoImprovementForXIterationsLogic<T: Primitive> {
	x: usize,
	threshold: T,
	abort_on_negative: bool,
	prev_error: T,
	no_improvement_counter: usize
}
impl<T: Primitive> AbortStrategyLogic<T> for NoImprovementForXIterationsLogic<T> {
	fn next(&mut self, progress: &IterationProgress<'_, T>) -> bool {
		let improvement = self.prev_error - progress.distsum;
		self.prev_error = progress.distsum;
		if self.abort_on_negative && improvement < T::zero() { // Negative improvement, and instant abort is requested
			return false;
		}
		if improvement > self.threshold { // positive improvement: reset no-improv-counter
			self.no_improvement_counter = 0;
		} else { // Still no improvement, count 1 up
			self.no_improvement_counter += 1;
		}
		self.no_improvement_counter < self.x
	}
}
