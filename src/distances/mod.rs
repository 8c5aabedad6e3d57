use crate::memory::*;

mod euclideandistance;
pub use euclideandistance::EuclideanDistance;

/// Metric used to measure how far a sample is from a centroid.
///
/// Implementations have to be non-negative and symmetric (`distance(a, b) == distance(b, a)`),
/// and return zero when both points are equal. The metric is chosen once per [`crate::KMeans`]
/// instance and used by the assignment step as well as the convergence check.
pub trait DistanceFunction<T: Primitive> {
    fn distance(&self, a: &Point<T>, b: &Point<T>) -> T;
}
