use crate::{DistanceFunction, KMeans, KMeansConfig, KMeansError, KMeansState, Point, Primitive, Result};

#[inline(always)]
pub fn calculate<T, D>(
    _kmean: &KMeans<T, D>, state: &mut KMeansState<T>, _config: &KMeansConfig<'_, T>, computed: Vec<Point<T>>,
) -> Result<()>
where
    T: Primitive,
    D: DistanceFunction<T>,
{
    if computed.len() != state.k {
        return Err(KMeansError::CentroidCountMismatch { expected: state.k, provided: computed.len() });
    }
    computed.into_iter().enumerate().for_each(|(ci, c)| state.set_centroid(ci, c));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::*;

    #[test]
    fn train_with_precomputed_centroids() {
        let samples = points::<f32>(&[(0.0, 0.0), (1.0, 0.0), (10.0, 0.0), (11.0, 0.0), (20.0, 0.0), (21.0, 0.0)]);
        let centroids = points::<f32>(&[(0.0, 0.0), (15.0, 0.0)]);

        let kmean = KMeans::new(samples);
        let result = kmean.kmeans_lloyd(2, 200, KMeans::init_precomputed(centroids), &KMeansConfig::default()).unwrap();

        let should = points::<f32>(&[(0.5, 0.0), (15.5, 0.0)]);
        assert_clusters_eq(&[(should[0], 2), (should[1], 4)], &result, 1e-5);
        assert_eq!(result.clusters.iter().map(|c| c.size).collect::<Vec<_>>(), vec![2, 4]);
        assert!(result.converged());
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn wrong_centroid_count_is_rejected() {
        let kmean = KMeans::new(points::<f64>(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]));
        let centroids = points::<f64>(&[(0.0, 0.0)]);
        let res = kmean.kmeans_lloyd(2, 100, KMeans::init_precomputed(centroids), &KMeansConfig::default());
        assert_eq!(res.unwrap_err(), KMeansError::CentroidCountMismatch { expected: 2, provided: 1 });
    }
}
