#[cfg(test)]
macro_rules! assert_approx_eq {
	($left: expr, $right: expr, $tol: expr) => ({
		match ($left, $right, $tol) {
			(left_val , right_val, tol_val) => {
				let delta = (left_val - right_val).abs();
				if !(delta < tol_val) {
					panic!(
						"assertion failed: `(left ≈ right)` \
						(left: `{}`, right: `{}`) \
						with ∆={:1.1e} (allowed ∆={:e})",
						left_val , right_val, delta, tol_val
					)
				}
			}
		}
	});
	($left: expr, $right: expr) => (assert_approx_eq!(($left), ($right), 1e-15))
}

#[cfg(test)]
pub(crate) mod testing {
	use rand::prelude::*;
	use crate::{KMeansState, Point, Primitive};

	pub fn points<T: Primitive>(coords: &[(f64, f64)]) -> Vec<Point<T>> {
		coords.iter()
			.map(|&(x, y)| Point::new(T::from(x).unwrap(), T::from(y).unwrap()))
			.collect()
	}

	/// Integer-grid samples within `0..range`, the same kind of data the command line tool generates.
	pub fn random_samples<T: Primitive>(rnd: &mut impl Rng, sample_cnt: usize, range: u32) -> Vec<Point<T>> {
		(0..sample_cnt)
			.map(|_| Point::new(T::from(rnd.gen_range(0..range)).unwrap(), T::from(rnd.gen_range(0..range)).unwrap()))
			.collect()
	}

	/// Compare the centroids of a finished calculation against the expected ones, ignoring cluster order.
	/// Each expected centroid has to be matched by exactly one actual centroid with the given member count.
	pub fn assert_clusters_eq<T: Primitive>(should: &[(Point<T>, usize)], actual: &KMeansState<T>, cmp_epsilon: T) {
		assert_eq!(should.len(), actual.clusters.len());
		let mut used = vec![false; actual.clusters.len()];
		for (should_centroid, should_size) in should {
			let matched = actual.clusters.iter().enumerate()
				.find(|(idx, c)| !used[*idx]
					&& (c.centroid.x - should_centroid.x).abs() < cmp_epsilon
					&& (c.centroid.y - should_centroid.y).abs() < cmp_epsilon);
			match matched {
				Some((idx, c)) => {
					assert_eq!(c.size, *should_size, "Cluster {} has a different member count", idx);
					used[idx] = true;
				},
				None => panic!("No centroid matching {:?}. Actual: {:?}", should_centroid, actual.clusters)
			}
		}
	}
}
