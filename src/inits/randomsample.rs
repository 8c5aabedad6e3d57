use crate::{DistanceFunction, KMeans, KMeansConfig, KMeansState, Primitive, Result};
use rand::prelude::*;
use std::ops::DerefMut;

/// Select k distinct samples as initial centroids.
#[inline(always)] pub fn calculate<T, D>(kmean: &KMeans<T, D>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>) -> Result<()>
		where T: Primitive, D: DistanceFunction<T> {
	let mut rnd = config.rnd.borrow_mut();
	rand::seq::index::sample(rnd.deref_mut(), kmean.samples.len(), state.k)
		.iter()
		.enumerate()
		.for_each(|(ci, si)| { // Copy randomly chosen centroids into state.clusters
			state.set_centroid(ci, kmean.samples[si]);
		});
	Ok(())
}

/// Select one uniformly distributed sample per centroid, independently of the other centroids.
#[inline(always)] pub fn calculate_with_replacement<T, D>(kmean: &KMeans<T, D>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>) -> Result<()>
		where T: Primitive, D: DistanceFunction<T> {
	let mut rnd = config.rnd.borrow_mut();
	for ci in 0..state.k {
		let si = rnd.gen_range(0..kmean.samples.len());
		state.set_centroid(ci, kmean.samples[si]);
	}
	Ok(())
}
