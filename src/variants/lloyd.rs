use crate::{abort_strategy::IterationProgress, memory::*, DistanceFunction, EmptyClusterPolicy, KMeans, KMeansConfig, KMeansState, Phase, Result};
use std::cmp::Ordering;

pub(crate) struct Lloyd<T: Primitive, D: DistanceFunction<T>> {
	_p: std::marker::PhantomData<(T, D)>
}
impl<T: Primitive, D: DistanceFunction<T>> Lloyd<T, D> {
    /// Recalculate every centroid as the mean of the samples recorded as assigned to it.
    /// Returns the new distance sum.
    fn update_centroids(data: &KMeans<T, D>, state: &mut KMeansState<T>, empty_clusters: EmptyClusterPolicy) -> T {
        // Running mean per cluster, a plain sum overflows near T::max_value()
        let mut new_centroids = vec![Point::<T>::origin(); state.k];
        let mut counts = vec![0usize; state.k];
        data.samples.iter()
            .zip(state.assignments.iter().cloned())
            .for_each(|(s, centroid_id)| {
                counts[centroid_id] += 1;
                let cnt = T::from(counts[centroid_id]).unwrap_or_else(T::infinity);
                let c = &mut new_centroids[centroid_id];
                c.x += (s.x - c.x) / cnt;
                c.y += (s.y - c.y) / cnt;
            });

        if empty_clusters == EmptyClusterPolicy::ReseedFarthest && state.clusters.iter().any(|c| c.size == 0) {
            Self::reseed_empty_clusters(data, state, &mut new_centroids);
        }

        // Empty clusters keep their position
        state.clusters.iter_mut()
            .zip(new_centroids.iter())
            .filter(|(c, _)| c.size > 0)
            .for_each(|(c, nc)| c.centroid = *nc);

        state.centroid_distances.iter().map(|&d| d * d).sum()
    }

    /// Move the samples that are worst represented by their centroids into the empty clusters.
    /// Only samples that are not alone in their cluster are moved, so no new empty cluster is created.
    fn reseed_empty_clusters(data: &KMeans<T, D>, state: &mut KMeansState<T>, new_centroids: &mut [Point<T>]) {
        let mut distance_sorted_samples: Vec<usize> = (0..data.samples.len()).collect();
        distance_sorted_samples.sort_by(
            |&i1, &i2| state.centroid_distances[i1].partial_cmp(&state.centroid_distances[i2]).unwrap_or(Ordering::Equal));

        for i in 0..state.k {
            if state.clusters[i].size != 0 {
                continue;
            }
            // Find the sample with the highest distance to its centroid, that is not alone in its cluster
            let candidate = distance_sorted_samples.iter().rev().cloned()
                .find(|&sample_id| state.clusters[state.assignments[sample_id]].size > 1);
            let sample_id = match candidate {
                Some(sample_id) => sample_id,
                None => continue
            };
            let prev_centroid_id = state.assignments[sample_id];
            let sample = data.samples[sample_id];
            log::debug!("Reseeding empty cluster {} with sample {} (taken from cluster {})", i, sample_id, prev_centroid_id);

            // Remove chosen sample from the mean of its previous cluster (size > 1 here)
            let remaining = T::from(state.clusters[prev_centroid_id].size - 1).unwrap_or_else(T::infinity);
            let prev = &mut new_centroids[prev_centroid_id];
            prev.x += (prev.x - sample.x) / remaining;
            prev.y += (prev.y - sample.y) / remaining;

            // Re-Assign found sample to centroid without any samples
            state.clusters[prev_centroid_id].size -= 1;
            state.clusters[i].size += 1;
            state.assignments[sample_id] = i;
            // Centroid is moved into the chosen point -> the points centroid distance is 0
            state.centroid_distances[sample_id] = T::zero();
            new_centroids[i] = sample;
        }
    }

    pub fn calculate<'a, F>(data: &KMeans<T, D>, k: usize, max_iter: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>>
                where for<'c> F: FnOnce(&KMeans<T, D>, &mut KMeansState<T>, &KMeansConfig<'c, T>) -> Result<()> {
        data.validate(k, max_iter, config)?;

        let mut state = KMeansState::new(data.samples.len(), k);

        // Initialize clusters and notify subscriber
        init(data, &mut state, config)?;
        state.phase = Phase::Iterating;
        (config.init_done)(&state);
        log::debug!("Initialized {} clusters for {} samples", k, data.samples.len());
        let mut abort_strategy = config.abort_strategy.create_logic();

        for i in 1..=max_iter {
            let previous_centroids = state.centroid_snapshot();
            state.reset_frequencies();
            data.update_cluster_assignments(&mut state);
            let new_distsum = Self::update_centroids(data, &mut state, config.empty_clusters);

            // Notify subscriber about finished iteration
            (config.iteration_done)(&state, i, new_distsum);
            log::debug!("Iteration {} - Error: {:.4} -> {:.4}", i, state.distsum, new_distsum);

            let keep_going = abort_strategy.next(&IterationProgress {
                previous_centroids: &previous_centroids,
                clusters: &state.clusters,
                distsum: new_distsum,
                distance: &data.distance
            });
            state.distsum = new_distsum;
            if !keep_going {
                // The pass that confirms convergence does not count as an iteration
                state.iterations = i - 1;
                state.phase = Phase::Converged;
                break;
            }
        }

        data.update_centroid_distances(&mut state);
        state.distsum = state.centroid_distances.iter().map(|&d| d * d).sum();

        if state.phase == Phase::Converged {
            log::info!("Converged after {} iterations", state.iterations);
        } else {
            state.iterations = max_iter;
            state.phase = Phase::Exhausted;
            log::info!("Stopped after reaching the iteration limit of {}", max_iter);
        }
        Ok(state)
    }
}
