use kmeans2d::*;
use proptest::prelude::*;
use rand::prelude::*;

fn to_points(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

proptest! {
    #[test]
    fn prop_distance_is_symmetric_and_non_negative(
        a in (-1000.0f64..1000.0, -1000.0f64..1000.0),
        b in (-1000.0f64..1000.0, -1000.0f64..1000.0)
    ) {
        let (a, b) = (Point::new(a.0, a.1), Point::new(b.0, b.1));
        let d = EuclideanDistance.distance(&a, &b);
        prop_assert!(d >= 0.0);
        prop_assert_eq!(d, EuclideanDistance.distance(&b, &a));
        prop_assert_eq!(EuclideanDistance.distance(&a, &a), 0.0);
    }

    #[test]
    fn prop_every_sample_is_assigned(
        coords in prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), 1..60),
        k in 1usize..8,
        seed in any::<u64>(),
        reseed in any::<bool>(),
        with_replacement in any::<bool>()
    ) {
        let n = coords.len();
        let kmean = KMeans::new(to_points(&coords));
        let policy = if reseed { EmptyClusterPolicy::ReseedFarthest } else { EmptyClusterPolicy::Retain };
        let conf = KMeansConfig::build()
            .random_generator(StdRng::seed_from_u64(seed))
            .empty_clusters(policy)
            .build();
        let res = if with_replacement {
            kmean.kmeans_lloyd(k, 50, KMeans::init_random_sample_with_replacement, &conf)
        } else {
            kmean.kmeans_lloyd(k, 50, KMeans::init_random_sample, &conf)
        };

        if k > n {
            prop_assert_eq!(res.unwrap_err(), KMeansError::InvalidClusterCount { requested: k, sample_cnt: n });
        } else {
            let res = res.unwrap();
            prop_assert_eq!(res.assignments.len(), n);
            prop_assert!(res.assignments.iter().all(|&a| a < k));
            prop_assert_eq!(res.clusters.iter().map(|c| c.size).sum::<usize>(), n);
            prop_assert!(res.phase == Phase::Converged || res.phase == Phase::Exhausted);
            if res.phase == Phase::Exhausted {
                prop_assert_eq!(res.iterations, 50);
            } else {
                prop_assert!(res.iterations < 50);
            }
        }
    }

    #[test]
    fn prop_centroids_are_means_of_members(
        coords in prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), 4..40),
        seed in any::<u64>(),
        max_iter in 1usize..5
    ) {
        let kmean = KMeans::new(to_points(&coords));
        let conf = KMeansConfig::build().random_generator(StdRng::seed_from_u64(seed)).build();
        let res = kmean.kmeans_lloyd(3, max_iter, KMeans::init_random_sample, &conf).unwrap();

        for (idx, cluster) in res.clusters.iter().enumerate() {
            let members: Vec<&(f64, f64)> = coords.iter().zip(res.assignments.iter())
                .filter(|(_, &a)| a == idx)
                .map(|(c, _)| c)
                .collect();
            prop_assert_eq!(members.len(), cluster.size);
            if !members.is_empty() {
                let mean_x = members.iter().map(|c| c.0).sum::<f64>() / members.len() as f64;
                let mean_y = members.iter().map(|c| c.1).sum::<f64>() / members.len() as f64;
                prop_assert!((cluster.centroid.x - mean_x).abs() < 1e-9);
                prop_assert!((cluster.centroid.y - mean_y).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn prop_identical_centroids_have_converged(
        coords in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 1..10),
        tolerance in 0.0f64..1.0
    ) {
        let clusters: Vec<Cluster<f64>> = to_points(&coords).into_iter()
            .map(|centroid| Cluster { centroid, size: 0 })
            .collect();
        let previous: Vec<Point<f64>> = clusters.iter().map(|c| c.centroid).collect();
        prop_assert!(has_converged(&clusters, &previous, tolerance, &EuclideanDistance));

        let mut moved = previous.clone();
        moved[0].x += tolerance + 1.0;
        prop_assert!(!has_converged(&clusters, &moved, tolerance, &EuclideanDistance));
    }
}

#[test]
fn configuration_is_rejected_before_clustering() {
    let kmean = KMeans::new(to_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]));
    let res = kmean.kmeans_lloyd(5, DEFAULT_MAX_ITER, KMeans::init_random_sample, &KMeansConfig::default());
    assert_eq!(res.unwrap_err(), KMeansError::InvalidClusterCount { requested: 5, sample_cnt: 3 });
    assert_eq!(
        KMeansError::InvalidClusterCount { requested: 5, sample_cnt: 3 }.to_string(),
        "invalid cluster count: requested 5, but dataset has 3 samples"
    );
}
