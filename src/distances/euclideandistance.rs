use crate::{DistanceFunction, Point, Primitive};

/// Plain (non-squared) euclidean distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanDistance;

impl<T: Primitive> DistanceFunction<T> for EuclideanDistance {
    #[inline(always)]
    fn distance(&self, a: &Point<T>, b: &Point<T>) -> T {
        let (dx, dy) = (a.x - b.x, a.y - b.y);
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn distance_properties_f32() { distance_properties::<f32>(); }
    #[test] fn distance_properties_f64() { distance_properties::<f64>(); }

    fn distance_properties<T: Primitive>() {
        let p = |x: f64, y: f64| Point::new(T::from(x).unwrap(), T::from(y).unwrap());
        let pairs = [
            (p(0.0, 0.0), p(3.0, 4.0)),
            (p(-1.5, 2.25), p(7.0, -0.5)),
            (p(99.0, 0.0), p(0.0, 99.0)),
            (p(0.1, 0.2), p(0.3, 0.4)),
        ];
        for (a, b) in pairs.iter() {
            let (ab, ba) = (EuclideanDistance.distance(a, b), EuclideanDistance.distance(b, a));
            assert!(ab >= T::zero());
            assert_eq!(ab, ba);
            assert_eq!(EuclideanDistance.distance(a, a), T::zero());
        }
        assert_approx_eq!(EuclideanDistance.distance(&pairs[0].0, &pairs[0].1), T::from(5.0).unwrap(), T::from(1e-6).unwrap());
    }
}
