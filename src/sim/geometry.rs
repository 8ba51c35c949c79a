//! Distance primitives for slice detection

use glam::Vec2;

/// Shortest distance from `p` to the segment `a`-`b` (not the infinite line)
///
/// A degenerate segment (`a == b`) is treated as the point `a`.
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }

    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coord() -> impl Strategy<Value = f32> {
        -1000.0f32..1000.0
    }

    fn point() -> impl Strategy<Value = Vec2> {
        (coord(), coord()).prop_map(|(x, y)| Vec2::new(x, y))
    }

    #[test]
    fn test_perpendicular_distance() {
        let d = point_segment_distance(
            Vec2::new(5.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert!((d - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_clamps_past_endpoint() {
        // Closest point on the infinite line would be (15, 0)
        let d = point_segment_distance(
            Vec2::new(15.0, 4.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert!((d - Vec2::new(5.0, 4.0).length()).abs() < 1e-5);
    }

    #[test]
    fn test_slice_through_fruit_center() {
        let d = point_segment_distance(
            Vec2::new(250.0, 300.0),
            Vec2::new(100.0, 300.0),
            Vec2::new(400.0, 300.0),
        );
        assert_eq!(d, 0.0);
    }

    proptest! {
        #[test]
        fn degenerate_segment_is_point_distance(p in point(), a in point()) {
            prop_assert_eq!(point_segment_distance(p, a, a), p.distance(a));
        }

        #[test]
        fn points_on_segment_have_zero_distance(a in point(), b in point(), t in 0.0f32..=1.0) {
            let p = a + (b - a) * t;
            let d = point_segment_distance(p, a, b);
            prop_assert!(d < 1e-2, "distance {} for t={}", d, t);
        }

        #[test]
        fn endpoints_have_zero_distance(a in point(), b in point()) {
            prop_assert!(point_segment_distance(a, a, b) < 1e-3);
            prop_assert!(point_segment_distance(b, a, b) < 1e-3);
        }

        #[test]
        fn never_exceeds_endpoint_distance(p in point(), a in point(), b in point()) {
            let d = point_segment_distance(p, a, b);
            prop_assert!(d <= p.distance(a) + 1e-2);
            prop_assert!(d <= p.distance(b) + 1e-2);
        }
    }
}
