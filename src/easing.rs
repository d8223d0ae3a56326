/// Cubic ease-in-out on `[0, 1]`.
///
/// Slow start, fast middle, slow finish; `f(0) = 0`, `f(0.5) = 0.5`, `f(1) = 1`.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_points() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
    }

    #[test]
    fn monotonic_and_bounded() {
        let mut prev = ease_in_out_cubic(0.0);
        for step in 1..=1000 {
            let t = step as f64 / 1000.0;
            let v = ease_in_out_cubic(t);
            assert!(v >= prev, "not monotonic at t={t}: {v} < {prev}");
            assert!((0.0..=1.0).contains(&v));
            prev = v;
        }
    }

    #[test]
    fn symmetric_around_midpoint() {
        for step in 0..=50 {
            let t = step as f64 / 100.0;
            let sum = ease_in_out_cubic(t) + ease_in_out_cubic(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }
}
