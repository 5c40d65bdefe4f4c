//! Interpolation curves used by slide and scroll transitions.

/// Quadratic ease-in-out: accelerates through the first half, decelerates
/// through the second. Input is clamped to `[0, 1]`.
#[inline]
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Linear interpolation between `from` and `to` at eased progress `t`.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
    }

    #[test]
    fn test_ease_is_symmetric() {
        for step in 0..=20 {
            let t = step as f64 / 20.0;
            let mirrored = 1.0 - ease_in_out_quad(1.0 - t);
            assert!((ease_in_out_quad(t) - mirrored).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ease_clamps_out_of_range() {
        assert_eq!(ease_in_out_quad(-0.5), 0.0);
        assert_eq!(ease_in_out_quad(3.0), 1.0);
    }

    #[test]
    fn test_first_quarter_is_slow() {
        assert_eq!(ease_in_out_quad(0.25), 0.125);
        assert_eq!(ease_in_out_quad(0.75), 0.875);
    }
}
