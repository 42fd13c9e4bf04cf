use nalgebra::Vector3;

/// Linear interpolation of the rate at `t` between samples `(t0, w0)` and `(t1, w1)`.
pub fn interpolate(t0: f64, t1: f64, t: f64, w0: &Vector3<f64>, w1: &Vector3<f64>) -> Vector3<f64> {
    debug_assert!(t1 != t0);
    ((t1 - t) * w0 + (t - t0) * w1) / (t1 - t0)
}

/// Integral over `[ta, tb]` of a rate varying linearly from `wa` to `wb`.
pub fn trapezoid(ta: f64, tb: f64, wa: &Vector3<f64>, wb: &Vector3<f64>) -> Vector3<f64> {
    (wa + wb) * (0.5 * (tb - ta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_interpolate() {
        let w0 = Vector3::new(1.0, 0.0, 0.2);
        let w1 = Vector3::new(2.0, 1.0, 0.2);
        let w = interpolate(1.0, 1.1, 1.02, &w0, &w1);
        assert_abs_diff_eq!(w, Vector3::new(1.2, 0.2, 0.2), epsilon = 1e-8);
        assert_abs_diff_eq!(interpolate(1.0, 1.1, 1.1, &w0, &w1), w1, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid() {
        let wa = Vector3::new(1.0, 2.0, 0.0);
        let wb = Vector3::new(3.0, 2.0, -1.0);
        let integral = trapezoid(0.5, 1.0, &wa, &wb);
        assert_abs_diff_eq!(integral, Vector3::new(1.0, 1.0, -0.25), epsilon = 1e-15);
    }
}
