mod algorithm;
mod average_speed;
mod dataset;
mod error;
mod generator;
mod grid;
mod input;
mod interpolation;
mod iterative;
mod panov;
mod sampled;
mod solution;

pub use algorithm::{Algorithm, Propagation, Scheme};
pub use average_speed::AverageSpeed;
pub use dataset::{read_gyroscope, read_gyroscope_from_reader, DatasetError};
pub use error::{DataKind, Error, GridError, InputError, ParseSchemeError};
pub use generator::TrajectorySource;
pub use grid::TimeGrid;
pub use input::InputSource;
pub use iterative::{Iterative, LocalSolution};
pub use panov::{Panov, PanovAlgorithm};
pub use sampled::{SampleError, SampledGyro};
pub use solution::{write_solution, Solution};

use log::debug;
use nalgebra::{Matrix3, Quaternion, UnitQuaternion, Vector3};

/// Below this rotation angle (radians) the exponential map switches to its
/// Taylor expansion. The truncation error there is O(angle^4), far below f64 resolution.
pub const SMALL_ANGLE: f64 = 1e-6;

/// The cross-product matrix of `v`: `wedge_so3(v) * u == v.cross(u)`.
#[rustfmt::skip]
pub fn wedge_so3(v: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0., -v[2], v[1],
        v[2], 0., -v[0],
        -v[1], v[0], 0.
    )
}

/// Maps a rotation vector onto the unit quaternion `(cos(|phi|/2), phi/|phi| * sin(|phi|/2))`.
///
/// A zero vector maps to the identity exactly.
pub fn exp_so3(phi: &Vector3<f64>) -> UnitQuaternion<f64> {
    let phi_m = phi.norm();

    if phi_m < SMALL_ANGLE {
        debug!("small-angle exponential map, |phi| = {:e}", phi_m);
        let theta2 = phi_m * phi_m;
        let w = 1. - theta2 / 8.;
        let v = phi * (0.5 - theta2 / 48.);
        return UnitQuaternion::new_normalize(Quaternion::from_parts(w, v));
    }

    let half = phi_m / 2.;
    let v = (phi / phi_m) * f64::sin(half);
    UnitQuaternion::new_unchecked(Quaternion::from_parts(f64::cos(half), v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_wedge_so3() {
        let mat = wedge_so3(&Vector3::new(0.3, 0.5, 0.7));

        #[rustfmt::skip]
        let expected = Matrix3::new(
            0.0, -0.7, 0.5,
            0.7, 0.0, -0.3,
            -0.5, 0.3, 0.0
        );
        assert_eq!(mat, expected);
    }

    #[test]
    fn test_wedge_so3_is_cross_product() {
        let v = Vector3::new(0.3, -0.5, 0.7);
        let u = Vector3::new(-1.1, 0.2, 0.4);
        assert_abs_diff_eq!(wedge_so3(&v) * u, v.cross(&u), epsilon = 1e-15);
        assert_eq!(wedge_so3(&v).transpose(), -wedge_so3(&v));
    }

    #[test]
    fn test_exp_so3_zero_is_identity() {
        let q = exp_so3(&Vector3::zeros());
        assert_eq!(q, UnitQuaternion::identity());
    }

    #[test]
    fn test_exp_so3_matches_axis_angle() {
        let phi = Vector3::new(0.4, -0.2, 0.9);
        let expected = UnitQuaternion::from_scaled_axis(phi);
        assert_abs_diff_eq!(exp_so3(&phi), expected, epsilon = 1e-14);
    }

    #[test]
    fn test_exp_so3_small_phi() {
        let phi = Vector3::new(1e-8, 2e-7, -3e-7);
        let q = exp_so3(&phi);
        let expected = UnitQuaternion::from_scaled_axis(phi);
        assert_abs_diff_eq!(q, expected, epsilon = 1e-15);
        assert_abs_diff_eq!(q.quaternion().norm(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_exp_so3_is_continuous_at_threshold() {
        let axis = Vector3::new(1., 2., 2.) / 3.;
        let below = exp_so3(&(axis * (SMALL_ANGLE * (1. - 1e-9))));
        let above = exp_so3(&(axis * (SMALL_ANGLE * (1. + 1e-9))));
        assert_abs_diff_eq!(below, above, epsilon = 1e-14);
    }
}
