use nalgebra::{Matrix3, UnitQuaternion, Vector3};

use crate::iterative::{Iterative, LocalSolution};
use crate::{exp_so3, wedge_so3};

/// Panov's algorithm: four integrated samples per step, 6th order accurate.
///
/// The rotation vector of a step is the sum of the four sub-interval samples
/// plus truncated-series terms for the noncommutativity (coning) of the finite
/// rotations they describe.
#[derive(Debug, Clone, Copy, Default)]
pub struct Panov;

pub type PanovAlgorithm = Iterative<Panov>;

impl Panov {
    /// The rotation vector of one output step built from its four sub-interval samples.
    pub fn rotation_vector(gamma: &[Vector3<f64>; 4]) -> Vector3<f64> {
        let big_gamma: [Matrix3<f64>; 4] = [
            wedge_so3(&gamma[0]),
            wedge_so3(&gamma[1]),
            wedge_so3(&gamma[2]),
            wedge_so3(&gamma[3]),
        ];

        let mut phi = 22. / 45. * ((big_gamma[0] + big_gamma[1]) * (gamma[2] + gamma[3]))
            + 32. / 45. * (big_gamma[0] * gamma[1] + big_gamma[2] * gamma[3]);

        let delta_phi = 32. / 45.
            * (big_gamma[0] * big_gamma[1] * gamma[3] - big_gamma[3] * big_gamma[0] * gamma[2])
            + 64. / 45. * gamma[1].dot(&gamma[2]) * (big_gamma[1] * gamma[2]);

        phi += gamma[0] + gamma[1] + gamma[2] + gamma[3];
        phi += delta_phi;
        phi
    }
}

impl LocalSolution for Panov {
    const TITLE: &'static str = "Panov algorithm (4-step, 6th order, integrated data)";
    const STEPS: usize = 4;

    fn local_solution(&self, _t: f64, gamma: &[Vector3<f64>]) -> UnitQuaternion<f64> {
        let gamma = [gamma[0], gamma[1], gamma[2], gamma[3]];
        exp_so3(&Panov::rotation_vector(&gamma))
    }
}
