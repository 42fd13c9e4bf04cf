use nalgebra::{UnitQuaternion, Vector3};

use crate::error::InputError;
use crate::input::InputSource;

/// Integrated motion data generated from a closed-form orientation trajectory `q(t)`.
///
/// `integrated(t1, t2)` is the rotation vector of `q(t2) * q(t1)^-1`, the
/// increment that left-multiplied onto `q(t1)` gives `q(t2)`. Instantaneous
/// data is not provided.
pub struct TrajectorySource {
    t0: f64,
    f: fn(f64) -> UnitQuaternion<f64>,
}

impl TrajectorySource {
    pub fn new(t0: f64, f: fn(f64) -> UnitQuaternion<f64>) -> Self {
        TrajectorySource { t0, f }
    }

    pub fn rotation(&self, t: f64) -> UnitQuaternion<f64> {
        (self.f)(t)
    }
}

impl InputSource for TrajectorySource {
    fn initial_solution(&self) -> UnitQuaternion<f64> {
        self.rotation(self.t0)
    }

    fn integrated(&self, t1: f64, t2: f64) -> Result<Vector3<f64>, InputError> {
        let dq = self.rotation(t2) * self.rotation(t1).inverse();
        Ok(dq.scaled_axis())
    }
}
