use nalgebra::{UnitQuaternion, Vector3};

use crate::error::{DataKind, InputError};

/// A source of initial conditions and motion data for a propagation.
///
/// Motion data comes in two shapes: instantaneous (the value at a given time)
/// and integrated (the value accumulated over an interval). A provider only
/// overrides the shapes it can supply; the others keep the default body and
/// report [`InputError::NotImplemented`] when an algorithm asks for them.
///
/// `Q` is the rotation algebra, `I` the motion sample.
pub trait InputSource<Q = UnitQuaternion<f64>, I = Vector3<f64>> {
    /// The orientation at the first timestamp of the grid.
    fn initial_solution(&self) -> Q;

    fn instantaneous(&self, _t: f64) -> Result<I, InputError> {
        Err(InputError::NotImplemented(DataKind::Instantaneous))
    }

    fn integrated(&self, _t1: f64, _t2: f64) -> Result<I, InputError> {
        Err(InputError::NotImplemented(DataKind::Integrated))
    }
}

impl<Q, I, S: InputSource<Q, I> + ?Sized> InputSource<Q, I> for &S {
    fn initial_solution(&self) -> Q {
        (**self).initial_solution()
    }

    fn instantaneous(&self, t: f64) -> Result<I, InputError> {
        (**self).instantaneous(t)
    }

    fn integrated(&self, t1: f64, t2: f64) -> Result<I, InputError> {
        (**self).integrated(t1, t2)
    }
}
