use nalgebra::{UnitQuaternion, Vector3};
use thiserror::Error;

use crate::error::{GridError, InputError};
use crate::grid::TimeGrid;
use crate::input::InputSource;
use crate::interpolation::{interpolate, trapezoid};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error("{timestamps} timestamps but {angular_velocities} angular velocities")]
    LengthMismatch {
        timestamps: usize,
        angular_velocities: usize,
    },

    #[error("at least two gyroscope samples are required, found {0}")]
    TooFewSamples(usize),

    #[error("invalid gyroscope timestamps: {0}")]
    Timestamps(#[from] GridError),
}

/// Gyroscope output sampled at discrete timestamps.
///
/// The angular velocity is taken to vary linearly between samples, so both
/// instantaneous and integrated data are available anywhere inside the
/// sampled span.
#[derive(Debug, Clone)]
pub struct SampledGyro {
    initial: UnitQuaternion<f64>,
    timestamps: TimeGrid,
    angular_velocities: Vec<Vector3<f64>>,
}

fn binary_search(target: &[f64], query: f64) -> Result<usize, usize> {
    target.binary_search_by(|t| t.total_cmp(&query))
}

impl SampledGyro {
    pub fn new(
        initial: UnitQuaternion<f64>,
        timestamps: Vec<f64>,
        angular_velocities: Vec<Vector3<f64>>,
    ) -> Result<Self, SampleError> {
        if timestamps.len() != angular_velocities.len() {
            return Err(SampleError::LengthMismatch {
                timestamps: timestamps.len(),
                angular_velocities: angular_velocities.len(),
            });
        }
        if timestamps.len() < 2 {
            return Err(SampleError::TooFewSamples(timestamps.len()));
        }
        Ok(SampledGyro {
            initial,
            timestamps: TimeGrid::new(timestamps)?,
            angular_velocities,
        })
    }

    pub fn timestamps(&self) -> &TimeGrid {
        &self.timestamps
    }

    pub fn angular_velocities(&self) -> &[Vector3<f64>] {
        &self.angular_velocities
    }

    fn covers(&self, t: f64) -> bool {
        self.timestamps.first() <= t && t <= self.timestamps.last()
    }

    /// Index `i` of the sample segment `[ts[i], ts[i + 1]]` containing `t`.
    fn segment(&self, t: f64) -> usize {
        let n = self.timestamps.len();
        match binary_search(self.timestamps.as_slice(), t) {
            Ok(index) => index.min(n - 2),
            Err(index) => index - 1,
        }
    }

    fn rate_at(&self, t: f64) -> Vector3<f64> {
        let i = self.segment(t);
        let ts = self.timestamps.as_slice();
        let ws = &self.angular_velocities;
        interpolate(ts[i], ts[i + 1], t, &ws[i], &ws[i + 1])
    }
}

impl InputSource for SampledGyro {
    fn initial_solution(&self) -> UnitQuaternion<f64> {
        self.initial
    }

    fn instantaneous(&self, t: f64) -> Result<Vector3<f64>, InputError> {
        if !self.covers(t) {
            return Err(InputError::OutOfRange { t1: t, t2: t });
        }
        Ok(self.rate_at(t))
    }

    fn integrated(&self, t1: f64, t2: f64) -> Result<Vector3<f64>, InputError> {
        if !(t1 <= t2 && self.covers(t1) && self.covers(t2)) {
            return Err(InputError::OutOfRange { t1, t2 });
        }
        if t1 == t2 {
            return Ok(Vector3::zeros());
        }

        let ts = self.timestamps.as_slice();
        let ws = &self.angular_velocities;

        let mut integral = Vector3::zeros();
        let mut prev_t = t1;
        let mut prev_w = self.rate_at(t1);
        for k in (self.segment(t1) + 1)..=self.segment(t2) {
            integral += trapezoid(prev_t, ts[k], &prev_w, &ws[k]);
            prev_t = ts[k];
            prev_w = ws[k];
        }
        integral += trapezoid(prev_t, t2, &prev_w, &self.rate_at(t2));
        Ok(integral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ramp() -> SampledGyro {
        // w(t) = (t, 1, -2t) sampled irregularly
        let ts = vec![0.0, 0.1, 0.25, 0.4, 0.5];
        let ws = ts
            .iter()
            .map(|&t| Vector3::new(t, 1.0, -2.0 * t))
            .collect::<Vec<Vector3<f64>>>();
        SampledGyro::new(UnitQuaternion::identity(), ts, ws).unwrap()
    }

    fn ramp_integral(t1: f64, t2: f64) -> Vector3<f64> {
        let s = 0.5 * (t2 * t2 - t1 * t1);
        Vector3::new(s, t2 - t1, -2.0 * s)
    }

    #[test]
    fn test_new_validates() {
        let q = UnitQuaternion::identity();
        assert_eq!(
            SampledGyro::new(q, vec![0., 1.], vec![Vector3::zeros()]).unwrap_err(),
            SampleError::LengthMismatch {
                timestamps: 2,
                angular_velocities: 1
            }
        );
        assert_eq!(
            SampledGyro::new(q, vec![0.], vec![Vector3::zeros()]).unwrap_err(),
            SampleError::TooFewSamples(1)
        );
        assert!(matches!(
            SampledGyro::new(q, vec![1., 0.], vec![Vector3::zeros(); 2]),
            Err(SampleError::Timestamps(GridError::NotIncreasing { .. }))
        ));
    }

    #[test]
    fn test_instantaneous() {
        let gyro = ramp();
        assert_abs_diff_eq!(
            gyro.instantaneous(0.3).unwrap(),
            Vector3::new(0.3, 1.0, -0.6),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            gyro.instantaneous(0.5).unwrap(),
            Vector3::new(0.5, 1.0, -1.0),
            epsilon = 1e-12
        );
        assert_eq!(
            gyro.instantaneous(0.6),
            Err(InputError::OutOfRange { t1: 0.6, t2: 0.6 })
        );
    }

    #[test]
    fn test_integrated_within_one_segment() {
        let gyro = ramp();
        assert_abs_diff_eq!(
            gyro.integrated(0.12, 0.2).unwrap(),
            ramp_integral(0.12, 0.2),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_integrated_across_segments() {
        let gyro = ramp();
        assert_abs_diff_eq!(
            gyro.integrated(0.05, 0.45).unwrap(),
            ramp_integral(0.05, 0.45),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            gyro.integrated(0.0, 0.5).unwrap(),
            ramp_integral(0.0, 0.5),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_integrated_on_sample_timestamps() {
        let gyro = ramp();
        assert_abs_diff_eq!(
            gyro.integrated(0.1, 0.4).unwrap(),
            ramp_integral(0.1, 0.4),
            epsilon = 1e-12
        );
        assert_eq!(gyro.integrated(0.25, 0.25).unwrap(), Vector3::zeros());
    }

    #[test]
    fn test_integrated_is_additive() {
        let gyro = ramp();
        let whole = gyro.integrated(0.02, 0.48).unwrap();
        let parts = gyro.integrated(0.02, 0.3).unwrap() + gyro.integrated(0.3, 0.48).unwrap();
        assert_abs_diff_eq!(whole, parts, epsilon = 1e-12);
    }

    #[test]
    fn test_integrated_out_of_range() {
        let gyro = ramp();
        assert_eq!(
            gyro.integrated(-0.1, 0.2),
            Err(InputError::OutOfRange { t1: -0.1, t2: 0.2 })
        );
        assert_eq!(
            gyro.integrated(0.3, 0.2),
            Err(InputError::OutOfRange { t1: 0.3, t2: 0.2 })
        );
        assert!(gyro.integrated(0.3, f64::NAN).is_err());
    }
}
