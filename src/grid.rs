use std::ops::Index;

use crate::error::GridError;

/// An ordered, strictly increasing sequence of timestamps with at least one element.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    timestamps: Vec<f64>,
}

fn check_timestamps(timestamps: &[f64]) -> Result<(), GridError> {
    if timestamps.is_empty() {
        return Err(GridError::Empty);
    }
    for (index, &value) in timestamps.iter().enumerate() {
        if !value.is_finite() {
            return Err(GridError::NonFinite { index, value });
        }
    }
    for (index, pair) in timestamps.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(GridError::NotIncreasing {
                index: index + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }
    Ok(())
}

impl TimeGrid {
    pub fn new(timestamps: Vec<f64>) -> Result<Self, GridError> {
        check_timestamps(&timestamps)?;
        Ok(TimeGrid { timestamps })
    }

    /// `count` timestamps spaced `step` apart, starting at `start`.
    pub fn uniform(start: f64, step: f64, count: usize) -> Result<Self, GridError> {
        if !(step.is_finite() && step > 0.) {
            return Err(GridError::InvalidStep(step));
        }
        let timestamps = (0..count).map(|i| start + step * (i as f64)).collect();
        TimeGrid::new(timestamps)
    }

    /// Keeps every `factor`-th timestamp, starting from the first one.
    pub fn decimate(&self, factor: usize) -> Result<Self, GridError> {
        if factor == 0 {
            return Err(GridError::ZeroDecimation);
        }
        let timestamps = self.timestamps.iter().copied().step_by(factor).collect();
        Ok(TimeGrid { timestamps })
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn first(&self) -> f64 {
        self.timestamps[0]
    }

    pub fn last(&self) -> f64 {
        self.timestamps[self.timestamps.len() - 1]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.timestamps
    }

    /// Consecutive `(t_{i-1}, t_i)` pairs.
    pub fn intervals(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.timestamps.windows(2).map(|w| (w[0], w[1]))
    }
}

impl Index<usize> for TimeGrid {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.timestamps[index]
    }
}
