use crate::algorithm::{propagate_steps, Algorithm};
use crate::error::Error;
use crate::exp_so3;
use crate::grid::TimeGrid;
use crate::input::InputSource;
use crate::solution::Solution;

/// Average speed method: one integrated sample per step, 2nd order accurate.
///
/// Each step exponentiates the rotation vector integrated over `[t_{i-1}, t_i]`
/// and left-multiplies it onto the previous orientation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageSpeed;

impl Algorithm for AverageSpeed {
    const TITLE: &'static str = "Average speed method (1-step, 2nd order, integrated data)";

    fn propagate<S>(&self, input: &S, grid: &TimeGrid) -> Result<Solution, Error>
    where
        S: InputSource + ?Sized,
    {
        propagate_steps(Self::TITLE, input, grid, |t0, t1| {
            let phi = input.integrated(t0, t1)?;
            Ok(exp_so3(&phi))
        })
    }
}
