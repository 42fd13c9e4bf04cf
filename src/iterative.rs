use nalgebra::{UnitQuaternion, Vector3};

use crate::algorithm::{propagate_steps, Algorithm};
use crate::error::{Error, InputError};
use crate::grid::TimeGrid;
use crate::input::InputSource;
use crate::solution::Solution;

/// The per-scheme part of a multi-step algorithm.
///
/// A scheme with `STEPS = k` splits every output interval `[t_{i-1}, t_i]`
/// into `k` equal sub-intervals and receives the integrated sample of each.
pub trait LocalSolution {
    const TITLE: &'static str;

    /// Number of sub-intervals per output step, at least 1.
    const STEPS: usize;

    /// The rotation taking the orientation at `t_{i-1}` to the one at `t`.
    ///
    /// `gamma` holds exactly `STEPS` samples in time order.
    fn local_solution(&self, t: f64, gamma: &[Vector3<f64>]) -> UnitQuaternion<f64>;
}

/// Runs a [`LocalSolution`] strategy over a timestamp grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iterative<L> {
    scheme: L,
}

impl<L: LocalSolution> Iterative<L> {
    pub fn new(scheme: L) -> Self {
        Iterative { scheme }
    }

    pub fn steps_count() -> usize {
        L::STEPS
    }
}

/// Replaces the contents of `window` with the `k` integrated samples of `[t0, t1]`.
fn fill_window<S>(
    input: &S,
    t0: f64,
    t1: f64,
    k: usize,
    window: &mut Vec<Vector3<f64>>,
) -> Result<(), InputError>
where
    S: InputSource + ?Sized,
{
    let h = (t1 - t0) / (k as f64);
    window.clear();
    for j in 0..k {
        let a = t0 + h * (j as f64);
        // pinned so the sub-intervals tile [t0, t1] without rounding gaps
        let b = if j + 1 == k {
            t1
        } else {
            t0 + h * ((j + 1) as f64)
        };
        window.push(input.integrated(a, b)?);
    }
    Ok(())
}

impl<L: LocalSolution> Algorithm for Iterative<L> {
    const TITLE: &'static str = L::TITLE;

    fn propagate<S>(&self, input: &S, grid: &TimeGrid) -> Result<Solution, Error>
    where
        S: InputSource + ?Sized,
    {
        debug_assert!(L::STEPS >= 1);

        let mut window = Vec::with_capacity(L::STEPS);
        propagate_steps(Self::TITLE, input, grid, |t0, t1| {
            fill_window(input, t0, t1, L::STEPS, &mut window)?;
            Ok(self.scheme.local_solution(t1, &window))
        })
    }
}
