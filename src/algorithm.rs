use std::str::FromStr;

use log::{debug, trace};
use nalgebra::UnitQuaternion;

use crate::average_speed::AverageSpeed;
use crate::error::{Error, InputError, ParseSchemeError};
use crate::grid::TimeGrid;
use crate::input::InputSource;
use crate::panov::PanovAlgorithm;
use crate::solution::Solution;

/// An attitude integration scheme.
pub trait Algorithm {
    /// Human-readable name of the scheme.
    const TITLE: &'static str;

    /// Fills a solution over `grid`, starting from the input's initial orientation.
    ///
    /// # Errors
    ///
    /// Any input failure aborts the whole propagation and is returned unchanged
    /// inside [`Error::Input`].
    fn propagate<S>(&self, input: &S, grid: &TimeGrid) -> Result<Solution, Error>
    where
        S: InputSource + ?Sized;
}

/// The step loop every scheme shares.
///
/// `increment(t_{i-1}, t_i)` yields the rotation that is left-multiplied onto
/// the orientation at `t_{i-1}` to get the orientation at `t_i`.
pub(crate) fn propagate_steps<S, F>(
    title: &str,
    input: &S,
    grid: &TimeGrid,
    mut increment: F,
) -> Result<Solution, Error>
where
    S: InputSource + ?Sized,
    F: FnMut(f64, f64) -> Result<UnitQuaternion<f64>, InputError>,
{
    debug!("{}: propagating over {} timestamps", title, grid.len());

    let mut solution = Solution::new(grid, input.initial_solution());
    for (i, (t0, t1)) in grid.intervals().enumerate() {
        let lambda = increment(t0, t1)?;
        solution[i + 1] = lambda * solution[i];
        trace!("step {} [{}, {}]: {:?}", i + 1, t0, t1, solution[i + 1]);
    }

    debug!("{}: done", title);
    Ok(solution)
}

/// An algorithm bound to an input source and a validated timestamp grid.
pub struct Propagation<'a, A, S: ?Sized> {
    algorithm: A,
    input: &'a S,
    grid: TimeGrid,
}

impl<'a, A, S> Propagation<'a, A, S>
where
    A: Algorithm,
    S: InputSource + ?Sized,
{
    /// Rejects an empty, non-finite or non-increasing `timestamps` sequence.
    pub fn new(algorithm: A, input: &'a S, timestamps: Vec<f64>) -> Result<Self, Error> {
        let grid = TimeGrid::new(timestamps)?;
        Ok(Propagation {
            algorithm,
            input,
            grid,
        })
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn execute(&self) -> Result<Solution, Error> {
        self.algorithm.propagate(self.input, &self.grid)
    }

    pub fn algorithm_title(&self) -> &'static str {
        A::TITLE
    }
}

/// Runtime selection among the available schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    AverageSpeed,
    Panov,
}

impl Scheme {
    pub fn title(self) -> &'static str {
        match self {
            Scheme::AverageSpeed => AverageSpeed::TITLE,
            Scheme::Panov => PanovAlgorithm::TITLE,
        }
    }

    /// Number of integrated samples consumed per output step.
    pub fn steps_count(self) -> usize {
        match self {
            Scheme::AverageSpeed => 1,
            Scheme::Panov => PanovAlgorithm::steps_count(),
        }
    }

    pub fn propagate<S>(self, input: &S, grid: &TimeGrid) -> Result<Solution, Error>
    where
        S: InputSource + ?Sized,
    {
        match self {
            Scheme::AverageSpeed => AverageSpeed.propagate(input, grid),
            Scheme::Panov => PanovAlgorithm::default().propagate(input, grid),
        }
    }
}

impl FromStr for Scheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "average-speed" | "average_speed" => Ok(Scheme::AverageSpeed),
            "panov" => Ok(Scheme::Panov),
            _ => Err(ParseSchemeError(s.to_string())),
        }
    }
}
