use std::io;
use std::ops::{Index, IndexMut};

use nalgebra::UnitQuaternion;
use serde::Serialize;

use crate::grid::TimeGrid;

/// Orientation time series produced by a propagation.
///
/// The length is fixed by the grid it was built from. Element 0 holds the
/// initial orientation; the remaining elements are overwritten in time order.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<Q = UnitQuaternion<f64>> {
    timestamps: Vec<f64>,
    rotations: Vec<Q>,
}

impl<Q: Clone> Solution<Q> {
    pub(crate) fn new(grid: &TimeGrid, initial: Q) -> Self {
        Solution {
            timestamps: grid.as_slice().to_vec(),
            rotations: vec![initial; grid.len()],
        }
    }
}

impl<Q> Solution<Q> {
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    pub fn rotations(&self) -> &[Q] {
        &self.rotations
    }

    pub fn get(&self, index: usize) -> Option<(f64, &Q)> {
        let q = self.rotations.get(index)?;
        Some((self.timestamps[index], q))
    }

    pub fn last(&self) -> Option<(f64, &Q)> {
        self.get(self.len().checked_sub(1)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &Q)> + '_ {
        self.timestamps.iter().copied().zip(self.rotations.iter())
    }
}

impl<Q> Index<usize> for Solution<Q> {
    type Output = Q;

    fn index(&self, index: usize) -> &Q {
        &self.rotations[index]
    }
}

impl<Q> IndexMut<usize> for Solution<Q> {
    fn index_mut(&mut self, index: usize) -> &mut Q {
        &mut self.rotations[index]
    }
}

#[derive(Debug, Serialize)]
struct AttitudeRecord {
    timestamp: f64,
    qw: f64,
    qx: f64,
    qy: f64,
    qz: f64,
}

/// Writes `timestamp,qw,qx,qy,qz` rows, with a header line.
pub fn write_solution<W: io::Write>(solution: &Solution, writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for (timestamp, q) in solution.iter() {
        writer.serialize(AttitudeRecord {
            timestamp,
            qw: q.w,
            qx: q.i,
            qy: q.j,
            qz: q.k,
        })?;
    }
    writer.flush()?;
    Ok(())
}
