use std::io;
use std::path::Path;

use log::info;
use nalgebra::{UnitQuaternion, Vector3};
use serde::Deserialize;
use thiserror::Error;

use crate::sampled::{SampleError, SampledGyro};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read gyroscope csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid gyroscope samples: {0}")]
    Samples(#[from] SampleError),
}

/// The leading columns of a EuRoC style IMU row. Accelerometer columns are not read.
#[derive(Debug, Deserialize)]
struct GyroRecord {
    timestamp: u64,
    wx: f64,
    wy: f64,
    wz: f64,
}

impl GyroRecord {
    fn angular_velocity(&self) -> Vector3<f64> {
        Vector3::new(self.wx, self.wy, self.wz)
    }
}

fn nanosec_to_sec(nanosec: u64) -> f64 {
    (nanosec as f64) * 1e-9
}

/// Reads `timestamp [ns], wx, wy, wz, ...` rows; lines starting with `#` are skipped.
///
/// Timestamps are converted to seconds relative to the first row so that the
/// first sample sits at `t = 0`.
pub fn read_gyroscope_from_reader<R: io::Read>(
    reader: R,
    initial: UnitQuaternion<f64>,
) -> Result<SampledGyro, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .comment(Some(b'#'))
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut origin = None;
    let mut timestamps = vec![];
    let mut angular_velocities = vec![];
    for string_record in reader.records() {
        let gyro_columns = string_record?.iter().take(4).collect::<csv::StringRecord>();
        let record: GyroRecord = gyro_columns.deserialize(None)?;
        let origin = *origin.get_or_insert(record.timestamp);
        timestamps.push(nanosec_to_sec(record.timestamp.saturating_sub(origin)));
        angular_velocities.push(record.angular_velocity());
    }

    info!("read {} gyroscope samples", timestamps.len());
    Ok(SampledGyro::new(initial, timestamps, angular_velocities)?)
}

pub fn read_gyroscope<P: AsRef<Path>>(
    path: P,
    initial: UnitQuaternion<f64>,
) -> Result<SampledGyro, DatasetError> {
    let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
    read_gyroscope_from_reader(file, initial)
}
