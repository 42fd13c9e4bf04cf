use std::error::Error;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use attitude_propagation::{read_gyroscope, write_solution, InputSource, Scheme};
use log::{info, LevelFilter};
use nalgebra::UnitQuaternion;
use structopt::StructOpt;

/// Propagate an attitude quaternion from logged gyroscope data.
#[derive(Debug, StructOpt)]
#[structopt(name = "attitude_propagation")]
struct Config {
    /// IMU csv with `timestamp [ns], wx, wy, wz` as the leading columns.
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Integration scheme, `average-speed` or `panov`.
    #[structopt(long, default_value = "panov")]
    scheme: Scheme,

    /// Emit one orientation every `decimation` gyroscope samples.
    #[structopt(long, default_value = "4")]
    decimation: usize,

    /// Write the solution here instead of stdout.
    #[structopt(long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

fn logger_init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let start = Instant::now();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{:10.6} {:5}] {}",
                start.elapsed().as_secs_f64(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_args();
    logger_init(config.log_level)?;

    let gyro = read_gyroscope(&config.input, UnitQuaternion::identity())?;
    let grid = gyro.timestamps().decimate(config.decimation)?;
    info!(
        "{}: {} output steps over {:.3} s",
        config.scheme.title(),
        grid.len() - 1,
        grid.last() - grid.first()
    );

    let solution = config.scheme.propagate(&gyro, &grid)?;
    if let Some((t, q)) = solution.last() {
        info!(
            "final orientation at {:.3} s: {:?}, rotated {:.6} rad from the start",
            t,
            q.quaternion().coords,
            q.angle_to(&gyro.initial_solution())
        );
    }

    match &config.output {
        Some(path) => write_solution(&solution, File::create(path)?)?,
        None => write_solution(&solution, io::stdout().lock())?,
    }
    Ok(())
}
