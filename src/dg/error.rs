use std::error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]

/**
 * Error to represent an invalid scheme configuration or an invalid argument to
 * a zone update. These are detected before any zone is written.
 */
pub enum Error {
    UnknownPde(String),
    InvalidWavespeed(f64),
    InvalidCellSpacing(f64),
    InvalidTimeStep(f64),
    InvalidRungeKuttaParameter(f64),
    BufferTooSmall {
        name: &'static str,
        len: usize,
        required: usize,
    },
    ZoneCountOverflow(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        use Error::*;

        match self {
            UnknownPde(name) => write!(fmt, "unknown PDE kind: {} (expected advection or burgers)", name),
            InvalidWavespeed(a) => write!(fmt, "advection wavespeed must be finite: {}", a),
            InvalidCellSpacing(dx) => write!(fmt, "cell spacing must be positive and finite: {}", dx),
            InvalidTimeStep(dt) => write!(fmt, "time step must be positive and finite: {}", dt),
            InvalidRungeKuttaParameter(a) => write!(fmt, "Runge-Kutta parameter must be in [0, 1]: {}", a),
            BufferTooSmall { name, len, required } => write!(
                fmt,
                "buffer {} has length {} but at least {} is required",
                name, len, required
            ),
            ZoneCountOverflow(n) => write!(fmt, "zone count {} overflows the buffer size", n),
        }
    }
}

impl error::Error for Error {}
