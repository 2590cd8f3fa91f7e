//! Solution update schemes. `scdg_1d` is the per-substep zone update;
//! `driver` owns solution buffers and sequences substeps into full
//! Runge-Kutta time steps.

pub mod driver;
pub mod scdg_1d;

pub use driver::{fill_guard_zones, Boundary, RungeKuttaOrder, Solver};
pub use scdg_1d::{Configuration, ExecutionMode, Scheme};
