//! Building blocks of the modal Discontinuous Galerkin scheme: the physical
//! flux and interface Riemann solvers, the quadrature rule and basis tables,
//! and the configuration error type.

pub mod error;
pub mod flux;
pub mod geometry;
pub mod quadrature;

pub use error::Error;
pub use flux::Pde;
pub use geometry::Face;
pub use quadrature::{Zone, NPOLY, NUM_POINTS};
