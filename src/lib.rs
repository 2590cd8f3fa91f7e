//! Scdg is a compact Discontinuous Galerkin (DG) solver for 1D scalar
//! hyperbolic conservation laws: linear advection and the inviscid Burgers
//! equation. The solution in each zone is a truncated expansion in scaled
//! Legendre polynomials (three modes, third order), zone integrals are
//! evaluated with three-point Gauss quadrature, and zones are coupled through
//! upwind interface fluxes. Time integration is by explicit
//! strong-stability-preserving Runge-Kutta, each stage being a convex blend of
//! an Euler step and a stored snapshot.
//!
//! The core is [`solvers::Scheme::advance_rk`], which updates every physical
//! zone of a mesh buffer by one Runge-Kutta substep. Zone updates are
//! independent of one another, and are executed in parallel with Rayon.

pub mod dg;
pub mod mesh;
pub mod num_vec;
pub mod solvers;
