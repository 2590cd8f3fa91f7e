use log::debug;
use serde::{Deserialize, Serialize};
use crate::dg::{Error, Pde, NPOLY};
use crate::mesh::{Mesh, NUM_GUARD};
use super::scdg_1d::{Configuration, ExecutionMode, Scheme};




/**
 * How the guard zones of a buffer are filled before each substep.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Each guard zone is a copy of the physical zone at the opposite end.
    Periodic,
    /// Each guard zone is a copy of its adjacent physical zone.
    Outflow,
}




/**
 * Fill the guard zones of a buffer holding `num_zones` physical zones. Does
 * nothing if there are no physical zones to copy from. The buffer must hold
 * at least `(num_zones + 2) * NPOLY` entries; a shorter one is left untouched.
 */
pub fn fill_guard_zones(boundary: Boundary, num_zones: usize, buffer: &mut [f64]) -> Result<(), Error> {
    let required = num_zones
        .checked_add(2 * NUM_GUARD)
        .and_then(|n| n.checked_mul(NPOLY))
        .ok_or(Error::ZoneCountOverflow(num_zones))?;

    if buffer.len() < required {
        return Err(Error::BufferTooSmall { name: "buffer", len: buffer.len(), required })
    }
    if num_zones == 0 {
        return Ok(())
    }
    let first = NUM_GUARD;
    let last = NUM_GUARD + num_zones - 1;

    let (source_l, source_r) = match boundary {
        Boundary::Periodic => (last, first),
        Boundary::Outflow => (first, last),
    };
    buffer.copy_within(source_l * NPOLY..(source_l + 1) * NPOLY, (first - 1) * NPOLY);
    buffer.copy_within(source_r * NPOLY..(source_r + 1) * NPOLY, (last + 1) * NPOLY);
    Ok(())
}




/**
 * The order of a strong-stability-preserving Runge-Kutta scheme.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RungeKuttaOrder {
    First,
    Second,
    Third,
}

impl RungeKuttaOrder {

    /**
     * The snapshot weight of each stage: stage `s` writes
     * `(1 - a_s) (u + dt L(u)) + a_s u0`, where `u0` is the state at the start
     * of the step.
     */
    pub fn stage_parameters(&self) -> &'static [f64] {
        match self {
            RungeKuttaOrder::First => &[0.0],
            RungeKuttaOrder::Second => &[0.0, 1.0 / 2.0],
            RungeKuttaOrder::Third => &[0.0, 3.0 / 4.0, 1.0 / 3.0],
        }
    }

    pub fn from_order(order: usize) -> Option<Self> {
        match order {
            1 => Some(RungeKuttaOrder::First),
            2 => Some(RungeKuttaOrder::Second),
            3 => Some(RungeKuttaOrder::Third),
            _ => None,
        }
    }
}




/**
 * Owns the solution buffers for a run and sequences Runge-Kutta substeps of
 * the DG scheme over them. The time step is chosen by the caller.
 */
pub struct Solver {
    mesh: Mesh,
    scheme: Scheme,
    boundary: Boundary,
    rk_order: RungeKuttaOrder,
    time: f64,
    iteration: u64,
    conserved_rk: Vec<f64>,
    conserved_rd: Vec<f64>,
    conserved_wr: Vec<f64>,
}




// ============================================================================
impl Solver {

    /**
     * Create a solver from initial modal coefficients (including guard zones)
     * on the given mesh.
     */
    pub fn new(
        mesh: Mesh,
        pde: Pde,
        mode: ExecutionMode,
        boundary: Boundary,
        rk_order: RungeKuttaOrder,
        conserved: Vec<f64>) -> Result<Self, Error>
    {
        let scheme = Scheme::new(&Configuration { pde, dx: mesh.dx, mode })?;

        if conserved.len() < mesh.buffer_len() {
            return Err(Error::BufferTooSmall {
                name: "conserved",
                len: conserved.len(),
                required: mesh.buffer_len(),
            })
        }
        Ok(Self {
            conserved_rk: conserved.clone(),
            conserved_wr: conserved.clone(),
            conserved_rd: conserved,
            mesh,
            scheme,
            boundary,
            rk_order,
            time: 0.0,
            iteration: 0,
        })
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /**
     * The current modal coefficients, including guard zones.
     */
    pub fn conserved(&self) -> &[f64] {
        &self.conserved_rd
    }

    /**
     * Advance the solution by one full time step.
     */
    pub fn advance(&mut self, dt: f64) -> Result<(), Error> {
        let num_zones = self.mesh.num_zones;

        self.conserved_rk.copy_from_slice(&self.conserved_rd);

        for &rk_param in self.rk_order.stage_parameters() {
            fill_guard_zones(self.boundary, num_zones, &mut self.conserved_rd)?;
            self.scheme.advance_rk(
                num_zones,
                &self.conserved_rk,
                &self.conserved_rd,
                &mut self.conserved_wr,
                self.time,
                rk_param,
                dt)?;
            std::mem::swap(&mut self.conserved_rd, &mut self.conserved_wr);
        }
        fill_guard_zones(self.boundary, num_zones, &mut self.conserved_rd)?;

        self.time += dt;
        self.iteration += 1;

        let total = self.mesh.total(&self.conserved_rd)?;
        debug!("[{}] t={:.4} total={:.12e}", self.iteration, self.time, total);
        Ok(())
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::*;
    use crate::dg::quadrature;
    use std::f64::consts::PI;

    #[test]
    fn periodic_and_outflow_guards_work() {
        let mut u: Vec<f64> = (0..4 * NPOLY).map(|k| k as f64).collect();
        fill_guard_zones(Boundary::Periodic, 2, &mut u).unwrap();
        assert_eq!(u, vec![6.0, 7.0, 8.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 3.0, 4.0, 5.0]);

        let mut u: Vec<f64> = (0..4 * NPOLY).map(|k| k as f64).collect();
        fill_guard_zones(Boundary::Outflow, 2, &mut u).unwrap();
        assert_eq!(u, vec![3.0, 4.0, 5.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 6.0, 7.0, 8.0]);

        let mut u = vec![1.0; 2 * NPOLY];
        fill_guard_zones(Boundary::Periodic, 0, &mut u).unwrap();
        assert_eq!(u, vec![1.0; 2 * NPOLY]);
    }

    #[test]
    fn guard_fill_rejects_short_buffers() {
        let mut u = vec![-1.0; 2 * NPOLY];
        assert_eq!(
            fill_guard_zones(Boundary::Periodic, 4, &mut u),
            Err(Error::BufferTooSmall { name: "buffer", len: 2 * NPOLY, required: 6 * NPOLY }));
        assert!(u.iter().all(|&x| x == -1.0));

        let mut u = vec![-1.0; 3 * NPOLY];
        assert!(fill_guard_zones(Boundary::Outflow, 2, &mut u).is_err());
        assert_eq!(
            fill_guard_zones(Boundary::Periodic, usize::MAX, &mut u),
            Err(Error::ZoneCountOverflow(usize::MAX)));
    }

    #[test]
    fn stage_parameters_are_convex_weights() {
        for order in 1..=3 {
            let rk = RungeKuttaOrder::from_order(order).unwrap();
            assert_eq!(rk.stage_parameters().len(), order);
            assert!(rk.stage_parameters().iter().all(|a| (0.0..=1.0).contains(a)));
        }
        assert_eq!(RungeKuttaOrder::from_order(4), None);
    }

    #[test]
    fn solver_rejects_mismatched_initial_data() {
        let mesh = Mesh::from_interval(0.0, 1.0, 8).unwrap();
        let result = Solver::new(mesh, Pde::Burgers, ExecutionMode::Serial, Boundary::Periodic, RungeKuttaOrder::Second, vec![0.0; 3]);
        assert!(matches!(result, Err(Error::BufferTooSmall { name: "conserved", .. })));
    }

    #[test]
    fn solver_rejects_invalid_time_steps() {
        let mesh = Mesh::from_interval(0.0, 1.0, 8).unwrap();
        let initial = mesh.project(|x| x);
        let mut solver = Solver::new(mesh, Pde::Burgers, ExecutionMode::Serial, Boundary::Periodic, RungeKuttaOrder::Third, initial).unwrap();

        assert!(matches!(solver.advance(f64::NAN), Err(Error::InvalidTimeStep(_))));
        assert_eq!(solver.advance(f64::INFINITY), Err(Error::InvalidTimeStep(f64::INFINITY)));
        assert_eq!(solver.advance(0.0), Err(Error::InvalidTimeStep(0.0)));
        assert_eq!(solver.time(), 0.0);
        assert_eq!(solver.iteration(), 0);
    }

    #[test]
    fn periodic_advection_returns_the_initial_profile() {
        let mesh = Mesh::from_interval(0.0, 1.0, 32).unwrap();
        let f = |x: f64| f64::sin(2.0 * PI * x);
        let initial = mesh.project(f);
        let dt = 0.1 * mesh.dx;
        let num_steps = (1.0 / dt).round() as usize;
        let mut solver = Solver::new(
            mesh.clone(),
            Pde::Advection { wavespeed: 1.0 },
            ExecutionMode::Parallel,
            Boundary::Periodic,
            RungeKuttaOrder::Third,
            initial.clone()).unwrap();

        for _ in 0..num_steps {
            solver.advance(dt).unwrap();
        }
        assert_eq!(solver.iteration(), num_steps as u64);
        assert!((solver.time() - 1.0).abs() < 1e-10);
        assert!((mesh.total(solver.conserved()).unwrap() - mesh.total(&initial).unwrap()).abs() < 1e-12);

        let error = mesh
            .zones(solver.conserved())
            .unwrap()
            .zip(mesh.zones(&initial).unwrap())
            .map(|(a, b)| (quadrature::cell_average(&a) - quadrature::cell_average(&b)).abs())
            .fold(0.0, f64::max);
        assert!(error < 1e-4, "error = {}", error);
    }

    #[test]
    fn burgers_conserves_the_total_before_shock_formation() {
        let mesh = Mesh::from_interval(0.0, 1.0, 64).unwrap();
        let initial = mesh.project(|x| 0.5 + f64::sin(2.0 * PI * x));
        let mut solver = Solver::new(
            mesh.clone(),
            Pde::Burgers,
            ExecutionMode::Serial,
            Boundary::Periodic,
            RungeKuttaOrder::Second,
            initial.clone()).unwrap();

        for _ in 0..40 {
            solver.advance(0.02 * mesh.dx).unwrap();
        }
        assert!((mesh.total(solver.conserved()).unwrap() - mesh.total(&initial).unwrap()).abs() < 1e-12);
    }
}
