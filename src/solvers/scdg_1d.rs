use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use crate::dg::quadrature::{project, BASIS, GAUSS_LEGENDRE};
use crate::dg::{Error, Face, Pde, Zone, NPOLY, NUM_POINTS};
use crate::mesh::NUM_GUARD;




/**
 * Strategy for looping over the zones of a mesh. Both produce bitwise
 * identical results.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Zones are updated in order on the calling thread.
    Serial,
    /// Zones are partitioned over the Rayon global thread pool.
    Parallel,
}

impl Default for ExecutionMode {
    fn default() -> Self {
        ExecutionMode::Parallel
    }
}




/**
 * Run-wide settings of the scheme, fixed once before the first update.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub pde: Pde,
    pub dx: f64,
    #[serde(default)]
    pub mode: ExecutionMode,
}




/**
 * A third-order modal DG update for 1D scalar conservation laws, hard-coded
 * for three Legendre modes and three Gauss points per zone. Instances can only
 * be created from a valid configuration, and are immutable afterwards, so they
 * may be shared freely between threads.
 */
#[derive(Clone, Debug)]
pub struct Scheme {
    pde: Pde,
    dx: f64,
    mode: ExecutionMode,
}




// ============================================================================
impl Scheme {

    pub fn new(config: &Configuration) -> Result<Self, Error> {
        config.pde.validate()?;

        if !(config.dx > 0.0 && config.dx.is_finite()) {
            return Err(Error::InvalidCellSpacing(config.dx))
        }
        Ok(Self {
            pde: config.pde,
            dx: config.dx,
            mode: config.mode,
        })
    }

    pub fn pde(&self) -> Pde {
        self.pde
    }

    pub fn cell_spacing(&self) -> f64 {
        self.dx
    }

    pub fn execution_mode(&self) -> ExecutionMode {
        self.mode
    }

    /**
     * Advance the solution by one Runge-Kutta substep.
     *
     * Each buffer holds `NPOLY` modal coefficients for each of `num_zones`
     * physical zones plus one guard zone on either side. The guard zones of
     * `u_rd` must have been filled by the caller. For each physical zone, the
     * coefficients written to `u_wr` are
     *
     * `(1 - rk_param) * (u_rd + dt * L(u_rd)) + rk_param * u_rk`
     *
     * where `L` is the DG residual. Guard zones of `u_wr` are not touched.
     * The `time` argument is currently unused, since the equations are
     * autonomous.
     *
     * Arguments are validated up front: on error, nothing is written.
     */
    pub fn advance_rk(
        &self,
        num_zones: usize,
        u_rk: &[f64],
        u_rd: &[f64],
        u_wr: &mut [f64],
        time: f64,
        rk_param: f64,
        dt: f64) -> Result<(), Error>
    {
        trace!("advance_rk: num_zones={} t={} rk_param={} dt={}", num_zones, time, rk_param, dt);

        let lengths = [("u_rk", u_rk.len()), ("u_rd", u_rd.len()), ("u_wr", u_wr.len())];
        let required = validate_step(num_zones, &lengths, rk_param, dt).map_err(|e| {
            debug!("rejected Runge-Kutta substep: {}", e);
            e
        })?;

        let u_rk = &u_rk[..required];
        let u_rd = &u_rd[..required];
        let u_wr = &mut u_wr[NUM_GUARD * NPOLY..(NUM_GUARD + num_zones) * NPOLY];
        let update = |(i, uwr): (usize, &mut [f64])| {
            self.update_zone(i + NUM_GUARD, u_rk, u_rd, rk_param, dt).write_to_slice(uwr)
        };

        match self.mode {
            ExecutionMode::Serial => u_wr.chunks_exact_mut(NPOLY).enumerate().for_each(update),
            ExecutionMode::Parallel => u_wr.par_chunks_exact_mut(NPOLY).enumerate().for_each(update),
        }
        Ok(())
    }

    /**
     * Return the new coefficients of the zone in buffer slot `j`. The slots
     * `j - 1` and `j + 1` must exist in both buffers.
     */
    fn update_zone(&self, j: usize, u_rk: &[f64], u_rd: &[f64], rk_param: f64, dt: f64) -> Zone {
        let uli = Zone::from_slice(&u_rd[NPOLY * (j - 1)..]);
        let urd = Zone::from_slice(&u_rd[NPOLY * j..]);
        let uri = Zone::from_slice(&u_rd[NPOLY * (j + 1)..]);
        let urk = Zone::from_slice(&u_rk[NPOLY * j..]);

        let pfl = BASIS.face(Face::Left);
        let pfr = BASIS.face(Face::Right);

        let uimh_l = project(&uli, pfr);
        let uimh_r = project(&urd, pfl);
        let uiph_l = project(&urd, pfr);
        let uiph_r = project(&uri, pfl);
        let fimh = self.pde.upwind(uimh_l, uimh_r);
        let fiph = self.pde.upwind(uiph_l, uiph_r);

        let mut fx = [0.0; NUM_POINTS];

        for (n, f) in fx.iter_mut().enumerate() {
            *f = self.pde.flux(project(&urd, BASIS.value(n)));
        }

        let mut udot = Zone::zeros();

        for l in 0..NPOLY {
            let mut udot_v = 0.0;

            for n in 0..NUM_POINTS {
                udot_v += fx[n] * BASIS.derivative(n)[l] * GAUSS_LEGENDRE.weights[n] / self.dx;
            }
            let udot_s = -(fimh * pfl[l] * Face::Left.normal() + fiph * pfr[l] * Face::Right.normal()) / self.dx;
            udot[l] = udot_v + udot_s;
        }

        let provisional = urd + udot * dt;
        provisional * (1.0 - rk_param) + urk * rk_param
    }
}




// ============================================================================
/**
 * Check the per-call arguments of a substep, returning the number of buffer
 * entries the substep will access.
 */
fn validate_step(num_zones: usize, buffers: &[(&'static str, usize)], rk_param: f64, dt: f64) -> Result<usize, Error> {
    if !(dt > 0.0 && dt.is_finite()) {
        return Err(Error::InvalidTimeStep(dt))
    }
    if !(0.0..=1.0).contains(&rk_param) {
        return Err(Error::InvalidRungeKuttaParameter(rk_param))
    }
    let required = num_zones
        .checked_add(2 * NUM_GUARD)
        .and_then(|n| n.checked_mul(NPOLY))
        .ok_or(Error::ZoneCountOverflow(num_zones))?;

    for &(name, len) in buffers {
        if len < required {
            return Err(Error::BufferTooSmall { name, len, required })
        }
    }
    Ok(required)
}
