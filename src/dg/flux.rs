use std::str::FromStr;
use serde::{Deserialize, Serialize};
use super::error::Error;




/**
 * The scalar conservation law being solved. The selection is fixed for a run;
 * each variant carries its own physical flux and its own interface Riemann
 * solver.
 */
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pde {
    /// Linear advection `u_t + a u_x = 0` with a single global wavespeed.
    Advection { wavespeed: f64 },
    /// Inviscid Burgers `u_t + (u^2 / 2)_x = 0`.
    Burgers,
}




// ============================================================================
impl Pde {

    /**
     * Return an error if this equation carries an unusable parameter.
     */
    pub fn validate(&self) -> Result<(), Error> {
        match *self {
            Pde::Advection { wavespeed } if !wavespeed.is_finite() => {
                Err(Error::InvalidWavespeed(wavespeed))
            }
            _ => Ok(()),
        }
    }

    /**
     * The physical flux at a point value of the solution.
     */
    pub fn flux(&self, u: f64) -> f64 {
        match *self {
            Pde::Advection { wavespeed } => wavespeed * u,
            Pde::Burgers => 0.5 * u * u,
        }
    }

    /**
     * The numerical flux at an interface, given the states on its left and
     * right sides.
     *
     * Advection upwinds on the sign of the global wavespeed. Burgers upwinds
     * on the sign of the point values, which are the characteristic speeds
     * since `f'(u) = u`; a sign change across the interface (including a zero
     * on either side) gets a zero flux.
     */
    pub fn upwind(&self, ul: f64, ur: f64) -> f64 {
        match *self {
            Pde::Advection { wavespeed } => {
                if wavespeed > 0.0 {
                    self.flux(ul)
                } else {
                    self.flux(ur)
                }
            }
            Pde::Burgers => {
                if ul > 0.0 && ur > 0.0 {
                    self.flux(ul)
                } else if ul < 0.0 && ur < 0.0 {
                    self.flux(ur)
                } else {
                    0.0
                }
            }
        }
    }
}

impl FromStr for Pde {
    type Err = Error;

    /**
     * Parse an equation name. Advection parses with unit wavespeed; use
     * `Pde::Advection { wavespeed }` directly to pick another.
     */
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "advection" => Ok(Pde::Advection { wavespeed: 1.0 }),
            "burgers" => Ok(Pde::Burgers),
            _ => Err(Error::UnknownPde(name.to_string())),
        }
    }
}
