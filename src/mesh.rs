use std::ops::Range;
use serde::{Deserialize, Serialize};
use crate::dg::quadrature::{self, Zone, NPOLY};
use crate::dg::Error;




/// Number of guard zones on each side of a mesh buffer.
pub const NUM_GUARD: usize = 1;




/**
 * A uniform 1D mesh of `num_zones` physical zones starting at `x0`, with
 * spacing `dx`. Buffers of modal coefficients on this mesh carry one guard
 * zone on each side: physical zone `i` lives in buffer slot `i + NUM_GUARD`.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub x0: f64,
    pub dx: f64,
    pub num_zones: usize,
}




// ============================================================================
impl Mesh {

    /**
     * Creates a mesh covering the interval `[x0, x1)` with the given number
     * of zones.
     */
    pub fn from_interval(x0: f64, x1: f64, num_zones: usize) -> Result<Self, Error> {
        let dx = (x1 - x0) / num_zones as f64;

        if !(dx > 0.0 && dx.is_finite()) {
            return Err(Error::InvalidCellSpacing(dx))
        }
        Ok(Self { x0, dx, num_zones })
    }

    pub fn cell_spacing(&self) -> f64 {
        self.dx
    }

    /**
     * Returns the cell-center coordinate of a physical zone. Out-of-bounds
     * indexes (such as guard zones at -1 and num_zones) are allowed.
     */
    pub fn cell_center(&self, i: i64) -> f64 {
        self.x0 + (i as f64 + 0.5) * self.dx
    }

    /**
     * Returns the coordinate of the point at reference coordinate `xsi` in
     * physical zone `i`.
     */
    pub fn coordinate(&self, i: i64, xsi: f64) -> f64 {
        self.cell_center(i) + 0.5 * xsi * self.dx
    }

    /**
     * Returns the number of zones including guard zones.
     */
    pub fn num_total_zones(&self) -> usize {
        self.num_zones + 2 * NUM_GUARD
    }

    /**
     * Returns the number of `f64` entries in a buffer of modal coefficients
     * on this mesh.
     */
    pub fn buffer_len(&self) -> usize {
        self.num_total_zones() * NPOLY
    }

    /**
     * Returns the range of buffer slots occupied by physical zones.
     */
    pub fn zone_range(&self) -> Range<usize> {
        NUM_GUARD..NUM_GUARD + self.num_zones
    }

    /**
     * L2-project a function of position onto the modal basis of every
     * physical zone. Guard zones are zero.
     */
    pub fn project<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64
    {
        let mut buffer = vec![0.0; self.buffer_len()];

        for (i, slot) in self.zone_range().enumerate() {
            let u = quadrature::project_function(|xsi| f(self.coordinate(i as i64, xsi)));
            u.write_to_slice(&mut buffer[slot * NPOLY..]);
        }
        buffer
    }

    /**
     * Returns the cell-center coordinates of the physical zones.
     */
    pub fn cell_centers(&self) -> Vec<f64> {
        (0..self.num_zones as i64).map(|i| self.cell_center(i)).collect()
    }

    /**
     * The integral of the solution over the physical zones.
     */
    pub fn total(&self, buffer: &[f64]) -> Result<f64, Error> {
        Ok(self.zones(buffer)?.map(|u| quadrature::cell_average(&u) * self.dx).sum())
    }

    /**
     * Iterate over the modal coefficients of the physical zones of a buffer.
     * Fails if the buffer is shorter than `buffer_len`.
     */
    pub fn zones<'a>(&self, buffer: &'a [f64]) -> Result<impl Iterator<Item = Zone> + 'a, Error> {
        if buffer.len() < self.buffer_len() {
            return Err(Error::BufferTooSmall {
                name: "buffer",
                len: buffer.len(),
                required: self.buffer_len(),
            })
        }
        let range = self.zone_range();

        Ok(buffer[range.start * NPOLY..range.end * NPOLY]
            .chunks_exact(NPOLY)
            .map(Zone::from_slice))
    }
}
