use crate::num_vec::Vector;
use super::geometry::Face;




/// Number of modal coefficients per zone (third-order scheme).
pub const NPOLY: usize = 3;

/// Number of Gauss quadrature points per zone.
pub const NUM_POINTS: usize = 3;

/// The modal coefficients of the solution in one zone.
pub type Zone = Vector<f64, NPOLY>;




/**
 * Gauss-Legendre points and weights on the reference interval [-1, 1].
 */
#[derive(Clone, Copy, Debug)]
pub struct QuadratureRule {
    pub points: [f64; NUM_POINTS],
    pub weights: [f64; NUM_POINTS],
}

pub const GAUSS_LEGENDRE: QuadratureRule = QuadratureRule {
    points: [-0.7745966692414834, 0.0, 0.7745966692414834],
    weights: [5.0 / 9.0, 8.0 / 9.0, 5.0 / 9.0],
};




/**
 * Values and derivatives of the scaled Legendre polynomials
 * `phi_l = sqrt(2l + 1) P_l` at the quadrature points, and their values at
 * the cell faces. Each entry is a vector over the modes, so that the solution
 * at a point is the dot product of the zone's coefficients with the entry.
 */
#[derive(Clone, Copy, Debug)]
pub struct BasisTable {
    values: [Zone; NUM_POINTS],
    derivatives: [Zone; NUM_POINTS],
    left_face: Zone,
    right_face: Zone,
}

pub const BASIS: BasisTable = BasisTable {
    values: [
        Vector::new([1.0, -1.3416407864998738, 0.8944271909999159]),
        Vector::new([1.0, 0.0, -1.118033988749895]),
        Vector::new([1.0, 1.3416407864998738, 0.8944271909999159]),
    ],
    derivatives: [
        Vector::new([0.0, 1.7320508075688772, -5.196152422706632]),
        Vector::new([0.0, 1.7320508075688772, 0.0]),
        Vector::new([0.0, 1.7320508075688772, 5.196152422706632]),
    ],
    left_face: Vector::new([1.0, -1.7320508075688772, 2.23606797749979]),
    right_face: Vector::new([1.0, 1.7320508075688772, 2.23606797749979]),
};




// ============================================================================
impl BasisTable {

    /**
     * Basis function values at the quadrature point with the given index.
     */
    pub fn value(&self, point: usize) -> &Zone {
        &self.values[point]
    }

    /**
     * Basis function derivatives (with respect to the reference coordinate)
     * at the quadrature point with the given index.
     */
    pub fn derivative(&self, point: usize) -> &Zone {
        &self.derivatives[point]
    }

    /**
     * Basis function values at a cell face.
     */
    pub fn face(&self, face: Face) -> &Zone {
        match face {
            Face::Left => &self.left_face,
            Face::Right => &self.right_face,
        }
    }
}




/**
 * Evaluate a zone's polynomial expansion at a point, given the basis values
 * at that point.
 */
pub fn project(coefficients: &Zone, basis: &Zone) -> f64 {
    coefficients.dot(basis)
}

/**
 * Evaluate the scaled Legendre basis at an arbitrary reference coordinate
 * `xsi` in [-1, 1].
 */
pub fn basis_at(xsi: f64) -> Zone {
    Vector::new([
        1.0,
        f64::sqrt(3.0) * xsi,
        f64::sqrt(5.0) * 0.5 * (3.0 * xsi * xsi - 1.0),
    ])
}

/**
 * Evaluate a zone's polynomial expansion at an arbitrary reference coordinate.
 */
pub fn evaluate(coefficients: &Zone, xsi: f64) -> f64 {
    project(coefficients, &basis_at(xsi))
}

/**
 * The zone average of the solution, which is the mode-0 coefficient since
 * the higher modes integrate to zero.
 */
pub fn cell_average(coefficients: &Zone) -> f64 {
    coefficients[0]
}

/**
 * L2-project a function of the reference coordinate onto the modal basis.
 * The basis is orthogonal with `(phi_l, phi_m) = 2 delta_lm` on [-1, 1].
 */
pub fn project_function<F>(f: F) -> Zone
where
    F: Fn(f64) -> f64
{
    let mut coefficients = Zone::zeros();

    for n in 0..NUM_POINTS {
        let w = GAUSS_LEGENDRE.weights[n];
        let fx = f(GAUSS_LEGENDRE.points[n]);

        for l in 0..NPOLY {
            coefficients[l] += 0.5 * w * fx * BASIS.value(n)[l];
        }
    }
    coefficients
}
