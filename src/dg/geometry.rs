/**
 * Enum to identify one of the two faces of a 1D cell
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Left,
    Right,
}

// ============================================================================
impl Face {

    /**
     * The outward unit normal of this face.
     */
    pub fn normal(&self) -> f64 {
        match self {
            Face::Left => -1.0,
            Face::Right => 1.0,
        }
    }

    /**
     * The reference-cell coordinate of this face.
     */
    pub fn coordinate(&self) -> f64 {
        self.normal()
    }
}
