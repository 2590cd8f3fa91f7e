use core::ops::{Add, Mul, Index, IndexMut};




/**
 * A statically-sized numeric vector over a generic scalar data type T, which
 * supports arithmetic operations also supported by T. Zones of modal
 * coefficients and tables of basis function values are stored this way, so
 * the per-zone arithmetic never touches the heap.
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T, const DIM: usize> {
    data: [T; DIM]
}




// ============================================================================
impl<T, const DIM: usize> Vector<T, DIM> {

    /**
     * Create a vector from an array of its components.
     */
    pub const fn new(data: [T; DIM]) -> Self {
        Self { data }
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Copy, const DIM: usize> Vector<T, DIM> {

    /**
     * Read a vector from the leading `DIM` elements of a slice. Panics if the
     * slice is too short; callers are expected to have checked the length.
     */
    pub fn from_slice(slice: &[T]) -> Self {
        let mut data = [slice[0]; DIM];
        data.copy_from_slice(&slice[..DIM]);
        Self { data }
    }

    /**
     * Write the components of this vector to the leading `DIM` elements of a
     * slice.
     */
    pub fn write_to_slice(&self, slice: &mut [T]) {
        slice[..DIM].copy_from_slice(&self.data)
    }
}

impl<const DIM: usize> Vector<f64, DIM> {

    pub fn zeros() -> Self {
        Self { data: [0.0; DIM] }
    }

    /**
     * The Euclidean inner product. Summation runs in index order, so the
     * result is reproducible across execution strategies.
     */
    pub fn dot(&self, other: &Self) -> f64 {
        self.iter().zip(other.iter()).map(|(a, b)| a * b).sum()
    }
}




// ============================================================================
impl<T, U, V, const DIM: usize> Add<Vector<U, DIM>> for Vector<T, DIM>
where
    T: Copy + Add<U, Output = V>,
    U: Copy,
    V: Copy + Default
{
    type Output = Vector<V, DIM>;

    fn add(self, other: Vector<U, DIM>) -> Self::Output {
        let mut data = [V::default(); DIM];

        for (i, x) in data.iter_mut().enumerate() {
            *x = self[i].add(other[i])
        }
        Self::Output { data }
    }
}

impl<T, V, const DIM: usize> Mul<f64> for Vector<T, DIM>
where
    T: Copy + Mul<f64, Output = V>,
    V: Copy + Default
{
    type Output = Vector<V, DIM>;

    fn mul(self, other: f64) -> Self::Output {
        let mut data = [V::default(); DIM];

        for (i, x) in data.iter_mut().enumerate() {
            *x = self[i].mul(other)
        }
        Self::Output { data }
    }
}




// ============================================================================
impl<T, const DIM: usize> Index<usize> for Vector<T, DIM> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const DIM: usize> IndexMut<usize> for Vector<T, DIM> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}
