//! Shape-generic owned arrays.
//!
//! [`NdArray`] owns a shape and the buffer that shape selects. The number of
//! coordinates accepted by indexing is the shape's `Index` type, so passing the
//! wrong arity is a type error:
//!
//! ```compile_fail
//! use pjplot::{Matrix, DynShape2};
//! let m = Matrix::<f64, _>::new(DynShape2::new(2, 2));
//! let _ = m.at(1); // a matrix needs `[row, col]`
//! ```

use crate::element::{Element, type_name};
use crate::error::ShapeError;
use crate::shape::{BufferOf, Shape, Shape1, Shape2};
use crate::storage::Storage;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Fixed-shape container of [`Element`]s in row-major order.
#[derive(Debug, Clone)]
pub struct NdArray<T: Element, S: Shape> {
    shape: S,
    data: BufferOf<S, T>,
}

/// Naming alias for arrays over 2-D shapes. The alias itself does not restrict `S`;
/// the 2-D helpers (`rows`, `cols`, `row`) require `S: Shape2`.
pub type Matrix<T, S> = NdArray<T, S>;

/// Matrix of RGBA pixels.
pub type Image<S> = Matrix<crate::element::Rgba, S>;

impl<T: Element, S: Shape> NdArray<T, S> {
    /// Allocate an array for `shape` with every element at `T::default()`.
    pub fn new(shape: S) -> Self {
        let data = shape.allocate::<T>();
        Self { shape, data }
    }

    /// Allocate an array for `shape` with every element set to `value`.
    pub fn from_elem(shape: S, value: T) -> Self {
        let mut out = Self::new(shape);
        out.fill(value);
        out
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }

    pub fn dims(&self) -> usize {
        S::DIMS
    }

    pub fn element_count(&self) -> usize {
        self.shape.element_count()
    }

    /// Element type name, e.g. `"f64"`.
    pub fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    /// Dimensionality label, e.g. `"2-D array"`.
    pub fn to_descriptive_string(&self) -> String {
        format!("{}-D array", S::DIMS)
    }

    /// Contiguous view of the whole buffer.
    pub fn data(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data_mut().iter_mut()
    }

    pub fn fill(&mut self, value: T) {
        self.data_mut().fill(value);
    }

    /// Element at `index`, or an out-of-range error.
    pub fn at(&self, index: S::Index) -> Result<&T, ShapeError> {
        let i = self.shape.linear_index(index)?;
        Ok(&self.data()[i])
    }

    pub fn at_mut(&mut self, index: S::Index) -> Result<&mut T, ShapeError> {
        let i = self.shape.linear_index(index)?;
        Ok(&mut self.data_mut()[i])
    }
}

impl<T: Element, S: Shape1> NdArray<T, S> {
    pub fn length(&self) -> usize {
        self.shape.length()
    }
}

impl<T: Element, S: Shape2> NdArray<T, S> {
    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// One row as a contiguous slice.
    pub fn row(&self, row: usize) -> Result<&[T], ShapeError> {
        let start = self.shape.linear_index([row, 0]).or_else(|e| {
            // A zero-column matrix still has addressable (empty) rows.
            if self.cols() == 0 && row < self.rows() {
                Ok(0)
            } else {
                Err(e)
            }
        })?;
        Ok(&self.data()[start..start + self.cols()])
    }
}

/// Panics with the [`ShapeError`] message when `index` is out of range.
impl<T: Element, S: Shape> Index<S::Index> for NdArray<T, S> {
    type Output = T;

    fn index(&self, index: S::Index) -> &T {
        match self.at(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Element, S: Shape> IndexMut<S::Index> for NdArray<T, S> {
    fn index_mut(&mut self, index: S::Index) -> &mut T {
        match self.at_mut(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a, T: Element, S: Shape> IntoIterator for &'a NdArray<T, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Element, S: Shape> IntoIterator for &'a mut NdArray<T, S> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Element, S: Shape> PartialEq for NdArray<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data() == other.data()
    }
}

impl<T: Element, S: Shape> fmt::Display for NdArray<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.to_descriptive_string(), self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Rgba;
    use crate::shape::{DynShape1, DynShape2, StaticShape1, StaticShape2};

    #[test]
    fn static_matrix_has_r_times_c_elements() {
        let m = Matrix::<i32, _>::new(StaticShape2::<3, 4>);
        assert_eq!(m.element_count(), 12);
        assert_eq!(m.data().len(), 12);
        assert_eq!((m.rows(), m.cols()), (3, 4));
        // Zero-sized shape + inline buffer: nothing else in the struct.
        assert_eq!(
            std::mem::size_of::<Matrix<i32, StaticShape2<3, 4>>>(),
            12 * std::mem::size_of::<i32>()
        );
    }

    macro_rules! static_capacity_tests {
        ($($name:ident: $ty:ty),* $(,)?) => {
            $(
                #[test]
                fn $name() {
                    let m = Matrix::<$ty, _>::new(StaticShape2::<5, 7>);
                    assert_eq!(m.element_count(), 35);
                    assert_eq!(m.data().len(), 35);
                    assert!(m.iter().all(|v| *v == <$ty>::default()));
                    assert_eq!(
                        std::mem::size_of::<Matrix<$ty, StaticShape2<5, 7>>>(),
                        35 * std::mem::size_of::<$ty>()
                    );
                }
            )*
        };
    }

    static_capacity_tests! {
        static_capacity_i32: i32,
        static_capacity_u8: u8,
        static_capacity_u32: u32,
        static_capacity_f32: f32,
        static_capacity_f64: f64,
        static_capacity_rgba: Rgba,
    }

    #[test]
    fn dynamic_matrix_starts_at_default() {
        let m = Matrix::<f32, _>::new(DynShape2::new(5, 2));
        assert_eq!(m.element_count(), 10);
        assert!(m.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn indexing_is_row_major() {
        let mut m = Matrix::<u32, _>::new(DynShape2::new(2, 3));
        for (i, v) in m.iter_mut().enumerate() {
            *v = i as u32;
        }
        assert_eq!(m[[1, 2]], 5);
        assert_eq!(*m.at([1, 0]).unwrap(), 3);
        m[[0, 1]] = 42;
        assert_eq!(m.data()[1], 42);
        assert_eq!(m.row(1).unwrap(), &[3, 4, 5]);
    }

    #[test]
    fn at_reports_out_of_range() {
        let m = Matrix::<u8, _>::new(StaticShape2::<2, 2>);
        assert_eq!(
            m.at([0, 2]),
            Err(ShapeError::OutOfRange {
                axis: 1,
                index: 2,
                extent: 2
            })
        );
        assert!(m.row(2).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_panics_out_of_range() {
        let m = Matrix::<f64, _>::new(DynShape2::new(3, 3));
        let _ = m[[3, 0]];
    }

    #[test]
    fn one_dimensional_arrays() {
        let mut a = NdArray::<i32, _>::new(StaticShape1::<4>);
        a[2] = -1;
        assert_eq!(a.data(), &[0, 0, -1, 0]);
        assert_eq!(a.length(), 4);
        assert_eq!(a.to_descriptive_string(), "1-D array");

        let b = NdArray::<i32, _>::from_elem(DynShape1::new(3), 7);
        assert_eq!(b.iter().rev().copied().collect::<Vec<_>>(), vec![7, 7, 7]);
    }

    #[test]
    fn labels_and_copies() {
        let img = Image::from_elem(DynShape2::new(2, 2), Rgba::WHITE);
        let copy = img.clone();
        assert_eq!(img.type_name(), copy.type_name());
        assert_eq!(img, copy);
        assert_eq!(img.to_string(), "2-D array of rgba");
    }
}
