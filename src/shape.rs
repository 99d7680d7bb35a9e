//! Shape descriptors and the storage they select.
//!
//! A shape is either *static* (extents are const generics, the type is
//! zero-sized) or *dynamic* (extents are runtime fields). Every shape names the
//! buffer it needs through [`Shape::Buffer`], so picking inline or heap storage
//! happens in the type system:
//!
//! | shape               | buffer                     |
//! |---------------------|----------------------------|
//! | `StaticShape1<N>`   | `InlineStorage<T, 1, N>`   |
//! | `StaticShape2<R, C>`| `InlineStorage<T, R, C>`   |
//! | `DynShape1`         | `HeapStorage<T>`           |
//! | `DynShape2`         | `HeapStorage<T>`           |

use crate::element::Element;
use crate::error::ShapeError;
use crate::storage::{HeapStorage, InlineStorage, Storage};
use std::fmt::Debug;

/// Read-only query surface shared by static and dynamic shapes.
pub trait Shape: Copy + Debug + PartialEq {
    /// Number of axes, fixed per shape kind.
    const DIMS: usize;

    /// Coordinates accepted by [`Shape::linear_index`]; its arity is `DIMS`.
    type Index: Copy + Debug;

    /// Backing buffer used for elements of type `T`.
    type Buffer<T: Element>: Storage<T>;

    fn element_count(&self) -> usize;

    /// Row-major offset of `index`; every coordinate must be below its extent.
    fn linear_index(&self, index: Self::Index) -> Result<usize, ShapeError>;

    /// Allocate a default-initialised buffer of `element_count()` elements.
    fn allocate<T: Element>(&self) -> Self::Buffer<T>;

    fn dims(&self) -> usize {
        Self::DIMS
    }
}

/// One-dimensional shapes.
pub trait Shape1: Shape<Index = usize> {
    fn length(&self) -> usize;
}

/// Two-dimensional shapes.
pub trait Shape2: Shape<Index = [usize; 2]> {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
}

/// Buffer type a shape selects for `T`.
pub type BufferOf<S, T> = <S as Shape>::Buffer<T>;

#[inline]
fn check(axis: usize, index: usize, extent: usize) -> Result<usize, ShapeError> {
    if index < extent {
        Ok(index)
    } else {
        Err(ShapeError::OutOfRange {
            axis,
            index,
            extent,
        })
    }
}

#[inline]
fn row_major(rows: usize, cols: usize, [r, c]: [usize; 2]) -> Result<usize, ShapeError> {
    let r = check(0, r, rows)?;
    let c = check(1, c, cols)?;
    Ok(r * cols + c)
}

/// 1-D shape with a compile-time length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StaticShape1<const N: usize>;

impl<const N: usize> StaticShape1<N> {
    pub const fn new() -> Self {
        Self
    }
}

impl<const N: usize> Shape for StaticShape1<N> {
    const DIMS: usize = 1;
    type Index = usize;
    type Buffer<T: Element> = InlineStorage<T, 1, N>;

    fn element_count(&self) -> usize {
        N
    }

    fn linear_index(&self, index: usize) -> Result<usize, ShapeError> {
        check(0, index, N)
    }

    fn allocate<T: Element>(&self) -> Self::Buffer<T> {
        InlineStorage::new()
    }
}

impl<const N: usize> Shape1 for StaticShape1<N> {
    fn length(&self) -> usize {
        N
    }
}

/// 2-D shape with compile-time rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StaticShape2<const R: usize, const C: usize>;

impl<const R: usize, const C: usize> StaticShape2<R, C> {
    pub const fn new() -> Self {
        Self
    }
}

impl<const R: usize, const C: usize> Shape for StaticShape2<R, C> {
    const DIMS: usize = 2;
    type Index = [usize; 2];
    type Buffer<T: Element> = InlineStorage<T, R, C>;

    fn element_count(&self) -> usize {
        R * C
    }

    fn linear_index(&self, index: [usize; 2]) -> Result<usize, ShapeError> {
        row_major(R, C, index)
    }

    fn allocate<T: Element>(&self) -> Self::Buffer<T> {
        InlineStorage::new()
    }
}

impl<const R: usize, const C: usize> Shape2 for StaticShape2<R, C> {
    fn rows(&self) -> usize {
        R
    }

    fn cols(&self) -> usize {
        C
    }
}

/// 1-D shape with a runtime length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DynShape1 {
    len: usize,
}

impl DynShape1 {
    pub const fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Shape for DynShape1 {
    const DIMS: usize = 1;
    type Index = usize;
    type Buffer<T: Element> = HeapStorage<T>;

    fn element_count(&self) -> usize {
        self.len
    }

    fn linear_index(&self, index: usize) -> Result<usize, ShapeError> {
        check(0, index, self.len)
    }

    fn allocate<T: Element>(&self) -> Self::Buffer<T> {
        HeapStorage::new(self.len)
    }
}

impl Shape1 for DynShape1 {
    fn length(&self) -> usize {
        self.len
    }
}

/// 2-D shape with runtime rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DynShape2 {
    rows: usize,
    cols: usize,
}

impl DynShape2 {
    /// Panics if `rows * cols` overflows `usize`; see [`DynShape2::try_new`].
    #[track_caller]
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(shape) => shape,
            Err(e) => panic!("{e}"),
        }
    }

    /// Shape with `rows * cols` elements, or `TooLarge` if that product overflows.
    pub const fn try_new(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        match rows.checked_mul(cols) {
            Some(_) => Ok(Self { rows, cols }),
            None => Err(ShapeError::TooLarge { rows, cols }),
        }
    }
}

impl Shape for DynShape2 {
    const DIMS: usize = 2;
    type Index = [usize; 2];
    type Buffer<T: Element> = HeapStorage<T>;

    fn element_count(&self) -> usize {
        self.rows * self.cols
    }

    fn linear_index(&self, index: [usize; 2]) -> Result<usize, ShapeError> {
        row_major(self.rows, self.cols, index)
    }

    fn allocate<T: Element>(&self) -> Self::Buffer<T> {
        HeapStorage::new(self.element_count())
    }
}

impl Shape2 for DynShape2 {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dims_are_fixed_per_kind() {
        assert_eq!(StaticShape1::<4>.dims(), 1);
        assert_eq!(DynShape1::new(4).dims(), 1);
        assert_eq!(StaticShape2::<2, 3>.dims(), 2);
        assert_eq!(DynShape2::new(2, 3).dims(), 2);
    }

    #[test]
    fn row_major_linear_index() {
        let s = DynShape2::new(3, 5);
        assert_eq!(s.linear_index([0, 0]), Ok(0));
        assert_eq!(s.linear_index([1, 0]), Ok(5));
        assert_eq!(s.linear_index([2, 4]), Ok(14));
        assert_eq!(
            StaticShape2::<3, 5>.linear_index([2, 4]),
            s.linear_index([2, 4])
        );
    }

    #[test]
    fn extent_is_out_of_range() {
        let s = StaticShape2::<2, 3>;
        assert_eq!(
            s.linear_index([2, 0]),
            Err(ShapeError::OutOfRange {
                axis: 0,
                index: 2,
                extent: 2
            })
        );
        assert_eq!(
            DynShape2::new(2, 3).linear_index([0, 3]),
            Err(ShapeError::OutOfRange {
                axis: 1,
                index: 3,
                extent: 3
            })
        );
        assert!(DynShape1::new(0).linear_index(0).is_err());
        assert!(StaticShape1::<3>.linear_index(3).is_err());
    }

    #[test]
    fn dynamic_extents_must_fit_in_usize() {
        let rows = usize::MAX / 2 + 1;
        assert_eq!(
            DynShape2::try_new(rows, 2),
            Err(ShapeError::TooLarge { rows, cols: 2 })
        );
        assert_eq!(DynShape2::try_new(usize::MAX, 1).map(|s| s.element_count()), Ok(usize::MAX));
        assert_eq!(DynShape2::try_new(usize::MAX, 0).map(|s| s.element_count()), Ok(0));
    }

    #[test]
    #[should_panic(expected = "exceeds usize")]
    fn new_panics_on_overflowing_extents() {
        let _ = DynShape2::new(usize::MAX / 2 + 1, 2);
    }

    #[test]
    fn allocate_matches_element_count() {
        assert_eq!(DynShape2::new(4, 7).allocate::<f32>().len(), 28);
        assert_eq!(StaticShape2::<4, 7>.allocate::<u8>().len(), 28);
        assert_eq!(StaticShape1::<9>.allocate::<i32>().len(), 9);
    }
}
