//! Backing buffers for arrays.
//!
//! Two strategies sit behind [`Storage`]: [`InlineStorage`] keeps a fixed
//! `R x C` block inline (used by static shapes) and [`HeapStorage`] owns a
//! boxed slice sized once at construction (used by dynamic shapes). Neither
//! can grow or shrink after it is built.

use crate::element::Element;

/// Contiguous, fixed-length element buffer.
pub trait Storage<T: Element>: Clone + std::fmt::Debug {
    /// Whole buffer in storage order.
    fn as_slice(&self) -> &[T];

    fn as_mut_slice(&mut self) -> &mut [T];

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Inline `R x C` block; row-major, no heap allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineStorage<T: Element, const R: usize, const C: usize>(pub [[T; C]; R]);

impl<T: Element, const R: usize, const C: usize> InlineStorage<T, R, C> {
    pub const CAPACITY: usize = R * C;

    /// Every slot set to `T::default()`.
    pub fn new() -> Self {
        Self([[T::default(); C]; R])
    }
}

impl<T: Element, const R: usize, const C: usize> Default for InlineStorage<T, R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, const R: usize, const C: usize> Storage<T> for InlineStorage<T, R, C> {
    fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    fn len(&self) -> usize {
        Self::CAPACITY
    }
}

/// Heap buffer allocated once with a runtime element count.
#[derive(Debug, Clone, PartialEq)]
pub struct HeapStorage<T: Element>(Box<[T]>);

impl<T: Element> HeapStorage<T> {
    /// `count` slots set to `T::default()`.
    pub fn new(count: usize) -> Self {
        Self(vec![T::default(); count].into_boxed_slice())
    }
}

impl<T: Element> Storage<T> for HeapStorage<T> {
    fn as_slice(&self) -> &[T] {
        &self.0
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_storage_is_exactly_r_times_c() {
        let s = InlineStorage::<f64, 3, 4>::new();
        assert_eq!(s.len(), 12);
        assert_eq!(s.as_slice().len(), 12);
        assert_eq!(
            std::mem::size_of::<InlineStorage<f64, 3, 4>>(),
            12 * std::mem::size_of::<f64>()
        );
    }

    #[test]
    fn inline_storage_is_row_major() {
        let mut s = InlineStorage::<u8, 2, 3>::new();
        s.0[1][0] = 7;
        assert_eq!(s.as_slice()[3], 7);
        s.as_mut_slice()[5] = 9;
        assert_eq!(s.0[1][2], 9);
    }

    #[test]
    fn heap_storage_starts_at_default() {
        let s = HeapStorage::<i32>::new(5);
        assert_eq!(s.as_slice(), &[0; 5]);
        assert!(HeapStorage::<u32>::new(0).is_empty());
    }
}
