//! Conditional parallelism over slices of polynomials.
//!
//! With the `parallel` feature, [`MaybeParIter::par_iter`] is Rayon's
//! `par_iter`; without it, the same call site is an ordinary slice iterator.
//! Results are collected in input order either way.
//!
//! Adapted from <https://github.com/0xPolygonZero/plonky2/blob/main/maybe_rayon/src/lib.rs>

#[cfg(feature = "parallel")]
pub use rayon::prelude::ParallelIterator;
#[cfg(feature = "parallel")]
use rayon::prelude::IntoParallelRefIterator;

#[cfg(not(feature = "parallel"))]
use core::slice;

pub trait MaybeParIter<'data> {
    #[cfg(feature = "parallel")]
    type Item: Send + 'data;

    #[cfg(feature = "parallel")]
    type Iter: ParallelIterator<Item = Self::Item>;

    #[cfg(not(feature = "parallel"))]
    type Item;

    #[cfg(not(feature = "parallel"))]
    type Iter: Iterator<Item = Self::Item>;

    fn par_iter(&'data self) -> Self::Iter;
}

#[cfg(feature = "parallel")]
impl<'data, T> MaybeParIter<'data> for T
where
    T: ?Sized + IntoParallelRefIterator<'data>,
{
    type Item = T::Item;
    type Iter = T::Iter;

    fn par_iter(&'data self) -> Self::Iter {
        IntoParallelRefIterator::par_iter(self)
    }
}

#[cfg(not(feature = "parallel"))]
impl<'data, T: 'data> MaybeParIter<'data> for [T] {
    type Item = &'data T;
    type Iter = slice::Iter<'data, T>;

    fn par_iter(&'data self) -> Self::Iter {
        self.iter()
    }
}

/// Sorts `items` in place, in parallel when the feature is enabled.
pub fn sort<T: Ord + Send>(items: &mut [T]) {
    #[cfg(feature = "parallel")]
    rayon::slice::ParallelSliceMut::par_sort(items);

    #[cfg(not(feature = "parallel"))]
    items.sort();
}
