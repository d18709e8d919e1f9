use std::iter::Fuse;
use std::ops::Range;

use itertools::multizip;
use itertools::structs::Zip;

/// Walks several sequences side by side, yielding one flat tuple per position.
///
/// The walk ends as soon as any of the inputs runs out, so its length is the
/// length of the shortest input. Once it has ended it stays ended.
pub type Lockstep<T> = Fuse<Zip<T>>;

/// Starts a lockstep walk over a tuple of iterables.
///
/// ```
/// use backprop_nn::math::lockstep::lockstep;
///
/// let weights = [0.5, -1.0, 2.0];
/// let inputs = vec![4.0, 3.0];
/// let sum: f64 = lockstep((&weights, &inputs)).map(|(w, x)| w * x).sum();
/// assert_eq!(sum, -1.0);
/// ```
pub fn lockstep<T, U>(sources: U) -> Lockstep<T>
where
    Zip<T>: From<U> + Iterator,
{
    multizip(sources).fuse()
}

/// A restartable counter over `0..len`.
///
/// `Span` is `Copy`, so iterating it never consumes the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    len: usize,
}

pub fn span(len: usize) -> Span {
    Span { len }
}

impl Span {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl IntoIterator for Span {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Range<usize> {
        0..self.len
    }
}
