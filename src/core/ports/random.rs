//! Random source port
//!
//! Question selection only ever needs "a uniform index below n".

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// A uniformly distributed value in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}
