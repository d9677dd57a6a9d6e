use crate::{prove::Prove, state::State};

/// Reduces a counterexample toward a locally minimal one.
pub trait Shrink {
    type Item;

    /// Takes a single step toward the simplest value. The simplest value is a
    /// fixed point of this function.
    fn step(&self, item: &Self::Item) -> Self::Item;

    /// Shrinks `counterexample` for as long as candidates keep falsifying
    /// `hypothesis`.
    ///
    /// `counterexample` must already falsify `hypothesis`; it is returned as
    /// is if no candidate does.
    fn shrink<P: Prove, H: FnMut(&Self::Item) -> P>(
        &self,
        counterexample: Self::Item,
        hypothesis: H,
        state: &mut State,
    ) -> Self::Item;
}

/// Provides the default shrinker for a type.
pub trait FullShrink {
    type Item;
    type Shrinker: Shrink<Item = Self::Item>;

    fn shrinker() -> Self::Shrinker;
}

impl<S: Shrink + ?Sized> Shrink for &S {
    type Item = S::Item;

    fn step(&self, item: &Self::Item) -> Self::Item {
        S::step(self, item)
    }

    fn shrink<P: Prove, H: FnMut(&Self::Item) -> P>(
        &self,
        counterexample: Self::Item,
        hypothesis: H,
        state: &mut State,
    ) -> Self::Item {
        S::shrink(self, counterexample, hypothesis, state)
    }
}
