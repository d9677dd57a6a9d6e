use crate::state::State;

/// Produces random examples bounded by [`State::size`].
pub trait Generate {
    type Item;

    fn generate(&self, state: &mut State) -> Self::Item;
}

/// Provides the default generator for a type.
///
/// Together with [`crate::shrink::FullShrink`], this is the registry that the
/// search driver relies on: a type that implements both can be falsified with
/// [`crate::falsify()`] without naming its generator or shrinker.
pub trait FullGenerate {
    type Item;
    type Generator: Generate<Item = Self::Item>;

    fn generator() -> Self::Generator;
}

impl<G: Generate + ?Sized> Generate for &G {
    type Item = G::Item;

    fn generate(&self, state: &mut State) -> Self::Item {
        G::generate(self, state)
    }
}

impl<G: Generate + ?Sized> Generate for Box<G> {
    type Item = G::Item;

    fn generate(&self, state: &mut State) -> Self::Item {
        G::generate(self, state)
    }
}
