use crate::{
    generate::{FullGenerate, Generate},
    primitive::Integer,
    prove::Prove,
    shrink::{FullShrink, Shrink},
    state::State,
};
use core::{fmt, str::FromStr};
use tracing::trace;

/// Generates sequences whose length and elements are both bounded by
/// [`State::size`].
#[derive(Clone, Debug, Default)]
pub struct Collect<G> {
    inner: G,
}

/// Shrinks sequences by alternating between removing an element and stepping
/// every element with the inner shrinker.
///
/// The element to remove is picked according to [`State::removal`].
#[derive(Clone, Debug, Default)]
pub struct Shrinker<S> {
    inner: S,
}

/// How the length phase of [`Shrinker`] picks the element to remove.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Removal {
    /// Removes an element at a uniformly random index. Shrinking stops at the
    /// first candidate on which the hypothesis holds.
    #[default]
    Random,
    /// Removes the last element. Shrinking stops at the first candidate on
    /// which the hypothesis holds.
    Last,
    /// Tries every removal in order and accepts the first that still
    /// falsifies; a phase that finds nothing hands over to the other phase and
    /// shrinking stops once both phases find nothing in a row.
    ///
    /// The result is a sequence from which no single element can be removed
    /// while still falsifying the hypothesis.
    Sweep,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Length,
    Elements,
}

impl<G> Collect<G> {
    pub const fn new(inner: G) -> Self {
        Self { inner }
    }
}

impl<S> Shrinker<S> {
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl Phase {
    const fn flip(self) -> Self {
        match self {
            Phase::Length => Phase::Elements,
            Phase::Elements => Phase::Length,
        }
    }
}

impl<G: Generate> Generate for Collect<G> {
    type Item = Vec<G::Item>;

    fn generate(&self, state: &mut State) -> Self::Item {
        let length = Integer.generate(state).unsigned_abs();
        let length = usize::try_from(length).unwrap_or(usize::MAX);
        (0..length).map(|_| self.inner.generate(state)).collect()
    }
}

impl<S: Shrink<Item: Clone + PartialEq>> Shrinker<S> {
    fn elements(&self, items: &[S::Item]) -> Vec<S::Item> {
        items.iter().map(|item| self.inner.step(item)).collect()
    }

    fn alternate<P: Prove, H: FnMut(&Vec<S::Item>) -> P>(
        &self,
        mut known: Vec<S::Item>,
        mut hypothesis: H,
        state: &mut State,
    ) -> Vec<S::Item> {
        let mut phase = Phase::Length;
        loop {
            if known.is_empty() {
                break known;
            }
            let next = match phase {
                Phase::Length => {
                    let index = match state.removal() {
                        Removal::Last => known.len() - 1,
                        _ => state.random().usize(0..known.len()),
                    };
                    let mut next = known.clone();
                    next.remove(index);
                    next
                }
                Phase::Elements => self.elements(&known),
            };
            match state.falsifies(&mut hypothesis, &next) {
                Some(true) => {
                    trace!(?phase, length = next.len(), "sequence shrink accepted");
                    known = next;
                    phase = phase.flip();
                }
                Some(false) | None => break known,
            }
        }
    }

    fn sweep<P: Prove, H: FnMut(&Vec<S::Item>) -> P>(
        &self,
        mut known: Vec<S::Item>,
        mut hypothesis: H,
        state: &mut State,
    ) -> Vec<S::Item> {
        let mut phase = Phase::Length;
        let mut stalled = false;
        loop {
            if known.is_empty() {
                break known;
            }
            let found = match phase {
                Phase::Length => {
                    let mut found = None;
                    for index in 0..known.len() {
                        let mut next = known.clone();
                        next.remove(index);
                        match state.falsifies(&mut hypothesis, &next) {
                            Some(true) => {
                                found = Some(next);
                                break;
                            }
                            Some(false) => {}
                            None => return known,
                        }
                    }
                    found
                }
                Phase::Elements => {
                    let next = self.elements(&known);
                    if next == known {
                        None
                    } else {
                        match state.falsifies(&mut hypothesis, &next) {
                            Some(true) => Some(next),
                            Some(false) => None,
                            None => return known,
                        }
                    }
                }
            };
            match found {
                Some(next) => {
                    trace!(?phase, length = next.len(), "sequence shrink accepted");
                    known = next;
                    stalled = false;
                }
                None if stalled => break known,
                None => stalled = true,
            }
            phase = phase.flip();
        }
    }
}

impl<S: Shrink<Item: Clone + PartialEq>> Shrink for Shrinker<S> {
    type Item = Vec<S::Item>;

    /// Steps every element once with the inner shrinker.
    fn step(&self, item: &Self::Item) -> Self::Item {
        self.elements(item)
    }

    fn shrink<P: Prove, H: FnMut(&Self::Item) -> P>(
        &self,
        counterexample: Self::Item,
        hypothesis: H,
        state: &mut State,
    ) -> Self::Item {
        match state.removal() {
            Removal::Random | Removal::Last => self.alternate(counterexample, hypothesis, state),
            Removal::Sweep => self.sweep(counterexample, hypothesis, state),
        }
    }
}

impl<T: FullGenerate> FullGenerate for Vec<T> {
    type Item = Vec<T::Item>;
    type Generator = Collect<T::Generator>;

    fn generator() -> Self::Generator {
        Collect::new(T::generator())
    }
}

impl<T: FullShrink<Item: Clone + PartialEq>> FullShrink for Vec<T> {
    type Item = Vec<T::Item>;
    type Shrinker = Shrinker<T::Shrinker>;

    fn shrinker() -> Self::Shrinker {
        Shrinker::new(T::shrinker())
    }
}

impl Removal {
    const NAMES: [(&'static str, Removal); 3] = [
        ("random", Removal::Random),
        ("last", Removal::Last),
        ("sweep", Removal::Sweep),
    ];
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, removal) in Self::NAMES {
            if removal == *self {
                return f.write_str(name);
            }
        }
        Ok(())
    }
}

impl FromStr for Removal {
    type Err = crate::error::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value.trim()))
            .map(|(_, removal)| removal)
            .ok_or_else(|| crate::error::Error::Removal {
                value: value.into(),
            })
    }
}
