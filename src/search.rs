use crate::{
    collect::Removal,
    generate::{FullGenerate, Generate},
    prove::Prove,
    random,
    shrink::{FullShrink, Shrink},
    state::{Shrinks, State},
    MAX_SIZE, SHRINKS,
};
use core::{error, fmt};
use tracing::{debug, trace, warn};

/// Bounds the growth of the example size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sizes {
    /// Size of the first trial. A value of `0` is treated as `1`.
    ///
    /// Defaults to `1`.
    pub start: usize,
    /// Largest size that will be tried; the search is exhausted as soon as the
    /// size exceeds it.
    ///
    /// Defaults to [`MAX_SIZE`].
    pub limit: usize,
}

/// The [`Falsifier`] holds a generator and a shrinker for the same type along
/// with the configuration of the search and shrinking processes.
#[derive(Clone, Debug)]
pub struct Falsifier<G, S> {
    pub generator: G,
    pub shrinker: S,
    /// Seed for the random source shared by generation and shrinking.
    ///
    /// Defaults to a random value.
    pub seed: u64,
    pub sizes: Sizes,
    /// Maximum number of hypothesis evaluations spent on shrinking.
    ///
    /// Defaults to [`SHRINKS`].
    pub shrinks: usize,
    /// How sequence shrinkers pick the element to remove.
    ///
    /// Defaults to [`Removal::Random`].
    pub removal: Removal,
}

/// The falsifier of the type registered through [`FullGenerate`] and
/// [`FullShrink`].
pub type Full<T> = Falsifier<<T as FullGenerate>::Generator, <T as FullShrink>::Shrinker>;

/// The search state machine; the example size is its only moving part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Search<T> {
    /// The next trial will generate an example of this size.
    Searching(usize),
    /// An example of this size falsified the hypothesis.
    Found(usize, T),
    /// The size grew past the limit without finding a counterexample.
    Exhausted(usize),
}

/// A minimized counterexample along with how it was found.
#[derive(Clone, Debug)]
pub struct Counterexample<T> {
    original: T,
    shrunk: T,
    size: usize,
    seed: u64,
    shrinks: Shrinks,
    truncated: bool,
}

impl Default for Sizes {
    fn default() -> Self {
        Self {
            start: 1,
            limit: MAX_SIZE,
        }
    }
}

impl<G, S> Falsifier<G, S> {
    pub fn new(generator: G, shrinker: S) -> Self {
        Self {
            generator,
            shrinker,
            seed: random::seed(),
            sizes: Sizes::default(),
            shrinks: SHRINKS,
            removal: Removal::default(),
        }
    }
}

impl<G: Generate, S: Shrink<Item = G::Item>> Falsifier<G, S>
where
    G::Item: Clone,
{
    /// Searches for an example that falsifies `hypothesis` and shrinks it.
    ///
    /// Returns `None` when every size up to [`Sizes::limit`] was tried without
    /// falsifying `hypothesis`.
    pub fn falsify<P: Prove, H: FnMut(&G::Item) -> P>(
        &self,
        mut hypothesis: H,
    ) -> Option<Counterexample<G::Item>> {
        let mut state = State::new(self.seed, self.shrinks);
        state.remove(self.removal);
        let mut search = Search::Searching(self.sizes.start.max(1));
        let (size, original) = loop {
            search = match search.next(
                &self.generator,
                self.sizes.limit,
                &mut hypothesis,
                &mut state,
            ) {
                Search::Found(size, item) => break (size, item),
                Search::Exhausted(size) => {
                    debug!(size, seed = self.seed, "no counterexample found");
                    return None;
                }
                searching => searching,
            };
        };

        debug!(size, seed = self.seed, "found counterexample");
        let shrunk = self
            .shrinker
            .shrink(original.clone(), &mut hypothesis, &mut state);
        let shrinks = state.shrinks();
        if state.truncated() {
            warn!(
                limit = shrinks.limit,
                "shrink budget exhausted; keeping the last known counterexample"
            );
        }
        debug!(
            accept = shrinks.accept,
            reject = shrinks.reject,
            "shrunk counterexample"
        );
        Some(Counterexample {
            original,
            shrunk,
            size,
            seed: self.seed,
            shrinks,
            truncated: state.truncated(),
        })
    }
}

impl<T> Search<T> {
    /// Runs one trial if still searching; any other state is returned as is.
    pub fn next<G: Generate<Item = T>, P: Prove, H: FnMut(&T) -> P>(
        self,
        generator: &G,
        limit: usize,
        hypothesis: &mut H,
        state: &mut State,
    ) -> Self {
        match self {
            Search::Searching(size) if size > limit => Search::Exhausted(size),
            Search::Searching(size) => {
                let item = generator.generate(state.resize(size));
                if hypothesis(&item).holds() {
                    trace!(size, "hypothesis held");
                    size.checked_mul(2)
                        .map_or(Search::Exhausted(size), Search::Searching)
                } else {
                    Search::Found(size, item)
                }
            }
            done => done,
        }
    }
}

impl<T> Counterexample<T> {
    /// The example as first generated.
    pub const fn original(&self) -> &T {
        &self.original
    }

    /// The minimized example.
    pub const fn shrunk(&self) -> &T {
        &self.shrunk
    }

    pub fn into_shrunk(self) -> T {
        self.shrunk
    }

    /// The size at which the original example was generated.
    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    pub const fn shrinks(&self) -> Shrinks {
        self.shrinks
    }

    /// Whether shrinking stopped because it ran out of budget rather than
    /// because it reached a local minimum.
    pub const fn exhausted(&self) -> bool {
        self.truncated
    }

    pub fn map<U, F: FnMut(T) -> U>(self, mut map: F) -> Counterexample<U> {
        Counterexample {
            original: map(self.original),
            shrunk: map(self.shrunk),
            size: self.size,
            seed: self.seed,
            shrinks: self.shrinks,
            truncated: self.truncated,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Counterexample<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "falsified by {:?} (original: {:?}, size: {}, seed: {}, shrinks: {}/{}",
            self.shrunk,
            self.original,
            self.size,
            self.seed,
            self.shrinks.accept,
            self.shrinks.spent(),
        )?;
        if self.truncated {
            f.write_str(", shrink budget exhausted")?;
        }
        f.write_str(")")
    }
}

impl<T: fmt::Debug> error::Error for Counterexample<T> {}

/// Creates a [`Falsifier`] for a registered type with the default
/// configuration.
pub fn falsifier<T: FullGenerate + FullShrink<Item = <T as FullGenerate>::Item>>() -> Full<T> {
    Falsifier::new(
        <T as FullGenerate>::generator(),
        <T as FullShrink>::shrinker(),
    )
}

/// Searches for a minimal counterexample to `hypothesis` among values of `T`.
///
/// ```
/// let shrunk = falsify::falsify::<i64>(|value: &i64| value.abs() < 10);
/// assert!(matches!(shrunk, Some(10) | Some(-10)));
/// ```
pub fn falsify<T>(
    hypothesis: impl FnMut(&<T as FullGenerate>::Item) -> bool,
) -> Option<<T as FullGenerate>::Item>
where
    T: FullGenerate + FullShrink<Item = <T as FullGenerate>::Item>,
    <T as FullGenerate>::Item: Clone,
{
    falsifier::<T>()
        .falsify(hypothesis)
        .map(Counterexample::into_shrunk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Integer;

    #[test]
    fn search_doubles_size_while_hypothesis_holds() {
        let mut state = State::new(0, 0);
        let mut hypothesis = |_: &i64| true;
        let mut search = Search::Searching(1);
        let mut sizes = Vec::new();
        while let Search::Searching(size) = search {
            sizes.push(size);
            search = search.next(&Integer, MAX_SIZE, &mut hypothesis, &mut state);
        }
        assert_eq!(sizes, [1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1_024, 2_048]);
        assert_eq!(search, Search::Exhausted(2_048));
    }

    #[test]
    fn search_stops_on_first_falsifying_example() {
        let mut state = State::new(0, 0);
        let search =
            Search::Searching(4).next(&Integer, MAX_SIZE, &mut |_: &i64| false, &mut state);
        assert!(matches!(search, Search::Found(4, value) if value.abs() < 4));
    }

    #[test]
    fn search_terminal_states_are_fixed_points() {
        let mut state = State::new(0, 0);
        let mut hypothesis = |_: &i64| false;
        assert_eq!(
            Search::Exhausted(8).next(&Integer, MAX_SIZE, &mut hypothesis, &mut state),
            Search::Exhausted(8)
        );
        assert_eq!(
            Search::Found(8, 3).next(&Integer, MAX_SIZE, &mut hypothesis, &mut state),
            Search::Found(8, 3)
        );
    }

    #[test]
    fn search_exhausts_instead_of_overflowing() {
        let mut state = State::new(0, 0);
        let search = Search::Searching(usize::MAX).next(
            &Integer,
            usize::MAX,
            &mut |_: &i64| true,
            &mut state,
        );
        assert_eq!(search, Search::Exhausted(usize::MAX));
    }

    #[test]
    fn falsify_size_zero_starts_at_one() {
        let mut falsifier = falsifier::<i64>();
        falsifier.sizes.start = 0;
        falsifier.seed = 5;
        assert!(falsifier.falsify(|_: &i64| true).is_none());
    }

    #[test]
    fn falsify_reports_counterexample() {
        let mut falsifier = falsifier::<i64>();
        falsifier.seed = 13;
        let counterexample = falsifier.falsify(|value: &i64| value.abs() < 10).unwrap();
        assert_eq!(counterexample.shrunk().abs(), 10);
        assert!(counterexample.original().abs() >= 10);
        assert!(counterexample.size() > 10);
        assert_eq!(counterexample.seed(), 13);
        assert!(!counterexample.exhausted());
    }

    #[test]
    fn falsify_reports_truncated_shrinking() {
        let mut falsifier = falsifier::<i64>();
        falsifier.seed = 13;
        falsifier.shrinks = 0;
        let counterexample = falsifier.falsify(|value: &i64| value.abs() < 10).unwrap();
        assert_eq!(counterexample.shrunk(), counterexample.original());
        assert!(counterexample.exhausted());
        assert!(counterexample.to_string().contains("shrink budget exhausted"));
    }

    #[test]
    fn falsify_same_seed_same_counterexample() {
        let mut falsifier = falsifier::<Vec<i64>>();
        falsifier.seed = 99;
        let hypothesis = |items: &Vec<i64>| items.len() < 5;
        let left = falsifier.falsify(hypothesis).unwrap();
        let right = falsifier.falsify(hypothesis).unwrap();
        assert_eq!(left.original(), right.original());
        assert_eq!(left.shrunk(), right.shrunk());
    }
}
