use core::ops::RangeBounds;
use fastrand::Rng;

/// A seedable source of randomness shared by the generators and the shrinkers
/// of a single search.
#[derive(Debug, Clone)]
pub struct Random(Rng);

impl Random {
    /// Creates a source from `seed`, or from a fresh seed when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        Self(seed.map_or_else(Rng::new, Rng::with_seed))
    }
}

/// Draws a fresh seed from the thread-local generator.
pub fn seed() -> u64 {
    fastrand::u64(..)
}

macro_rules! bridge {
    ($type:ident) => {
        impl Random {
            pub fn $type(&mut self) -> $type {
                self.0.$type()
            }
        }
    };
    ($($type:ident),*) => {$(bridge!($type);)*}
}

macro_rules! range {
    ($type:ident) => {
        impl Random {
            /// Panics if `range` is empty.
            pub fn $type<R: RangeBounds<$type>>(&mut self, range: R) -> $type {
                self.0.$type(range)
            }
        }
    };
    ($($type:ident),*) => {$(range!($type);)*}
}

bridge!(bool);
range!(usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut left = Random::new(Some(17));
        let mut right = Random::new(Some(17));
        for _ in 0..100 {
            assert_eq!(left.usize(0..1_000), right.usize(0..1_000));
            assert_eq!(left.bool(), right.bool());
        }
    }

    #[test]
    fn usize_stays_in_range() {
        let mut random = Random::new(Some(3));
        for _ in 0..1_000 {
            assert!(random.usize(0..7) < 7);
        }
    }
}
