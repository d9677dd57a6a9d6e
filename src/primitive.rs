use crate::{
    generate::{FullGenerate, Generate},
    prove::Prove,
    shrink::{FullShrink, Shrink},
    state::State,
};
use tracing::trace;

/// Generates and shrinks signed integers.
///
/// Generated magnitudes are drawn uniformly from `0..size` and given a sign by
/// an independent coin flip. This does not cover the integers evenly, which is
/// good enough for a search that favors small values first.
#[derive(Clone, Copy, Debug, Default)]
pub struct Integer;

/// Moves `value` one unit closer to `0`; `0` is the fixed point.
#[inline]
pub const fn move_toward_zero(value: i64) -> i64 {
    if value == 0 {
        0
    } else if value < 0 {
        value + 1
    } else {
        value - 1
    }
}

impl Generate for Integer {
    type Item = i64;

    fn generate(&self, state: &mut State) -> Self::Item {
        let size = state.size();
        if size == 0 {
            return 0;
        }
        let random = state.random();
        let magnitude = i64::try_from(random.usize(0..size)).unwrap_or(i64::MAX);
        if random.bool() {
            magnitude
        } else {
            -magnitude
        }
    }
}

impl Shrink for Integer {
    type Item = i64;

    #[inline]
    fn step(&self, item: &Self::Item) -> Self::Item {
        move_toward_zero(*item)
    }

    fn shrink<P: Prove, H: FnMut(&Self::Item) -> P>(
        &self,
        counterexample: Self::Item,
        mut hypothesis: H,
        state: &mut State,
    ) -> Self::Item {
        let mut known = counterexample;
        loop {
            let next = self.step(&known);
            if next == known {
                break known;
            }
            match state.falsifies(&mut hypothesis, &next) {
                Some(true) => {
                    trace!(known, next, "integer shrink accepted");
                    known = next;
                }
                Some(false) | None => break known,
            }
        }
    }
}

impl FullGenerate for i64 {
    type Item = i64;
    type Generator = Integer;

    fn generator() -> Self::Generator {
        Integer
    }
}

impl FullShrink for i64 {
    type Item = i64;
    type Shrinker = Integer;

    fn shrinker() -> Self::Shrinker {
        Integer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_toward_zero_reduces_magnitude() {
        assert_eq!(move_toward_zero(0), 0);
        assert_eq!(move_toward_zero(1), 0);
        assert_eq!(move_toward_zero(-1), 0);
        assert_eq!(move_toward_zero(42), 41);
        assert_eq!(move_toward_zero(-42), -41);
        assert_eq!(move_toward_zero(i64::MIN), i64::MIN + 1);
    }

    #[test]
    fn generate_is_bounded_by_size() {
        let mut state = State::new(5, 0);
        for size in [1usize, 2, 3, 16, 1_024] {
            state.resize(size);
            for _ in 0..1_000 {
                let value = Integer.generate(&mut state);
                assert!(value.unsigned_abs() < size as u64);
            }
        }
    }

    #[test]
    fn generate_size_zero_is_zero() {
        let mut state = State::new(5, 0);
        state.resize(0);
        for _ in 0..100 {
            assert_eq!(Integer.generate(&mut state), 0);
        }
    }

    #[test]
    fn generate_size_one_is_zero() {
        let mut state = State::new(9, 0);
        state.resize(1);
        for _ in 0..100 {
            assert_eq!(Integer.generate(&mut state), 0);
        }
    }

    #[test]
    fn generate_produces_both_signs() {
        let mut state = State::new(11, 0);
        state.resize(1_000);
        let values = (0..1_000)
            .map(|_| Integer.generate(&mut state))
            .collect::<Vec<_>>();
        assert!(values.iter().any(|&value| value > 0));
        assert!(values.iter().any(|&value| value < 0));
    }

    #[test]
    fn shrink_stops_before_first_passing_step() {
        let mut state = State::new(0, usize::MAX);
        assert_eq!(Integer.shrink(500, |&value: &i64| value < 10, &mut state), 10);
        assert_eq!(Integer.shrink(-500, |&value: &i64| value > -10, &mut state), -10);
    }

    #[test]
    fn shrink_reaches_zero_when_zero_falsifies() {
        let mut state = State::new(0, usize::MAX);
        assert_eq!(Integer.shrink(37, |_: &i64| false, &mut state), 0);
        assert_eq!(Integer.shrink(0, |_: &i64| false, &mut state), 0);
    }

    #[test]
    fn shrink_respects_limit() {
        let mut state = State::new(0, 3);
        assert_eq!(Integer.shrink(100, |&value: &i64| value.abs() < 5, &mut state), 97);
        assert!(state.shrinks().exhausted());
    }

    #[test]
    fn shrink_is_idempotent() {
        let hypothesis = |&value: &i64| value % 7 != 0 || value == 0;
        let mut state = State::new(0, usize::MAX);
        let shrunk = Integer.shrink(700, hypothesis, &mut state);
        assert_eq!(shrunk, 700);
        assert_eq!(Integer.shrink(shrunk, hypothesis, &mut state), shrunk);
    }
}
