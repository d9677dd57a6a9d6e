//! A dynamically typed entry point for callers that pick the example type at
//! runtime.
//!
//! ```
//! use falsify::example::{self, Example, Type};
//!
//! let tag: Type = "sequence-of-integer".parse()?;
//! let counterexample = example::falsify(tag, |example| match example {
//!     Example::Sequence(items) => items.iter().eq(items.iter().rev()),
//!     Example::Integer(_) => true,
//! });
//! assert!(counterexample.is_some());
//! # Ok::<(), falsify::Error>(())
//! ```

use crate::{
    error::Error,
    search::{falsifier, Counterexample, Falsifier},
};
use core::{fmt, str::FromStr};

/// The supported example types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Integer,
    SequenceOfInteger,
}

/// A generated value of one of the supported [`Type`]s.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Example {
    Integer(i64),
    Sequence(Vec<i64>),
}

impl Type {
    const NAMES: [(&'static str, Type); 2] = [
        ("integer", Type::Integer),
        ("sequence-of-integer", Type::SequenceOfInteger),
    ];

    /// Falsifies `hypothesis` with the configuration of `update` applied.
    ///
    /// Only the configuration fields of the falsifier are carried over; the
    /// generator and shrinker are the ones registered for this type.
    pub fn falsify_with<U, H>(self, update: U, mut hypothesis: H) -> Option<Counterexample<Example>>
    where
        U: FnOnce(&mut Falsifier<(), ()>),
        H: FnMut(&Example) -> bool,
    {
        let mut settings = Falsifier::new((), ());
        update(&mut settings);
        match self {
            Type::Integer => configure(falsifier::<i64>(), &settings)
                .falsify(|&value: &i64| hypothesis(&Example::Integer(value)))
                .map(|counterexample| counterexample.map(Example::Integer)),
            Type::SequenceOfInteger => configure(falsifier::<Vec<i64>>(), &settings)
                .falsify(|items: &Vec<i64>| hypothesis(&Example::Sequence(items.clone())))
                .map(|counterexample| counterexample.map(Example::Sequence)),
        }
    }
}

/// Searches for a minimal example of type `tag` that falsifies `hypothesis`.
///
/// Returns `None` when no counterexample was found within the size limit.
pub fn falsify<H: FnMut(&Example) -> bool>(tag: Type, hypothesis: H) -> Option<Example> {
    tag.falsify_with(|_| {}, hypothesis).map(Counterexample::into_shrunk)
}

fn configure<G, S>(
    mut falsifier: Falsifier<G, S>,
    settings: &Falsifier<(), ()>,
) -> Falsifier<G, S> {
    falsifier.seed = settings.seed;
    falsifier.sizes = settings.sizes;
    falsifier.shrinks = settings.shrinks;
    falsifier.removal = settings.removal;
    falsifier
}

impl Example {
    pub const fn kind(&self) -> Type {
        match self {
            Example::Integer(_) => Type::Integer,
            Example::Sequence(_) => Type::SequenceOfInteger,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Integer => f.write_str("integer"),
            Type::SequenceOfInteger => f.write_str("sequence-of-integer"),
        }
    }
}

impl FromStr for Type {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value.trim()))
            .map(|(_, tag)| tag)
            .ok_or_else(|| Error::Unsupported { tag: value.into() })
    }
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Example::Integer(value) => write!(f, "{value}"),
            Example::Sequence(items) => write!(f, "{items:?}"),
        }
    }
}

impl From<i64> for Example {
    fn from(value: i64) -> Self {
        Example::Integer(value)
    }
}

impl From<Vec<i64>> for Example {
    fn from(items: Vec<i64>) -> Self {
        Example::Sequence(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::Removal;

    #[test]
    fn type_parses_names() {
        assert_eq!("integer".parse(), Ok(Type::Integer));
        assert_eq!("Sequence-Of-Integer".parse(), Ok(Type::SequenceOfInteger));
        for tag in [Type::Integer, Type::SequenceOfInteger] {
            assert_eq!(tag.to_string().parse(), Ok(tag));
        }
    }

    #[test]
    fn type_rejects_unsupported_tag() {
        assert_eq!(
            "float".parse::<Type>(),
            Err(Error::Unsupported { tag: "float".into() })
        );
    }

    #[test]
    fn falsify_dispatches_on_tag() {
        let integer = Type::Integer.falsify_with(
            |settings| settings.seed = 3,
            |example| matches!(example, Example::Integer(value) if value.abs() < 10),
        );
        assert!(matches!(
            integer.map(Counterexample::into_shrunk),
            Some(Example::Integer(10 | -10))
        ));

        let sequence = Type::SequenceOfInteger.falsify_with(
            |settings| {
                settings.seed = 3;
                settings.removal = Removal::Sweep;
            },
            |example| matches!(example, Example::Sequence(items) if items.len() < 2),
        );
        assert_eq!(
            sequence.map(Counterexample::into_shrunk),
            Some(Example::Sequence(vec![0, 0]))
        );
    }

    #[test]
    fn falsify_tautology_is_none() {
        assert_eq!(falsify(Type::Integer, |_| true), None);
        assert_eq!(falsify(Type::SequenceOfInteger, |_| true), None);
    }

    #[test]
    fn example_kind_matches_variant() {
        assert_eq!(Example::from(3).kind(), Type::Integer);
        assert_eq!(Example::from(vec![1, 2]).kind(), Type::SequenceOfInteger);
        assert_eq!(Example::from(vec![1, 2]).to_string(), "[1, 2]");
    }
}
