use crate::{collect::Removal, error::Error, search::Falsifier};
use std::{
    env::{self, VarError},
    str::FromStr,
};

pub const SEED: &str = "FALSIFY_SEED";
pub const SIZE: &str = "FALSIFY_SIZE";
pub const SHRINKS: &str = "FALSIFY_SHRINKS";
pub const REMOVAL: &str = "FALSIFY_REMOVAL";

pub fn seed() -> Result<Option<u64>, Error> {
    parse(SEED)
}

pub fn size() -> Result<Option<usize>, Error> {
    parse(SIZE)
}

pub fn shrinks() -> Result<Option<usize>, Error> {
    parse(SHRINKS)
}

pub fn removal() -> Result<Option<Removal>, Error> {
    parse(REMOVAL)
}

/// Overrides the configuration of `falsifier` with the variables that are set.
///
/// Nothing is modified if any variable holds a malformed value.
pub fn update<G, S>(falsifier: &mut Falsifier<G, S>) -> Result<(), Error> {
    let (seed, size, shrinks, removal) = (seed()?, size()?, shrinks()?, removal()?);
    if let Some(value) = seed {
        falsifier.seed = value;
    }
    if let Some(value) = size {
        falsifier.sizes.limit = value;
    }
    if let Some(value) = shrinks {
        falsifier.shrinks = value;
    }
    if let Some(value) = removal {
        falsifier.removal = value;
    }
    Ok(())
}

fn parse<T: FromStr>(key: &'static str) -> Result<Option<T>, Error> {
    match env::var(key) {
        Ok(value) => match value.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(Error::Environment { key, value }),
        },
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(value)) => Err(Error::Environment {
            key,
            value: value.to_string_lossy().into_owned(),
        }),
    }
}
