#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod collect;
pub mod environment;
pub mod error;
pub mod example;
pub mod generate;
pub mod primitive;
pub mod prove;
pub mod random;
#[doc(hidden)]
pub mod run;
pub mod search;
pub mod shrink;
pub mod state;

pub use crate::{
    collect::{Collect, Removal},
    error::Error,
    example::{Example, Type},
    generate::{FullGenerate, Generate},
    primitive::{move_toward_zero, Integer},
    prove::Prove,
    search::{falsifier, falsify, Counterexample, Falsifier, Full, Search, Sizes},
    shrink::{FullShrink, Shrink},
    state::{Shrinks, State},
};
#[cfg(feature = "property")]
pub use falsify_macro::property;

/// Largest example size tried by default before the search gives up.
pub const MAX_SIZE: usize = 1_024;
/// Default number of hypothesis evaluations allowed while shrinking.
pub const SHRINKS: usize = 1_048_576;
