use crate::{
    environment,
    generate::FullGenerate,
    prove::Prove,
    search::{falsifier, Full},
    shrink::FullShrink,
};
use core::fmt;

/// Backend of the `#[property]` attribute.
///
/// Panics with a report of the shrunk counterexample when `hypothesis` is
/// falsified, or with the error when an environment override is malformed.
pub fn default<T, P, U, H>(update: U, hypothesis: H)
where
    T: FullGenerate + FullShrink<Item = <T as FullGenerate>::Item>,
    <T as FullGenerate>::Item: Clone + fmt::Debug,
    P: Prove,
    U: FnOnce(&mut Full<T>),
    H: FnMut(&<T as FullGenerate>::Item) -> P,
{
    let mut falsifier = falsifier::<T>();
    if let Err(error) = environment::update(&mut falsifier) {
        panic!("{error}");
    }
    update(&mut falsifier);
    if let Some(counterexample) = falsifier.falsify(hypothesis) {
        eprintln!();
        eprintln!(
            "\x1b[31mFALSIFY\x1b[0m: {{ item: {:?}, original: {:?}, size: {}, seed: {}, shrinks: {}{} }}",
            counterexample.shrunk(),
            counterexample.original(),
            counterexample.size(),
            counterexample.seed(),
            counterexample.shrinks().accept,
            if counterexample.exhausted() { ", exhausted: true" } else { "" },
        );
        panic!("{counterexample}");
    }
}
