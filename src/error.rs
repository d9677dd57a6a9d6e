use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unsupported type tag '{tag}'\nmust be one of [integer, sequence-of-integer]")]
    Unsupported { tag: String },
    #[error("invalid removal strategy '{value}'\nmust be one of [random, last, sweep]")]
    Removal { value: String },
    #[error("invalid value '{value}' for environment variable '{key}'")]
    Environment { key: &'static str, value: String },
}
