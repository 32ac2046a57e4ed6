#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A range was requested with an argument list that was not 1 to 3 long.
    #[error("Invalid number of arguments: expected 1 to 3, got {0}.")]
    InvalidArgumentCount(usize),

    #[error("Range step must be nonzero.")]
    ZeroStep,
}

pub type Result<T> = std::result::Result<T, Error>;
