use growarray::GrowArrayError;
use thiserror::Error;

/// Errors reported by sequence backends and adapters
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// Failure reported by the growable array layer
    #[error(transparent)]
    Array(#[from] GrowArrayError),
    /// Insert found an existing entry with the same key
    #[error("Key already exists")]
    AlreadyExists,
    /// Lookup or removal found no entry with the given key
    #[error("Key not found")]
    NotFound,
}

pub type Result<T> = core::result::Result<T, Error>;

/// Flat status code shared by every operation of the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    BadAlloc,
    OutOfRange,
    Overflow,
    AlreadyExists,
    NotFound,
    Unknown,
}

impl Status {
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl From<&GrowArrayError> for Status {
    fn from(error: &GrowArrayError) -> Self {
        match error {
            GrowArrayError::BadAlloc { .. } => Status::BadAlloc,
            GrowArrayError::OutOfRange { .. } => Status::OutOfRange,
            GrowArrayError::Overflow { .. } => Status::Overflow,
            GrowArrayError::InvalidConfiguration { .. } => Status::Unknown,
        }
    }
}

impl From<&Error> for Status {
    fn from(error: &Error) -> Self {
        match error {
            Error::Array(error) => Status::from(error),
            Error::AlreadyExists => Status::AlreadyExists,
            Error::NotFound => Status::NotFound,
        }
    }
}

impl<T> From<&Result<T>> for Status {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(error) => Status::from(error),
        }
    }
}
