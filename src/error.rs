use thiserror::Error;

/// Failure taxonomy shared by the validator, the placement checker, the
/// solver, and the request boundary. Every variant is terminal; the
/// `Display` strings are part of the service contract and must not
/// change.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Required field(s) missing")]
    MissingField,
    #[error("Expected puzzle to be 81 characters long")]
    InvalidLength,
    #[error("Invalid characters in puzzle")]
    InvalidCharacters,
    #[error("Invalid coordinate")]
    InvalidCoordinate,
    #[error("Invalid value")]
    InvalidValue,
    #[error("Puzzle cannot be solved")]
    Unsolvable,
}

pub type Result<T> = std::result::Result<T, Error>;
