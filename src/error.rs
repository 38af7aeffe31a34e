use thiserror::Error;

/// Reasons a name could not be decomposed.
///
/// Only the strict entry points surface these; the lenient ones turn any
/// error into `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The input was empty, or contained nothing but whitespace.
    #[error("name to parse not provided")]
    InvalidInput,

    /// The name body (after nickname, suffix and title removal) had more
    /// commas than the "last, first" form allows.
    #[error("too many commas ({commas}) to decipher {residue:?}")]
    AmbiguousStructure {
        /// How many commas were found.
        commas: usize,
        /// The residue that was being split.
        residue: String,
    },
}

/// Result type alias for strict parsing.
pub type Result<T> = std::result::Result<T, NameError>;
