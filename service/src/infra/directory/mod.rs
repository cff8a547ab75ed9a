//! [`Directory`]-related implementations.

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(test)]
pub(crate) mod scripted;

use derive_more::{Display, Error as StdError};

#[cfg(feature = "memory")]
pub use self::memory::InMemory;

/// Directory lookup operation, backed by a search backend.
pub use common::Handler as Directory;

/// [`Directory`] error.
///
/// Displays as a human-readable message only, so it can be shown as is.
#[derive(Clone, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// Backend rejected the lookup.
    #[display("{_0}")]
    Rejected(#[error(not(source))] String),

    /// Backend could not be reached.
    #[display("{_0}")]
    Unavailable(#[error(not(source))] String),
}

impl Error {
    /// Creates a new [`Error::Rejected`] with the provided `message`.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}
