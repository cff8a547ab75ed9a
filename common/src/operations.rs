//! Abstract operations.

/// Operation to search for a value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Search<T>(pub T);

impl<T> Search<T> {
    /// Consumes this [`Search`] and returns the inner value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}
