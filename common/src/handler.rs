//! [`Handler`] abstractions.

use std::future::Future;

/// Asynchronous operation executed with the provided `Args`.
///
/// Ports, queries and the directory backends are all expressed as
/// [`Handler`]s, so a single type may handle many distinct operations.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
