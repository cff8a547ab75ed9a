//! [`Query`] definition.

use common::operations::Search;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        search::{FreeText, Prefix, Results},
        Criteria,
    },
    infra::{directory, Directory},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

impl<D> Query<Search<Criteria>> for Service<D>
where
    D: Directory<
            Search<FreeText>,
            Ok = Results,
            Err = Traced<directory::Error>,
        > + Directory<
            Search<Prefix>,
            Ok = Results,
            Err = Traced<directory::Error>,
        >,
{
    type Ok = Results;
    type Err = Traced<directory::Error>;

    async fn execute(
        &self,
        Search(criteria): Search<Criteria>,
    ) -> Result<Self::Ok, Self::Err> {
        log::debug!("looking up users by `{criteria}`");

        let results = match criteria {
            Criteria::FreeText(q) => self.directory().execute(Search(q)).await,
            Criteria::Prefix(q) => self.directory().execute(Search(q)).await,
        }
        .map_err(tracerr::wrap!())?;

        log::debug!(
            "found {} users",
            results.primary.as_ref().map_or(0, Vec::len),
        );
        Ok(results)
    }
}
