//! [`Directory`] replying with scripted outcomes, recording every lookup.

use std::{cell::RefCell, collections::VecDeque, rc::Rc, time::Duration};

use common::operations::Search;
use tracerr::Traced;

use crate::domain::{
    search::{FreeText, Prefix, Results},
    Criteria, User,
};

use super::{Directory, Error};

/// Scripted reply of a [`Scripted`] directory.
#[derive(Clone, Debug)]
pub(crate) struct Reply {
    /// Time the lookup takes.
    delay: Duration,

    /// Outcome of the lookup.
    outcome: Result<Results, Error>,
}

impl Reply {
    /// Successful [`Reply`] with the provided [`User`]s.
    pub(crate) fn users(users: Vec<User>) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Ok(users.into()),
        }
    }

    /// Successful [`Reply`] without primary results.
    pub(crate) fn nothing() -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Ok(Results::default()),
        }
    }

    /// Failed [`Reply`] with the provided `message`.
    pub(crate) fn fail(message: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Err(Error::rejected(message)),
        }
    }

    /// Failed [`Reply`] of an unreachable backend.
    pub(crate) fn unreachable(message: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Err(Error::Unavailable(message.to_owned())),
        }
    }

    /// Delays this [`Reply`] by the given `delay`.
    pub(crate) fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// [`Directory`] replying in the order lookups are issued.
///
/// Lookups beyond the script succeed with no [`User`]s.
#[derive(Clone, Debug, Default)]
pub(crate) struct Scripted {
    /// [`Criteria`] of every issued lookup.
    calls: Rc<RefCell<Vec<Criteria>>>,

    /// [`Reply`]s yet to be given.
    replies: Rc<RefCell<VecDeque<Reply>>>,
}

impl Scripted {
    /// Appends the provided [`Reply`] to the script.
    pub(crate) fn reply(&self, reply: Reply) {
        self.replies.borrow_mut().push_back(reply);
    }

    /// Returns [`Criteria`] of all the lookups issued so far.
    pub(crate) fn calls(&self) -> Vec<Criteria> {
        self.calls.borrow().clone()
    }

    /// Records the lookup and gives the next scripted [`Reply`].
    async fn respond(
        &self,
        criteria: Criteria,
    ) -> Result<Results, Traced<Error>> {
        self.calls.borrow_mut().push(criteria);
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Reply::users(vec![]));

        tokio::time::sleep(reply.delay).await;
        reply.outcome.map_err(|e| tracerr::new!(e))
    }
}

impl Directory<Search<FreeText>> for Scripted {
    type Ok = Results;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Search(query): Search<FreeText>,
    ) -> Result<Self::Ok, Self::Err> {
        self.respond(query.into()).await
    }
}

impl Directory<Search<Prefix>> for Scripted {
    type Ok = Results;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Search(query): Search<Prefix>,
    ) -> Result<Self::Ok, Self::Err> {
        self.respond(query.into()).await
    }
}
