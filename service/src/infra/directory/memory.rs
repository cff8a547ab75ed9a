//! In-memory [`Directory`] implementation.

use std::{io, sync::Arc};

use common::operations::Search;
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;
use tracing as log;

use crate::domain::{
    search::{FreeText, Prefix, Results},
    User,
};

use super::{Directory, Error as DirectoryError};

/// [`Directory`] keeping all its [`User`]s in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemory {
    /// [`User`]s of this [`InMemory`] directory, in their listing order.
    users: Arc<[User]>,
}

impl InMemory {
    /// Creates a new [`InMemory`] directory of the provided [`User`]s.
    #[must_use]
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().collect(),
        }
    }

    /// Loads a new [`InMemory`] directory from a JSON array of [`User`]s.
    ///
    /// # Errors
    ///
    /// If the `reader` fails or doesn't contain a valid JSON array of
    /// [`User`]s.
    pub fn from_json(reader: impl io::Read) -> Result<Self, Traced<Error>> {
        let users: Vec<User> = serde_json::from_reader(io::BufReader::new(
            reader,
        ))
        .map_err(tracerr::from_and_wrap!(=> Error))?;
        log::debug!("loaded {} users into `InMemory` directory", users.len());
        Ok(Self::new(users))
    }

    /// Returns the number of [`User`]s in this [`InMemory`] directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Indicates whether this [`InMemory`] directory has no [`User`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Collects the [`User`]s satisfying the `predicate`.
    fn collect(&self, predicate: impl Fn(&User) -> bool) -> Results {
        self.users
            .iter()
            .filter(|&u| predicate(u))
            .cloned()
            .collect::<Vec<_>>()
            .into()
    }
}

impl Directory<Search<FreeText>> for InMemory {
    type Ok = Results;
    type Err = Traced<DirectoryError>;

    async fn execute(
        &self,
        Search(query): Search<FreeText>,
    ) -> Result<Self::Ok, Self::Err> {
        let FreeText { text, mode } = query;
        let words = text.split_whitespace().collect::<Vec<_>>();

        // Every word should be found either in the targeted name or in the
        // displayed one. No words match everyone.
        Ok(self.collect(|user| {
            words.iter().all(|word| {
                user.name_by(mode).contains_ignore_case(word)
                    || user.display_name.contains_ignore_case(word)
            })
        }))
    }
}

impl Directory<Search<Prefix>> for InMemory {
    type Ok = Results;
    type Err = Traced<DirectoryError>;

    async fn execute(
        &self,
        Search(query): Search<Prefix>,
    ) -> Result<Self::Ok, Self::Err> {
        let Prefix { prefix, mode } = query;
        Ok(self.collect(|user| {
            user.name_by(mode).starts_with_ignore_case(&prefix)
        }))
    }
}

/// Error of loading an [`InMemory`] directory.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Source couldn't be read or parsed.
    #[display("failed to load users: {_0}")]
    Json(serde_json::Error),
}

#[cfg(test)]
mod spec {
    use common::{operations::Search, Handler as _};

    use crate::domain::{
        search::{FreeText, Prefix},
        Letter, SearchMode,
    };

    use super::InMemory;

    fn directory() -> InMemory {
        InMemory::from_json(
            r#"[
                {"PreferredName": "Anna Berg", "FirstName": "Anna", "LastName": "Berg"},
                {"PreferredName": "Bob Adams", "FirstName": "Bob", "LastName": "Adams"},
                {"PreferredName": "Jane Doe", "FirstName": "Jane", "LastName": "Doe"},
                {"PreferredName": "Jane Brown", "FirstName": "Jane", "LastName": "brown"}
            ]"#
            .as_bytes(),
        )
        .unwrap()
    }

    fn names(users: Option<Vec<crate::domain::User>>) -> Vec<String> {
        users
            .unwrap_or_default()
            .into_iter()
            .map(|u| u.display_name.to_string())
            .collect()
    }

    #[tokio::test]
    async fn browses_by_prefix_ignoring_case() {
        let directory = directory();
        assert_eq!(directory.len(), 4);

        let res = directory
            .execute(Search(Prefix::letter(Letter::B, SearchMode::ByLastName)))
            .await
            .unwrap();
        assert_eq!(names(res.primary), ["Anna Berg", "Jane Brown"]);

        let res = directory
            .execute(Search(Prefix::initial(SearchMode::ByFirstName)))
            .await
            .unwrap();
        assert_eq!(names(res.primary), ["Anna Berg"]);
    }

    #[tokio::test]
    async fn searches_free_text() {
        let directory = directory();

        let res = directory
            .execute(Search(FreeText {
                text: "jane".into(),
                mode: SearchMode::ByFirstName,
            }))
            .await
            .unwrap();
        assert_eq!(names(res.primary), ["Jane Doe", "Jane Brown"]);

        let res = directory
            .execute(Search(FreeText {
                text: "jane  DOE".into(),
                mode: SearchMode::ByLastName,
            }))
            .await
            .unwrap();
        assert_eq!(names(res.primary), ["Jane Doe"]);

        let res = directory
            .execute(Search(FreeText {
                text: "  ".into(),
                mode: SearchMode::ByLastName,
            }))
            .await
            .unwrap();
        assert_eq!(names(res.primary).len(), 4);
    }

    #[test]
    fn rejects_malformed_source() {
        assert!(InMemory::from_json("{}".as_bytes()).is_err());
        assert!(InMemory::from_json("[]".as_bytes()).unwrap().is_empty());
    }
}
