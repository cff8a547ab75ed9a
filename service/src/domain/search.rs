//! Search criteria of a directory lookup.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

use super::{alphabet::Letter, User};

/// Name field driving both free-text search and alphabetical browsing.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum SearchMode {
    /// Users are matched by their last name.
    #[default]
    #[display("LastName")]
    ByLastName,

    /// Users are matched by their first name.
    #[display("FirstName")]
    ByFirstName,
}

impl SearchMode {
    /// Creates a new [`SearchMode`] out of the `search_first_name` flag.
    #[must_use]
    pub const fn new(search_first_name: bool) -> Self {
        if search_first_name {
            Self::ByFirstName
        } else {
            Self::ByLastName
        }
    }
}

/// Free-text lookup of users.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("{mode}~\"{text}\"")]
pub struct FreeText {
    /// Text as typed by the user.
    pub text: String,

    /// Name field the `text` targets.
    pub mode: SearchMode,
}

/// Lookup of users whose name starts with a prefix.
///
/// Displayed as a keyword query, e.g. `LastName:a*`.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("{mode}:{prefix}*")]
pub struct Prefix {
    /// Prefix the name should start with.
    pub prefix: String,

    /// Name field the `prefix` applies to.
    pub mode: SearchMode,
}

impl Prefix {
    /// Prefix used when the directory is opened.
    pub const INITIAL: &'static str = "a";

    /// Creates a new [`Prefix`] browsing by the given [`Letter`].
    #[must_use]
    pub fn letter(letter: Letter, mode: SearchMode) -> Self {
        Self {
            prefix: letter.to_string(),
            mode,
        }
    }

    /// Creates a new [`Prefix`] used when the directory is opened.
    #[must_use]
    pub fn initial(mode: SearchMode) -> Self {
        Self {
            prefix: Self::INITIAL.to_owned(),
            mode,
        }
    }
}

/// Criteria of a single directory lookup.
#[derive(Clone, Debug, Display, Eq, From, PartialEq)]
pub enum Criteria {
    /// [`FreeText`] search.
    FreeText(FreeText),

    /// [`Prefix`] browsing.
    Prefix(Prefix),
}

/// Results of a directory lookup.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Results {
    /// Main matched set of [`User`]s.
    ///
    /// [`None`] if the backend yielded no primary results at all.
    #[serde(default, rename = "PrimarySearchResults")]
    pub primary: Option<Vec<User>>,
}

impl From<Vec<User>> for Results {
    fn from(users: Vec<User>) -> Self {
        Self {
            primary: Some(users),
        }
    }
}
