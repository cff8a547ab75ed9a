//! [`User`] definitions.

use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

use super::search::SearchMode;

/// Directory user, as returned by a search backend.
///
/// Property names follow the backend's user profile schema.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    /// Name of this [`User`] to display.
    #[serde(rename = "PreferredName")]
    pub display_name: Name,

    /// First [`Name`] of this [`User`].
    #[serde(default)]
    pub first_name: Name,

    /// Last [`Name`] of this [`User`].
    #[serde(default)]
    pub last_name: Name,

    /// Job title of this [`User`].
    #[serde(default, rename = "JobTitle")]
    pub title: Option<String>,

    /// URL of this [`User`]'s picture.
    #[serde(default, rename = "PictureURL")]
    pub picture_url: Option<String>,

    /// Work [`Email`] of this [`User`].
    #[serde(default, rename = "WorkEmail")]
    pub email: Option<Email>,

    /// Department this [`User`] belongs to.
    #[serde(default)]
    pub department: Option<String>,

    /// Work [`Phone`] of this [`User`].
    #[serde(default, rename = "WorkPhone")]
    pub phone: Option<Phone>,

    /// Office number of this [`User`].
    #[serde(default)]
    pub office_number: Option<String>,

    /// Location of the office this [`User`] is based in.
    #[serde(default)]
    pub base_office_location: Option<String>,
}

impl User {
    /// Returns the [`Name`] of this [`User`] targeted by the [`SearchMode`].
    #[must_use]
    pub fn name_by(&self, mode: SearchMode) -> &Name {
        match mode {
            SearchMode::ByFirstName => &self.first_name,
            SearchMode::ByLastName => &self.last_name,
        }
    }

    /// Returns where this [`User`] can be found.
    ///
    /// The office number wins over the base office location, unless it's
    /// blank.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.office_number
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.base_office_location.as_deref())
    }
}

/// Name of a [`User`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    PartialEq,
    Serialize,
)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Name(String);

impl Name {
    /// Checks whether this [`Name`] starts with the given `prefix`, ignoring
    /// case.
    #[must_use]
    pub fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        self.0
            .to_lowercase()
            .starts_with(prefix.to_lowercase().as_str())
    }

    /// Checks whether this [`Name`] contains the given `word`, ignoring case.
    #[must_use]
    pub fn contains_ignore_case(&self, word: &str) -> bool {
        self.0.to_lowercase().contains(word.to_lowercase().as_str())
    }
}

/// Email address of a [`User`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, From, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Email(String);

/// Phone number of a [`User`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, From, PartialEq, Serialize,
)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Phone(String);
