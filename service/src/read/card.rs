//! [`Card`] read model definition.

use crate::domain::{user, User};

/// Card presenting a single [`User`] in the directory.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Card<'u> {
    /// Name to display on this [`Card`].
    pub display_name: &'u user::Name,

    /// Job title of the [`User`].
    pub title: Option<&'u str>,

    /// URL of the [`User`]'s picture.
    pub picture_url: Option<&'u str>,

    /// [`user::Email`] of the [`User`].
    pub email: Option<&'u user::Email>,

    /// Department of the [`User`].
    pub department: Option<&'u str>,

    /// [`user::Phone`] of the [`User`].
    pub phone: Option<&'u user::Phone>,

    /// Where the [`User`] can be found.
    pub location: Option<&'u str>,
}

impl<'u> From<&'u User> for Card<'u> {
    fn from(user: &'u User) -> Self {
        Self {
            display_name: &user.display_name,
            title: user.title.as_deref(),
            picture_url: user.picture_url.as_deref(),
            email: user.email.as_ref(),
            department: user.department.as_deref(),
            phone: user.phone.as_ref(),
            location: user.location(),
        }
    }
}
