//! [`View`] read model definition.

use common::PageNumber;

use crate::{
    domain::{IndexKey, Letter},
    machine::State,
};

use super::Card;

/// Everything needed to present the directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct View<'s> {
    /// [`Card`]s of the users on the current page.
    pub visible_window: Vec<Card<'s>>,

    /// Indicator whether a lookup is in progress.
    pub is_loading: bool,

    /// Indicator whether the latest lookup failed.
    pub has_error: bool,

    /// Message of the latest lookup failure, if any.
    pub error_message: &'s str,

    /// Text in the search box.
    pub search_text: &'s str,

    /// Currently selected [`IndexKey`].
    pub active_index_key: IndexKey,

    /// [`Letter`]s of the alphabetical index.
    pub alphabet: &'s [Letter],

    /// Currently selected page.
    pub page: PageNumber,

    /// Total number of pages.
    pub page_count: usize,
}

impl<'s> View<'s> {
    /// Returns the [`Card`]s to suggest while the user is typing.
    #[must_use]
    pub fn suggestions(&self) -> &[Card<'s>] {
        if self.search_text.is_empty() {
            &[]
        } else {
            &self.visible_window
        }
    }
}

impl<'s> From<&'s State> for View<'s> {
    fn from(state: &'s State) -> Self {
        Self {
            visible_window: state
                .visible_window()
                .iter()
                .map(Card::from)
                .collect(),
            is_loading: state.is_loading(),
            has_error: state.has_error(),
            error_message: state.error_message(),
            search_text: state.search_text(),
            active_index_key: state.index_key(),
            alphabet: state.alphabet(),
            page: state.paging().page,
            page_count: state.page_count(),
        }
    }
}
