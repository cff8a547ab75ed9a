//! Directory [`State`] machine.
//!
//! Transitions are pure: [`State::dispatch()`] consumes an [`Event`] and
//! returns the next [`State`] along with an [`Effect`] to be run by the
//! caller. Lookups are never performed here, only described.

use common::{PageNumber, PageSize, Paging};
use derive_more::Display;

use crate::domain::{
    search::{FreeText, Prefix, Results},
    Criteria, IndexKey, Letter, SearchMode, User,
};

/// Sequence number of an issued lookup.
///
/// Only the outcome of the latest issued lookup is ever applied.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
pub struct Generation(u64);

impl Generation {
    /// Returns the [`Generation`] following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Phase of acquiring the users to display.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Phase {
    /// Nothing has been requested yet.
    #[default]
    Idle,

    /// Lookup is in progress.
    Loading,

    /// Latest lookup succeeded.
    Loaded,

    /// Latest lookup failed with the provided message.
    Errored(String),
}

/// What has caused a lookup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Origin {
    /// Free-text search.
    Search,

    /// Alphabetical browsing.
    Browse {
        /// Indicator whether this is the browsing happening on mount.
        initial: bool,
    },
}

/// Lookup to be issued.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    /// [`Generation`] of this [`Request`].
    pub generation: Generation,

    /// [`Origin`] of this [`Request`].
    pub origin: Origin,

    /// [`Criteria`] to look users up by.
    pub criteria: Criteria,
}

/// Outcome of an issued [`Request`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolution {
    /// [`Generation`] of the resolved [`Request`].
    pub generation: Generation,

    /// [`Origin`] of the resolved [`Request`].
    pub origin: Origin,

    /// Found [`Results`], or the failure message.
    pub outcome: Result<Results, String>,
}

/// Event driving the [`State`] machine.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// Directory has been opened.
    Mounted,

    /// Text in the search box has changed.
    SearchTextChanged(String),

    /// Free-text search should be performed right away.
    SearchRequested(String),

    /// [`IndexKey`] has been selected.
    IndexKeySelected(IndexKey),

    /// Page has been selected.
    PageSelected(PageNumber),

    /// [`PageSize`] has been changed, [`None`] meaning the default one.
    PageSizeChanged(Option<PageSize>),

    /// Issued [`Request`] has been resolved.
    Resolved(Resolution),
}

/// Side effect requested by a transition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Effect {
    /// Issue the [`Request`] and dispatch its [`Resolution`] back.
    Lookup(Request),

    /// Dispatch [`Event::SearchRequested`] with this text once typing
    /// settles down.
    Debounce(String),
}

/// State of the directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct State {
    /// Currently matched [`User`]s.
    ///
    /// [`None`] if the backend yielded no primary results.
    users: Option<Vec<User>>,

    /// Current [`Phase`].
    phase: Phase,

    /// Currently selected [`IndexKey`].
    index_key: IndexKey,

    /// Name field the lookups target.
    search_mode: SearchMode,

    /// Text in the search box.
    search_text: String,

    /// [`Letter`]s of the alphabetical index.
    alphabet: Vec<Letter>,

    /// Current [`Paging`].
    paging: Paging,

    /// [`Generation`] of the latest issued [`Request`].
    generation: Generation,
}

impl State {
    /// Creates a new idle [`State`].
    #[must_use]
    pub fn new(search_mode: SearchMode, page_size: PageSize) -> Self {
        Self {
            users: Some(vec![]),
            phase: Phase::Idle,
            index_key: IndexKey::INITIAL,
            search_mode,
            search_text: String::new(),
            alphabet: vec![],
            paging: Paging::new(page_size),
            generation: Generation::default(),
        }
    }

    /// Applies the [`Event`] to this [`State`], returning the next one along
    /// with the [`Effect`] to run.
    #[must_use]
    pub fn dispatch(mut self, event: Event) -> (Self, Option<Effect>) {
        let effect = match event {
            Event::Mounted => {
                self.alphabet = Letter::alphabet();
                self.index_key = IndexKey::INITIAL;
                let prefix = Prefix::initial(self.search_mode);
                Some(self.browse(prefix, true))
            }
            Event::SearchTextChanged(text) => {
                self.paging.page = PageNumber::FIRST;
                self.search_text.clone_from(&text);
                Some(Effect::Debounce(text))
            }
            Event::SearchRequested(text) => Some(self.search(text)),
            Event::IndexKeySelected(key) => self.select(key),
            Event::PageSelected(page) => {
                self.paging.page = page;
                None
            }
            Event::PageSizeChanged(size) => {
                self.paging.size = size.unwrap_or_default();
                None
            }
            Event::Resolved(resolution) => {
                self.resolve(resolution);
                None
            }
        };
        (self, effect)
    }

    /// Starts a free-text search of the `text`.
    fn search(&mut self, text: String) -> Effect {
        let criteria = FreeText {
            text: text.clone(),
            mode: self.search_mode,
        };
        self.search_text = text;
        self.issue(Origin::Search, criteria.into())
    }

    /// Starts browsing by the [`Prefix`].
    fn browse(&mut self, prefix: Prefix, initial: bool) -> Effect {
        self.search_text.clear();
        self.issue(Origin::Browse { initial }, prefix.into())
    }

    /// Selects the [`IndexKey`], browsing by its [`Letter`] if it has
    /// changed.
    fn select(&mut self, key: IndexKey) -> Option<Effect> {
        if key == self.index_key {
            return None;
        }
        self.index_key = key;

        let letter = key.letter()?;
        Some(self.browse(Prefix::letter(letter, self.search_mode), false))
    }

    /// Issues a new [`Request`], superseding any previous one.
    fn issue(&mut self, origin: Origin, criteria: Criteria) -> Effect {
        self.generation = self.generation.next();
        self.phase = Phase::Loading;
        self.paging.page = PageNumber::FIRST;
        Effect::Lookup(Request {
            generation: self.generation,
            origin,
            criteria,
        })
    }

    /// Applies the [`Resolution`], unless it's stale.
    fn resolve(&mut self, resolution: Resolution) {
        let Resolution {
            generation,
            origin,
            outcome,
        } = resolution;
        if !self.is_latest(generation) {
            return;
        }

        match outcome {
            Ok(Results { primary }) => {
                match origin {
                    Origin::Search => {
                        self.users = Some(primary.unwrap_or_default());
                        self.index_key = IndexKey::FreeText;
                    }
                    Origin::Browse { initial } => {
                        self.users = primary;
                        if initial {
                            self.index_key = IndexKey::INITIAL;
                        }
                    }
                }
                self.phase = Phase::Loaded;
            }
            // Keep showing whatever has been found before.
            Err(message) => self.phase = Phase::Errored(message),
        }
    }

    /// Indicates whether the `generation` is the latest issued one.
    #[must_use]
    pub fn is_latest(&self, generation: Generation) -> bool {
        self.generation == generation
    }

    /// Returns the currently matched [`User`]s.
    ///
    /// [`None`] if the backend yielded no primary results.
    #[must_use]
    pub fn users(&self) -> Option<&[User]> {
        self.users.as_deref()
    }

    /// Returns the [`User`]s on the current page.
    #[must_use]
    pub fn visible_window(&self) -> &[User] {
        self.paging.window(self.users().unwrap_or_default())
    }

    /// Returns the number of pages the matched [`User`]s span.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.paging.page_count(self.users().map_or(0, <[_]>::len))
    }

    /// Returns the current [`Phase`].
    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Indicates whether a lookup is in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// Indicates whether the latest lookup failed.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        matches!(self.phase, Phase::Errored(_))
    }

    /// Returns the message of the latest lookup failure, or an empty string.
    #[must_use]
    pub fn error_message(&self) -> &str {
        match &self.phase {
            Phase::Errored(message) => message,
            Phase::Idle | Phase::Loading | Phase::Loaded => "",
        }
    }

    /// Returns the currently selected [`IndexKey`].
    #[must_use]
    pub const fn index_key(&self) -> IndexKey {
        self.index_key
    }

    /// Returns the [`SearchMode`] of lookups.
    #[must_use]
    pub const fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    /// Returns the text in the search box.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Returns the [`Letter`]s of the alphabetical index.
    #[must_use]
    pub fn alphabet(&self) -> &[Letter] {
        &self.alphabet
    }

    /// Returns the current [`Paging`].
    #[must_use]
    pub const fn paging(&self) -> Paging {
        self.paging
    }

    /// Returns the [`Generation`] of the latest issued lookup.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(SearchMode::default(), PageSize::default())
    }
}
