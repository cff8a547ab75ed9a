//! [`Widget`] running the directory [`State`] machine.

use std::mem;

use common::{operations::Search, PageNumber, PageSize};
use derive_more::Debug;
use futures::{
    future::LocalBoxFuture,
    stream::{FuturesUnordered, StreamExt as _},
    FutureExt as _,
};
use tracerr::Traced;
use tracing as log;

use crate::{
    debounce::Debouncer,
    domain::{search::Results, Criteria, IndexKey},
    infra::directory,
    machine::{Effect, Event, Request, Resolution, State},
    read::View,
    Query, Service,
};

/// Directory widget: owns the [`State`] and runs the [`Effect`]s its
/// transitions request.
///
/// Everything runs on the current task. Lookups are never cancelled, so
/// several of them may be in flight at once, resolving in any order.
#[derive(Debug)]
pub struct Widget<D> {
    /// [`Service`] performing lookups.
    service: Service<D>,

    /// Current [`State`].
    state: State,

    /// [`Debouncer`] of the search box input.
    debouncer: Debouncer<String>,

    /// Lookups in flight.
    #[debug(skip)]
    in_flight: FuturesUnordered<LocalBoxFuture<'static, Resolution>>,
}

impl<D> Widget<D>
where
    Service<D>: Query<
            Search<Criteria>,
            Ok = Results,
            Err = Traced<directory::Error>,
        > + Clone
        + 'static,
{
    /// Creates a new unmounted [`Widget`] performing lookups via the
    /// provided [`Service`].
    #[must_use]
    pub fn new(service: Service<D>) -> Self {
        let config = *service.config();
        Self {
            state: State::new(config.search_mode, config.page_size),
            debouncer: Debouncer::new(config.debounce),
            in_flight: FuturesUnordered::new(),
            service,
        }
    }

    /// Opens the directory, browsing the users on the first letter.
    pub fn mount(&mut self) {
        self.dispatch(Event::Mounted);
    }

    /// Handles a keystroke in the search box.
    pub fn on_search_text_change(&mut self, text: impl Into<String>) {
        self.dispatch(Event::SearchTextChanged(text.into()));
    }

    /// Searches for the `text` right away, dropping any debounced search.
    pub fn on_search_submit(&mut self, text: impl Into<String>) {
        if let Some(superseded) = self.debouncer.cancel() {
            log::trace!("debounced search of `{superseded}` is superseded");
        }
        self.dispatch(Event::SearchRequested(text.into()));
    }

    /// Selects the [`IndexKey`] in the alphabetical index.
    pub fn on_alphabet_select(&mut self, key: impl Into<IndexKey>) {
        self.dispatch(Event::IndexKeySelected(key.into()));
    }

    /// Selects the page to show.
    pub fn on_page_change(&mut self, page: PageNumber) {
        self.dispatch(Event::PageSelected(page));
    }

    /// Changes the [`PageSize`], [`None`] meaning the default one.
    pub fn set_page_size(&mut self, size: Option<PageSize>) {
        self.dispatch(Event::PageSizeChanged(size));
    }

    /// Returns the current [`State`].
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Returns the [`View`] of the current [`State`].
    #[must_use]
    pub fn view(&self) -> View<'_> {
        View::from(&self.state)
    }

    /// Indicates whether neither a debounced search nor a lookup is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.debouncer.is_pending() && self.in_flight.is_empty()
    }

    /// Waits for the next debounced search or lookup resolution, and
    /// applies it.
    ///
    /// Never resolves while [`Widget::is_idle()`]. Cancel safe.
    pub async fn tick(&mut self) {
        let event = tokio::select! {
            biased;

            Some(resolution) = self.in_flight.next(),
                if !self.in_flight.is_empty() =>
            {
                if !self.state.is_latest(resolution.generation) {
                    log::debug!(
                        "discarding stale lookup #{}",
                        resolution.generation,
                    );
                }
                Event::Resolved(resolution)
            }
            text = self.debouncer.elapsed() => Event::SearchRequested(text),
        };
        self.dispatch(event);
    }

    /// Runs until no debounced search or lookup is pending.
    pub async fn settle(&mut self) {
        while !self.is_idle() {
            self.tick().await;
        }
    }

    /// Applies the [`Event`] and runs the requested [`Effect`].
    fn dispatch(&mut self, event: Event) {
        log::trace!("dispatching {event:?}");

        let (state, effect) = mem::take(&mut self.state).dispatch(event);
        self.state = state;

        match effect {
            Some(Effect::Debounce(text)) => self.debouncer.schedule(text),
            Some(Effect::Lookup(req)) => self.lookup(req),
            None => {}
        }
    }

    /// Issues the lookup described by the [`Request`].
    fn lookup(&self, req: Request) {
        let Request {
            generation,
            origin,
            criteria,
        } = req;
        log::debug!("issuing lookup #{generation} by `{criteria}`");

        let service = self.service.clone();
        self.in_flight.push(
            async move {
                let outcome = service
                    .execute(Search(criteria))
                    .await
                    .map_err(|e| {
                        log::warn!("lookup #{generation} failed: {e}");
                        AsRef::<directory::Error>::as_ref(&e).to_string()
                    });
                Resolution {
                    generation,
                    origin,
                    outcome,
                }
            }
            .boxed_local(),
        );
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::{PageNumber, PageSize};
    use tokio::time;

    use crate::{
        domain::{search::Prefix, Criteria, IndexKey, Letter, SearchMode, User},
        infra::directory::scripted::{Reply, Scripted},
        Config, Service,
    };

    use super::Widget;

    fn user(name: &str) -> User {
        User {
            display_name: name.into(),
            first_name: name.into(),
            last_name: name.into(),
            title: Some("Engineer".into()),
            picture_url: None,
            email: None,
            department: None,
            phone: None,
            office_number: None,
            base_office_location: Some("HQ".into()),
        }
    }

    fn users(names: &[&str]) -> Vec<User> {
        names.iter().map(|n| user(n)).collect()
    }

    fn widget(directory: &Scripted, page_size: usize) -> Widget<Scripted> {
        Widget::new(Service::new(
            Config {
                search_mode: SearchMode::ByLastName,
                page_size: PageSize::new(page_size).unwrap(),
                debounce: Duration::from_millis(500),
            },
            directory.clone(),
        ))
    }

    fn visible(widget: &Widget<Scripted>) -> Vec<String> {
        widget
            .view()
            .visible_window
            .iter()
            .map(|c| c.display_name.to_string())
            .collect()
    }

    fn searches(directory: &Scripted) -> Vec<String> {
        directory
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                Criteria::FreeText(q) => Some(q.text),
                Criteria::Prefix(_) => None,
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn mount_pages_initial_browsing() {
        let directory = Scripted::default();
        directory.reply(Reply::users(users(&["Adams", "Allen", "Avery"])));
        let mut widget = widget(&directory, 2);

        widget.mount();
        assert!(widget.view().is_loading);
        widget.settle().await;

        assert_eq!(
            directory.calls(),
            [Criteria::Prefix(Prefix::initial(SearchMode::ByLastName))],
        );
        let view = widget.view();
        assert!(!view.is_loading);
        assert_eq!(view.active_index_key, IndexKey::INITIAL);
        assert_eq!(view.alphabet.len(), 26);
        assert_eq!(view.page_count, 2);
        assert_eq!(view.visible_window[0].location, Some("HQ"));
        assert!(view.suggestions().is_empty());
        assert_eq!(visible(&widget), ["Adams", "Allen"]);
        drop(view);

        widget.on_page_change(PageNumber::new(2).unwrap());
        assert_eq!(visible(&widget), ["Avery"]);
        assert!(widget.is_idle());
    }

    #[tokio::test(start_paused = true)]
    async fn typing_searches_latest_text_once() {
        let directory = Scripted::default();
        directory.reply(Reply::nothing());
        directory.reply(Reply::users(users(&["Jane"])));
        let mut widget = widget(&directory, 10);
        widget.mount();
        widget.settle().await;

        for text in ["J", "Ja", "Jan", "Jane"] {
            widget.on_search_text_change(text);
            time::advance(Duration::from_millis(100)).await;
        }
        assert!(searches(&directory).is_empty());
        assert_eq!(widget.view().search_text, "Jane");

        widget.settle().await;

        assert_eq!(searches(&directory), ["Jane"]);
        let view = widget.view();
        assert_eq!(view.active_index_key, IndexKey::FreeText);
        assert_eq!(view.page, PageNumber::FIRST);
        assert_eq!(view.suggestions().len(), 1);
        assert_eq!(visible(&widget), ["Jane"]);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_supersedes_debounced_search() {
        let directory = Scripted::default();
        let mut widget = widget(&directory, 10);
        widget.mount();
        widget.settle().await;

        widget.on_search_text_change("Ja");
        widget.on_search_submit("Jane");
        widget.settle().await;

        assert_eq!(searches(&directory), ["Jane"]);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_search_keeps_users() {
        let directory = Scripted::default();
        directory.reply(Reply::users(users(&["Adams", "Allen"])));
        directory.reply(Reply::fail("timeout"));
        let mut widget = widget(&directory, 10);
        widget.mount();
        widget.settle().await;

        widget.on_search_submit("Jane");
        widget.settle().await;

        let view = widget.view();
        assert!(view.has_error);
        assert!(!view.is_loading);
        assert_eq!(view.error_message, "timeout");
        assert_eq!(visible(&widget), ["Adams", "Allen"]);
    }

    #[tokio::test(start_paused = true)]
    async fn unreachable_backend_fails_browsing() {
        let directory = Scripted::default();
        directory.reply(Reply::users(users(&["Adams"])));
        directory.reply(
            Reply::unreachable("connection refused")
                .after(Duration::from_millis(50)),
        );
        let mut widget = widget(&directory, 10);
        widget.mount();
        widget.settle().await;

        widget.on_alphabet_select(Letter::B);
        assert!(widget.view().is_loading);
        widget.settle().await;

        let view = widget.view();
        assert!(view.has_error);
        assert!(!view.is_loading);
        assert_eq!(view.error_message, "connection refused");
        assert_eq!(view.active_index_key, IndexKey::Letter(Letter::B));
        assert_eq!(visible(&widget), ["Adams"]);
    }

    #[tokio::test(start_paused = true)]
    async fn letter_change_browses_once() {
        let directory = Scripted::default();
        let mut widget = widget(&directory, 10);
        widget.mount();
        widget.settle().await;

        widget.on_alphabet_select(Letter::C);
        widget.on_alphabet_select(Letter::C);
        widget.settle().await;
        widget.on_alphabet_select(IndexKey::FreeText);
        widget.on_alphabet_select(IndexKey::None);
        widget.settle().await;

        assert_eq!(
            directory.calls(),
            [
                Criteria::Prefix(Prefix::initial(SearchMode::ByLastName)),
                Criteria::Prefix(Prefix::letter(
                    Letter::C,
                    SearchMode::ByLastName,
                )),
            ],
        );
    }

    #[tokio::test(start_paused = true)]
    async fn stale_lookup_never_overwrites_newer() {
        let directory = Scripted::default();
        directory.reply(Reply::nothing());
        directory.reply(
            Reply::users(users(&["Cid"])).after(Duration::from_millis(300)),
        );
        directory.reply(Reply::users(users(&["Jane"])));
        let mut widget = widget(&directory, 10);
        widget.mount();
        widget.settle().await;

        widget.on_alphabet_select(Letter::C);
        widget.on_search_submit("Jane");
        widget.tick().await;
        assert_eq!(visible(&widget), ["Jane"]);
        assert!(!widget.is_idle());

        widget.settle().await;
        assert_eq!(visible(&widget), ["Jane"]);
        assert_eq!(widget.view().active_index_key, IndexKey::FreeText);
    }

    #[tokio::test(start_paused = true)]
    async fn page_size_changes_window() {
        let directory = Scripted::default();
        directory.reply(Reply::users(users(&["a", "b", "c"])));
        let mut widget = widget(&directory, 1);
        widget.mount();
        widget.settle().await;
        assert_eq!(visible(&widget), ["a"]);

        widget.set_page_size(PageSize::new(2));
        assert_eq!(visible(&widget), ["a", "b"]);

        widget.set_page_size(None);
        assert_eq!(visible(&widget), ["a", "b", "c"]);
    }
}
