//! Service contains the employee directory logic: looking users up, browsing
//! them alphabetically and paging through the results.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod debounce;
pub mod domain;
pub mod infra;
pub mod machine;
pub mod query;
pub mod read;
pub mod widget;

use std::time::Duration;

use common::PageSize;
use smart_default::SmartDefault;

use self::{debounce::Debouncer, domain::SearchMode};

pub use self::{query::Query, widget::Widget};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Name field the lookups target.
    pub search_mode: SearchMode,

    /// Number of users shown on a single page.
    pub page_size: PageSize,

    /// Quiescence window after the last keystroke before searching.
    #[default(Debouncer::<String>::DEFAULT_WINDOW)]
    pub debounce: Duration,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<D> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Directory`] of this [`Service`].
    ///
    /// [`Directory`]: infra::Directory
    directory: D,
}

impl<D> Service<D> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub const fn new(config: Config, directory: D) -> Self {
        Self { config, directory }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Directory`] of this [`Service`].
    ///
    /// [`Directory`]: infra::Directory
    #[must_use]
    pub const fn directory(&self) -> &D {
        &self.directory
    }
}
