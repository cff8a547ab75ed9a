//! Client-side pagination over an already fetched list.

use std::num::NonZeroUsize;

use derive_more::{Display, Error, Into};

/// Number of items shown on a single page.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Into, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "usize", into = "usize")
)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// [`PageSize`] used when none is configured.
    pub const DEFAULT: Self = Self(NonZeroUsize::MIN.saturating_add(9));

    /// Creates a new [`PageSize`] if the given `size` is positive.
    #[must_use]
    pub const fn new(size: usize) -> Option<Self> {
        match NonZeroUsize::new(size) {
            Some(size) => Some(Self(size)),
            None => None,
        }
    }

    /// Returns this [`PageSize`] as a plain number.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ZeroError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size).ok_or(ZeroError)
    }
}

/// One-based number of a page.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Into, Ord, PartialEq, PartialOrd)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Creates a new [`PageNumber`] if the given `number` is positive.
    #[must_use]
    pub const fn new(number: usize) -> Option<Self> {
        match NonZeroUsize::new(number) {
            Some(number) => Some(Self(number)),
            None => None,
        }
    }

    /// Returns this [`PageNumber`] as a plain number.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<PageNumber> for usize {
    fn from(number: PageNumber) -> Self {
        number.get()
    }
}

impl TryFrom<usize> for PageNumber {
    type Error = ZeroError;

    fn try_from(number: usize) -> Result<Self, Self::Error> {
        Self::new(number).ok_or(ZeroError)
    }
}

/// Error of constructing a [`PageSize`] or a [`PageNumber`] out of zero.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("page size and page number must be positive")]
pub struct ZeroError;

/// Returns the items of the `page` when split into pages of `size`.
///
/// Pages past the end of `items` are empty.
#[must_use]
pub fn window<T>(items: &[T], size: PageSize, page: PageNumber) -> &[T] {
    let start = (page.get() - 1).saturating_mul(size.get());
    let end = page.get().saturating_mul(size.get()).min(items.len());
    items.get(start..end).unwrap_or_default()
}

/// Current pagination position.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Paging {
    /// Number of items per page.
    pub size: PageSize,

    /// Currently selected page.
    pub page: PageNumber,
}

impl Paging {
    /// Creates a new [`Paging`] positioned at the first page.
    #[must_use]
    pub const fn new(size: PageSize) -> Self {
        Self {
            size,
            page: PageNumber::FIRST,
        }
    }

    /// Returns the visible part of `items` for this [`Paging`].
    #[must_use]
    pub fn window<'i, T>(&self, items: &'i [T]) -> &'i [T] {
        window(items, self.size, self.page)
    }

    /// Returns the number of pages needed to show `len` items.
    #[must_use]
    pub const fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.size.get())
    }
}
