//! Alphabetical index definitions.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use strum::{EnumIter, IntoEnumIterator as _};

/// Letter of the alphabetical index.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumIter,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Letter {
    /// Returns all the [`Letter`]s from `A` to `Z`.
    #[must_use]
    pub fn alphabet() -> Vec<Self> {
        Self::iter().collect()
    }
}

/// Key currently selected in the alphabetical index.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum IndexKey {
    /// Users are browsed by the first [`Letter`] of their name.
    Letter(Letter),

    /// Free-text search is active instead of browsing.
    FreeText,

    /// Nothing is selected.
    #[default]
    None,
}

impl IndexKey {
    /// [`IndexKey`] selected when the directory is opened.
    pub const INITIAL: Self = Self::Letter(Letter::A);

    /// Returns the [`Letter`] of this [`IndexKey`], if it browses by one.
    #[must_use]
    pub const fn letter(self) -> Option<Letter> {
        match self {
            Self::Letter(l) => Some(l),
            Self::FreeText | Self::None => None,
        }
    }
}

impl From<Letter> for IndexKey {
    fn from(letter: Letter) -> Self {
        Self::Letter(letter)
    }
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(l) => write!(f, "{l}"),
            Self::FreeText => f.write_str("0"),
            Self::None => Ok(()),
        }
    }
}

impl FromStr for IndexKey {
    type Err = ParseIndexKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Self::None),
            "0" => Ok(Self::FreeText),
            l => l
                .parse::<Letter>()
                .map(Self::Letter)
                .map_err(|_| ParseIndexKeyError(l.to_owned())),
        }
    }
}

/// Error of parsing an [`IndexKey`].
#[derive(Clone, Debug, Display, Error)]
#[display("`{_0}` is neither a letter, `0` nor empty")]
pub struct ParseIndexKeyError(#[error(not(source))] String);
