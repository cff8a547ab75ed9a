//! Console [`Command`]s and rendering of the directory [`View`].

use std::{io, ops::ControlFlow, str::FromStr};

use common::{PageNumber, PageSize};
use derive_more::{Display, Error, From};
use itertools::Itertools as _;
use service::{
    domain::{alphabet::ParseIndexKeyError, IndexKey},
    read::{Card, View},
};

use crate::Widget;

/// Line of console input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Search box text has changed.
    Type(String),

    /// Search right away.
    Search(String),

    /// Select an [`IndexKey`].
    Select(IndexKey),

    /// Go to a page.
    Page(PageNumber),

    /// Change the page size, [`None`] meaning the default one.
    Size(Option<PageSize>),

    /// Leave the directory.
    Quit,
}

impl Command {
    /// Applies this [`Command`] to the [`Widget`].
    pub fn apply(self, widget: &mut Widget) -> ControlFlow<()> {
        match self {
            Self::Type(text) => widget.on_search_text_change(text),
            Self::Search(text) => widget.on_search_submit(text),
            Self::Select(key) => widget.on_alphabet_select(key),
            Self::Page(page) => widget.on_page_change(page),
            Self::Size(size) => widget.set_page_size(size),
            Self::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let Some(cmd) = line.strip_prefix('/') else {
            return Ok(Self::Type(line.to_owned()));
        };
        let (name, arg) = cmd.split_once(' ').unwrap_or((cmd, ""));
        let arg = arg.trim();

        Ok(match name {
            "letter" => Self::Select(arg.parse()?),
            "page" => Self::Page(
                arg.parse()
                    .ok()
                    .and_then(PageNumber::new)
                    .ok_or_else(|| ParseError::NotPositive(arg.to_owned()))?,
            ),
            "size" if arg.is_empty() => Self::Size(None),
            "size" => Self::Size(Some(
                arg.parse()
                    .ok()
                    .and_then(PageSize::new)
                    .ok_or_else(|| ParseError::NotPositive(arg.to_owned()))?,
            )),
            "search" => Self::Search(arg.to_owned()),
            "quit" => Self::Quit,
            _ => return Err(ParseError::Unknown(name.to_owned())),
        })
    }
}

/// Error of parsing a [`Command`].
#[derive(Debug, Display, Error, From)]
pub enum ParseError {
    /// Unknown command name.
    #[display("unknown command `/{_0}`")]
    #[from(ignore)]
    Unknown(#[error(not(source))] String),

    /// Argument is not a positive number.
    #[display("`{_0}` is not a positive number")]
    #[from(ignore)]
    NotPositive(#[error(not(source))] String),

    /// Invalid [`IndexKey`].
    #[display("invalid index key: {_0}")]
    IndexKey(ParseIndexKeyError),
}

/// Renders the [`View`] into the `out`put.
///
/// # Errors
///
/// If writing to the `out`put fails.
pub fn render(view: &View<'_>, out: &mut impl io::Write) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        view.alphabet.iter().format_with(" ", |letter, f| {
            if view.active_index_key == IndexKey::Letter(*letter) {
                f(&format_args!("[{letter}]"))
            } else {
                f(letter)
            }
        }),
    )?;

    if view.search_text.is_empty() {
        writeln!(out, "browsing `{}`", view.active_index_key)?;
    } else {
        writeln!(out, "search: {}", view.search_text)?;
    }
    if view.is_loading {
        writeln!(out, "loading...")?;
    }
    if view.has_error {
        writeln!(out, "error: {}", view.error_message)?;
    }

    for card in &view.visible_window {
        writeln!(out, "  {}", line(card))?;
    }
    if view.visible_window.is_empty() && !view.is_loading {
        writeln!(out, "  no users found")?;
    }
    writeln!(out, "page {} of {}", view.page, view.page_count.max(1))
}

/// Formats the [`Card`] as a single line.
fn line(card: &Card<'_>) -> String {
    let Card {
        display_name,
        title,
        picture_url: _,
        email,
        department,
        phone,
        location,
    } = card;

    let email = email.map(ToString::to_string);
    let phone = phone.map(ToString::to_string);
    let details = [
        *title,
        *department,
        email.as_deref(),
        phone.as_deref(),
        *location,
    ];
    format!(
        "{display_name}{}",
        details
            .into_iter()
            .flatten()
            .format_with("", |d, f| f(&format_args!(" | {d}"))),
    )
}
