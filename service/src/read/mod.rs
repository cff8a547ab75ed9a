//! Read entities definitions.

pub mod card;
pub mod view;

pub use self::{card::Card, view::View};
