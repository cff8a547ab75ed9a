//! Domain definitions.

pub mod alphabet;
pub mod search;
pub mod user;

pub use self::{
    alphabet::{IndexKey, Letter},
    search::{Criteria, SearchMode},
    user::User,
};
