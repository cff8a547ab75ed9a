//! Infrastructure layer.

pub mod directory;

pub use self::directory::Directory;
#[cfg(feature = "memory")]
pub use self::directory::InMemory;
