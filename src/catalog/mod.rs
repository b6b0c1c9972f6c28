//! Client-side catalog state.
//!
//! [`CatalogIndex`] answers category and search queries over one fetched
//! snapshot, [`CatalogState`] tracks whether that snapshot exists yet, and
//! [`BrowseSession`] holds the user's selection on top of both.

pub mod index;
pub mod session;
pub mod state;

pub use index::CatalogIndex;
pub use session::BrowseSession;
pub use state::CatalogState;
