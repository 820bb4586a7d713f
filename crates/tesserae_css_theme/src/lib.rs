//! Theme registry for tesserae_css.
//!
//! Holds the built-in light theme and dark overlay, the deep-merge used to
//! layer partial overlays over them, and a memo cache for resolved themes.

mod schema;
pub use schema::*;

mod deserializers;

mod merge;
pub use merge::*;

mod resolve;
pub use resolve::*;

mod cache;
pub use cache::*;

mod error;
pub use error::*;
