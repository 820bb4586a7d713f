//! Themeable style derivations for form controls.
//!
//! Resolve a [`theme::Theme`] once per UI tree (see [`Starter`]), then ask each
//! control builder in [`components`] for its [`style::StyleDeclaration`]. The
//! records serialize to camelCase style objects or render to CSS.

pub mod components;

pub mod style;

pub mod theme;

pub mod global;

mod starter;
pub use starter::*;

mod utils;
pub use utils::svg_data_url;

mod assets;
pub use assets::*;
