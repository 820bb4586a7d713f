//! Style-declaration records produced by the component derivations.
//!
//! A [`StyleDeclaration`] maps camelCase property names to literal values or to
//! nested records keyed by a pseudo-state (`:hover`) or a media query. It
//! serializes to the same object shape CSS-in-JS engines consume, and can be
//! rendered to a plain stylesheet with [`StyleDeclaration::to_css`].

mod declaration;
pub use declaration::*;

mod css;
pub use css::*;

mod responsive;
pub use responsive::*;

/// Nested key for the hover pseudo-state.
pub const HOVER: &str = ":hover";
/// Nested key for the focus pseudo-state.
pub const FOCUS: &str = ":focus";
/// Nested key for the placeholder pseudo-element.
pub const PLACEHOLDER: &str = "::placeholder";
