//! Theme access for the style derivations.
//!
//! Re-exports the theme registry and adds the closed enums (size, color,
//! variant) that select values out of a resolved [`Theme`].

pub use tesserae_css_theme::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
