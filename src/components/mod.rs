//! Style derivations, one builder per control family.
//!
//! Every builder is a plain value holding the control's props. Calling
//! `.style(theme)` is pure and total: out-of-range props were already mapped
//! to their defaults when the builder was constructed.

use crate::style::{HOVER, StyleDeclaration};

mod button;
pub use button::*;

mod text_field;
pub use text_field::*;

mod select;
pub use select::*;

mod toggle;
pub use toggle::*;

mod input;
pub use input::*;

/// Opacity applied on top of a disabled control.
pub const DISABLED_OPACITY: f64 = 0.5;

/// Layers the disabled treatment over `style`. Unrelated properties are kept.
pub(crate) fn apply_disabled(style: &mut StyleDeclaration) {
    style.remove(HOVER);
    style.insert("cursor", "not-allowed");
    style.insert("opacity", DISABLED_OPACITY);
}

/// The four padding sides, vertical first like the shorthand.
pub(crate) fn padding(
    top: &str,
    right: &str,
    bottom: &str,
    left: &str,
) -> StyleDeclaration {
    StyleDeclaration::new()
        .set("paddingTop", top)
        .set("paddingRight", right)
        .set("paddingBottom", bottom)
        .set("paddingLeft", left)
}
