#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

const CHECKMARK_SVG: &str = include_str!("../../assets/icons/checkmark.svg");
const CARET_SVG: &str = include_str!("../../assets/icons/caret.svg");

/// The baseline reset placed ahead of the themed global rules.
pub const NORMALIZE_CSS: &str = include_str!("../../assets/reset/normalize.css");
pub const NORMALIZE_CSS_PATH: &str = "reset/normalize.css";

/// Built-in icons used as background images by the derivations.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn path(&self) -> &'static str)]
#[func(pub fn svg(&self) -> &'static str)]
pub enum TesseraeIconKind {
    /// Checkmark drawn inside a checked checkbox. Painted with `currentColor`.
    #[assoc(path = "icons/checkmark.svg")]
    #[assoc(svg = CHECKMARK_SVG)]
    Checkmark,

    /// Up/down caret drawn at the right edge of a select.
    #[assoc(path = "icons/caret.svg")]
    #[assoc(svg = CARET_SVG)]
    Caret,
}

impl TesseraeIconKind {
    /// The icon document with `currentColor` replaced by `color`.
    pub fn svg_with_fill(&self, color: &str) -> String {
        self.svg().replace("currentColor", color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkmark_fill_is_replaced() {
        let svg = TesseraeIconKind::Checkmark.svg_with_fill("#eceff1");

        assert!(svg.contains("fill=\"#eceff1\""));
        assert!(!svg.contains("currentColor"));
    }

    #[test]
    fn test_caret_keeps_its_own_fill() {
        assert_eq!(
            TesseraeIconKind::Caret.svg_with_fill("red"),
            TesseraeIconKind::Caret.svg()
        );
    }

    #[test]
    fn test_normalize_is_bundled() {
        assert!(NORMALIZE_CSS.contains("normalize.css v8.0.1"));
    }
}
