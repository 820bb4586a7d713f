#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};
use tesserae_css_macros::IntoThemeField;

use crate::{
    closed_enum_tokens,
    theme::{Theme, ThemeRoleColors},
};

/// Horizontal and vertical padding of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

impl Padding {
    const fn new(horizontal: &'static str, vertical: &'static str) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Select padding, which is asymmetric to leave room for the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectMetrics {
    pub padding_left: &'static str,
    pub padding_right: &'static str,
    pub vertical: &'static str,
    /// `background-position` of the caret, always right-aligned.
    pub caret_position: &'static str,
}

impl SelectMetrics {
    const fn new(
        padding_left: &'static str,
        padding_right: &'static str,
        vertical: &'static str,
        caret_position: &'static str,
    ) -> Self {
        Self {
            padding_left,
            padding_right,
            vertical,
            caret_position,
        }
    }
}

/// Size of a control. Every size row is a fixed literal, nothing is scaled.
#[derive(Assoc, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
#[func(pub fn font_size(&self, theme: &Theme) -> String)]
#[func(pub fn radius(&self, theme: &Theme) -> String)]
#[func(pub fn button_padding(&self) -> Padding)]
#[func(pub fn field_padding(&self) -> Padding)]
#[func(pub fn select_metrics(&self) -> SelectMetrics)]
pub enum ControlSize {
    #[default]
    #[assoc(font_size = theme.font_sizes.normal.clone())]
    #[assoc(radius = theme.radii.normal.clone())]
    #[assoc(button_padding = Padding::new("1rem", ".5rem"))]
    #[assoc(field_padding = Padding::new(".75rem", ".5rem"))]
    #[assoc(select_metrics = SelectMetrics::new(".75rem", "24px", ".5rem", "right 8px center"))]
    Normal,

    #[assoc(font_size = theme.font_sizes.small.clone())]
    #[assoc(radius = theme.radii.small.clone())]
    #[assoc(button_padding = Padding::new(".5rem", ".25rem"))]
    #[assoc(field_padding = Padding::new(".5rem", ".25rem"))]
    #[assoc(select_metrics = SelectMetrics::new(".5rem", "20px", ".25rem", "right 6px center"))]
    Small,

    #[assoc(font_size = theme.font_sizes.large.clone())]
    #[assoc(radius = theme.radii.large.clone())]
    #[assoc(button_padding = Padding::new("1.25rem", ".75rem"))]
    #[assoc(field_padding = Padding::new("1rem", ".75rem"))]
    #[assoc(select_metrics = SelectMetrics::new("1rem", "24px", ".75rem", "right 8px center"))]
    Large,
}

closed_enum_tokens!(ControlSize {
    Normal => "normal",
    Small => "small",
    Large => "large",
});

/// Semantic color role of a control.
#[derive(IntoThemeField, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
#[field(ThemeRoleColors)]
pub enum ColorName {
    #[default]
    #[theme(colors.neutral)]
    Neutral,
    #[theme(colors.primary)]
    Primary,
    #[theme(colors.secondary)]
    Secondary,
    #[theme(colors.tertiary)]
    Tertiary,
    #[theme(colors.positive)]
    Positive,
    #[theme(colors.negative)]
    Negative,
}

closed_enum_tokens!(ColorName {
    Neutral => "neutral",
    Primary => "primary",
    Secondary => "secondary",
    Tertiary => "tertiary",
    Positive => "positive",
    Negative => "negative",
});

/// Visual treatment of a button.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ButtonVariant {
    /// Filled with the role color.
    #[default]
    Normal,
    /// Transparent with a role-colored border and text.
    Outline,
}

closed_enum_tokens!(ButtonVariant {
    Normal => "normal",
    Outline => "outline",
});
