use serde::{Deserialize, Serialize};

use crate::{
    components::{apply_disabled, padding},
    style::{FOCUS, PLACEHOLDER, StyleDeclaration},
    theme::{ControlSize, Theme},
};

/// Single-line text input or multi-line text area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextField {
    size: ControlSize,
    disabled: bool,
}

/// Text areas share the text field's derivation.
pub type TextArea = TextField;

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: impl Into<ControlSize>) -> Self {
        self.size = size.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn style(&self, theme: &Theme) -> StyleDeclaration {
        let pad = self.size.field_padding();

        let mut style = padding(pad.vertical, pad.horizontal, pad.vertical, pad.horizontal)
            .set("fontFamily", "inherit")
            .set("fontSize", self.size.font_size(theme))
            .set("lineHeight", &theme.line_heights.small)
            .merged(field_frame(theme, self.size))
            .set(
                FOCUS,
                StyleDeclaration::new().set("borderColor", &theme.colors.primary.normal),
            )
            .set(
                PLACEHOLDER,
                StyleDeclaration::new()
                    .set("color", &theme.colors.text.more_muted)
                    .set("opacity", 1),
            );

        if self.disabled {
            apply_disabled(&mut style);
        }

        style
    }
}

/// Colors, border and transition shared by text fields and selects.
pub(crate) fn field_frame(theme: &Theme, size: ControlSize) -> StyleDeclaration {
    StyleDeclaration::new()
        .set("color", &theme.colors.text.normal)
        .set("backgroundColor", "transparent")
        .set("borderWidth", "1px")
        .set("borderStyle", "solid")
        .set("borderColor", &theme.colors.border.normal)
        .set("borderRadius", size.radius(theme))
        .set("outline", "none")
        .set("boxShadow", "none")
        .set("transition", "border-color ease-in-out .15s")
}
