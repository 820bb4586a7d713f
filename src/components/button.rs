use serde::{Deserialize, Serialize};

use crate::{
    components::{apply_disabled, padding},
    style::{HOVER, StyleDeclaration},
    theme::{ButtonVariant, ColorName, ControlSize, Theme},
};

/// Colors of a button at rest and while hovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonColors {
    pub text: String,
    pub background: String,
    pub border: String,
    pub hover_text: String,
    pub hover_background: String,
    pub hover_border: String,
}

impl ButtonColors {
    /// Picks the colors of `color` for the given variant.
    pub fn derive(theme: &Theme, color: ColorName, variant: ButtonVariant) -> Self {
        let role = color.resolve(theme);

        match variant {
            ButtonVariant::Normal => Self {
                text: role.text_on_normal.clone(),
                background: role.normal.clone(),
                border: role.normal.clone(),
                hover_text: role.text_on_normal.clone(),
                hover_background: role.highlighted.clone(),
                hover_border: role.highlighted.clone(),
            },
            ButtonVariant::Outline => Self {
                text: role.normal.clone(),
                background: String::from("transparent"),
                border: role.normal.clone(),
                hover_text: role.highlighted.clone(),
                hover_background: String::from("transparent"),
                hover_border: role.highlighted.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Button {
    color: ColorName,
    size: ControlSize,
    variant: ButtonVariant,
    disabled: bool,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<ColorName>) -> Self {
        self.color = color.into();
        self
    }

    pub fn size(mut self, size: impl Into<ControlSize>) -> Self {
        self.size = size.into();
        self
    }

    pub fn variant(mut self, variant: impl Into<ButtonVariant>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn colors(&self, theme: &Theme) -> ButtonColors {
        ButtonColors::derive(theme, self.color, self.variant)
    }

    pub fn style(&self, theme: &Theme) -> StyleDeclaration {
        let colors = self.colors(theme);
        let pad = self.size.button_padding();

        let mut style = StyleDeclaration::new()
            .set("display", "inline-block")
            .merged(padding(pad.vertical, pad.horizontal, pad.vertical, pad.horizontal))
            .set("fontSize", self.size.font_size(theme))
            .set("fontWeight", "normal")
            .set("lineHeight", &theme.line_heights.small)
            .set("textAlign", "center")
            .set("whiteSpace", "nowrap")
            .set("verticalAlign", "middle")
            .set("color", colors.text)
            .set("backgroundColor", colors.background)
            .set("borderWidth", "1px")
            .set("borderStyle", "solid")
            .set("borderColor", colors.border)
            .set("borderRadius", self.size.radius(theme))
            .set("outline", "none")
            .set("transition", "all .2s ease-in-out")
            .set("cursor", "pointer")
            .set("userSelect", "none");

        if self.disabled {
            apply_disabled(&mut style);
        } else {
            style.insert(
                HOVER,
                StyleDeclaration::new()
                    .set("color", colors.hover_text)
                    .set("backgroundColor", colors.hover_background)
                    .set("borderColor", colors.hover_border),
            );
        }

        style
    }
}
