use serde::{Deserialize, Serialize};

use crate::{
    assets::TesseraeIconKind,
    closed_enum_tokens,
    components::DISABLED_OPACITY,
    style::StyleDeclaration,
    theme::Theme,
    utils::svg_data_url,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ToggleKind {
    #[default]
    Checkbox,
    Radio,
}

closed_enum_tokens!(ToggleKind {
    Checkbox => "checkbox",
    Radio => "radio",
});

/// What a toggle looks like in its current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleVisual {
    pub fill_color: String,
    pub border_color: String,
    pub indicator_visible: bool,
    /// Color of the checkmark or radio dot.
    pub indicator_color: String,
    pub opacity: f64,
    pub cursor: &'static str,
}

/// Checkbox or radio mark drawn in place of the native control.
///
/// The checked state is owned by the native control; this only renders it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toggle {
    kind: ToggleKind,
    checked: bool,
    disabled: bool,
}

impl Toggle {
    pub fn new(kind: impl Into<ToggleKind>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn checkbox() -> Self {
        Self::new(ToggleKind::Checkbox)
    }

    pub fn radio() -> Self {
        Self::new(ToggleKind::Radio)
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn kind(&self) -> ToggleKind {
        self.kind
    }

    pub fn visual(&self, theme: &Theme) -> ToggleVisual {
        let colors = &theme.colors;

        let (fill_color, border_color) = if self.checked {
            (colors.primary.normal.clone(), String::from("transparent"))
        } else {
            (String::from("transparent"), colors.text.muted.clone())
        };

        ToggleVisual {
            fill_color,
            border_color,
            indicator_visible: self.checked,
            indicator_color: colors.background.normal.clone(),
            opacity: if self.disabled { DISABLED_OPACITY } else { 1.0 },
            cursor: if self.disabled { "not-allowed" } else { "pointer" },
        }
    }

    /// Style of the 20px mark element.
    pub fn mark_style(&self, theme: &Theme) -> StyleDeclaration {
        let visual = self.visual(theme);

        let mut style = match self.kind {
            ToggleKind::Checkbox => StyleDeclaration::new().set("display", "inline-block"),
            ToggleKind::Radio => StyleDeclaration::new()
                .set("display", "flex")
                .set("flexShrink", 0)
                .set("alignItems", "center")
                .set("justifyContent", "center"),
        }
        .set("width", "20px")
        .set("height", "20px")
        .set("borderWidth", "1px")
        .set("borderStyle", "solid")
        .set("borderColor", visual.border_color)
        .set("backgroundColor", visual.fill_color);

        match self.kind {
            ToggleKind::Checkbox => {
                style.insert("borderRadius", &theme.radii.normal);

                if visual.indicator_visible {
                    let checkmark =
                        TesseraeIconKind::Checkmark.svg_with_fill(&visual.indicator_color);
                    style.insert("backgroundImage", svg_data_url(&checkmark));
                }

                style.insert("backgroundRepeat", "no-repeat");
                style.insert("backgroundPosition", "center");
            }
            ToggleKind::Radio => style.insert("borderRadius", "50%"),
        }

        if self.disabled {
            style.insert("opacity", visual.opacity);
        }
        style.insert("cursor", visual.cursor);

        if self.kind == ToggleKind::Checkbox {
            style.insert("MozUserSelect", "none");
            style.insert("WebkitUserSelect", "none");
            style.insert("userSelect", "none");
            style.insert("transitionDuration", "0.3s");
        }

        style
    }

    /// Style of the inner dot of a radio mark. Checkboxes have none.
    ///
    /// An unchecked dot is sized to fill the mark but left unpainted, so it
    /// shrinks into place when the radio gets checked.
    pub fn indicator_style(&self, theme: &Theme) -> Option<StyleDeclaration> {
        if self.kind != ToggleKind::Radio {
            return None;
        }

        let size = if self.checked { "6px" } else { "16px" };
        let mut style = StyleDeclaration::new().set("width", size).set("height", size);

        if self.checked {
            style.insert("backgroundColor", &theme.colors.background.normal);
        }

        Some(
            style
                .set("borderRadius", "50%")
                .set("transitionDuration", "0.2s"),
        )
    }
}

/// Hides the native control while keeping it focusable. A zero size would
/// suppress browser validation messages, so it keeps a small footprint.
pub fn hidden_native_input_style() -> StyleDeclaration {
    StyleDeclaration::new()
        .set("opacity", 0)
        .set("overflow", "hidden")
        .set("margin", 0)
        .set("padding", 0)
        .set("width", "0.5rem")
        .set("height", "0.5rem")
}
