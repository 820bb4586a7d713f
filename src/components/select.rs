use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::{
    assets::TesseraeIconKind,
    components::{apply_disabled, padding, text_field::field_frame},
    style::{FOCUS, StyleDeclaration},
    theme::{ControlSize, Theme},
    utils::svg_data_url,
};

static CARET_IMAGE: LazyLock<String> =
    LazyLock::new(|| svg_data_url(TesseraeIconKind::Caret.svg()));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Select {
    size: ControlSize,
    disabled: bool,
}

impl Select {
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
        let metrics = self.size.select_metrics();

        let mut style = padding(
            metrics.vertical,
            metrics.padding_right,
            metrics.vertical,
            metrics.padding_left,
        )
        .set("fontSize", self.size.font_size(theme))
        .set("lineHeight", &theme.line_heights.normal)
        .merged(field_frame(theme, self.size))
        .set("verticalAlign", "middle")
        .set("backgroundImage", CARET_IMAGE.as_str())
        .set("backgroundRepeat", "no-repeat")
        .set("backgroundPosition", metrics.caret_position)
        .set("backgroundSize", "8px 10px")
        .set("MozAppearance", "none")
        .set("WebkitAppearance", "none")
        .set(
            FOCUS,
            StyleDeclaration::new().set("borderColor", &theme.colors.primary.normal),
        );

        if self.disabled {
            apply_disabled(&mut style);
        }

        style
    }
}
