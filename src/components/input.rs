use serde::{Deserialize, Serialize};

use crate::{
    closed_enum_tokens,
    components::{TextField, Toggle, ToggleKind},
    style::StyleDeclaration,
    theme::{ControlSize, Theme},
};

/// Native `type` of an input. Anything but a toggle renders as text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum InputType {
    #[default]
    Text,
    Checkbox,
    Radio,
}

closed_enum_tokens!(InputType {
    Text => "text",
    Checkbox => "checkbox",
    Radio => "radio",
});

/// Derived styles of an [`Input`], depending on its type.
#[derive(Debug, Clone, PartialEq)]
pub enum InputStyle {
    Text(StyleDeclaration),
    Toggle {
        mark: StyleDeclaration,
        /// Inner dot, radios only.
        indicator: Option<StyleDeclaration>,
        /// Applied to the visually hidden native control.
        native: StyleDeclaration,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Input {
    #[serde(rename = "type")]
    input_type: InputType,
    size: ControlSize,
    checked: bool,
    disabled: bool,
}

impl Input {
    pub fn new(input_type: impl Into<InputType>) -> Self {
        Self {
            input_type: input_type.into(),
            ..Default::default()
        }
    }

    pub fn size(mut self, size: impl Into<ControlSize>) -> Self {
        self.size = size.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    /// The toggle this input renders as, if it is a checkbox or radio.
    pub fn as_toggle(&self) -> Option<Toggle> {
        let kind = match self.input_type {
            InputType::Checkbox => ToggleKind::Checkbox,
            InputType::Radio => ToggleKind::Radio,
            InputType::Text => return None,
        };

        Some(Toggle::new(kind).checked(self.checked).disabled(self.disabled))
    }

    pub fn style(&self, theme: &Theme) -> InputStyle {
        match self.as_toggle() {
            Some(toggle) => InputStyle::Toggle {
                mark: toggle.mark_style(theme),
                indicator: toggle.indicator_style(theme),
                native: super::hidden_native_input_style(),
            },
            None => InputStyle::Text(
                TextField::new()
                    .size(self.size)
                    .disabled(self.disabled)
                    .style(theme),
            ),
        }
    }
}
