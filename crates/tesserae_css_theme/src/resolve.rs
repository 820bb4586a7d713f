use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    Theme, ThemeError, deep_merge,
    schema::{dark_document, light_document},
};

/// Color scheme the base theme is resolved for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn token(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The complete theme document for this mode, before any custom overlay.
    pub(crate) fn document(self) -> Value {
        let mut document = light_document().clone();

        if self == ThemeMode::Dark {
            deep_merge(&mut document, dark_document());
        }

        document
    }
}

impl From<&str> for ThemeMode {
    fn from(value: &str) -> Self {
        match value {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

impl From<String> for ThemeMode {
    fn from(value: String) -> Self {
        ThemeMode::from(value.as_str())
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// What a custom overlay is layered onto.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomThemeBase {
    /// The theme for the requested mode, so a custom overlay composes with dark mode.
    #[default]
    Mode,
    /// Always the light base theme. A custom overlay then replaces dark mode
    /// entirely, which is how earlier releases behaved.
    Light,
}

/// A partial theme: any subset of the [`Theme`] shape, at any depth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct ThemeOverlay(Map<String, Value>);

impl ThemeOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self, ThemeError> {
        let value: Value = serde_json::from_str(json.as_ref()).map_err(ThemeError::InvalidJson)?;
        Self::try_from(value)
    }

    /// Sets a single leaf addressed by a dotted path such as `colors.primary.normal`.
    pub fn set(mut self, path: &str, value: impl Into<Value>) -> Self {
        let mut segments = path.split('.').peekable();
        let mut map = &mut self.0;

        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                map.insert(segment.to_owned(), value.into());
                break;
            }

            let entry = map
                .entry(segment.to_owned())
                .or_insert_with(|| Value::Object(Map::new()));

            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }

            map = match entry {
                Value::Object(next) => next,
                _ => unreachable!("entry was just replaced with an object"),
            };
        }

        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Stable textual form, used as a memoization key.
    pub fn fingerprint(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    pub(crate) fn apply_to(&self, document: &mut Value) {
        deep_merge(document, &Value::Object(self.0.clone()));
    }
}

impl TryFrom<Value> for ThemeOverlay {
    type Error = ThemeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(ThemeError::OverlayNotObject {
                found: json_kind(&other),
            }),
        }
    }
}

impl From<ThemeOverlay> for Value {
    fn from(overlay: ThemeOverlay) -> Self {
        Value::Object(overlay.0)
    }
}

impl FromStr for ThemeOverlay {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Resolves the theme for `mode`, layering `custom` over the mode's theme.
pub fn resolve_theme(mode: ThemeMode, custom: Option<&ThemeOverlay>) -> Result<Theme, ThemeError> {
    Theme::resolve(mode, custom, CustomThemeBase::default())
}

impl Theme {
    pub fn resolve(
        mode: ThemeMode,
        custom: Option<&ThemeOverlay>,
        base: CustomThemeBase,
    ) -> Result<Theme, ThemeError> {
        let Some(custom) = custom.filter(|custom| !custom.is_empty()) else {
            debug!(%mode, "resolving built-in theme");

            return Ok(match mode {
                ThemeMode::Light => Theme::light().clone(),
                ThemeMode::Dark => Theme::dark().clone(),
            });
        };

        let mut document = match base {
            CustomThemeBase::Mode => mode.document(),
            CustomThemeBase::Light => {
                if mode == ThemeMode::Dark {
                    debug!("custom theme replaces the dark overlay");
                }

                light_document().clone()
            }
        };

        custom.apply_to(&mut document);
        debug!(%mode, ?base, keys = custom.as_map().len(), "resolved custom theme");

        Theme::from_value(document)
    }
}
