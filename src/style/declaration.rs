use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tesserae_css_theme::ThemeValue;

/// Insertion-ordered mapping from style property to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleDeclaration(IndexMap<String, StyleValue>);

/// A literal style value or a nested record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
    Nested(StyleDeclaration),
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyleDeclaration::insert`].
    pub fn set(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Sets `property`, keeping its original position if it was already present.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.0.insert(property.into(), value.into());
    }

    pub fn remove(&mut self, property: &str) -> Option<StyleValue> {
        self.0.shift_remove(property)
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.0.get(property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    /// The literal text of `property`, if it holds text.
    pub fn text(&self, property: &str) -> Option<&str> {
        match self.0.get(property)? {
            StyleValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn number(&self, property: &str) -> Option<f64> {
        match self.0.get(property)? {
            StyleValue::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// The nested record under a pseudo-state or media-query key.
    pub fn nested(&self, key: &str) -> Option<&StyleDeclaration> {
        match self.0.get(key)? {
            StyleValue::Nested(nested) => Some(nested),
            _ => None,
        }
    }

    /// Layers `other` on top of `self`. Nested records present on both sides
    /// are merged recursively; anything else in `other` wins.
    pub fn merge(&mut self, other: StyleDeclaration) {
        for (property, value) in other.0 {
            if let StyleValue::Nested(incoming) = value {
                if let Some(StyleValue::Nested(existing)) = self.0.get_mut(&property) {
                    existing.merge(incoming);
                    continue;
                }

                self.0.insert(property, StyleValue::Nested(incoming));
            } else {
                self.0.insert(property, value);
            }
        }
    }

    pub fn merged(mut self, other: StyleDeclaration) -> Self {
        self.merge(other);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(property, value)| (property.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleDeclaration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(property, value)| (property.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for StyleDeclaration {
    type Item = (String, StyleValue);
    type IntoIter = indexmap::map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl StyleValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(number) => write!(f, "{number}"),
            StyleValue::Text(text) => f.write_str(text),
            StyleValue::Nested(nested) => write!(f, "{{{} rules}}", nested.len()),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_owned())
    }
}

impl From<&String> for StyleValue {
    fn from(value: &String) -> Self {
        StyleValue::Text(value.clone())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(value.into())
    }
}

impl From<u16> for StyleValue {
    fn from(value: u16) -> Self {
        StyleValue::Number(value.into())
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(value.into())
    }
}

impl From<&ThemeValue> for StyleValue {
    fn from(value: &ThemeValue) -> Self {
        match value {
            ThemeValue::Number(number) => StyleValue::Number(*number),
            ThemeValue::Text(text) => StyleValue::Text(text.clone()),
        }
    }
}

impl From<StyleDeclaration> for StyleValue {
    fn from(value: StyleDeclaration) -> Self {
        StyleValue::Nested(value)
    }
}
