use std::{fmt, sync::LazyLock};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use smallvec::SmallVec;

use super::deserializers::{de_breakpoints, de_css_length, de_font_stack};
use crate::{ThemeError, ThemeMode};

/// Resolved set of design tokens used to derive component styles.
///
/// Field names serialize in camelCase so a theme round-trips through the same
/// JSON documents the built-in themes are written in.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: ThemeColors,
    pub font_families: ThemeFontFamilies,
    pub font_sizes: ThemeFontSizes,
    pub font_weights: ThemeFontWeights,
    pub line_heights: ThemeLineHeights,
    pub radii: ThemeRadii,
    pub shadows: ThemeShadows,
    /// Media queries, largest viewport first.
    #[serde(deserialize_with = "de_breakpoints")]
    pub breakpoints: SmallVec<[String; 3]>,
    /// Top-level tokens the schema doesn't name, kept for custom global styles.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

macro_rules! generate_builtin_documents {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            static $name: LazyLock<Value> = LazyLock::new(|| {
                serde_json::from_str(include_str!($path))
                    .expect(concat!("built-in theme document ", $path, " is valid JSON"))
            });
        )+
    };
}

generate_builtin_documents!(
    ["../themes/light.json", LIGHT_DOCUMENT],
    ["../themes/dark.json", DARK_DOCUMENT]
);

static LIGHT_THEME: LazyLock<Theme> = LazyLock::new(|| {
    Theme::from_value(LIGHT_DOCUMENT.clone()).expect("built-in light theme matches the schema")
});

static DARK_THEME: LazyLock<Theme> = LazyLock::new(|| {
    Theme::from_value(ThemeMode::Dark.document())
        .expect("built-in dark overlay merges into a valid theme")
});

impl Theme {
    /// The base palette every other theme is layered over.
    pub fn light() -> &'static Theme {
        &LIGHT_THEME
    }

    /// The base palette with the dark overlay applied.
    pub fn dark() -> &'static Theme {
        &DARK_THEME
    }

    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn from_value(value: Value) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

pub(crate) fn light_document() -> &'static Value {
    &LIGHT_DOCUMENT
}

pub(crate) fn dark_document() -> &'static Value {
    &DARK_DOCUMENT
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub text: ThemeTextColors,
    pub background: ThemeBackgroundColors,
    pub border: ThemeBorderColors,
    pub neutral: ThemeRoleColors,
    pub primary: ThemeRoleColors,
    pub secondary: ThemeRoleColors,
    pub tertiary: ThemeRoleColors,
    pub positive: ThemeRoleColors,
    pub negative: ThemeRoleColors,
    /// Custom colors such as `colors.brand` supplied by an overlay.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Colors of one semantic role (`primary`, `negative`, ...).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRoleColors {
    pub normal: String,
    pub highlighted: String,
    pub muted: String,
    /// Text drawn on top of a `normal` fill.
    pub text_on_normal: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTextColors {
    pub normal: String,
    pub muted: String,
    pub more_muted: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeBackgroundColors {
    pub normal: String,
    pub highlighted: String,
    pub more_highlighted: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeBorderColors {
    pub normal: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeFontFamilies {
    #[serde(deserialize_with = "de_font_stack")]
    pub body: String,
    #[serde(deserialize_with = "de_font_stack")]
    pub heading: String,
    #[serde(deserialize_with = "de_font_stack")]
    pub mono: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeFontSizes {
    #[serde(deserialize_with = "de_css_length")]
    pub normal: String,
    #[serde(deserialize_with = "de_css_length")]
    pub smaller: String,
    #[serde(deserialize_with = "de_css_length")]
    pub small: String,
    #[serde(deserialize_with = "de_css_length")]
    pub large: String,
    #[serde(deserialize_with = "de_css_length")]
    pub h1: String,
    #[serde(deserialize_with = "de_css_length")]
    pub h2: String,
    #[serde(deserialize_with = "de_css_length")]
    pub h3: String,
    #[serde(deserialize_with = "de_css_length")]
    pub h4: String,
    #[serde(deserialize_with = "de_css_length")]
    pub h5: String,
    #[serde(deserialize_with = "de_css_length")]
    pub h6: String,
}

impl ThemeFontSizes {
    /// Heading sizes ordered `h1` through `h6`.
    pub fn headings(&self) -> [&str; 6] {
        [&self.h1, &self.h2, &self.h3, &self.h4, &self.h5, &self.h6]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeFontWeights {
    pub hairline: u16,
    pub thin: u16,
    pub light: u16,
    pub normal: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
    pub extrabold: u16,
    pub black: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeLineHeights {
    pub normal: ThemeValue,
    pub smaller: ThemeValue,
    pub small: ThemeValue,
    pub large: ThemeValue,
}

/// A leaf CSS accepts either unitless or as text, like `1.3` or `24px`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ThemeValue {
    Number(f64),
    Text(String),
}

impl ThemeValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ThemeValue::Number(number) => Some(*number),
            ThemeValue::Text(_) => None,
        }
    }
}

impl fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeValue::Number(number) => write!(f, "{number}"),
            ThemeValue::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeRadii {
    #[serde(deserialize_with = "de_css_length")]
    pub normal: String,
    #[serde(deserialize_with = "de_css_length")]
    pub smaller: String,
    #[serde(deserialize_with = "de_css_length")]
    pub small: String,
    #[serde(deserialize_with = "de_css_length")]
    pub large: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeShadows {
    pub normal: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme_loads() {
        let theme = Theme::light();
        assert_eq!(theme.colors.primary.normal, "#03a9f4");
        assert_eq!(theme.font_sizes.normal, "16px");
        assert_eq!(theme.radii.normal, ".25rem");
        assert_eq!(theme.font_weights.semibold, 600);
        assert_eq!(theme.line_heights.small, ThemeValue::Number(1.3));
        assert!(theme.extra.is_empty());
        assert!(theme.colors.extra.is_empty());
        assert_eq!(theme.breakpoints.len(), 3);
    }

    #[test]
    fn test_font_families_are_joined_stacks() {
        let theme = Theme::light();
        assert!(theme.font_families.body.starts_with("-apple-system, BlinkMacSystemFont"));
        assert!(theme.font_families.mono.ends_with("monospace"));
    }

    #[test]
    fn test_dark_theme_inherits_unset_leaves() {
        let light = Theme::light();
        let dark = Theme::dark();

        assert_eq!(dark.colors.text.normal, "#eceff1");
        // The dark overlay only swaps `highlighted` and `muted` for primary.
        assert_eq!(dark.colors.primary.normal, light.colors.primary.normal);
        assert_eq!(dark.colors.primary.text_on_normal, light.colors.primary.text_on_normal);
        assert_eq!(dark.colors.primary.highlighted, light.colors.primary.muted);
        assert_eq!(dark.colors.primary.muted, light.colors.primary.highlighted);
        assert_eq!(dark.font_sizes, light.font_sizes);
        assert_eq!(dark.breakpoints, light.breakpoints);
    }

    #[test]
    fn test_breakpoints_are_largest_first() {
        let widths: Vec<u32> = Theme::light()
            .breakpoints
            .iter()
            .filter_map(|query| {
                query
                    .trim_start_matches("@media(max-width: ")
                    .trim_end_matches("px)")
                    .parse()
                    .ok()
            })
            .collect();

        assert_eq!(widths, vec![991, 767, 479]);
    }

    #[test]
    fn test_theme_round_trips_through_value() {
        let theme = Theme::light();
        let round_trip = Theme::from_value(theme.to_value()).unwrap();
        assert_eq!(&round_trip, theme);
    }

    #[test]
    fn test_headings_are_ordered() {
        let headings = Theme::light().font_sizes.headings();
        assert_eq!(headings[0], "3.052rem");
        assert_eq!(headings[5], "1rem");
    }

    #[test]
    fn test_line_heights_accept_lengths() {
        let mut document = Theme::light().to_value();
        document["lineHeights"]["normal"] = Value::from("24px");

        let theme = Theme::from_value(document).unwrap();
        assert_eq!(theme.line_heights.normal, ThemeValue::Text("24px".into()));
        assert_eq!(theme.line_heights.normal.to_string(), "24px");
        assert_eq!(theme.line_heights.small.as_number(), Some(1.3));
    }

    #[test]
    fn test_unknown_tokens_are_kept() {
        let mut document = Theme::light().to_value();
        document["colors"]["brand"] = Value::from("#ff6f00");
        document["spacing"] = serde_json::json!({ "gutter": "2rem" });

        let theme = Theme::from_value(document).unwrap();
        assert_eq!(theme.colors.extra.get("brand"), Some(&Value::from("#ff6f00")));
        assert_eq!(theme.extra["spacing"]["gutter"], "2rem");
        assert_eq!(Theme::from_value(theme.to_value()).unwrap(), theme);
    }

    #[test]
    fn test_from_string_reports_schema_errors() {
        let err = Theme::from_string("{\"colors\": {}}").unwrap_err();
        assert!(matches!(err, ThemeError::Schema(_)));
    }
}
