use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

/// Accepts a single font stack string or a non-empty list of families, which is
/// joined into one stack.
pub fn de_font_stack<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(Vec<String>),
    }

    match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(string) => {
            if string.trim().is_empty() {
                return Err(D::Error::custom("font stack can't be empty."));
            }

            Ok(string)
        }
        StringOrVec::Many(families) => {
            if families.is_empty() {
                return Err(D::Error::custom("list can't be empty."));
            }

            Ok(families.join(", "))
        }
    }
}

pub fn de_breakpoints<'de, D>(deserializer: D) -> Result<SmallVec<[String; 3]>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = SmallVec::<[String; 3]>::deserialize(deserializer)?;

    if value.is_empty() {
        return Err(D::Error::custom("at least one breakpoint needs to be provided."));
    }

    if value.iter().any(|query| query.trim().is_empty()) {
        return Err(D::Error::custom("breakpoint can't be empty."));
    }

    Ok(value)
}

/// Accepts a bare number (treated as pixels) or any non-empty CSS value, which
/// is kept verbatim so `.25rem`, `calc(...)` and `var(...)` pass through.
pub fn de_css_length<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::Float(pixels) => Ok(format!("{pixels}px")),

        StringOrFloat::String(string) => {
            if string.trim().is_empty() {
                return Err(D::Error::custom("length can't be empty."));
            }

            Ok(string)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f64),
}
