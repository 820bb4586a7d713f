use std::fmt::Write as _;

use super::{StyleDeclaration, StyleValue};

/// Converts a camelCase property name to its CSS spelling.
///
/// Vendor prefixes written with a leading capital (`MozAppearance`,
/// `WebkitUserSelect`) or as `ms` (`msFlex`) gain a leading dash. Names that
/// already contain a dash, such as custom properties, are kept as is.
pub fn css_property_name(property: &str) -> String {
    if property.contains('-') {
        return property.to_owned();
    }

    let mut name = String::with_capacity(property.len() + 4);

    let is_ms_prefix = property.starts_with("ms")
        && property[2..].starts_with(|c: char| c.is_ascii_uppercase());

    if is_ms_prefix || property.starts_with(|c: char| c.is_ascii_uppercase()) {
        name.push('-');
    }

    for (index, c) in property.char_indices() {
        if c.is_ascii_uppercase() {
            if index > 0 {
                name.push('-');
            }
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }

    name
}

/// Joins a nested key onto its parent selector, applying it to every part of a
/// selector list. `&` in the key stands for the parent; keys starting with `:`
/// attach directly; anything else selects descendants.
pub fn nest_selector(parent: &str, key: &str) -> String {
    split_selector_list(parent)
        .into_iter()
        .map(str::trim)
        .map(|parent| {
            if key.contains('&') {
                key.replace('&', parent)
            } else if key.starts_with(':') {
                format!("{parent}{key}")
            } else {
                format!("{parent} {key}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Splits a selector list on its top-level commas, leaving commas inside
/// `:is(a, b)` or `[title="a,b"]` alone.
fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote = None;
    let mut start = 0;

    for (index, c) in selector.char_indices() {
        match (quote, c) {
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(&selector[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }

    parts.push(&selector[start..]);
    parts
}

impl StyleDeclaration {
    /// Renders this record as CSS rules scoped to `selector`.
    ///
    /// Literal properties become one rule; nested pseudo-state records become
    /// rules on the derived selector; media-query records wrap a rule for the
    /// same selector.
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::new();
        write_rule(&mut out, selector, self, 0);
        out
    }
}

pub(crate) fn write_rule(out: &mut String, selector: &str, declaration: &StyleDeclaration, depth: usize) {
    let indent = "  ".repeat(depth);
    let mut body = String::new();
    let mut nested = Vec::new();

    for (property, value) in declaration.iter() {
        match value {
            StyleValue::Nested(inner) => nested.push((property, inner)),
            value => {
                let _ = writeln!(body, "{indent}  {}: {};", css_property_name(property), value);
            }
        }
    }

    if !body.is_empty() {
        let _ = writeln!(out, "{indent}{selector} {{");
        out.push_str(&body);
        let _ = writeln!(out, "{indent}}}");
    }

    for (key, inner) in nested {
        if inner.is_empty() {
            continue;
        }

        if key.starts_with('@') {
            let _ = writeln!(out, "{indent}{key} {{");
            write_rule(out, selector, inner, depth + 1);
            let _ = writeln!(out, "{indent}}}");
        } else {
            write_rule(out, &nest_selector(selector, key), inner, depth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_property_names() {
        assert_eq!(css_property_name("paddingTop"), "padding-top");
        assert_eq!(css_property_name("color"), "color");
        assert_eq!(css_property_name("MozAppearance"), "-moz-appearance");
        assert_eq!(css_property_name("WebkitUserSelect"), "-webkit-user-select");
        assert_eq!(css_property_name("msFlexAlign"), "-ms-flex-align");
        assert_eq!(css_property_name("--accent"), "--accent");
    }

    #[test]
    fn test_nest_selector() {
        assert_eq!(nest_selector(".btn", ":hover"), ".btn:hover");
        assert_eq!(nest_selector(".field", "::placeholder"), ".field::placeholder");
        assert_eq!(nest_selector("h1, h2", ":hover"), "h1:hover, h2:hover");
        assert_eq!(nest_selector(".a", "& + &"), ".a + .a");
        assert_eq!(nest_selector("table", "td"), "table td");
    }

    #[test]
    fn test_nest_selector_keeps_nested_lists_whole() {
        assert_eq!(nest_selector(":is(a, b)", ":hover"), ":is(a, b):hover");
        assert_eq!(nest_selector("li:not(.a,.b), p", ":focus"), "li:not(.a,.b):focus, p:focus");
        assert_eq!(nest_selector("[title=\"a,b\"]", ":hover"), "[title=\"a,b\"]:hover");
    }

    #[test]
    fn test_renders_pseudo_states_and_media() {
        let style = StyleDeclaration::new()
            .set("color", "#fff")
            .set("opacity", 0.5)
            .set(":hover", StyleDeclaration::new().set("backgroundColor", "#000"))
            .set(
                "@media(max-width: 767px)",
                StyleDeclaration::new().set("paddingLeft", ".5rem"),
            );

        assert_eq!(
            style.to_css(".btn"),
            concat!(
                ".btn {\n",
                "  color: #fff;\n",
                "  opacity: 0.5;\n",
                "}\n",
                ".btn:hover {\n",
                "  background-color: #000;\n",
                "}\n",
                "@media(max-width: 767px) {\n",
                "  .btn {\n",
                "    padding-left: .5rem;\n",
                "  }\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_empty_nested_records_are_skipped() {
        let style = StyleDeclaration::new()
            .set("color", "red")
            .set(":hover", StyleDeclaration::new());

        assert_eq!(style.to_css("a"), "a {\n  color: red;\n}\n");
    }
}
