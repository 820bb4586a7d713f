//! Global stylesheet: the baseline reset followed by themed element rules.

use std::{borrow::Cow, fmt::Write as _};

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    assets::NORMALIZE_CSS,
    style::{StyleDeclaration, write_rule},
    theme::Theme,
};

/// One block of a global stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleBlock {
    /// A stylesheet passed through unmodified.
    Raw(Cow<'static, str>),
    /// Rules keyed by selector, in order.
    Rules(IndexMap<String, StyleDeclaration>),
}

impl StyleBlock {
    pub fn to_css(&self) -> String {
        match self {
            StyleBlock::Raw(css) => css.to_string(),
            StyleBlock::Rules(rules) => {
                let mut out = String::new();

                for (selector, declaration) in rules {
                    write_rule(&mut out, selector, declaration, 0);
                }

                out
            }
        }
    }
}

impl<S: Into<String>> FromIterator<(S, StyleDeclaration)> for StyleBlock {
    fn from_iter<I: IntoIterator<Item = (S, StyleDeclaration)>>(iter: I) -> Self {
        StyleBlock::Rules(
            iter.into_iter()
                .map(|(selector, declaration)| (selector.into(), declaration))
                .collect(),
        )
    }
}

/// Ordered style blocks applied once for a whole UI tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalStyles {
    blocks: Vec<StyleBlock>,
}

impl GlobalStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: StyleBlock) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[StyleBlock] {
        &self.blocks
    }

    /// The last rule registered for `selector` across all rule blocks.
    pub fn rule(&self, selector: &str) -> Option<&StyleDeclaration> {
        self.blocks.iter().rev().find_map(|block| match block {
            StyleBlock::Rules(rules) => rules.get(selector),
            StyleBlock::Raw(_) => None,
        })
    }

    pub fn to_css(&self) -> String {
        self.blocks
            .iter()
            .map(StyleBlock::to_css)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn build_global_styles(theme: &Theme) -> GlobalStyles {
    let colors = &theme.colors;
    let border = format!("1px solid {}", colors.border.normal);

    let mut rules: IndexMap<String, StyleDeclaration> = IndexMap::new();
    let mut rule = |selector: &str, declaration: StyleDeclaration| {
        rules.insert(selector.to_owned(), declaration);
    };

    rule(
        "html",
        StyleDeclaration::new()
            .set("fontSize", &theme.font_sizes.normal)
            .set("boxSizing", "border-box"),
    );
    rule(
        "*, *::before, *::after",
        StyleDeclaration::new().set("boxSizing", "inherit"),
    );
    rule(
        "body",
        StyleDeclaration::new()
            .set("fontFamily", &theme.font_families.body)
            .set("lineHeight", &theme.line_heights.normal)
            .set("color", &colors.text.normal)
            .set("backgroundColor", &colors.background.normal),
    );
    rule("p", vertical_margins("1rem"));
    rule(
        "h1, h2, h3, h4, h5, h6",
        StyleDeclaration::new()
            .set("marginBottom", "1rem")
            .set("fontFamily", &theme.font_families.heading)
            .set("fontWeight", theme.font_weights.semibold)
            .set("lineHeight", &theme.line_heights.small)
            .set("color", &colors.text.normal),
    );

    for (level, size) in theme.font_sizes.headings().into_iter().enumerate() {
        rule(
            &format!("h{}", level + 1),
            StyleDeclaration::new()
                .set("marginTop", size)
                .set("fontSize", size),
        );
    }

    rule(
        "hr",
        vertical_margins("1.5rem")
            .set("border", 0)
            .set("borderTop", &border),
    );
    rule("ol, ul, dl", vertical_margins("1rem"));
    rule(
        "ol ol, ul ul, ol ul, ul ol",
        StyleDeclaration::new().set("marginTop", 0).set("marginBottom", 0),
    );
    rule("li", StyleDeclaration::new().set("marginTop", ".5rem"));
    rule(
        "a",
        StyleDeclaration::new()
            .set("color", &colors.primary.normal)
            .set("textDecoration", "none"),
    );
    rule(
        "a:hover",
        StyleDeclaration::new()
            .set("color", &colors.primary.highlighted)
            .set("textDecoration", "underline"),
    );
    rule("a:focus", StyleDeclaration::new().set("outline", "none"));
    rule(
        "small",
        StyleDeclaration::new().set("fontSize", &theme.font_sizes.small),
    );
    rule(
        "table",
        StyleDeclaration::new()
            .set("display", "block")
            .set("width", "100%")
            .set("overflow", "auto")
            .merged(vertical_margins("1.5rem"))
            .set("borderSpacing", 0)
            .set("borderCollapse", "collapse")
            .set("borderColor", &colors.border.normal),
    );
    rule("table tr", StyleDeclaration::new().set("borderTop", &border));
    rule(
        "table th, table td",
        StyleDeclaration::new()
            .set("padding", ".3rem .6rem")
            .set("border", &border),
    );
    rule("table th", StyleDeclaration::new().set("fontWeight", "600"));
    rule(
        "blockquote",
        StyleDeclaration::new()
            .set("margin", "1.5rem 0")
            .set("paddingLeft", "1rem")
            .set("color", &colors.text.muted)
            .set("borderLeft", format!("3px solid {}", colors.border.normal)),
    );

    debug!(rules = rules.len(), "built global styles");

    let mut styles = GlobalStyles::new();
    styles.push(StyleBlock::Raw(Cow::Borrowed(NORMALIZE_CSS)));
    styles.push(StyleBlock::Rules(rules));
    styles
}

fn vertical_margins(margin: &str) -> StyleDeclaration {
    StyleDeclaration::new()
        .set("marginTop", margin)
        .set("marginBottom", margin)
}
