use pretty_assertions::assert_eq;
use serde_json::json;
use tesserae_css::{
    Starter, StarterConfig,
    components::{Button, Input, InputStyle, Select, TextField},
    style::{HOVER, ResponsiveCache},
    theme::{CustomThemeBase, Theme, ThemeExt, ThemeMode, ThemeOverlay, resolve_theme},
};

#[test]
fn dark_primary_outline_button() {
    let theme = resolve_theme(ThemeMode::Dark, None).unwrap();
    let style = Button::new().color("primary").variant("outline").style(&theme);

    assert_eq!(style.text("color"), Some("#03a9f4"));
    assert_eq!(style.text("color"), Some(theme.colors.primary.normal.as_str()));
    assert_eq!(style.text("backgroundColor"), Some("transparent"));
    assert_eq!(style.text("borderColor"), style.text("color"));

    let hover = style.nested(HOVER).unwrap();
    assert_eq!(hover.text("color"), Some(theme.colors.primary.highlighted.as_str()));
    assert_eq!(hover.text("borderColor"), Some(theme.colors.primary.highlighted.as_str()));
    assert_eq!(hover.text("backgroundColor"), Some("transparent"));
}

#[test]
fn select_sizes() {
    let theme = Theme::light();

    let small = Select::new().size("small").style(theme);
    assert_eq!(small.text("paddingLeft"), Some(".5rem"));
    assert_eq!(small.text("paddingRight"), Some("20px"));
    assert_eq!(small.text("backgroundPosition"), Some("right 6px center"));

    let large = Select::new().size("large").style(theme);
    assert_eq!(large.text("paddingLeft"), Some("1rem"));
    assert_eq!(large.text("paddingRight"), Some("24px"));
    assert_eq!(large.text("backgroundPosition"), Some("right 8px center"));
}

#[test]
fn custom_overlay_composes_with_dark_mode() {
    let overlay = ThemeOverlay::new().set("colors.primary.normal", "#ff6f00");

    let composed = resolve_theme(ThemeMode::Dark, Some(&overlay)).unwrap();
    assert_eq!(composed.colors.primary.normal, "#ff6f00");
    assert_eq!(composed.colors.background.normal, Theme::dark().colors.background.normal);

    let legacy = Theme::resolve(ThemeMode::Dark, Some(&overlay), CustomThemeBase::Light).unwrap();
    assert_eq!(legacy.colors.primary.normal, "#ff6f00");
    assert_eq!(legacy.colors.background.normal, Theme::light().colors.background.normal);
}

#[test]
fn starter_drives_every_control() {
    let mut starter = Starter::from_json(r#"{"mode": "dark"}"#).unwrap();
    let theme = starter.shared_theme();

    let field = TextField::new().style(&theme);
    assert_eq!(
        field.nested(":focus").and_then(|focus| focus.text("borderColor")),
        Some(theme.colors.primary.normal.as_str())
    );

    let InputStyle::Toggle { mark, .. } = Input::new("checkbox").checked(true).style(&theme) else {
        panic!("checkbox should render as a toggle");
    };
    assert_eq!(mark.text("backgroundColor"), Some(theme.colors.primary.normal.as_str()));

    starter.set_theme(Theme::light());
    assert_eq!(
        starter.global_styles().rule("body").and_then(|body| body.text("color")),
        Some(Theme::light().colors.text.normal.as_str())
    );
}

#[test]
fn button_renders_to_css() {
    let css = Button::new().disabled(true).style(Theme::light()).to_css(".button");

    assert!(css.starts_with(".button {\n  display: inline-block;\n"));
    assert!(css.contains("  user-select: none;\n"));
    assert!(css.contains("  cursor: not-allowed;\n"));
    assert!(!css.contains(":hover"));
}

#[test]
fn responsive_values_follow_theme_breakpoints() {
    let cache = ResponsiveCache::new();
    let starter = Starter::new(StarterConfig::default()).unwrap();
    let responsive = starter.responsive(&cache);

    let style = responsive.property("fontSize", [Some("2rem"), None, Some("1.5rem")]);
    assert_eq!(
        serde_json::to_value(&style).unwrap(),
        json!({
            "fontSize": "2rem",
            "@media(max-width: 767px)": { "fontSize": "1.5rem" }
        })
    );
}
