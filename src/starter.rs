//! Provider scope: resolves one theme for a UI tree and the global styles
//! that go with it.

use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
    global::{GlobalStyles, StyleBlock, build_global_styles},
    theme::{CustomThemeBase, Theme, ThemeCache, ThemeError, ThemeMode, ThemeOverlay},
};

static THEME_CACHE: LazyLock<ThemeCache> = LazyLock::new(ThemeCache::new);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarterConfig {
    pub mode: ThemeMode,
    /// Partial theme layered over the built-in one.
    pub theme: Option<ThemeOverlay>,
    pub custom_theme_base: CustomThemeBase,
}

impl StarterConfig {
    pub fn new(mode: impl Into<ThemeMode>) -> Self {
        Self {
            mode: mode.into(),
            ..Default::default()
        }
    }

    pub fn theme(mut self, theme: ThemeOverlay) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn custom_theme_base(mut self, base: CustomThemeBase) -> Self {
        self.custom_theme_base = base;
        self
    }
}

#[derive(Error, Debug)]
pub enum StarterError {
    #[error("invalid starter config: {0}")]
    Config(#[source] serde_json::Error),

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

type GlobalStylesGetter = Box<dyn Fn(&Theme) -> StyleBlock + Send + Sync>;

/// Holds the resolved theme of a UI tree for as long as the tree lives.
pub struct Starter {
    theme: Arc<Theme>,
    global_styles: GlobalStyles,
    global_styles_getter: Option<GlobalStylesGetter>,
}

impl Starter {
    /// Resolves `config` through the process-wide theme cache.
    pub fn new(config: StarterConfig) -> Result<Self, StarterError> {
        Self::with_cache(config, &THEME_CACHE)
    }

    pub fn with_cache(config: StarterConfig, cache: &ThemeCache) -> Result<Self, StarterError> {
        let theme = cache.resolve(
            config.mode,
            config.theme.as_ref(),
            config.custom_theme_base,
        )?;

        debug!(mode = %config.mode, "starting provider scope");

        Ok(Self {
            global_styles: build_global_styles(&theme),
            theme,
            global_styles_getter: None,
        })
    }

    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self, StarterError> {
        let config = serde_json::from_str(json.as_ref()).map_err(StarterError::Config)?;
        Self::new(config)
    }

    /// Appends a caller-built block after the built-in global styles. It is
    /// rebuilt whenever the theme changes.
    pub fn with_global_styles(
        mut self,
        getter: impl Fn(&Theme) -> StyleBlock + Send + Sync + 'static,
    ) -> Self {
        self.global_styles.push(getter(&self.theme));
        self.global_styles_getter = Some(Box::new(getter));
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// A shared handle to the theme for render passes outliving this borrow.
    pub fn shared_theme(&self) -> Arc<Theme> {
        self.theme.clone()
    }

    pub fn global_styles(&self) -> &GlobalStyles {
        &self.global_styles
    }

    pub(crate) fn replace_theme(&mut self, theme: Arc<Theme>) {
        let mut global_styles = build_global_styles(&theme);

        if let Some(getter) = &self.global_styles_getter {
            global_styles.push(getter(&theme));
        }

        self.theme = theme;
        self.global_styles = global_styles;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleDeclaration;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_is_light() {
        let starter = Starter::new(StarterConfig::default()).unwrap();
        assert_eq!(starter.theme(), Theme::light());
    }

    #[test]
    fn test_config_from_json() {
        let starter = Starter::from_json(
            r##"{"mode": "dark", "theme": {"colors": {"primary": {"normal": "#123456"}}}}"##,
        )
        .unwrap();

        assert_eq!(starter.theme().colors.primary.normal, "#123456");
        assert_eq!(starter.theme().colors.text.normal, Theme::dark().colors.text.normal);
    }

    #[test]
    fn test_legacy_custom_base() {
        let config = StarterConfig::new("dark")
            .theme(ThemeOverlay::new().set("colors.primary.normal", "#123456"))
            .custom_theme_base(CustomThemeBase::Light);
        let starter = Starter::with_cache(config, &ThemeCache::new()).unwrap();

        assert_eq!(starter.theme().colors.text.normal, Theme::light().colors.text.normal);
    }

    #[test]
    fn test_invalid_config_and_theme_errors() {
        assert!(matches!(
            Starter::from_json("{\"mode\": "),
            Err(StarterError::Config(_))
        ));
        assert!(matches!(
            Starter::from_json(r#"{"theme": {"radii": {"normal": true}}}"#),
            Err(StarterError::Theme(_))
        ));
    }

    #[test]
    fn test_extra_global_styles_follow_the_theme() {
        let starter = Starter::new(StarterConfig::default()).unwrap().with_global_styles(|theme| {
            [(
                "code",
                StyleDeclaration::new().set("fontFamily", &theme.font_families.mono),
            )]
            .into_iter()
            .collect()
        });

        assert_eq!(starter.global_styles().blocks().len(), 3);
        assert_eq!(
            starter.global_styles().rule("code").unwrap().text("fontFamily"),
            Some(Theme::light().font_families.mono.as_str())
        );
    }

    #[test]
    fn test_shared_theme_is_cached() {
        let cache = ThemeCache::new();
        let first = Starter::with_cache(StarterConfig::new("dark"), &cache).unwrap();
        let second = Starter::with_cache(StarterConfig::new("dark"), &cache).unwrap();

        assert!(Arc::ptr_eq(&first.shared_theme(), &second.shared_theme()));
    }
}
