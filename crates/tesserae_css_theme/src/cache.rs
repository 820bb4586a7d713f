use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use tracing::{debug, trace};

use crate::{CustomThemeBase, Theme, ThemeError, ThemeMode, ThemeOverlay};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ThemeCacheKey {
    mode: ThemeMode,
    base: CustomThemeBase,
    overlay: Option<String>,
}

/// Memoizes resolved themes by `(mode, overlay, base)` value.
///
/// Themes are handed out as `Arc<Theme>` so every render pass in a provider
/// scope shares one immutable value.
#[derive(Debug, Default)]
pub struct ThemeCache {
    entries: Mutex<HashMap<ThemeCacheKey, Arc<Theme>>>,
}

impl ThemeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(
        &self,
        mode: ThemeMode,
        custom: Option<&ThemeOverlay>,
        base: CustomThemeBase,
    ) -> Result<Arc<Theme>, ThemeError> {
        let key = ThemeCacheKey {
            mode,
            base,
            overlay: custom
                .filter(|custom| !custom.is_empty())
                .map(ThemeOverlay::fingerprint),
        };

        if let Some(theme) = self.lock().get(&key) {
            trace!(%mode, "theme cache hit");
            return Ok(theme.clone());
        }

        debug!(%mode, custom = key.overlay.is_some(), "theme cache miss");
        let theme = Arc::new(Theme::resolve(mode, custom, base)?);

        Ok(self.lock().entry(key).or_insert(theme).clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ThemeCacheKey, Arc<Theme>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_same_inputs_share_one_theme() {
        let cache = ThemeCache::new();
        let first = cache.resolve(ThemeMode::Dark, None, CustomThemeBase::Mode).unwrap();
        let second = cache.resolve(ThemeMode::Dark, None, CustomThemeBase::Mode).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_on_overlay_value_not_identity() {
        let cache = ThemeCache::new();
        let a = ThemeOverlay::new().set("colors.primary.normal", "#101010");
        let b = ThemeOverlay::new().set("colors.primary.normal", "#101010");
        let c = ThemeOverlay::new().set("colors.primary.normal", "#202020");

        let first = cache.resolve(ThemeMode::Light, Some(&a), CustomThemeBase::Mode).unwrap();
        let second = cache.resolve(ThemeMode::Light, Some(&b), CustomThemeBase::Mode).unwrap();
        let third = cache.resolve(ThemeMode::Light, Some(&c), CustomThemeBase::Mode).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(third.colors.primary.normal, "#202020");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_mode_and_base_are_part_of_the_key() {
        let cache = ThemeCache::new();
        let custom = ThemeOverlay::new().set("radii.normal", "2px");

        let light = cache.resolve(ThemeMode::Light, Some(&custom), CustomThemeBase::Mode).unwrap();
        let dark = cache.resolve(ThemeMode::Dark, Some(&custom), CustomThemeBase::Mode).unwrap();
        let historical = cache.resolve(ThemeMode::Dark, Some(&custom), CustomThemeBase::Light).unwrap();

        assert_ne!(light.colors.text.normal, dark.colors.text.normal);
        assert_eq!(historical.colors.text.normal, light.colors.text.normal);
        assert_eq!(cache.len(), 3);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = ThemeCache::new();
        let custom = ThemeOverlay::new().set("breakpoints", serde_json::json!([]));

        assert!(cache.resolve(ThemeMode::Light, Some(&custom), CustomThemeBase::Mode).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    #[traced_test]
    fn test_logs_cache_misses() {
        let cache = ThemeCache::new();
        cache.resolve(ThemeMode::Dark, None, CustomThemeBase::Mode).unwrap();

        assert!(logs_contain("theme cache miss"));
    }
}
