use std::sync::Arc;

use crate::{
    Starter,
    style::{Responsive, ResponsiveCache},
    theme::Theme,
};

/// Extension trait for accessing and replacing the theme of a provider scope.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;

    /// The responsive helper for the current theme's breakpoints.
    fn responsive(&self, cache: &ResponsiveCache) -> Arc<Responsive> {
        cache.get(self.get_theme())
    }
}

impl ThemeExt for Starter {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.replace_theme(Arc::new(theme.as_ref().clone()));
    }

    fn get_theme(&self) -> &Theme {
        self.theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StarterConfig;

    #[test]
    fn test_set_and_get_theme() {
        let mut starter = Starter::new(StarterConfig::default()).unwrap();
        assert_eq!(starter.get_theme(), Theme::light());

        starter.set_theme(Theme::dark());
        assert_eq!(starter.get_theme(), Theme::dark());
    }

    #[test]
    fn test_set_theme_rebuilds_global_styles() {
        let mut starter = Starter::new(StarterConfig::default()).unwrap();
        starter.set_theme(Theme::dark());

        let body = starter.global_styles().rule("body").unwrap();
        assert_eq!(body.text("backgroundColor"), Some(Theme::dark().colors.background.normal.as_str()));
    }

    #[test]
    fn test_responsive_uses_current_breakpoints() {
        let cache = ResponsiveCache::new();
        let starter = Starter::new(StarterConfig::default()).unwrap();

        let responsive = starter.responsive(&cache);
        assert_eq!(responsive.breakpoints(), Theme::light().breakpoints.as_slice());
    }
}
