use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use smallvec::SmallVec;
use tesserae_css_theme::Theme;
use tracing::debug;

use super::{StyleDeclaration, StyleValue};

/// Expands per-breakpoint value lists into media-query records.
///
/// The first value is the base value; value `i` applies inside breakpoint
/// `i - 1`. Values past the last breakpoint are ignored and `None` entries
/// leave that breakpoint untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Responsive {
    breakpoints: SmallVec<[String; 3]>,
}

impl Responsive {
    pub fn new<S: Into<String>>(breakpoints: impl IntoIterator<Item = S>) -> Self {
        Self {
            breakpoints: breakpoints.into_iter().map(Into::into).collect(),
        }
    }

    pub fn breakpoints(&self) -> &[String] {
        &self.breakpoints
    }

    /// Expands one property whose value differs per breakpoint.
    pub fn property<V: Into<StyleValue>>(
        &self,
        property: &str,
        values: impl IntoIterator<Item = Option<V>>,
    ) -> StyleDeclaration {
        let mut style = StyleDeclaration::new();
        let mut values = values.into_iter();

        if let Some(Some(base)) = values.next() {
            style.insert(property, base);
        }

        for (breakpoint, value) in self.breakpoints.iter().zip(values) {
            if let Some(value) = value {
                style.insert(
                    breakpoint.clone(),
                    StyleDeclaration::new().set(property, value),
                );
            }
        }

        style
    }

    /// Expands several properties at once, merging records that share a
    /// breakpoint.
    pub fn apply<'a, V: Into<StyleValue>>(
        &self,
        properties: impl IntoIterator<Item = (&'a str, Vec<Option<V>>)>,
    ) -> StyleDeclaration {
        properties
            .into_iter()
            .fold(StyleDeclaration::new(), |style, (property, values)| {
                style.merged(self.property(property, values))
            })
    }
}

/// Memoizes one [`Responsive`] helper per breakpoint list.
///
/// Kept outside [`Theme`] so the theme stays a plain immutable value.
#[derive(Debug, Default)]
pub struct ResponsiveCache {
    entries: Mutex<HashMap<SmallVec<[String; 3]>, Arc<Responsive>>>,
}

impl ResponsiveCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, theme: &Theme) -> Arc<Responsive> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        entries
            .entry(theme.breakpoints.clone())
            .or_insert_with(|| {
                debug!(breakpoints = theme.breakpoints.len(), "building responsive helper");
                Arc::new(Responsive::new(theme.breakpoints.iter().cloned()))
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
