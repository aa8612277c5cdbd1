//! Message renderer - localized, styled messages from keys and arguments

use super::markup::{parse_markup, substitute};
use super::resolver::LocaleResolver;
use super::store::TemplateStore;
use crate::application::errors::ConfigError;
use crate::domain::entities::{LocaleCode, StyledText};

/// Renders message keys into styled text
///
/// Immutable once built; share it behind an `Arc` between dispatch calls.
#[derive(Debug, Clone)]
pub struct MessageRenderer {
    store: TemplateStore,
    resolver: LocaleResolver,
}

impl MessageRenderer {
    /// Fails if `default_locale` has no bundle in `store`
    pub fn new(store: TemplateStore, default_locale: LocaleCode) -> Result<Self, ConfigError> {
        let resolver = LocaleResolver::new(default_locale, &store)?;
        Ok(Self { store, resolver })
    }

    /// Render `key` for the requested locale with positional arguments
    ///
    /// A key missing from the resolved bundle yields empty text.
    pub fn render<S: AsRef<str>>(&self, key: &str, locale: Option<&str>, args: &[S]) -> StyledText {
        let locale = self.resolver.resolve(locale);
        let Some(template) = self.store.get(locale, key) else {
            tracing::warn!("Missing message '{}' for locale '{}'", key, locale);
            return StyledText::empty();
        };
        parse_markup(&substitute(template, args))
    }

    /// Raw template for `key` in the resolved locale
    pub fn template(&self, key: &str, locale: Option<&str>) -> Option<&str> {
        self.store.get(self.resolver.resolve(locale), key)
    }

    pub fn resolve(&self, locale: Option<&str>) -> &LocaleCode {
        self.resolver.resolve(locale)
    }

    pub fn default_locale(&self) -> &LocaleCode {
        self.resolver.default_locale()
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }
}
