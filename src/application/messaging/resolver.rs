//! Locale resolver - picks the bundle used for a requested locale

use std::collections::HashSet;

use super::store::TemplateStore;
use crate::application::errors::ConfigError;
use crate::domain::entities::LocaleCode;

/// Maps an optional requested locale onto a loaded bundle, falling back to the default
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    default: LocaleCode,
    available: HashSet<LocaleCode>,
}

impl LocaleResolver {
    /// Fails if the store has no bundle for the default locale
    pub fn new(default: LocaleCode, store: &TemplateStore) -> Result<Self, ConfigError> {
        if !store.contains_locale(&default) {
            return Err(ConfigError::MissingDefaultBundle(default.to_string()));
        }
        Ok(Self {
            default,
            available: store.locales().into_iter().cloned().collect(),
        })
    }

    pub fn resolve(&self, requested: Option<&str>) -> &LocaleCode {
        let Some(tag) = requested else {
            return &self.default;
        };
        match LocaleCode::parse(tag) {
            Some(code) => self.available.get(&code).unwrap_or(&self.default),
            None => {
                tracing::debug!("Unparseable locale '{}', using default '{}'", tag, self.default);
                &self.default
            }
        }
    }

    pub fn default_locale(&self) -> &LocaleCode {
        &self.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TemplateStore {
        let mut store = TemplateStore::new();
        store.load(LocaleCode::parse("en").unwrap(), "k=v").unwrap();
        store.load(LocaleCode::parse("de").unwrap(), "k=w").unwrap();
        store
    }

    #[test]
    fn test_missing_default_bundle() {
        let err = LocaleResolver::new(LocaleCode::parse("fr").unwrap(), &store()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDefaultBundle(ref l) if l == "fr"));
    }

    #[test]
    fn test_resolve_known_locale() {
        let resolver = LocaleResolver::new(LocaleCode::parse("en").unwrap(), &store()).unwrap();
        assert_eq!(resolver.resolve(Some("de")).as_str(), "de");
        assert_eq!(resolver.resolve(Some("de_AT")).as_str(), "de");
    }

    #[test]
    fn test_resolve_platform_locale_strings() {
        let resolver = LocaleResolver::new(LocaleCode::parse("en").unwrap(), &store()).unwrap();
        for tag in ["de_DE.UTF-8", "de_DE_#Latn", "de_DE_x", "de@euro"] {
            assert_eq!(resolver.resolve(Some(tag)).as_str(), "de", "{}", tag);
        }
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let resolver = LocaleResolver::new(LocaleCode::parse("en").unwrap(), &store()).unwrap();
        assert_eq!(resolver.resolve(None).as_str(), "en");
        assert_eq!(resolver.resolve(Some("fr")).as_str(), "en");
        assert_eq!(resolver.resolve(Some("???")).as_str(), "en");
    }
}
