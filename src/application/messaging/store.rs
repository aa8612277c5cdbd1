//! Template store - per-locale bundles of raw message templates

use std::collections::{BTreeMap, HashMap};

use super::parser::parse_properties;
use crate::application::errors::ConfigError;
use crate::domain::entities::LocaleCode;

/// All templates loaded for one locale, ordered by key
pub type Bundle = BTreeMap<String, String>;

/// Mapping locale → bundle, filled once at startup
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    bundles: HashMap<LocaleCode, Bundle>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a property source into the bundle for `locale`
    ///
    /// The source is parsed completely before anything is stored, so a
    /// malformed line leaves the store unchanged. A previously loaded bundle
    /// for the same locale is replaced.
    pub fn load(&mut self, locale: LocaleCode, source: &str) -> Result<(), ConfigError> {
        let bundle = parse_properties(source).map_err(|e| e.into_config(locale.as_str()))?;
        tracing::info!("Loaded {} templates for locale '{}'", bundle.len(), locale);
        if self.bundles.insert(locale.clone(), bundle).is_some() {
            tracing::warn!("Replaced existing bundle for locale '{}'", locale);
        }
        Ok(())
    }

    pub fn get(&self, locale: &LocaleCode, key: &str) -> Option<&str> {
        self.bundles.get(locale)?.get(key).map(String::as_str)
    }

    pub fn bundle(&self, locale: &LocaleCode) -> Option<&Bundle> {
        self.bundles.get(locale)
    }

    pub fn contains_locale(&self, locale: &LocaleCode) -> bool {
        self.bundles.contains_key(locale)
    }

    /// Loaded locales, sorted
    pub fn locales(&self) -> Vec<&LocaleCode> {
        let mut locales: Vec<&LocaleCode> = self.bundles.keys().collect();
        locales.sort();
        locales
    }

    /// Keys of the `reference` bundle that `locale` does not define
    pub fn missing_keys(&self, locale: &LocaleCode, reference: &LocaleCode) -> Vec<&str> {
        let Some(reference) = self.bundles.get(reference) else {
            return Vec::new();
        };
        let bundle = self.bundles.get(locale);
        reference
            .keys()
            .filter(|key| bundle.map_or(true, |b| !b.contains_key(*key)))
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}
