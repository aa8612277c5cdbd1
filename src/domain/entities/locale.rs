use std::fmt;
use unic_langid::LanguageIdentifier;

/// Characters that end the language subtag of a locale string
const SUBTAG_SEPARATORS: [char; 5] = ['_', '-', '.', '@', '#'];

/// Language code identifying a locale bundle (e.g. "en")
///
/// Only the language subtag is kept, truncated to two letters like the codes
/// taken from resource file names; region, script, encoding and variants are
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Parse a locale string such as "en", "en_US", "de-AT", "de_DE.UTF-8" or
    /// "de_DE_#Latn" into its language code
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        let head = tag.split(SUBTAG_SEPARATORS).next()?;
        if !head.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let langid: LanguageIdentifier = head.parse().ok()?;
        let language = langid.language.to_string();
        if language == "und" {
            return None;
        }
        Self::two_letter(&language)
    }

    /// Extract the language code from a `<contentType>_<languageCode>.properties` file name
    ///
    /// The segment after the first underscore is truncated to two characters.
    pub fn from_resource_name(file_name: &str) -> Option<Self> {
        let segment = file_name.split('_').nth(1)?;
        Self::two_letter(segment)
    }

    fn two_letter(code: &str) -> Option<Self> {
        let code: String = code.chars().take(2).collect();
        if code.chars().count() < 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(Self(code.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_region() {
        assert_eq!(LocaleCode::parse("en_US").unwrap().as_str(), "en");
        assert_eq!(LocaleCode::parse("de-AT").unwrap().as_str(), "de");
        assert_eq!(LocaleCode::parse("fr").unwrap().as_str(), "fr");
    }

    #[test]
    fn test_parse_lowercases() {
        assert_eq!(LocaleCode::parse("EN_us").unwrap().as_str(), "en");
    }

    #[test]
    fn test_parse_ignores_encoding_script_and_variant() {
        assert_eq!(LocaleCode::parse("de_DE.UTF-8").unwrap().as_str(), "de");
        assert_eq!(LocaleCode::parse("de_DE_#Latn").unwrap().as_str(), "de");
        assert_eq!(LocaleCode::parse("de_DE_x").unwrap().as_str(), "de");
        assert_eq!(LocaleCode::parse("sr@latin").unwrap().as_str(), "sr");
        assert_eq!(LocaleCode::parse("de-Latn-AT").unwrap().as_str(), "de");
    }

    #[test]
    fn test_parse_matches_resource_name_truncation() {
        let requested = LocaleCode::parse("fil_PH").unwrap();
        let bundle = LocaleCode::from_resource_name("messages_fil.properties").unwrap();
        assert_eq!(requested, bundle);
        assert_eq!(requested.as_str(), "fi");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(LocaleCode::parse("").is_none());
        assert!(LocaleCode::parse("not a locale").is_none());
        assert!(LocaleCode::parse("und").is_none());
        assert!(LocaleCode::parse("_DE").is_none());
        assert!(LocaleCode::parse("d3_DE").is_none());
    }

    #[test]
    fn test_from_resource_name() {
        let code = LocaleCode::from_resource_name("messages_en_US.properties").unwrap();
        assert_eq!(code.as_str(), "en");
        let code = LocaleCode::from_resource_name("messages_de.properties").unwrap();
        assert_eq!(code.as_str(), "de");
    }

    #[test]
    fn test_from_resource_name_without_locale_segment() {
        assert!(LocaleCode::from_resource_name("messages.properties").is_none());
        assert!(LocaleCode::from_resource_name("messages_e").is_none());
        assert!(LocaleCode::from_resource_name("messages_.properties").is_none());
    }
}
