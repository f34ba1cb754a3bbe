//! Language names and OpenWeather language codes
//!
//! The table is kept in declared order, duplicates included. Several codes
//! share a name (`sp`/`es` are both Spanish) and some codes carry two names
//! (`zh_cn` is both "Chinese Simplified" and "Simplified Chinese"). Lookups in
//! either direction return the first declared match.

#[cfg(test)]
mod proptests;

/// One row of the lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
}

const fn entry(code: &'static str, name: &'static str) -> LanguageEntry {
    LanguageEntry { code, name }
}

/// Languages OpenWeather can localize condition text into
static LANGUAGES: &[LanguageEntry] = &[
    entry("sq", "Albanian"),
    entry("af", "Afrikaans"),
    entry("ar", "Arabic"),
    entry("az", "Azerbaijani"),
    entry("eu", "Basque"),
    entry("be", "Belarusian"),
    entry("bg", "Bulgarian"),
    entry("ca", "Catalan"),
    entry("zh_cn", "Chinese Simplified"),
    entry("zh_tw", "Chinese Traditional"),
    entry("zh_cn", "Simplified Chinese"),
    entry("zh_tw", "Traditional Chinese"),
    entry("hr", "Croatian"),
    entry("cz", "Czech"),
    entry("da", "Danish"),
    entry("nl", "Dutch"),
    entry("en", "English"),
    entry("fi", "Finnish"),
    entry("fr", "French"),
    entry("gl", "Galician"),
    entry("de", "German"),
    entry("el", "Greek"),
    entry("he", "Hebrew"),
    entry("hi", "Hindi"),
    entry("hu", "Hungarian"),
    entry("is", "Icelandic"),
    entry("id", "Indonesian"),
    entry("it", "Italian"),
    entry("ja", "Japanese"),
    entry("kr", "Korean"),
    entry("ku", "Kurdish"),
    entry("la", "Latvian"),
    entry("lt", "Lithuanian"),
    entry("mk", "Macedonian"),
    entry("no", "Norwegian"),
    entry("fa", "Persian"),
    entry("pl", "Polish"),
    entry("pt", "Portuguese"),
    entry("pt_br", "Brasilian Portuguese"),
    entry("ro", "Romanian"),
    entry("ru", "Russian"),
    entry("sr", "Serbian"),
    entry("sk", "Slovak"),
    entry("sl", "Slovenian"),
    entry("sp", "Spanish"),
    entry("es", "Spanish"),
    entry("sv", "Swedish"),
    entry("se", "Swedish"),
    entry("th", "Thai"),
    entry("tr", "Turkish"),
    entry("ua", "Ukrainian"),
    entry("uk", "Ukrainian"),
    entry("vi", "Vietnamese"),
    entry("zu", "Zulu"),
];

/// The whole table, in declared order
#[cfg(test)]
pub fn entries() -> &'static [LanguageEntry] {
    LANGUAGES
}

/// Weather-provider code for an English language name.
///
/// Exact match ignoring case; `None` means "send no `lang` parameter".
pub fn resolve_code(language_name: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(language_name))
        .map(|e| e.code)
}

/// English name for a provider code, first declared name wins
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|e| e.code.eq_ignore_ascii_case(code))
        .map(|e| e.name)
}
