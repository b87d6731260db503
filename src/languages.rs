//! Fixed language catalog
//!
//! The set of languages offered in both selectors. The catalog is static
//! configuration data: an immutable ordered mapping from short code to display
//! name, defined once and never mutated.

/// A single catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Short language code (e.g. "en"), used for the translation provider
    /// and the speech service
    pub code: &'static str,
    /// Human-readable display name
    pub name: &'static str,
}

/// All supported languages, in display order
pub const CATALOG: [Language; 10] = [
    Language { code: "en", name: "English" },
    Language { code: "fr", name: "French" },
    Language { code: "es", name: "Spanish" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "ru", name: "Russian" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "zh", name: "Chinese" },
];

/// Default source language on startup
pub const DEFAULT_SOURCE: &str = "fr";

/// Default target language on startup
pub const DEFAULT_TARGET: &str = "en";

/// Look up the display name for a language code
pub fn display_name(code: &str) -> Option<&'static str> {
    CATALOG.iter().find(|l| l.code == code).map(|l| l.name)
}

/// Check whether a code is part of the catalog
pub fn is_supported(code: &str) -> bool {
    CATALOG.iter().any(|l| l.code == code)
}
