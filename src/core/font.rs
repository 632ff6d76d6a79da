//! Font handles and font availability
//!
//! A [`Font`] is either the system font at some weight or a named family.
//! Named families are only handed out when a [`FontProvider`] says they
//! are installed; everything else falls back to the system font.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::core::style::FontWeight;

/// Family names shipped with the default font book
const BUILTIN_FAMILIES: &[&str] = &[
    "Avenir-Book",
    "Avenir-Heavy",
    "Avenir-Light",
    "Avenir-Medium",
    "Courier",
    "Courier-Bold",
    "Georgia",
    "Georgia-Bold",
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-Light",
    "HelveticaNeue",
    "HelveticaNeue-Bold",
    "HelveticaNeue-Light",
    "HelveticaNeue-Medium",
    "Menlo-Bold",
    "Menlo-Regular",
];

/// Where a font's glyphs come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFace {
    System(FontWeight),
    Named(String),
}

/// A resolved font at a point size
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub face: FontFace,
    pub size: f32,
}

impl Font {
    /// The system font at the given size and weight
    pub fn system(size: f32, weight: FontWeight) -> Self {
        Self {
            face: FontFace::System(weight),
            size,
        }
    }

    /// Family name as a font resource identifier
    pub fn family_name(&self) -> String {
        match &self.face {
            FontFace::System(weight) => format!("System-{}", weight),
            FontFace::Named(name) => name.clone(),
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self.face, FontFace::System(_))
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt", self.family_name(), self.size)
    }
}

/// Answers whether a named font family can be loaded
#[cfg_attr(test, mockall::automock)]
pub trait FontProvider: Send + Sync {
    /// Whether `family` is installed
    fn contains(&self, family: &str) -> bool;
}

/// Resolve a named family, or `None` if the provider does not have it
pub fn resolve_named(provider: &dyn FontProvider, family: &str, size: f32) -> Option<Font> {
    if provider.contains(family) {
        Some(Font {
            face: FontFace::Named(family.to_string()),
            size,
        })
    } else {
        None
    }
}

/// Resolve a named family, falling back to the regular system font
pub fn resolve_or_system(provider: &dyn FontProvider, family: &str, size: f32) -> Font {
    resolve_named(provider, family, size).unwrap_or_else(|| {
        tracing::debug!("Font '{}' unavailable, using system font", family);
        Font::system(size, FontWeight::Regular)
    })
}

/// Set of installed font family names
#[derive(Debug, Clone, Default)]
pub struct FontBook {
    families: BTreeSet<String>,
}

impl FontBook {
    /// A font book with no families installed
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in families
    pub fn builtin() -> Self {
        Self::empty().with_families(BUILTIN_FAMILIES.iter().copied())
    }

    /// Add families to the book
    pub fn with_families<I, S>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.families.extend(families.into_iter().map(Into::into));
        self
    }
}

impl FontProvider for FontBook {
    fn contains(&self, family: &str) -> bool {
        self.families.contains(family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_book_has_helvetica() {
        let book = FontBook::builtin();
        assert!(book.contains("Helvetica-Bold"));
        assert!(book.contains("HelveticaNeue-Medium"));
        assert!(!book.contains("Comic Sans"));
    }

    #[test]
    fn test_with_families_extends_book() {
        let book = FontBook::empty().with_families(["Inter-Regular"]);
        assert!(book.contains("Inter-Regular"));
        assert!(!book.contains("Helvetica"));
    }

    #[test]
    fn test_resolve_or_system_falls_back_at_requested_size() {
        let mut provider = MockFontProvider::new();
        provider
            .expect_contains()
            .withf(|family: &str| family == "Missing-Font")
            .return_const(false);

        let font = resolve_or_system(&provider, "Missing-Font", 17.5);
        assert_eq!(font, Font::system(17.5, FontWeight::Regular));
    }

    #[test]
    fn test_resolve_named_uses_provider() {
        let mut provider = MockFontProvider::new();
        provider.expect_contains().return_const(true);

        let font = resolve_named(&provider, "Georgia", 12.0).unwrap();
        assert_eq!(font.family_name(), "Georgia");
        assert_eq!(font.size, 12.0);
        assert!(!font.is_system());
    }

    #[test]
    fn test_system_font_display() {
        let font = Font::system(14.0, FontWeight::Semibold);
        assert_eq!(font.to_string(), "System-Semibold 14pt");
    }
}
