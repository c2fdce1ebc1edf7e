//! Heuristics for low-value URL shapes.
//!
//! Patterns are checked in a fixed order and the first hit is reported. All of them lead to
//! the same outcome (the URL is noisy); the kind only records which rule fired.

use std::sync::LazyLock;

use regex::Regex;

/// Which heuristic classified a URL as noise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseKind {
    /// Date-like run such as `2024-01-15` or `24/1/5`
    CalendarDate,
    /// Generic section like `/blog/...` or `/products/...`
    ContentSection,
    /// Path ending in a bare number, e.g. `/item/1234`
    TrailingNumericId,
    /// Numbered page with an extension, e.g. `/news/1234.html`
    NumericIdWithExtension,
}

static CALENDAR_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{2,4}[-/][0-9]{1,2}[-/][0-9]{1,2}").expect("calendar pattern is valid")
});

static CONTENT_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"/(?:articles|about|blog|event|events|shop|post|posts|product|products|docs|support|pages|media|careers|jobs|video|videos|resource|resources)/",
    )
    .expect("content section pattern is valid")
});

static TRAILING_NUMERIC_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/[0-9]+$").expect("trailing id pattern is valid"));

static NUMERIC_ID_WITH_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/[0-9]+\.[a-z]+").expect("id with extension pattern is valid"));

/// Classify a raw URL, returning the first noise heuristic it trips
pub fn classify_noise(raw: &str) -> Option<NoiseKind> {
    if CALENDAR_DATE.is_match(raw) {
        Some(NoiseKind::CalendarDate)
    } else if CONTENT_SECTION.is_match(raw) {
        Some(NoiseKind::ContentSection)
    } else if TRAILING_NUMERIC_ID.is_match(raw) {
        Some(NoiseKind::TrailingNumericId)
    } else if NUMERIC_ID_WITH_EXTENSION.is_match(raw) {
        Some(NoiseKind::NumericIdWithExtension)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_dates() {
        assert_eq!(classify_noise("http://b.com/blog/2024-01-15"), Some(NoiseKind::CalendarDate));
        assert_eq!(classify_noise("http://b.com/archive/2024/1/5/"), Some(NoiseKind::CalendarDate));
        assert_eq!(classify_noise("http://b.com/d/24-12-31"), Some(NoiseKind::CalendarDate));
    }

    #[test]
    fn test_content_sections() {
        assert_eq!(classify_noise("http://a.com/blog/one"), Some(NoiseKind::ContentSection));
        assert_eq!(classify_noise("http://a.com/en/products/x"), Some(NoiseKind::ContentSection));
        assert_eq!(classify_noise("http://a.com/careers/"), Some(NoiseKind::ContentSection));
    }

    #[test]
    fn test_section_requires_trailing_slash() {
        assert_eq!(classify_noise("http://a.com/blog"), None);
        assert_eq!(classify_noise("http://a.com/blogger/x"), None);
        assert_eq!(classify_noise("http://a.com/myblog/x"), None);
    }

    #[test]
    fn test_numeric_ids() {
        assert_eq!(classify_noise("http://a.com/item/1234"), Some(NoiseKind::TrailingNumericId));
        assert_eq!(
            classify_noise("http://a.com/news/1234.html"),
            Some(NoiseKind::NumericIdWithExtension)
        );
        assert_eq!(classify_noise("http://a.com/item/1234/"), None);
        assert_eq!(classify_noise("http://a.com/item/v2x"), None);
    }

    #[test]
    fn test_first_match_wins() {
        // Date inside a content section reports the date rule
        assert_eq!(classify_noise("http://a.com/blog/2024-01-15"), Some(NoiseKind::CalendarDate));
    }

    #[test]
    fn test_clean_urls() {
        assert_eq!(classify_noise("http://a.com/"), None);
        assert_eq!(classify_noise("http://a.com/login?next=home"), None);
        assert_eq!(classify_noise("http://a.com/api/v1/users?id=5"), None);
    }
}
