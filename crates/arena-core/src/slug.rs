//! Slug derivation for public content URLs.

use chrono::Utc;

/// Derive a URL-safe slug from a title: Turkish characters are folded to
/// ASCII, everything outside `[a-z0-9 -]` is dropped, and whitespace and
/// hyphen runs collapse to single hyphens.
pub fn slugify(title: &str) -> String {
    let mut folded = String::with_capacity(title.len());
    for c in title.trim().chars() {
        let c = match c {
            'ğ' | 'Ğ' => 'g',
            'ü' | 'Ü' => 'u',
            'ş' | 'Ş' => 's',
            'ı' | 'İ' => 'i',
            'ö' | 'Ö' => 'o',
            'ç' | 'Ç' => 'c',
            other => other.to_ascii_lowercase(),
        };
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            folded.push(c);
        } else if c.is_whitespace() {
            folded.push(' ');
        }
        // Everything else is dropped.
    }

    let mut slug = String::with_capacity(folded.len());
    let mut last_hyphen = true; // suppress a leading hyphen
    for c in folded.chars() {
        let c = if c == ' ' { '-' } else { c };
        if c == '-' {
            if !last_hyphen {
                slug.push('-');
            }
            last_hyphen = true;
        } else {
            slug.push(c);
            last_hyphen = false;
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// [`slugify`] plus a 4-digit suffix taken from the current millisecond
/// timestamp, matching the published slugs of imported content. Uniqueness
/// is expected, not enforced.
pub fn unique_slug(title: &str) -> String {
    let suffix = Utc::now().timestamp_millis().rem_euclid(10_000);
    let base = slugify(title);
    if base.is_empty() {
        format!("{suffix:04}")
    } else {
        format!("{base}-{suffix:04}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_turkish_characters() {
        assert_eq!(slugify("Şampiyonluk Yolu"), "sampiyonluk-yolu");
        assert_eq!(slugify("GÜÇLÜ KADRO"), "guclu-kadro");
        assert_eq!(slugify("İstanbul'da Açılış"), "istanbulda-acilis");
    }

    #[test]
    fn collapses_separators_and_strips_symbols() {
        assert_eq!(slugify("  Arena   Bulls -- 2024!  "), "arena-bulls-2024");
        assert_eq!(slugify("%100 Destek"), "100-destek");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn unique_slug_appends_four_digit_suffix() {
        let slug = unique_slug("Test Haber");
        let (base, suffix) = slug.rsplit_once('-').unwrap();
        assert_eq!(base, "test-haber");
        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn unique_slug_of_empty_title_is_just_the_suffix() {
        let slug = unique_slug("!!!");
        assert_eq!(slug.len(), 4);
        assert!(slug.chars().all(|c| c.is_ascii_digit()));
    }
}
