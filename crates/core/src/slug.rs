//! URL-safe slug derivation for categories and courses.
//!
//! Slugs are the external lookup key for those resources, so derivation
//! must be deterministic: lowercase ASCII alphanumerics, with any run of
//! other characters collapsed into a single hyphen and no leading or
//! trailing hyphens. A slug is derived once at creation time when the
//! client does not supply one; updates never recompute it.

/// Derive a slug from a human-readable name or title.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn test_lowercases_and_hyphenates() {
        assert_eq!(slugify("Rust for Beginners"), "rust-for-beginners");
    }

    #[test]
    fn test_collapses_punctuation_runs() {
        assert_eq!(slugify("C++ & Systems -- Part 2!"), "c-systems-part-2");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(slugify("  Hello World  "), "hello-world");
        assert_eq!(slugify("---x---"), "x");
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(slugify("Programación Web"), "programaci-n-web");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
