//! Slug derivation: a deterministic, lowercase, URL-safe form of a name.

/// Derives a slug from a display name.
///
/// ASCII alphanumerics are lowercased and kept; every other run of
/// characters collapses to a single hyphen. Leading and trailing hyphens
/// are trimmed, so re-deriving from the same name is idempotent.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_hyphen = false;
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
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Silicon Valley Bootcamp"), "silicon-valley-bootcamp");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(slugify("Dev  Works -- Boston!"), "dev-works-boston");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  ModernTech  "), "moderntech");
    }

    #[test]
    fn rederiving_is_idempotent() {
        let first = slugify("Full-Stack @ Scale");
        assert_eq!(slugify(&first), first);
    }
}
