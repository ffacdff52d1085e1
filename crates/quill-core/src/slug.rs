//! URL slug derivation.

/// Turn a title into a URL-safe slug: lowercase, trimmed, whitespace runs
/// collapsed to single hyphens, everything outside `[a-z0-9_-]` dropped,
/// no leading/trailing/repeated hyphens.
///
/// Returns an empty string when nothing survives; callers must treat that
/// as a validation failure rather than a usable slug.
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());

    for ch in lowered.chars() {
        if ch.is_whitespace() || ch == '-' {
            if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            slug.push(ch);
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
