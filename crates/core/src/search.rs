//! Search filter helpers.
//!
//! Free-text search matches case-insensitively against name, category,
//! and description via `ILIKE`; this module builds the pattern so user
//! input cannot smuggle in its own wildcards.

/// Turn user input into a `%...%` `ILIKE` pattern.
///
/// - Surrounding whitespace is trimmed.
/// - `%`, `_`, and `\` are escaped so they match literally.
/// - Empty or whitespace-only input returns `None` (no text constraint).
pub fn build_like_pattern(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut escaped = String::with_capacity(trimmed.len() + 2);
    for c in trimmed.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Some(format!("%{escaped}%"))
}
