//! Slug derivation.
//!
//! Two rules exist: [`slugify`] for ingested documents and the looser
//! [`simple_slug`] used for generated drafts.

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block, U+0300..=U+036F.
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Turn a title into a URL-safe slug.
///
/// Lower-cases, strips diacritics via NFD, maps whitespace runs to `-`,
/// drops anything outside `[A-Za-z0-9_-]`, collapses repeated hyphens and
/// trims them from both ends. Idempotent.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for c in text.to_lowercase().nfd().filter(|c| !is_diacritic(*c)) {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if is_slug_char(c) {
            slug.push(c);
        }
    }

    let mut collapsed = String::with_capacity(slug.len());
    for c in slug.chars() {
        if c == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(c);
    }

    collapsed.trim_matches('-').to_string()
}

/// Slug rule for generated drafts: lower-case, spaces to hyphens, drop
/// everything outside `[A-Za-z0-9_-]`. No diacritic folding or collapsing.
pub fn simple_slug(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| is_slug_char(*c))
        .collect()
}
