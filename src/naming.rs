//! Registry name derivation — the first-dot stem rule.
//!
//! Every registry (partials, data, helpers, pages) keys its entries by the
//! same rule: a file's name is its root-relative path truncated at the first
//! `.`. The first dot is the name/extension boundary, always:
//!
//! - `header.hbs` → `header`
//! - `nested/deep.hbs` → `nested/deep`
//! - `card.tmpl.hbs` → `card` (everything after the first dot is extension)
//! - `Makefile` → `Makefile` (no dot, whole path is the name)
//!
//! Because the rule applies to the whole relative path, a *directory* name
//! containing a dot truncates the derived name (`v1.2/page.hbs` → `v1`).
//! This is a documented limitation, kept so names stay consistent with the
//! partial-reference syntax pages use.

/// Derive the registry name from a root-relative path.
pub fn stem(rel_path: &str) -> &str {
    match rel_path.find('.') {
        Some(dot) => &rel_path[..dot],
        None => rel_path,
    }
}
