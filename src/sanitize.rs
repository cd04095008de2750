//! Node identifier sanitization
//!
//! DOT labels are free text ("Base de données", "API Gateway"), Mermaid node
//! ids are not. This turns the former into the latter.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Identifier returned when nothing usable survives sanitization
pub const FALLBACK_ID: &str = "node";

/// Convert an arbitrary label into an identifier usable as a Mermaid node name.
///
/// Accents are removed by decomposing and dropping combining marks, every
/// remaining character outside `[A-Za-z0-9]` becomes `_`, runs of `_` are
/// collapsed and trimmed. Ids that would not start with a letter get an `N_`
/// prefix. The result always matches `^[A-Za-z][A-Za-z0-9_]*$`.
pub fn sanitize_node_id(label: &str) -> String {
    let mut id = String::with_capacity(label.len());
    let mut pending_underscore = false;

    for ch in label.nfkd().filter(|c| !is_combining_mark(*c)) {
        if ch.is_ascii_alphanumeric() {
            // Leading separators are dropped, inner runs collapse to one
            if pending_underscore && !id.is_empty() {
                id.push('_');
            }
            pending_underscore = false;
            id.push(ch);
        } else {
            pending_underscore = true;
        }
    }

    if id.is_empty() {
        return FALLBACK_ID.to_string();
    }

    if !id.starts_with(|c: char| c.is_ascii_alphabetic()) {
        id.insert_str(0, "N_");
    }

    id
}
