//! Fenced code block extraction
//!
//! A single regex scan over the document. Every tagged fence is consumed by
//! the scan, even when its language is not one we convert, so that a closing
//! fence can never be mistaken for the opener of the next block.

use std::sync::LazyLock;

use regex::Regex;

use super::ast::{BlockKind, CodeBlock};

/// Opening fence with a word tag, lazily matched up to the first bare closing fence
static CODE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^```(\w+)\s*\n(.*?)^```[ \t]*$").expect("valid regex")
});

/// Extract every `plantuml`, `dot` and `graphviz` block in document order.
///
/// Blocks never overlap and their spans cover both fence lines. Unclosed
/// fences and untagged blocks simply produce nothing.
pub fn extract_code_blocks(content: &str) -> Vec<CodeBlock> {
    CODE_BLOCK_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let tag = caps.get(1)?.as_str();
            let Some(kind) = BlockKind::from_tag(tag) else {
                log::trace!("skipping `{}` block at byte {}", tag, whole.start());
                return None;
            };

            Some(CodeBlock {
                kind,
                content: caps.get(2)?.as_str().to_string(),
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}
