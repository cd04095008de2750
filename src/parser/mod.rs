//! Markdown Parser
//!
//! Locates the diagram blocks of a Markdown document. Only fenced code blocks
//! are recognised; everything else is opaque text that is copied through.

pub mod ast;
pub mod fence;

pub use ast::{BlockKind, CodeBlock};
pub use fence::extract_code_blocks;
