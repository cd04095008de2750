//! Markdown block types
//!
//! Plain data describing the diagram blocks found in a document.

use std::fmt;

/// Diagram language declared on an opening fence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `plantuml`
    PlantUml,
    /// `dot`
    Dot,
    /// `graphviz`
    Graphviz,
}

impl BlockKind {
    /// Parse a fence language tag, ignoring case.
    ///
    /// Returns `None` for tags that are not diagram languages we convert.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "plantuml" => Some(Self::PlantUml),
            "dot" => Some(Self::Dot),
            "graphviz" => Some(Self::Graphviz),
            _ => None,
        }
    }

    /// Canonical (lowercase) tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlantUml => "plantuml",
            Self::Dot => "dot",
            Self::Graphviz => "graphviz",
        }
    }

    /// Whether the block holds Graphviz/DOT source
    pub fn is_dot(&self) -> bool {
        matches!(self, Self::Dot | Self::Graphviz)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fenced diagram block and its location in the owning document
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub kind: BlockKind,
    /// Text between the opening and closing fence lines
    pub content: String,
    /// Byte offset of the opening backticks
    pub start: usize,
    /// Byte offset just past the closing fence (exclusive)
    pub end: usize,
}

impl CodeBlock {
    /// Byte range covered by the whole fenced block, fences included
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}
