//! Diagram Conversion
//!
//! Pure functions from PlantUML/DOT source to Mermaid source. Nothing here
//! fails: a converter that cannot make sense of its input still returns
//! Mermaid text, and says so through a warning.

pub mod dot;
pub mod engine;
pub mod plantuml;
pub mod rules;

use std::fmt;

pub use engine::{convert_block, convert_diagram, convert_subtype, detect_subtype};

/// Indentation of every body line under a Mermaid header
pub const INDENT: &str = "    ";

/// Output of a single converter: Mermaid text and an optional warning
pub type Converted = (String, Option<String>);

/// Diagram family detected from block content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramSubtype {
    Sequence,
    Class,
    State,
    Digraph,
    Graph,
}

impl DiagramSubtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::Class => "class",
            Self::State => "state",
            Self::Digraph => "digraph",
            Self::Graph => "graph",
        }
    }
}

impl fmt::Display for DiagramSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of routing one block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConversionResult {
    /// Mermaid source, `None` when the block type is not supported
    pub mermaid: Option<String>,
    /// HTML comment line(s) flagging a lossy conversion
    pub warning: Option<String>,
}

impl ConversionResult {
    pub fn converted(mermaid: String, warning: Option<String>) -> Self {
        Self {
            mermaid: Some(mermaid),
            warning,
        }
    }

    pub fn unsupported(tag: &str) -> Self {
        Self {
            mermaid: None,
            warning: Some(format!("<!-- Unsupported diagram type: {} -->", tag)),
        }
    }

    /// Whether the conversion lost information
    pub fn is_approximate(&self) -> bool {
        self.mermaid.is_some() && self.warning.is_some()
    }
}

/// Warning notes collected by a converter
#[derive(Debug, Default)]
pub(crate) struct Warnings {
    notes: Vec<&'static str>,
}

impl Warnings {
    pub(crate) fn push(&mut self, note: &'static str) {
        self.notes.push(note);
    }

    pub(crate) fn push_once(&mut self, note: &'static str) {
        if !self.notes.contains(&note) {
            self.notes.push(note);
        }
    }

    /// Notes joined one per line, `None` when there are none
    pub(crate) fn into_text(self) -> Option<String> {
        if self.notes.is_empty() {
            None
        } else {
            Some(self.notes.join("\n"))
        }
    }
}
