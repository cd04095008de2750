//! Conversion Router
//!
//! Picks the converter for a block from its fence tag and, for PlantUML and
//! DOT, from the diagram subtype detected in its content.

use super::{ConversionResult, DiagramSubtype, dot, plantuml};
use crate::parser::{BlockKind, CodeBlock};

/// Detect the subtype of a diagram of the given kind
pub fn detect_subtype(kind: BlockKind, content: &str) -> DiagramSubtype {
    if kind.is_dot() {
        dot::detect_dot_type(content)
    } else {
        plantuml::detect_plantuml_type(content)
    }
}

/// Run the converter matching a subtype
pub fn convert_subtype(subtype: DiagramSubtype, content: &str) -> ConversionResult {
    let (mermaid, warning) = match subtype {
        DiagramSubtype::Sequence => plantuml::convert_sequence(content),
        DiagramSubtype::Class => plantuml::convert_class(content),
        DiagramSubtype::State => plantuml::convert_state(content),
        DiagramSubtype::Digraph => dot::convert_digraph(content),
        DiagramSubtype::Graph => dot::convert_graph(content),
    };

    ConversionResult::converted(mermaid, warning)
}

/// Convert diagram source declared with the given fence tag.
///
/// Tags other than `plantuml`, `dot` and `graphviz` yield no Mermaid text
/// and an "unsupported type" marker.
pub fn convert_diagram(tag: &str, content: &str) -> ConversionResult {
    match BlockKind::from_tag(tag) {
        Some(kind) => {
            let subtype = detect_subtype(kind, content);
            log::debug!("{} block detected as {}", kind, subtype);
            convert_subtype(subtype, content)
        }
        None => ConversionResult::unsupported(tag),
    }
}

/// Convert an extracted block
pub fn convert_block(block: &CodeBlock) -> ConversionResult {
    convert_diagram(block.kind.as_str(), &block.content)
}
