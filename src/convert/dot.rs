//! Graphviz/DOT to Mermaid flowcharts
//!
//! Only quoted edges are understood. Edges are collected from the whole
//! text regardless of line structure, so statements spread over several
//! lines or packed on one line both work.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{Converted, DiagramSubtype, INDENT, Warnings};
use crate::sanitize::sanitize_node_id;

const GLOBAL_STYLE_NOTE: &str = "<!-- WARNING: global DOT styles (fillcolor, shape, etc.) were not translated, use Mermaid classDef if needed -->";
const UNDIRECTED_NOTE: &str = "<!-- WARNING: approximate conversion from an undirected DOT graph -->";
const BIDIRECTIONAL_NOTE: &str = "<!-- Bidirectional arrows (<-->) stand for undirected edges -->";
const SKIPPED_EDGES_NOTE: &str = "<!-- WARNING: some DOT edges were skipped, only edges between quoted node names are converted -->";
const LAYOUT_NOTE: &str = "<!-- WARNING: DOT layout= attribute (neato, circo, etc.) is not supported by Mermaid, automatic layout applied -->";

static DIRECTED_EDGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"]+)"\s*->\s*"([^"]+)"(?:\s*\[[^\]]*\])?(?:\s*;)?"#).expect("valid regex")
});

static UNDIRECTED_EDGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"]+)"\s*--\s*"([^"]+)"(?:\s*\[[^\]]*\])?(?:\s*;)?"#).expect("valid regex")
});

static RANKDIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)rankdir\s*=\s*(\w+)").expect("valid regex"));

static GLOBAL_NODE_STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)node\s*\[([^\]]+)\]").expect("valid regex"));

static DIGRAPH_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bdigraph\b").expect("valid regex"));

static GRAPH_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bgraph\b").expect("valid regex"));

/// Decide between directed and undirected graphs.
///
/// `digraph` is checked before `graph`; text with neither keyword is
/// treated as directed.
pub fn detect_dot_type(content: &str) -> DiagramSubtype {
    if DIGRAPH_KEYWORD_RE.is_match(content) {
        DiagramSubtype::Digraph
    } else if GRAPH_KEYWORD_RE.is_match(content) {
        DiagramSubtype::Graph
    } else {
        DiagramSubtype::Digraph
    }
}

/// Mermaid flowchart direction for the first `rankdir` in the text
pub fn detect_direction(content: &str) -> &'static str {
    let Some(caps) = RANKDIR_RE.captures(content) else {
        return "TD";
    };

    match caps[1].to_ascii_uppercase().as_str() {
        "LR" => "LR",
        "RL" => "RL",
        "BT" => "BT",
        // TB, TD and anything Graphviz would reject
        _ => "TD",
    }
}

fn edge_line(caps: &Captures<'_>, arrow: &str) -> String {
    let (from, to) = (&caps[1], &caps[2]);
    format!(
        "{}{}[\"{}\"] {} {}[\"{}\"]",
        INDENT,
        sanitize_node_id(from),
        from,
        arrow,
        sanitize_node_id(to),
        to
    )
}

fn render(header: String, edges: Vec<String>) -> String {
    std::iter::once(header)
        .chain(edges)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert a directed graph into a flowchart.
///
/// Every quoted edge becomes `id["label"] --> id["label"]` in the order the
/// edges appear. Edge attributes are discarded. Global `node [...]` styles
/// and `->` arrows left over after edge extraction trigger warnings.
pub fn convert_digraph(content: &str) -> Converted {
    let direction = detect_direction(content);
    let edges: Vec<String> = DIRECTED_EDGE_RE
        .captures_iter(content)
        .map(|caps| edge_line(&caps, "-->"))
        .collect();

    let mut warnings = Warnings::default();
    if GLOBAL_NODE_STYLE_RE.is_match(content) {
        warnings.push(GLOBAL_STYLE_NOTE);
    }
    if content.matches("->").count() > edges.len() {
        warnings.push(SKIPPED_EDGES_NOTE);
    }

    (render(format!("flowchart {}", direction), edges), warnings.into_text())
}

/// Convert an undirected graph into a flowchart with bidirectional links.
///
/// Always lossy, so the warning is never empty.
pub fn convert_graph(content: &str) -> Converted {
    let edges: Vec<String> = UNDIRECTED_EDGE_RE
        .captures_iter(content)
        .map(|caps| edge_line(&caps, "<-->"))
        .collect();

    let mut warnings = Warnings::default();
    warnings.push(UNDIRECTED_NOTE);
    warnings.push(BIDIRECTIONAL_NOTE);
    if content.contains("layout=") {
        warnings.push(LAYOUT_NOTE);
    }

    (render("flowchart TD".to_string(), edges), warnings.into_text())
}
