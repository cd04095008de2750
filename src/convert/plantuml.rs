//! PlantUML to Mermaid
//!
//! Line-oriented rewriting of sequence, class and state diagrams. Each line
//! is trimmed, `@startuml`/`@enduml` and blank lines are dropped, and what is
//! left is emitted with a four space indent under the Mermaid header.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{RewriteRule, RuleSet};
use super::{Converted, DiagramSubtype, INDENT, Warnings};

const DATABASE_NOTE: &str = "<!-- WARNING: PlantUML \"database\" participants were converted to plain participants (not supported natively by Mermaid) -->";

/// `participant "Long name" as Alias` with anything after the alias kept
static PARTICIPANT_ALIAS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^participant\s+"([^"]+)"\s+as\s+(\w+)(.*)$"#).expect("valid regex")
});

/// Message arrows. The dashed rule must run first, otherwise the solid rule
/// would see the `->` inside `-->`.
static SEQUENCE_ARROWS: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(vec![
        RewriteRule::new("dashed arrow", r#"([\w"'])\s*-->\s*([\w"'])"#, "${1} -->> ${2}"),
        RewriteRule::new("solid arrow", r#"([\w"'])\s*->\s*([\w"'])"#, "${1} ->> ${2}"),
    ])
});

static CLASS_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(vec![
        RewriteRule::new("cardinality link", r#""\s*--\s*""#, r#"" --> ""#),
        RewriteRule::new("label direction", r"\s*>\s*$", ""),
    ])
});

/// Guess the PlantUML diagram type from keywords.
///
/// A class body wins over an initial state marker when both appear.
pub fn detect_plantuml_type(content: &str) -> DiagramSubtype {
    if content.contains("class ") && content.contains('{') {
        DiagramSubtype::Class
    } else if content.contains("[*]") {
        DiagramSubtype::State
    } else {
        DiagramSubtype::Sequence
    }
}

/// Trimmed, non-blank lines without the `@startuml`/`@enduml` delimiters
fn body_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !matches!(*line, "@startuml" | "@enduml"))
}

fn render(header: &str, lines: impl IntoIterator<Item = String>) -> String {
    let mut out = String::from(header);
    for line in lines {
        if line.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(INDENT);
        out.push_str(&line);
    }
    out
}

/// Replace a leading keyword, keeping the rest of the line
fn replace_keyword(line: &str, keyword: &str, with: &str) -> Option<String> {
    line.strip_prefix(keyword)
        .map(|rest| format!("{}{}", with, rest))
}

/// Convert a sequence diagram.
///
/// `actor` and `database` both become `participant`, quoted participant
/// names are moved behind their alias, and arrows get Mermaid's message
/// heads. Any `database` produces a warning.
pub fn convert_sequence(content: &str) -> Converted {
    let mut warnings = Warnings::default();

    let lines: Vec<String> = body_lines(content)
        .map(|line| {
            let mut line = line.to_string();

            if let Some(rewritten) = replace_keyword(&line, "database ", "participant ") {
                warnings.push_once(DATABASE_NOTE);
                line = rewritten;
            }
            if let Some(rewritten) = replace_keyword(&line, "actor ", "participant ") {
                line = rewritten;
            }

            if let Some(caps) = PARTICIPANT_ALIAS_RE.captures(&line) {
                line = format!("participant {} as {}{}", &caps[2], &caps[1], &caps[3]);
            }

            SEQUENCE_ARROWS.apply(&line)
        })
        .collect();

    (render("sequenceDiagram", lines), warnings.into_text())
}

/// Convert a class diagram.
///
/// Class bodies are copied as is. Relations between quoted cardinalities
/// become directed links and the trailing `>` reading direction of a
/// relation label is dropped.
pub fn convert_class(content: &str) -> Converted {
    let lines = body_lines(content).map(|line| CLASS_RULES.apply(line));
    (render("classDiagram", lines), None)
}

/// Convert a state diagram. The syntaxes already agree.
pub fn convert_state(content: &str) -> Converted {
    let lines = body_lines(content).map(str::to_string);
    (render("stateDiagram-v2", lines), None)
}
