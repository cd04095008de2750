//! Ordered rewrite rules
//!
//! Some rewrites overlap: the pattern for `->` also sits inside `-->`. Rules
//! are therefore kept in an explicit list and applied one after the other,
//! each on the output of the previous one.

use std::borrow::Cow;

use regex::Regex;

/// A single regex substitution applied to every match in a line
#[derive(Debug)]
pub struct RewriteRule {
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl RewriteRule {
    /// Build a rule from a constant pattern.
    ///
    /// Patterns are literals compiled once at startup.
    pub fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid regex"),
            replacement,
        }
    }

    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(line, self.replacement)
    }
}

/// A fixed sequence of rules
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<RewriteRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Apply every rule in order
    pub fn apply(&self, line: &str) -> String {
        let mut line = line.to_string();

        for rule in &self.rules {
            let rewritten = match rule.apply(&line) {
                Cow::Borrowed(_) => None,
                Cow::Owned(rewritten) => Some(rewritten),
            };
            if let Some(rewritten) = rewritten {
                log::trace!("rule `{}` rewrote {:?}", rule.name, line);
                line = rewritten;
            }
        }

        line
    }
}
