//! md2mmd
//!
//! Rewrites PlantUML and Graphviz/DOT diagrams embedded in Markdown as
//! Mermaid diagrams.
//!
//! This library provides:
//! - Fenced code block extraction
//! - Line-oriented PlantUML and DOT to Mermaid converters
//! - Document assembly and file output
//! - Configuration management

pub mod config;
pub mod convert;
pub mod core;
pub mod parser;
pub mod sanitize;

// Re-exports for clean public API
pub use config::Config;
pub use convert::{ConversionResult, DiagramSubtype, convert_diagram};
pub use crate::core::{
    ConversionReport, ConvertError, ConvertOptions, convert_document, convert_file, convert_path,
};
pub use parser::{BlockKind, CodeBlock, extract_code_blocks};
pub use sanitize::sanitize_node_id;
