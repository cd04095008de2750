//! Document Conversion
//!
//! Reads a Markdown file, replaces its diagram blocks with Mermaid blocks and
//! writes the result next to it. The output is assembled in memory, gap by
//! gap in document order, and written with a single call.

use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::diagnostics::ConvertError;
use crate::convert::convert_block;
use crate::parser::extract_code_blocks;

/// Suffix replacing `.md` in the output file name
pub const DEFAULT_SUFFIX: &str = "mmd.md";

/// Opening fence of a converted block
const MERMAID_FENCE: &str = "```mermaid";

/// Converted text plus what happened to its blocks
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedDocument {
    pub text: String,
    pub blocks_found: usize,
    pub converted: usize,
    pub approximate: usize,
    pub skipped: usize,
}

/// Summary of a file conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub blocks_found: usize,
    pub converted: usize,
    pub approximate: usize,
    pub skipped: usize,
}

impl ConversionReport {
    fn new(input: &Path, output: Option<PathBuf>, document: &ConvertedDocument) -> Self {
        Self {
            input: input.to_path_buf(),
            output,
            blocks_found: document.blocks_found,
            converted: document.converted,
            approximate: document.approximate,
            skipped: document.skipped,
        }
    }
}

/// Where and how to write the converted document
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Output file name suffix, without the leading dot
    pub suffix: String,
    /// Explicit output path, overriding the derived one
    pub output: Option<PathBuf>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            output: None,
        }
    }
}

impl ConvertOptions {
    /// Output path for a given input
    pub fn output_for(&self, input: &Path) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| output_path(input, &self.suffix))
    }
}

/// Sibling path of `input` with its extension replaced by `.{suffix}`.
///
/// `docs/report.md` becomes `docs/report.mmd.md` with the default suffix.
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(suffix);
    input.with_file_name(name)
}

fn has_markdown_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Replace every diagram block of `content` with its Mermaid conversion.
///
/// Text outside the converted blocks is copied byte for byte; a document
/// without diagram blocks comes back unchanged.
pub fn convert_document(content: &str) -> ConvertedDocument {
    let blocks = extract_code_blocks(content);
    let mut text = String::with_capacity(content.len());
    let mut cursor = 0;
    let mut converted = 0;
    let mut approximate = 0;
    let mut skipped = 0;

    for block in &blocks {
        text.push_str(&content[cursor..block.start]);
        cursor = block.end;

        let result = convert_block(block);
        let Some(mermaid) = result.mermaid else {
            log::debug!("leaving {} block at byte {} untouched", block.kind, block.start);
            text.push_str(&content[block.span()]);
            skipped += 1;
            continue;
        };

        if let Some(warning) = &result.warning {
            log::warn!(
                "approximate conversion of {} block at byte {}",
                block.kind,
                block.start
            );
            text.push_str(warning);
            text.push('\n');
            approximate += 1;
        }

        text.push_str(MERMAID_FENCE);
        text.push('\n');
        text.push_str(&mermaid);
        text.push_str("\n```");
        converted += 1;
        log::debug!("converted {} block at byte {} to mermaid", block.kind, block.start);
    }
    text.push_str(&content[cursor..]);

    ConvertedDocument {
        text,
        blocks_found: blocks.len(),
        converted,
        approximate,
        skipped,
    }
}

/// Check that `path` is an existing `.md` file and read it as UTF-8
pub fn read_document(path: &Path) -> Result<String, ConvertError> {
    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        // `file.md/child.md` does not exist either
        ErrorKind::NotFound | ErrorKind::NotADirectory => {
            ConvertError::NotFound(path.to_path_buf())
        }
        _ => ConvertError::UnexpectedFailure {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if !metadata.is_file() {
        return Err(ConvertError::InvalidTarget(path.to_path_buf()));
    }

    if !has_markdown_extension(path) {
        return Err(ConvertError::InvalidExtension(path.to_path_buf()));
    }

    log::info!("reading {}", path.display());
    let bytes = fs::read(path).map_err(|source| ConvertError::UnexpectedFailure {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|source| ConvertError::DecodeFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert the file at `path` and write the result.
pub fn convert_path(
    path: &Path,
    options: &ConvertOptions,
) -> Result<ConversionReport, ConvertError> {
    let content = read_document(path)?;
    let document = convert_document(&content);

    if document.blocks_found == 0 {
        log::info!("no PlantUML/DOT diagram found, copying as is");
    } else {
        log::info!("{} diagram(s) found", document.blocks_found);
    }

    let output = options.output_for(path);
    fs::write(&output, &document.text).map_err(|source| ConvertError::WriteFailure {
        path: output.clone(),
        source,
    })?;
    log::info!("wrote {}", output.display());

    Ok(ConversionReport::new(path, Some(output), &document))
}

/// Convert a file next to itself with default options.
///
/// Prints a diagnostic and returns `false` instead of failing.
pub fn convert_file(path: impl AsRef<Path>) -> bool {
    match convert_path(path.as_ref(), &ConvertOptions::default()) {
        Ok(report) => {
            if let Some(output) = &report.output {
                println!("created {}", output.display());
            }
            true
        }
        Err(err) => {
            log::debug!("{} failed on {}", err.kind(), err.path().display());
            println!("error: {}", err);
            false
        }
    }
}

/// Convert a file without writing anything, for printing to stdout
pub fn convert_to_string(path: &Path) -> Result<(String, ConversionReport), ConvertError> {
    let content = read_document(path)?;
    let document = convert_document(&content);
    let report = ConversionReport::new(path, None, &document);
    Ok((document.text, report))
}
