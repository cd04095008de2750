//! Core Conversion Logic
//!
//! File handling around the pure block converters.

pub mod diagnostics;
pub mod document;

pub use diagnostics::ConvertError;
pub use document::{
    ConversionReport, ConvertOptions, ConvertedDocument, convert_document, convert_file,
    convert_path, convert_to_string, output_path, read_document,
};
