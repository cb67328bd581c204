//! Document loading functionality.
//!
//! This module provides functions to load YAML or JSON documents from files
//! or stdin into a `Value` tree that path operations can address. Gzipped
//! input is decompressed transparently and JSON Lines files load as an array
//! with one element per line.

use crate::document::convert::{from_serde_value, parse_document};
use crate::document::value::Value;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Loads and parses a YAML or JSON file from the filesystem.
///
/// Files ending in `.gz` are decompressed first. Files named `*.jsonl` or
/// `*.ndjson` (optionally followed by `.gz`) are read line by line.
///
/// # Examples
///
/// ```no_run
/// use pathquill::file::loader::load_document_file;
///
/// let doc = load_document_file("config.yaml").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - The gzip stream is corrupted
/// - The contents are not valid YAML/JSON
pub fn load_document_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    debug!(
        path = %path_ref.display(),
        bytes = content.len(),
        gzipped = is_gzipped,
        "loaded document"
    );

    if determine_jsonl_format(path_ref) {
        parse_jsonl_content(&content)
    } else {
        parse_document(&content)
    }
}

/// Loads and parses a document from standard input.
///
/// Gzip input is detected by its magic bytes. Content that is not a single
/// YAML/JSON document is retried as JSON Lines.
pub fn load_document_from_stdin() -> Result<Value> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in stdin")?
    };

    if let Ok(value) = parse_document(&content) {
        return Ok(value);
    }

    parse_jsonl_content(&content)
        .context("Failed to parse stdin: input is neither a YAML/JSON document nor JSON Lines")
}

/// Parses newline-delimited JSON into an array, one element per line.
///
/// Blank lines are skipped.
pub fn parse_jsonl_content(content: &str) -> Result<Value> {
    let mut lines = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let value: serde_yaml::Value = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", line_num + 1))?;
        lines.push(from_serde_value(&value));
    }

    if lines.is_empty() {
        anyhow::bail!("No valid JSON found in JSONL content");
    }

    Ok(Value::Array(lines))
}

/// Checks for a .jsonl or .ndjson name, ignoring a trailing .gz.
fn determine_jsonl_format<P: AsRef<Path>>(path: P) -> bool {
    let path_str = path.as_ref().to_string_lossy();
    let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);
    base.ends_with(".jsonl") || base.ends_with(".ndjson")
}

fn read_gzipped_file(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file {}", path.display()))?;
    decompress_gzip_bytes(&bytes)
        .with_context(|| format!("Failed to decompress {} - file may be corrupted", path.display()))
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzip data")?;
    Ok(content)
}
