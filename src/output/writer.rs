//! JSON file writer
//!
//! The export format is a single pretty-printed JSON document with 4-space
//! indentation, written to `<filename>.json`.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Resolve the output path for a filename stem
pub fn json_path(filename: &str) -> PathBuf {
    PathBuf::from(format!("{filename}.json"))
}

/// Serialize a value as pretty-printed JSON with 4-space indentation
pub fn to_json_pretty(value: &impl Serialize) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| Error::output(format!("non-UTF-8 JSON output: {e}")))
}

/// Write a value to a file as pretty-printed JSON
///
/// Creates or truncates the file. The handle is flushed and released on all
/// exit paths.
pub fn write_json_pretty(path: impl AsRef<Path>, value: &impl Serialize) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(|e| Error::Output {
        message: format!("Failed to create file '{}': {e}", path.as_ref().display()),
    })?;

    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut serializer)?;

    writer.flush().map_err(|e| Error::Output {
        message: format!("Failed to flush '{}': {e}", path.as_ref().display()),
    })?;

    Ok(())
}
