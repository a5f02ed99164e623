//! Output formatting for combine runs.
//!
//! The block and manifest shapes are consumed by downstream tooling, so every
//! byte here is fixed. File content is never altered.

use crate::CombineSummary;
use std::io::{self, Write};

/// Header line preceding the list of processed paths.
pub const MANIFEST_HEADER: &str = "--- Processed Files ---";

/// Marker written before a file's content.
pub fn start_marker(relative_path: &str) -> String {
    format!("\n--- Start of {} ---\n\n", relative_path)
}

/// Marker written after a file's content.
pub fn end_marker(relative_path: &str) -> String {
    format!("\n\n--- End of {} ---\n", relative_path)
}

/// Formats one delimited block.
pub fn format_block(relative_path: &str, content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 2 * relative_path.len() + 40);
    out.push_str(&start_marker(relative_path));
    out.push_str(content);
    out.push_str(&end_marker(relative_path));
    out
}

/// Formats the trailing manifest section.
pub fn format_manifest<S: AsRef<str>>(paths: &[S]) -> String {
    let mut out = String::with_capacity(64);
    out.push('\n');
    out.push_str(MANIFEST_HEADER);
    out.push('\n');
    for path in paths {
        out.push_str(path.as_ref());
        out.push('\n');
    }
    out
}

/// The two human-readable lines printed after a successful run.
pub fn summary_lines(summary: &CombineSummary) -> [String; 2] {
    [
        format!(
            "Files have been combined into {}.",
            summary.output_path.display()
        ),
        format!("Extensions used: {}", summary.extensions.join(", ")),
    ]
}

pub(crate) fn write_block<W: Write>(
    out: &mut W,
    relative_path: &str,
    content: &str,
) -> io::Result<()> {
    out.write_all(start_marker(relative_path).as_bytes())?;
    out.write_all(content.as_bytes())?;
    out.write_all(end_marker(relative_path).as_bytes())
}

pub(crate) fn write_manifest<W: Write, S: AsRef<str>>(out: &mut W, paths: &[S]) -> io::Result<()> {
    out.write_all(format_manifest(paths).as_bytes())
}
