use std::io::{self, Write};

use crate::types::NewsItem;

/// One-line JSON array of `{title, content}` objects. Non-ASCII text is
/// written as-is, not `\u` escaped.
pub fn to_json(items: &[NewsItem]) -> serde_json::Result<String> {
    serde_json::to_string(items)
}

/// Write the array followed by a newline and flush.
pub fn emit<W: Write>(items: &[NewsItem], mut out: W) -> io::Result<()> {
    serde_json::to_writer(&mut out, items)?;
    writeln!(out)?;
    out.flush()
}
