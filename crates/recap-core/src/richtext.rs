//! Rich-text flattening.
//!
//! Body fields in the summary graph arrive as serialized structured
//! documents (a JSON envelope with a `blocks` array, one entry per
//! paragraph). Tabular output wants a single plain-text cell, so the
//! exporter flattens every body through [`FlattenRichText`] before it
//! lands in a row.

use serde_json::Value;

/// Capability to flatten a serialized rich-text document into plain text.
///
/// Implementations must not fail: malformed input degrades to the empty
/// string so row structure is preserved.
pub trait FlattenRichText {
    /// Flattens `serialized` into plain text suitable for a single cell.
    fn flatten(&self, serialized: &str) -> String;
}

/// Default flattener for the block-based document format.
///
/// Expects `{"blocks": [{"text": "..."}, ...]}` and joins the block texts
/// with newlines. Anything else (invalid JSON, missing or malformed
/// `blocks`, non-string `text`) yields the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocFlattener;

impl FlattenRichText for DocFlattener {
    fn flatten(&self, serialized: &str) -> String {
        let Ok(doc) = serde_json::from_str::<Value>(serialized) else {
            return String::new();
        };
        let Some(blocks) = doc.get("blocks").and_then(Value::as_array) else {
            return String::new();
        };

        let mut lines = Vec::with_capacity(blocks.len());
        for block in blocks {
            match block.get("text").and_then(Value::as_str) {
                Some(text) => lines.push(text),
                None => return String::new(),
            }
        }
        lines.join("\n")
    }
}
