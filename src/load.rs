// ==============================================================================
// Loading Schema Trees from JSON
// ==============================================================================
//
// The schema tree is normally built in Rust, but the CLI (and any caller that
// stores trees as data) reads it from JSON. Loading only checks the JSON
// shape; structural rules are still left to `render`, so a tree with an empty
// message name loads fine and fails later.

use miette::NamedSource;
use tracing::debug;

use crate::error::LoadDiagnostic;
use crate::model::Spec;

/// Deserialize a [`Spec`] from JSON.
///
/// `source_name` labels the source in diagnostics (a file path or `"<stdin>"`).
/// Errors carry the source text and point at the offending line and column.
pub fn spec_from_json(source: &str, source_name: &str) -> miette::Result<Spec> {
    let spec: Spec = serde_json::from_str(source).map_err(|e| {
        let offset = byte_offset(source, e.line(), e.column());
        let text = e.to_string();
        let position = format!(" at line {} column {}", e.line(), e.column());
        let message = text.strip_suffix(&position).unwrap_or(&text).to_string();
        miette::Report::new(LoadDiagnostic {
            src: NamedSource::new(source_name, source.to_string()),
            span: (offset, 0).into(),
            message,
        })
    })?;

    debug!(
        source = source_name,
        package = %spec.package,
        messages = spec.messages.len(),
        "loaded schema tree"
    );
    Ok(spec)
}

/// Convert serde_json's 1-based line and column into a byte offset, clamped to
/// the source and snapped back to a char boundary.
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let mut offset = (line_start + column.saturating_sub(1)).min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
