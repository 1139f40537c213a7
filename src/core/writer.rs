use crate::domain::model::Record;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Renders records as a JSON array, `indent` spaces per nesting level.
/// Non-ASCII text is written as-is.
pub fn render_json(records: &[Record], indent: usize) -> Result<Vec<u8>> {
    let indent_bytes = vec![b' '; indent];
    let formatter = PrettyFormatter::with_indent(&indent_bytes);
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}
