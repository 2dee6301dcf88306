use serde::Deserialize;
use serde_json::Value;

use crate::core::error::Result;
use crate::reporting::logging;

use std::fs;
use std::path::Path;

/// Read and parse a JSON document, returning the typed error on failure.
///
/// Invalid UTF-8 surfaces as an IO error, malformed JSON as a JSON error.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let document = parse_document(&content)?;
    logging::log_document_loaded(path, content.len());
    Ok(document)
}

/// Parse JSON text with no nesting limit.
///
/// The stack grows on demand while deserializing, and numbers keep their
/// exact textual form.
pub fn parse_document(content: &str) -> Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(content);
    deserializer.disable_recursion_limit();

    let document = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(document)
}

/// Load a JSON document, reporting any failure and returning `None` instead.
pub fn load_document<P: AsRef<Path>>(path: P) -> Option<Value> {
    match read_document(path) {
        Ok(document) => Some(document),
        Err(e) => {
            logging::log_error("Error loading JSON file", Some(&e));
            None
        }
    }
}

/// Whether a parsed document carries nothing worth extracting.
///
/// Null, empty containers, the empty string, `false` and zero all count as
/// "no data" and end a run before any output is written.
pub fn is_empty_document(document: &Value) -> bool {
    match document {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
