//! Reasoning trace navigation
//!
//! A trace is a JSON object whose `chain_of_thought` holds a list of steps.
//! Steps may carry `tool_executions`, each describing one tool call with
//! its `params` and `output`. This module pulls those records out, flattens
//! them for tabular export, and copies the top-level metadata fields.

use serde::Serialize;
use serde_json::Value;

use crate::core::constants::{fields, messages};
use crate::core::error::Result;
use crate::reporting::formatter::{CsvRecord, to_compact_string};
use crate::reporting::logging;

/// Top-level metadata copied into the report
///
/// Each field holds the trace's value as-is, or an empty string when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub location: Value,
    pub time: Value,
    pub error: Value,
    pub observation: Value,
}

/// A tool execution reduced to four text cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatToolExecution {
    pub tool_name: String,
    pub method_name: String,
    pub params: String,
    pub output: String,
}

impl CsvRecord for FlatToolExecution {
    fn fields(&self) -> Vec<&str> {
        vec![
            self.tool_name.as_str(),
            self.method_name.as_str(),
            self.params.as_str(),
            self.output.as_str(),
        ]
    }
}

fn field<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value.as_object().and_then(|map| map.get(name))
}

fn field_or_empty_string(value: &Value, name: &str) -> Value {
    field(value, name)
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()))
}

pub fn extract_metadata(document: &Value) -> Metadata {
    Metadata {
        location: field_or_empty_string(document, fields::LOCATION),
        time: field_or_empty_string(document, fields::TIME),
        error: field_or_empty_string(document, fields::ERROR),
        observation: field_or_empty_string(document, fields::OBSERVATION),
    }
}

/// The trace's `chain_of_thought`, or an empty list with a warning when absent.
///
/// Non-object documents have no fields, so they always take the warning path.
pub fn extract_chain_of_thought(document: &Value) -> Value {
    match field(document, fields::CHAIN_OF_THOUGHT) {
        Some(chain) => chain.clone(),
        None => {
            logging::log_warning(messages::MISSING_CHAIN_OF_THOUGHT);
            Value::Array(Vec::new())
        }
    }
}

/// Collect the tool executions of every step, in step order.
///
/// Steps that are not objects, and `tool_executions` values that are not
/// lists, contribute nothing.
pub fn tool_executions_in_chain(chain: &Value) -> Vec<Value> {
    let Some(steps) = chain.as_array() else {
        logging::log_skipped(fields::CHAIN_OF_THOUGHT, "is not a list");
        return Vec::new();
    };

    let mut executions = Vec::new();
    for (index, step) in steps.iter().enumerate() {
        match field(step, fields::TOOL_EXECUTIONS) {
            Some(Value::Array(records)) => {
                logging::log_step_executions(index, records.len());
                executions.extend(records.iter().cloned());
            }
            Some(_) => logging::log_skipped(
                &format!("step {index} {}", fields::TOOL_EXECUTIONS),
                "is not a list",
            ),
            None => {}
        }
    }

    executions
}

/// Extract every tool execution record from a trace
pub fn extract_tool_executions(document: &Value) -> Vec<Value> {
    tool_executions_in_chain(&extract_chain_of_thought(document))
}

/// Render a cell: strings as-is, anything else as compact JSON
fn text_cell(value: Option<&Value>) -> Result<String> {
    match value {
        None => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => to_compact_string(other),
    }
}

/// Flatten a record so its nested `params` and `output` fit in a CSV cell.
///
/// Missing fields default to `""`, `""`, `{}` and `[]`.
pub fn flatten_tool_execution(record: &Value) -> Result<FlatToolExecution> {
    let empty_params = Value::Object(serde_json::Map::new());
    let empty_output = Value::Array(Vec::new());

    Ok(FlatToolExecution {
        tool_name: text_cell(field(record, fields::TOOL_NAME))?,
        method_name: text_cell(field(record, fields::METHOD_NAME))?,
        params: to_compact_string(field(record, fields::PARAMS).unwrap_or(&empty_params))?,
        output: to_compact_string(field(record, fields::OUTPUT).unwrap_or(&empty_output))?,
    })
}
