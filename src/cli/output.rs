//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classifier::ClassificationResult;
use crate::cli::args::{OutputFormat, SahayakArgs};
use crate::error::Result;

/// Result structure for prompt building.
#[derive(Debug, Serialize, Deserialize)]
pub struct PromptOutput {
    pub template: String,
    pub classification: ClassificationResult,
    pub prompt: String,
}

/// Result structure for response formatting.
#[derive(Debug, Serialize, Deserialize)]
pub struct FormattedOutput {
    pub text: String,
}

/// One catalogue entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct TemplateListing {
    pub name: String,
    pub intent: String,
    pub language: String,
    pub bucket: String,
    pub is_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// One classified line of a batch file.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchEntry {
    pub line: usize,
    pub query: String,
    #[serde(flatten)]
    pub classification: ClassificationResult,
}

/// Output a structured result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &SahayakArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result, args),
    }
}

/// Output a result whose human form is a single block of text.
pub fn output_text<T: Serialize>(text: &str, result: &T, args: &SahayakArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{text}");
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Csv => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &SahayakArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match &value {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    println!("─────────────");
                }
                output_generic_human(item);
            }
        }
        _ => output_generic_human(&value),
    }
    Ok(())
}

fn output_generic_human(value: &Value) {
    match value {
        Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SahayakArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
fn output_csv<T: Serialize>(result: &T, _args: &SahayakArgs) -> Result<()> {
    let value = serde_json::to_value(result)?;
    for line in csv_lines(&value) {
        println!("{line}");
    }
    Ok(())
}

/// Flatten a JSON value into CSV lines: a header from the first object's
/// keys, then one row per object.
fn csv_lines(value: &Value) -> Vec<String> {
    let rows: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    let mut lines = Vec::new();
    let Some(headers) = rows.first().and_then(|row| row.as_object()) else {
        return rows.iter().map(|row| csv_escape(&format_value(row))).collect();
    };
    let headers: Vec<&String> = headers.keys().collect();
    lines.push(
        headers
            .iter()
            .map(|h| csv_escape(h))
            .collect::<Vec<_>>()
            .join(","),
    );

    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| csv_escape(&row.get(h.as_str()).map(format_value).unwrap_or_default()))
            .collect();
        lines.push(cells.join(","));
    }
    lines
}

fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Format a JSON value for display.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("story")), "story");
        assert_eq!(format_value(&json!(0.85)), "0.85");
        assert_eq!(format_value(&json!([1, "a"])), "[1, a]");
        assert_eq!(format_value(&Value::Null), "null");
    }

    #[test]
    fn test_csv_lines() {
        let value = json!([
            {"line": 1, "query": "kya hai, batao"},
            {"line": 2, "query": "say \"hi\""}
        ]);
        let lines = csv_lines(&value);
        assert_eq!(lines[0], "line,query");
        assert_eq!(lines[1], "1,\"kya hai, batao\"");
        assert_eq!(lines[2], "2,\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_batch_entry_flattens_classification() {
        let entry = BatchEntry {
            line: 3,
            query: "quiz".to_string(),
            classification: ClassificationResult::default(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["line"], 3);
        assert_eq!(value["intent"], "concept_explanation");
        assert_eq!(value["ageGroup"], "Secondary (11-15)");
    }
}
