//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpamprepArgs};
use crate::error::Result;

/// Result structure for the normalize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizationResult {
    pub normalized: Vec<NormalizedText>,
}

/// One input text and its normalized form.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizedText {
    pub input: String,
    pub output: String,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &SpamprepArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &SpamprepArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;
    for line in render_human(&value, 0) {
        println!("{line}");
    }
    Ok(())
}

/// Render a report as indented `key: value` lines. Nested objects become
/// titled sections and path lists are printed one per line.
fn render_human(value: &serde_json::Value, depth: usize) -> Vec<String> {
    let indent = "  ".repeat(depth);
    let mut lines = Vec::new();

    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let label = key.replace('_', " ");
                match val {
                    serde_json::Value::Object(_) => {
                        lines.push(format!("{indent}{label}:"));
                        lines.extend(render_human(val, depth + 1));
                    }
                    serde_json::Value::Array(items)
                        if items.iter().any(|item| item.is_object() || item.is_string()) =>
                    {
                        lines.push(format!("{indent}{label}:"));
                        for item in items {
                            match item {
                                serde_json::Value::Object(_) => {
                                    lines.extend(render_human(item, depth + 1));
                                }
                                _ => lines.push(format!("{indent}  - {}", format_value(item))),
                            }
                        }
                    }
                    _ => lines.push(format!("{indent}{label}: {}", format_value(val))),
                }
            }
        }
        _ => lines.push(format!("{indent}{}", format_value(value))),
    }

    lines
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpamprepArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(" x ");
            format!("({formatted_values})")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("spam")), "spam");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!(false)), "false");
        assert_eq!(format_value(&json!([3, 4])), "(3 x 4)");
        assert_eq!(format_value(&json!(null)), "-");
    }

    #[test]
    fn test_render_report() {
        let report = json!({
            "vocabulary_size": 4,
            "train_shape": [3, 4],
            "files": ["data/processed/train_tfidf.csv", "data/processed/test_tfidf.csv"],
        });

        let lines = render_human(&report, 0);
        assert!(lines.contains(&"vocabulary size: 4".to_string()));
        assert!(lines.contains(&"train shape: (3 x 4)".to_string()));
        assert!(lines.contains(&"files:".to_string()));
        assert!(lines.contains(&"  - data/processed/test_tfidf.csv".to_string()));
    }

    #[test]
    fn test_render_nested_sections() {
        let report = json!({
            "ingestion": { "rows_loaded": 5 },
            "normalized": [{ "input": "Call me later", "output": "call later" }],
        });

        let lines = render_human(&report, 0);
        assert!(lines.contains(&"ingestion:".to_string()));
        assert!(lines.contains(&"  rows loaded: 5".to_string()));
        assert!(lines.contains(&"  output: call later".to_string()));
    }
}
