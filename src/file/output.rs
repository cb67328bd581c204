//! Rendering values for printing.

use crate::document::convert::to_serde_value;
use crate::document::value::Value;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Text format used when printing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Renders `value` in the requested format.
///
/// YAML output is produced by serde_yaml; JSON output is pretty-printed
/// with `indent_size` spaces per level. Neither ends with a newline.
///
/// # Examples
///
/// ```
/// use pathquill::document::convert::parse_document;
/// use pathquill::file::output::{render, OutputFormat};
///
/// let doc = parse_document("{a: [1, 2]}").unwrap();
/// assert_eq!(render(&doc, OutputFormat::Json, 2).unwrap(), "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
/// ```
pub fn render(value: &Value, format: OutputFormat, indent_size: usize) -> Result<String> {
    let serde_value = to_serde_value(value);
    match format {
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&serde_value).context("Failed to serialize YAML")?;
            Ok(yaml.trim_end().to_string())
        }
        OutputFormat::Json => {
            let indent = " ".repeat(indent_size);
            let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
            let mut buffer = Vec::new();
            let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
            serde::Serialize::serialize(&serde_value, &mut serializer)
                .context("Failed to serialize JSON")?;
            String::from_utf8(buffer).context("Serialized JSON is not valid UTF-8")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::convert::parse_document;

    #[test]
    fn test_render_yaml_scalar() {
        assert_eq!(render(&Value::from(5), OutputFormat::Yaml, 2).unwrap(), "5");
        assert_eq!(render(&Value::from("hi"), OutputFormat::Yaml, 2).unwrap(), "hi");
    }

    #[test]
    fn test_render_yaml_mapping() {
        let doc = parse_document("{b: 1, a: 2}").unwrap();
        assert_eq!(render(&doc, OutputFormat::Yaml, 2).unwrap(), "b: 1\na: 2");
    }

    #[test]
    fn test_render_json_indent() {
        let doc = parse_document("{a: 1}").unwrap();
        assert_eq!(
            render(&doc, OutputFormat::Json, 4).unwrap(),
            "{\n    \"a\": 1\n}"
        );
    }

    #[test]
    fn test_render_json_null() {
        assert_eq!(render(&Value::Null, OutputFormat::Json, 2).unwrap(), "null");
    }
}
