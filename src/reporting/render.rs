//! Serialization of command sequences for the CI job-emission layer.

use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;

use crate::core::models::CommandSequence;

/// Output formats accepted by `generate --format`.
/// `generate --format` 接受的输出格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One command (or multi-line block) after another, newline separated.
    /// 逐条输出命令（或多行命令块），以换行分隔。
    #[default]
    Text,
    /// A JSON array of command strings.
    /// 命令字符串的 JSON 数组。
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("Unknown output format: {}", other),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Renders `commands` in the requested format.
///
/// # Arguments
/// * `commands` - The sequence to render
/// * `format` - Target format
///
/// # Returns
/// The rendered text, always terminated by a newline
pub fn render(commands: &CommandSequence, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(commands.to_script()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(commands)
                .context("Failed to serialize commands to JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}
