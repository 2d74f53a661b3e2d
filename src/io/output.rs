use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::DocumentFormat;

/// Destination for serialized reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn file(path: impl AsRef<Path>) -> Self {
        OutputDestination::File(path.as_ref().to_path_buf())
    }
}

/// Controls how reports are serialized and where they go.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
    pub destinations: Vec<OutputDestination>,
}

impl OutputOptions {
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            pretty: true,
            destinations: vec![OutputDestination::Stdout],
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_destinations(mut self, destinations: Vec<OutputDestination>) -> Self {
        self.destinations = destinations;
        self
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new(DocumentFormat::Json)
    }
}

/// Serialize `report` once and write it to every configured destination.
pub fn emit<T: Serialize>(report: &T, options: &OutputOptions) -> Result<()> {
    if options.destinations.is_empty() {
        return Ok(());
    }
    let payload = render(report, options)?;
    for destination in &options.destinations {
        write_payload(destination, &payload).with_context(|| match destination {
            OutputDestination::Stdout => "failed to write to stdout".to_string(),
            OutputDestination::File(path) => {
                format!("failed to write to file {}", path.display())
            }
        })?;
    }
    Ok(())
}

pub fn render<T: Serialize>(report: &T, options: &OutputOptions) -> Result<String> {
    match options.format {
        DocumentFormat::Json if options.pretty => {
            serde_json::to_string_pretty(report).context("failed to serialize JSON")
        }
        DocumentFormat::Json => serde_json::to_string(report).context("failed to serialize JSON"),
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::to_string(report).context("failed to serialize YAML"),
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => {
            // TOML documents need a table at the root.
            let wrapped = toml_root(report)?;
            if options.pretty {
                toml::to_string_pretty(&wrapped).context("failed to serialize TOML")
            } else {
                toml::to_string(&wrapped).context("failed to serialize TOML")
            }
        }
    }
}

#[cfg(feature = "toml")]
fn toml_root<T: Serialize>(report: &T) -> Result<serde_json::Value> {
    let value = serde_json::to_value(report).context("failed to convert report")?;
    Ok(match value {
        serde_json::Value::Object(_) => value,
        other => serde_json::json!({ "results": other }),
    })
}

fn write_payload(destination: &OutputDestination, payload: &str) -> Result<()> {
    match destination {
        OutputDestination::Stdout => {
            let mut stdout = io::stdout();
            stdout
                .write_all(payload.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .context("failed to write stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
        OutputDestination::File(path) => {
            let mut file = File::create(path)?;
            file.write_all(payload.as_bytes())?;
            file.write_all(b"\n")?;
            file.flush()?;
            Ok(())
        }
    }
}
