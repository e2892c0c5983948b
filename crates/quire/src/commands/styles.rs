//! `quire styles` command implementation.

use std::path::PathBuf;

use clap::Args;
use quire_config::{CliSettings, Config};
use quire_styles::{Style, Stylesheet};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the styles command.
#[derive(Args)]
pub(crate) struct StylesArgs {
    /// Stylesheet identifier (default: the configured stylesheet).
    #[arg(short, long)]
    stylesheet: Option<String>,

    /// Print the full style definitions as JSON.
    #[arg(long)]
    json: bool,

    /// Path to configuration file (default: auto-discover quire.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl StylesArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            stylesheet: self.stylesheet,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let registry = config.registry()?;
        let id = &config.convert.stylesheet;
        let stylesheet = registry.stylesheet(id).ok_or_else(|| {
            CliError::Validation(format!(
                "Unknown stylesheet '{id}', available: {}",
                registry.ids().join(", ")
            ))
        })?;

        if self.json {
            output.data(&serde_json::to_string_pretty(&stylesheet.styles())?);
        } else {
            for line in listing(stylesheet) {
                output.data(&line);
            }
            output.highlight(&format!("{} markers in {id}", stylesheet.len()));
        }
        Ok(())
    }
}

fn listing(stylesheet: &Stylesheet) -> Vec<String> {
    stylesheet.styles().into_iter().map(listing_line).collect()
}

fn listing_line(style: &Style) -> String {
    format!(
        "\\{:<10} {:<38} {}",
        style.marker,
        style.style_type.as_str(),
        style.name
    )
}
