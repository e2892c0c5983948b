//! `quire convert` command implementation.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::Args;
use quire_config::{CliSettings, Config, ConvertConfig, OutputConfig, OutputFormat};
use quire_convert::{ConvertOptions, Converter, HtmlSink, Sink, TextSink};
use quire_styles::StyleRegistry;
use rayon::prelude::*;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// USFM files to convert.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format, repeatable: html or text (overrides config).
    #[arg(short, long = "format")]
    formats: Vec<OutputFormat>,

    /// Stylesheet identifier (overrides config).
    #[arg(short, long)]
    stylesheet: Option<String>,

    /// Path to configuration file (default: auto-discover quire.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

/// Diagnostics counts for one converted file.
#[derive(Debug, PartialEq, Eq)]
struct FileReport {
    info: usize,
    fallout: usize,
}

impl ConvertArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.output_dir,
            stylesheet: self.stylesheet,
            formats: (!self.formats.is_empty()).then_some(self.formats),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let registry = config.registry()?;
        let options = convert_options(&config.convert);
        // Fails early on an unknown stylesheet given on the command line.
        Converter::new(&registry, options.clone())?;

        let target = &config.output_resolved;
        std::fs::create_dir_all(&target.dir)?;
        output.info(&format!("Output: {}", target.dir.display()));

        let results: Vec<Result<FileReport, CliError>> = self
            .files
            .par_iter()
            .map(|path| convert_file(path, &registry, &options, target))
            .collect();

        let mut failed = 0;
        let mut totals = FileReport {
            info: 0,
            fallout: 0,
        };
        for (path, result) in self.files.iter().zip(results) {
            match result {
                Ok(report) => {
                    let line = format!(
                        "{}: {} info, {} fallout",
                        path.display(),
                        report.info,
                        report.fallout
                    );
                    if report.fallout > 0 {
                        output.warning(&line);
                    } else {
                        output.info(&line);
                    }
                    totals.info += report.info;
                    totals.fallout += report.fallout;
                }
                Err(err) => {
                    output.error(&format!("{}: {err}", path.display()));
                    failed += 1;
                }
            }
        }

        let converted = self.files.len() - failed;
        output.highlight(&format!(
            "{converted} file(s) converted, {} info, {} fallout",
            totals.info, totals.fallout
        ));
        if failed > 0 {
            return Err(CliError::Validation(format!(
                "{failed} of {} file(s) could not be converted",
                self.files.len()
            )));
        }
        output.success("Conversion complete");
        Ok(())
    }
}

fn convert_options(config: &ConvertConfig) -> ConvertOptions {
    ConvertOptions {
        stylesheet: config.stylesheet.clone(),
        space_after_verse: config.space_after_verse.clone(),
        chapter_drop_caps_frames: config.chapter_drop_caps_frames,
        verse_numbers_left_aligned: config.verse_numbers_left_aligned,
        font: config.font.clone(),
        verse_text: config.verse_text,
        text_starts_immediately: config.text_starts_immediately,
    }
}

/// Convert one file and write the requested outputs next to each other in `target.dir`.
fn convert_file(
    path: &Path,
    registry: &StyleRegistry,
    options: &ConvertOptions,
    target: &OutputConfig,
) -> Result<FileReport, CliError> {
    let input = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let stem = path
        .file_stem()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("output");

    let converter = Converter::new(registry, options.clone())?;
    let mut html = HtmlSink::new(stem);
    let mut text = TextSink::new();
    let mut sinks: Vec<&mut dyn Sink> = Vec::new();
    if target.formats.contains(&OutputFormat::Html) {
        sinks.push(&mut html);
    }
    if target.formats.contains(&OutputFormat::Text) {
        sinks.push(&mut text);
    }
    let conversion = converter.convert(&input, &mut sinks);
    tracing::info!(
        file = %path.display(),
        info = conversion.info.len(),
        fallout = conversion.fallout.len(),
        "Converted"
    );

    for format in &target.formats {
        let destination = target.dir.join(format!("{stem}.{}", format.extension()));
        let content = match format {
            OutputFormat::Html => html.to_html(),
            OutputFormat::Text => plain_text(&text),
        };
        std::fs::write(destination, content)?;
    }
    if target.info_document {
        std::fs::write(
            target.dir.join(format!("{stem}.info.html")),
            conversion.info_document(),
        )?;
        std::fs::write(
            target.dir.join(format!("{stem}.fallout.html")),
            conversion.fallout_document(),
        )?;
    }

    Ok(FileReport {
        info: conversion.info.len(),
        fallout: conversion.fallout.len(),
    })
}

/// Body text followed by the notes, separated by a blank line.
fn plain_text(text: &TextSink) -> String {
    let mut content = text.text();
    let notes = text.notes();
    if !notes.is_empty() {
        let _ = write!(content, "\n\n{notes}");
    }
    content.push('\n');
    content
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn target(dir: &Path, formats: Vec<OutputFormat>, info_document: bool) -> OutputConfig {
        OutputConfig {
            dir: dir.to_path_buf(),
            formats,
            info_document,
        }
    }

    #[test]
    fn test_convert_options_from_config() {
        let config = ConvertConfig {
            chapter_drop_caps_frames: true,
            font: "Gentium".to_owned(),
            ..ConvertConfig::default()
        };

        let options = convert_options(&config);

        assert_eq!(options.stylesheet, "standard");
        assert!(options.chapter_drop_caps_frames);
        assert_eq!(options.font, "Gentium");
    }

    #[test]
    fn test_convert_file_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("41MAT.usfm");
        std::fs::write(&source, "\\id MAT\n\\c 1\n\\p\n\\v 1 Text\\f + \\ft Note.\\f* \\zz more").unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out).unwrap();

        let report = convert_file(
            &source,
            StyleRegistry::standard(),
            &ConvertOptions::default(),
            &target(&out, vec![OutputFormat::Html, OutputFormat::Text], true),
        )
        .unwrap();

        assert_eq!(report.fallout, 1);
        for name in ["41MAT.html", "41MAT.txt", "41MAT.info.html", "41MAT.fallout.html"] {
            assert!(out.join(name).exists(), "{name} missing");
        }
        let text = std::fs::read_to_string(out.join("41MAT.txt")).unwrap();
        assert!(text.ends_with("1 Note.\n"));
    }

    #[test]
    fn test_convert_file_respects_formats() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("gen.usfm");
        std::fs::write(&source, "\\id GEN\n\\c 1\n\\p\n\\v 1 In the beginning").unwrap();

        convert_file(
            &source,
            StyleRegistry::standard(),
            &ConvertOptions::default(),
            &target(dir.path(), vec![OutputFormat::Text], false),
        )
        .unwrap();

        assert!(dir.path().join("gen.txt").exists());
        assert!(!dir.path().join("gen.html").exists());
        assert!(!dir.path().join("gen.info.html").exists());
    }

    #[test]
    fn test_convert_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();

        let err = convert_file(
            &dir.path().join("missing.usfm"),
            StyleRegistry::standard(),
            &ConvertOptions::default(),
            &target(dir.path(), vec![OutputFormat::Html], false),
        )
        .unwrap_err();

        assert!(err.to_string().starts_with("Failed to read"));
    }
}
