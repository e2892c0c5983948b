//! Configuration management for quire.
//!
//! Parses `quire.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `output.dir`
//! - `convert.font`

mod expand;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use quire_styles::{STANDARD_STYLESHEET, StyleError, StyleOverride, StyleRegistry};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the output directory.
    pub output_dir: Option<PathBuf>,
    /// Override the stylesheet used for conversion.
    pub stylesheet: Option<String>,
    /// Override the output formats.
    pub formats: Option<Vec<OutputFormat>>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quire.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Conversion switches.
    pub convert: ConvertConfig,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Derived stylesheets keyed by identifier.
    pub stylesheets: BTreeMap<String, StylesheetConfig>,

    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Conversion configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Stylesheet identifier: `standard` or a key of `[stylesheets]`.
    pub stylesheet: String,
    /// Text inserted after a verse number.
    pub space_after_verse: String,
    /// Frame instead of drop caps for deferred chapter numbers.
    pub chapter_drop_caps_frames: bool,
    /// Tab after the verse number in poetry lines.
    pub verse_numbers_left_aligned: bool,
    /// Font name used when creating paragraph styles.
    pub font: String,
    /// Collect plain text and headings per verse.
    pub verse_text: bool,
    /// Collect verse text before the first normal paragraph.
    pub text_starts_immediately: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            stylesheet: STANDARD_STYLESHEET.to_owned(),
            space_after_verse: " ".to_owned(),
            chapter_drop_caps_frames: false,
            verse_numbers_left_aligned: false,
            font: "Cardo".to_owned(),
            verse_text: true,
            text_starts_immediately: true,
        }
    }
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
    formats: Option<Vec<String>>,
    info_document: Option<bool>,
}

/// Resolved output configuration with an absolute directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory receiving converted files.
    pub dir: PathBuf,
    /// Active output sinks.
    pub formats: Vec<OutputFormat>,
    /// Whether to write the info and fallout documents.
    pub info_document: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("export"),
            formats: vec![OutputFormat::Html, OutputFormat::Text],
            info_document: true,
        }
    }
}

/// An output format, one per sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Html,
    Text,
}

impl OutputFormat {
    /// File extension of the converted document.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "txt",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Self::Html),
            "text" => Ok(Self::Text),
            other => Err(format!("unknown output format '{other}', expected html or text")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Html => "html",
            Self::Text => "text",
        })
    }
}

/// A stylesheet derived from another one by per-marker overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct StylesheetConfig {
    /// Stylesheet to copy, `standard` unless set.
    #[serde(default = "default_base")]
    pub base: String,
    /// Overrides keyed by marker.
    #[serde(default)]
    pub styles: BTreeMap<String, StyleOverride>,
}

fn default_base() -> String {
    STANDARD_STYLESHEET.to_owned()
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path, e.g. `output.dir`.
        field: String,
        /// Error message, e.g. `${EXPORT_DIR} not set`.
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `quire.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(output_dir) = &settings.output_dir {
            self.output_resolved.dir.clone_from(output_dir);
        }
        if let Some(stylesheet) = &settings.stylesheet {
            self.convert.stylesheet.clone_from(stylesheet);
        }
        if let Some(formats) = &settings.formats {
            self.output_resolved.formats.clone_from(formats);
        }
    }

    /// Build a registry holding the standard stylesheet and every derived one.
    ///
    /// A derived stylesheet may name another derived stylesheet as its base.
    ///
    /// # Errors
    ///
    /// Returns `StyleError` for an unknown base or an override of an unknown marker.
    pub fn registry(&self) -> Result<StyleRegistry, StyleError> {
        let mut registry = StyleRegistry::new();
        let mut pending: Vec<(&String, &StylesheetConfig)> = self.stylesheets.iter().collect();

        while !pending.is_empty() {
            let before = pending.len();
            let mut waiting = Vec::new();
            for (id, stylesheet) in pending {
                if registry.stylesheet(&stylesheet.base).is_some() {
                    registry.derive(id, &stylesheet.base, &stylesheet.styles)?;
                } else {
                    waiting.push((id, stylesheet));
                }
            }
            if waiting.len() == before {
                let (_, stylesheet) = waiting[0];
                return Err(StyleError::UnknownBase(stylesheet.base.clone()));
            }
            pending = waiting;
        }

        Ok(registry)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            convert: ConvertConfig::default(),
            output: OutputConfigRaw::default(),
            stylesheets: BTreeMap::new(),
            output_resolved: OutputConfig {
                dir: base.join("export"),
                ..OutputConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_convert()?;
        self.validate_stylesheets()?;
        Ok(())
    }

    fn validate_convert(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.convert.space_after_verse, "convert.space_after_verse")?;
        require_non_empty(&self.convert.stylesheet, "convert.stylesheet")?;

        let stylesheet = &self.convert.stylesheet;
        if stylesheet != STANDARD_STYLESHEET && !self.stylesheets.contains_key(stylesheet) {
            return Err(ConfigError::Validation(format!(
                "convert.stylesheet '{stylesheet}' is neither standard nor defined in [stylesheets]"
            )));
        }
        Ok(())
    }

    fn validate_stylesheets(&self) -> Result<(), ConfigError> {
        for (id, stylesheet) in &self.stylesheets {
            if id == STANDARD_STYLESHEET {
                return Err(ConfigError::Validation(format!(
                    "stylesheets.{id} would replace the built-in stylesheet"
                )));
            }
            for (marker, style) in &stylesheet.styles {
                if let Some(restart) = &style.note_numbering_restart
                    && !matches!(restart.as_str(), "never" | "book" | "chapter")
                {
                    return Err(ConfigError::Validation(format!(
                        "stylesheets.{id}.styles.{marker}.note_numbering_restart must be never, book or chapter"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.convert.font = expand::expand_env(&self.convert.font, "convert.font")?;
        if let Some(ref dir) = self.output.dir {
            self.output.dir = Some(expand::expand_env(dir, "output.dir")?);
        }
        Ok(())
    }

    /// Resolve the output section against the config directory.
    ///
    /// Rejects formats other than `html` and `text`.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let formats = match &self.output.formats {
            Some(formats) => formats
                .iter()
                .map(|format| {
                    format.parse().map_err(|message| {
                        ConfigError::Validation(format!("output.formats: {message}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => OutputConfig::default().formats,
        };

        self.output_resolved = OutputConfig {
            dir: config_dir.join(self.output.dir.as_deref().unwrap_or("export")),
            formats,
            info_document: self.output.info_document.unwrap_or(true),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use quire_styles::{Property, TwoState};

    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/bible"));

        assert_eq!(config.convert.stylesheet, "standard");
        assert_eq!(config.convert.space_after_verse, " ");
        assert_eq!(config.convert.font, "Cardo");
        assert!(config.convert.verse_text);
        assert_eq!(config.output_resolved.dir, PathBuf::from("/bible/export"));
        assert_eq!(
            config.output_resolved.formats,
            vec![OutputFormat::Html, OutputFormat::Text]
        );
        assert!(config.output_resolved.info_document);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.convert.stylesheet, "standard");
        assert!(config.stylesheets.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let (dir, path) = write_config(
            r#"
[convert]
space_after_verse = "\u2002"
chapter_drop_caps_frames = true
font = "Gentium"

[output]
dir = "out"
formats = ["text"]
info_document = false
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.convert.space_after_verse, "\u{2002}");
        assert!(config.convert.chapter_drop_caps_frames);
        assert_eq!(config.convert.font, "Gentium");
        assert_eq!(config.output_resolved.dir, dir.path().join("out"));
        assert_eq!(config.output_resolved.formats, vec![OutputFormat::Text]);
        assert!(!config.output_resolved.info_document);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/quire.toml")), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
        assert_eq!(
            err.to_string(),
            "Configuration file not found: /nonexistent/quire.toml"
        );
    }

    #[test]
    fn test_load_invalid_toml() {
        let (_dir, path) = write_config("[convert\n");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let (_dir, path) = write_config("[output]\nformats = [\"odt\"]\n");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("odt"));
    }

    #[test]
    fn test_empty_verse_spacer_rejected() {
        let (_dir, path) = write_config("[convert]\nspace_after_verse = \"\"\n");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: convert.space_after_verse cannot be empty"
        );
    }

    #[test]
    fn test_unknown_stylesheet_rejected() {
        let (_dir, path) = write_config("[convert]\nstylesheet = \"print\"\n");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(err.to_string().contains("'print'"));
    }

    #[test]
    fn test_invalid_note_restart_rejected() {
        let (_dir, path) = write_config(
            r#"
[stylesheets.print.styles.f]
note_numbering_restart = "page"
"#,
        );

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(err.to_string().contains("stylesheets.print.styles.f.note_numbering_restart"));
    }

    #[test]
    fn test_standard_cannot_be_redefined() {
        let (_dir, path) = write_config("[stylesheets.standard]\n");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_env_expansion() {
        // SAFETY: no other test touches this variable
        unsafe {
            std::env::set_var("QUIRE_TEST_CONFIG_FONT", "Charis SIL");
        }
        let (_dir, path) = write_config(
            r#"
[convert]
font = "${QUIRE_TEST_CONFIG_FONT}"

[output]
dir = "${QUIRE_TEST_CONFIG_DIR:-build}"
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.convert.font, "Charis SIL");
        assert!(config.output_resolved.dir.ends_with("build"));
        // SAFETY: no other test touches this variable
        unsafe {
            std::env::remove_var("QUIRE_TEST_CONFIG_FONT");
        }
    }

    #[test]
    fn test_registry_with_derived_stylesheets() {
        let config: Config = toml::from_str(
            r#"
[stylesheets.large]
[stylesheets.large.styles.p]
font_size = 14.0
bold = true

[stylesheets.large-letters]
base = "large"
[stylesheets.large-letters.styles.x]
note_numbering_sequence = "* † ‡"
"#,
        )
        .unwrap();

        let registry = config.registry().unwrap();

        assert_eq!(registry.ids(), ["large", "large-letters", "standard"]);
        let paragraph = registry.lookup("large", "p").unwrap().paragraph.clone().unwrap();
        assert_eq!(paragraph.font_size, 14.0);
        assert_eq!(paragraph.bold, TwoState::On);
        let inherited = registry.lookup("large-letters", "p").unwrap();
        assert_eq!(inherited.paragraph.as_ref().unwrap().font_size, 14.0);
        let xref = registry.lookup("large-letters", "x").unwrap();
        assert_eq!(xref.parameter::<String>(Property::NoteNumberingSequence), "* † ‡");
    }

    #[test]
    fn test_registry_unknown_base() {
        let config: Config = toml::from_str("[stylesheets.print]\nbase = \"missing\"\n").unwrap();

        let err = config.registry().unwrap_err();

        assert_eq!(err.to_string(), "Unknown base stylesheet: missing");
    }

    #[test]
    fn test_registry_unknown_marker() {
        let config: Config =
            toml::from_str("[stylesheets.print.styles.zz]\nbold = true\n").unwrap();

        let err = config.registry().unwrap_err();

        assert!(matches!(err, StyleError::UnknownMarker { .. }));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/bible"));
        let settings = CliSettings {
            output_dir: Some(PathBuf::from("/tmp/out")),
            stylesheet: Some("large".to_owned()),
            formats: Some(vec![OutputFormat::Html]),
        };

        config.apply_cli_settings(&settings);

        assert_eq!(config.output_resolved.dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.convert.stylesheet, "large");
        assert_eq!(config.output_resolved.formats, vec![OutputFormat::Html]);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/bible"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.output_resolved.dir, PathBuf::from("/bible/export"));
        assert_eq!(config.convert.stylesheet, "standard");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("html".parse::<OutputFormat>(), Ok(OutputFormat::Html));
        assert_eq!(OutputFormat::Text.extension(), "txt");
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert!("pdf".parse::<OutputFormat>().is_err());
    }
}
