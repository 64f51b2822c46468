//! Layered configuration for the pastedown CLI.
//!
//! `defaults/pastedown.default.toml` is embedded into the binary. A user file
//! and `PASTEDOWN_*` environment variables are layered on top via [`Loader`]
//! before deserializing into [`PastedownConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use pastedown::{Converter, ConverterOptions, Filter};
use serde::Deserialize;
use simplelog::LevelFilter;
use std::path::Path;
use std::str::FromStr;

const DEFAULT_TOML: &str = include_str!("../defaults/pastedown.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct PastedownConfig {
    pub convert: ConvertConfig,
    pub export: ExportConfig,
    pub log: LogConfig,
}

/// Delimiters used by the HTML to Markdown converter.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub bullet_list_marker: char,
    pub em_delimiter: char,
    pub strong_delimiter: String,
    pub hr: String,
    pub fence: String,
    pub escape_text: bool,
    pub remove: Vec<String>,
}

impl From<&ConvertConfig> for ConverterOptions {
    fn from(config: &ConvertConfig) -> Self {
        ConverterOptions {
            bullet_list_marker: config.bullet_list_marker,
            em_delimiter: config.em_delimiter,
            strong_delimiter: config.strong_delimiter.clone(),
            hr: config.hr.clone(),
            fence: config.fence.clone(),
            escape_text: config.escape_text,
        }
    }
}

impl ConvertConfig {
    pub fn converter(&self) -> Converter {
        let mut converter = Converter::with_options(self.into());
        if !self.remove.is_empty() {
            let tags: Vec<&str> = self.remove.iter().map(String::as_str).collect();
            converter.remove(Filter::tags(&tags));
        }
        converter
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.level)
            .map_err(|_| ConfigError::Message(format!("invalid log level `{}`", self.level)))
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `PASTEDOWN_*` environment variables.
    ///
    /// `__` separates sections, so `PASTEDOWN_LOG__LEVEL` sets `log.level`.
    /// `PASTEDOWN_CONVERT__REMOVE` takes a comma-separated tag list.
    pub fn with_env(self) -> Self {
        self.with_environment(Environment::default())
    }

    fn with_environment(mut self, environment: Environment) -> Self {
        let source = environment
            .prefix("PASTEDOWN")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("convert.remove");
        self.builder = self.builder.add_source(source);
        self
    }

    #[cfg(test)]
    fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<config::ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<PastedownConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_converter_defaults() {
        let config = Loader::new().build().unwrap();
        let options: ConverterOptions = (&config.convert).into();
        assert_eq!(options, ConverterOptions::default());
        assert!(config.convert.remove.is_empty());
        assert_eq!(config.log.level_filter().unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn test_override() {
        let config = Loader::new()
            .set_override("convert.bullet_list_marker", "*")
            .unwrap()
            .build()
            .unwrap();
        let converter = config.convert.converter();
        assert_eq!(converter.convert("<ul><li>a</li></ul>"), "* a");
    }

    #[test]
    fn test_user_file_layers_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[convert]\nremove = [\"style\"]\n\n[export]\ntitle = \"Notes\"").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.export.title, "Notes");
        assert_eq!(config.convert.fence, "```");
        assert_eq!(config.convert.converter().convert("<style>x</style>y"), "y");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Loader::new().with_file("/nonexistent/pastedown.toml").build().is_err());
    }

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let vars = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Environment::default().source(Some(vars))
    }

    #[test]
    fn test_env_sets_section_keys() {
        let config = Loader::new()
            .with_environment(environment(&[
                ("PASTEDOWN_LOG__LEVEL", "debug"),
                ("PASTEDOWN_CONVERT__ESCAPE_TEXT", "true"),
                ("PASTEDOWN_EXPORT__TITLE", "Notes"),
            ]))
            .build()
            .unwrap();
        assert_eq!(config.log.level_filter().unwrap(), LevelFilter::Debug);
        assert!(config.convert.escape_text);
        assert_eq!(config.export.title, "Notes");
    }

    #[test]
    fn test_env_remove_list() {
        let config = Loader::new()
            .with_environment(environment(&[("PASTEDOWN_CONVERT__REMOVE", "script,style")]))
            .build()
            .unwrap();
        assert_eq!(config.convert.remove, vec!["script", "style"]);
        assert_eq!(
            config.convert.converter().convert("<script>x</script><style>y</style>z"),
            "z"
        );
    }

    #[test]
    fn test_env_ignores_other_prefixes() {
        let config = Loader::new()
            .with_environment(environment(&[("PASTEDOWNX_LOG__LEVEL", "debug")]))
            .build()
            .unwrap();
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_with_env_reads_process_environment() {
        std::env::set_var("PASTEDOWN_CONVERT__BULLET_LIST_MARKER", "+");
        let config = Loader::new().with_env().build().unwrap();
        std::env::remove_var("PASTEDOWN_CONVERT__BULLET_LIST_MARKER");
        assert_eq!(config.convert.bullet_list_marker, '+');
    }

    #[test]
    fn test_invalid_log_level() {
        let config = Loader::new().set_override("log.level", "loud").unwrap().build().unwrap();
        assert!(config.log.level_filter().is_err());
    }
}
