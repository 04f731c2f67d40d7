use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Sibling-track discovery settings
    #[serde(default)]
    pub tracks: TrackConfig,

    /// Timeline output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Sibling-track discovery configuration
///
/// For an input lyric file, auxiliary tracks are discovered by swapping the
/// extension on the same stem: `song.lrc` pairs with `song.tlrc`,
/// `song.rlrc` and `song.yrc` under the defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TrackConfig {
    /// Extension of the original (plain) track
    #[serde(default = "default_original_extension")]
    pub original_extension: String,

    /// Extension of the translation track
    #[serde(default = "default_translation_extension")]
    pub translation_extension: String,

    /// Extension of the romanization track
    #[serde(default = "default_romanization_extension")]
    pub romanization_extension: String,

    /// Extension of the word-level (karaoke) track
    #[serde(default = "default_dynamic_extension")]
    pub dynamic_extension: String,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            original_extension: default_original_extension(),
            translation_extension: default_translation_extension(),
            romanization_extension: default_romanization_extension(),
            dynamic_extension: default_dynamic_extension(),
        }
    }
}

/// Timeline output configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Pretty-print the JSON timeline
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Suffix appended to the input stem for the output filename
    #[serde(default = "default_output_suffix")]
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            suffix: default_output_suffix(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_original_extension() -> String {
    "lrc".to_string()
}

fn default_translation_extension() -> String {
    "tlrc".to_string()
}

fn default_romanization_extension() -> String {
    "rlrc".to_string()
}

fn default_dynamic_extension() -> String {
    "yrc".to_string()
}

fn default_output_suffix() -> String {
    "timeline.json".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let extensions = [
            ("tracks.original_extension", &self.tracks.original_extension),
            (
                "tracks.translation_extension",
                &self.tracks.translation_extension,
            ),
            (
                "tracks.romanization_extension",
                &self.tracks.romanization_extension,
            ),
            ("tracks.dynamic_extension", &self.tracks.dynamic_extension),
        ];

        for (name, ext) in &extensions {
            if ext.is_empty() {
                return Err(anyhow!("{} must not be empty", name));
            }
            if ext.starts_with('.') {
                return Err(anyhow!("{} must not include the leading dot: {}", name, ext));
            }
        }

        // Each track needs its own extension, otherwise discovery would read
        // the same file into two tracks
        for (i, (name_a, ext_a)) in extensions.iter().enumerate() {
            for (name_b, ext_b) in extensions.iter().skip(i + 1) {
                if ext_a == ext_b {
                    return Err(anyhow!(
                        "{} and {} must differ (both are {})",
                        name_a,
                        name_b,
                        ext_a
                    ));
                }
            }
        }

        if self.output.suffix.is_empty() {
            return Err(anyhow!("output.suffix must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            tracks: TrackConfig::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
