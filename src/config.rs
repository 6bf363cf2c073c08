use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::{
    DocumentMetadata, SegmentOptions, DEFAULT_DATE, DEFAULT_KIND, DEFAULT_TITLE,
    DEFAULT_TITLE_LOOKAHEAD,
};

pub const DEFAULT_INPUT: &str = "westminster-confession.txt";
pub const DEFAULT_OUTPUT: &str = "westminster-confession.json";

/// Configuration for confession
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Document-level fields written to the JSON
    #[serde(default)]
    pub metadata: MetadataConfig,

    /// Segmenter tuning
    #[serde(default)]
    pub parsing: ParsingConfig,

    /// Paths and JSON layout
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_date")]
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsingConfig {
    /// Lines after a chapter header searched for its title
    #[serde(default = "default_title_lookahead")]
    pub title_lookahead: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Spaces per indentation level; 0 writes compact JSON
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Source text used when no input path is given
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Destination used when no output path is given
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_kind() -> String {
    DEFAULT_KIND.to_string()
}

fn default_date() -> String {
    DEFAULT_DATE.to_string()
}

fn default_title_lookahead() -> usize {
    DEFAULT_TITLE_LOOKAHEAD
}

fn default_indent() -> usize {
    2
}

impl Default for MetadataConfig {
    fn default() -> Self {
        MetadataConfig {
            title: default_title(),
            kind: default_kind(),
            date: default_date(),
        }
    }
}

impl Default for ParsingConfig {
    fn default() -> Self {
        ParsingConfig {
            title_lookahead: default_title_lookahead(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            indent: default_indent(),
            input: None,
            output: None,
        }
    }
}

impl Config {
    /// Load config from an explicit path, or from the config directory if present
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        // Return defaults if no config found
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the config directory
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::get_config_path() {
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }

            let content = toml::to_string_pretty(self)?;
            fs::write(&config_path, content)?;
        }

        Ok(())
    }

    /// Initialize default config file
    pub fn init_default() -> Result<()> {
        Config::default().save()
    }

    /// Get the path to the config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("confession").join("config.toml"))
    }

    pub fn document_metadata(&self) -> DocumentMetadata {
        DocumentMetadata {
            title: self.metadata.title.clone(),
            kind: self.metadata.kind.clone(),
            date: self.metadata.date.clone(),
        }
    }

    pub fn segment_options(&self) -> SegmentOptions {
        SegmentOptions {
            title_lookahead: self.parsing.title_lookahead,
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.output
            .input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}
