use std::path::Path;

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "lintrelay.toml";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub results_path: Option<String>,
    pub review: Option<String>,
    pub pr: Option<u64>,
    pub success_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub results_path: String,
    pub review: String,
    pub pr: Option<u64>,
    pub success_message: String,
}

impl Config {
    /// Load the config file (if any) and merge CLI overrides on top.
    ///
    /// An explicit `--config` path must exist; the default path is optional.
    pub fn load(cli: &Cli) -> Result<Self> {
        let file_config = match cli.config {
            Some(ref path) => {
                let config_path = Path::new(path);
                if !config_path.exists() {
                    return Err(Error::ConfigNotFound(config_path.to_path_buf()));
                }
                let content = std::fs::read_to_string(config_path)?;
                parse_config(&content)?
            }
            None => {
                let config_path = Path::new(DEFAULT_CONFIG_PATH);
                if config_path.exists() {
                    let content = std::fs::read_to_string(config_path)?;
                    parse_config(&content)?
                } else {
                    ConfigFile::default()
                }
            }
        };

        merge(file_config, cli)
    }
}

pub fn parse_config(content: &str) -> Result<ConfigFile> {
    let config: ConfigFile = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ConfigFile) -> Result<()> {
    if let Some(ref review) = config.review {
        validate_review(review)?;
    }
    if let Some(ref path) = config.results_path
        && path.is_empty()
    {
        return Err(Error::ConfigValidation(
            "results_path must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_review(review: &str) -> Result<()> {
    match review {
        "console" | "github" => Ok(()),
        other => Err(Error::ConfigValidation(format!(
            "unknown review backend: {other} (expected: console, github)"
        ))),
    }
}

pub fn merge(file: ConfigFile, cli: &Cli) -> Result<Config> {
    let results_path = cli
        .results
        .clone()
        .or(file.results_path)
        .unwrap_or_default();
    if results_path.is_empty() {
        return Err(Error::ConfigValidation(
            "results path not supplied".to_string(),
        ));
    }

    let review = cli
        .review
        .clone()
        .or(file.review)
        .unwrap_or_else(|| "console".to_string());
    validate_review(&review)?;

    let pr = cli.pr.or(file.pr);
    if review == "github" && pr.is_none() {
        return Err(Error::ConfigValidation(
            "github review backend requires a pull request number".to_string(),
        ));
    }

    Ok(Config {
        results_path,
        review,
        pr,
        success_message: cli
            .success_message
            .clone()
            .or(file.success_message)
            .unwrap_or_else(|| "Lint passed.".to_string()),
    })
}
