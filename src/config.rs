use std::{
    fs,
    net::SocketAddr,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result, anyhow};
use jsonschema::{JSONSchema, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{contact::ContactTiming, render::format::DEFAULT_NEW_ITEM_DAYS};

const SCHEMA_FILE_NAME: &str = "folio.schema.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("./data/portfolio.json")
}

fn default_files_dir() -> PathBuf {
    PathBuf::from("./public/files")
}

fn default_cv_file() -> String {
    "cv.pdf".to_string()
}

fn default_latest_updates() -> usize {
    6
}

fn default_new_item_days() -> i64 {
    DEFAULT_NEW_ITEM_DAYS
}

fn default_submit_delay_ms() -> u64 {
    1_000
}

fn default_reset_delay_ms() -> u64 {
    3_000
}

fn default_enabled_true() -> bool {
    true
}

fn default_logging_dir() -> PathBuf {
    PathBuf::from("./logs")
}

fn default_logging_filter() -> String {
    "info".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_logging_retention_days() -> usize {
    14
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_files_dir")]
    pub files_dir: PathBuf,
    #[serde(default = "default_cv_file")]
    pub cv_file: String,
    #[serde(default = "default_latest_updates")]
    pub latest_updates: usize,
    #[serde(default = "default_new_item_days")]
    pub new_item_days: i64,
}

impl SiteConfig {
    pub fn cv_href(&self) -> String {
        format!("/files/{}", self.cv_file)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            files_dir: default_files_dir(),
            cv_file: default_cv_file(),
            latest_updates: default_latest_updates(),
            new_item_days: default_new_item_days(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
}

impl ContactConfig {
    pub fn timing(&self) -> ContactTiming {
        ContactTiming {
            submit_delay: Duration::from_millis(self.submit_delay_ms),
            reset_delay: Duration::from_millis(self.reset_delay_ms),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            reset_delay_ms: default_reset_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_logging_retention_days")]
    pub retention_days: usize,
    #[serde(default = "default_enabled_true")]
    pub stderr_warn_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_logging_dir(),
            filter: default_logging_filter(),
            rotation: default_logging_rotation(),
            retention_days: default_logging_retention_days(),
            stderr_warn_enabled: true,
        }
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config_value: Value = json5::from_str(&config_content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        let config_base = config_path.parent().unwrap_or_else(|| Path::new("."));
        let schema_path = resolve_schema_path(config_base, &config_value)?;
        validate_against_schema(&config_value, &schema_path)?;

        let mut config: Config =
            serde_json::from_value(config_value).context("failed to deserialize folio config")?;

        for path in [
            &mut config.dataset.path,
            &mut config.site.files_dir,
            &mut config.logging.dir,
        ] {
            if !path.is_absolute() {
                *path = config_base.join(&*path);
            }
        }

        Ok(config)
    }
}

fn resolve_schema_path(config_base: &Path, config_value: &Value) -> Result<PathBuf> {
    if let Some(path_text) = config_value.get("$schema").and_then(|value| value.as_str()) {
        let configured = PathBuf::from(path_text);
        if configured.is_absolute() {
            return Ok(configured);
        }
        return Ok(config_base.join(&configured));
    }

    let local_default = config_base.join(SCHEMA_FILE_NAME);
    if local_default.exists() {
        return Ok(local_default);
    }

    Err(anyhow!(
        "unable to resolve schema path: expected $schema in config or {SCHEMA_FILE_NAME} next to it"
    ))
}

fn validate_against_schema(config_value: &Value, schema_path: &Path) -> Result<()> {
    let schema_content = fs::read_to_string(schema_path)
        .with_context(|| format!("failed to read schema {}", schema_path.display()))?;
    let schema: Value = serde_json::from_str(&schema_content)
        .with_context(|| format!("failed to parse schema {}", schema_path.display()))?;

    let compiled =
        JSONSchema::compile(&schema).map_err(|e| anyhow!("failed to compile schema: {e}"))?;

    match compiled.validate(config_value) {
        Ok(()) => Ok(()),
        Err(errors_iter) => {
            let validation_errors: Vec<ValidationError> = errors_iter.collect();
            let messages: Vec<String> = validation_errors
                .into_iter()
                .map(|error| error.to_string())
                .collect();
            Err(anyhow!("config validation failed: {}", messages.join("; ")))
        }
    }
}
