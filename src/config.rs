// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{ApiError, Result};
use crate::models::Ecosystem;
use crate::pagination::{DEFAULT_PAGE_SIZE, LARGER_PAGE_SIZE, MAX_PAGE_SIZE, PageLimits};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE_NAME: &str = "config.toml";
const SNAPSHOT_FILE_NAME: &str = "releases.json";
const ENV_PREFIX: &str = "ADOPTIUM_API";
const HOME_ENV: &str = "ADOPTIUM_API_HOME";
const DEFAULT_HOME_DIR: &str = ".adoptium-api";
const DEFAULT_LTS_VERSIONS: [u32; 5] = [8, 11, 17, 21, 25];
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(skip)]
    pub home: PathBuf,

    #[serde(default)]
    pub ecosystem: Ecosystem,

    #[serde(default = "default_lts_versions")]
    pub lts_versions: Vec<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip_version: Option<u32>,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// JSON snapshot on disk. Defaults to `releases.json` in the home
    /// directory when no `url` is set either.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: None,
            url: None,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Upper limit for endpoints returning small items such as versions.
    #[serde(default = "default_larger_page_size")]
    pub larger_page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            larger_page_size: LARGER_PAGE_SIZE,
        }
    }
}

impl PaginationConfig {
    pub fn limits(&self) -> PageLimits {
        PageLimits {
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
        }
    }

    pub fn larger_limits(&self) -> PageLimits {
        PageLimits {
            default_page_size: self.default_page_size,
            max_page_size: self.larger_page_size,
        }
    }
}

fn default_lts_versions() -> Vec<u32> {
    DEFAULT_LTS_VERSIONS.to_vec()
}

fn default_refresh_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> usize {
    MAX_PAGE_SIZE
}

fn default_larger_page_size() -> usize {
    LARGER_PAGE_SIZE
}

impl ApiConfig {
    pub fn new(home: PathBuf) -> Self {
        Self {
            home,
            ecosystem: Ecosystem::default(),
            lts_versions: default_lts_versions(),
            tip_version: None,
            source: SourceConfig::default(),
            pagination: PaginationConfig::default(),
        }
    }

    /// Reads `config.toml` from `home` (if present) and overlays
    /// `ADOPTIUM_API_*` environment variables, e.g.
    /// `ADOPTIUM_API_SOURCE__URL` or `ADOPTIUM_API_LTS_VERSIONS=8,11,17`.
    pub fn load(home: &Path) -> Result<Self> {
        let config_path = home.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            log::debug!("Loading config from {config_path:?}");
        } else {
            log::debug!("Config file not found at {config_path:?}, using defaults");
        }

        let settings = config::Config::builder()
            .add_source(
                config::File::from(config_path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("lts_versions")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to load configuration: {e}")))?;

        let mut config: ApiConfig = settings
            .try_deserialize()
            .map_err(|e| ApiError::ConfigError(format!("Failed to parse config.toml: {e}")))?;
        config.home = home.to_path_buf();
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.lts_versions.iter().any(|v| *v == 0) {
            return Err(ApiError::InvalidConfig(
                "lts_versions must only contain feature versions above 0".to_string(),
            ));
        }
        if self.source.refresh_interval_secs == 0 {
            return Err(ApiError::InvalidConfig(
                "source.refresh_interval_secs must be greater than 0".to_string(),
            ));
        }
        let pagination = &self.pagination;
        if pagination.default_page_size == 0
            || pagination.max_page_size == 0
            || pagination.larger_page_size == 0
        {
            return Err(ApiError::InvalidConfig(
                "page sizes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// The snapshot file used when no URL is configured.
    pub fn snapshot_path(&self) -> PathBuf {
        self.source
            .path
            .clone()
            .unwrap_or_else(|| self.home.join(SNAPSHOT_FILE_NAME))
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.source.refresh_interval_secs)
    }
}

/// Resolves the home directory from `ADOPTIUM_API_HOME`, falling back to
/// `~/.adoptium-api`, and loads the configuration found there.
pub fn new_api_config() -> Result<ApiConfig> {
    let home = match env::var_os(HOME_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => dirs::home_dir()
            .ok_or_else(|| ApiError::ConfigError("Could not determine home directory".to_string()))?
            .join(DEFAULT_HOME_DIR),
    };
    ApiConfig::load(&home)
}
