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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::{get_exit_code, status_code};
pub use format::{format_error_chain, format_error_with_color};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to parse version '{0}'")]
    VersionParse(String),

    #[error("Failed to form matcher for '{0}'")]
    InvalidVersionRange(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Page {page} not available (page size {page_size})")]
    PageNotFound { page: usize, page_size: usize },

    #[error("No releases found for feature version {0}")]
    FeatureVersionNotFound(u32),

    #[error("Release '{0}' not found")]
    ReleaseNotFound(String),

    #[error("Multiple releases match '{0}'")]
    AmbiguousRelease(String),

    #[error("Failed to load release data: {0}")]
    DataSource(String),

    #[error("Release data is not loaded")]
    NoSnapshot,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] attohttpc::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Errors caused by the caller's input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ApiError::VersionParse(_)
                | ApiError::InvalidVersionRange(_)
                | ApiError::InvalidParameter(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
