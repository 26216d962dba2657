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

use crate::error::ApiError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a ApiError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a ApiError) -> Self {
        let (suggestion, details) = match error {
            ApiError::VersionParse(input) => {
                let suggestion = Some(
                    "Supported formats include '11.0.1+4', '17.0.4.1+1', '19-beta+36', \
                     '8u202-b08' and '1.8.0_202-b08'."
                        .to_string(),
                );
                let details = Some(format!("No version grammar matched the input: {input}"));
                (suggestion, details)
            }
            ApiError::InvalidVersionRange(spec) => {
                let suggestion = Some(
                    "Use a Maven style range such as '[11.0.1,11.0.3)', '(,17]', '[21,)' or \
                     an exact version like '17.0.4+8'."
                        .to_string(),
                );
                let details = Some(format!("Range specification rejected: {spec}"));
                (suggestion, details)
            }
            ApiError::InvalidParameter(msg) => {
                let suggestion = Some(
                    "Run 'adoptium-api help <command>' to see the accepted values.".to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            ApiError::PageNotFound { page, .. } => {
                let suggestion = Some(
                    "Request an earlier page or pass --show-page-count to see how many pages \
                     exist."
                        .to_string(),
                );
                let details = Some(format!("Page {page} is past the end of the result set."));
                (suggestion, details)
            }
            ApiError::FeatureVersionNotFound(version) => {
                let suggestion = Some(
                    "Run 'adoptium-api available-releases' to list the feature versions in the \
                     loaded data."
                        .to_string(),
                );
                let details = Some(format!("Feature version {version} has no releases."));
                (suggestion, details)
            }
            ApiError::ReleaseNotFound(name) => {
                let suggestion = Some(
                    "Run 'adoptium-api release-names' to list the release names that are loaded."
                        .to_string(),
                );
                let details = Some(format!("No release is named {name} for this vendor."));
                (suggestion, details)
            }
            ApiError::DataSource(msg) => {
                let suggestion = Some(
                    "Check the [source] section of config.toml or set ADOPTIUM_API_SOURCE__PATH."
                        .to_string(),
                );
                let details = Some(format!("Release data could not be read: {msg}"));
                (suggestion, details)
            }
            ApiError::NoSnapshot => {
                let suggestion =
                    Some("Configure a release data source before running queries.".to_string());
                (suggestion, None)
            }
            ApiError::InvalidConfig(msg) | ApiError::ConfigError(msg) => {
                let suggestion = Some(
                    "Check config.toml in ADOPTIUM_API_HOME and any ADOPTIUM_API_* environment \
                     variables."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            ApiError::Http(_) => {
                let suggestion =
                    Some("Check your internet connection and the source URL.".to_string());
                (suggestion, None)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    pub fn with_details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
