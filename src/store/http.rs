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
use crate::models::Release;
use crate::store::source::ReleaseSource;
use crate::user_agent;
use attohttpc::Session;
use log::info;

/// Downloads a JSON array of releases from a URL.
pub struct HttpReleaseSource {
    url: String,
    client: Session,
}

impl HttpReleaseSource {
    pub fn new(url: String) -> Self {
        let mut client = Session::new();
        client.header("User-Agent", user_agent::release_source_client());

        Self { url, client }
    }
}

impl ReleaseSource for HttpReleaseSource {
    fn name(&self) -> &str {
        "HTTP/Web"
    }

    fn fetch_all(&self) -> Result<Vec<Release>> {
        let response = self.client.get(&self.url).send()?;

        if !response.is_success() {
            return Err(ApiError::DataSource(format!(
                "Failed to fetch {}: HTTP {}",
                self.url,
                response.status()
            )));
        }

        let releases: Vec<Release> = response.json().map_err(|e| {
            ApiError::DataSource(format!("Failed to parse {}: {e}", self.url))
        })?;

        info!("Downloaded {} releases from {}", releases.len(), self.url);
        Ok(releases)
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
