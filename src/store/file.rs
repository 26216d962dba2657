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
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Reads a JSON array of releases from disk.
pub struct FileReleaseSource {
    path: PathBuf,
}

impl FileReleaseSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ReleaseSource for FileReleaseSource {
    fn name(&self) -> &str {
        "Local File"
    }

    fn fetch_all(&self) -> Result<Vec<Release>> {
        let file = File::open(&self.path).map_err(|e| {
            ApiError::DataSource(format!(
                "Release snapshot not found at {}: {e}",
                self.path.display()
            ))
        })?;

        let releases: Vec<Release> =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                ApiError::DataSource(format!(
                    "Failed to parse {}: {e}",
                    self.path.display()
                ))
            })?;

        debug!(
            "Read {} releases from {}",
            releases.len(),
            self.path.display()
        );
        Ok(releases)
    }
}
