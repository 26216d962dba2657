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

use adoptium_api::config::ApiConfig;
use adoptium_api::models::Release;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary ADOPTIUM_API_HOME holding a release snapshot.
/// The directory is removed when the value is dropped.
pub struct TestHome {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestHome {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create test home directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.path().join("releases.json")
    }

    pub fn write_snapshot(&self, releases: &[Release]) -> &Self {
        let json = serde_json::to_string_pretty(releases).expect("Failed to serialize releases");
        fs::write(self.snapshot_path(), json).expect("Failed to write snapshot");
        self
    }

    pub fn write_config(&self, contents: &str) -> &Self {
        fs::write(self.path().join("config.toml"), contents).expect("Failed to write config");
        self
    }

    /// Configuration reading the snapshot in this home with LTS 8, 11 and 17.
    pub fn config(&self) -> ApiConfig {
        let mut config = ApiConfig::new(self.path().to_path_buf());
        config.lts_versions = vec![8, 11, 17];
        config
    }
}
