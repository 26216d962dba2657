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

use crate::config::ApiConfig;
use crate::store::repos::AdoptRepos;
use std::sync::Arc;

/// Which feature versions exist and which of them are LTS.
pub trait VersionSupplier: Send + Sync {
    /// The feature version currently in development, if known.
    fn get_tip_version(&self) -> Option<u32>;

    fn get_lts_versions(&self) -> Vec<u32>;
}

/// Versions taken from configuration.
#[derive(Debug, Clone)]
pub struct ConfigVersionSupplier {
    lts_versions: Vec<u32>,
    tip_version: Option<u32>,
}

impl ConfigVersionSupplier {
    pub fn new(lts_versions: Vec<u32>, tip_version: Option<u32>) -> Self {
        let mut lts_versions = lts_versions;
        lts_versions.sort_unstable();
        lts_versions.dedup();
        Self {
            lts_versions,
            tip_version,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.lts_versions.clone(), config.tip_version)
    }
}

impl VersionSupplier for ConfigVersionSupplier {
    fn get_tip_version(&self) -> Option<u32> {
        self.tip_version
    }

    fn get_lts_versions(&self) -> Vec<u32> {
        self.lts_versions.clone()
    }
}

/// Feature versions read off a loaded snapshot. The LTS list comes from
/// configuration since release data does not carry it.
#[derive(Debug, Clone)]
pub struct SnapshotVersionSupplier {
    repos: Arc<AdoptRepos>,
    config: ConfigVersionSupplier,
}

impl SnapshotVersionSupplier {
    pub fn new(repos: Arc<AdoptRepos>, config: ConfigVersionSupplier) -> Self {
        Self { repos, config }
    }
}

impl VersionSupplier for SnapshotVersionSupplier {
    fn get_tip_version(&self) -> Option<u32> {
        self.config
            .get_tip_version()
            .or_else(|| self.repos.feature_versions().last().copied())
    }

    fn get_lts_versions(&self) -> Vec<u32> {
        self.config.get_lts_versions()
    }
}
