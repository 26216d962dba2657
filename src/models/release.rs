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
use crate::models::package::{HeapSize, ImageType, JvmImpl, Project};
use crate::models::platform::{Architecture, CLib, OperatingSystem};
use crate::models::vendor::Vendor;
use crate::models::version::VersionData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Ga,
    Ea,
}

impl FromStr for ReleaseType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ga" => Ok(ReleaseType::Ga),
            "ea" => Ok(ReleaseType::Ea),
            _ => Err(ApiError::InvalidParameter(format!(
                "Unknown release type: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseType::Ga => write!(f, "ga"),
            ReleaseType::Ea => write!(f, "ea"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub link: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum_link: Option<String>,
}

/// One downloadable artifact of a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binary {
    pub os: OperatingSystem,
    pub architecture: Architecture,
    pub image_type: ImageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_lib: Option<CLib>,
    pub jvm_impl: JvmImpl,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<Package>,
    pub heap_size: HeapSize,
    #[serde(default)]
    pub download_count: u64,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm_ref: Option<String>,
    #[serde(default)]
    pub project: Project,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub id: String,
    #[serde(default)]
    pub release_link: String,
    pub release_name: String,
    pub timestamp: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub binaries: Vec<Binary>,
    #[serde(default)]
    pub download_count: u64,
    pub release_type: ReleaseType,
    pub vendor: Vendor,
    pub version_data: VersionData,
}

impl Release {
    /// Copy of this release keeping only the binaries accepted by `predicate`.
    pub fn filter_binaries<P>(&self, predicate: P) -> Release
    where
        P: Fn(&Binary) -> bool,
    {
        Release {
            binaries: self
                .binaries
                .iter()
                .filter(|binary| predicate(binary))
                .cloned()
                .collect(),
            ..self.clone()
        }
    }
}

/// A single binary together with the release it was published in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryAssetView {
    pub binary: Binary,
    pub release_name: String,
    pub release_link: String,
    pub vendor: Vendor,
    pub version: VersionData,
}

impl BinaryAssetView {
    pub fn new(release: &Release, binary: Binary) -> Self {
        Self {
            binary,
            release_name: release.release_name.clone(),
            release_link: release.release_link.clone(),
            vendor: release.vendor,
            version: release.version_data.clone(),
        }
    }
}

/// Summary of which feature versions the loaded data covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    pub available_releases: Vec<u32>,
    pub available_lts_releases: Vec<u32>,
    pub most_recent_lts: u32,
    pub most_recent_feature_release: u32,
    pub most_recent_feature_version: u32,
    pub tip_version: u32,
}
