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

use crate::filter::vendor::vendor_matches;
use crate::filter::version_range::VersionRangeFilter;
use crate::models::{Ecosystem, JvmImpl, Release, ReleaseType, Vendor};
use crate::store::VersionSupplier;
use log::debug;
use std::sync::Arc;

/// Conjunction of optional release criteria. An unset criterion accepts
/// every release.
#[derive(Debug, Clone, Default)]
pub struct ReleaseFilter {
    ecosystem: Ecosystem,
    lts_versions: Vec<u32>,
    pub release_type: Option<ReleaseType>,
    pub feature_version: Option<u32>,
    pub release_name: Option<String>,
    pub vendor: Option<Vendor>,
    pub version_range: Option<VersionRangeFilter>,
    pub lts: Option<bool>,
    /// Only consulted for vendor matching, binaries are filtered separately.
    pub jvm_impl: Option<JvmImpl>,
}

impl ReleaseFilter {
    pub fn new(ecosystem: Ecosystem, lts_versions: Vec<u32>) -> Self {
        Self {
            ecosystem,
            lts_versions,
            ..Default::default()
        }
    }

    pub fn release_type(mut self, release_type: ReleaseType) -> Self {
        self.release_type = Some(release_type);
        self
    }

    pub fn feature_version(mut self, feature_version: u32) -> Self {
        self.feature_version = Some(feature_version);
        self
    }

    pub fn release_name(mut self, release_name: impl Into<String>) -> Self {
        self.release_name = Some(release_name.into());
        self
    }

    pub fn vendor(mut self, vendor: Vendor) -> Self {
        self.vendor = Some(vendor);
        self
    }

    pub fn version_range(mut self, version_range: VersionRangeFilter) -> Self {
        self.version_range = Some(version_range);
        self
    }

    pub fn lts(mut self, lts: bool) -> Self {
        self.lts = Some(lts);
        self
    }

    pub fn jvm_impl(mut self, jvm_impl: JvmImpl) -> Self {
        self.jvm_impl = Some(jvm_impl);
        self
    }

    pub fn lts_versions(&self) -> &[u32] {
        &self.lts_versions
    }

    pub fn test(&self, release: &Release) -> bool {
        let version = &release.version_data;

        self.release_type
            .is_none_or(|release_type| release.release_type == release_type)
            && self
                .feature_version
                .is_none_or(|feature| version.major == feature)
            && self
                .release_name
                .as_deref()
                .is_none_or(|name| release.release_name == name)
            && vendor_matches(self.ecosystem, self.vendor, self.jvm_impl, release.vendor)
            && self
                .version_range
                .as_ref()
                .is_none_or(|range| range.test(version))
            && self
                .lts
                .is_none_or(|lts| self.lts_versions.contains(&version.major) == lts)
    }
}

/// Builds [`ReleaseFilter`]s that see the LTS list current at query time.
#[derive(Clone)]
pub struct ReleaseFilterFactory {
    ecosystem: Ecosystem,
    supplier: Arc<dyn VersionSupplier>,
}

impl ReleaseFilterFactory {
    pub fn new(ecosystem: Ecosystem, supplier: Arc<dyn VersionSupplier>) -> Self {
        Self {
            ecosystem,
            supplier,
        }
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    pub fn create_filter(&self) -> ReleaseFilter {
        let lts_versions = self.supplier.get_lts_versions();
        debug!("Creating release filter with LTS versions {lts_versions:?}");
        ReleaseFilter::new(self.ecosystem, lts_versions)
    }
}
