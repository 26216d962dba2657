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

use crate::models::{ReleaseInfo, ReleaseType};
use crate::store::repos::AdoptRepos;
use crate::store::supplier::VersionSupplier;
use std::collections::BTreeSet;

pub struct ReleaseVersionResolver;

impl ReleaseVersionResolver {
    /// Summarises a snapshot. Only GA releases count as available; the most
    /// recent feature version and the tip fallback look at every release.
    pub fn form_release_info(repos: &AdoptRepos, supplier: &dyn VersionSupplier) -> ReleaseInfo {
        let ga_majors: BTreeSet<u32> = repos
            .all_releases()
            .filter(|r| r.release_type == ReleaseType::Ga)
            .map(|r| r.version_data.major)
            .collect();

        let available_releases: Vec<u32> = ga_majors.iter().copied().collect();
        let most_recent_feature_release = available_releases.last().copied().unwrap_or(0);

        let lts_versions = supplier.get_lts_versions();
        let available_lts_releases: Vec<u32> = ga_majors
            .iter()
            .copied()
            .filter(|major| lts_versions.contains(major))
            .collect();
        let most_recent_lts = available_lts_releases.last().copied().unwrap_or(0);

        let most_recent_feature_version = repos
            .all_releases()
            .map(|r| r.version_data.major)
            .max()
            .unwrap_or(0);

        let tip_version = supplier
            .get_tip_version()
            .unwrap_or(most_recent_feature_version);

        ReleaseInfo {
            available_releases,
            available_lts_releases,
            most_recent_lts,
            most_recent_feature_release,
            most_recent_feature_version,
            tip_version,
        }
    }
}
