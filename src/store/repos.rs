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

use crate::filter::{BinaryFilter, ReleaseFilter};
use crate::models::Release;
use crate::sort::{ReleaseSorter, SortMethod, SortOrder};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// All releases of one feature (major) version.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureRelease {
    pub feature_version: u32,
    pub releases: Vec<Release>,
}

impl FeatureRelease {
    pub fn new(feature_version: u32, releases: Vec<Release>) -> Self {
        Self {
            feature_version,
            releases,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Release> {
        let index = self.releases.iter().position(|r| r.id == id)?;
        Some(self.releases.remove(index))
    }
}

/// An immutable snapshot of every release, grouped by feature version.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdoptRepos {
    repos: BTreeMap<u32, FeatureRelease>,
}

impl AdoptRepos {
    /// Groups `releases` by feature version. A later release replaces an
    /// earlier one with the same id.
    pub fn new(releases: impl IntoIterator<Item = Release>) -> Self {
        let mut repos = Self::default();
        repos.extend(releases);
        repos
    }

    fn extend(&mut self, releases: impl IntoIterator<Item = Release>) {
        let mut flat: Vec<Release> = std::mem::take(&mut self.repos)
            .into_values()
            .flat_map(|feature| feature.releases)
            .collect();
        let mut positions: HashMap<String, usize> = flat
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();

        for release in releases {
            match positions.get(&release.id) {
                Some(&i) => flat[i] = release,
                None => {
                    positions.insert(release.id.clone(), flat.len());
                    flat.push(release);
                }
            }
        }

        for release in flat {
            let feature = release.version_data.major;
            self.repos
                .entry(feature)
                .or_insert_with(|| FeatureRelease::new(feature, Vec::new()))
                .releases
                .push(release);
        }
    }

    pub fn get_feature_release(&self, version: u32) -> Option<&FeatureRelease> {
        self.repos.get(&version)
    }

    /// Feature versions present, ascending.
    pub fn feature_versions(&self) -> Vec<u32> {
        self.repos.keys().copied().collect()
    }

    pub fn all_releases(&self) -> impl Iterator<Item = &Release> {
        self.repos.values().flat_map(|f| f.releases.iter())
    }

    pub fn len(&self) -> usize {
        self.repos.values().map(|f| f.releases.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Release> {
        self.all_releases().find(|r| r.id == id)
    }

    /// Releases accepted by `filter`, sorted.
    pub fn get_releases(
        &self,
        filter: &ReleaseFilter,
        order: SortOrder,
        method: SortMethod,
    ) -> Vec<Release> {
        sorted(
            self.all_releases().filter(|r| filter.test(r)).cloned().collect(),
            order,
            method,
        )
    }

    /// Like [`get_releases`](Self::get_releases) with binaries narrowed by
    /// `binary_filter`. Releases left without binaries are dropped.
    pub fn get_filtered_releases(
        &self,
        filter: &ReleaseFilter,
        binary_filter: &BinaryFilter,
        order: SortOrder,
        method: SortMethod,
    ) -> Vec<Release> {
        filter_binaries(self.get_releases(filter, order, method), binary_filter)
    }

    /// Filtered releases of one feature version, or `None` when the snapshot
    /// has no such feature version.
    pub fn get_filtered_feature_releases(
        &self,
        version: u32,
        filter: &ReleaseFilter,
        binary_filter: &BinaryFilter,
        order: SortOrder,
        method: SortMethod,
    ) -> Option<Vec<Release>> {
        let feature = self.get_feature_release(version)?;
        let releases = sorted(
            feature
                .releases
                .iter()
                .filter(|r| filter.test(r))
                .cloned()
                .collect(),
            order,
            method,
        );
        Some(filter_binaries(releases, binary_filter))
    }

    /// A copy of this snapshot with `release` added under its feature version.
    pub fn add_release(&self, release: Release) -> Self {
        let mut next = self.clone();
        next.extend([release]);
        next
    }

    /// A copy of this snapshot without the release carrying `id`.
    pub fn remove_release(&self, feature_version: u32, id: &str) -> Self {
        let mut next = self.clone();
        if let Some(feature) = next.repos.get_mut(&feature_version) {
            feature.remove(id);
        }
        next
    }
}

fn sorted(mut releases: Vec<Release>, order: SortOrder, method: SortMethod) -> Vec<Release> {
    ReleaseSorter::sort(&mut releases, order, method);
    releases
}

fn filter_binaries(releases: Vec<Release>, binary_filter: &BinaryFilter) -> Vec<Release> {
    releases
        .iter()
        .map(|r| r.filter_binaries(|b| binary_filter.test(b)))
        .filter(|r| !r.binaries.is_empty())
        .collect()
}
