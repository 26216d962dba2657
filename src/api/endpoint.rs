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

use crate::api::query::ReleaseQuery;
use crate::config::{ApiConfig, PaginationConfig};
use crate::error::{ApiError, Result};
use crate::filter::{BinaryFilter, ReleaseFilter, ReleaseFilterFactory, VersionRangeFilter};
use crate::models::{
    Architecture, BinaryAssetView, HeapSize, ImageType, JvmImpl, OperatingSystem, Release,
    ReleaseInfo, ReleaseType, VersionData,
};
use crate::pagination::{PaginationInfo, get_page};
use crate::sort::{SortMethod, SortOrder};
use crate::store::{ApiDataStore, ConfigVersionSupplier};
use log::debug;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

type BinaryPermutation = (Architecture, HeapSize, ImageType, OperatingSystem);

/// Answers release queries against the data store.
pub struct ReleaseEndpoint {
    store: Arc<ApiDataStore>,
    filters: ReleaseFilterFactory,
    pagination: PaginationConfig,
}

impl ReleaseEndpoint {
    pub fn new(
        store: Arc<ApiDataStore>,
        filters: ReleaseFilterFactory,
        pagination: PaginationConfig,
    ) -> Self {
        Self {
            store,
            filters,
            pagination,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        let store = Arc::new(ApiDataStore::from_config(config));
        let supplier = Arc::new(ConfigVersionSupplier::from_config(config));
        Self::new(
            store,
            ReleaseFilterFactory::new(config.ecosystem, supplier),
            config.pagination.clone(),
        )
    }

    pub fn store(&self) -> &Arc<ApiDataStore> {
        &self.store
    }

    fn release_filter(&self, query: &ReleaseQuery) -> Result<ReleaseFilter> {
        let mut filter = self.filters.create_filter();
        filter.release_type = query.release_type;
        filter.vendor = Some(
            query
                .vendor
                .unwrap_or_else(|| self.filters.ecosystem().default_vendor()),
        );
        filter.version_range =
            VersionRangeFilter::from_query(query.version.as_deref(), query.semver)?;
        filter.lts = query.lts;
        filter.jvm_impl = query.jvm_impl;
        debug!("Release filter for query: {filter:?}");
        Ok(filter)
    }

    /// Every release matching the query, sorted and with binaries narrowed
    /// to the requested ones.
    pub fn get_releases(&self, query: &ReleaseQuery) -> Result<Vec<Release>> {
        let filter = self.release_filter(query)?;
        let repos = self.store.get_adopt_repos()?;
        Ok(repos.get_filtered_releases(
            &filter,
            &query.binary_filter(),
            query.order(),
            query.method(),
        ))
    }

    /// [`get_releases`](Self::get_releases), one page at a time.
    pub fn get_releases_page(&self, query: &ReleaseQuery) -> Result<PaginationInfo<Release>> {
        get_page(
            query.page_size,
            query.page,
            self.get_releases(query)?,
            query.show_page_count,
            self.pagination.limits(),
        )
    }

    /// Distinct release names of the matching releases, one page at a time.
    pub fn release_names(&self, query: &ReleaseQuery) -> Result<PaginationInfo<String>> {
        let names = distinct(
            self.get_releases(query)?
                .into_iter()
                .map(|release| release.release_name),
        );
        get_page(
            query.page_size,
            query.page,
            names,
            query.show_page_count,
            self.pagination.limits(),
        )
    }

    /// Distinct versions of the matching releases. Pages may be larger than
    /// for the other endpoints.
    pub fn release_versions(&self, query: &ReleaseQuery) -> Result<PaginationInfo<VersionData>> {
        let versions = distinct(
            self.get_releases(query)?
                .into_iter()
                .map(|release| release.version_data),
        );
        get_page(
            query.page_size,
            query.page,
            versions,
            query.show_page_count,
            self.pagination.larger_limits(),
        )
    }

    /// Releases of one feature version and release type.
    pub fn feature_releases(
        &self,
        feature_version: u32,
        release_type: ReleaseType,
        query: &ReleaseQuery,
    ) -> Result<PaginationInfo<Release>> {
        let filter = self
            .release_filter(query)?
            .feature_version(feature_version)
            .release_type(release_type);
        let repos = self.store.get_adopt_repos()?;
        let releases = repos
            .get_filtered_feature_releases(
                feature_version,
                &filter,
                &query.binary_filter(),
                query.order(),
                query.method(),
            )
            .ok_or(ApiError::FeatureVersionNotFound(feature_version))?;

        get_page(
            query.page_size,
            query.page,
            releases,
            query.show_page_count,
            self.pagination.limits(),
        )
    }

    /// The single release called `release_name` from the query's vendor.
    pub fn release_by_name(&self, release_name: &str, query: &ReleaseQuery) -> Result<Release> {
        let release_name = release_name.trim();
        if release_name.is_empty() {
            return Err(ApiError::InvalidParameter(
                "release_name must not be empty".to_string(),
            ));
        }

        let filter = self.release_filter(query)?.release_name(release_name);
        let repos = self.store.get_adopt_repos()?;
        let mut releases = repos.get_filtered_releases(
            &filter,
            &query.binary_filter(),
            query.order(),
            query.method(),
        );

        match releases.len() {
            0 => Err(ApiError::ReleaseNotFound(release_name.to_string())),
            1 => Ok(releases.remove(0)),
            _ => Err(ApiError::AmbiguousRelease(release_name.to_string())),
        }
    }

    /// The most recent GA binary of `feature_version` for every combination
    /// of architecture, heap size, image type and OS. Only the query's
    /// vendor, os, architecture and image type are taken into account.
    pub fn latest_assets(
        &self,
        feature_version: u32,
        jvm_impl: JvmImpl,
        query: &ReleaseQuery,
    ) -> Result<Vec<BinaryAssetView>> {
        let vendor = query
            .vendor
            .unwrap_or_else(|| self.filters.ecosystem().default_vendor());
        let filter = self
            .filters
            .create_filter()
            .release_type(ReleaseType::Ga)
            .feature_version(feature_version)
            .vendor(vendor)
            .jvm_impl(jvm_impl);
        let binary_filter = BinaryFilter {
            os: query.os,
            architecture: query.architecture,
            image_type: query.image_type,
            ..BinaryFilter::new().jvm_impl(jvm_impl)
        };

        let repos = self.store.get_adopt_repos()?;
        let releases = repos
            .get_filtered_feature_releases(
                feature_version,
                &filter,
                &binary_filter,
                SortOrder::Asc,
                SortMethod::Default,
            )
            .unwrap_or_default();

        Ok(latest_per_permutation(&releases))
    }

    pub fn available_releases(&self) -> Result<ReleaseInfo> {
        self.store.get_release_info()
    }
}

/// Pairs every binary with its release and keeps the last pair per
/// permutation. `releases` must be sorted oldest first.
fn latest_per_permutation(releases: &[Release]) -> Vec<BinaryAssetView> {
    let mut latest: Vec<BinaryAssetView> = Vec::new();
    let mut slots: HashMap<BinaryPermutation, usize> = HashMap::new();

    for release in releases {
        for binary in &release.binaries {
            let key = (
                binary.architecture,
                binary.heap_size,
                binary.image_type,
                binary.os,
            );
            let view = BinaryAssetView::new(release, binary.clone());
            match slots.get(&key) {
                Some(&i) => latest[i] = view,
                None => {
                    slots.insert(key, latest.len());
                    latest.push(view);
                }
            }
        }
    }

    latest
}

/// Drops repeated items, keeping the first occurrence and the order.
fn distinct<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vendor;
    use crate::test::fixtures::{create_test_binary, sample_repos};
    use std::fs;
    use tempfile::TempDir;

    fn write_snapshot(dir: &TempDir, releases: &[Release]) -> ApiConfig {
        let path = dir.path().join("releases.json");
        fs::write(&path, serde_json::to_string(releases).unwrap()).unwrap();

        let mut config = ApiConfig::new(dir.path().to_path_buf());
        config.lts_versions = vec![8, 11, 17];
        config.source.path = Some(path);
        config
    }

    fn endpoint() -> (TempDir, ReleaseEndpoint) {
        let dir = TempDir::new().unwrap();
        let releases: Vec<Release> = sample_repos().all_releases().cloned().collect();
        let config = write_snapshot(&dir, &releases);
        (dir, ReleaseEndpoint::from_config(&config))
    }

    fn names(releases: &[Release]) -> Vec<&str> {
        releases.iter().map(|r| r.release_name.as_str()).collect()
    }

    #[test]
    fn test_get_releases_newest_first_by_default() {
        let (_dir, endpoint) = endpoint();
        let releases = endpoint.get_releases(&ReleaseQuery::new()).unwrap();

        assert_eq!(
            names(&releases),
            vec![
                "jdk-19+20",
                "jdk-18.0.2+9",
                "jdk-17.0.4+8",
                "jdk-17.0.3+7",
                "jdk-11.0.16+8",
                "jdk8u345-b01",
            ]
        );
    }

    #[test]
    fn test_get_releases_ascending() {
        let (_dir, endpoint) = endpoint();
        let query = ReleaseQuery::new().sort_order(SortOrder::Asc);
        let releases = endpoint.get_releases(&query).unwrap();

        assert_eq!(releases.first().unwrap().release_name, "jdk8u345-b01");
        assert_eq!(releases.last().unwrap().release_name, "jdk-19+20");
    }

    #[test]
    fn test_get_releases_in_range() {
        let (_dir, endpoint) = endpoint();
        let query = ReleaseQuery::new().version("[17,18)");
        let releases = endpoint.get_releases(&query).unwrap();

        assert_eq!(names(&releases), vec!["jdk-17.0.4+8", "jdk-17.0.3+7"]);
    }

    #[test]
    fn test_get_releases_exact_version() {
        let (_dir, endpoint) = endpoint();
        let query = ReleaseQuery::new().version("11.0.16+8");
        let releases = endpoint.get_releases(&query).unwrap();

        assert_eq!(names(&releases), vec!["jdk-11.0.16+8"]);
    }

    #[test]
    fn test_get_releases_rejects_bad_range() {
        let (_dir, endpoint) = endpoint();
        let query = ReleaseQuery::new().version("[8.0.1]foo");

        assert!(matches!(
            endpoint.get_releases(&query),
            Err(ApiError::InvalidVersionRange(_))
        ));
    }

    #[test]
    fn test_get_releases_lts_and_type() {
        let (_dir, endpoint) = endpoint();

        let non_lts = endpoint
            .get_releases(&ReleaseQuery::new().lts(false))
            .unwrap();
        assert_eq!(names(&non_lts), vec!["jdk-19+20", "jdk-18.0.2+9"]);

        let ea = endpoint
            .get_releases(&ReleaseQuery::new().release_type(ReleaseType::Ea))
            .unwrap();
        assert_eq!(names(&ea), vec!["jdk-19+20"]);
    }

    #[test]
    fn test_get_releases_other_vendor_is_empty() {
        let (_dir, endpoint) = endpoint();
        let query = ReleaseQuery::new().vendor(Vendor::Ibm);

        assert!(endpoint.get_releases(&query).unwrap().is_empty());
    }

    #[test]
    fn test_get_releases_drops_releases_without_matching_binaries() {
        let dir = TempDir::new().unwrap();
        let mut releases: Vec<Release> = sample_repos().all_releases().cloned().collect();
        for release in releases.iter_mut().filter(|r| r.version_data.major == 17) {
            release.binaries.push(create_test_binary(
                OperatingSystem::Windows,
                Architecture::X64,
                ImageType::Jre,
            ));
        }
        let endpoint = ReleaseEndpoint::from_config(&write_snapshot(&dir, &releases));

        let query = ReleaseQuery::new()
            .os(OperatingSystem::Windows)
            .image_type(ImageType::Jre);
        let found = endpoint.get_releases(&query).unwrap();

        assert_eq!(names(&found), vec!["jdk-17.0.4+8", "jdk-17.0.3+7"]);
        assert!(found.iter().all(|r| r.binaries.len() == 1));
    }

    #[test]
    fn test_get_releases_page() {
        let (_dir, endpoint) = endpoint();
        let query = ReleaseQuery::new().page_size(4).show_page_count(true);

        let first = endpoint.get_releases_page(&query).unwrap();
        assert_eq!(first.data.len(), 4);
        assert_eq!(first.next, Some(1));
        assert_eq!(first.page_count, Some(2));

        let second = endpoint.get_releases_page(&query.clone().page(1)).unwrap();
        assert_eq!(names(&second.data), vec!["jdk-11.0.16+8", "jdk8u345-b01"]);
        assert_eq!(second.next, None);

        assert!(matches!(
            endpoint.get_releases_page(&query.page(2)),
            Err(ApiError::PageNotFound { page: 2, .. })
        ));
    }

    fn assets_endpoint(dir: &TempDir) -> ReleaseEndpoint {
        let mut older = crate::test::fixtures::create_test_release("jdk-17.0.3+7", "17.0.3+7");
        older.timestamp = crate::test::fixtures::utc("2022-04-20T00:00:00Z");
        older.binaries = vec![
            create_test_binary(OperatingSystem::Linux, Architecture::X64, ImageType::Jdk),
            create_test_binary(OperatingSystem::Windows, Architecture::X64, ImageType::Jdk),
            create_test_binary(OperatingSystem::Linux, Architecture::X64, ImageType::Jre),
        ];
        let mut newer = crate::test::fixtures::create_test_release("jdk-17.0.4+8", "17.0.4+8");
        newer.binaries = vec![
            create_test_binary(OperatingSystem::Linux, Architecture::X64, ImageType::Jdk),
            create_test_binary(OperatingSystem::Windows, Architecture::X64, ImageType::Jdk),
        ];
        let mut ea = crate::test::fixtures::create_test_release("jdk-17.0.5+1-ea", "17.0.5+1");
        ea.release_type = ReleaseType::Ea;
        let eleven = crate::test::fixtures::create_test_release("jdk-11.0.16+8", "11.0.16+8");

        ReleaseEndpoint::from_config(&write_snapshot(dir, &[newer, eleven, ea, older]))
    }

    #[test]
    fn test_latest_assets_last_release_wins_per_permutation() {
        let dir = TempDir::new().unwrap();
        let endpoint = assets_endpoint(&dir);

        let assets = endpoint
            .latest_assets(17, JvmImpl::Hotspot, &ReleaseQuery::new())
            .unwrap();
        let found: Vec<(&str, OperatingSystem, ImageType)> = assets
            .iter()
            .map(|a| (a.release_name.as_str(), a.binary.os, a.binary.image_type))
            .collect();

        assert_eq!(
            found,
            vec![
                ("jdk-17.0.4+8", OperatingSystem::Linux, ImageType::Jdk),
                ("jdk-17.0.4+8", OperatingSystem::Windows, ImageType::Jdk),
                ("jdk-17.0.3+7", OperatingSystem::Linux, ImageType::Jre),
            ]
        );
        assert_eq!(assets[0].version.security, Some(4));
        assert_eq!(assets[0].vendor, Vendor::Eclipse);
        assert_eq!(
            assets[0].release_link,
            "https://example.com/releases/jdk-17.0.4+8"
        );
    }

    #[test]
    fn test_latest_assets_binary_criteria() {
        let dir = TempDir::new().unwrap();
        let endpoint = assets_endpoint(&dir);

        let windows = endpoint
            .latest_assets(17, JvmImpl::Hotspot, &ReleaseQuery::new().os(OperatingSystem::Windows))
            .unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].release_name, "jdk-17.0.4+8");

        let jre = endpoint
            .latest_assets(17, JvmImpl::Hotspot, &ReleaseQuery::new().image_type(ImageType::Jre))
            .unwrap();
        assert_eq!(jre.len(), 1);
        assert_eq!(jre[0].release_name, "jdk-17.0.3+7");

        assert!(endpoint
            .latest_assets(17, JvmImpl::Openj9, &ReleaseQuery::new())
            .unwrap()
            .is_empty());
        assert!(endpoint
            .latest_assets(17, JvmImpl::Hotspot, &ReleaseQuery::new().vendor(Vendor::Ibm))
            .unwrap()
            .is_empty());
        assert!(endpoint
            .latest_assets(21, JvmImpl::Hotspot, &ReleaseQuery::new())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_release_names_paged() {
        let (_dir, endpoint) = endpoint();
        let query = ReleaseQuery::new().page_size(2).show_page_count(true);
        let page = endpoint.release_names(&query).unwrap();

        assert_eq!(page.data, vec!["jdk-19+20", "jdk-18.0.2+9"]);
        assert_eq!(page.next, Some(1));
        assert_eq!(page.page_count, Some(3));

        let last = endpoint.release_names(&query.page(2)).unwrap();
        assert_eq!(last.data, vec!["jdk-11.0.16+8", "jdk8u345-b01"]);
        assert_eq!(last.next, None);
    }

    #[test]
    fn test_release_names_past_end() {
        let (_dir, endpoint) = endpoint();
        let query = ReleaseQuery::new().page(5);

        assert!(matches!(
            endpoint.release_names(&query),
            Err(ApiError::PageNotFound { page: 5, .. })
        ));
    }

    #[test]
    fn test_release_names_without_results_is_not_found() {
        let (_dir, endpoint) = endpoint();
        let query = ReleaseQuery::new().vendor(Vendor::Ibm);

        assert!(matches!(
            endpoint.release_names(&query),
            Err(ApiError::PageNotFound { page: 0, .. })
        ));
    }

    #[test]
    fn test_release_versions_use_larger_page_limit() {
        let (_dir, endpoint) = endpoint();
        let query = ReleaseQuery::new().page_size(40);

        let names = endpoint.release_names(&query).unwrap();
        let versions = endpoint.release_versions(&query).unwrap();

        assert_eq!(names.page_size, 20);
        assert_eq!(versions.page_size, 40);
        assert_eq!(versions.data.len(), 6);
        assert_eq!(versions.data[0].major, 19);
        assert_eq!(versions.data[0].pre.as_deref(), Some("beta"));
    }

    #[test]
    fn test_release_versions_are_distinct() {
        let dir = TempDir::new().unwrap();
        let mut releases: Vec<Release> = sample_repos().all_releases().cloned().collect();
        let mut respin = releases
            .iter()
            .find(|r| r.release_name == "jdk-18.0.2+9")
            .cloned()
            .unwrap();
        respin.id = "respin".to_string();
        respin.release_name = "jdk-18.0.2+9.1".to_string();
        releases.push(respin);
        let endpoint = ReleaseEndpoint::from_config(&write_snapshot(&dir, &releases));

        let query = ReleaseQuery::new().version("[18,19)");
        assert_eq!(endpoint.release_names(&query).unwrap().data.len(), 2);
        assert_eq!(endpoint.release_versions(&query).unwrap().data.len(), 1);
    }

    #[test]
    fn test_feature_releases() {
        let (_dir, endpoint) = endpoint();
        let page = endpoint
            .feature_releases(17, ReleaseType::Ga, &ReleaseQuery::new())
            .unwrap();

        assert_eq!(names(&page.data), vec!["jdk-17.0.4+8", "jdk-17.0.3+7"]);
        assert_eq!(page.next, None);
    }

    #[test]
    fn test_feature_releases_sorted_by_date() {
        let (_dir, endpoint) = endpoint();
        let query = ReleaseQuery::new()
            .sort_method(crate::sort::SortMethod::Date)
            .sort_order(SortOrder::Asc);
        let page = endpoint
            .feature_releases(17, ReleaseType::Ga, &query)
            .unwrap();

        assert_eq!(names(&page.data), vec!["jdk-17.0.3+7", "jdk-17.0.4+8"]);
    }

    #[test]
    fn test_feature_releases_unknown_version() {
        let (_dir, endpoint) = endpoint();

        assert!(matches!(
            endpoint.feature_releases(12, ReleaseType::Ga, &ReleaseQuery::new()),
            Err(ApiError::FeatureVersionNotFound(12))
        ));
    }

    #[test]
    fn test_feature_releases_type_overrides_query() {
        let (_dir, endpoint) = endpoint();
        let query = ReleaseQuery::new().release_type(ReleaseType::Ga);
        let page = endpoint
            .feature_releases(19, ReleaseType::Ea, &query)
            .unwrap();

        assert_eq!(names(&page.data), vec!["jdk-19+20"]);
    }

    #[test]
    fn test_release_by_name() {
        let (_dir, endpoint) = endpoint();

        let release = endpoint
            .release_by_name("jdk-11.0.16+8", &ReleaseQuery::new())
            .unwrap();
        assert_eq!(release.version_data.major, 11);

        assert!(matches!(
            endpoint.release_by_name("jdk-12+33", &ReleaseQuery::new()),
            Err(ApiError::ReleaseNotFound(_))
        ));
        assert!(matches!(
            endpoint.release_by_name("  ", &ReleaseQuery::new()),
            Err(ApiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_available_releases() {
        let (_dir, endpoint) = endpoint();
        let info = endpoint.available_releases().unwrap();

        assert_eq!(info.available_releases, vec![8, 11, 17, 18]);
        assert_eq!(info.available_lts_releases, vec![8, 11, 17]);
        assert_eq!(info.most_recent_feature_version, 19);
    }

    #[test]
    fn test_missing_snapshot_is_a_data_source_error() {
        let dir = TempDir::new().unwrap();
        let config = ApiConfig::new(dir.path().to_path_buf());
        let endpoint = ReleaseEndpoint::from_config(&config);

        assert!(matches!(
            endpoint.get_releases(&ReleaseQuery::new()),
            Err(ApiError::DataSource(_))
        ));
    }

    #[test]
    fn test_distinct_keeps_first_occurrence() {
        assert_eq!(distinct(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }
}
