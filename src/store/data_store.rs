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
use crate::error::{ApiError, Result};
use crate::models::{Ecosystem, Release, ReleaseInfo};
use crate::store::file::FileReleaseSource;
use crate::store::http::HttpReleaseSource;
use crate::store::repos::AdoptRepos;
use crate::store::resolver::ReleaseVersionResolver;
use crate::store::source::ReleaseSource;
use crate::store::supplier::{ConfigVersionSupplier, SnapshotVersionSupplier};
use crate::version::compare_release_metadata;
use log::{debug, info, warn};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

#[derive(Default)]
struct Snapshot {
    repos: Arc<AdoptRepos>,
    loaded_at: Option<Instant>,
}

/// Holds the current release snapshot and reloads it from its source once it
/// is older than the refresh interval.
///
/// Readers get an `Arc` to an immutable snapshot; a refresh swaps in a new
/// one without disturbing queries that are still using the old one.
pub struct ApiDataStore {
    source: Box<dyn ReleaseSource>,
    ecosystem: Ecosystem,
    refresh_interval: Duration,
    versions: ConfigVersionSupplier,
    snapshot: RwLock<Snapshot>,
    refreshing: Mutex<()>,
}

impl ApiDataStore {
    pub fn new(
        source: Box<dyn ReleaseSource>,
        ecosystem: Ecosystem,
        refresh_interval: Duration,
        versions: ConfigVersionSupplier,
    ) -> Self {
        Self {
            source,
            ecosystem,
            refresh_interval,
            versions,
            snapshot: RwLock::new(Snapshot::default()),
            refreshing: Mutex::new(()),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        let source: Box<dyn ReleaseSource> = match &config.source.url {
            Some(url) => Box::new(HttpReleaseSource::new(url.clone())),
            None => Box::new(FileReleaseSource::new(config.snapshot_path())),
        };
        debug!("Using {} release source", source.name());

        Self::new(
            source,
            config.ecosystem,
            config.refresh_interval(),
            ConfigVersionSupplier::from_config(config),
        )
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    fn read(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.snapshot.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Snapshot> {
        self.snapshot.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_stale(&self) -> bool {
        match self.read().loaded_at {
            Some(loaded_at) => loaded_at.elapsed() >= self.refresh_interval,
            None => true,
        }
    }

    /// The loaded snapshot, without attempting a refresh.
    pub fn current(&self) -> Result<Arc<AdoptRepos>> {
        let snapshot = self.read();
        match snapshot.loaded_at {
            Some(_) => Ok(Arc::clone(&snapshot.repos)),
            None => Err(ApiError::NoSnapshot),
        }
    }

    /// The current snapshot, refreshed first when stale. A failed refresh
    /// keeps serving the previous snapshot if there is one.
    ///
    /// Only one caller refreshes at a time; callers that waited on it reuse
    /// the snapshot it loaded.
    pub fn get_adopt_repos(&self) -> Result<Arc<AdoptRepos>> {
        if !self.is_stale() {
            return self.current();
        }

        let _refreshing = self.refreshing.lock().unwrap_or_else(|e| e.into_inner());
        if !self.is_stale() {
            return self.current();
        }

        match self.refresh() {
            Ok(repos) => Ok(repos),
            Err(e) => match self.current() {
                Ok(repos) => {
                    warn!("Failed to refresh release data, serving previous snapshot: {e}");
                    Ok(repos)
                }
                Err(_) => Err(e),
            },
        }
    }

    /// Loads a fresh snapshot from the source and swaps it in.
    pub fn refresh(&self) -> Result<Arc<AdoptRepos>> {
        let fetched = self.source.fetch_all()?;
        let fetched_count = fetched.len();
        let releases = sanitize(self.ecosystem, fetched);
        if releases.len() != fetched_count {
            debug!(
                "Dropped {} releases not valid for the {} ecosystem",
                fetched_count - releases.len(),
                self.ecosystem
            );
        }

        let repos = Arc::new(AdoptRepos::new(releases));

        let mut snapshot = self.write();
        log_changes(&snapshot.repos, &repos);
        info!(
            "Loaded {} releases across {} feature versions from {}",
            repos.len(),
            repos.feature_versions().len(),
            self.source.name()
        );
        snapshot.repos = Arc::clone(&repos);
        snapshot.loaded_at = Some(Instant::now());

        Ok(repos)
    }

    pub fn version_supplier(&self) -> Result<SnapshotVersionSupplier> {
        Ok(SnapshotVersionSupplier::new(
            self.get_adopt_repos()?,
            self.versions.clone(),
        ))
    }

    pub fn get_release_info(&self) -> Result<ReleaseInfo> {
        let supplier = self.version_supplier()?;
        let repos = self.current()?;
        Ok(ReleaseVersionResolver::form_release_info(&repos, &supplier))
    }
}

/// Drops vendors and JVM implementations the ecosystem does not serve.
/// Releases left without binaries are dropped too.
fn sanitize(ecosystem: Ecosystem, releases: Vec<Release>) -> Vec<Release> {
    let vendors = ecosystem.valid_vendors();
    let jvm_impls = ecosystem.valid_jvm_impls();

    releases
        .into_iter()
        .filter(|r| vendors.contains(&r.vendor))
        .filter_map(|r| {
            let had_binaries = !r.binaries.is_empty();
            let release = r.filter_binaries(|b| jvm_impls.contains(&b.jvm_impl));
            if had_binaries && release.binaries.is_empty() {
                None
            } else {
                Some(release)
            }
        })
        .collect()
}

fn log_changes(previous: &AdoptRepos, next: &AdoptRepos) {
    let old: HashMap<&str, &Release> = previous
        .all_releases()
        .map(|r| (r.id.as_str(), r))
        .collect();
    let new: HashMap<&str, &Release> = next.all_releases().map(|r| (r.id.as_str(), r)).collect();

    for (id, release) in &new {
        match old.get(id) {
            None => info!("Added release {}", release.release_name),
            Some(before) => {
                let version_changed = compare_release_metadata(
                    &before.version_data,
                    &release.version_data,
                ) != Ordering::Equal;
                if version_changed || before.updated_at != release.updated_at {
                    info!("Updated release {}", release.release_name);
                }
            }
        }
    }

    for (id, release) in &old {
        if !new.contains_key(id) {
            info!("Removed release {}", release.release_name);
        }
    }
}
