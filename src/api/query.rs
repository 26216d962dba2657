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

use crate::filter::BinaryFilter;
use crate::models::{
    Architecture, CLib, HeapSize, ImageType, JvmImpl, OperatingSystem, Project, ReleaseType,
    Vendor,
};
use crate::sort::{SortMethod, SortOrder};
use chrono::{DateTime, Utc};

/// Query parameters accepted by the release endpoints. Every field is
/// optional; unset fields fall back to the endpoint defaults.
#[derive(Debug, Clone, Default)]
pub struct ReleaseQuery {
    pub version: Option<String>,
    pub semver: bool,
    pub release_type: Option<ReleaseType>,
    pub vendor: Option<Vendor>,
    pub lts: Option<bool>,
    pub os: Option<OperatingSystem>,
    pub architecture: Option<Architecture>,
    pub image_type: Option<ImageType>,
    pub jvm_impl: Option<JvmImpl>,
    pub heap_size: Option<HeapSize>,
    pub project: Option<Project>,
    pub c_lib: Option<CLib>,
    pub before: Option<DateTime<Utc>>,
    pub sort_order: Option<SortOrder>,
    pub sort_method: Option<SortMethod>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub show_page_count: bool,
}

impl ReleaseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn semver(mut self, semver: bool) -> Self {
        self.semver = semver;
        self
    }

    pub fn release_type(mut self, release_type: ReleaseType) -> Self {
        self.release_type = Some(release_type);
        self
    }

    pub fn vendor(mut self, vendor: Vendor) -> Self {
        self.vendor = Some(vendor);
        self
    }

    pub fn lts(mut self, lts: bool) -> Self {
        self.lts = Some(lts);
        self
    }

    pub fn os(mut self, os: OperatingSystem) -> Self {
        self.os = Some(os);
        self
    }

    pub fn architecture(mut self, architecture: Architecture) -> Self {
        self.architecture = Some(architecture);
        self
    }

    pub fn image_type(mut self, image_type: ImageType) -> Self {
        self.image_type = Some(image_type);
        self
    }

    pub fn jvm_impl(mut self, jvm_impl: JvmImpl) -> Self {
        self.jvm_impl = Some(jvm_impl);
        self
    }

    pub fn heap_size(mut self, heap_size: HeapSize) -> Self {
        self.heap_size = Some(heap_size);
        self
    }

    pub fn project(mut self, project: Project) -> Self {
        self.project = Some(project);
        self
    }

    pub fn c_lib(mut self, c_lib: CLib) -> Self {
        self.c_lib = Some(c_lib);
        self
    }

    pub fn before(mut self, before: DateTime<Utc>) -> Self {
        self.before = Some(before);
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    pub fn sort_method(mut self, sort_method: SortMethod) -> Self {
        self.sort_method = Some(sort_method);
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn show_page_count(mut self, show_page_count: bool) -> Self {
        self.show_page_count = show_page_count;
        self
    }

    /// Newest first unless asked otherwise.
    pub fn order(&self) -> SortOrder {
        self.sort_order.unwrap_or_default()
    }

    pub fn method(&self) -> SortMethod {
        self.sort_method.unwrap_or_default()
    }

    /// The binary criteria of this query.
    pub fn binary_filter(&self) -> BinaryFilter {
        BinaryFilter {
            os: self.os,
            architecture: self.architecture,
            image_type: self.image_type,
            jvm_impl: self.jvm_impl,
            heap_size: self.heap_size,
            project: self.project,
            before: self.before,
            c_lib: self.c_lib,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::fixtures::utc;

    #[test]
    fn test_release_query_builder_methods() {
        let query = ReleaseQuery::new()
            .version("[17,18)")
            .semver(true)
            .release_type(ReleaseType::Ga)
            .vendor(Vendor::Eclipse)
            .lts(true)
            .os(OperatingSystem::Linux)
            .architecture(Architecture::Aarch64)
            .image_type(ImageType::Jre)
            .page(2)
            .page_size(5)
            .show_page_count(true);

        assert_eq!(query.version.as_deref(), Some("[17,18)"));
        assert!(query.semver);
        assert_eq!(query.release_type, Some(ReleaseType::Ga));
        assert_eq!(query.vendor, Some(Vendor::Eclipse));
        assert_eq!(query.lts, Some(true));
        assert_eq!(query.os, Some(OperatingSystem::Linux));
        assert_eq!(query.architecture, Some(Architecture::Aarch64));
        assert_eq!(query.image_type, Some(ImageType::Jre));
        assert_eq!(query.page, Some(2));
        assert_eq!(query.page_size, Some(5));
        assert!(query.show_page_count);
    }

    #[test]
    fn test_sort_defaults() {
        let query = ReleaseQuery::new();
        assert_eq!(query.order(), SortOrder::Desc);
        assert_eq!(query.method(), SortMethod::Default);

        let query = query.sort_order(SortOrder::Asc).sort_method(SortMethod::Date);
        assert_eq!(query.order(), SortOrder::Asc);
        assert_eq!(query.method(), SortMethod::Date);
    }

    #[test]
    fn test_binary_filter_carries_binary_criteria() {
        let before = utc("2022-08-01T00:00:00Z");
        let filter = ReleaseQuery::new()
            .os(OperatingSystem::Mac)
            .heap_size(HeapSize::Large)
            .project(Project::Jfr)
            .c_lib(CLib::Musl)
            .jvm_impl(JvmImpl::Hotspot)
            .before(before)
            .binary_filter();

        assert_eq!(filter.os, Some(OperatingSystem::Mac));
        assert_eq!(filter.heap_size, Some(HeapSize::Large));
        assert_eq!(filter.project, Some(Project::Jfr));
        assert_eq!(filter.c_lib, Some(CLib::Musl));
        assert_eq!(filter.jvm_impl, Some(JvmImpl::Hotspot));
        assert_eq!(filter.before, Some(before));
        assert_eq!(filter.architecture, None);
    }
}
