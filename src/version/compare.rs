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

//! The two orderings over [`VersionData`].
//!
//! [`compare_versions`] is the JEP 223 ordering used for range containment and
//! release sorting. [`compare_release_metadata`] is the field order used to
//! tell snapshots apart when release data is refreshed. The two must not be
//! merged: they disagree on field priority.

use crate::models::VersionData;
use std::cmp::Ordering;

/// Orders by major, minor, security, patch, pre-release and build.
///
/// Unset numeric components count as zero. A version carrying a pre-release
/// tag sorts before the same numbers without one.
pub fn compare_versions(a: &VersionData, b: &VersionData) -> Ordering {
    a.major
        .cmp(&b.major)
        .then_with(|| a.minor_or_zero().cmp(&b.minor_or_zero()))
        .then_with(|| a.security_or_zero().cmp(&b.security_or_zero()))
        .then_with(|| a.patch_or_zero().cmp(&b.patch_or_zero()))
        .then_with(|| compare_pre(a.pre.as_deref(), b.pre.as_deref()))
        .then_with(|| a.build_or_zero().cmp(&b.build_or_zero()))
}

/// Equality under [`compare_versions`].
pub fn versions_equal(a: &VersionData, b: &VersionData) -> bool {
    compare_versions(a, b) == Ordering::Equal
}

/// Pre-release tags compare numerically when both are integers and
/// lexicographically otherwise. Absence of a tag is the greatest value.
pub fn compare_pre(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(a), Some(b)) => match (a.parse::<i64>(), b.parse::<i64>()) {
            (Ok(a_num), Ok(b_num)) => a_num.cmp(&b_num),
            _ => a.cmp(b),
        },
    }
}

/// Field order used to detect changed releases between two snapshots:
/// openjdk_version, build, major, minor, optional, patch, pre, security.
/// Unset fields sort first.
pub fn compare_release_metadata(a: &VersionData, b: &VersionData) -> Ordering {
    a.openjdk_version
        .cmp(&b.openjdk_version)
        .then_with(|| a.build.cmp(&b.build))
        .then_with(|| a.major.cmp(&b.major))
        .then_with(|| a.minor.cmp(&b.minor))
        .then_with(|| a.optional.cmp(&b.optional))
        .then_with(|| a.patch.cmp(&b.patch))
        .then_with(|| a.pre.cmp(&b.pre))
        .then_with(|| a.security.cmp(&b.security))
}
