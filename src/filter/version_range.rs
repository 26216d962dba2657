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

use crate::error::Result;
use crate::models::VersionData;
use crate::version::{SemverParser, VersionParser, VersionRange};
use log::debug;

/// The `version` query term.
///
/// A string without any bracket at either end names a single version, anything
/// else is a range. In semver mode versions are read with
/// [`SemverParser`] and exact matches compare the stored semver strings.
#[derive(Debug, Clone)]
pub struct VersionRangeFilter {
    range: VersionRange,
    semver: bool,
}

impl VersionRangeFilter {
    pub fn new(spec: &str, semver: bool) -> Result<Self> {
        let range = if is_exact(spec) {
            let exact = if semver {
                SemverParser::parse_adopt_semver_non_null(spec)?
            } else {
                VersionParser::parse(spec, false, true)?
            };
            VersionRange::Exact(exact)
        } else if semver {
            VersionRange::parse_semver(spec)?
        } else {
            VersionRange::parse(spec)?
        };

        debug!("Created version filter for '{spec}' (semver: {semver})");
        Ok(Self { range, semver })
    }

    /// `None` when no version was requested.
    pub fn from_query(spec: Option<&str>, semver: bool) -> Result<Option<Self>> {
        spec.map(|s| Self::new(s, semver)).transpose()
    }

    pub fn range(&self) -> &VersionRange {
        &self.range
    }

    pub fn test(&self, version: &VersionData) -> bool {
        match &self.range {
            VersionRange::Exact(exact) if self.semver => {
                exact.semver.is_some() && exact.semver == version.semver
            }
            range => range.contains(version),
        }
    }
}

fn is_exact(spec: &str) -> bool {
    !spec.starts_with(['(', '[']) && !spec.ends_with([')', ']'])
}
