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
use crate::models::VersionData;
use regex::Regex;
use std::sync::LazyLock;

static ADOPT_SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)(\-(?P<pre>[\.A-Za-z0-9]+))?(\+(?P<build>[\.A-Za-z0-9]+))?$",
    )
    .unwrap()
});

/// Reader for the semver form stored alongside every release,
/// `MAJOR.MINOR.SECURITY[-PRE][+BUILD[.ADOPT_BUILD_NUMBER[.OPTIONAL]]]`.
///
/// The JDK patch component does not fit semver, so it is folded into the
/// build: `17.0.4.1+1` is stored as `17.0.4+101`.
pub struct SemverParser;

impl SemverParser {
    pub fn parse_adopt_semver(version: &str) -> Option<VersionData> {
        let caps = ADOPT_SEMVER.captures(version)?;

        let major: u32 = caps.name("major")?.as_str().parse().ok()?;
        let minor: u32 = caps.name("minor")?.as_str().parse().ok()?;
        let security: u32 = caps.name("patch")?.as_str().parse().ok()?;
        let pre = caps.name("pre").map(|m| m.as_str().to_string());

        let mut adopt_build_number = None;
        let mut build: Option<u32> = None;
        let mut optional = None;

        if let Some(semver_build) = caps.name("build") {
            let parts: Vec<&str> = semver_build.as_str().split('.').collect();
            optional = parts.get(2).map(|s| s.to_string());
            // Stop at the first non-numeric part, keeping what was read so far.
            let adopt = parts.get(1).map(|s| s.parse::<u32>());
            match adopt {
                Some(Err(_)) => {}
                Some(Ok(n)) => {
                    adopt_build_number = Some(n);
                    build = parts.first().and_then(|s| s.parse().ok());
                }
                None => build = parts.first().and_then(|s| s.parse().ok()),
            }
        }

        let mut patch = None;
        if let Some(b) = build {
            let folded = b / 100;
            build = Some(b - folded * 100);
            if folded != 0 {
                patch = Some(folded);
            }
        }

        let mut parts = vec![major, minor, security];
        if let Some(p) = patch {
            parts.push(p);
        }
        while parts.len() > 1 && parts.last() == Some(&0) {
            parts.pop();
        }

        let mut openjdk_version = parts
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".");
        if let Some(pre) = &pre {
            openjdk_version.push_str(&format!("-{pre}"));
        }
        if build.is_some() || optional.is_some() {
            openjdk_version.push('+');
        }
        if let Some(build) = build {
            openjdk_version.push_str(&build.to_string());
        }
        if let Some(optional) = &optional {
            openjdk_version.push_str(&format!("-{optional}"));
        }

        Some(VersionData {
            major,
            minor: Some(minor),
            security: Some(security),
            patch,
            pre,
            adopt_build_number,
            build: Some(build.unwrap_or(0)),
            optional,
            openjdk_version,
            semver: Some(version.to_string()),
        })
    }

    pub fn parse_adopt_semver_non_null(version: &str) -> Result<VersionData> {
        Self::parse_adopt_semver(version).ok_or_else(|| ApiError::VersionParse(version.to_string()))
    }
}
