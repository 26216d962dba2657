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

//! Maven style version ranges such as `[11.0.1,11.0.3)`, `(,17]` or an exact
//! version. Multiple comma separated groups (`(,1.1),(1.1,)`) are not
//! supported.

use crate::error::{ApiError, Result};
use crate::models::VersionData;
use crate::version::compare::compare_versions;
use crate::version::parser::VersionParser;
use crate::version::semver::SemverParser;
use log::debug;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static VERSION_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<open>[\(\[])?(?P<version0>[^,\]\)]*)?(?P<separator>,)?(?P<version1>[^,\]\)]*)?(?P<close>[\)\]])?$",
    )
    .unwrap()
});

/// How a candidate relates to one bound of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restriction {
    /// `(`
    Gt,
    /// `[`
    Gte,
    /// `)`
    Lt,
    /// `]`
    Lte,
    /// No bracket at all.
    Exact,
}

impl Restriction {
    fn from_open_token(token: Option<&str>) -> Option<Self> {
        match token {
            None => Some(Restriction::Exact),
            Some("[") => Some(Restriction::Gte),
            Some("(") => Some(Restriction::Gt),
            Some(_) => None,
        }
    }

    fn from_close_token(token: Option<&str>) -> Option<Self> {
        match token {
            None => Some(Restriction::Exact),
            Some("]") => Some(Restriction::Lte),
            Some(")") => Some(Restriction::Lt),
            Some(_) => None,
        }
    }

    pub fn test(&self, candidate: &VersionData, bound: &VersionData) -> bool {
        let ordering = compare_versions(candidate, bound);
        match self {
            Restriction::Gt => ordering == Ordering::Greater,
            Restriction::Gte => ordering != Ordering::Less,
            Restriction::Lt => ordering == Ordering::Less,
            Restriction::Lte => ordering != Ordering::Greater,
            Restriction::Exact => ordering == Ordering::Equal,
        }
    }
}

/// A parsed range specification.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionRange {
    /// A spec without brackets names one version.
    Exact(VersionData),
    Bounded {
        open: Restriction,
        lower: VersionData,
        upper: VersionData,
        close: Restriction,
    },
}

impl VersionRange {
    /// Lowest representable version, used for `(,X]` style specs.
    pub fn min_version() -> VersionData {
        VersionData::new(0)
            .with_minor(0)
            .with_security(0)
            .with_patch(0)
            .with_openjdk_version("0.0.0.0")
    }

    /// Highest representable version, used for `[X,)` style specs.
    pub fn max_version() -> VersionData {
        VersionData::new(u32::MAX)
            .with_minor(u32::MAX)
            .with_security(u32::MAX)
            .with_patch(u32::MAX)
            .with_openjdk_version("max")
    }

    /// Parses a range whose bounds are JDK version strings.
    pub fn parse(spec: &str) -> Result<Self> {
        Self::parse_with(spec, |bound| VersionParser::parse(bound, false, true))
    }

    /// Parses a range whose bounds are adopt semver strings.
    pub fn parse_semver(spec: &str) -> Result<Self> {
        Self::parse_with(spec, SemverParser::parse_adopt_semver_non_null)
    }

    fn parse_with<F>(spec: &str, parse_bound: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<VersionData>,
    {
        let invalid = || ApiError::InvalidVersionRange(spec.to_string());

        if !spec.starts_with('[') && !spec.starts_with('(') {
            return parse_bound(spec)
                .map(VersionRange::Exact)
                .map_err(|_| invalid());
        }

        let caps = VERSION_RANGE.captures(spec).ok_or_else(invalid)?;

        let open = Restriction::from_open_token(caps.name("open").map(|m| m.as_str()))
            .ok_or_else(invalid)?;
        let close = Restriction::from_close_token(caps.name("close").map(|m| m.as_str()))
            .ok_or_else(invalid)?;

        let v0 = caps.name("version0").map_or("", |m| m.as_str());
        let v1 = caps.name("version1").map_or("", |m| m.as_str());

        if v0.is_empty() && v1.is_empty() {
            return Err(invalid());
        }

        if (open == Restriction::Exact || close == Restriction::Exact) && open != close {
            return Err(invalid());
        }

        let lower = if v0.is_empty() {
            Self::min_version()
        } else {
            parse_bound(v0).map_err(|_| invalid())?
        };

        let upper = if caps.name("separator").is_none() {
            lower.clone()
        } else if v1.is_empty() {
            Self::max_version()
        } else {
            parse_bound(v1).map_err(|_| invalid())?
        };

        debug!(
            "Range '{spec}' parsed as {open:?} {} .. {} {close:?}",
            lower.openjdk_version, upper.openjdk_version
        );

        Ok(VersionRange::Bounded {
            open,
            lower,
            upper,
            close,
        })
    }

    /// Whether `version` lies in this range.
    ///
    /// Bounded ranges ignore the candidate's pre-release tag.
    pub fn contains(&self, version: &VersionData) -> bool {
        match self {
            VersionRange::Exact(exact) => Restriction::Exact.test(version, exact),
            VersionRange::Bounded {
                open,
                lower,
                upper,
                close,
            } => {
                let candidate = if version.pre.is_some() {
                    version.without_pre()
                } else {
                    version.clone()
                };
                open.test(&candidate, lower) && close.test(&candidate, upper)
            }
        }
    }
}
