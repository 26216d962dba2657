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

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Parsed form of a JDK version string.
///
/// Numeric components that the input did not carry stay `None`. Ordering
/// treats them as zero (see [`crate::version::compare`]) while range bounds
/// and display keep the distinction.
///
/// Equality covers `major`, `minor`, `security`, `patch`, `pre`, `build` and
/// `optional`. The display string, the semver string and the adopt build
/// number are descriptive and do not take part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionData {
    pub major: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adopt_build_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<String>,
    #[serde(default)]
    pub openjdk_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semver: Option<String>,
}

impl VersionData {
    pub fn new(major: u32) -> Self {
        Self {
            major,
            minor: None,
            security: None,
            patch: None,
            pre: None,
            adopt_build_number: None,
            build: None,
            optional: None,
            openjdk_version: major.to_string(),
            semver: None,
        }
    }

    pub fn with_minor(mut self, minor: u32) -> Self {
        self.minor = Some(minor);
        self
    }

    pub fn with_security(mut self, security: u32) -> Self {
        self.security = Some(security);
        self
    }

    pub fn with_patch(mut self, patch: u32) -> Self {
        self.patch = Some(patch);
        self
    }

    pub fn with_pre(mut self, pre: impl Into<String>) -> Self {
        self.pre = Some(pre.into());
        self
    }

    pub fn with_build(mut self, build: u32) -> Self {
        self.build = Some(build);
        self
    }

    pub fn with_optional(mut self, optional: impl Into<String>) -> Self {
        self.optional = Some(optional.into());
        self
    }

    pub fn with_openjdk_version(mut self, openjdk_version: impl Into<String>) -> Self {
        self.openjdk_version = openjdk_version.into();
        self
    }

    /// Copy of this version with the pre-release tag removed.
    ///
    /// Range containment is evaluated on this copy so that `17.0.0-beta`
    /// is not picked up by a range ending just below `17.0.0`.
    pub fn without_pre(&self) -> Self {
        Self {
            pre: None,
            ..self.clone()
        }
    }

    pub fn minor_or_zero(&self) -> u32 {
        self.minor.unwrap_or(0)
    }

    pub fn security_or_zero(&self) -> u32 {
        self.security.unwrap_or(0)
    }

    pub fn patch_or_zero(&self) -> u32 {
        self.patch.unwrap_or(0)
    }

    pub fn build_or_zero(&self) -> u32 {
        self.build.unwrap_or(0)
    }
}

impl PartialEq for VersionData {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.security == other.security
            && self.patch == other.patch
            && self.pre == other.pre
            && self.build == other.build
            && self.optional == other.optional
    }
}

impl Eq for VersionData {}

impl Hash for VersionData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.security.hash(state);
        self.patch.hash(state);
        self.pre.hash(state);
        self.build.hash(state);
        self.optional.hash(state);
    }
}

impl std::fmt::Display for VersionData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.openjdk_version)
    }
}
