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

//! The version string grammar of the Java platform itself (JEP 322).
//!
//! Stricter than the JEP 223 patterns in the parser: no leading zeros, no
//! trailing zero components, and `+` must be followed by a build number or
//! by `-OPT`.

use crate::models::VersionData;
use regex::Regex;
use std::sync::LazyLock;

static RUNTIME_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<vnum>[1-9][0-9]*(?:(?:\.0)*\.[1-9][0-9]*)*)(?:-(?P<pre>[a-zA-Z0-9]+))?(?:(?P<plus>\+)(?P<build>0|[1-9][0-9]*)?)?(?:-(?P<opt>[-a-zA-Z0-9.]+))?$",
    )
    .unwrap()
});

/// Parses `input` with a leading `jdk` removed.
pub(crate) fn parse_runtime_version(input: &str) -> Option<VersionData> {
    let candidate = input.strip_prefix("jdk").unwrap_or(input);
    let caps = RUNTIME_VERSION.captures(candidate)?;

    let components = caps
        .name("vnum")?
        .as_str()
        .split('.')
        .map(|part| part.parse::<u32>().ok())
        .collect::<Option<Vec<u32>>>()?;

    let pre = caps.name("pre").map(|m| m.as_str().to_string());
    let build = match caps.name("build") {
        Some(m) => Some(m.as_str().parse::<u32>().ok()?),
        None => None,
    };
    let optional = caps.name("opt").map(|m| m.as_str().to_string());

    if build.is_none() {
        let has_plus = caps.name("plus").is_some();
        if has_plus && (optional.is_none() || pre.is_some()) {
            return None;
        }
        if !has_plus && optional.is_some() && pre.is_none() {
            return None;
        }
    }

    let mut version = VersionData::new(*components.first()?)
        .with_minor(components.get(1).copied().unwrap_or(0))
        .with_security(components.get(2).copied().unwrap_or(0))
        .with_build(build.unwrap_or(0))
        .with_openjdk_version(candidate);
    version.patch = components.get(3).copied();
    version.pre = pre;
    version.optional = optional;

    Some(version)
}
