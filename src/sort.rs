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
use crate::models::Release;
use crate::version::compare_versions;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ApiError::InvalidParameter(format!(
                "Unknown sort order: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortMethod {
    /// Version, then timestamp.
    #[default]
    Default,
    /// Timestamp, then version.
    Date,
}

impl FromStr for SortMethod {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "default" => Ok(SortMethod::Default),
            "date" => Ok(SortMethod::Date),
            _ => Err(ApiError::InvalidParameter(format!(
                "Unknown sort method: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for SortMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMethod::Default => write!(f, "DEFAULT"),
            SortMethod::Date => write!(f, "DATE"),
        }
    }
}

pub struct ReleaseSorter;

impl ReleaseSorter {
    /// Version, then timestamp, then release name.
    pub fn version_then_time(a: &Release, b: &Release) -> Ordering {
        compare_versions(&a.version_data, &b.version_data)
            .then_with(|| a.timestamp.cmp(&b.timestamp))
            .then_with(|| a.release_name.cmp(&b.release_name))
    }

    /// Timestamp, then version, then release name.
    pub fn time_then_version(a: &Release, b: &Release) -> Ordering {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| compare_versions(&a.version_data, &b.version_data))
            .then_with(|| a.release_name.cmp(&b.release_name))
    }

    /// The comparator for `method`, reversed as a whole for descending order.
    pub fn comparator(order: SortOrder, method: SortMethod) -> impl Fn(&Release, &Release) -> Ordering {
        let base: fn(&Release, &Release) -> Ordering = match method {
            SortMethod::Default => Self::version_then_time,
            SortMethod::Date => Self::time_then_version,
        };
        move |a, b| match order {
            SortOrder::Asc => base(a, b),
            SortOrder::Desc => base(b, a),
        }
    }

    /// Stable sort in place.
    pub fn sort(releases: &mut [Release], order: SortOrder, method: SortMethod) {
        releases.sort_by(Self::comparator(order, method));
    }
}
