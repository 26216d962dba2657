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

use crate::api::ReleaseQuery;
use crate::error::{ApiError, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use std::str::FromStr;

/// Release query flags shared by the release listing commands.
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Version or Maven style range (e.g., "17.0.4+8", "[11,12)", "(,8]")
    #[arg(long)]
    pub version: Option<String>,

    /// Read --version as an Adoptium semver string
    #[arg(long)]
    pub semver: bool,

    /// Release type (ga, ea)
    #[arg(long)]
    pub release_type: Option<String>,

    /// Vendor (defaults to the ecosystem's vendor)
    #[arg(long)]
    pub vendor: Option<String>,

    /// Only LTS (true) or only non-LTS (false) feature versions
    #[arg(long)]
    pub lts: Option<bool>,

    /// Operating system (e.g., linux, windows, mac, alpine-linux)
    #[arg(long)]
    pub os: Option<String>,

    /// Architecture (e.g., x64, aarch64)
    #[arg(long, visible_alias = "arch")]
    pub architecture: Option<String>,

    /// Image type (e.g., jdk, jre)
    #[arg(long)]
    pub image_type: Option<String>,

    /// JVM implementation (hotspot, openj9, dragonwell)
    #[arg(long)]
    pub jvm_impl: Option<String>,

    /// Heap size (normal, large)
    #[arg(long)]
    pub heap_size: Option<String>,

    /// Project (jdk, valhalla, metropolis, jfr, shenandoah)
    #[arg(long)]
    pub project: Option<String>,

    /// C library (musl, glibc)
    #[arg(long)]
    pub c_lib: Option<String>,

    /// Only binaries updated before this RFC 3339 timestamp
    #[arg(long)]
    pub before: Option<String>,

    /// Sort order (ASC, DESC)
    #[arg(long)]
    pub sort_order: Option<String>,

    /// Sort method (DEFAULT, DATE)
    #[arg(long)]
    pub sort_method: Option<String>,

    /// Page index, starting at 0
    #[arg(long)]
    pub page: Option<usize>,

    /// Number of results per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Report the total number of pages
    #[arg(long)]
    pub show_page_count: bool,
}

fn parse_opt<T: FromStr<Err = ApiError>>(value: Option<&str>) -> Result<Option<T>> {
    value.map(T::from_str).transpose()
}

impl QueryArgs {
    pub fn to_query(&self) -> Result<ReleaseQuery> {
        let before = self
            .before
            .as_deref()
            .map(|s| {
                s.parse::<DateTime<Utc>>().map_err(|e| {
                    ApiError::InvalidParameter(format!("Invalid --before timestamp '{s}': {e}"))
                })
            })
            .transpose()?;

        Ok(ReleaseQuery {
            version: self.version.clone(),
            semver: self.semver,
            release_type: parse_opt(self.release_type.as_deref())?,
            vendor: parse_opt(self.vendor.as_deref())?,
            lts: self.lts,
            os: parse_opt(self.os.as_deref())?,
            architecture: parse_opt(self.architecture.as_deref())?,
            image_type: parse_opt(self.image_type.as_deref())?,
            jvm_impl: parse_opt(self.jvm_impl.as_deref())?,
            heap_size: parse_opt(self.heap_size.as_deref())?,
            project: parse_opt(self.project.as_deref())?,
            c_lib: parse_opt(self.c_lib.as_deref())?,
            before,
            sort_order: parse_opt(self.sort_order.as_deref())?,
            sort_method: parse_opt(self.sort_method.as_deref())?,
            page: self.page,
            page_size: self.page_size,
            show_page_count: self.show_page_count,
        })
    }
}

/// Binary selection flags of the `latest` command.
#[derive(Args, Debug, Clone, Default)]
pub struct AssetArgs {
    /// Vendor (defaults to the ecosystem's vendor)
    #[arg(long)]
    pub vendor: Option<String>,

    /// Operating system (e.g., linux, windows, mac, alpine-linux)
    #[arg(long)]
    pub os: Option<String>,

    /// Architecture (e.g., x64, aarch64)
    #[arg(long, visible_alias = "arch")]
    pub architecture: Option<String>,

    /// Image type (e.g., jdk, jre)
    #[arg(long)]
    pub image_type: Option<String>,
}

impl AssetArgs {
    pub fn to_query(&self) -> Result<ReleaseQuery> {
        Ok(ReleaseQuery {
            vendor: parse_opt(self.vendor.as_deref())?,
            os: parse_opt(self.os.as_deref())?,
            architecture: parse_opt(self.architecture.as_deref())?,
            image_type: parse_opt(self.image_type.as_deref())?,
            ..ReleaseQuery::default()
        })
    }
}
