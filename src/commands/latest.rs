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

use crate::api::{ReleaseEndpoint, ReleaseQuery};
use crate::config::ApiConfig;
use crate::error::Result;
use crate::models::{BinaryAssetView, JvmImpl};
use colored::Colorize;
use comfy_table::{Cell, Table};
use std::str::FromStr;

/// Shows the newest binary of a feature version for each platform.
pub struct LatestAssetsCommand {
    endpoint: ReleaseEndpoint,
}

impl LatestAssetsCommand {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            endpoint: ReleaseEndpoint::from_config(config),
        })
    }

    pub fn execute(
        &self,
        feature_version: u32,
        jvm_impl: &str,
        query: &ReleaseQuery,
        json: bool,
    ) -> Result<()> {
        let jvm_impl = JvmImpl::from_str(jvm_impl)?;
        let assets = self
            .endpoint
            .latest_assets(feature_version, jvm_impl, query)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&assets)?);
            return Ok(());
        }

        if assets.is_empty() {
            println!(
                "{} No {jvm_impl} GA binaries for feature version {feature_version}",
                "✗".red()
            );
            return Ok(());
        }

        println!("{}", asset_table(&assets));
        Ok(())
    }
}

fn asset_table(assets: &[BinaryAssetView]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
    table.set_header(vec![
        Cell::new("OS"),
        Cell::new("Arch"),
        Cell::new("Image"),
        Cell::new("Heap"),
        Cell::new("Release"),
        Cell::new("Version"),
        Cell::new("Package"),
    ]);

    for asset in assets {
        let package = asset
            .binary
            .package
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("-");
        table.add_row(vec![
            Cell::new(asset.binary.os),
            Cell::new(asset.binary.architecture),
            Cell::new(asset.binary.image_type),
            Cell::new(asset.binary.heap_size),
            Cell::new(&asset.release_name),
            Cell::new(&asset.version.openjdk_version),
            Cell::new(package),
        ]);
    }

    table
}
