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
use crate::models::{Release, ReleaseType};
use crate::pagination::PaginationInfo;
use colored::Colorize;
use comfy_table::{Cell, Color, Table};

pub struct ReleasesCommand {
    endpoint: ReleaseEndpoint,
}

impl ReleasesCommand {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            endpoint: ReleaseEndpoint::from_config(config),
        })
    }

    pub fn execute(&self, query: &ReleaseQuery, json: bool) -> Result<()> {
        let page = self.endpoint.get_releases_page(query)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&page.data)?);
            return Ok(());
        }

        println!("{}", release_table(&page.data));
        println!("{} releases", page.data.len().to_string().cyan());
        print_page_footer(&page);
        Ok(())
    }
}

/// Looks up a single release by name.
pub struct ReleaseCommand {
    endpoint: ReleaseEndpoint,
}

impl ReleaseCommand {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            endpoint: ReleaseEndpoint::from_config(config),
        })
    }

    pub fn execute(&self, release_name: &str, query: &ReleaseQuery, json: bool) -> Result<()> {
        let release = self.endpoint.release_by_name(release_name, query)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&release)?);
            return Ok(());
        }

        println!("{}", release_table(std::slice::from_ref(&release)));
        println!();
        for binary in &release.binaries {
            let link = binary
                .package
                .as_ref()
                .map(|p| p.link.as_str())
                .unwrap_or("-");
            println!(
                "  {} {}/{} {} {}",
                "•".cyan(),
                binary.os,
                binary.architecture,
                binary.image_type,
                link.dimmed()
            );
        }
        Ok(())
    }
}

pub(crate) fn release_table(releases: &[Release]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
    table.set_header(vec![
        Cell::new("Release"),
        Cell::new("Version"),
        Cell::new("Type"),
        Cell::new("Vendor"),
        Cell::new("Released"),
        Cell::new("Binaries"),
    ]);

    for release in releases {
        let release_type = match release.release_type {
            ReleaseType::Ga => Cell::new("GA").fg(Color::Green),
            ReleaseType::Ea => Cell::new("EA").fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(&release.release_name),
            Cell::new(&release.version_data.openjdk_version),
            release_type,
            Cell::new(release.vendor),
            Cell::new(release.timestamp.format("%Y-%m-%d")),
            Cell::new(release.binaries.len()),
        ]);
    }

    table
}

/// Prints the paging footer shared by the paged commands.
pub(crate) fn print_page_footer<T>(page: &PaginationInfo<T>) {
    if let Some(count) = page.page_count {
        println!("Page size {}, {} pages", page.page_size, count.to_string().cyan());
    }
    if let Some(next) = page.next {
        println!(
            "{}: pass {} for more results",
            "More".yellow().bold(),
            format!("--page {next}").cyan()
        );
    }
}
