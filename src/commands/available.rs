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

use crate::api::ReleaseEndpoint;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::models::ReleaseInfo;
use colored::Colorize;

pub struct AvailableReleasesCommand {
    endpoint: ReleaseEndpoint,
}

impl AvailableReleasesCommand {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            endpoint: ReleaseEndpoint::from_config(config),
        })
    }

    pub fn execute(&self, json: bool) -> Result<()> {
        let info = self.endpoint.available_releases()?;

        if json {
            println!("{}", serde_json::to_string_pretty(&info)?);
        } else {
            print!("{}", render(&info));
        }
        Ok(())
    }
}

fn join(versions: &[u32]) -> String {
    versions
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render(info: &ReleaseInfo) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Available releases:          {}\n",
        join(&info.available_releases)
    ));
    out.push_str(&format!(
        "Available LTS releases:      {}\n",
        join(&info.available_lts_releases)
    ));
    out.push_str(&format!(
        "Most recent LTS:             {}\n",
        info.most_recent_lts.to_string().green()
    ));
    out.push_str(&format!(
        "Most recent feature release: {}\n",
        info.most_recent_feature_release.to_string().green()
    ));
    out.push_str(&format!(
        "Most recent feature version: {}\n",
        info.most_recent_feature_version
    ));
    out.push_str(&format!("Tip version:                 {}\n", info.tip_version));
    out
}
