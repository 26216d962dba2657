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
use crate::commands::releases::{print_page_footer, release_table};
use crate::config::ApiConfig;
use crate::error::Result;
use crate::models::ReleaseType;
use std::str::FromStr;

pub struct FeatureReleasesCommand {
    endpoint: ReleaseEndpoint,
}

impl FeatureReleasesCommand {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            endpoint: ReleaseEndpoint::from_config(config),
        })
    }

    pub fn execute(
        &self,
        feature_version: u32,
        release_type: &str,
        query: &ReleaseQuery,
        json: bool,
    ) -> Result<()> {
        let release_type = ReleaseType::from_str(release_type)?;
        let page = self
            .endpoint
            .feature_releases(feature_version, release_type, query)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&page.data)?);
            return Ok(());
        }

        println!("{}", release_table(&page.data));
        print_page_footer(&page);
        Ok(())
    }
}
