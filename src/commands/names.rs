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
use crate::commands::releases::print_page_footer;
use crate::config::ApiConfig;
use crate::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct ReleaseList<'a> {
    releases: &'a [String],
}

pub struct ReleaseNamesCommand {
    endpoint: ReleaseEndpoint,
}

impl ReleaseNamesCommand {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            endpoint: ReleaseEndpoint::from_config(config),
        })
    }

    pub fn execute(&self, query: &ReleaseQuery, json: bool) -> Result<()> {
        let page = self.endpoint.release_names(query)?;

        if json {
            let list = ReleaseList {
                releases: &page.data,
            };
            println!("{}", serde_json::to_string_pretty(&list)?);
            return Ok(());
        }

        for name in &page.data {
            println!("{name}");
        }
        print_page_footer(&page);
        Ok(())
    }
}

pub struct ReleaseVersionsCommand {
    endpoint: ReleaseEndpoint,
}

impl ReleaseVersionsCommand {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            endpoint: ReleaseEndpoint::from_config(config),
        })
    }

    pub fn execute(&self, query: &ReleaseQuery, json: bool) -> Result<()> {
        let page = self.endpoint.release_versions(query)?;

        if json {
            let list = serde_json::json!({ "versions": page.data });
            println!("{}", serde_json::to_string_pretty(&list)?);
            return Ok(());
        }

        for version in &page.data {
            match &version.semver {
                Some(semver) if semver != &version.openjdk_version => {
                    println!("{version} ({semver})")
                }
                _ => println!("{version}"),
            }
        }
        print_page_footer(&page);
        Ok(())
    }
}
