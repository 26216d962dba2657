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

use crate::error::Result;
use crate::filter::VersionRangeFilter;
use crate::version::{SemverParser, VersionParser};
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RangeMatch {
    pub version: String,
    pub matches: bool,
}

/// Checks versions against a version range.
pub struct RangeCommand;

impl RangeCommand {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    pub fn evaluate(&self, spec: &str, versions: &[String], semver: bool) -> Result<Vec<RangeMatch>> {
        let filter = VersionRangeFilter::new(spec, semver)?;

        versions
            .iter()
            .map(|version| {
                let parsed = if semver {
                    SemverParser::parse_adopt_semver_non_null(version)?
                } else {
                    VersionParser::parse(version, false, true)?
                };
                Ok(RangeMatch {
                    version: version.clone(),
                    matches: filter.test(&parsed),
                })
            })
            .collect()
    }

    pub fn execute(&self, spec: &str, versions: &[String], semver: bool, json: bool) -> Result<()> {
        let results = self.evaluate(spec, versions, semver)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&results)?);
            return Ok(());
        }

        for result in &results {
            if result.matches {
                println!("{} {} is in {}", "✓".green().bold(), result.version, spec.cyan());
            } else {
                println!("{} {} is not in {}", "✗".red(), result.version, spec.cyan());
            }
        }
        Ok(())
    }
}
