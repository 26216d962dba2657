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
use crate::models::VersionData;
use crate::version::{SemverParser, VersionParser};

/// Prints the version data parsed from a version string as JSON.
pub struct ParseCommand;

impl ParseCommand {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    pub fn parse(
        &self,
        input: &str,
        semver: bool,
        exact: bool,
        sanity_check: bool,
    ) -> Result<VersionData> {
        if semver {
            SemverParser::parse_adopt_semver_non_null(input)
        } else {
            VersionParser::parse(input, sanity_check, exact)
        }
    }

    pub fn execute(&self, input: &str, semver: bool, exact: bool, sanity_check: bool) -> Result<()> {
        let version = self.parse(input, semver, exact, sanity_check)?;
        println!("{}", serde_json::to_string_pretty(&version)?);
        Ok(())
    }
}
