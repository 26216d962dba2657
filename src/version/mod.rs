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

//! JDK version parsing, ordering and range matching.
//!
//! [`parser::VersionParser`] understands every version format JDK builds have
//! been published with, [`semver::SemverParser`] reads the semver form the API
//! stores, [`compare`] holds the two orderings and [`range::VersionRange`]
//! evaluates Maven style interval specs.

pub mod compare;
pub mod parser;
pub mod range;
mod runtime;
pub mod semver;

pub use compare::{compare_pre, compare_release_metadata, compare_versions, versions_equal};
pub use parser::VersionParser;
pub use range::{Restriction, VersionRange};
pub use semver::SemverParser;
