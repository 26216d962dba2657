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

//! Query predicates over releases and their binaries.

pub mod binary;
pub mod release;
pub mod vendor;
pub mod version_range;

pub use binary::BinaryFilter;
pub use release::{ReleaseFilter, ReleaseFilterFactory};
pub use vendor::{vendor_matches, vendors_equivalent};
pub use version_range::VersionRangeFilter;
