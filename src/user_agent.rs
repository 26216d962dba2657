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

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent sent when downloading release snapshots.
pub fn release_source_client() -> String {
    for_feature("release-source")
}

pub fn for_feature(feature: &str) -> String {
    format!("adoptium-api/{feature}/{VERSION}")
}
