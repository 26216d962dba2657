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
use crate::models::Release;

/// Where release snapshots come from.
pub trait ReleaseSource: Send + Sync {
    /// Human-readable name, used in log messages
    fn name(&self) -> &str;

    /// Fetch every release the source knows about
    fn fetch_all(&self) -> Result<Vec<Release>>;
}
