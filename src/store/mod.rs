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

//! In-memory release snapshots and the sources they are loaded from.

mod data_store;
mod file;
mod http;
mod repos;
mod resolver;
mod source;
mod supplier;

pub use data_store::ApiDataStore;
pub use file::FileReleaseSource;
pub use http::HttpReleaseSource;
pub use repos::{AdoptRepos, FeatureRelease};
pub use resolver::ReleaseVersionResolver;
pub use source::ReleaseSource;
pub use supplier::{ConfigVersionSupplier, SnapshotVersionSupplier, VersionSupplier};
