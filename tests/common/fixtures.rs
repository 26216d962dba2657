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

/// Shared fixtures for building release snapshots in integration tests
use adoptium_api::models::{
    Architecture, Binary, HeapSize, ImageType, JvmImpl, OperatingSystem, Package, Project,
    Release, ReleaseType, Vendor,
};
use adoptium_api::version::VersionParser;
use chrono::{DateTime, Utc};

pub fn utc(timestamp: &str) -> DateTime<Utc> {
    timestamp.parse().unwrap()
}

/// Creates a HotSpot binary for the given platform
#[allow(dead_code)]
pub fn binary(os: OperatingSystem, architecture: Architecture, image_type: ImageType) -> Binary {
    let name = format!("OpenJDK-{image_type}_{architecture}_{os}_hotspot.tar.gz");
    Binary {
        os,
        architecture,
        image_type,
        c_lib: None,
        jvm_impl: JvmImpl::Hotspot,
        package: Some(Package {
            link: format!("https://example.com/{name}"),
            name,
            size: 190_000_000,
            checksum: Some("0".repeat(64)),
            checksum_link: None,
        }),
        heap_size: HeapSize::Normal,
        download_count: 10,
        updated_at: utc("2022-07-21T00:00:00Z"),
        scm_ref: None,
        project: Project::Jdk,
    }
}

/// Creates an Eclipse release with Linux and Windows x64 JDK binaries
///
/// # Arguments
/// * `name` - The release name, also used as the id
/// * `version` - The version string (e.g., "17.0.4+8", "19-beta+20")
/// * `release_type` - GA or EA
/// * `timestamp` - RFC 3339 release timestamp
pub fn release(name: &str, version: &str, release_type: ReleaseType, timestamp: &str) -> Release {
    Release {
        id: name.to_string(),
        release_link: format!("https://example.com/releases/{name}"),
        release_name: name.to_string(),
        timestamp: utc(timestamp),
        updated_at: utc(timestamp),
        binaries: vec![
            binary(OperatingSystem::Linux, Architecture::X64, ImageType::Jdk),
            binary(OperatingSystem::Windows, Architecture::X64, ImageType::Jdk),
        ],
        download_count: 20,
        release_type,
        vendor: Vendor::Eclipse,
        version_data: VersionParser::parse(version, false, true).unwrap(),
    }
}

/// A small snapshot spanning four feature versions, one of them EA only
#[allow(dead_code)]
pub fn sample_releases() -> Vec<Release> {
    vec![
        release("jdk8u345-b01", "8.0.345+1", ReleaseType::Ga, "2022-07-27T00:00:00Z"),
        release("jdk-11.0.15+10", "11.0.15+10", ReleaseType::Ga, "2022-04-22T00:00:00Z"),
        release("jdk-11.0.16+8", "11.0.16+8", ReleaseType::Ga, "2022-07-22T00:00:00Z"),
        release("jdk-17.0.4+8", "17.0.4+8", ReleaseType::Ga, "2022-07-22T00:00:00Z"),
        release("jdk-17.0.4.1+1", "17.0.4.1+1", ReleaseType::Ga, "2022-08-12T00:00:00Z"),
        release("jdk-19+36", "19-beta+36", ReleaseType::Ea, "2022-08-19T00:00:00Z"),
    ]
}
