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

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    Jdk,
    Jre,
    Testimage,
    Debugimage,
    Staticlibs,
    Sources,
    Sbom,
    Jmods,
}

impl FromStr for ImageType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "jdk" => Ok(ImageType::Jdk),
            "jre" => Ok(ImageType::Jre),
            "testimage" => Ok(ImageType::Testimage),
            "debugimage" => Ok(ImageType::Debugimage),
            "staticlibs" => Ok(ImageType::Staticlibs),
            "sources" => Ok(ImageType::Sources),
            "sbom" => Ok(ImageType::Sbom),
            "jmods" => Ok(ImageType::Jmods),
            _ => Err(ApiError::InvalidParameter(format!(
                "Unknown image type: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let image_type = match self {
            ImageType::Jdk => "jdk",
            ImageType::Jre => "jre",
            ImageType::Testimage => "testimage",
            ImageType::Debugimage => "debugimage",
            ImageType::Staticlibs => "staticlibs",
            ImageType::Sources => "sources",
            ImageType::Sbom => "sbom",
            ImageType::Jmods => "jmods",
        };
        write!(f, "{image_type}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JvmImpl {
    Hotspot,
    Openj9,
    Dragonwell,
}

impl FromStr for JvmImpl {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hotspot" => Ok(JvmImpl::Hotspot),
            "openj9" => Ok(JvmImpl::Openj9),
            "dragonwell" => Ok(JvmImpl::Dragonwell),
            _ => Err(ApiError::InvalidParameter(format!(
                "Unknown jvm_impl: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for JvmImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let jvm_impl = match self {
            JvmImpl::Hotspot => "hotspot",
            JvmImpl::Openj9 => "openj9",
            JvmImpl::Dragonwell => "dragonwell",
        };
        write!(f, "{jvm_impl}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeapSize {
    Normal,
    Large,
}

impl FromStr for HeapSize {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(HeapSize::Normal),
            "large" => Ok(HeapSize::Large),
            _ => Err(ApiError::InvalidParameter(format!(
                "Unknown heap size: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for HeapSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapSize::Normal => write!(f, "normal"),
            HeapSize::Large => write!(f, "large"),
        }
    }
}

/// OpenJDK project a binary was built from. Plain `jdk` unless stated otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Project {
    #[default]
    Jdk,
    Valhalla,
    Metropolis,
    Jfr,
    Shenandoah,
}

impl FromStr for Project {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "jdk" => Ok(Project::Jdk),
            "valhalla" => Ok(Project::Valhalla),
            "metropolis" => Ok(Project::Metropolis),
            "jfr" => Ok(Project::Jfr),
            "shenandoah" => Ok(Project::Shenandoah),
            _ => Err(ApiError::InvalidParameter(format!("Unknown project: {s}"))),
        }
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let project = match self {
            Project::Jdk => "jdk",
            Project::Valhalla => "valhalla",
            Project::Metropolis => "metropolis",
            Project::Jfr => "jfr",
            Project::Shenandoah => "shenandoah",
        };
        write!(f, "{project}")
    }
}
