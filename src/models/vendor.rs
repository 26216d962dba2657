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
use crate::models::package::JvmImpl;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Adoptopenjdk,
    Openjdk,
    Alibaba,
    Ibm,
    Eclipse,
    Adoptium,
}

impl FromStr for Vendor {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "adoptopenjdk" => Ok(Vendor::Adoptopenjdk),
            "openjdk" => Ok(Vendor::Openjdk),
            "alibaba" => Ok(Vendor::Alibaba),
            "ibm" => Ok(Vendor::Ibm),
            "eclipse" => Ok(Vendor::Eclipse),
            "adoptium" => Ok(Vendor::Adoptium),
            _ => Err(ApiError::InvalidParameter(format!("Unknown vendor: {s}"))),
        }
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vendor = match self {
            Vendor::Adoptopenjdk => "adoptopenjdk",
            Vendor::Openjdk => "openjdk",
            Vendor::Alibaba => "alibaba",
            Vendor::Ibm => "ibm",
            Vendor::Eclipse => "eclipse",
            Vendor::Adoptium => "adoptium",
        };
        write!(f, "{vendor}")
    }
}

/// Which API deployment the data belongs to. Vendor matching and the set of
/// accepted vendors and JVM implementations depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    #[default]
    Adoptium,
    Adoptopenjdk,
}

impl Ecosystem {
    pub fn valid_vendors(&self) -> &'static [Vendor] {
        match self {
            Ecosystem::Adoptium => &[Vendor::Eclipse, Vendor::Adoptium],
            Ecosystem::Adoptopenjdk => &[
                Vendor::Adoptopenjdk,
                Vendor::Openjdk,
                Vendor::Alibaba,
                Vendor::Ibm,
                Vendor::Eclipse,
                Vendor::Adoptium,
            ],
        }
    }

    pub fn valid_jvm_impls(&self) -> &'static [JvmImpl] {
        match self {
            Ecosystem::Adoptium => &[JvmImpl::Hotspot],
            Ecosystem::Adoptopenjdk => &[JvmImpl::Hotspot, JvmImpl::Openj9, JvmImpl::Dragonwell],
        }
    }

    /// Vendor assumed for queries that do not name one.
    pub fn default_vendor(&self) -> Vendor {
        match self {
            Ecosystem::Adoptium => Vendor::Eclipse,
            Ecosystem::Adoptopenjdk => Vendor::Adoptopenjdk,
        }
    }
}

impl FromStr for Ecosystem {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "adoptium" => Ok(Ecosystem::Adoptium),
            "adoptopenjdk" => Ok(Ecosystem::Adoptopenjdk),
            _ => Err(ApiError::InvalidConfig(format!("Unknown ecosystem: {s}"))),
        }
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ecosystem::Adoptium => write!(f, "adoptium"),
            Ecosystem::Adoptopenjdk => write!(f, "adoptopenjdk"),
        }
    }
}
