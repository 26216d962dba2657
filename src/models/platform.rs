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
pub enum Architecture {
    X64,
    X86,
    X32,
    Ppc64,
    Ppc64le,
    S390x,
    Aarch64,
    Arm,
    Sparcv9,
    Riscv64,
}

impl FromStr for Architecture {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "x64" | "amd64" | "x86_64" => Ok(Architecture::X64),
            "x86" | "i386" | "i686" => Ok(Architecture::X86),
            "x32" => Ok(Architecture::X32),
            "ppc64" => Ok(Architecture::Ppc64),
            "ppc64le" => Ok(Architecture::Ppc64le),
            "s390x" => Ok(Architecture::S390x),
            "aarch64" | "arm64" => Ok(Architecture::Aarch64),
            "arm" | "arm32" => Ok(Architecture::Arm),
            "sparcv9" => Ok(Architecture::Sparcv9),
            "riscv64" => Ok(Architecture::Riscv64),
            _ => Err(ApiError::InvalidParameter(format!(
                "Unknown architecture: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arch = match self {
            Architecture::X64 => "x64",
            Architecture::X86 => "x86",
            Architecture::X32 => "x32",
            Architecture::Ppc64 => "ppc64",
            Architecture::Ppc64le => "ppc64le",
            Architecture::S390x => "s390x",
            Architecture::Aarch64 => "aarch64",
            Architecture::Arm => "arm",
            Architecture::Sparcv9 => "sparcv9",
            Architecture::Riscv64 => "riscv64",
        };
        write!(f, "{arch}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Linux,
    Windows,
    Mac,
    Solaris,
    Aix,
    #[serde(rename = "alpine-linux")]
    AlpineLinux,
}

impl FromStr for OperatingSystem {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "linux" => Ok(OperatingSystem::Linux),
            "windows" | "win" => Ok(OperatingSystem::Windows),
            "mac" | "macos" | "darwin" => Ok(OperatingSystem::Mac),
            "solaris" => Ok(OperatingSystem::Solaris),
            "aix" => Ok(OperatingSystem::Aix),
            "alpine-linux" | "alpine_linux" | "alpine" => Ok(OperatingSystem::AlpineLinux),
            _ => Err(ApiError::InvalidParameter(format!(
                "Unknown operating system: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let os = match self {
            OperatingSystem::Linux => "linux",
            OperatingSystem::Windows => "windows",
            OperatingSystem::Mac => "mac",
            OperatingSystem::Solaris => "solaris",
            OperatingSystem::Aix => "aix",
            OperatingSystem::AlpineLinux => "alpine-linux",
        };
        write!(f, "{os}")
    }
}

/// C library a Linux binary is linked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CLib {
    Musl,
    Glibc,
}

impl FromStr for CLib {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "musl" => Ok(CLib::Musl),
            "glibc" | "gnu" => Ok(CLib::Glibc),
            _ => Err(ApiError::InvalidParameter(format!("Unknown c_lib: {s}"))),
        }
    }
}

impl std::fmt::Display for CLib {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CLib::Musl => write!(f, "musl"),
            CLib::Glibc => write!(f, "glibc"),
        }
    }
}
