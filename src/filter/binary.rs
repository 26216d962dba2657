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

use crate::models::{
    Architecture, Binary, CLib, HeapSize, ImageType, JvmImpl, OperatingSystem, Project,
};
use chrono::{DateTime, Utc};

/// Predicate over the binaries of a release.
///
/// Unset criteria accept everything, except `project` which falls back to
/// [`Project::Jdk`].
#[derive(Debug, Clone, Default)]
pub struct BinaryFilter {
    pub os: Option<OperatingSystem>,
    pub architecture: Option<Architecture>,
    pub image_type: Option<ImageType>,
    pub jvm_impl: Option<JvmImpl>,
    pub heap_size: Option<HeapSize>,
    pub project: Option<Project>,
    /// Only binaries updated strictly before this instant.
    pub before: Option<DateTime<Utc>>,
    pub c_lib: Option<CLib>,
}

impl BinaryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn os(mut self, os: OperatingSystem) -> Self {
        self.os = Some(os);
        self
    }

    pub fn architecture(mut self, architecture: Architecture) -> Self {
        self.architecture = Some(architecture);
        self
    }

    pub fn image_type(mut self, image_type: ImageType) -> Self {
        self.image_type = Some(image_type);
        self
    }

    pub fn jvm_impl(mut self, jvm_impl: JvmImpl) -> Self {
        self.jvm_impl = Some(jvm_impl);
        self
    }

    pub fn heap_size(mut self, heap_size: HeapSize) -> Self {
        self.heap_size = Some(heap_size);
        self
    }

    pub fn project(mut self, project: Project) -> Self {
        self.project = Some(project);
        self
    }

    pub fn before(mut self, before: DateTime<Utc>) -> Self {
        self.before = Some(before);
        self
    }

    pub fn c_lib(mut self, c_lib: CLib) -> Self {
        self.c_lib = Some(c_lib);
        self
    }

    pub fn test(&self, binary: &Binary) -> bool {
        self.os.is_none_or(|os| binary.os == os)
            && self
                .architecture
                .is_none_or(|arch| binary.architecture == arch)
            && self
                .image_type
                .is_none_or(|image_type| binary.image_type == image_type)
            && self.jvm_impl.is_none_or(|jvm| binary.jvm_impl == jvm)
            && self.heap_size.is_none_or(|heap| binary.heap_size == heap)
            && binary.project == self.project.unwrap_or_default()
            && self.before.is_none_or(|before| binary.updated_at < before)
            && self.c_lib.is_none_or(|c_lib| binary.c_lib == Some(c_lib))
    }
}
