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

use crate::error::ApiError;

pub fn get_exit_code(error: &ApiError) -> i32 {
    match error {
        ApiError::VersionParse(_)
        | ApiError::InvalidVersionRange(_)
        | ApiError::InvalidParameter(_)
        | ApiError::InvalidConfig(_) => 2,

        ApiError::PageNotFound { .. }
        | ApiError::FeatureVersionNotFound(_)
        | ApiError::ReleaseNotFound(_) => 3,

        ApiError::Http(_) | ApiError::DataSource(_) | ApiError::NoSnapshot => 20,

        _ => 1,
    }
}

/// HTTP status a front end should answer with for this error.
pub fn status_code(error: &ApiError) -> u16 {
    match error {
        e if e.is_client_error() => 400,
        ApiError::PageNotFound { .. }
        | ApiError::FeatureVersionNotFound(_)
        | ApiError::ReleaseNotFound(_) => 404,
        ApiError::NoSnapshot => 503,
        _ => 500,
    }
}
