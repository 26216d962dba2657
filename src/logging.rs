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

/// Default `RUST_LOG` style filter for a `-v` count.
pub fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "adoptium_api=warn",
        1 => "adoptium_api=info",
        2 => "adoptium_api=debug",
        _ => "adoptium_api=trace",
    }
}

pub fn setup_logger(verbose: u8) {
    let env_filter = filter_for_verbosity(verbose);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(env_filter))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_verbosity() {
        assert_eq!(filter_for_verbosity(0), "adoptium_api=warn");
        assert_eq!(filter_for_verbosity(1), "adoptium_api=info");
        assert_eq!(filter_for_verbosity(2), "adoptium_api=debug");
        assert_eq!(filter_for_verbosity(3), "adoptium_api=trace");
        assert_eq!(filter_for_verbosity(200), "adoptium_api=trace");
    }
}
