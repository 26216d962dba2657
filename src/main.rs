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

use adoptium_api::commands::args::{AssetArgs, QueryArgs};
use adoptium_api::commands::available::AvailableReleasesCommand;
use adoptium_api::commands::feature::FeatureReleasesCommand;
use adoptium_api::commands::latest::LatestAssetsCommand;
use adoptium_api::commands::names::{ReleaseNamesCommand, ReleaseVersionsCommand};
use adoptium_api::commands::parse::ParseCommand;
use adoptium_api::commands::range::RangeCommand;
use adoptium_api::commands::releases::{ReleaseCommand, ReleasesCommand};
use adoptium_api::config::new_api_config;
use adoptium_api::error::{Result, format_error_chain, get_exit_code};
use adoptium_api::logging;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "adoptium-api")]
#[command(author, version, about = "Query Adoptium JDK release metadata", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a version string and print its version data
    #[command(visible_alias = "p")]
    Parse {
        /// Version string (e.g., "jdk-17.0.4+8", "8u202-b08", "19-beta+36")
        version: String,

        /// Read the input as an Adoptium semver string
        #[arg(long)]
        semver: bool,

        /// Require the whole input to match
        #[arg(long)]
        exact: bool,

        /// Accept results that fail the sanity check
        #[arg(long)]
        no_sanity_check: bool,
    },

    /// Check versions against a version range
    Range {
        /// Maven style range (e.g., "[11.0.1,11.0.3)", "(,17]") or a version
        spec: String,

        /// Versions to check
        #[arg(required = true)]
        versions: Vec<String>,

        /// Read the range and versions as Adoptium semver strings
        #[arg(long)]
        semver: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List releases matching the query
    #[command(visible_alias = "ls")]
    Releases {
        #[command(flatten)]
        query: QueryArgs,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single release by name
    Release {
        /// Release name (e.g., "jdk-17.0.4+8")
        name: String,

        #[command(flatten)]
        query: QueryArgs,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the names of releases matching the query
    ReleaseNames {
        #[command(flatten)]
        query: QueryArgs,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the versions of releases matching the query
    ReleaseVersions {
        #[command(flatten)]
        query: QueryArgs,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List releases of one feature version
    FeatureReleases {
        /// Feature (major) version, e.g. 17
        feature_version: u32,

        /// Release type (ga, ea)
        #[arg(value_name = "RELEASE_TYPE", default_value = "ga")]
        kind: String,

        #[command(flatten)]
        query: QueryArgs,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the newest GA binary of a feature version for each platform
    Latest {
        /// Feature (major) version, e.g. 17
        feature_version: u32,

        /// JVM implementation (hotspot, openj9, dragonwell)
        #[arg(default_value = "hotspot")]
        jvm_impl: String,

        #[command(flatten)]
        assets: AssetArgs,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarise the feature versions that have releases
    AvailableReleases {
        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn setup_logger(cli: &Cli) {
    logging::setup_logger(cli.verbose);
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger based on CLI flags and environment
    setup_logger(&cli);

    // Load configuration once at startup
    let config = match new_api_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error_chain(&e));
            std::process::exit(get_exit_code(&e));
        }
    };

    let result: Result<()> = (|| match cli.command {
        Commands::Parse {
            version,
            semver,
            exact,
            no_sanity_check,
        } => {
            let command = ParseCommand::new()?;
            command.execute(&version, semver, exact, !no_sanity_check)
        }
        Commands::Range {
            spec,
            versions,
            semver,
            json,
        } => {
            let command = RangeCommand::new()?;
            command.execute(&spec, &versions, semver, json)
        }
        Commands::Releases { query, json } => {
            let command = ReleasesCommand::new(&config)?;
            command.execute(&query.to_query()?, json)
        }
        Commands::Release { name, query, json } => {
            let command = ReleaseCommand::new(&config)?;
            command.execute(&name, &query.to_query()?, json)
        }
        Commands::ReleaseNames { query, json } => {
            let command = ReleaseNamesCommand::new(&config)?;
            command.execute(&query.to_query()?, json)
        }
        Commands::ReleaseVersions { query, json } => {
            let command = ReleaseVersionsCommand::new(&config)?;
            command.execute(&query.to_query()?, json)
        }
        Commands::FeatureReleases {
            feature_version,
            kind,
            query,
            json,
        } => {
            let command = FeatureReleasesCommand::new(&config)?;
            command.execute(feature_version, &kind, &query.to_query()?, json)
        }
        Commands::Latest {
            feature_version,
            jvm_impl,
            assets,
            json,
        } => {
            let command = LatestAssetsCommand::new(&config)?;
            command.execute(feature_version, &jvm_impl, &assets.to_query()?, json)
        }
        Commands::AvailableReleases { json } => {
            let command = AvailableReleasesCommand::new(&config)?;
            command.execute(json)
        }
    })();

    if let Err(e) = result {
        eprintln!("{}", format_error_chain(&e));
        std::process::exit(get_exit_code(&e));
    }
}
