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

mod common;
use adoptium_api::error::ApiError;
use adoptium_api::filter::{ReleaseFilter, VersionRangeFilter};
use adoptium_api::models::{Ecosystem, ReleaseType, Vendor};
use adoptium_api::sort::{ReleaseSorter, SortMethod, SortOrder};
use adoptium_api::version::{SemverParser, VersionParser, VersionRange, compare_versions};
use common::fixtures::release;
use std::cmp::Ordering;

fn parse(version: &str) -> adoptium_api::models::VersionData {
    VersionParser::parse(version, false, true).unwrap()
}

#[test]
fn test_semver_round_trip() {
    let corpus = [
        ("18.0.2.1+1", "18.0.2+101"),
        ("18.0.2+9", "18.0.2+9"),
        ("18.0.1+10", "18.0.1+10"),
        ("18+36", "18.0.0+36"),
        ("17.0.4.1+1", "17.0.4+101"),
        ("17.0.4+8", "17.0.4+8"),
        ("17.0.3+7", "17.0.3+7"),
        ("17.0.2+8", "17.0.2+8"),
        ("17.0.1+12", "17.0.1+12"),
        ("17+35", "17.0.0+35"),
        ("11.0.16.1+1", "11.0.16+101"),
        ("11.0.16+8", "11.0.16+8"),
        ("11.0.15+10", "11.0.15+10"),
        ("11.0.14.1+1", "11.0.14+101"),
        ("11.0.14+9", "11.0.14+9"),
        ("11.0.13+8", "11.0.13+8"),
        ("11.0.12+7", "11.0.12+7"),
        ("1.8.0_345-b01", "8.0.345+1"),
        ("1.8.0_342-b07", "8.0.342+7"),
        ("1.8.0_332-b09", "8.0.332+9"),
        ("1.8.0_322-b06", "8.0.322+6"),
        ("1.8.0_312-b07", "8.0.312+7"),
        ("1.8.0_302-b08", "8.0.302+8"),
        ("19-beta+36", "19.0.0-beta+36"),
        // timestamps travel in `optional`, after the adopt build number
        ("1.8.0_352-202208301423-b04", "8.0.352+4.0.202208301423"),
        ("11.0.16-beta+7-202206271301", "11.0.16-beta+7.0.202206271301"),
        ("19-beta+36-202208270349", "19.0.0-beta+36.0.202208270349"),
    ];

    for (legacy, semver) in corpus {
        let from_legacy = VersionParser::parse(legacy, true, true).unwrap();
        let from_semver = SemverParser::parse_adopt_semver(semver).unwrap();
        assert_eq!(from_legacy, from_semver, "{legacy} vs {semver}");
        assert_eq!(from_legacy.optional, from_semver.optional, "{legacy} optional");

        // The normalized display string parses back to the same version
        let reparsed = VersionParser::parse(&from_semver.openjdk_version, false, true).unwrap();
        assert_eq!(reparsed, from_semver, "{semver} display string");
    }

    let stamped = SemverParser::parse_adopt_semver("8.0.352+4.0.202208301423").unwrap();
    assert_eq!(stamped.adopt_build_number, Some(0));
    assert_eq!(stamped.optional.as_deref(), Some("202208301423"));
}

#[test]
fn test_documented_range_examples() {
    let cases = [
        ("[11.0.1.1,)", "11.0.1.2+4", true),
        ("[11.0.1.1,)", "11.0.1+4", false),
        ("(,11.0.1.1+4)", "11.0.1+4", true),
        ("(,11.0.1.1+4)", "11.0.1.1+4", false),
        ("[11.0.2+4,)", "11.0.2+5", true),
        ("[11.0.2+4,)", "11.0.1+4", false),
    ];

    for (spec, version, expected) in cases {
        let range = VersionRange::parse(spec).unwrap();
        assert_eq!(range.contains(&parse(version)), expected, "{spec} {version}");
    }
}

#[test]
fn test_invalid_specs_rejected_by_filter() {
    for spec in ["", "8]", "[8", "[]", "foo", "[foo]", "[8.0.1]foo"] {
        let err = VersionRangeFilter::new(spec, false).unwrap_err();
        assert!(
            matches!(err, ApiError::InvalidVersionRange(_) | ApiError::VersionParse(_)),
            "{spec}: {err:?}"
        );
        assert!(err.is_client_error());
    }
}

#[test]
fn test_filter_matches_corpus() {
    let at_8_0_1 = parse("8.0.1");
    for spec in [
        "8.0.1", "[8.0.1]", "[8.0.1,]", "[,8.0.1]", "[8.0.1,8.0.3]", "[8.0.1,)", "[,8.0.2)",
        "[8,9)", "(8,]", "(,8.0.1]", "(8,9]", "(8,)", "(,8.0.3)", "(8,8.0.3)",
    ] {
        let filter = VersionRangeFilter::new(spec, false).unwrap();
        assert!(filter.test(&at_8_0_1), "{spec} should contain 8.0.1");
    }

    let at_8_0_3 = parse("8.0.3");
    for spec in ["(8.0.3)", "[8.0.1]", "[8.0.4,]", "(,8.0.3)", "[,8.0.2]", "(8.0.3,)"] {
        let filter = VersionRangeFilter::new(spec, false).unwrap();
        assert!(!filter.test(&at_8_0_3), "{spec} should not contain 8.0.3");
    }
}

#[test]
fn test_sort_ties_broken_by_release_name() {
    let a = release("jdk-17.0.4+8-a", "17.0.4+8", ReleaseType::Ga, "2022-07-22T00:00:00Z");
    let b = release("jdk-17.0.4+8-b", "17.0.4+8", ReleaseType::Ga, "2022-07-22T00:00:00Z");

    for method in [SortMethod::Default, SortMethod::Date] {
        let mut releases = vec![b.clone(), a.clone()];
        ReleaseSorter::sort(&mut releases, SortOrder::Asc, method);
        assert_eq!(releases[0].release_name, "jdk-17.0.4+8-a");

        ReleaseSorter::sort(&mut releases, SortOrder::Desc, method);
        assert_eq!(releases[0].release_name, "jdk-17.0.4+8-b");
    }
}

#[test]
fn test_vendor_synonym_property() {
    let mut stored_adoptium = release("jdk-21+35", "21+35", ReleaseType::Ga, "2023-09-19T00:00:00Z");
    stored_adoptium.vendor = Vendor::Adoptium;
    let stored_eclipse = release("jdk-21+35", "21+35", ReleaseType::Ga, "2023-09-19T00:00:00Z");

    let eclipse = ReleaseFilter::new(Ecosystem::Adoptium, vec![21]).vendor(Vendor::Eclipse);
    let adoptium = ReleaseFilter::new(Ecosystem::Adoptium, vec![21]).vendor(Vendor::Adoptium);

    assert!(eclipse.test(&stored_adoptium));
    assert!(adoptium.test(&stored_eclipse));
}

#[test]
fn test_comparator_is_a_total_order_over_corpus() {
    let versions: Vec<_> = [
        "8.0.345+1",
        "11.0.15+10",
        "11.0.16+8",
        "11.0.16.1+1",
        "17-beta+20",
        "17+35",
        "17.0.4+8",
    ]
    .iter()
    .map(|v| parse(v))
    .collect();

    for (i, a) in versions.iter().enumerate() {
        for (j, b) in versions.iter().enumerate() {
            assert_eq!(compare_versions(a, b), i.cmp(&j), "{a} vs {b}");
            assert_eq!(compare_versions(b, a), compare_versions(a, b).reverse());
        }
    }
    assert_eq!(compare_versions(&versions[0], &versions[0]), Ordering::Equal);
}
