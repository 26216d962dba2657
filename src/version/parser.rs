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
use crate::models::VersionData;
use crate::version::runtime::parse_runtime_version;
use log::{debug, trace};
use regex::{Captures, Regex};
use std::sync::LazyLock;

// JEP 223 building blocks. Up to four numeric components are supported.
const VNUM: &str = r"(?P<major>[0-9]+)(\.(?P<minor>[0-9]+))?(\.(?P<security>[0-9]+))?(\.(?P<patch>[0-9]+))?";
const OPT: &str = r"(?P<opt>[-a-zA-Z0-9\.]+)";
const PRE: &str = r"(?P<pre>[a-zA-Z0-9]+)";
const BUILD: &str = r"(?P<build>[0-9]+)";

static DATE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}(-[0-9]{1,2}){4}$").unwrap());
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{12}$").unwrap());
static BUILD_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^b(?P<build>[0-9]+)$").unwrap());

static JEP223_GRAMMARS: LazyLock<Vec<PatternGrammar>> = LazyLock::new(|| {
    vec![
        PatternGrammar::new(
            "jep223-build",
            format!(r"(?:jdk\-)?(?P<version>{VNUM}(\-{PRE})?\+{BUILD}(\-{OPT})?)"),
        ),
        PatternGrammar::new(
            "jep223-pre",
            format!(r"(?:jdk\-)?(?P<version>{VNUM}\-{PRE}(\-{OPT})?)"),
        ),
        PatternGrammar::new(
            "jep223-bare",
            format!(r"(?:jdk\-)?(?P<version>{VNUM}(\+\-{OPT})?)"),
        ),
    ]
});

static PRE223_GRAMMAR: LazyLock<PatternGrammar> = LazyLock::new(|| {
    PatternGrammar::new(
        "pre223",
        format!(
            r"(jdk\-?)?(?P<version>(?P<major>[0-8]+)(u(?P<security>[0-9]+))(-?b{BUILD})?(_{OPT})?)"
        ),
    )
});

static ALT_PRE223_GRAMMAR: LazyLock<AltPre223Grammar> = LazyLock::new(AltPre223Grammar::new);

/// One way of reading a version string.
trait Grammar: Send + Sync {
    fn name(&self) -> &'static str;

    /// `exact_match` requires the grammar to cover the whole input, otherwise
    /// the leftmost embedded occurrence is used.
    fn matches(&self, input: &str, exact_match: bool) -> Option<VersionData>;
}

/// A grammar described by a single regular expression with the named groups
/// `version`, `major` and optionally `minor`, `security`, `patch`, `pre`,
/// `build` and `opt`.
struct PatternGrammar {
    name: &'static str,
    unanchored: Regex,
    anchored: Regex,
}

impl PatternGrammar {
    fn new(name: &'static str, pattern: String) -> Self {
        Self {
            name,
            unanchored: Regex::new(&pattern).unwrap(),
            anchored: Regex::new(&format!("^(?:{pattern})$")).unwrap(),
        }
    }
}

impl Grammar for PatternGrammar {
    fn name(&self) -> &'static str {
        self.name
    }

    fn matches(&self, input: &str, exact_match: bool) -> Option<VersionData> {
        let regex = if exact_match {
            &self.anchored
        } else {
            &self.unanchored
        };
        let caps = regex.captures(input)?;

        let mut version = VersionData::new(number(&caps, "major")?)
            .with_minor(number_or_zero(&caps, "minor")?)
            .with_security(number_or_zero(&caps, "security")?)
            .with_build(number_or_zero(&caps, "build")?)
            .with_openjdk_version(caps.name("version")?.as_str());
        version.patch = match caps.name("patch") {
            Some(_) => Some(number(&caps, "patch")?),
            None => None,
        };
        version.pre = text(&caps, "pre");
        version.optional = text(&caps, "opt");

        Some(version)
    }
}

/// `1.MAJOR.0[_UPDATE][-ADDITIONAL]`, as printed by `java -version` before
/// JEP 223. ADDITIONAL is a dash separated list that may hold a `bNN` build
/// token and a 12 digit timestamp.
struct AltPre223Grammar {
    unanchored: Regex,
    anchored: Regex,
}

impl AltPre223Grammar {
    fn new() -> Self {
        let pattern =
            r"(?P<version>1\.(?P<major>[0-8])\.0(_(?P<update>[0-9]+))?(-?(?P<additional>.*))?)";
        Self {
            unanchored: Regex::new(pattern).unwrap(),
            anchored: Regex::new(&format!("^(?:{pattern})$")).unwrap(),
        }
    }
}

impl Grammar for AltPre223Grammar {
    fn name(&self) -> &'static str {
        "alt-pre223"
    }

    fn matches(&self, input: &str, exact_match: bool) -> Option<VersionData> {
        let regex = if exact_match {
            &self.anchored
        } else {
            &self.unanchored
        };
        let caps = regex.captures(input)?;

        let mut build = 0;
        let mut optional = None;
        if let Some(additional) = caps.name("additional") {
            for token in additional.as_str().split('-').filter(|t| !t.is_empty()) {
                if let Some(b) = BUILD_TOKEN.captures(token) {
                    build = number(&b, "build")?;
                }
                if TIMESTAMP.is_match(token) {
                    optional = Some(token.to_string());
                }
            }
        }

        let mut version = VersionData::new(number(&caps, "major")?)
            .with_minor(0)
            .with_security(number_or_zero(&caps, "update")?)
            .with_build(build)
            .with_openjdk_version(caps.name("version")?.as_str());
        version.optional = optional;

        Some(version)
    }
}

/// The platform's own version grammar. Exactness does not apply: the whole
/// input is always consumed.
struct RuntimeGrammar;

impl Grammar for RuntimeGrammar {
    fn name(&self) -> &'static str {
        "runtime"
    }

    fn matches(&self, input: &str, _exact_match: bool) -> Option<VersionData> {
        parse_runtime_version(input)
    }
}

fn number(caps: &Captures, group: &str) -> Option<u32> {
    caps.name(group)?.as_str().parse().ok()
}

/// Missing group reads as zero. A group that is present but does not fit in a
/// `u32` fails the whole match.
fn number_or_zero(caps: &Captures, group: &str) -> Option<u32> {
    match caps.name(group) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0),
    }
}

fn text(caps: &Captures, group: &str) -> Option<String> {
    caps.name(group).map(|m| m.as_str().to_string())
}

/// Parses JDK version strings in any of the historical formats.
///
/// Grammars are tried in this order, the first result that passes the sanity
/// check wins:
///
/// 1. JEP 223 with build, `[jdk-]11.0.1[.1][-PRE]+4[-OPT]`
/// 2. JEP 223 pre-release without build, `[jdk-]19-beta[-OPT]`
/// 3. JEP 223 bare, `[jdk-]11.0.1[+-OPT]`
/// 4. pre JEP 223, `[jdk[-]]8u202[-b08][_OPT]`
/// 5. `java -version` style, `1.8.0_202[-ADDITIONAL]`
/// 6. the platform grammar, then (with the sanity check on) grammars 1 to 3
///    again with `exact_match` flipped
pub struct VersionParser;

impl VersionParser {
    pub fn parse(input: &str, sanity_check: bool, exact_match: bool) -> Result<VersionData> {
        let accept = |grammar: &dyn Grammar, exact: bool| -> Option<VersionData> {
            let parsed = grammar.matches(input, exact)?;
            if !sanity_check || passes_sanity_check(&parsed) {
                debug!("Parsed '{input}' with {} grammar", grammar.name());
                Some(parsed)
            } else {
                trace!(
                    "{} grammar matched '{input}' as {} but failed the sanity check",
                    grammar.name(),
                    parsed.openjdk_version
                );
                None
            }
        };

        let mut chain: Vec<&dyn Grammar> = Vec::with_capacity(6);
        chain.extend(JEP223_GRAMMARS.iter().map(|g| g as &dyn Grammar));
        chain.push(&*PRE223_GRAMMAR);
        chain.push(&*ALT_PRE223_GRAMMAR);
        chain.push(&RuntimeGrammar);

        if let Some(parsed) = chain.into_iter().find_map(|g| accept(g, exact_match)) {
            return Ok(parsed);
        }

        if sanity_check
            && let Some(parsed) = JEP223_GRAMMARS
                .iter()
                .find_map(|g| accept(g, !exact_match))
        {
            return Ok(parsed);
        }

        Err(ApiError::VersionParse(input.to_string()))
    }
}

/// Rejects matches that are unlikely to be a real JDK version, such as a lone
/// number picked out of an unrelated string.
pub fn passes_sanity_check(parsed: &VersionData) -> bool {
    if !(7..=101).contains(&parsed.major) {
        return false;
    }
    if parsed.security_or_zero() != 0 || parsed.build_or_zero() != 0 {
        return true;
    }
    parsed
        .optional
        .as_deref()
        .is_some_and(|opt| DATE_TIME.is_match(opt) || TIMESTAMP.is_match(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> VersionData {
        VersionParser::parse(input, true, false).unwrap()
    }

    fn parse_exact(input: &str) -> VersionData {
        VersionParser::parse(input, false, true).unwrap()
    }

    #[test]
    fn test_jep223_with_build() {
        let v = parse("jdk-11.0.1+13");
        assert_eq!(v.major, 11);
        assert_eq!(v.minor, Some(0));
        assert_eq!(v.security, Some(1));
        assert_eq!(v.patch, None);
        assert_eq!(v.build, Some(13));
        assert_eq!(v.openjdk_version, "11.0.1+13");
    }

    #[test]
    fn test_jep223_with_patch_pre_and_optional() {
        let v = parse("jdk-11.0.16.1-beta+1-202208111234");
        assert_eq!(v.security, Some(16));
        assert_eq!(v.patch, Some(1));
        assert_eq!(v.pre.as_deref(), Some("beta"));
        assert_eq!(v.build, Some(1));
        assert_eq!(v.optional.as_deref(), Some("202208111234"));
    }

    #[test]
    fn test_jep223_pre_release_without_build() {
        let v = parse_exact("19-beta");
        assert_eq!(v.major, 19);
        assert_eq!(v.pre.as_deref(), Some("beta"));
        assert_eq!(v.build, Some(0));
    }

    #[test]
    fn test_jep223_bare_defaults() {
        let v = parse_exact("8");
        assert_eq!(v.major, 8);
        assert_eq!(v.minor, Some(0));
        assert_eq!(v.security, Some(0));
        assert_eq!(v.patch, None);
        assert_eq!(v.build, Some(0));
        assert_eq!(v.openjdk_version, "8");
    }

    #[test]
    fn test_pre223() {
        let v = parse("jdk8u202-b08");
        assert_eq!(v.major, 8);
        assert_eq!(v.minor, Some(0));
        assert_eq!(v.security, Some(202));
        assert_eq!(v.build, Some(8));
        assert_eq!(v.openjdk_version, "8u202-b08");
    }

    #[test]
    fn test_pre223_with_optional() {
        let v = parse_exact("8u172b11_openj9");
        assert_eq!(v.security, Some(172));
        assert_eq!(v.build, Some(11));
        assert_eq!(v.optional.as_deref(), Some("openj9"));
    }

    #[test]
    fn test_alt_pre223() {
        let v = parse("1.8.0_202-internal-201903130451-b08");
        assert_eq!(v.major, 8);
        assert_eq!(v.minor, Some(0));
        assert_eq!(v.security, Some(202));
        assert_eq!(v.patch, None);
        assert_eq!(v.build, Some(8));
        assert_eq!(v.optional.as_deref(), Some("201903130451"));
    }

    #[test]
    fn test_alt_pre223_plain_build() {
        let v = parse("1.8.0_345-b01");
        assert_eq!(v.major, 8);
        assert_eq!(v.security, Some(345));
        assert_eq!(v.build, Some(1));
        assert_eq!(v.optional, None);
    }

    #[test]
    fn test_version_embedded_in_release_name() {
        let v = VersionParser::parse("OpenJDK11U-jdk_x64_linux_11.0.4_11", true, false).unwrap_err();
        assert!(matches!(v, ApiError::VersionParse(_)));

        let v = parse("OpenJDK 17.0.4+8 release");
        assert_eq!(v.major, 17);
        assert_eq!(v.security, Some(4));
        assert_eq!(v.build, Some(8));
    }

    #[test]
    fn test_sanity_check_rejects_major_out_of_range() {
        assert!(VersionParser::parse("6u45-b06", true, true).is_err());
        assert!(VersionParser::parse("200.0.1+1", true, true).is_err());
        assert!(VersionParser::parse("200.0.1+1", false, true).is_ok());
    }

    #[test]
    fn test_sanity_check_needs_security_build_or_timestamp() {
        assert!(VersionParser::parse("11", true, true).is_err());
        assert!(VersionParser::parse("11", false, true).is_ok());
        assert!(VersionParser::parse("11.0.0+-202201011200", true, true).is_ok());
        assert!(VersionParser::parse("11.0.0+-2022-01-01-12-00", true, true).is_ok());
        assert!(VersionParser::parse("11.0.0+-internal", true, true).is_err());
    }

    #[test]
    fn test_exact_match_rejects_trailing_text() {
        assert!(VersionParser::parse("11.0.1+4 and more", false, true).is_err());
        assert!(VersionParser::parse("[8.0.1]foo", false, true).is_err());
        assert!(VersionParser::parse("8]", false, true).is_err());
    }

    #[test]
    fn test_exact_flipped_retry_with_sanity_check() {
        let v = VersionParser::parse("release jdk-17.0.2+8 (latest)", true, true).unwrap();
        assert_eq!(v.major, 17);
        assert_eq!(v.security, Some(2));
        assert_eq!(v.build, Some(8));
    }

    #[test]
    fn test_failure_echoes_input() {
        let err = VersionParser::parse("foo", true, false).unwrap_err();
        match err {
            ApiError::VersionParse(input) => assert_eq!(input, "foo"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(VersionParser::parse("", true, false).is_err());
    }

    #[test]
    fn test_oversized_numbers_do_not_panic() {
        assert!(VersionParser::parse("99999999999999999999+1", false, true).is_err());
    }

    #[test]
    fn test_passes_sanity_check() {
        assert!(passes_sanity_check(&VersionData::new(8).with_security(1)));
        assert!(passes_sanity_check(&VersionData::new(21).with_build(35)));
        assert!(!passes_sanity_check(&VersionData::new(21)));
        assert!(!passes_sanity_check(&VersionData::new(5).with_build(1)));
        assert!(passes_sanity_check(
            &VersionData::new(21).with_optional("202308101234")
        ));
    }
}
