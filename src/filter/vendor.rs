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

use crate::models::{Ecosystem, JvmImpl, Vendor};

/// Vendors that name the same builds. Each entry is one equivalence class.
const VENDOR_SYNONYMS: &[&[Vendor]] = &[&[Vendor::Adoptium, Vendor::Eclipse]];

fn synonym_group(vendor: Vendor) -> Option<&'static [Vendor]> {
    VENDOR_SYNONYMS
        .iter()
        .copied()
        .find(|group| group.contains(&vendor))
}

/// Vendor equality with synonyms folded together.
pub fn vendors_equivalent(a: Vendor, b: Vendor) -> bool {
    match synonym_group(a) {
        Some(group) => group.contains(&b),
        None => a == b,
    }
}

/// Whether a release published by `release_vendor` satisfies a request for
/// `requested`.
///
/// In the AdoptOpenJDK ecosystem a request for `adoptopenjdk` also takes in
/// IBM builds when OpenJ9 is asked for, and Eclipse builds otherwise.
pub fn vendor_matches(
    ecosystem: Ecosystem,
    requested: Option<Vendor>,
    jvm_impl: Option<JvmImpl>,
    release_vendor: Vendor,
) -> bool {
    match requested {
        None => true,
        Some(Vendor::Adoptopenjdk) if ecosystem == Ecosystem::Adoptopenjdk => {
            if jvm_impl == Some(JvmImpl::Openj9) {
                matches!(release_vendor, Vendor::Adoptopenjdk | Vendor::Ibm)
            } else {
                release_vendor == Vendor::Adoptopenjdk
                    || vendors_equivalent(Vendor::Eclipse, release_vendor)
            }
        }
        Some(requested) => vendors_equivalent(requested, release_vendor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VENDORS: [Vendor; 6] = [
        Vendor::Adoptopenjdk,
        Vendor::Openjdk,
        Vendor::Alibaba,
        Vendor::Ibm,
        Vendor::Eclipse,
        Vendor::Adoptium,
    ];

    #[test]
    fn test_eclipse_and_adoptium_are_synonyms() {
        assert!(vendors_equivalent(Vendor::Eclipse, Vendor::Adoptium));
        assert!(vendors_equivalent(Vendor::Adoptium, Vendor::Eclipse));
        assert!(vendors_equivalent(Vendor::Eclipse, Vendor::Eclipse));
    }

    #[test]
    fn test_equivalence_is_symmetric() {
        for a in ALL_VENDORS {
            for b in ALL_VENDORS {
                assert_eq!(
                    vendors_equivalent(a, b),
                    vendors_equivalent(b, a),
                    "{a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn test_other_vendors_match_only_themselves() {
        assert!(vendors_equivalent(Vendor::Ibm, Vendor::Ibm));
        assert!(!vendors_equivalent(Vendor::Ibm, Vendor::Adoptopenjdk));
        assert!(!vendors_equivalent(Vendor::Alibaba, Vendor::Eclipse));
    }

    #[test]
    fn test_adoptium_ecosystem_uses_synonyms() {
        let eco = Ecosystem::Adoptium;
        assert!(vendor_matches(eco, Some(Vendor::Eclipse), None, Vendor::Adoptium));
        assert!(vendor_matches(eco, Some(Vendor::Adoptium), None, Vendor::Eclipse));
        assert!(!vendor_matches(eco, Some(Vendor::Eclipse), None, Vendor::Ibm));
        assert!(vendor_matches(eco, None, None, Vendor::Ibm));
    }

    #[test]
    fn test_adoptopenjdk_request_includes_ibm_for_openj9() {
        let eco = Ecosystem::Adoptopenjdk;
        let openj9 = Some(JvmImpl::Openj9);
        assert!(vendor_matches(eco, Some(Vendor::Adoptopenjdk), openj9, Vendor::Ibm));
        assert!(vendor_matches(eco, Some(Vendor::Adoptopenjdk), openj9, Vendor::Adoptopenjdk));
        assert!(!vendor_matches(eco, Some(Vendor::Adoptopenjdk), openj9, Vendor::Eclipse));
    }

    #[test]
    fn test_adoptopenjdk_request_includes_eclipse_builds_otherwise() {
        let eco = Ecosystem::Adoptopenjdk;
        let hotspot = Some(JvmImpl::Hotspot);
        assert!(vendor_matches(eco, Some(Vendor::Adoptopenjdk), hotspot, Vendor::Eclipse));
        assert!(vendor_matches(eco, Some(Vendor::Adoptopenjdk), None, Vendor::Adoptium));
        assert!(!vendor_matches(eco, Some(Vendor::Adoptopenjdk), hotspot, Vendor::Ibm));
    }

    #[test]
    fn test_adoptopenjdk_request_in_adoptium_ecosystem_is_plain() {
        let eco = Ecosystem::Adoptium;
        assert!(!vendor_matches(eco, Some(Vendor::Adoptopenjdk), None, Vendor::Eclipse));
        assert!(vendor_matches(eco, Some(Vendor::Adoptopenjdk), None, Vendor::Adoptopenjdk));
    }
}
