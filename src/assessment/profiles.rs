//! Fixed risk profiles for well-known ranges.

use crate::assessment::types::{ActivityLevel, RiskFactors, RiskProfile};

pub const HIMALAYAS: RiskProfile = RiskProfile {
    risk_level: 65,
    factors: RiskFactors {
        temperature: -5,
        precipitation: 45,
        wind_speed: 25,
        slope_angle: 35,
        elevation: 4000,
        activity: ActivityLevel::Moderate,
    },
    recommendations: &[
        "Exercise caution in steep terrain",
        "Avoid avalanche-prone slopes",
        "Carry safety equipment",
        "Check local avalanche bulletin",
    ],
};

pub const ALPS: RiskProfile = RiskProfile {
    risk_level: 40,
    factors: RiskFactors {
        temperature: 2,
        precipitation: 30,
        wind_speed: 15,
        slope_angle: 28,
        elevation: 2500,
        activity: ActivityLevel::Low,
    },
    recommendations: &[
        "Generally safe conditions",
        "Normal precautions recommended",
        "Check weather forecast regularly",
    ],
};

/// A fixed profile and the lowercase keyword that selects it.
pub struct KnownProfile {
    pub name: &'static str,
    pub keyword: &'static str,
    pub profile: RiskProfile,
}

/// Known profiles in match priority order.
pub static KNOWN_PROFILES: [KnownProfile; 2] = [
    KnownProfile {
        name: "himalayas",
        keyword: "himalaya",
        profile: HIMALAYAS,
    },
    KnownProfile {
        name: "alps",
        keyword: "alp",
        profile: ALPS,
    },
];

/// Look up a fixed profile by canonical name.
pub fn known_profile(name: &str) -> Option<&'static RiskProfile> {
    KNOWN_PROFILES
        .iter()
        .find(|k| k.name.eq_ignore_ascii_case(name))
        .map(|k| &k.profile)
}

/// Find the first known profile whose keyword occurs in `location`, ignoring case.
pub fn match_profile(location: &str) -> Option<&'static KnownProfile> {
    let location = location.to_lowercase();
    KNOWN_PROFILES.iter().find(|k| location.contains(k.keyword))
}
