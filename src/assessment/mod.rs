//! Risk assessment subsystem.
//!
//! # Data Flow
//! ```text
//! location string
//!     → profiles.rs (keyword match: "himalaya", then "alp")
//!         hit  → fixed RiskProfile
//!         miss → generator.rs (uniform random RiskProfile)
//! ```
//!
//! Profiles carry no identity; a result is built per request and dropped
//! once serialized.

pub mod generator;
pub mod profiles;
pub mod types;

use rand::Rng;

pub use generator::random_profile;
pub use profiles::{known_profile, match_profile};
pub use types::{ActivityLevel, AssessmentRequest, ProfileSource, RiskFactors, RiskProfile};

/// Assess `location`, drawing from `rng` when no fixed profile matches.
pub fn assess_with<R: Rng + ?Sized>(location: &str, rng: &mut R) -> (ProfileSource, RiskProfile) {
    match match_profile(location) {
        Some(known) => (ProfileSource::Known(known.name), known.profile),
        None => (ProfileSource::Generated, random_profile(rng)),
    }
}

/// Assess `location` using the thread-local RNG.
pub fn assess(location: &str) -> (ProfileSource, RiskProfile) {
    assess_with(location, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_assess_known_locations() {
        let (source, profile) = assess("Everest base camp, HIMALAYAS");
        assert_eq!(source, ProfileSource::Known("himalayas"));
        assert_eq!(profile.risk_level, 65);

        let (source, profile) = assess("Zermatt, alps");
        assert_eq!(source.label(), "alps");
        assert_eq!(profile.risk_level, 40);
    }

    #[test]
    fn test_assess_unknown_location_is_generated() {
        let mut rng = StdRng::seed_from_u64(11);
        let (source, profile) = assess_with("Kilimanjaro", &mut rng);
        assert_eq!(source, ProfileSource::Generated);
        assert_eq!(profile.recommendations, generator::GENERIC_RECOMMENDATIONS);
    }

    #[test]
    fn test_empty_location_is_generated() {
        let (source, _) = assess("");
        assert_eq!(source.label(), "generated");
    }
}
