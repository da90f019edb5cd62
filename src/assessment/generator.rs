//! Random risk profiles for locations with no fixed data.
//!
//! Each field is drawn independently from `u ~ Uniform[0, 1)` and mapped
//! onto its range:
//!
//! | field         | formula               | range        |
//! |---------------|-----------------------|--------------|
//! | riskLevel     | floor(100u)           | 0..=99       |
//! | temperature   | round(-10 + 30u)      | -10..=20     |
//! | precipitation | round(100u)           | 0..=100      |
//! | windSpeed     | round(5 + 50u)        | 5..=55       |
//! | slopeAngle    | round(10 + 50u)       | 10..=60      |
//! | elevation     | round(500 + 4000u)    | 500..=4500   |
//! | activity      | uniform choice of 4   |              |

use rand::seq::SliceRandom;
use rand::Rng;

use crate::assessment::types::{ActivityLevel, RiskFactors, RiskProfile};

/// Advice attached to every generated profile.
pub const GENERIC_RECOMMENDATIONS: &[&str] = &[
    "Check local conditions before traveling",
    "Carry appropriate safety equipment",
    "Inform others of your itinerary",
];

fn scaled<R: Rng + ?Sized>(rng: &mut R, offset: f64, span: f64) -> i32 {
    (offset + rng.gen::<f64>() * span).round() as i32
}

/// Build a fresh profile from `rng`.
pub fn random_profile<R: Rng + ?Sized>(rng: &mut R) -> RiskProfile {
    let risk_level = (rng.gen::<f64>() * 100.0).floor() as u8;

    let factors = RiskFactors {
        temperature: scaled(rng, -10.0, 30.0),
        precipitation: scaled(rng, 0.0, 100.0),
        wind_speed: scaled(rng, 5.0, 50.0),
        slope_angle: scaled(rng, 10.0, 50.0),
        elevation: scaled(rng, 500.0, 4000.0),
        activity: *ActivityLevel::ALL
            .choose(rng)
            .unwrap_or(&ActivityLevel::NoneRecent),
    };

    RiskProfile {
        risk_level,
        factors,
        recommendations: GENERIC_RECOMMENDATIONS,
    }
}
