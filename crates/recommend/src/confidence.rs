//! Confidence blending.
//!
//! The constants here are empirically chosen and observable in ranking, so
//! they are pinned by tests: the 0.6/0.4 blend, the asymmetric /50 and /100
//! growth divisors (growth moves confidence faster than decline), and the
//! +/-0.2 validation nudges with their caps and floors.

use waypoint_market::{MarketValidation, OccupationOutlook};

/// Weight of the skill-match score in the final blend.
pub const BASE_WEIGHT: f64 = 0.6;
/// Weight of the market confidence in the final blend.
pub const MARKET_WEIGHT: f64 = 0.4;

/// Market confidence when no data is available.
const NEUTRAL: f64 = 0.5;
/// Positive growth divisor; caps out at [`GROWTH_CAP`].
const GROWTH_DIVISOR: f64 = 50.0;
/// Negative growth divisor; bottoms out at [`DECLINE_FLOOR`].
const DECLINE_DIVISOR: f64 = 100.0;
const GROWTH_CAP: f64 = 0.9;
const DECLINE_FLOOR: f64 = 0.1;

/// Size of the validation nudge in either direction.
const VALIDATION_NUDGE: f64 = 0.2;
/// Validator confidence needed (with current data) to nudge upward.
const STRONG_VALIDATION: f64 = 0.7;
/// Validator confidence below which the nudge goes downward.
const WEAK_VALIDATION: f64 = 0.4;
const VALIDATION_CAP: f64 = 0.95;
const VALIDATION_FLOOR: f64 = 0.2;

/// Market-side confidence in [0.1, 0.95], starting neutral at 0.5.
///
/// Positive growth nudges upward along `growth / 50`, negative growth
/// downward along `growth / 100`; a growth of exactly zero stays neutral. A
/// confident, current validation then adds 0.2 (capped), a weak one
/// subtracts 0.2 (floored).
pub fn market_confidence(
    outlook: Option<&OccupationOutlook>,
    validation: Option<&MarketValidation>,
) -> f64 {
    let mut market = NEUTRAL;

    if let Some(growth) = outlook.and_then(|o| o.growth_percent) {
        if growth > 0.0 {
            market = (NEUTRAL + growth / GROWTH_DIVISOR).min(GROWTH_CAP);
        } else if growth < 0.0 {
            market = (NEUTRAL + growth / DECLINE_DIVISOR).max(DECLINE_FLOOR);
        }
    }

    if let Some(v) = validation {
        if v.confidence > STRONG_VALIDATION && v.is_current {
            market = (market + VALIDATION_NUDGE).min(VALIDATION_CAP);
        } else if v.confidence < WEAK_VALIDATION {
            market = (market - VALIDATION_NUDGE).max(VALIDATION_FLOOR);
        }
    }

    market
}

/// Blends the skill-match score with the market confidence.
pub fn blend_confidence(base: f64, market: f64) -> f64 {
    base * BASE_WEIGHT + market * MARKET_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlook(growth: Option<f64>) -> OccupationOutlook {
        OccupationOutlook {
            occupation_code: "x".into(),
            occupation_title: "X".into(),
            growth_percent: growth,
            median_annual_wage: None,
            typical_education: None,
        }
    }

    fn validation(confidence: f64, is_current: bool) -> MarketValidation {
        MarketValidation {
            summary: String::new(),
            sources: Vec::new(),
            confidence,
            is_current,
        }
    }

    #[test]
    fn no_data_is_neutral() {
        assert_eq!(market_confidence(None, None), 0.5);
        assert_eq!(market_confidence(Some(&outlook(None)), None), 0.5);
    }

    #[test]
    fn zero_growth_stays_neutral() {
        assert_eq!(market_confidence(Some(&outlook(Some(0.0))), None), 0.5);
    }

    #[test]
    fn positive_growth_divides_by_fifty_and_caps_at_point_nine() {
        let c = market_confidence(Some(&outlook(Some(10.0))), None);
        assert!((c - 0.7).abs() < 1e-9);
        // 50% growth would give 1.5, capped.
        let capped = market_confidence(Some(&outlook(Some(50.0))), None);
        assert_eq!(capped, 0.9);
    }

    #[test]
    fn negative_growth_divides_by_one_hundred_and_floors_at_point_one() {
        let c = market_confidence(Some(&outlook(Some(-10.0))), None);
        assert!((c - 0.4).abs() < 1e-9);
        let floored = market_confidence(Some(&outlook(Some(-80.0))), None);
        assert_eq!(floored, 0.1);
    }

    #[test]
    fn growth_moves_confidence_faster_than_decline() {
        let up = market_confidence(Some(&outlook(Some(10.0))), None) - 0.5;
        let down = 0.5 - market_confidence(Some(&outlook(Some(-10.0))), None);
        assert!((up - 2.0 * down).abs() < 1e-9);
    }

    #[test]
    fn strong_current_validation_nudges_up_with_cap() {
        let c = market_confidence(None, Some(&validation(0.8, true)));
        assert!((c - 0.7).abs() < 1e-9);

        let capped = market_confidence(
            Some(&outlook(Some(40.0))),
            Some(&validation(0.9, true)),
        );
        assert_eq!(capped, 0.95);
    }

    #[test]
    fn strong_but_stale_validation_does_not_nudge() {
        let c = market_confidence(None, Some(&validation(0.8, false)));
        assert_eq!(c, 0.5);
    }

    #[test]
    fn weak_validation_nudges_down_with_floor() {
        let c = market_confidence(None, Some(&validation(0.3, true)));
        assert!((c - 0.3).abs() < 1e-9);

        let floored = market_confidence(
            Some(&outlook(Some(-80.0))),
            Some(&validation(0.1, false)),
        );
        assert_eq!(floored, 0.2);
    }

    #[test]
    fn blend_weights_are_sixty_forty() {
        let c = blend_confidence(1.0, 0.5);
        assert!((c - 0.8).abs() < 1e-9);
        assert!((BASE_WEIGHT + MARKET_WEIGHT - 1.0).abs() < 1e-9);
    }
}
