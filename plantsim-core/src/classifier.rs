//! Environment-to-plant classification.
//!
//! Rules are checked in priority order and the first match wins:
//!
//! | # | Condition | Status | growth |
//! |---|-----------|--------|--------|
//! | 1 | `temperature <= 0` | Frozen | 0.9 |
//! | 2 | `water < 10` | Wilted | 0.8 |
//! | 3 | `temperature > 45` | Dried | 0.85 |
//! | 4 | `wind > 80` | Broken | 1.0 |
//! | 5 | `18 < temperature < 28`, `water > 70`, `wind < 30` | Fruiting | 1.2 |
//! | 6 | `wind > 60` | Windy | 1.0 |
//! | 7 | otherwise | Healthy | 1.0 |

use plantsim_schemas::{Environment, PlantState, PlantStatus};

pub const FREEZING_POINT_C: f64 = 0.0;
pub const DROUGHT_WATER_PCT: f64 = 10.0;
pub const HEAT_DAMAGE_C: f64 = 45.0;
pub const BREAKING_WIND_KMH: f64 = 80.0;
pub const STRONG_WIND_KMH: f64 = 60.0;

/// Open interval of temperatures in which the plant can fruit.
pub const IDEAL_TEMPERATURE_C: (f64, f64) = (18.0, 28.0);
/// Water must be strictly above this to fruit.
pub const IDEAL_WATER_PCT: f64 = 70.0;
/// Wind must be strictly below this to fruit.
pub const IDEAL_WIND_KMH: f64 = 30.0;

const FROZEN_GROWTH: f64 = 0.9;
const WILTED_GROWTH: f64 = 0.8;
const DRIED_GROWTH: f64 = 0.85;
const FRUITING_GROWTH: f64 = 1.2;
const NORMAL_GROWTH: f64 = 1.0;

/// Derives the plant state for an environment snapshot.
///
/// Total over all finite inputs. NaN compares false everywhere and falls
/// through to `Healthy`; callers are expected to reject it before this point.
pub fn classify(env: Environment) -> PlantState {
    let Environment {
        temperature,
        wind,
        water,
    } = env;

    let (status, growth) = if temperature <= FREEZING_POINT_C {
        (PlantStatus::Frozen, FROZEN_GROWTH)
    } else if water < DROUGHT_WATER_PCT {
        (PlantStatus::Wilted, WILTED_GROWTH)
    } else if temperature > HEAT_DAMAGE_C {
        (PlantStatus::Dried, DRIED_GROWTH)
    } else if wind > BREAKING_WIND_KMH {
        (PlantStatus::Broken, NORMAL_GROWTH)
    } else if is_ideal(env) {
        (PlantStatus::Fruiting, FRUITING_GROWTH)
    } else if wind > STRONG_WIND_KMH {
        (PlantStatus::Windy, NORMAL_GROWTH)
    } else {
        (PlantStatus::Healthy, NORMAL_GROWTH)
    };

    PlantState { status, growth }
}

/// Whether all three fruiting conditions hold. Every bound is exclusive.
pub fn is_ideal(env: Environment) -> bool {
    let (low, high) = IDEAL_TEMPERATURE_C;
    let ideal_temp = env.temperature > low && env.temperature < high;
    let ideal_water = env.water > IDEAL_WATER_PCT;
    let ideal_wind = env.wind < IDEAL_WIND_KMH;
    ideal_temp && ideal_water && ideal_wind
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(temperature: f64, water: f64, wind: f64) -> Environment {
        Environment::new(temperature, wind, water)
    }

    fn assert_state(state: PlantState, status: PlantStatus, growth: f64) {
        assert_eq!(state.status, status);
        assert!((state.growth - growth).abs() < 1e-9, "growth {} != {}", state.growth, growth);
    }

    #[test]
    fn test_frozen_at_exact_zero() {
        assert_state(classify(env(0.0, 80.0, 10.0)), PlantStatus::Frozen, 0.9);
        assert_state(classify(env(-10.0, 0.0, 100.0)), PlantStatus::Frozen, 0.9);
    }

    #[test]
    fn test_water_boundary_is_strict() {
        assert_state(classify(env(22.0, 10.0, 10.0)), PlantStatus::Healthy, 1.0);
        assert_state(classify(env(22.0, 9.99, 10.0)), PlantStatus::Wilted, 0.8);
    }

    #[test]
    fn test_dried_above_heat_threshold() {
        assert_state(classify(env(46.0, 80.0, 10.0)), PlantStatus::Dried, 0.85);
        assert_eq!(classify(env(45.0, 80.0, 10.0)).status, PlantStatus::Healthy);
    }

    #[test]
    fn test_broken_beats_fruiting_and_windy() {
        assert_state(classify(env(22.0, 80.0, 85.0)), PlantStatus::Broken, 1.0);
        assert_eq!(classify(env(22.0, 80.0, 80.0)).status, PlantStatus::Windy);
    }

    #[test]
    fn test_fruiting_in_ideal_band() {
        assert_state(classify(env(22.0, 80.0, 10.0)), PlantStatus::Fruiting, 1.2);
    }

    #[test]
    fn test_fruiting_bounds_are_exclusive() {
        assert_eq!(classify(env(18.0, 80.0, 10.0)).status, PlantStatus::Healthy);
        assert_eq!(classify(env(28.0, 80.0, 10.0)).status, PlantStatus::Healthy);
        assert_eq!(classify(env(22.0, 70.0, 10.0)).status, PlantStatus::Healthy);
        assert_eq!(classify(env(22.0, 80.0, 30.0)).status, PlantStatus::Healthy);
    }

    #[test]
    fn test_windy_above_sixty() {
        assert_state(classify(env(22.0, 80.0, 65.0)), PlantStatus::Windy, 1.0);
        assert_eq!(classify(env(22.0, 80.0, 60.0)).status, PlantStatus::Healthy);
    }

    #[test]
    fn test_priority_order() {
        // freezing wins over drought, drought over heat, heat over wind
        assert_eq!(classify(env(-1.0, 5.0, 90.0)).status, PlantStatus::Frozen);
        assert_eq!(classify(env(50.0, 5.0, 90.0)).status, PlantStatus::Wilted);
        assert_eq!(classify(env(50.0, 50.0, 90.0)).status, PlantStatus::Dried);
    }

    #[test]
    fn test_initial_snapshot_is_fruiting() {
        assert_eq!(classify(Environment::INITIAL).status, PlantStatus::Fruiting);
    }

    #[test]
    fn test_out_of_slider_range_still_classifies() {
        assert_eq!(classify(env(1000.0, -3.0, 500.0)).status, PlantStatus::Wilted);
        assert_eq!(classify(env(30.0, 150.0, 0.0)).status, PlantStatus::Healthy);
        assert_eq!(classify(env(30.0, 150.0, 1.0e6)).status, PlantStatus::Broken);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let mut temperature = -10.0;
        while temperature <= 50.0 {
            let mut water = 0.0;
            while water <= 100.0 {
                let mut wind = 0.0;
                while wind <= 100.0 {
                    let e = env(temperature, water, wind);
                    let first = classify(e);
                    assert_eq!(first, classify(e));
                    assert!(PlantStatus::ALL.contains(&first.status));
                    assert!(first.growth > 0.0);
                    wind += 5.0;
                }
                water += 5.0;
            }
            temperature += 1.0;
        }
    }
}
