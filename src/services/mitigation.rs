/// Mitigation calculator: strategy-dispatched delta-v models, deflection
/// projection and recommendation.
use crate::constants::{EARTH_RADIUS, G, SECONDS_PER_YEAR};
use crate::domain::{
    AsteroidParameters, MitigationNumbers, MitigationParameters, MitigationResponse,
    MitigationStrategy, Recommendation,
};
use crate::errors::{ApiError, ApiResult};
use crate::services::asteroid_mass;
use tracing::warn;

/// Momentum enhancement factor for kinetic impactors (ejecta contribution).
const BETA: f64 = 3.0;

/// Gravity tractor standoff distance from the asteroid (m).
const TRACTOR_DISTANCE: f64 = 100.0;

/// Fraction of laser power that ends up ablating surface material.
const LASER_EFFICIENCY: f64 = 0.1;

/// Vaporization energy of the ablated material (J/kg).
const VAPORIZATION_ENERGY: f64 = 2.5e6;

/// Exhaust velocity of the ablation plume (m/s).
const ABLATION_EXHAUST_VELOCITY: f64 = 1000.0;

/// Fraction of a standoff nuclear yield coupled into momentum.
const NUCLEAR_COUPLING: f64 = 0.01;

pub fn calculate_mitigation(
    params: &AsteroidParameters,
    strategy: &MitigationStrategy,
    deflection_time_years: f64,
    warning_time_years: f64,
) -> ApiResult<MitigationResponse> {
    let mass = asteroid_mass(params);
    let time_to_impact = deflection_time_years * SECONDS_PER_YEAR;

    let delta_v = delta_v_ms(strategy, mass, time_to_impact)?;

    // Deflection accumulates linearly from the delta-v over the remaining
    // time to impact; success means missing the Earth disc.
    let deflection_distance_km = delta_v * time_to_impact / 1000.0;
    let earth_radius_km = EARTH_RADIUS / 1000.0;
    let success = deflection_distance_km > earth_radius_km;

    // Small-angle proxy for the trajectory change, not a re-solved orbit.
    let velocity_ms = params.velocity * 1000.0;
    let deflection_angle_degrees = (delta_v / velocity_ms).atan().to_degrees();

    Ok(MitigationResponse {
        strategy: strategy_name(strategy).to_string(),
        parameters: MitigationParameters {
            warning_time_years,
            deflection_time_years,
            asteroid_mass_kg: mass,
        },
        results: MitigationNumbers {
            delta_v_ms: delta_v,
            delta_v_cms: delta_v * 100.0,
            deflection_distance_km,
            deflection_angle_degrees,
            success,
            success_margin_km: deflection_distance_km - earth_radius_km,
        },
        recommendation: recommend(success, deflection_distance_km, earth_radius_km),
    })
}

/// Delta-v imparted to the asteroid, per strategy model.
fn delta_v_ms(strategy: &MitigationStrategy, mass: f64, time_seconds: f64) -> ApiResult<f64> {
    match strategy {
        MitigationStrategy::KineticImpactor {
            impactor_mass,
            impactor_velocity,
        } => {
            // Momentum transfer from an inelastic hit, amplified by ejecta.
            let momentum_transfer = impactor_mass * impactor_velocity * 1000.0;
            Ok(momentum_transfer / mass * BETA)
        }
        MitigationStrategy::GravityTractor { spacecraft_mass } => {
            // Constant gravitational tug over the whole deflection window.
            Ok(G * spacecraft_mass * time_seconds / (TRACTOR_DISTANCE * TRACTOR_DISTANCE * mass))
        }
        MitigationStrategy::LaserAblation { laser_power } => {
            let energy_delivered = laser_power * time_seconds * LASER_EFFICIENCY;
            let mass_ablated = energy_delivered / VAPORIZATION_ENERGY;
            if mass_ablated >= mass {
                return Err(ApiError::Domain(format!(
                    "laser ablation would vaporize the entire asteroid \
                     ({mass_ablated:.3e} kg ablated of {mass:.3e} kg)"
                )));
            }
            // Rocket equation with the ablation plume as exhaust.
            Ok(ABLATION_EXHAUST_VELOCITY * (mass / (mass - mass_ablated)).ln())
        }
        MitigationStrategy::NuclearStandoff { yield_megatons } => {
            let energy_joules = yield_megatons * crate::constants::MEGATON_TNT_JOULES;
            let momentum_transfer = (2.0 * mass * energy_joules * NUCLEAR_COUPLING).sqrt();
            Ok(momentum_transfer / mass)
        }
        MitigationStrategy::Unrecognized { name } => {
            // Degenerate but defined: an unknown strategy deflects nothing.
            warn!(strategy = %name, "unrecognized mitigation strategy, reporting zero effect");
            Ok(0.0)
        }
    }
}

fn strategy_name(strategy: &MitigationStrategy) -> &str {
    match strategy {
        MitigationStrategy::KineticImpactor { .. } => "kinetic_impactor",
        MitigationStrategy::GravityTractor { .. } => "gravity_tractor",
        MitigationStrategy::LaserAblation { .. } => "laser_ablation",
        MitigationStrategy::NuclearStandoff { .. } => "nuclear",
        MitigationStrategy::Unrecognized { name } => name,
    }
}

fn recommend(success: bool, deflection_km: f64, earth_radius_km: f64) -> Recommendation {
    if success {
        let margin = deflection_km - earth_radius_km;
        if margin > earth_radius_km * 2.0 {
            Recommendation {
                status: "Excellent",
                message: "Deflection successful with large safety margin",
                color: "#22c55e",
            }
        } else {
            Recommendation {
                status: "Successful",
                message: "Deflection successful, asteroid will miss Earth",
                color: "#4ade80",
            }
        }
    } else {
        let deficit = earth_radius_km - deflection_km;
        if deficit < earth_radius_km * 0.5 {
            Recommendation {
                status: "Marginal",
                message: "Close call - consider additional deflection or earlier intervention",
                color: "#fbbf24",
            }
        } else {
            Recommendation {
                status: "Insufficient",
                message: "Deflection insufficient - need more powerful intervention or earlier action",
                color: "#ef4444",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_asteroid() -> AsteroidParameters {
        AsteroidParameters {
            diameter: 100.0,
            velocity: 20.0,
            density: 3000.0,
            angle: 45.0,
        }
    }

    #[test]
    fn test_kinetic_impactor_reference_scenario() {
        let strategy = MitigationStrategy::KineticImpactor {
            impactor_mass: 1000.0,
            impactor_velocity: 10.0,
        };
        let result =
            calculate_mitigation(&reference_asteroid(), &strategy, 5.0, 10.0).unwrap();

        assert_relative_eq!(result.results.delta_v_ms, 1.91e-2, max_relative = 1e-3);
        assert_relative_eq!(
            result.results.deflection_distance_km,
            3013.0,
            max_relative = 1e-3
        );
        assert!(!result.results.success);
        // Deficit of ~3357 km is more than half an Earth radius.
        assert_eq!(result.recommendation.status, "Insufficient");
    }

    #[test]
    fn test_success_margin_is_distance_minus_earth_radius() {
        let strategy = MitigationStrategy::KineticImpactor {
            impactor_mass: 1000.0,
            impactor_velocity: 10.0,
        };
        let result =
            calculate_mitigation(&reference_asteroid(), &strategy, 5.0, 10.0).unwrap();
        let r = &result.results;
        assert_relative_eq!(r.success_margin_km, r.deflection_distance_km - 6371.0);
        assert_eq!(r.success, r.deflection_distance_km > 6371.0);
    }

    #[test]
    fn test_near_miss_is_marginal() {
        // ~4520 km of deflection leaves a deficit under half an Earth radius.
        let strategy = MitigationStrategy::KineticImpactor {
            impactor_mass: 1500.0,
            impactor_velocity: 10.0,
        };
        let result =
            calculate_mitigation(&reference_asteroid(), &strategy, 5.0, 10.0).unwrap();
        assert!(!result.results.success);
        assert_eq!(result.recommendation.status, "Marginal");
    }

    #[test]
    fn test_longer_lead_time_succeeds() {
        // Same impactor, deflecting 15 years out instead of 5.
        let strategy = MitigationStrategy::KineticImpactor {
            impactor_mass: 1000.0,
            impactor_velocity: 10.0,
        };
        let result =
            calculate_mitigation(&reference_asteroid(), &strategy, 15.0, 20.0).unwrap();
        assert!(result.results.success);
        assert_eq!(result.recommendation.status, "Successful");
    }

    #[test]
    fn test_nuclear_standoff_delta_v() {
        let strategy = MitigationStrategy::NuclearStandoff {
            yield_megatons: 1.0,
        };
        let mass = asteroid_mass(&reference_asteroid());
        let expected = (2.0 * mass * 4.184e15 * 0.01).sqrt() / mass;

        let result =
            calculate_mitigation(&reference_asteroid(), &strategy, 5.0, 10.0).unwrap();
        assert_relative_eq!(result.results.delta_v_ms, expected, max_relative = 1e-12);
        assert_eq!(result.recommendation.status, "Excellent");
    }

    #[test]
    fn test_gravity_tractor_scales_with_time() {
        let strategy = MitigationStrategy::GravityTractor {
            spacecraft_mass: 20_000.0,
        };
        let short = calculate_mitigation(&reference_asteroid(), &strategy, 5.0, 10.0).unwrap();
        let long = calculate_mitigation(&reference_asteroid(), &strategy, 10.0, 10.0).unwrap();
        // Delta-v is linear in tug time, distance quadratic.
        assert_relative_eq!(
            long.results.delta_v_ms,
            2.0 * short.results.delta_v_ms,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            long.results.deflection_distance_km,
            4.0 * short.results.deflection_distance_km,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_laser_ablation_total_vaporization_is_domain_error() {
        // A 1 m pebble against a full-power laser for 5 years ablates far
        // more mass than the body holds.
        let pebble = AsteroidParameters {
            diameter: 1.0,
            ..reference_asteroid()
        };
        let strategy = MitigationStrategy::LaserAblation { laser_power: 1e9 };
        let result = calculate_mitigation(&pebble, &strategy, 5.0, 10.0);
        assert!(matches!(result, Err(ApiError::Domain(_))));
    }

    #[test]
    fn test_laser_ablation_rocket_equation() {
        let strategy = MitigationStrategy::LaserAblation { laser_power: 1e6 };
        let result =
            calculate_mitigation(&reference_asteroid(), &strategy, 5.0, 10.0).unwrap();

        let mass = asteroid_mass(&reference_asteroid());
        let t = 5.0 * SECONDS_PER_YEAR;
        let ablated = 1e6 * t * 0.1 / 2.5e6;
        let expected = 1000.0 * (mass / (mass - ablated)).ln();
        assert_relative_eq!(result.results.delta_v_ms, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_unrecognized_strategy_reports_zero_effect() {
        let strategy = MitigationStrategy::Unrecognized {
            name: "solar_sail".to_string(),
        };
        let result =
            calculate_mitigation(&reference_asteroid(), &strategy, 5.0, 10.0).unwrap();
        assert_eq!(result.strategy, "solar_sail");
        assert_eq!(result.results.delta_v_ms, 0.0);
        assert_eq!(result.results.deflection_distance_km, 0.0);
        assert!(!result.results.success);
        assert_eq!(result.recommendation.status, "Insufficient");
    }
}
