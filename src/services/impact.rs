/// Impact physics calculator: energy, crater scaling, seismic and
/// atmospheric effects, severity classification.
///
/// Every formula here is an empirical scaling law, not a physical
/// simulation; the numbers are first-order estimates for visualization.
use crate::constants::{EARTH_GRAVITY, HIROSHIMA_MEGATONS, MEGATON_TNT_JOULES};
use crate::domain::{
    AsteroidParameters, AsteroidSummary, CraterSummary, EffectRadii, EnergyBreakdown,
    ImpactClassification, ImpactResponse, SeismicEstimate,
};
use crate::errors::{ApiError, ApiResult};
use crate::services::{asteroid_mass, kinetic_energy};

/// Target density assumed by the simplified crater law (average rock, kg/m³).
const TARGET_DENSITY: f64 = 2500.0;

/// Empirical adjustment applied on top of the pi-group scaling result.
const CRATER_SCALE_FACTOR: f64 = 20.0;

pub fn calculate_impact(params: &AsteroidParameters) -> ApiResult<ImpactResponse> {
    let mass = asteroid_mass(params);
    let energy = kinetic_energy(params);
    let megatons_tnt = energy / MEGATON_TNT_JOULES;

    let crater_diameter = crater_diameter_m(params);
    let magnitude = seismic_magnitude(energy)?;

    Ok(ImpactResponse {
        asteroid: AsteroidSummary {
            diameter: params.diameter,
            mass,
            velocity: params.velocity,
            density: params.density,
            angle: params.angle,
        },
        energy: EnergyBreakdown {
            joules: energy,
            megatons_tnt,
            hiroshima_bombs: megatons_tnt / HIROSHIMA_MEGATONS,
        },
        crater: CraterSummary {
            diameter_meters: crater_diameter,
            diameter_km: crater_diameter / 1000.0,
            depth_meters: crater_diameter / 3.0,
        },
        seismic: SeismicEstimate {
            magnitude,
            description: seismic_description(magnitude),
        },
        effects: effect_radii(params, megatons_tnt),
        classification: classify_impact(params.diameter),
    })
}

/// Simplified Holsapple & Housen crater scaling (variant A).
///
/// D = 1.8 * (rho_a/rho_t)^(1/3) * L^0.13 * v^0.44 * sin(theta)^(1/3)
///     * g^(-0.22), velocity in m/s, then scaled by the empirical factor.
fn crater_diameter_m(params: &AsteroidParameters) -> f64 {
    let velocity_ms = params.velocity * 1000.0;
    let diameter = 1.8
        * (params.density / TARGET_DENSITY).powf(1.0 / 3.0)
        * params.diameter.powf(0.13)
        * velocity_ms.powf(0.44)
        * params.angle.to_radians().sin().powf(1.0 / 3.0)
        * EARTH_GRAVITY.powf(-0.22);

    diameter * CRATER_SCALE_FACTOR
}

/// Richter estimate M = 0.67 * log10(E) - 5.87, energy in joules.
///
/// Undefined for non-positive energy; surfaced as a domain error instead of
/// returning NaN.
fn seismic_magnitude(energy_joules: f64) -> ApiResult<f64> {
    if energy_joules <= 0.0 {
        return Err(ApiError::Domain(
            "seismic magnitude is undefined for non-positive impact energy".to_string(),
        ));
    }
    Ok(0.67 * energy_joules.log10() - 5.87)
}

fn seismic_description(magnitude: f64) -> &'static str {
    if magnitude < 4.0 {
        "Minor - Felt locally"
    } else if magnitude < 5.0 {
        "Light - Felt widely, minor damage"
    } else if magnitude < 6.0 {
        "Moderate - Significant damage in populated areas"
    } else if magnitude < 7.0 {
        "Strong - Major damage over large areas"
    } else if magnitude < 8.0 {
        "Great - Serious damage over very large areas"
    } else {
        "Catastrophic - Devastating effects globally"
    }
}

/// Power-law damage radii in km, all functions of the TNT-equivalent yield.
fn effect_radii(params: &AsteroidParameters, megatons: f64) -> EffectRadii {
    EffectRadii {
        fireball_radius_km: 0.28 * megatons.powf(0.33),
        thermal_radius_km: 0.66 * megatons.powf(0.41),
        blast_radius_severe_km: 0.23 * megatons.powf(0.33),
        blast_radius_moderate_km: 0.54 * megatons.powf(0.33),
        tsunami_potential: tsunami_potential(params),
    }
}

/// Ocean-impact context is assumed by the caller, not checked here.
fn tsunami_potential(params: &AsteroidParameters) -> &'static str {
    if params.diameter > 100.0 && params.velocity > 15.0 {
        "High"
    } else if params.diameter > 50.0 {
        "Moderate"
    } else {
        "Low"
    }
}

/// Severity bands by diameter; first matching band wins, evaluated in
/// ascending order, so the partition is total and non-overlapping.
fn classify_impact(diameter: f64) -> ImpactClassification {
    if diameter < 10.0 {
        ImpactClassification {
            level: "Negligible",
            description: "Burns up in atmosphere, minimal ground effects",
            color: "#4ade80",
        }
    } else if diameter < 50.0 {
        ImpactClassification {
            level: "Local",
            description: "Local damage, similar to Chelyabinsk event",
            color: "#fbbf24",
        }
    } else if diameter < 200.0 {
        ImpactClassification {
            level: "Regional",
            description: "Regional devastation, city-killer",
            color: "#fb923c",
        }
    } else if diameter < 1000.0 {
        ImpactClassification {
            level: "Continental",
            description: "Continental effects, climate impact",
            color: "#f87171",
        }
    } else {
        ImpactClassification {
            level: "Global",
            description: "Mass extinction event",
            color: "#dc2626",
        }
    }
}
