/// Domain models for the application
///
/// Request records carry the documented per-field defaults so every input is
/// optional on the wire; response records are the exact contract surface of
/// the API (field names and units must round-trip unchanged).
use crate::constants::{TargetMaterial, AU};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Orbital mechanics
// ---------------------------------------------------------------------------

/// Keplerian elements plus the true anomaly of the point being evaluated.
///
/// Angles are degrees; the semi-major axis is meters. Eccentricity is taken
/// as-is: values >= 1 describe unbound orbits and are the caller's
/// responsibility, the transform evaluates them without signalling.
#[derive(Debug, Clone)]
pub struct OrbitalElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub long_ascending_node: f64,
    pub arg_periapsis: f64,
    pub true_anomaly: f64,
}

/// Cartesian position in meters, plus distance from the focus.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OrbitalPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub distance: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrajectoryRequest {
    #[serde(default = "default_semi_major_axis")]
    pub semi_major_axis: f64,
    #[serde(default = "default_eccentricity")]
    pub eccentricity: f64,
    #[serde(default = "default_inclination")]
    pub inclination: f64,
    #[serde(default)]
    pub long_ascending_node: f64,
    #[serde(default)]
    pub arg_periapsis: f64,
    #[serde(default = "default_num_points")]
    pub num_points: usize,
}

impl TrajectoryRequest {
    pub fn elements(&self) -> OrbitalElements {
        OrbitalElements {
            semi_major_axis: self.semi_major_axis,
            eccentricity: self.eccentricity,
            inclination: self.inclination,
            long_ascending_node: self.long_ascending_node,
            arg_periapsis: self.arg_periapsis,
            true_anomaly: 0.0,
        }
    }
}

fn default_semi_major_axis() -> f64 {
    1.5 * AU
}
fn default_eccentricity() -> f64 {
    0.1
}
fn default_inclination() -> f64 {
    5.0
}
fn default_num_points() -> usize {
    100
}

/// One sampled orbit point, position in AU for visualization.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub true_anomaly: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrajectoryResponse {
    pub trajectory: Vec<TrajectoryPoint>,
    pub orbital_period_days: f64,
}

// ---------------------------------------------------------------------------
// Asteroid physical parameters (shared by impact, crater and mitigation)
// ---------------------------------------------------------------------------

/// Physical parameters of the incoming body.
///
/// Units: diameter meters, velocity km/s, density kg/m³, impact angle in
/// degrees from horizontal.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AsteroidParameters {
    #[serde(default = "default_diameter")]
    pub diameter: f64,
    #[serde(default = "default_velocity")]
    pub velocity: f64,
    #[serde(default = "default_density")]
    pub density: f64,
    #[serde(default = "default_angle")]
    pub angle: f64,
}

fn default_diameter() -> f64 {
    100.0
}
fn default_velocity() -> f64 {
    20.0
}
fn default_density() -> f64 {
    3000.0
}
fn default_angle() -> f64 {
    45.0
}

// ---------------------------------------------------------------------------
// Impact physics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AsteroidSummary {
    pub diameter: f64,
    pub mass: f64,
    pub velocity: f64,
    pub density: f64,
    pub angle: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EnergyBreakdown {
    pub joules: f64,
    pub megatons_tnt: f64,
    pub hiroshima_bombs: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CraterSummary {
    pub diameter_meters: f64,
    pub diameter_km: f64,
    pub depth_meters: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeismicEstimate {
    pub magnitude: f64,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectRadii {
    pub fireball_radius_km: f64,
    pub thermal_radius_km: f64,
    pub blast_radius_severe_km: f64,
    pub blast_radius_moderate_km: f64,
    pub tsunami_potential: &'static str,
}

/// Severity band keyed to diameter, with a fixed display color.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactClassification {
    pub level: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactResponse {
    pub asteroid: AsteroidSummary,
    pub energy: EnergyBreakdown,
    pub crater: CraterSummary,
    pub seismic: SeismicEstimate,
    pub effects: EffectRadii,
    pub classification: ImpactClassification,
}

// ---------------------------------------------------------------------------
// Detailed crater
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CraterRequest {
    #[serde(flatten)]
    pub asteroid: AsteroidParameters,
    #[serde(default)]
    pub target_type: TargetMaterial,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CraterDetail {
    pub diameter_m: f64,
    pub diameter_km: f64,
    pub depth_m: f64,
    pub volume_m3: f64,
    pub ejecta_radius_m: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CraterResponse {
    pub crater: CraterDetail,
    pub comparison: String,
}

// ---------------------------------------------------------------------------
// Mitigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct MitigationRequest {
    #[serde(flatten)]
    pub asteroid: AsteroidParameters,
    #[serde(default = "default_strategy")]
    pub strategy: String,
    #[serde(default = "default_warning_time")]
    pub warning_time: f64,
    #[serde(default = "default_deflection_time")]
    pub deflection_time: f64,
    #[serde(default = "default_impactor_mass")]
    pub impactor_mass: f64,
    #[serde(default = "default_impactor_velocity")]
    pub impactor_velocity: f64,
    #[serde(default = "default_spacecraft_mass")]
    pub spacecraft_mass: f64,
    #[serde(default = "default_laser_power")]
    pub laser_power: f64,
    #[serde(default = "default_nuclear_yield")]
    pub nuclear_yield: f64,
}

fn default_strategy() -> String {
    "kinetic_impactor".to_string()
}
fn default_warning_time() -> f64 {
    10.0
}
fn default_deflection_time() -> f64 {
    5.0
}
fn default_impactor_mass() -> f64 {
    1000.0
}
fn default_impactor_velocity() -> f64 {
    10.0
}
fn default_spacecraft_mass() -> f64 {
    20_000.0
}
fn default_laser_power() -> f64 {
    1e6
}
fn default_nuclear_yield() -> f64 {
    1.0
}

/// Deflection strategy with the parameters its delta-v model needs.
///
/// A request naming a strategy this service does not know resolves to
/// `Unrecognized`, which the calculator turns into a zero-effect result
/// rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum MitigationStrategy {
    KineticImpactor {
        /// kg
        impactor_mass: f64,
        /// km/s relative to the asteroid
        impactor_velocity: f64,
    },
    GravityTractor {
        /// kg
        spacecraft_mass: f64,
    },
    LaserAblation {
        /// Watts delivered at the surface
        laser_power: f64,
    },
    NuclearStandoff {
        /// megatons TNT
        yield_megatons: f64,
    },
    Unrecognized {
        name: String,
    },
}

impl MitigationRequest {
    /// Resolve the wire-level strategy tag plus its parameter fields into
    /// the typed strategy variant.
    pub fn resolve_strategy(&self) -> MitigationStrategy {
        match self.strategy.as_str() {
            "kinetic_impactor" => MitigationStrategy::KineticImpactor {
                impactor_mass: self.impactor_mass,
                impactor_velocity: self.impactor_velocity,
            },
            "gravity_tractor" => MitigationStrategy::GravityTractor {
                spacecraft_mass: self.spacecraft_mass,
            },
            "laser_ablation" => MitigationStrategy::LaserAblation {
                laser_power: self.laser_power,
            },
            "nuclear" => MitigationStrategy::NuclearStandoff {
                yield_megatons: self.nuclear_yield,
            },
            other => MitigationStrategy::Unrecognized {
                name: other.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MitigationParameters {
    pub warning_time_years: f64,
    pub deflection_time_years: f64,
    pub asteroid_mass_kg: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MitigationNumbers {
    pub delta_v_ms: f64,
    pub delta_v_cms: f64,
    pub deflection_distance_km: f64,
    pub deflection_angle_degrees: f64,
    pub success: bool,
    pub success_margin_km: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub status: &'static str,
    pub message: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MitigationResponse {
    pub strategy: String,
    pub parameters: MitigationParameters,
    pub results: MitigationNumbers,
    pub recommendation: Recommendation,
}

// ---------------------------------------------------------------------------
// Presets and health
// ---------------------------------------------------------------------------

/// Preset impact scenario served by the sample catalog endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SampleAsteroid {
    pub id: &'static str,
    pub name: &'static str,
    pub diameter: f64,
    pub velocity: f64,
    pub density: f64,
    pub approach_angle: f64,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SamplesResponse {
    pub samples: Vec<SampleAsteroid>,
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub service: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asteroid_defaults() {
        let params: AsteroidParameters = serde_json::from_str("{}").unwrap();
        assert_eq!(params.diameter, 100.0);
        assert_eq!(params.velocity, 20.0);
        assert_eq!(params.density, 3000.0);
        assert_eq!(params.angle, 45.0);
    }

    #[test]
    fn test_trajectory_defaults() {
        let req: TrajectoryRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.semi_major_axis, 1.5 * AU);
        assert_eq!(req.eccentricity, 0.1);
        assert_eq!(req.inclination, 5.0);
        assert_eq!(req.num_points, 100);
    }

    #[test]
    fn test_strategy_resolution() {
        let req: MitigationRequest =
            serde_json::from_str(r#"{"strategy": "gravity_tractor", "spacecraft_mass": 5000}"#)
                .unwrap();
        assert_eq!(
            req.resolve_strategy(),
            MitigationStrategy::GravityTractor {
                spacecraft_mass: 5000.0
            }
        );
    }

    #[test]
    fn test_unknown_strategy_resolves_to_unrecognized() {
        let req: MitigationRequest =
            serde_json::from_str(r#"{"strategy": "solar_sail"}"#).unwrap();
        assert_eq!(
            req.resolve_strategy(),
            MitigationStrategy::Unrecognized {
                name: "solar_sail".to_string()
            }
        );
    }
}
