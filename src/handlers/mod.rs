/// HTTP request handlers
///
/// Thin adapters: deserialize a request record, validate it, invoke one
/// calculator, serialize the result. No domain logic lives here.
use crate::config::AppConfig;
use crate::domain::{
    AsteroidParameters, CraterRequest, CraterResponse, Health, ImpactResponse, MitigationRequest,
    MitigationResponse, SampleAsteroid, SamplesResponse, TrajectoryRequest, TrajectoryResponse,
};
use crate::errors::{ApiError, ApiResult};
use crate::services::{crater, impact, mitigation, orbit};
use axum::{extract::State, Json};
use chrono::Utc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        timestamp: Utc::now(),
        service: "Asteroid Impact Calculator",
    })
}

/// Sample asteroid trajectory over one revolution
pub async fn calculate_trajectory(
    State(state): State<AppState>,
    Json(req): Json<TrajectoryRequest>,
) -> ApiResult<Json<TrajectoryResponse>> {
    if !(req.semi_major_axis > 0.0) {
        return Err(ApiError::InvalidInput(
            "semi_major_axis must be positive".to_string(),
        ));
    }
    let max_points = state.config.max_trajectory_points;
    if req.num_points > max_points {
        return Err(ApiError::InvalidInput(format!(
            "num_points must not exceed {max_points}"
        )));
    }

    Ok(Json(orbit::sample_trajectory(&req.elements(), req.num_points)))
}

/// Impact energy, crater, seismic and blast effects
pub async fn calculate_impact(
    Json(params): Json<AsteroidParameters>,
) -> ApiResult<Json<ImpactResponse>> {
    validate_asteroid(&params)?;
    Ok(Json(impact::calculate_impact(&params)?))
}

/// Detailed crater scaling against a selectable target material
pub async fn calculate_crater(
    Json(req): Json<CraterRequest>,
) -> ApiResult<Json<CraterResponse>> {
    validate_asteroid(&req.asteroid)?;
    Ok(Json(crater::calculate_crater(&req.asteroid, req.target_type)))
}

/// Deflection delta-v, projected miss distance and recommendation
pub async fn calculate_mitigation(
    Json(req): Json<MitigationRequest>,
) -> ApiResult<Json<MitigationResponse>> {
    validate_asteroid(&req.asteroid)?;
    Ok(Json(mitigation::calculate_mitigation(
        &req.asteroid,
        &req.resolve_strategy(),
        req.deflection_time,
        req.warning_time,
    )?))
}

/// Preset impact scenarios for the visualization clients
pub async fn get_sample_asteroids() -> Json<SamplesResponse> {
    Json(SamplesResponse {
        samples: sample_asteroids(),
    })
}

/// Entry validation for the asteroid parameter record shared by the impact,
/// crater and mitigation calculators. Angle and eccentricity stay the
/// caller's responsibility.
fn validate_asteroid(params: &AsteroidParameters) -> ApiResult<()> {
    if !(params.diameter > 0.0) {
        return Err(ApiError::InvalidInput(
            "diameter must be positive".to_string(),
        ));
    }
    if !(params.velocity > 0.0) {
        return Err(ApiError::InvalidInput(
            "velocity must be positive".to_string(),
        ));
    }
    if !(params.density > 0.0) {
        return Err(ApiError::InvalidInput(
            "density must be positive".to_string(),
        ));
    }
    Ok(())
}

fn sample_asteroids() -> Vec<SampleAsteroid> {
    vec![
        SampleAsteroid {
            id: "sample_1",
            name: "Impactor-2025 (Hypothetical)",
            diameter: 300.0,
            velocity: 20.0,
            density: 3000.0,
            approach_angle: 45.0,
            description: "A hypothetical 300m asteroid approaching at 20 km/s",
        },
        SampleAsteroid {
            id: "sample_2",
            name: "City Killer (Hypothetical)",
            diameter: 150.0,
            velocity: 25.0,
            density: 2500.0,
            approach_angle: 30.0,
            description: "A smaller but faster asteroid capable of destroying a city",
        },
        SampleAsteroid {
            id: "sample_3",
            name: "Tunguska-Class",
            diameter: 60.0,
            velocity: 15.0,
            density: 2000.0,
            approach_angle: 20.0,
            description: "Similar to the 1908 Tunguska event asteroid",
        },
        SampleAsteroid {
            id: "sample_4",
            name: "Chelyabinsk-Class",
            diameter: 20.0,
            velocity: 19.0,
            density: 1800.0,
            approach_angle: 18.0,
            description: "Similar to the 2013 Chelyabinsk meteor",
        },
        SampleAsteroid {
            id: "sample_5",
            name: "Extinction Event",
            diameter: 10_000.0,
            velocity: 30.0,
            density: 3500.0,
            approach_angle: 60.0,
            description: "A 10km asteroid - similar to the dinosaur extinction event",
        },
    ]
}
