/// Calculation engine: four independent, stateless calculators.
///
/// Each module is a pure function of its parameter record and shares nothing
/// with the others beyond the constants table, so calls are free to run on
/// any number of concurrent requests without coordination.
use crate::domain::AsteroidParameters;
use std::f64::consts::PI;

pub mod crater;
pub mod impact;
pub mod mitigation;
pub mod orbit;

/// Spherical mass from diameter and bulk density (kg).
pub fn asteroid_mass(params: &AsteroidParameters) -> f64 {
    let radius = params.diameter / 2.0;
    let volume = (4.0 / 3.0) * PI * radius.powi(3);
    volume * params.density
}

/// Impact kinetic energy (J); velocity arrives in km/s.
pub fn kinetic_energy(params: &AsteroidParameters) -> f64 {
    let velocity_ms = params.velocity * 1000.0;
    0.5 * asteroid_mass(params) * velocity_ms * velocity_ms
}
