/// Orbital position transform and trajectory sampling.
///
/// Static single-epoch model: true anomaly is taken as given, never derived
/// from a mean anomaly, and no time integration happens anywhere here.
use crate::constants::{AU, G, SECONDS_PER_DAY, SUN_MASS};
use crate::domain::{OrbitalElements, OrbitalPosition, TrajectoryPoint, TrajectoryResponse};

/// Convert Keplerian elements at a given true anomaly into an ecliptic
/// Cartesian position.
///
/// The three rotations run in a fixed order: argument of periapsis about the
/// orbital-plane normal, inclination tilting the y/z components, then
/// longitude of ascending node about the original z-axis. Reordering them
/// would break the element-to-ecliptic transform.
pub fn orbital_position(elements: &OrbitalElements) -> OrbitalPosition {
    let i = elements.inclination.to_radians();
    let omega = elements.long_ascending_node.to_radians();
    let w = elements.arg_periapsis.to_radians();
    let nu = elements.true_anomaly.to_radians();

    let a = elements.semi_major_axis;
    let e = elements.eccentricity;

    // Conic-section equation for distance from the focus.
    let r = a * (1.0 - e * e) / (1.0 + e * nu.cos());

    // Position in the orbital plane.
    let x_orb = r * nu.cos();
    let y_orb = r * nu.sin();

    // Rotate by argument of periapsis.
    let x1 = x_orb * w.cos() - y_orb * w.sin();
    let y1 = x_orb * w.sin() + y_orb * w.cos();

    // Rotate by inclination.
    let x2 = x1;
    let y2 = y1 * i.cos();
    let z2 = y1 * i.sin();

    // Rotate by longitude of ascending node.
    let x3 = x2 * omega.cos() - y2 * omega.sin();
    let y3 = x2 * omega.sin() + y2 * omega.cos();
    let z3 = z2;

    OrbitalPosition {
        x: x3,
        y: y3,
        z: z3,
        distance: r,
    }
}

/// Orbital period from Kepler's third law, in days.
///
/// Assumes a heliocentric orbit: the central mass is always the Sun.
pub fn orbital_period_days(semi_major_axis: f64) -> f64 {
    let period_seconds =
        2.0 * std::f64::consts::PI * (semi_major_axis.powi(3) / (G * SUN_MASS)).sqrt();
    period_seconds / SECONDS_PER_DAY
}

/// Sample `num_points` positions along one revolution.
///
/// Sample i sits at i*360/N degrees of true anomaly, so the full period is
/// covered but the 360° endpoint itself is never emitted. Positions are
/// scaled to AU for the visualization clients.
pub fn sample_trajectory(elements: &OrbitalElements, num_points: usize) -> TrajectoryResponse {
    let mut trajectory = Vec::with_capacity(num_points);

    for i in 0..num_points {
        let true_anomaly = (i as f64 / num_points as f64) * 360.0;
        let pos = orbital_position(&OrbitalElements {
            true_anomaly,
            ..elements.clone()
        });
        trajectory.push(TrajectoryPoint {
            x: pos.x / AU,
            y: pos.y / AU,
            z: pos.z / AU,
            true_anomaly,
        });
    }

    TrajectoryResponse {
        trajectory,
        orbital_period_days: orbital_period_days(elements.semi_major_axis),
    }
}
