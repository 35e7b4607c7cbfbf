/// Detailed crater calculator, parameterized by target material.
///
/// Uses a different set of scaling coefficients than the impact calculator's
/// crater estimate; the two laws are documented behavior and are kept as
/// separate, independently testable computations.
use crate::constants::{TargetMaterial, EARTH_GRAVITY};
use crate::domain::{AsteroidParameters, CraterDetail, CraterResponse};
use std::f64::consts::PI;

pub fn calculate_crater(params: &AsteroidParameters, target: TargetMaterial) -> CraterResponse {
    let diameter_m = crater_diameter_m(params, target);
    let depth_m = diameter_m / 3.0;

    // Excavated volume approximated as a cone.
    let volume_m3 = (PI / 3.0) * (diameter_m / 2.0).powi(2) * depth_m;

    CraterResponse {
        crater: CraterDetail {
            diameter_m,
            diameter_km: diameter_m / 1000.0,
            depth_m,
            volume_m3,
            ejecta_radius_m: diameter_m * 2.5,
        },
        comparison: crater_comparison(diameter_m),
    }
}

/// Holsapple & Housen scaling for competent targets (variant B).
///
/// D = 1.161 * (rho_a/rho_t)^(1/3) * L^1.056 * v^0.44 * sin(theta)^(1/3)
///     * g^(-0.22), with velocity in km/s.
fn crater_diameter_m(params: &AsteroidParameters, target: TargetMaterial) -> f64 {
    1.161
        * (params.density / target.density()).powf(1.0 / 3.0)
        * params.diameter.powf(1.056)
        * params.velocity.powf(0.44)
        * params.angle.to_radians().sin().powf(1.0 / 3.0)
        * EARTH_GRAVITY.powf(-0.22)
}

/// Qualitative comparison to known craters, keyed to diameter in km.
fn crater_comparison(diameter_m: f64) -> String {
    let diameter_km = diameter_m / 1000.0;

    if diameter_km < 0.1 {
        "Smaller than a football field".to_string()
    } else if diameter_km < 1.0 {
        format!("About {diameter_km:.1} km - similar to Meteor Crater, Arizona")
    } else if diameter_km < 10.0 {
        format!("About {diameter_km:.1} km - similar to Barringer Crater")
    } else if diameter_km < 100.0 {
        format!("About {diameter_km:.1} km - similar to Chicxulub crater (dinosaur extinction)")
    } else {
        format!("About {diameter_km:.1} km - larger than most known impact craters")
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
    fn test_crater_geometry_relations() {
        let result = calculate_crater(&reference_asteroid(), TargetMaterial::Rock);
        let c = result.crater;
        assert_relative_eq!(c.depth_m, c.diameter_m / 3.0);
        assert_relative_eq!(c.ejecta_radius_m, c.diameter_m * 2.5);
        assert_relative_eq!(
            c.volume_m3,
            (PI / 3.0) * (c.diameter_m / 2.0).powi(2) * c.depth_m
        );
    }

    #[test]
    fn test_softer_target_yields_larger_crater() {
        let params = reference_asteroid();
        let rock = calculate_crater(&params, TargetMaterial::Rock);
        let sand = calculate_crater(&params, TargetMaterial::Sand);
        let ice = calculate_crater(&params, TargetMaterial::Ice);
        // Lower target density increases the density-ratio term.
        assert!(sand.crater.diameter_m > rock.crater.diameter_m);
        assert!(ice.crater.diameter_m > sand.crater.diameter_m);
    }

    #[test]
    fn test_comparison_bands_differentiate() {
        let texts: Vec<String> = [50.0, 500.0, 5_000.0, 50_000.0, 500_000.0]
            .iter()
            .map(|d| crater_comparison(*d))
            .collect();

        assert_eq!(texts[0], "Smaller than a football field");
        assert!(texts[1].contains("Meteor Crater"));
        assert!(texts[2].contains("Barringer"));
        assert!(texts[3].contains("Chicxulub"));
        assert!(texts[4].contains("larger than most known impact craters"));
    }

    #[test]
    fn test_comparison_interpolates_diameter() {
        assert!(crater_comparison(5_300.0).starts_with("About 5.3 km"));
    }
}
