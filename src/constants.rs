/// Physical constants and target material properties
///
/// All values are SI unless noted. These are process-wide immutable values;
/// every calculator reads them, none mutates them.

/// Gravitational constant (m³/kg/s²)
pub const G: f64 = 6.67430e-11;

/// Sun mass (kg)
pub const SUN_MASS: f64 = 1.989e30;

/// Earth mass (kg)
pub const EARTH_MASS: f64 = 5.972e24;

/// Earth mean radius (m)
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Astronomical unit (m)
pub const AU: f64 = 1.496e11;

/// Earth surface gravity (m/s²)
pub const EARTH_GRAVITY: f64 = 9.81;

/// One megaton of TNT (J)
pub const MEGATON_TNT_JOULES: f64 = 4.184e15;

/// Hiroshima bomb yield in megatons (~15 kilotons)
pub const HIROSHIMA_MEGATONS: f64 = 0.015;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian year in seconds (365.25 days)
pub const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;

/// Impact target material, resolved from the `target_type` request field.
///
/// Unknown identifiers fall back to rock rather than failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TargetMaterial {
    #[default]
    Rock,
    Sand,
    Ice,
    Water,
}

impl From<String> for TargetMaterial {
    fn from(s: String) -> Self {
        match s.as_str() {
            "sand" => TargetMaterial::Sand,
            "ice" => TargetMaterial::Ice,
            "water" => TargetMaterial::Water,
            _ => TargetMaterial::Rock,
        }
    }
}

impl TargetMaterial {
    /// Bulk density of the target surface (kg/m³)
    pub fn density(self) -> f64 {
        match self {
            TargetMaterial::Rock => 2500.0,
            TargetMaterial::Sand => 1600.0,
            TargetMaterial::Ice => 920.0,
            TargetMaterial::Water => 1000.0,
        }
    }

    /// Material strength (Pa); water has none
    pub fn strength(self) -> f64 {
        match self {
            TargetMaterial::Rock => 1e7,
            TargetMaterial::Sand => 1e5,
            TargetMaterial::Ice => 1e6,
            TargetMaterial::Water => 0.0,
        }
    }
}
