/// Application configuration module
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Upper bound on the caller-supplied trajectory sample count; the
    /// sampler itself accepts any count, the adapter enforces the bound.
    pub max_trajectory_points: usize,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr =
            env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

        let max_trajectory_points = env_usize("MAX_TRAJECTORY_POINTS", 10_000);

        Ok(Self {
            bind_addr,
            max_trajectory_points,
        })
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_usize_falls_back_to_default() {
        assert_eq!(env_usize("IMPACT_CALC_UNSET_TEST_KEY", 42), 42);
    }
}
