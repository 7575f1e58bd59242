use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use stp_algebra::config::DemoConfig;

/// Load a demo configuration from a JSON file.
pub fn load_demo_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DemoConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Config from `path` (or defaults), with an optional seed override, validated.
pub fn resolve_config<P: AsRef<Path>>(path: Option<P>, seed: Option<u64>) -> Result<DemoConfig> {
    let mut config = match path {
        Some(path) => load_demo_config(path)?,
        None => DemoConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    config.validate().context("Invalid demo configuration")?;
    Ok(config)
}

pub fn rng_from_config(config: &DemoConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
