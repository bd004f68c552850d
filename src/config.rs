//! Crate-wide routing defaults.
//!
//! Hosts usually set these once per editor instance and stamp them into
//! every [`RoutingParameters`](crate::routing::RoutingParameters) they
//! build. A config file is optional; absent values keep their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Straight-out run from a port before the first turn.
    pub extension: f64,
    /// Gap kept between routed paths and node bodies.
    pub obstacle_clearance: f64,
    /// Radius for rounding perpendicular corners; zero keeps them sharp.
    pub corner_radius: f64,
    /// Padding around path geometry for pointer hit-testing.
    pub hit_tolerance: f64,
    /// Control-point weight for the curved connection style.
    pub curvature: f64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            extension: 10.0,
            obstacle_clearance: 20.0,
            corner_radius: 8.0,
            hit_tolerance: 8.0,
            curvature: 0.5,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RouterConfigFile {
    extension: Option<f64>,
    #[serde(rename = "obstacleClearance")]
    obstacle_clearance: Option<f64>,
    #[serde(rename = "cornerRadius")]
    corner_radius: Option<f64>,
    #[serde(rename = "hitTolerance")]
    hit_tolerance: Option<f64>,
    curvature: Option<f64>,
}

/// Load routing defaults, overlaying any values found at `path` on top of
/// the built-in defaults. Accepts strict JSON and falls back to JSON5 so
/// hand-edited config files may carry comments and trailing commas.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<RouterConfig> {
    let mut config = RouterConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: RouterConfigFile = match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(_) => json5::from_str(&contents)?,
    };

    if let Some(v) = parsed.extension {
        config.extension = v;
    }
    if let Some(v) = parsed.obstacle_clearance {
        config.obstacle_clearance = v;
    }
    if let Some(v) = parsed.corner_radius {
        config.corner_radius = v;
    }
    if let Some(v) = parsed.hit_tolerance {
        config.hit_tolerance = v;
    }
    if let Some(v) = parsed.curvature {
        config.curvature = v;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn partial_file_overlays_defaults() {
        let dir = std::env::temp_dir();
        let path = dir.join("wireroute_config_partial.json");
        std::fs::write(&path, r#"{"cornerRadius": 12.5}"#).unwrap();
        let config = load_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.corner_radius, 12.5);
        assert_eq!(config.extension, RouterConfig::default().extension);
    }

    #[test]
    fn json5_with_comments_parses() {
        let dir = std::env::temp_dir();
        let path = dir.join("wireroute_config_json5.json");
        std::fs::write(
            &path,
            "{\n  // wider clearance for dense graphs\n  obstacleClearance: 32,\n}\n",
        )
        .unwrap();
        let config = load_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.obstacle_clearance, 32.0);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("wireroute_config_missing.json");
        assert!(load_config(Some(&path)).is_err());
    }
}
