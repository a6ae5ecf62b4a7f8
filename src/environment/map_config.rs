use crate::environment::ExtendableMap;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse map description")]
    Parse(#[from] toml::de::Error),
    #[error("link refers to unknown location {0}")]
    UnknownLocation(String),
    #[error("link from {from} to {to} has invalid distance {distance}")]
    InvalidDistance { from: String, to: String, distance: f64 },
    #[error("location {0} has no position")]
    MissingPosition(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LocationConfig {
    pub name: String,
    #[serde(default)]
    pub position: Option<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LinkConfig {
    pub from: String,
    pub to: String,
    pub distance: f64,
    /// Links are two-way unless marked otherwise.
    #[serde(default)]
    pub one_way: bool,
}

/// A map description file:
///
/// ```toml
/// [[locations]]
/// name = "A"
/// position = [0.0, 0.0]
///
/// [[locations]]
/// name = "B"
///
/// [[links]]
/// from = "A"
/// to = "B"
/// distance = 3.0
/// one-way = true
/// ```
///
/// Every location a link mentions must be declared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MapConfig {
    #[serde(default)]
    pub locations: Vec<LocationConfig>,
    #[serde(default)]
    pub links: Vec<LinkConfig>,
}

impl MapConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, MapError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, MapError> {
        let text = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn build(&self) -> Result<ExtendableMap, MapError> {
        let mut map = ExtendableMap::new();
        for location in &self.locations {
            map.add_location(&location.name);
            if let Some((x, y)) = location.position {
                map.set_position(&location.name, x, y);
            }
        }
        for link in &self.links {
            for endpoint in [&link.from, &link.to] {
                if !map.contains(endpoint) {
                    return Err(MapError::UnknownLocation(endpoint.clone()));
                }
            }
            if !(link.distance.is_finite() && link.distance >= 0.) {
                return Err(MapError::InvalidDistance {
                    from: link.from.clone(),
                    to: link.to.clone(),
                    distance: link.distance,
                });
            }
            if link.one_way {
                map.add_unidirectional_link(&link.from, &link.to, link.distance);
            } else {
                map.add_bidirectional_link(&link.from, &link.to, link.distance);
            }
        }
        Ok(map)
    }
}
