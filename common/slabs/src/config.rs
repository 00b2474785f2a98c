use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use crate::{error::SlabError, mode::PlacementMode};

#[derive(Resource, Clone, PartialEq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlabConfig {
    /// Width of the band along each edge of a face that places
    /// the slab toward that edge instead of flat against the face.
    /// Must be in the range [0.0, 0.5].
    pub edge_margin: f32,

    /// Two fractions closer than this are treated as equal
    /// and resolved by the tie-break rules.
    pub tie_epsilon: f32,

    /// How far a player can reach when refining outlines.
    pub reach: f32,

    /// Mode for players who never picked one.
    pub default_mode: PlacementMode,
}

impl SlabConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, SlabError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SlabError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SlabError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Read a config file, or use the default when it is missing or broken.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}. Falling back to the default slab config.");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SlabError> {
        if !(0.0..=0.5).contains(&self.edge_margin) {
            return Err(SlabError::InvalidConfig {
                field: "edge_margin",
                reason: format!("{} is outside of [0.0, 0.5]", self.edge_margin),
            });
        }

        if !(0.0..0.25).contains(&self.tie_epsilon) {
            return Err(SlabError::InvalidConfig {
                field: "tie_epsilon",
                reason: format!("{} is outside of [0.0, 0.25)", self.tie_epsilon),
            });
        }

        if !(self.reach > 0.0) {
            return Err(SlabError::InvalidConfig {
                field: "reach",
                reason: format!("{} is not positive", self.reach),
            });
        }

        Ok(())
    }

    /// Half-width of the center region of a face.
    pub fn center_extent(&self) -> f32 {
        0.5 - self.edge_margin
    }
}

impl Default for SlabConfig {
    fn default() -> Self {
        Self {
            edge_margin: 0.25,
            tie_epsilon: 1.0e-4,
            reach: 4.5,
            default_mode: PlacementMode::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SlabConfig;
    use crate::{error::SlabError, mode::PlacementMode};

    #[test]
    fn config_parses_partial_toml() {
        let config = SlabConfig::from_toml_str(
            r#"
            edge_margin = 0.3
            default_mode = "vanilla"
            "#,
        )
        .unwrap();
        assert_eq!(config.edge_margin, 0.3);
        assert_eq!(config.default_mode, PlacementMode::Vanilla);
        assert_eq!(config.reach, SlabConfig::default().reach);
    }

    #[test]
    fn config_empty_is_default() {
        assert_eq!(SlabConfig::from_toml_str("").unwrap(), SlabConfig::default());
    }

    #[test]
    fn config_rejects_bad_values() {
        assert!(matches!(
            SlabConfig::from_toml_str("edge_margin = 0.75"),
            Err(SlabError::InvalidConfig {
                field: "edge_margin",
                ..
            })
        ));
        assert!(matches!(
            SlabConfig::from_toml_str("reach = -1.0"),
            Err(SlabError::InvalidConfig { field: "reach", .. })
        ));
        assert!(matches!(
            SlabConfig::from_toml_str("unknown_field = 1"),
            Err(SlabError::Parse(_))
        ));
        assert!(matches!(
            SlabConfig::from_toml_str("default_mode = \"sideways\""),
            Err(SlabError::Parse(_))
        ));
    }

    #[test]
    fn config_missing_file() {
        let err = SlabConfig::load("/definitely/not/here/slabs.toml").unwrap_err();
        assert!(matches!(err, SlabError::Io { .. }));
        assert_eq!(
            SlabConfig::load_or_default("/definitely/not/here/slabs.toml"),
            SlabConfig::default()
        );
    }
}
