//! Tower configuration definition

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Live-tunable indexing parameters.
///
/// These may be adjusted from a dashboard while the mechanism runs;
/// the control layer refreshes them once per tick, so a change takes
/// effect without a rebuild.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TowerConfig {
    /// Duty cycle while indexing upward, in (0, 1]
    pub up_speed: f32,
    /// Duty cycle while indexing downward, in [-1, 0)
    pub down_speed: f32,
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            up_speed: 0.3,
            down_speed: -0.3,
        }
    }
}

impl TowerConfig {
    /// Clamp both speeds into their legal sign-correct ranges.
    ///
    /// Dashboard input is untrusted; a raise speed must never drive
    /// the tower down and neither speed may exceed full scale.
    pub fn validated(self) -> Self {
        Self {
            up_speed: self.up_speed.clamp(0.0, 1.0),
            down_speed: self.down_speed.clamp(-1.0, 0.0),
        }
    }
}

#[cfg(feature = "serde")]
impl TowerConfig {
    /// Upper bound for an encoded snapshot
    pub const MAX_SNAPSHOT_LEN: usize = 16;

    /// Encode a binary snapshot into `buf`, returning the used slice
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> postcard::Result<&'a mut [u8]> {
        postcard::to_slice(self, buf)
    }

    /// Decode a snapshot produced by [`to_bytes`](Self::to_bytes)
    pub fn from_bytes(bytes: &[u8]) -> postcard::Result<Self> {
        postcard::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TowerConfig::default();
        assert_eq!(config.up_speed, 0.3);
        assert_eq!(config.down_speed, -0.3);
    }

    #[test]
    fn test_validation_clamps_magnitude() {
        let config = TowerConfig {
            up_speed: 1.8,
            down_speed: -2.0,
        }
        .validated();

        assert_eq!(config.up_speed, 1.0);
        assert_eq!(config.down_speed, -1.0);
    }

    #[test]
    fn test_validation_fixes_signs() {
        let config = TowerConfig {
            up_speed: -0.4,
            down_speed: 0.4,
        }
        .validated();

        assert_eq!(config.up_speed, 0.0);
        assert_eq!(config.down_speed, 0.0);
    }

    #[test]
    fn test_defaults_pass_validation_unchanged() {
        let config = TowerConfig::default();
        assert_eq!(config.validated(), config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_snapshot_roundtrip() {
        let config = TowerConfig {
            up_speed: 0.45,
            down_speed: -0.25,
        };

        let mut buf = [0u8; TowerConfig::MAX_SNAPSHOT_LEN];
        let encoded = config.to_bytes(&mut buf).unwrap();
        let decoded = TowerConfig::from_bytes(encoded).unwrap();

        assert_eq!(decoded, config);
    }
}
