//! Scene transition configurations

use serde::{Deserialize, Serialize};

/// Transition used when a scene becomes the presented scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SceneConfig {
    /// Slide in from the right, pushing the previous scene
    #[default]
    PushFromRight,
    /// Float in from the right over the previous scene
    FloatFromRight,
    /// Float in from the left over the previous scene
    FloatFromLeft,
    /// Float up from the bottom (modal style)
    FloatFromBottom,
    /// Cross fade
    Fade,
    /// None (instant)
    None,
}

impl SceneConfig {
    /// Whether the transition is animated at all
    pub fn is_animated(&self) -> bool {
        !matches!(self, SceneConfig::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_push() {
        assert_eq!(SceneConfig::default(), SceneConfig::PushFromRight);
        assert!(SceneConfig::Fade.is_animated());
        assert!(!SceneConfig::None.is_animated());
    }

    #[test]
    fn test_config_names() {
        let parsed: SceneConfig = serde_json::from_str("\"float_from_bottom\"").unwrap();
        assert_eq!(parsed, SceneConfig::FloatFromBottom);
    }
}
