//! Bridge configuration
//!
//! Style and visibility options accepted by the bridge. Callback hooks
//! (custom bar rendering, scene augmentation) are set on the builder in
//! [`crate::bridge`] since they cannot be deserialized.

use nav_core::Style;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::styles;

/// Bridge configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Show the navigation bar
    pub show_navigation_bar: bool,
    /// Override for the navigation bar style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_bar_style: Option<Style>,
    /// Override for the bar title text style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_style: Option<Style>,
    /// Override for the bar button text style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_button_text_style: Option<Style>,
    /// Override for the bar button icon style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_button_icon_style: Option<Style>,
    /// Override for the scene container style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_style: Option<Style>,
    /// Override for the navigator container style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            show_navigation_bar: true,
            navigation_bar_style: None,
            title_style: None,
            bar_button_text_style: None,
            bar_button_icon_style: None,
            scene_style: None,
            style: None,
        }
    }
}

impl BridgeConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Text and icon styles handed to the route renderer
    ///
    /// These are resolved once, when the bridge is built. Later
    /// configuration updates do not reach the renderer.
    pub fn renderer_styles(&self) -> RendererStyles {
        RendererStyles {
            title_style: styles::bar_title_text().merge_opt(self.title_style.as_ref()),
            bar_button_text_style: styles::bar_button_text()
                .merge_opt(self.bar_button_text_style.as_ref()),
            bar_button_icon_style: styles::bar_button_icon()
                .merge_opt(self.bar_button_icon_style.as_ref()),
        }
    }
}

/// Resolved styles captured at construction time
#[derive(Debug, Clone, PartialEq)]
pub struct RendererStyles {
    /// Bar title text
    pub title_style: Style,
    /// Bar button text
    pub bar_button_text_style: Style,
    /// Bar button icon
    pub bar_button_icon_style: Style,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BridgeConfig::default();
        assert!(config.show_navigation_bar);
        assert!(config.navigation_bar_style.is_none());
    }

    #[test]
    fn test_from_json_partial() {
        let config = BridgeConfig::from_json(
            r##"{ "showNavigationBar": false, "titleStyle": { "color": "#FF0000" } }"##,
        )
        .unwrap();
        assert!(!config.show_navigation_bar);

        let styles = config.renderer_styles();
        assert_eq!(styles.title_style.color.as_deref(), Some("#FF0000"));
        assert_eq!(styles.title_style.font_size, Some(17.0));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(BridgeConfig::from_json("{ not json").is_err());
    }
}
