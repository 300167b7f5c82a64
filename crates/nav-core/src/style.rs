//! Mergeable style properties
//!
//! Styles are plain property bags where every field is optional. Layering
//! works like a style array: later layers override the fields they set and
//! leave everything else alone.

use serde::{Deserialize, Serialize};

/// Hex color string (e.g. `#FFFFFF`)
pub type Color = String;

/// Style properties for navigator, scene and bar views
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Flex grow factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    /// Fixed height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Top padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f32>,
    /// Horizontal padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<f32>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Bottom border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_color: Option<Color>,
    /// Bottom border width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<f32>,
    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Icon tint color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint_color: Option<Color>,
    /// Font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Font weight (e.g. "500")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Letter spacing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    /// Icon or text width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Opacity (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

impl Style {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer `overrides` on top of this style
    pub fn merge(&self, overrides: &Style) -> Style {
        Style {
            flex: overrides.flex.or(self.flex),
            height: overrides.height.or(self.height),
            padding_top: overrides.padding_top.or(self.padding_top),
            padding_horizontal: overrides.padding_horizontal.or(self.padding_horizontal),
            background_color: overrides
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            border_bottom_color: overrides
                .border_bottom_color
                .clone()
                .or_else(|| self.border_bottom_color.clone()),
            border_bottom_width: overrides.border_bottom_width.or(self.border_bottom_width),
            color: overrides.color.clone().or_else(|| self.color.clone()),
            tint_color: overrides
                .tint_color
                .clone()
                .or_else(|| self.tint_color.clone()),
            font_size: overrides.font_size.or(self.font_size),
            font_weight: overrides
                .font_weight
                .clone()
                .or_else(|| self.font_weight.clone()),
            letter_spacing: overrides.letter_spacing.or(self.letter_spacing),
            width: overrides.width.or(self.width),
            opacity: overrides.opacity.or(self.opacity),
        }
    }

    /// Layer an optional override
    pub fn merge_opt(&self, overrides: Option<&Style>) -> Style {
        match overrides {
            Some(overrides) => self.merge(overrides),
            None => self.clone(),
        }
    }

    /// Check if no property is set
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}
