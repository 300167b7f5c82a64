//! Base styles for navigator, scene and bar views
//!
//! Caller-supplied styles are layered on top of these.

use nav_core::Style;

/// Color tokens
pub mod color {
    /// Scene background
    pub const SCENE_BACKGROUND: &str = "#FFFFFF";
    /// Navigation bar background
    pub const BAR_BACKGROUND: &str = "#F9F9F9";
    /// Navigation bar hairline
    pub const BAR_BORDER: &str = "#B2B2B2";
    /// Bar title text
    pub const TITLE_TEXT: &str = "#000000";
    /// Bar buttons (text and icon tint)
    pub const BAR_BUTTON: &str = "#007AFF";
}

/// Size tokens
pub mod sizing {
    /// Navigation bar height, excluding the status bar
    pub const BAR_HEIGHT: f32 = 44.0;
    /// Status bar height
    pub const STATUS_BAR_HEIGHT: f32 = 20.0;
    /// Bar hairline width
    pub const BAR_BORDER_WIDTH: f32 = 0.5;
    /// Bar title font size
    pub const TITLE_FONT_SIZE: f32 = 17.0;
    /// Bar button font size
    pub const BUTTON_FONT_SIZE: f32 = 17.0;
    /// Bar button icon size
    pub const BUTTON_ICON_SIZE: f32 = 22.0;
    /// Horizontal padding of bar buttons
    pub const BUTTON_PADDING: f32 = 10.0;
}

/// Navigator container
pub fn navigator() -> Style {
    Style {
        flex: Some(1.0),
        ..Default::default()
    }
}

/// Scene container; leaves room for the navigation bar
pub fn scene() -> Style {
    Style {
        flex: Some(1.0),
        padding_top: Some(sizing::STATUS_BAR_HEIGHT + sizing::BAR_HEIGHT),
        background_color: Some(color::SCENE_BACKGROUND.to_string()),
        ..Default::default()
    }
}

/// Navigation bar
pub fn bar() -> Style {
    Style {
        height: Some(sizing::STATUS_BAR_HEIGHT + sizing::BAR_HEIGHT),
        padding_top: Some(sizing::STATUS_BAR_HEIGHT),
        background_color: Some(color::BAR_BACKGROUND.to_string()),
        border_bottom_color: Some(color::BAR_BORDER.to_string()),
        border_bottom_width: Some(sizing::BAR_BORDER_WIDTH),
        ..Default::default()
    }
}

/// Bar title text
pub fn bar_title_text() -> Style {
    Style {
        color: Some(color::TITLE_TEXT.to_string()),
        font_size: Some(sizing::TITLE_FONT_SIZE),
        font_weight: Some("500".to_string()),
        letter_spacing: Some(0.5),
        ..Default::default()
    }
}

/// Bar button text
pub fn bar_button_text() -> Style {
    Style {
        color: Some(color::BAR_BUTTON.to_string()),
        font_size: Some(sizing::BUTTON_FONT_SIZE),
        padding_horizontal: Some(sizing::BUTTON_PADDING),
        ..Default::default()
    }
}

/// Bar button icon
pub fn bar_button_icon() -> Style {
    Style {
        tint_color: Some(color::BAR_BUTTON.to_string()),
        width: Some(sizing::BUTTON_ICON_SIZE),
        height: Some(sizing::BUTTON_ICON_SIZE),
        ..Default::default()
    }
}
