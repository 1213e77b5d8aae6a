use bevy::prelude::*;
use bevy::ui::{AlignItems, FlexDirection, JustifyContent, Node, UiRect, Val};

// Common styles for buttons
pub const NORMAL_BUTTON: Color = Color::srgb(0.3, 0.3, 0.3);
pub const HOVERED_BUTTON: Color = Color::srgb(0.4, 0.4, 0.4);
pub const PRESSED_BUTTON: Color = Color::srgb(0.2, 0.2, 0.2);

// Common text colors
pub const TEXT_COLOR: Color = Color::WHITE;

/// Default font size for the weather bar
pub const UI_FONT_SIZE: f32 = 18.0;

/// Row container pinned to the top-left corner.
pub fn weather_bar_style() -> Node {
    Node {
        position_type: PositionType::Absolute,
        top: Val::Px(10.0),
        left: Val::Px(10.0),
        flex_direction: FlexDirection::Row,
        align_items: AlignItems::Center,
        column_gap: Val::Px(8.0),
        ..Default::default()
    }
}

/// One weather selector button.
pub fn weather_button_style() -> Node {
    Node {
        width: Val::Px(90.0),
        height: Val::Px(36.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        margin: UiRect::all(Val::Px(2.0)),
        ..Default::default()
    }
}
