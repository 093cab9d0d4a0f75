//! Theme for Student Roster Studio.
//!
//! A single light palette plus the widget style functions and layout
//! constants used across the application. Style functions receive `&Theme`
//! and pull colors from Iced's extended palette:
//!
//! ```rust,ignore
//! use crate::theme::button_primary;
//!
//! // Use a pre-defined style function
//! button(text("Save")).style(button_primary)
//! ```

use iced::theme::Palette;
use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// SPACING
// =============================================================================

pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_LG: f32 = 24.0;

pub const BORDER_RADIUS_SM: f32 = 4.0;
pub const BORDER_RADIUS_LG: f32 = 8.0;
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

/// Modal dialog widths.
pub const MODAL_WIDTH_SM: f32 = 380.0;
pub const MODAL_WIDTH_MD: f32 = 520.0;

// =============================================================================
// COLORS
// =============================================================================

pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

pub const GRAY_100: Color = Color {
    r: 0.95,
    g: 0.95,
    b: 0.97,
    a: 1.0,
};

pub const GRAY_300: Color = Color {
    r: 0.82,
    g: 0.82,
    b: 0.86,
    a: 1.0,
};

pub const GRAY_500: Color = Color {
    r: 0.50,
    g: 0.50,
    b: 0.55,
    a: 1.0,
};

pub const GRAY_700: Color = Color {
    r: 0.30,
    g: 0.30,
    b: 0.35,
    a: 1.0,
};

pub const GRAY_900: Color = Color {
    r: 0.10,
    g: 0.10,
    b: 0.12,
    a: 1.0,
};

/// Accent blue.
pub const PRIMARY_500: Color = Color {
    r: 0.20,
    g: 0.45,
    b: 0.85,
    a: 1.0,
};

pub const ERROR: Color = Color {
    r: 0.85,
    g: 0.25,
    b: 0.25,
    a: 1.0,
};

/// Semi-transparent modal backdrop.
pub const BACKDROP: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.32,
};

const SHADOW: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.12,
};

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the application theme.
pub fn roster_theme() -> Theme {
    Theme::custom(
        "Roster Light".to_string(),
        Palette {
            background: Color::from_rgb(0.98, 0.98, 0.99), // GRAY_50
            text: GRAY_900,
            primary: PRIMARY_500,
            success: Color::from_rgb(0.20, 0.70, 0.40), // Green
            warning: Color::from_rgb(0.95, 0.65, 0.05), // Amber
            danger: ERROR,                              // Red
        },
    )
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: Some(palette.primary.base.color.into()),
            text_color: palette.primary.base.text,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: SHADOW,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(GRAY_300.into()),
            text_color: GRAY_500,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Secondary button style - alternative actions.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: Some(WHITE.into()),
            text_color: GRAY_700,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 1.0,
                color: GRAY_300,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(GRAY_100.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 1.0,
                color: GRAY_500,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Danger button style - destructive actions.
pub fn button_danger(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: Some(palette.danger.base.color.into()),
            text_color: palette.danger.base.text,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.danger.strong.color.into()),
            text_color: palette.danger.strong.text,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(GRAY_300.into()),
            text_color: GRAY_500,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Ghost button style - low-emphasis actions.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(GRAY_100.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: GRAY_700,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container with border and elevated background.
pub fn container_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: GRAY_300,
        },
        ..Default::default()
    }
}

/// Modal dialog surface.
pub fn container_modal(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: GRAY_300,
        },
        shadow: Shadow {
            color: Color {
                a: 0.25,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();

    let border_color = match status {
        text_input::Status::Focused { .. } => palette.primary.base.color,
        text_input::Status::Hovered => GRAY_500,
        _ => GRAY_300,
    };

    text_input::Style {
        background: WHITE.into(),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: border_color,
        },
        icon: GRAY_500,
        placeholder: GRAY_500,
        value: palette.background.base.text,
        selection: palette.primary.weak.color,
    }
}

/// Text input style for fields with a validation error.
pub fn text_input_error(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();

    text_input::Style {
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: palette.danger.base.color,
        },
        ..text_input_default(theme, status)
    }
}
