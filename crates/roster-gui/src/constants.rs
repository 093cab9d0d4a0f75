//! Application-wide constants.

/// Window title.
pub const APP_TITLE: &str = "Student Roster Studio";

/// Default window size (width, height).
pub const WINDOW_SIZE: (f32, f32) = (1080.0, 720.0);

/// Minimum window size (width, height).
pub const MIN_WINDOW_SIZE: (f32, f32) = (800.0, 560.0);
