//! Centralized constants used across the application.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Number of undoable commands kept when the config doesn't say otherwise
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Log filter used when neither `RUST_LOG` nor the config set one
pub const DEFAULT_LOG_FILTER: &str = "info,refboard=debug";
