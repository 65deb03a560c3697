use log::Level;

/// Id of the element the app mounts into. Falls back to `<body>` when absent.
pub const MOUNT_POINT_ID: &str = "app";

/// Position in the catalog of the movie shown in the hero banner.
pub const FEATURED_MOVIE_INDEX: usize = 0;

/// Vertical scroll offset above which the navbar turns opaque.
pub const NAV_OPAQUE_THRESHOLD: f64 = 0.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running `trunk serve` locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
