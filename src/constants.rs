//! UI Constants
//!
//! Centralized layout and timing constants shared across the page.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Below this viewport width the navbar collapses into the menu button
pub const COMPACT_BREAKPOINT: f32 = 1024.0;

/// Navbar height
pub const NAVBAR_HEIGHT: f32 = 72.0;

/// Scroll distance after which the navbar switches to its solid style
pub const SCROLLED_THRESHOLD: f32 = 50.0;

/// Maximum width of section content
pub const CONTENT_MAX_WIDTH: f32 = 1200.0;

/// How long the contact form stays in its "sending" state
pub const SUBMIT_RESET_DELAY_MS: u64 = 2000;

/// Number of logos shown by the compact logo strip
pub const COMPACT_LOGO_COUNT: usize = 4;
