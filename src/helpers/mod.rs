//! Helper Utilities
//!
//! Common utilities used across the application.

mod carousel;
mod fs;

pub use carousel::*;
pub use fs::*;
