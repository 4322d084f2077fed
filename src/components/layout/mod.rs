//! Layout Components
//!
//! The chrome around the page sections.

pub mod footer;
pub mod mobile_menu;
pub mod navbar;
pub mod section;
