//! Components - Reusable UI Components
//!
//! Pure UI components that read the stores but never own page content.

pub mod composite;
pub mod layout;
pub mod primitives;
