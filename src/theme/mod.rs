//! Theme - Site Palettes and Typography

pub mod colors;
pub mod typography;
