//! Composite Components
//!
//! Section-level building blocks shared by several pages.

pub mod logo_strip;
pub mod section_header;
