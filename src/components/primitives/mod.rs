//! Primitive Components
//!
//! Basic building blocks shared by the sections.

pub mod button;
