//! Services Section

pub mod page;
