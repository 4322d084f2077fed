//! About Section

pub mod page;
