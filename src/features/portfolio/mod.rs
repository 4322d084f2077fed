//! Portfolio Section

pub mod page;
