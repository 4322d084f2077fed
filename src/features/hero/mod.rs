//! Hero Section

pub mod page;
