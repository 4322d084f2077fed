//! Testimonials Section

pub mod page;
