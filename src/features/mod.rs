//! Features - Page Sections
//!
//! Each section is a view entity that observes both stores and renders its
//! static content table.

pub mod about;
pub mod contact;
pub mod hero;
pub mod portfolio;
pub mod services;
pub mod testimonials;
