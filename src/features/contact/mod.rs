//! Contact Section

pub mod controller;
pub mod form;
pub mod page;
