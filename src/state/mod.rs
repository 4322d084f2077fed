//! State - Global Stores
//!
//! The two stores every view observes.

pub mod i18n_state;
pub mod theme_state;
