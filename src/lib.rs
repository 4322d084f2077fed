//! Folio GUI Library
//!
//! A bilingual (Malay / English) personal portfolio for a creative director,
//! rendered as a single scrolling GPUI window with light and dark themes.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
