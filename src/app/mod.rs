//! Application Layer
//!
//! Contains app initialization, window management, global entities, and workspace.

pub mod actions;
pub mod application;
pub mod config;
pub mod entities;
pub mod logging;
pub mod navigation;
pub mod workspace;
