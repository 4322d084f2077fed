//! Service Layer
//!
//! Network plumbing behind the page. GPUI fetches every remote image through
//! the [`gpui::http_client::HttpClient`] installed on the application; this
//! layer provides one backed by reqwest.

mod http_client;

pub use http_client::*;
