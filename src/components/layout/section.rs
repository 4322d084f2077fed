//! Section Frame
//!
//! Full-width band with a centered, width-capped content column.

use gpui::{Div, Rgba, Styled, div, px};

use crate::constants::CONTENT_MAX_WIDTH;

/// Outer band of a page section
pub fn band(bg: Rgba, compact: bool) -> Div {
    div()
        .w_full()
        .flex()
        .justify_center()
        .bg(bg)
        .px(px(if compact { 24.0 } else { 48.0 }))
        .py(px(if compact { 64.0 } else { 96.0 }))
}

/// Content column inside a [`band`]
pub fn column() -> Div {
    div()
        .w_full()
        .max_w(px(CONTENT_MAX_WIDTH))
        .flex()
        .flex_col()
        .gap_12()
}
