//! Contact Controller
//!
//! Owns the timer that clears the submitting flag.

use std::time::Duration;

use gpui::{Context, Task};

use crate::constants::SUBMIT_RESET_DELAY_MS;
use crate::features::contact::page::ContactSection;

/// Contact section controller
#[derive(Default)]
pub struct ContactController {
    /// Pending reset, cancelled when dropped
    reset: Option<Task<()>>,
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the section's submitting flag after the reset delay
    pub fn schedule_reset(&mut self, cx: &mut Context<ContactSection>) {
        let delay = Duration::from_millis(SUBMIT_RESET_DELAY_MS);

        self.reset = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(delay).await;

            let result = this.update(cx, |section, cx| {
                section.finish_submit(cx);
            });
            if result.is_err() {
                tracing::debug!("Contact section released before submit reset");
            }
        }));
    }
}
