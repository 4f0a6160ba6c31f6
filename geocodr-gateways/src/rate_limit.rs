use std::{thread, time::Duration};

/// Blocks the current thread for the configured per-request delay.
pub(crate) fn wait(rate_limit: Duration) {
    if !rate_limit.is_zero() {
        thread::sleep(rate_limit);
    }
}
