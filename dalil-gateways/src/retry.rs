use std::{thread, time::Duration};

use anyhow::Result;

/// Call `f` until it succeeds, at most `max_attempts` times.
///
/// The delay between two attempts starts with `base_delay` and
/// doubles after each failed attempt. The error of the last attempt
/// is returned if all attempts failed.
pub fn retry_with_backoff<T, F>(max_attempts: u32, base_delay: Duration, mut f: F) -> Result<T>
where
    F: FnMut(u32) -> Result<T>,
{
    let max_attempts = max_attempts.max(1);
    let mut delay = base_delay;
    let mut attempt = 1;
    loop {
        match f(attempt) {
            Ok(res) => return Ok(res),
            Err(err) if attempt >= max_attempts => return Err(err),
            Err(err) => {
                log::warn!("Attempt {attempt} of {max_attempts} failed: {err}");
                thread::sleep(delay);
                delay = delay.saturating_mul(2);
                attempt += 1;
            }
        }
    }
}
