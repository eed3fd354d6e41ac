//! Frames for the count-up reveal of a KPI value.

use std::time::Duration;

pub const COUNTER_STEPS: u32 = 30;
pub const FRAME_INTERVAL: Duration = Duration::from_millis(15);

/// Values shown while counting up from zero to `target`.
///
/// Intermediate frames are truncated toward zero; the last frame is `target`
/// itself so the counter always settles on the exact value.
pub fn counter_frames(target: f64, steps: u32) -> Vec<f64> {
    if steps == 0 {
        return vec![target];
    }
    let mut frames: Vec<f64> = (0..=steps)
        .map(|i| (target * f64::from(i) / f64::from(steps)).trunc())
        .collect();
    if let Some(last) = frames.last_mut() {
        *last = target;
    }
    frames
}
