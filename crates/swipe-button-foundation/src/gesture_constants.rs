//! Shared gesture constants for the swipe button.
//!
//! Values are in CSS pixels and milliseconds, the units the host reports.

use std::time::Duration;

/// Minimum raw displacement at release that completes a swipe.
///
/// Hosts may override it per button (the `data-threshold` attribute on the
/// web). Measured against the unclamped displacement, so it can exceed the
/// travel of the track.
pub const DEFAULT_RELEASE_THRESHOLD: f32 = 150.0;

/// Quiet period before the goal action runs.
///
/// Collapses a drag-to-end goal and a racing release into one action and
/// leaves the handle time to snap back before navigation starts.
pub const GOAL_DEBOUNCE_DELAY: Duration = Duration::from_millis(30);
