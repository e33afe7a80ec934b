//! Valid handle travel for the current layout.

use swipe_button_graphics::{EdgeInsets, Size};

/// Widths measured by the host view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackMetrics {
    pub track_width: f32,
    pub handle_width: f32,
    /// Padding on one horizontal side of the track; applied twice.
    pub horizontal_padding: f32,
}

impl TrackMetrics {
    pub fn new(track_width: f32, handle_width: f32, horizontal_padding: f32) -> Self {
        Self {
            track_width,
            handle_width,
            horizontal_padding,
        }
    }

    /// Builds metrics from laid-out boxes. Uneven horizontal insets are
    /// averaged.
    pub fn from_layout(track: Size, handle: Size, padding: EdgeInsets) -> Self {
        Self::new(track.width, handle.width, padding.horizontal_sum() / 2.0)
    }

    /// `track - handle - 2 * padding`, never negative.
    pub fn max_travel(&self) -> f32 {
        let travel = self.track_width - self.handle_width - 2.0 * self.horizontal_padding;
        if travel.is_finite() && travel > 0.0 {
            travel
        } else {
            0.0
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TravelBounds {
    /// No measurement has arrived yet.
    #[default]
    Unmeasured,
    Measured { max_travel: f32 },
}

impl TravelBounds {
    pub fn from_metrics(metrics: TrackMetrics) -> Self {
        TravelBounds::Measured {
            max_travel: metrics.max_travel(),
        }
    }

    /// Measured bounds with an explicit travel; negative or NaN becomes 0.
    pub fn measured(max_travel: f32) -> Self {
        let max_travel = if max_travel.is_nan() {
            0.0
        } else {
            max_travel.max(0.0)
        };
        TravelBounds::Measured { max_travel }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, TravelBounds::Measured { .. })
    }

    pub fn max_travel(&self) -> f32 {
        match self {
            TravelBounds::Unmeasured => 0.0,
            TravelBounds::Measured { max_travel } => *max_travel,
        }
    }

    /// Clamps a raw displacement into `[0, max_travel]`.
    pub fn clamp(&self, raw: f32) -> f32 {
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, self.max_travel())
    }

    /// Whether a clamped offset sits at the end of the track.
    ///
    /// Unmeasured or zero-length tracks have no reachable end.
    pub fn is_goal(&self, offset: f32) -> bool {
        match self {
            TravelBounds::Unmeasured => false,
            TravelBounds::Measured { max_travel } => *max_travel > 0.0 && offset >= *max_travel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_travel_subtracts_handle_and_both_paddings() {
        let metrics = TrackMetrics::from_layout(
            Size::new(320.0, 56.0),
            Size::new(48.0, 48.0),
            EdgeInsets::symmetric(4.0, 4.0),
        );
        assert_eq!(metrics.max_travel(), 264.0);
    }

    #[test]
    fn uneven_padding_counts_both_sides() {
        let padding = EdgeInsets {
            left: 2.0,
            right: 6.0,
            ..EdgeInsets::default()
        };
        let metrics =
            TrackMetrics::from_layout(Size::new(320.0, 56.0), Size::new(48.0, 48.0), padding);
        assert_eq!(metrics.horizontal_padding, 4.0);
        assert_eq!(metrics.max_travel(), 264.0);
    }

    #[test]
    fn max_travel_never_negative() {
        assert_eq!(TrackMetrics::new(40.0, 48.0, 4.0).max_travel(), 0.0);
        assert_eq!(TrackMetrics::new(f32::NAN, 48.0, 4.0).max_travel(), 0.0);
    }

    #[test]
    fn unmeasured_bounds_clamp_to_zero_and_have_no_goal() {
        let bounds = TravelBounds::default();
        assert!(!bounds.is_measured());
        assert_eq!(bounds.clamp(500.0), 0.0);
        assert!(!bounds.is_goal(0.0));
    }

    #[test]
    fn measured_bounds_clamp_both_ends() {
        let bounds = TravelBounds::measured(100.0);
        assert_eq!(bounds.clamp(-30.0), 0.0);
        assert_eq!(bounds.clamp(64.5), 64.5);
        assert_eq!(bounds.clamp(1_000.0), 100.0);
        assert_eq!(bounds.clamp(f32::NAN), 0.0);
        assert!(bounds.is_goal(100.0));
        assert!(!bounds.is_goal(99.9));
    }

    #[test]
    fn negative_travel_is_clamped_to_zero() {
        let bounds = TravelBounds::measured(-12.0);
        assert_eq!(bounds.max_travel(), 0.0);
        assert!(!bounds.is_goal(0.0));
    }
}
