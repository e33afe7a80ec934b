//! Per-button configuration.
//!
//! [`HostMarkup`] is what the host page declares on the original control;
//! [`SwipeButtonOptions`] is the validated configuration the widget runs with.

use std::fmt;
use swipe_button_foundation::{GestureConfig, DEFAULT_RELEASE_THRESHOLD, GOAL_DEBOUNCE_DELAY};
use web_time::Duration;

/// Raw attributes read from the host control.
///
/// Values are kept as the host reported them; empty strings mean "absent".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostMarkup {
    /// Target URL of the control.
    pub href: Option<String>,
    /// Text content of the control, shown on the track.
    pub label: String,
    /// `data-note`
    pub note: Option<String>,
    /// `data-class`
    pub extra_class: Option<String>,
    /// `data-threshold`
    pub threshold: Option<String>,
    /// `data-metrika-id`
    pub metrika_id: Option<String>,
    /// `data-metrika-event`
    pub metrika_event: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    InvalidThreshold { value: String },
    NegativeThreshold { value: String },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::InvalidThreshold { value } => {
                write!(f, "threshold {value:?} is not a number")
            }
            OptionsError::NegativeThreshold { value } => {
                write!(f, "threshold {value:?} must be a finite, non-negative distance")
            }
        }
    }
}

impl std::error::Error for OptionsError {}

#[derive(Clone, Debug, PartialEq)]
pub struct SwipeButtonOptions {
    /// Where a completed swipe navigates. Without it the goal action is a no-op.
    pub target_url: Option<String>,
    pub label: String,
    pub note: Option<String>,
    pub extra_class: Option<String>,
    /// Raw displacement at release that completes the swipe.
    pub release_threshold: f32,
    /// Analytics counter; reporting is off without it.
    pub metrika_id: Option<String>,
    /// Goal reported before the outbound link, if any.
    pub metrika_goal: Option<String>,
    /// Debounce window of the goal action.
    pub goal_delay: Duration,
}

impl Default for SwipeButtonOptions {
    fn default() -> Self {
        Self {
            target_url: None,
            label: String::new(),
            note: None,
            extra_class: None,
            release_threshold: DEFAULT_RELEASE_THRESHOLD,
            metrika_id: None,
            metrika_goal: None,
            goal_delay: GOAL_DEBOUNCE_DELAY,
        }
    }
}

impl SwipeButtonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target_url(mut self, url: impl Into<String>) -> Self {
        self.target_url = Some(url.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_extra_class(mut self, class: impl Into<String>) -> Self {
        self.extra_class = Some(class.into());
        self
    }

    pub fn with_release_threshold(mut self, threshold: f32) -> Self {
        self.release_threshold = threshold;
        self
    }

    pub fn with_metrika(mut self, counter_id: impl Into<String>, goal: Option<String>) -> Self {
        self.metrika_id = Some(counter_id.into());
        self.metrika_goal = goal;
        self
    }

    pub fn with_goal_delay(mut self, delay: Duration) -> Self {
        self.goal_delay = delay;
        self
    }

    /// Validates the host markup of one control.
    pub fn from_markup(markup: &HostMarkup) -> Result<Self, OptionsError> {
        Ok(Self {
            target_url: present(&markup.href),
            label: markup.label.trim().to_owned(),
            note: present(&markup.note),
            extra_class: present(&markup.extra_class),
            release_threshold: parse_threshold(markup.threshold.as_deref())?,
            metrika_id: present(&markup.metrika_id),
            metrika_goal: present(&markup.metrika_event),
            goal_delay: GOAL_DEBOUNCE_DELAY,
        })
    }

    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig::new(self.release_threshold)
    }
}

/// Parses a threshold attribute. Absent or blank values use the default.
pub fn parse_threshold(raw: Option<&str>) -> Result<f32, OptionsError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(DEFAULT_RELEASE_THRESHOLD);
    };
    let value: f32 = raw.parse().map_err(|_| OptionsError::InvalidThreshold {
        value: raw.to_owned(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(OptionsError::NegativeThreshold {
            value: raw.to_owned(),
        });
    }
    Ok(value)
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
