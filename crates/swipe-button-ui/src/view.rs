//! Presentation capability of the widget.

use std::fmt;
use swipe_button_foundation::TrackMetrics;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// The control to replace is not attached to a document.
    Detached,
    /// The host rejected one of the mounting calls.
    Host(String),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::Detached => write!(f, "host control is not attached to a document"),
            MountError::Host(reason) => write!(f, "host failed to mount the view: {reason}"),
        }
    }
}

impl std::error::Error for MountError {}

/// The visual side of a swipe button: a track with a draggable handle.
///
/// The gesture logic only ever measures the track, positions the handle and
/// mounts or unmounts the whole view.
pub trait SwipeView {
    /// Current widths of track, handle and padding, or `None` while the
    /// layout cannot be measured.
    fn measure(&self) -> Option<TrackMetrics>;

    /// Positions the handle `offset` pixels from the start of the track.
    fn render_offset(&mut self, offset: f32);

    /// Inserts the view into the host and hides the original control. On
    /// error the host is left as it was.
    fn mount(&mut self) -> Result<(), MountError>;

    /// Removes the view and restores the original control.
    fn unmount(&mut self);
}
