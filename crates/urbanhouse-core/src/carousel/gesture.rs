//! Touch gesture tracking.

/// Minimum horizontal displacement for a touch gesture to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Direction of a recognised swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right-to-left: show the next cards.
    Left,
    /// Finger moved left-to-right: show the previous cards.
    Right,
}

/// One in-progress touch gesture.
///
/// Created on touch start, updated on every move and consumed by
/// [`GestureSession::finish`] on touch end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    start_x: f64,
    current_x: f64,
}

impl GestureSession {
    pub fn start(x: f64) -> Self {
        Self {
            start_x: x,
            current_x: x,
        }
    }

    /// Returns the session with the tracked coordinate moved to `x`.
    #[must_use]
    pub fn moved_to(self, x: f64) -> Self {
        Self {
            current_x: x,
            ..self
        }
    }

    /// Signed displacement `start - current`; positive means a leftward drag.
    pub fn distance(&self) -> f64 {
        self.start_x - self.current_x
    }

    /// Ends the gesture, classifying it against `threshold`.
    ///
    /// Displacements whose magnitude does not exceed `threshold` are taps or
    /// jitter and yield `None`.
    pub fn finish(self, threshold: f64) -> Option<Swipe> {
        let distance = self.distance();
        if distance > threshold {
            Some(Swipe::Left)
        } else if distance < -threshold {
            Some(Swipe::Right)
        } else {
            None
        }
    }
}
