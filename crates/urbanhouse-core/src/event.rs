//! Commands flowing from a front end into the engines.
//!
//! The UI translates user input into [`FilterCommand`]s and
//! [`CarouselCommand`]s; the engines apply them as pure state transitions.
//! Keeping the inputs as plain data lets any frontend (the web socket relay,
//! tests, a future native client) drive the same logic.

use serde::Deserialize;

use crate::search::criteria::Bounds;

/// A change to the listings page filter.
///
/// Commands flow **UI → Core**. The core never creates commands itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCommand {
    /// Replace the free-text query.
    SetQuery(String),
    /// Select a listing type, or clear the selection with `None`.
    SetType(Option<String>),
    /// Select a location, or clear the selection with `None`.
    SetLocation(Option<String>),
    /// Replace the price range.
    SetPriceRange(Bounds<u64>),
    /// Replace the room-count range.
    SetRoomRange(Bounds<u32>),
    /// Reset every constraint.
    Clear,
}

/// An input to a carousel instance.
///
/// Deserializes from JSON tagged by `type`, e.g.
/// `{"type": "touchStart", "x": 120.0}` or `{"type": "goTo", "index": 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CarouselCommand {
    /// Manual "next" control.
    Next,
    /// Manual "previous" control.
    Prev,
    /// Indicator tap.
    GoTo { index: usize },
    /// Autoplay timer fired.
    Tick,
    /// Pointer started hovering the carousel.
    PointerEnter,
    /// Pointer left the carousel.
    PointerLeave,
    /// Finger down at horizontal coordinate `x`.
    TouchStart { x: f64 },
    /// Finger moved to horizontal coordinate `x`.
    TouchMove { x: f64 },
    /// Finger lifted.
    TouchEnd,
    /// Gesture cancelled by the platform.
    TouchCancel,
    /// Viewport width changed.
    Resize { width: u32 },
}
