//! Featured-listings carousel.
//!
//! [`state::Carousel`] is the pure index state machine; [`viewport`] and
//! [`gesture`] supply responsive layout and swipe recognition. The async
//! side lives in [`autoplay`] (the cancellable tick timer) and [`session`]
//! (the event loop that serializes commands and ticks for one carousel).

pub mod autoplay;
pub mod gesture;
pub mod session;
pub mod state;
pub mod viewport;
