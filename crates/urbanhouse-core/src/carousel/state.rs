//! The carousel index state machine.

use std::ops::Range;

use serde::Serialize;

use crate::carousel::gesture::{GestureSession, Swipe, DEFAULT_SWIPE_THRESHOLD};
use crate::carousel::viewport::Breakpoints;
use crate::event::CarouselCommand;

/// State of one carousel instance.
///
/// Immutable: every transition consumes `self` and returns the next state,
/// so the owner decides when to publish it. The start index always satisfies
/// `0 <= current_index <= max_index()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    item_count: usize,
    items_per_view: usize,
    current_index: usize,
    paused: bool,
    gesture: Option<GestureSession>,
    breakpoints: Breakpoints,
    swipe_threshold: f64,
}

impl Carousel {
    /// Creates a carousel over `item_count` items showing `items_per_view` at once.
    ///
    /// `items_per_view` is raised to at least `1`.
    pub fn new(item_count: usize, items_per_view: usize) -> Self {
        Self {
            item_count,
            items_per_view: items_per_view.max(1),
            current_index: 0,
            paused: false,
            gesture: None,
            breakpoints: Breakpoints::default(),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }

    /// Creates a carousel laid out for a viewport `width` pixels wide.
    pub fn for_width(item_count: usize, width: u32, breakpoints: Breakpoints) -> Self {
        Self::new(item_count, breakpoints.classify(width)).with_breakpoints(breakpoints)
    }

    /// Breakpoints used by later [`Carousel::resize`] calls.
    #[must_use]
    pub fn with_breakpoints(self, breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            ..self
        }
    }

    #[must_use]
    pub fn with_swipe_threshold(self, swipe_threshold: f64) -> Self {
        Self {
            swipe_threshold,
            ..self
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns `true` while a touch gesture is in progress.
    pub fn is_touching(&self) -> bool {
        self.gesture.is_some()
    }

    /// Largest valid start index.
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.items_per_view)
    }

    /// Whether prev/next controls and indicators should be offered.
    ///
    /// `false` when every item already fits in the viewport.
    pub fn can_navigate(&self) -> bool {
        self.item_count > self.items_per_view
    }

    /// Item indices currently in the viewport.
    pub fn visible(&self) -> Range<usize> {
        let end = (self.current_index + self.items_per_view).min(self.item_count);
        self.current_index.min(end)..end
    }

    /// Advances one step, wrapping from the last start index to `0`.
    #[must_use]
    pub fn next(self) -> Self {
        if !self.can_navigate() {
            return self;
        }
        let current_index = if self.current_index >= self.max_index() {
            0
        } else {
            self.current_index + 1
        };
        Self {
            current_index,
            ..self
        }
    }

    /// Retreats one step, wrapping from `0` to the last start index.
    #[must_use]
    pub fn prev(self) -> Self {
        if !self.can_navigate() {
            return self;
        }
        let current_index = if self.current_index == 0 {
            self.max_index()
        } else {
            self.current_index - 1
        };
        Self {
            current_index,
            ..self
        }
    }

    /// Jumps to `index`. Indices past [`Carousel::max_index`] are ignored.
    #[must_use]
    pub fn go_to(self, index: usize) -> Self {
        if index > self.max_index() {
            return self;
        }
        Self {
            current_index: index,
            ..self
        }
    }

    /// Autoplay tick: advances unless paused.
    #[must_use]
    pub fn tick(self) -> Self {
        if self.paused {
            return self;
        }
        self.next()
    }

    #[must_use]
    pub fn pointer_enter(self) -> Self {
        Self {
            paused: true,
            ..self
        }
    }

    #[must_use]
    pub fn pointer_leave(self) -> Self {
        Self {
            paused: false,
            ..self
        }
    }

    /// Begins a gesture at `x` and pauses autoplay.
    #[must_use]
    pub fn touch_start(self, x: f64) -> Self {
        Self {
            gesture: Some(GestureSession::start(x)),
            paused: true,
            ..self
        }
    }

    /// Tracks the finger. Ignored when no gesture is in progress.
    #[must_use]
    pub fn touch_move(self, x: f64) -> Self {
        Self {
            gesture: self.gesture.map(|g| g.moved_to(x)),
            ..self
        }
    }

    /// Ends the gesture, navigating if it was a swipe, and resumes autoplay.
    #[must_use]
    pub fn touch_end(self) -> Self {
        let swipe = self.gesture.and_then(|g| g.finish(self.swipe_threshold));
        let released = Self {
            gesture: None,
            paused: false,
            ..self
        };
        match swipe {
            Some(Swipe::Left) => released.next(),
            Some(Swipe::Right) => released.prev(),
            None => released,
        }
    }

    /// Discards the gesture without navigating and resumes autoplay.
    #[must_use]
    pub fn touch_cancel(self) -> Self {
        Self {
            gesture: None,
            paused: false,
            ..self
        }
    }

    /// Re-lays the carousel out for a new viewport width.
    ///
    /// The start index is clamped immediately so it never points past the
    /// new [`Carousel::max_index`].
    #[must_use]
    pub fn resize(self, width: u32) -> Self {
        let items_per_view = self.breakpoints.classify(width);
        let max_index = self.item_count.saturating_sub(items_per_view);
        Self {
            items_per_view,
            current_index: self.current_index.min(max_index),
            ..self
        }
    }

    /// Dispatches a [`CarouselCommand`] to the matching transition.
    #[must_use]
    pub fn apply(self, command: CarouselCommand) -> Self {
        match command {
            CarouselCommand::Next => self.next(),
            CarouselCommand::Prev => self.prev(),
            CarouselCommand::GoTo { index } => self.go_to(index),
            CarouselCommand::Tick => self.tick(),
            CarouselCommand::PointerEnter => self.pointer_enter(),
            CarouselCommand::PointerLeave => self.pointer_leave(),
            CarouselCommand::TouchStart { x } => self.touch_start(x),
            CarouselCommand::TouchMove { x } => self.touch_move(x),
            CarouselCommand::TouchEnd => self.touch_end(),
            CarouselCommand::TouchCancel => self.touch_cancel(),
            CarouselCommand::Resize { width } => self.resize(width),
        }
    }

    /// Snapshot for renderers.
    pub fn view(&self) -> CarouselView {
        let visible = self.visible();
        CarouselView {
            current_index: self.current_index,
            max_index: self.max_index(),
            items_per_view: self.items_per_view,
            item_count: self.item_count,
            visible_start: visible.start,
            visible_end: visible.end,
            page_count: if self.can_navigate() {
                self.max_index() + 1
            } else {
                0
            },
            show_controls: self.can_navigate(),
            paused: self.paused,
        }
    }
}

/// What a renderer needs to draw the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselView {
    pub current_index: usize,
    pub max_index: usize,
    pub items_per_view: usize,
    pub item_count: usize,
    /// First visible item (inclusive).
    pub visible_start: usize,
    /// Last visible item (exclusive).
    pub visible_end: usize,
    /// Number of indicator dots; `0` when navigation is suppressed.
    pub page_count: usize,
    pub show_controls: bool,
    pub paused: bool,
}

impl CarouselView {
    pub fn visible(&self) -> Range<usize> {
        self.visible_start..self.visible_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(item_count: usize, items_per_view: usize, index: usize) -> Carousel {
        Carousel::new(item_count, items_per_view).go_to(index)
    }

    #[test]
    fn max_index_for_seven_by_three() {
        assert_eq!(Carousel::new(7, 3).max_index(), 4);
    }

    #[test]
    fn next_wraps_from_max_to_zero() {
        let c = at(7, 3, 4);
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.next().current_index(), 0);
    }

    #[test]
    fn prev_wraps_from_zero_to_max() {
        assert_eq!(Carousel::new(7, 3).prev().current_index(), 4);
    }

    #[test]
    fn next_and_prev_step_by_one() {
        let c = at(7, 3, 2);
        assert_eq!(c.clone().next().current_index(), 3);
        assert_eq!(c.prev().current_index(), 1);
    }

    #[test]
    fn everything_fits_suppresses_navigation() {
        let c = Carousel::new(3, 3);
        assert_eq!(c.max_index(), 0);
        assert!(!c.can_navigate());
        assert_eq!(c.clone().next(), c);
        assert_eq!(c.clone().prev(), c);

        let view = c.view();
        assert!(!view.show_controls);
        assert_eq!(view.page_count, 0);
    }

    #[test]
    fn fewer_items_than_view() {
        let c = Carousel::new(2, 3);
        assert_eq!(c.max_index(), 0);
        assert_eq!(c.visible(), 0..2);
    }

    #[test]
    fn empty_carousel() {
        let c = Carousel::new(0, 1);
        assert_eq!(c.max_index(), 0);
        assert_eq!(c.visible(), 0..0);
        assert_eq!(c.clone().tick(), c);
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let c = at(7, 3, 2);
        assert_eq!(c.clone().go_to(5), c);
        assert_eq!(c.clone().go_to(4).current_index(), 4);
    }

    #[test]
    fn items_per_view_is_at_least_one() {
        assert_eq!(Carousel::new(4, 0).items_per_view(), 1);
    }

    #[test]
    fn ticks_are_swallowed_while_paused() {
        let c = Carousel::new(7, 3).pointer_enter();
        let c = c.tick().tick().tick();
        assert_eq!(c.current_index(), 0);

        let c = c.pointer_leave().tick();
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn swipe_within_threshold_never_moves() {
        for distance in [-50.0, -20.0, 0.0, 30.0, 50.0] {
            let c = at(7, 3, 2)
                .touch_start(200.0)
                .touch_move(200.0 - distance)
                .touch_end();
            assert_eq!(c.current_index(), 2, "distance {distance}");
        }
    }

    #[test]
    fn swipe_beyond_threshold_moves_one_step() {
        let left = at(7, 3, 2).touch_start(300.0).touch_move(100.0).touch_end();
        assert_eq!(left.current_index(), 3);

        let right = at(7, 3, 2).touch_start(100.0).touch_move(151.0).touch_end();
        assert_eq!(right.current_index(), 1);
    }

    #[test]
    fn touch_pauses_until_end() {
        let c = Carousel::new(7, 3).touch_start(10.0);
        assert!(c.is_paused());
        assert!(c.is_touching());
        assert_eq!(c.clone().tick().current_index(), 0);

        let c = c.touch_end();
        assert!(!c.is_paused());
        assert!(!c.is_touching());
    }

    #[test]
    fn touch_cancel_resumes_without_moving() {
        let c = at(7, 3, 1)
            .touch_start(300.0)
            .touch_move(0.0)
            .touch_cancel();
        assert_eq!(c.current_index(), 1);
        assert!(!c.is_paused());
    }

    #[test]
    fn touch_move_without_start_is_ignored() {
        let c = Carousel::new(7, 3).touch_move(10.0);
        assert!(!c.is_touching());
        assert_eq!(c.touch_end().current_index(), 0);
    }

    #[test]
    fn swipe_uses_configured_threshold() {
        let c = Carousel::new(7, 3)
            .with_swipe_threshold(100.0)
            .touch_start(200.0)
            .touch_move(120.0)
            .touch_end();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn resize_reclassifies_and_clamps() {
        let c = Carousel::for_width(7, 320, Breakpoints::default()).go_to(6);
        assert_eq!(c.items_per_view(), 1);
        assert_eq!(c.current_index(), 6);

        let c = c.resize(1280);
        assert_eq!(c.items_per_view(), 3);
        assert_eq!(c.max_index(), 4);
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn resize_keeps_index_when_in_range() {
        let c = Carousel::for_width(7, 1280, Breakpoints::default())
            .go_to(2)
            .resize(800);
        assert_eq!(c.items_per_view(), 2);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn apply_dispatches_commands() {
        let c = Carousel::new(7, 3)
            .apply(CarouselCommand::Next)
            .apply(CarouselCommand::Next)
            .apply(CarouselCommand::Prev)
            .apply(CarouselCommand::GoTo { index: 3 })
            .apply(CarouselCommand::PointerEnter)
            .apply(CarouselCommand::Tick);
        assert_eq!(c.current_index(), 3);
        assert!(c.is_paused());

        let c = c
            .apply(CarouselCommand::PointerLeave)
            .apply(CarouselCommand::TouchStart { x: 0.0 })
            .apply(CarouselCommand::TouchMove { x: 80.0 })
            .apply(CarouselCommand::TouchEnd);
        assert_eq!(c.current_index(), 2);

        let c = c.apply(CarouselCommand::Resize { width: 500 });
        assert_eq!(c.items_per_view(), 1);
    }

    #[test]
    fn view_reports_visible_window() {
        let view = at(7, 3, 2).pointer_enter().view();
        assert_eq!(view.visible(), 2..5);
        assert_eq!(view.page_count, 5);
        assert!(view.show_controls);
        assert!(view.paused);
    }

    #[test]
    fn index_invariant_holds_under_mixed_commands() {
        let commands = [
            CarouselCommand::Resize { width: 320 },
            CarouselCommand::GoTo { index: 6 },
            CarouselCommand::Resize { width: 2000 },
            CarouselCommand::Next,
            CarouselCommand::Resize { width: 700 },
            CarouselCommand::Prev,
            CarouselCommand::Prev,
            CarouselCommand::Tick,
            CarouselCommand::GoTo { index: 99 },
        ];
        let mut c = Carousel::new(7, 3);
        for cmd in commands {
            c = c.apply(cmd);
            assert!(c.current_index() <= c.max_index(), "after {cmd:?}");
        }
    }
}
