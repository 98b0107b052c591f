//! Responsive breakpoints mapping viewport width to cards per view.

use serde::{Deserialize, Serialize};

/// Width thresholds (in CSS pixels) for the carousel layout.
///
/// Below `medium` one card is shown, from `medium` up to (not including)
/// `large` two cards, and three from `large` upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    #[serde(default = "default_medium")]
    pub medium: u32,
    #[serde(default = "default_large")]
    pub large: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium: default_medium(),
            large: default_large(),
        }
    }
}

impl Breakpoints {
    /// Number of cards visible at `width`.
    pub fn classify(&self, width: u32) -> usize {
        if width >= self.large {
            3
        } else if width >= self.medium {
            2
        } else {
            1
        }
    }
}

/// Classifies `width` with the default breakpoints (640 / 1024).
pub fn classify(width: u32) -> usize {
    Breakpoints::default().classify(width)
}

fn default_medium() -> u32 {
    640
}

fn default_large() -> u32 {
    1024
}
