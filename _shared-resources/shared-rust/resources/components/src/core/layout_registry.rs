// Tab Button Layout Registry
// Tracks the bounding rectangle of every tab button, indexed by the tab's position
//
// Usage:
//   let mut layout = TabButtonLayout::new(4);
//   layout.record(1, TabBounds::new(12, 0, 10, 4));
//   if let Some(index) = layout.locate(point) {
//       // pointer is over button `index`
//   }

use super::geometry::{LocalPoint, TabBounds};
use tracing::trace;

/// Per-tab button frames in the tab bar's named coordinate space
/// Slots start out empty (zero-sized) so nothing can be hit before the first layout pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButtonLayout {
    frames: Vec<TabBounds>,
}

impl TabButtonLayout {
    /// Create a layout table with one empty slot per tab
    pub fn new(tab_count: usize) -> Self {
        Self {
            frames: vec![TabBounds::ZERO; tab_count],
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Record (overwrite) the frame of the button at `index`
    /// Returns true if the stored frame changed, false if unchanged or out of range
    pub fn record(&mut self, index: usize, frame: TabBounds) -> bool {
        match self.frames.get_mut(index) {
            Some(slot) if *slot != frame => {
                trace!(index, ?frame, "tab button frame changed");
                *slot = frame;
                true
            }
            _ => false,
        }
    }

    /// Get the recorded frame of the button at `index`
    pub fn get(&self, index: usize) -> Option<TabBounds> {
        self.frames.get(index).copied()
    }

    /// Index of the first recorded frame containing `point`, scanning in tab order
    /// Overlapping frames resolve to the earliest tab
    pub fn locate(&self, point: LocalPoint) -> Option<usize> {
        self.frames.iter().position(|frame| frame.contains(point))
    }

    /// Iterate over (index, frame) pairs in tab order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &TabBounds)> {
        self.frames.iter().enumerate()
    }
}
