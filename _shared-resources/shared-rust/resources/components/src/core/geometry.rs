// Geometry primitives for hit testing
// Rectangles and points expressed in a named coordinate space rather than screen cells
//
// Usage:
//   let mut space = CoordinateSpace::new("TABBAR");
//   space.set_origin(bar_area.x, bar_area.y);
//   let point = space.to_local(mouse.column, mouse.row);
//   if bounds.contains(point) { ... }

use ratatui::layout::Rect;

/// A point in a named coordinate space
/// Signed so that pointer positions left of or above the space origin stay representable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocalPoint {
    pub x: i32,
    pub y: i32,
}

impl LocalPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Bounding box of a tab button (or the highlight behind it) in a named coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl TabBounds {
    pub const ZERO: TabBounds = TabBounds { x: 0, y: 0, width: 0, height: 0 };

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is within these bounds (right and bottom edges exclusive)
    pub fn contains(&self, point: LocalPoint) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Horizontal center, rounded towards the left cell
    pub fn center_x(&self) -> i32 {
        self.x + (self.width - 1).max(0) / 2
    }

    /// Linear interpolation towards `to`, `t` in 0.0..=1.0, rounded to whole cells
    pub fn lerp(&self, to: &TabBounds, t: f32) -> TabBounds {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: i32, b: i32| -> i32 { a + ((b - a) as f32 * t).round() as i32 };
        TabBounds {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            width: mix(self.width, to.width),
            height: mix(self.height, to.height),
        }
    }

    /// Build local bounds from a screen rect, given the origin of the coordinate space
    pub fn from_screen(rect: Rect, origin: (u16, u16)) -> Self {
        Self {
            x: rect.x as i32 - origin.0 as i32,
            y: rect.y as i32 - origin.1 as i32,
            width: rect.width as i32,
            height: rect.height as i32,
        }
    }

    /// Map back onto the screen, clipped to `clip`
    /// Returns None when nothing of the bounds is visible
    pub fn to_screen(&self, origin: (u16, u16), clip: Rect) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        let left = (origin.0 as i32 + self.x).max(clip.x as i32);
        let top = (origin.1 as i32 + self.y).max(clip.y as i32);
        let right = (origin.0 as i32 + self.x + self.width).min(clip.right() as i32);
        let bottom = (origin.1 as i32 + self.y + self.height).min(clip.bottom() as i32);
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect {
            x: left as u16,
            y: top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }
}

/// A named reference frame shared by sibling views
/// Button frames and pointer locations are both converted into it so they are directly comparable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateSpace {
    name: String,
    origin: (u16, u16),
}

impl CoordinateSpace {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            origin: (0, 0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Screen cell that maps to (0, 0) in this space
    pub fn origin(&self) -> (u16, u16) {
        self.origin
    }

    pub fn set_origin(&mut self, x: u16, y: u16) {
        self.origin = (x, y);
    }

    /// Convert a screen cell (e.g. mouse column/row) into this space
    pub fn to_local(&self, column: u16, row: u16) -> LocalPoint {
        LocalPoint {
            x: column as i32 - self.origin.0 as i32,
            y: row as i32 - self.origin.1 as i32,
        }
    }

    /// Measure a screen rect in this space
    pub fn frame_of(&self, rect: Rect) -> TabBounds {
        TabBounds::from_screen(rect, self.origin)
    }
}
