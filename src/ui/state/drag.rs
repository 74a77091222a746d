// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks a press-move-release gesture on the main preview and turns pointer
//! motion into whole-pixel offset deltas.

use iced::Point;

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pointer position already accounted for in the offset
    pub last_position: Option<Point>,
}

impl DragState {
    /// Starts a drag operation at `position`
    pub fn start(&mut self, position: Point) {
        self.is_dragging = true;
        self.last_position = Some(position);
    }

    /// Stops the drag operation; returns whether one was active
    pub fn stop(&mut self) -> bool {
        let was_dragging = self.is_dragging;
        self.is_dragging = false;
        self.last_position = None;
        was_dragging
    }

    /// Returns the whole-pixel movement since the last consumed position.
    ///
    /// Fractional motion is kept for the next call, so slow drags still add up.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, position: Point) -> Option<(i32, i32)> {
        if !self.is_dragging {
            return None;
        }
        let last = self.last_position?;

        let dx = (position.x - last.x).round();
        let dy = (position.y - last.y).round();
        self.last_position = Some(Point::new(last.x + dx, last.y + dy));

        if dx == 0.0 && dy == 0.0 {
            None
        } else {
            Some((dx as i32, dy as i32))
        }
    }
}
