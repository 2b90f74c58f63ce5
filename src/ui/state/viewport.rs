// SPDX-License-Identifier: MPL-2.0
//! Pan and zoom state for the expanded image overlay.
//!
//! The transform is pure bookkeeping: it owns the zoom factor, the pan
//! offset, and the grab-and-drag state, and the overlay widget renders
//! whatever it says. No pointer event mutates it except through the
//! methods here.

use iced::{Point, Vector};

pub use crate::config::defaults::{
    CONTROL_ZOOM_STEP, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_STEP,
};

/// Zoom factor, guaranteed to be within the valid range (0.5x–5x).
///
/// Construction clamps, so no usage site needs to re-check bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom(f32);

impl Zoom {
    /// Creates a zoom factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self(factor.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the factor sits at the lower bound.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM
    }

    /// Returns whether the factor sits at the upper bound.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM
    }

    /// Returns the factor moved by `step`, clamped.
    #[must_use]
    pub fn stepped(self, step: f32) -> Self {
        Self::new(self.0 + step)
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

/// Pan and zoom transform of the expanded image.
///
/// While a drag is active the grab offset is the cursor position minus the
/// pan at press time; every cursor move sets `pan = cursor - grab_offset`,
/// so the grabbed image point stays under the pointer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewportTransform {
    zoom: Zoom,
    pan: Vector,
    grab_offset: Option<Point>,
}

impl ViewportTransform {
    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom.value()
    }

    /// Current pan offset in screen pixels.
    #[must_use]
    pub fn pan(&self) -> Vector {
        self.pan
    }

    /// Whether a drag is currently active.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.grab_offset.is_some()
    }

    /// Whether the zoom-in control should be disabled.
    #[must_use]
    pub fn at_max_zoom(&self) -> bool {
        self.zoom.is_max()
    }

    /// Whether the zoom-out control should be disabled.
    #[must_use]
    pub fn at_min_zoom(&self) -> bool {
        self.zoom.is_min()
    }

    /// Zooms in by one button step.
    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.stepped(CONTROL_ZOOM_STEP);
    }

    /// Zooms out by one button step.
    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.stepped(-CONTROL_ZOOM_STEP);
    }

    /// Applies one wheel notch; only the sign of `scroll_y` matters.
    ///
    /// Zooming does not recompute an active grab offset, so a drag in
    /// progress keeps tracking the original grab point.
    pub fn zoom_by_wheel(&mut self, scroll_y: f32) {
        if scroll_y > 0.0 {
            self.zoom = self.zoom.stepped(WHEEL_ZOOM_STEP);
        } else if scroll_y < 0.0 {
            self.zoom = self.zoom.stepped(-WHEEL_ZOOM_STEP);
        }
    }

    /// Starts a drag, capturing the grab offset at the cursor position.
    pub fn start_drag(&mut self, cursor: Point) {
        self.grab_offset = Some(cursor - self.pan);
    }

    /// Updates the pan while a drag is active; no-op otherwise.
    pub fn drag_to(&mut self, cursor: Point) {
        if let Some(grab) = self.grab_offset {
            self.pan = cursor - grab;
        }
    }

    /// Ends the drag, keeping the accumulated pan.
    ///
    /// Used for both button release and the cursor leaving the window.
    pub fn stop_drag(&mut self) {
        self.grab_offset = None;
    }

    /// Restores the identity transform: default zoom, zero pan, no drag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
