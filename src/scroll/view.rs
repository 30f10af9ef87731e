// hoth — A threaded terminal chat with a hyperbolic scrollbar
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use super::autoscroll::AutoscrollPolicy;
use super::capture::{DragSession, PointerCapture};
use super::mapper::{self, ScrollGeometry};
use crate::app::ThreadId;

/// Scroll state of one thread. Sizes are in rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Distance from the top of the content to the top of the viewport.
    /// Stored unclamped while the track has not been measured.
    pub offset: f64,
    pub content_size: f64,
    pub viewport_size: f64,
    pub track_size: f64,
    pub autoscroll: AutoscrollPolicy,
}

impl ScrollState {
    #[must_use]
    pub fn geometry(&self) -> ScrollGeometry {
        ScrollGeometry::new(self.content_size, self.viewport_size, self.track_size)
    }

    #[must_use]
    pub fn autoscroll_enabled(&self) -> bool {
        self.autoscroll.is_enabled()
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0.0,
            content_size: 0.0,
            viewport_size: 0.0,
            track_size: 0.0,
            autoscroll: AutoscrollPolicy::new(),
        }
    }
}

/// What the drawing layer needs to place the handle and the content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreadGeometry {
    pub handle_top: f64,
    pub handle_height: f64,
    pub content_offset: f64,
}

/// Called with fresh geometry every time it is recomputed.
pub type RenderHook = Box<dyn FnMut(&ThreadGeometry)>;

/// Owns one thread's scroll state and turns input into geometry.
pub struct ScrollableThreadView {
    owner: ThreadId,
    state: ScrollState,
    capture: PointerCapture,
    drag: Option<DragSession>,
    geometry: Option<ThreadGeometry>,
    render_hook: Option<RenderHook>,
}

impl std::fmt::Debug for ScrollableThreadView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollableThreadView")
            .field("owner", &self.owner)
            .field("state", &self.state)
            .field("dragging", &self.drag.is_some())
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}

impl ScrollableThreadView {
    #[must_use]
    pub fn new(owner: ThreadId, capture: PointerCapture) -> Self {
        Self {
            owner,
            state: ScrollState::default(),
            capture,
            drag: None,
            geometry: None,
            render_hook: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.state.offset
    }

    #[must_use]
    pub fn autoscroll_enabled(&self) -> bool {
        self.state.autoscroll_enabled()
    }

    /// Last geometry handed to the renderer, if the track was ever measured.
    #[must_use]
    pub fn geometry(&self) -> Option<ThreadGeometry> {
        self.geometry
    }

    /// True only while this view's drag still holds the pointer capture.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some() && self.holds_capture()
    }

    pub fn set_render_hook(&mut self, hook: RenderHook) {
        self.render_hook = Some(hook);
    }

    /// Switch to another app's capture. Any drag in progress is abandoned.
    pub(crate) fn rebind_capture(&mut self, capture: PointerCapture) {
        self.cancel_drag();
        self.capture = capture;
    }

    // --- Input feed ---

    /// Wheel gesture. Positive `delta_y` scrolls towards newer content.
    pub fn on_wheel(&mut self, delta_y: f64) {
        if !delta_y.is_finite() {
            return;
        }
        self.state.autoscroll.on_user_gesture();
        self.set_offset(self.state.offset + delta_y);
    }

    /// Begin a scrollbar drag at `pointer_y`.
    ///
    /// Grabbing the handle keeps the grab point under the pointer; pressing
    /// anywhere else on the track moves the handle's top edge to the pointer.
    pub fn on_drag_start(&mut self, pointer_y: f64, track_top: f64, track_height: f64) {
        if track_height.is_finite() && track_height >= 0.0 {
            self.state.track_size = track_height;
        }
        let geometry = self.state.geometry();
        if geometry.is_degenerate() || !pointer_y.is_finite() || !track_top.is_finite() {
            return;
        }
        self.cancel_drag();

        let offset = geometry.clamp(self.state.offset);
        let relative = pointer_y - track_top;
        let grab = match mapper::top_fraction(geometry, offset) {
            Some(fraction) if mapper::handle(geometry, offset).contains(relative) => {
                relative - fraction * geometry.track
            }
            _ => 0.0,
        };
        self.drag = Some(DragSession::begin(&self.capture, self.owner, track_top, grab));
        self.on_drag_move(pointer_y);
    }

    /// Ignored without a drag, or after another thread took the capture.
    pub fn on_drag_move(&mut self, pointer_y: f64) {
        if self.drag.is_some() && !self.holds_capture() {
            self.cancel_drag();
        }
        let Some(session) = self.drag.as_ref() else {
            return;
        };
        let geometry = self.state.geometry();
        let fraction = (pointer_y - session.grab() - session.track_top()) / geometry.track;
        let Some(offset) = mapper::offset_at(geometry, fraction) else {
            return;
        };
        self.state.autoscroll.on_user_gesture();
        self.set_offset(offset);
    }

    pub fn on_drag_end(&mut self) {
        self.drag = None;
    }

    /// Drop an in-progress drag without applying further movement
    /// (focus loss, thread removal).
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!(owner = %self.owner, "scrollbar drag cancelled");
        }
    }

    pub fn on_content_resized(&mut self, height: f64) {
        if let Some(height) = sanitize(height) {
            self.state.content_size = height;
            self.rescroll(false);
        }
    }

    pub fn on_viewport_resized(&mut self, height: f64) {
        if let Some(height) = sanitize(height) {
            self.state.viewport_size = height;
            self.rescroll(false);
        }
    }

    /// The first non-zero track height also clamps any offset stored while
    /// the layout was pending.
    pub fn on_track_resized(&mut self, height: f64) {
        if let Some(height) = sanitize(height) {
            let first_layout = self.state.track_size <= 0.0 && height > 0.0;
            self.state.track_size = height;
            self.rescroll(first_layout);
        }
    }

    /// Report all measured sizes at once. Every size is stored before the
    /// offset is re-resolved, so a combined resize is one scroll update.
    /// Non-finite sizes keep their previous value.
    pub fn measure(&mut self, content: f64, viewport: f64, track: f64) {
        let content = sanitize(content).unwrap_or(self.state.content_size);
        let viewport = sanitize(viewport).unwrap_or(self.state.viewport_size);
        let track = sanitize(track).unwrap_or(self.state.track_size);
        let any_changed = changed(self.state.content_size, content)
            || changed(self.state.viewport_size, viewport)
            || changed(self.state.track_size, track);
        if !any_changed {
            return;
        }
        let first_layout = self.state.track_size <= 0.0 && track > 0.0;
        self.state.content_size = content;
        self.state.viewport_size = viewport;
        self.state.track_size = track;
        self.rescroll(first_layout);
    }

    /// Arm autoscroll and jump to the newest content.
    pub fn follow_newest(&mut self) {
        self.state.autoscroll.engage();
        self.rescroll(false);
    }

    // --- Internals ---

    /// `first_layout` is set when the track gets its first non-zero height;
    /// the offset stored meanwhile then goes through the threshold check.
    fn rescroll(&mut self, first_layout: bool) {
        let geometry = self.state.geometry();
        if self.state.autoscroll.is_enabled() {
            self.set_offset(self.state.autoscroll.resolve(geometry, self.state.offset));
            return;
        }
        if geometry.track <= 0.0 {
            return;
        }
        let clamped = geometry.clamp(self.state.offset);
        if first_layout || changed(self.state.offset, clamped) {
            self.set_offset(clamped);
        } else {
            self.render();
        }
    }

    fn holds_capture(&self) -> bool {
        self.capture.owner() == Some(self.owner)
    }

    fn set_offset(&mut self, value: f64) {
        let geometry = self.state.geometry();
        if geometry.track <= 0.0 {
            self.state.offset = value;
            return;
        }
        self.state.offset = geometry.clamp(value);
        self.state.autoscroll.after_offset_set(geometry, self.state.offset);
        self.render();
    }

    fn render(&mut self) {
        let geometry = self.state.geometry();
        let handle = mapper::handle(geometry, self.state.offset);
        let rendered = ThreadGeometry {
            handle_top: handle.top,
            handle_height: handle.height,
            content_offset: self.state.offset,
        };
        self.geometry = Some(rendered);
        if let Some(hook) = self.render_hook.as_mut() {
            hook(&rendered);
        }
    }
}

fn sanitize(size: f64) -> Option<f64> {
    size.is_finite().then(|| size.max(0.0))
}

fn changed(current: f64, next: f64) -> bool {
    (current - next).abs() > f64::EPSILON
}
