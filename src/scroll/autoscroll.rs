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

use super::mapper::ScrollGeometry;

/// Distance from the newest content, in rows, under which autoscroll re-arms.
pub const AUTOSCROLL_THRESHOLD: f64 = 5.0;

/// Decides whether a thread follows new content.
///
/// Offsets count from the top of the content, so leaving the offset alone
/// while content grows below keeps the visible rows in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoscrollPolicy {
    enabled: bool,
}

impl AutoscrollPolicy {
    #[must_use]
    pub const fn new() -> Self {
        Self { enabled: true }
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Wheel or drag: the user takes over.
    pub fn on_user_gesture(&mut self) {
        self.enabled = false;
    }

    /// Replies always scroll to show themselves.
    pub fn engage(&mut self) {
        self.enabled = true;
    }

    /// Re-evaluate after the offset has been set by any means.
    pub fn after_offset_set(&mut self, geometry: ScrollGeometry, offset: f64) {
        let was = self.enabled;
        self.enabled = geometry.max_offset() - offset < AUTOSCROLL_THRESHOLD;
        if was != self.enabled {
            tracing::trace!(enabled = self.enabled, offset, "autoscroll re-evaluated");
        }
    }

    /// Offset to use after the content or viewport changed size.
    #[must_use]
    pub fn resolve(self, geometry: ScrollGeometry, offset: f64) -> f64 {
        if self.enabled { geometry.max_offset() } else { offset }
    }
}

impl Default for AutoscrollPolicy {
    fn default() -> Self {
        Self::new()
    }
}
