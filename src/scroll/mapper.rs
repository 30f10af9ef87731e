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

//! Offset <-> scrollbar handle mapping.
//!
//! The track does not scale linearly with the content. A content coordinate
//! `t` (in viewport heights, counted from the newest content) is compressed
//! with `f(t) = 1 / (k*t + 1)`, so recent history gets most of the track and
//! deep history crowds towards the top edge without ever reaching it.
//!
//! Offsets are measured from the top of the content to the top of the
//! viewport: `max_offset()` means "showing the newest message".

/// Shape constant `k` of the compression curve.
pub const SCROLL_CONSTANT: f64 = 0.1;

/// Smallest handle extent, so the handle stays visible and grabbable.
pub const MIN_HANDLE: f64 = 1.0;

/// Sizes a mapping is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    pub content: f64,
    pub viewport: f64,
    pub track: f64,
}

impl ScrollGeometry {
    #[must_use]
    pub const fn new(content: f64, viewport: f64, track: f64) -> Self {
        Self { content, viewport, track }
    }

    /// Content height, never shorter than the viewport (`M`).
    #[must_use]
    pub fn extent(&self) -> f64 {
        self.content.max(self.viewport)
    }

    /// Largest valid offset (`M - V`).
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.extent() - self.viewport).max(0.0)
    }

    #[must_use]
    pub fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }

    /// Layout not ready: nothing can be mapped.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.viewport > 0.0 && self.track > 0.0)
    }
}

/// Handle placement inside the track, measured from the track's top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleGeometry {
    pub top: f64,
    pub height: f64,
}

impl HandleGeometry {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Distance from the track's bottom edge up to the handle's top edge.
    #[must_use]
    pub fn top_from_bottom(&self, track: f64) -> f64 {
        track - self.top
    }

    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom()
    }
}

/// `f(t) = 1 / (k*t + 1)`.
#[must_use]
pub fn compress(t: f64) -> f64 {
    1.0 / (SCROLL_CONSTANT * t + 1.0)
}

/// Inverse of [`compress`] for `p` in `(0, 1]`.
#[must_use]
pub fn expand(p: f64) -> f64 {
    (1.0 / p - 1.0) / SCROLL_CONSTANT
}

/// Fraction of the track, from its top edge, where the handle's top edge sits.
///
/// Returns `None` when the viewport has no height.
#[must_use]
pub fn top_fraction(geometry: ScrollGeometry, offset: f64) -> Option<f64> {
    if geometry.viewport <= 0.0 {
        return None;
    }
    Some(compress((geometry.extent() - offset) / geometry.viewport))
}

/// Handle placement for `offset`.
///
/// A zero-height viewport yields a handle spanning the whole track. The
/// minimum handle height never pushes the handle past the track's bottom edge.
#[must_use]
pub fn handle(geometry: ScrollGeometry, offset: f64) -> HandleGeometry {
    let track = geometry.track.max(0.0);
    if geometry.viewport <= 0.0 {
        return HandleGeometry { top: 0.0, height: track };
    }

    let extent = geometry.extent();
    let x = (extent - offset) / geometry.viewport;
    let y = (extent - (offset + geometry.viewport)) / geometry.viewport;

    let top = track * compress(x);
    let bottom = track * compress(y);
    let height = (bottom - top).max(MIN_HANDLE).min(track);
    let top = top.min(track - height).max(0.0);
    HandleGeometry { top, height }
}

/// Offset whose handle top lands at `fraction` of the track (from its top edge).
///
/// The result is clamped to the valid offset range; `None` when the geometry
/// is degenerate, in which case drag input is ignored.
#[must_use]
pub fn offset_at(geometry: ScrollGeometry, fraction: f64) -> Option<f64> {
    if geometry.is_degenerate() || fraction.is_nan() {
        return None;
    }
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction <= 0.0 {
        return Some(0.0);
    }
    let x = expand(fraction);
    Some(geometry.clamp(geometry.extent() - x * geometry.viewport))
}

/// Same as [`offset_at`], but with the pointer given as the fraction of the
/// track measured from its bottom edge.
#[must_use]
pub fn offset_from_bottom_fraction(geometry: ScrollGeometry, d: f64) -> Option<f64> {
    offset_at(geometry, 1.0 - d)
}
