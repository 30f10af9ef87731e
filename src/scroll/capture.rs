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

use crate::app::ThreadId;
use std::cell::RefCell;
use std::rc::Rc;

/// Which thread currently receives pointer drag and release events.
///
/// Shared between the app and every thread view. Only a live [`DragSession`]
/// holds the capture; dropping the session gives it back.
#[derive(Debug, Clone, Default)]
pub struct PointerCapture(Rc<RefCell<Option<ThreadId>>>);

impl PointerCapture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn owner(&self) -> Option<ThreadId> {
        *self.0.borrow()
    }

    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.0.borrow().is_some()
    }

    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn acquire(&self, owner: ThreadId) {
        let previous = self.0.borrow_mut().replace(owner);
        if let Some(previous) = previous
            && previous != owner
        {
            tracing::debug!(%previous, %owner, "pointer capture taken over");
        }
    }

    fn release(&self, owner: ThreadId) {
        let mut slot = self.0.borrow_mut();
        if *slot == Some(owner) {
            *slot = None;
        }
    }
}

/// An active scrollbar drag. Holds the pointer capture for its lifetime.
#[derive(Debug)]
pub struct DragSession {
    capture: PointerCapture,
    owner: ThreadId,
    track_top: f64,
    /// Pointer distance below the handle's unclamped top edge at drag start.
    grab: f64,
}

impl DragSession {
    pub(crate) fn begin(
        capture: &PointerCapture,
        owner: ThreadId,
        track_top: f64,
        grab: f64,
    ) -> Self {
        capture.acquire(owner);
        tracing::debug!(%owner, track_top, grab, "scrollbar drag started");
        Self { capture: capture.clone(), owner, track_top, grab }
    }

    #[must_use]
    pub fn owner(&self) -> ThreadId {
        self.owner
    }

    #[must_use]
    pub fn track_top(&self) -> f64 {
        self.track_top
    }

    #[must_use]
    pub fn grab(&self) -> f64 {
        self.grab
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        self.capture.release(self.owner);
        tracing::debug!(owner = %self.owner, "scrollbar drag ended");
    }
}
