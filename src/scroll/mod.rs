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

pub mod autoscroll;
pub mod capture;
pub mod mapper;
pub mod view;

pub use autoscroll::{AUTOSCROLL_THRESHOLD, AutoscrollPolicy};
pub use capture::{DragSession, PointerCapture};
pub use mapper::{HandleGeometry, SCROLL_CONSTANT, ScrollGeometry};
pub use view::{RenderHook, ScrollState, ScrollableThreadView, ThreadGeometry};
