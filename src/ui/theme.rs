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

use ratatui::style::Color;

// Accent
pub const ACCENT: Color = Color::Rgb(244, 118, 0);

// UI chrome
pub const DIM: Color = Color::DarkGray;
pub const PROMPT_CHAR: &str = "❯";

// Message header colors
pub const AUTHOR: Color = Color::White;
pub const OWN_AUTHOR: Color = ACCENT;
pub const SYSTEM: Color = Color::Yellow;

// Scrollbar
pub const TRACK_CHAR: &str = "│";
pub const HANDLE_CHAR: &str = "█";
pub const TRACK: Color = Color::Rgb(60, 64, 72);
pub const HANDLE: Color = Color::Gray;
pub const HANDLE_DRAGGING: Color = ACCENT;
