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

use ratatui::layout::{Constraint, Layout, Rect};

/// Blank column between thread columns.
const COLUMN_GAP: u16 = 1;

pub struct AppLayout {
    /// One area per thread, in collection order.
    pub columns: Vec<Rect>,
    pub footer: Option<Rect>,
}

/// Parts of one thread column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadAreas {
    /// Name row; zero-height for unnamed threads.
    pub title: Rect,
    pub content: Rect,
    /// Scrollbar track along the right edge of the content.
    pub track: Rect,
}

pub fn compute(area: Rect, thread_count: usize) -> AppLayout {
    let (body, footer) = if area.height < 4 {
        (area, None)
    } else {
        let [body, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        (body, Some(footer))
    };

    let columns = if thread_count == 0 {
        Vec::new()
    } else {
        Layout::horizontal(std::iter::repeat_n(Constraint::Fill(1), thread_count))
            .spacing(COLUMN_GAP)
            .split(body)
            .to_vec()
    };

    AppLayout { columns, footer }
}

pub fn thread_areas(column: Rect, named: bool) -> ThreadAreas {
    let title_height = u16::from(named && column.height > 1);
    let [title, body] =
        Layout::vertical([Constraint::Length(title_height), Constraint::Min(0)]).areas(column);

    if body.width < 2 {
        return ThreadAreas { title, content: body, track: Rect { width: 0, ..body } };
    }
    let [content, track] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(1)]).areas(body);
    ThreadAreas { title, content, track }
}
