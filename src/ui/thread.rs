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

use crate::app::{App, RenderedThread, ThreadId};
use crate::scroll::ThreadGeometry;
use crate::ui::{input, layout, message, theme};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Widget, Wrap};

/// Draw one thread column and record where it landed for mouse routing.
///
/// Content height is measured from the wrapped paragraph every frame and
/// fed to the thread's scroll view before the offset is read back, so the
/// view always scrolls against what is actually on screen.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn render(frame: &mut Frame, column: Rect, app: &mut App, id: ThreadId) {
    let Some(thread) = app.thread(id) else {
        return;
    };
    let areas = layout::thread_areas(column, thread.is_named());
    let width = areas.content.width;
    let is_active = app.active_id() == Some(id);

    if let Some(name) = thread.name() {
        render_title(frame, areas.title, name, is_active);
    }
    if width == 0 {
        return;
    }

    let mut lines: Vec<Line<'static>> =
        thread.messages().iter().flat_map(|m| message::message_lines(m, &app.user)).collect();
    let prompt = app.prompt();
    let prompt_cursor = if prompt.is_attached_to(id) {
        let rows = input::prompt_lines(prompt.input(), width);
        let prompt_height = rows.len();
        lines.extend(rows);
        Some((prompt_height, input::cursor_position(prompt.input(), width)))
    } else {
        None
    };

    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
    let content_height = paragraph.line_count(width);
    let viewport_height = usize::from(areas.content.height);

    let Some(thread) = app.thread_mut(id) else {
        return;
    };
    let view = thread.view_mut();
    view.measure(content_height as f64, viewport_height as f64, f64::from(areas.track.height));
    let geometry = view.geometry();
    let dragging = view.is_dragging();

    let (top_row, scroll) = if content_height <= viewport_height {
        // Short content sits on the bottom edge, right above where new rows appear
        let pad = (viewport_height - content_height) as u16;
        let render_area = Rect {
            y: areas.content.y + pad,
            height: content_height as u16,
            ..areas.content
        };
        frame.render_widget(paragraph, render_area);
        (render_area.y, 0)
    } else {
        let max_scroll = content_height - viewport_height;
        let scroll = (view.offset().round().max(0.0) as usize).min(max_scroll);
        let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
        frame.render_widget(paragraph.scroll((scroll, 0)), areas.content);
        (areas.content.y, scroll)
    };

    if areas.track.width > 0 {
        frame.render_widget(Scrollbar { geometry, dragging }, areas.track);
    }

    if is_active && let Some((prompt_height, (row, col))) = prompt_cursor {
        let visual_row = (content_height + row).saturating_sub(prompt_height);
        if let Some(from_top) = visual_row.checked_sub(usize::from(scroll)) {
            let y = usize::from(top_row) + from_top;
            let x = areas.content.x.saturating_add(col);
            if y < usize::from(areas.content.bottom()) && x < areas.content.right() {
                frame.set_cursor_position((x, y as u16));
            }
        }
    }

    app.rendered_threads.push(RenderedThread {
        id,
        column,
        content: areas.content,
        track: areas.track,
    });
}

fn render_title(frame: &mut Frame, area: Rect, name: &str, is_active: bool) {
    if area.height == 0 {
        return;
    }
    let style = if is_active {
        Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::DIM).add_modifier(Modifier::BOLD)
    };
    let line = Line::from(Span::styled(name.to_owned(), style));
    frame.render_widget(Paragraph::new(line), area);
}

/// One-column track with the handle drawn over it.
struct Scrollbar {
    geometry: Option<ThreadGeometry>,
    dragging: bool,
}

impl Widget for Scrollbar {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let track_style = Style::default().fg(theme::TRACK);
        for y in area.top()..area.bottom() {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_symbol(theme::TRACK_CHAR).set_style(track_style);
            }
        }

        let Some(geometry) = self.geometry else {
            return;
        };
        let start = geometry.handle_top.round().max(0.0) as u16;
        let end = (geometry.handle_top + geometry.handle_height).round().max(0.0) as u16;
        let end = end.max(start + 1).min(area.height);
        let color = if self.dragging { theme::HANDLE_DRAGGING } else { theme::HANDLE };
        for row in start..end {
            if let Some(cell) = buf.cell_mut((area.x, area.y + row)) {
                cell.set_symbol(theme::HANDLE_CHAR).set_style(Style::default().fg(color));
            }
        }
    }
}
