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

mod input;
mod layout;
mod message;
pub mod theme;
mod thread;

pub use input::visual_height as prompt_visual_height;
pub use message::visual_height as message_visual_height;

use crate::app::{App, Thread, ThreadId};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const FOOTER_PAD: u16 = 1;
const FOOTER_HINTS: &[(&str, &str)] = &[
    ("Enter", "send"),
    ("Shift+Enter", "newline"),
    ("Ctrl+N", "new thread"),
    ("Tab", "switch"),
    ("Ctrl+W", "close"),
    ("Ctrl+C", "quit"),
];

pub fn render(frame: &mut Frame, app: &mut App) {
    let frame_area = frame.area();
    app.rendered_threads.clear();

    let ids: Vec<ThreadId> = app.threads().iter().map(Thread::id).collect();
    let areas = layout::compute(frame_area, ids.len());

    if ids.is_empty() {
        let body = areas.footer.map_or(frame_area, |f| Rect {
            height: frame_area.height.saturating_sub(f.height),
            ..frame_area
        });
        render_empty(frame, body);
    }
    for (id, column) in ids.into_iter().zip(areas.columns) {
        thread::render(frame, column, app, id);
    }

    if let Some(footer_area) = areas.footer {
        render_footer(frame, footer_area, app);
    }
}

fn render_empty(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let y = area.y + area.height / 2;
    let line = Line::from(Span::styled(
        "No open threads. Ctrl+N starts one.",
        Style::default().fg(theme::DIM),
    ));
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        Rect { y, height: 1, ..area },
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + FOOTER_PAD.min(area.width),
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        ..area
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in FOOTER_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().fg(theme::DIM)));
        }
        spans.push(Span::styled(*key, Style::default().fg(theme::AUTHOR)));
        spans.push(Span::styled(format!(" {action}"), Style::default().fg(theme::DIM)));
    }

    let name = app.user.name.as_str();
    let name_width = u16::try_from(name.width()).unwrap_or(u16::MAX);
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(name_width.saturating_add(1))])
            .areas(padded);
    frame.render_widget(Paragraph::new(Line::from(spans)), left);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(name, Style::default().fg(theme::ACCENT))))
            .alignment(Alignment::Right),
        right,
    );
}
