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

use crate::app::{Message, MessageKind, User};
use crate::ui::theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

/// Header row, body rows, then one blank spacer row.
///
/// `me` decides which author gets the accent color.
pub fn message_lines(msg: &Message, me: &User) -> Vec<Line<'static>> {
    let (name, name_style, body_style) = match msg.kind() {
        MessageKind::Chat { author } => {
            let color = if author == me { theme::OWN_AUTHOR } else { theme::AUTHOR };
            (
                author.name.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
                Style::default(),
            )
        }
        MessageKind::System => (
            "system".to_owned(),
            Style::default().fg(theme::SYSTEM).add_modifier(Modifier::BOLD),
            Style::default().fg(theme::SYSTEM).add_modifier(Modifier::ITALIC),
        ),
    };

    let mut lines = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(name, name_style),
        Span::raw(" "),
        Span::styled(msg.time_label(), Style::default().fg(theme::DIM)),
    ]));
    for body_line in msg.body().split('\n') {
        lines.push(Line::from(Span::styled(body_line.to_owned(), body_style)));
    }
    lines.push(Line::default());
    lines
}

/// Rows the message occupies when wrapped to `width`.
pub fn visual_height(msg: &Message, me: &User, width: u16) -> usize {
    Paragraph::new(message_lines(msg, me)).wrap(Wrap { trim: false }).line_count(width)
}
