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

use crate::app::{InputState, PLACEHOLDER};
use crate::ui::theme;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Prompt prefix width: "❯ " = 2 columns
const PROMPT_WIDTH: u16 = 2;

/// The prompt as display rows, already wrapped to `width`.
///
/// Rows never exceed `width`, so a wrapping paragraph keeps them one row
/// each and the cursor math in [`cursor_position`] stays exact.
pub fn prompt_lines(input: &InputState, width: u16) -> Vec<Line<'static>> {
    let prompt =
        Span::styled(format!("{} ", theme::PROMPT_CHAR), Style::default().fg(theme::ACCENT));

    if input.is_empty() {
        return vec![Line::from(vec![
            prompt,
            Span::styled(PLACEHOLDER, Style::default().fg(theme::DIM)),
        ])];
    }

    let content_width = content_width(width);
    let mut lines = Vec::new();
    for text in input.lines() {
        for row in wrap_row(text, content_width) {
            let prefix = if lines.is_empty() { prompt.clone() } else { Span::raw("  ") };
            lines.push(Line::from(vec![prefix, Span::raw(row)]));
        }
    }
    lines
}

/// Rows the prompt occupies at `width`.
pub fn visual_height(input: &InputState, width: u16) -> usize {
    if input.is_empty() {
        return 1;
    }
    let content_width = content_width(width);
    input.lines().iter().map(|text| wrap_row(text, content_width).len()).sum()
}

/// Cursor as `(row, column)` relative to the first prompt row.
pub fn cursor_position(input: &InputState, width: u16) -> (usize, u16) {
    let content_width = content_width(width);
    let (cursor_row, cursor_col) = input.cursor();
    let rows_above: usize = input
        .lines()
        .iter()
        .take(cursor_row)
        .map(|text| wrap_row(text, content_width).len())
        .sum();

    let Some(line) = input.lines().get(cursor_row) else {
        return (rows_above, PROMPT_WIDTH);
    };
    let mut row = 0;
    let mut used = 0;
    for c in line.chars().take(cursor_col) {
        let w = c.width().unwrap_or(0);
        if content_width > 0 && used + w > content_width && used > 0 {
            row += 1;
            used = 0;
        }
        used += w;
    }
    if content_width > 0 && used >= content_width {
        row += 1;
        used = 0;
    }
    let col = u16::try_from(used).unwrap_or(u16::MAX).saturating_add(PROMPT_WIDTH);
    (rows_above + row, col)
}

fn content_width(width: u16) -> usize {
    usize::from(width.saturating_sub(PROMPT_WIDTH))
}

/// Split one logical line by display width. A full last row gets an empty
/// row after it so the cursor has somewhere to sit.
fn wrap_row(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_owned()];
    }
    let mut rows = vec![String::new()];
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width && used > 0 {
            rows.push(String::new());
            used = 0;
        }
        if let Some(row) = rows.last_mut() {
            row.push(c);
        }
        used += w;
    }
    if used >= width {
        rows.push(String::new());
    }
    rows
}

#[cfg(test)]
mod tests {
    // =====
    // TESTS: 7
    // =====

    use super::*;
    use pretty_assertions::assert_eq;

    fn typed(s: &str) -> InputState {
        let mut input = InputState::new();
        input.insert_str(s);
        input
    }

    fn text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_prompt_shows_placeholder() {
        let lines = prompt_lines(&InputState::new(), 40);
        assert_eq!(text(&lines), vec![format!("❯ {PLACEHOLDER}")]);
        assert_eq!(cursor_position(&InputState::new(), 40), (0, 2));
    }

    #[test]
    fn continuation_rows_are_indented() {
        let lines = prompt_lines(&typed("ab\ncd"), 40);
        assert_eq!(text(&lines), vec!["❯ ab", "  cd"]);
    }

    #[test]
    fn long_line_wraps_by_width() {
        let input = typed("abcdefgh");
        let lines = prompt_lines(&input, 5);
        assert_eq!(text(&lines), vec!["❯ abc", "  def", "  gh"]);
        assert_eq!(visual_height(&input, 5), 3);
        assert_eq!(cursor_position(&input, 5), (2, 4));
    }

    #[test]
    fn full_row_reserves_cursor_row() {
        let input = typed("abc");
        assert_eq!(visual_height(&input, 5), 2);
        assert_eq!(cursor_position(&input, 5), (1, 2));
    }

    #[test]
    fn wide_chars_do_not_split() {
        let input = typed("ab漢");
        let lines = prompt_lines(&input, 5);
        assert_eq!(text(&lines), vec!["❯ ab", "  漢"]);
    }

    #[test]
    fn cursor_tracks_logical_row() {
        let mut input = typed("one\ntwo");
        input.move_up();
        input.move_home();
        input.move_right();
        assert_eq!(cursor_position(&input, 40), (0, 3));
    }

    #[test]
    fn height_counts_every_line() {
        assert_eq!(visual_height(&InputState::new(), 40), 1);
        assert_eq!(visual_height(&typed("a\nb\nc"), 40), 3);
    }
}
