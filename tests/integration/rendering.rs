// =====
// TESTS: 5
// =====
//
// Full frames: terminal events in, TestBackend buffer out.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use hoth::app::{App, handle_terminal_event};
use hoth::ui;
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::helpers::test_app;

const WIDTH: u16 = 40;
const HEIGHT: u16 = 12;

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap()
}

fn frame(terminal: &mut Terminal<TestBackend>, app: &mut App) -> Vec<String> {
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buf = terminal.backend().buffer();
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width).map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol())).collect()
        })
        .collect()
}

/// Rows under the title, without the scrollbar column.
fn content_rows(rows: &[String]) -> Vec<String> {
    rows[1..11].iter().map(|r| r.chars().take(usize::from(WIDTH) - 1).collect()).collect()
}

fn say(app: &mut App, text: &str) {
    for c in text.chars() {
        let key = if c == '\n' {
            KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT)
        } else {
            KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
        };
        handle_terminal_event(app, Event::Key(key));
    }
    handle_terminal_event(app, Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
}

fn wheel_up(app: &mut App, times: usize) {
    for _ in 0..times {
        handle_terminal_event(
            app,
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollUp,
                column: 5,
                row: 5,
                modifiers: KeyModifiers::NONE,
            }),
        );
    }
}

#[test]
fn typed_message_appears_above_prompt() {
    let mut app = test_app();
    let mut term = terminal();
    say(&mut app, "hello there");
    let rows = frame(&mut term, &mut app);
    let body = rows.iter().position(|r| r.contains("hello there")).unwrap();
    let prompt = rows.iter().position(|r| r.contains("Say something")).unwrap();
    assert!(body < prompt);
}

#[test]
fn measured_content_is_sum_of_parts() {
    let mut app = test_app();
    let mut term = terminal();
    say(&mut app, "one");
    say(&mut app, "two\nlines");
    frame(&mut term, &mut app);

    let thread = app.active_thread().unwrap();
    let width = app.rendered_threads[0].content.width;
    let expected: usize = thread
        .messages()
        .iter()
        .map(|m| ui::message_visual_height(m, &app.user, width))
        .sum::<usize>()
        + ui::prompt_visual_height(app.prompt().input(), width);
    assert_eq!(thread.view().state().content_size, expected as f64);
}

#[test]
fn scrolled_back_view_holds_position_while_messages_arrive() {
    let mut app = test_app();
    let mut term = terminal();
    for i in 0..20 {
        app.submit(&format!("early {i}"));
    }
    frame(&mut term, &mut app);
    wheel_up(&mut app, 10);
    let before = app.active_thread().unwrap().view().offset();
    let shown_before = frame(&mut term, &mut app);

    // A message lands without a reply, so nothing re-arms following
    let id = app.active_id().unwrap();
    app.thread_mut(id).unwrap().append(hoth::app::Message::system("background"));
    let shown_after = frame(&mut term, &mut app);

    assert_eq!(app.active_thread().unwrap().view().offset(), before);
    // The scrollbar column moves; the message rows must not
    assert_eq!(content_rows(&shown_before), content_rows(&shown_after));
}

#[test]
fn submitting_snaps_back_to_newest() {
    let mut app = test_app();
    let mut term = terminal();
    for i in 0..20 {
        app.submit(&format!("early {i}"));
    }
    frame(&mut term, &mut app);
    wheel_up(&mut app, 10);
    say(&mut app, "back to live");
    let rows = frame(&mut term, &mut app);
    assert!(rows.iter().any(|r| r.contains("back to live")));
    assert!(app.active_thread().unwrap().view().autoscroll_enabled());
}

#[test]
fn command_reply_is_rendered_as_system() {
    let mut app = test_app();
    let mut term = terminal();
    say(&mut app, "/help");
    let rows = frame(&mut term, &mut app);
    assert!(rows.iter().any(|r| r.contains("system")));
    assert!(rows.iter().any(|r| r.contains("Commands are not implemented")));
}
