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

use super::input_submit::submit_input;
use super::state::contains;
use super::{App, Thread};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Paste(text) => app.prompt_input_mut().insert_str(&text),
        // Releasing the button outside the terminal never reaches us
        Event::FocusLost => app.cancel_drag(),
        // Resize is picked up by the next layout pass
        _ => {}
    }
}

/// Aim at the middle of the cell the pointer is in.
fn pointer_y(row: u16) -> f64 {
    f64::from(row) + 0.5
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(hit) = app.rendered_thread_at(mouse.column, mouse.row) else {
                return;
            };
            if contains(hit.track, mouse.column, mouse.row) {
                if let Some(thread) = app.thread_mut(hit.id) {
                    thread.view_mut().on_drag_start(
                        pointer_y(mouse.row),
                        f64::from(hit.track.y),
                        f64::from(hit.track.height),
                    );
                }
            } else if app.active_id() != Some(hit.id) {
                app.open_thread(hit.id);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(thread) = captured_thread(app) {
                thread.view_mut().on_drag_move(pointer_y(mouse.row));
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(thread) = captured_thread(app) {
                thread.view_mut().on_drag_end();
            }
        }
        MouseEventKind::ScrollUp => {
            let delta = -app.wheel_step;
            wheel(app, mouse, delta);
        }
        MouseEventKind::ScrollDown => {
            let delta = app.wheel_step;
            wheel(app, mouse, delta);
        }
        _ => {}
    }
}

fn captured_thread(app: &mut App) -> Option<&mut Thread> {
    let owner = app.capture().owner()?;
    app.thread_mut(owner)
}

/// Wheel over a thread scrolls that thread, anywhere else the active one.
fn wheel(app: &mut App, mouse: MouseEvent, delta: f64) {
    let target =
        app.rendered_thread_at(mouse.column, mouse.row).map(|t| t.id).or_else(|| app.active_id());
    if let Some(thread) = target.and_then(|id| app.thread_mut(id)) {
        thread.view_mut().on_wheel(delta);
    }
}

fn scroll_active(app: &mut App, delta: f64) {
    if let Some(thread) = app.active_thread_mut() {
        thread.view_mut().on_wheel(delta);
    }
}

fn page_size(app: &App) -> f64 {
    app.active_thread().map_or(1.0, |t| (t.view().state().viewport_size - 1.0).max(1.0))
}

fn close_active(app: &mut App) {
    let Some(id) = app.active_id() else {
        return;
    };
    app.remove_thread(id);
    if let Some(last) = app.threads().last().map(Thread::id) {
        app.open_thread(last);
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        // Ctrl+N: new thread
        KeyCode::Char('n') if ctrl => {
            let name = format!("thread {}", app.threads().len() + 1);
            let id = app.create_thread(Some(name));
            app.open_thread(id);
        }
        // Ctrl+W: close the active thread
        KeyCode::Char('w') if ctrl => close_active(app),
        KeyCode::Tab => {
            app.cycle_active(true);
        }
        KeyCode::BackTab => {
            app.cycle_active(false);
        }
        // Enter with any modifier is not a submit
        KeyCode::Enter if key.modifiers.is_empty() => submit_input(app),
        KeyCode::Enter => app.prompt_input_mut().insert_newline(),
        KeyCode::Up if ctrl => scroll_active(app, -1.0),
        KeyCode::Down if ctrl => scroll_active(app, 1.0),
        KeyCode::PageUp => {
            let page = page_size(app);
            scroll_active(app, -page);
        }
        KeyCode::PageDown => {
            let page = page_size(app);
            scroll_active(app, page);
        }
        KeyCode::End if ctrl => {
            if let Some(thread) = app.active_thread_mut() {
                thread.view_mut().follow_newest();
            }
        }
        KeyCode::Left => app.prompt_input_mut().move_left(),
        KeyCode::Right => app.prompt_input_mut().move_right(),
        KeyCode::Up => app.prompt_input_mut().move_up(),
        KeyCode::Down => app.prompt_input_mut().move_down(),
        KeyCode::Home => app.prompt_input_mut().move_home(),
        KeyCode::End => app.prompt_input_mut().move_end(),
        KeyCode::Backspace => app.prompt_input_mut().backspace(),
        KeyCode::Delete => app.prompt_input_mut().delete(),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            app.prompt_input_mut().insert_char(c);
        }
        _ => {}
    }
}
