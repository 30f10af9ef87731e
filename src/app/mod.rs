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

mod events;
mod input;
mod input_submit;
mod prompt;
mod registry;
mod state;
mod thread;

pub use events::handle_terminal_event;
pub use input::InputState;
pub use input_submit::{COMMAND_PREFIX, COMMAND_STUB_NOTICE, Submission, classify};
pub use prompt::{PLACEHOLDER, Prompt, PromptEvent, PromptObserver};
pub use state::{App, Message, MessageId, MessageKind, RenderedThread, ThreadId, User};
pub use thread::Thread;

use crate::Cli;
use crate::error::AppError;
use crossterm::event::{
    EventStream, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use futures::{FutureExt as _, StreamExt};
use std::time::{Duration, Instant};

/// Build the app from the command line: one thread per `--thread`, the
/// first one opened.
pub fn create_app(cli: &Cli) -> Result<App, AppError> {
    let mut app = App::new(User::new(cli.user_name()), f64::from(cli.wheel_lines));
    let mut first = None;
    for name in &cli.thread {
        let id = app.create_thread(Some(name.clone()));
        first.get_or_insert(id);
    }
    let first = first.ok_or(AppError::NoThreads)?;
    app.open_thread(first);
    tracing::info!(user = %app.user.name, threads = app.threads().len(), "app created");
    Ok(app)
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Unsupported terminals just lose paste/mouse/focus reporting
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::EnableBracketedPaste,
        crossterm::event::EnableMouseCapture,
        crossterm::event::EnableFocusChange,
        // Needed to tell Shift+Enter from Enter
        PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
        )
    );

    let mut events = EventStream::new();
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    let result = loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                events::handle_terminal_event(app, event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain whatever else is queued
        while let Some(Some(Ok(event))) = events.next().now_or_never() {
            events::handle_terminal_event(app, event);
        }

        if app.should_quit {
            break Ok(());
        }

        // Phase 3: render once
        if let Err(e) = terminal.draw(|f| crate::ui::render(f, app)) {
            break Err(e.into());
        }
        last_render = Instant::now();
    };

    // A drag must not outlive the terminal session
    app.cancel_drag();

    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::DisableBracketedPaste,
        crossterm::event::DisableMouseCapture,
        crossterm::event::DisableFocusChange,
        PopKeyboardEnhancementFlags
    );
    ratatui::restore();

    result
}
