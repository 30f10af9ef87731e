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

use super::prompt::Prompt;
use super::thread::Thread;
use crate::scroll::PointerCapture;
use chrono::{DateTime, Local, Timelike};
use ratatui::layout::Rect;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThreadId(Uuid);

impl ThreadId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ThreadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(Uuid);

impl MessageId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Who is typing into the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Chat { author: User },
    System,
}

/// A posted message. Fields are fixed at construction.
#[derive(Debug, Clone)]
pub struct Message {
    id: MessageId,
    time: DateTime<Local>,
    body: String,
    kind: MessageKind,
}

impl Message {
    pub fn chat(author: User, body: impl Into<String>) -> Self {
        Self::build(MessageKind::Chat { author }, body.into())
    }

    pub fn system(body: impl Into<String>) -> Self {
        Self::build(MessageKind::System, body.into())
    }

    fn build(kind: MessageKind, body: String) -> Self {
        Self { id: MessageId::new(), time: Local::now(), body, kind }
    }

    /// Override the timestamp (defaults to now).
    #[must_use]
    pub fn at(mut self, time: DateTime<Local>) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn time(&self) -> DateTime<Local> {
        self.time
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn kind(&self) -> &MessageKind {
        &self.kind
    }

    #[must_use]
    pub fn author(&self) -> Option<&User> {
        match &self.kind {
            MessageKind::Chat { author } => Some(author),
            MessageKind::System => None,
        }
    }

    #[must_use]
    pub fn is_system(&self) -> bool {
        matches!(self.kind, MessageKind::System)
    }

    /// `H:MM`, hours unpadded.
    #[must_use]
    pub fn time_label(&self) -> String {
        format!("{}:{:02}", self.time.hour(), self.time.minute())
    }
}

/// Screen areas a thread occupied in the last frame, for mouse routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedThread {
    pub id: ThreadId,
    pub column: Rect,
    pub content: Rect,
    pub track: Rect,
}

pub struct App {
    pub user: User,
    pub(super) threads: Vec<Thread>,
    pub(super) active: Option<ThreadId>,
    pub(super) prompt: Prompt,
    pub(super) capture: PointerCapture,
    /// Rows scrolled per wheel notch.
    pub wheel_step: f64,
    pub should_quit: bool,
    pub rendered_threads: Vec<RenderedThread>,
}

impl App {
    #[must_use]
    pub fn new(user: User, wheel_step: f64) -> Self {
        Self {
            user,
            threads: Vec::new(),
            active: None,
            prompt: Prompt::new(),
            capture: PointerCapture::new(),
            wheel_step,
            should_quit: false,
            rendered_threads: Vec::new(),
        }
    }

    /// An app with a single open `main` thread, for tests.
    #[must_use]
    pub fn test_default() -> Self {
        let mut app = Self::new(User::new("tester"), 3.0);
        let main = app.create_thread(Some("main".to_owned()));
        app.open_thread(main);
        app
    }

    #[must_use]
    pub fn capture(&self) -> &PointerCapture {
        &self.capture
    }

    #[must_use]
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// Edit the prompt's text. Attachment is managed through the registry.
    pub fn prompt_input_mut(&mut self) -> &mut super::InputState {
        self.prompt.input_mut()
    }

    pub fn set_prompt_observer(&mut self, observer: super::prompt::PromptObserver) {
        self.prompt.set_observer(observer);
    }

    #[must_use]
    pub fn rendered_thread_at(&self, column: u16, row: u16) -> Option<RenderedThread> {
        self.rendered_threads.iter().copied().find(|t| contains(t.column, column, row))
    }
}

pub(crate) fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

#[cfg(test)]
mod tests {
    // =====
    // TESTS: 5
    // =====

    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn time_label_pads_minutes_only() {
        let t = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 0).unwrap();
        let msg = Message::system("x").at(t);
        assert_eq!(msg.time_label(), "7:05");
        let t = Local.with_ymd_and_hms(2024, 3, 9, 23, 41, 0).unwrap();
        assert_eq!(Message::system("x").at(t).time_label(), "23:41");
    }

    #[test]
    fn chat_message_has_author() {
        let msg = Message::chat(User::new("ada"), "hi");
        assert_eq!(msg.author(), Some(&User::new("ada")));
        assert_eq!(msg.body(), "hi");
        assert!(!msg.is_system());
    }

    #[test]
    fn system_message_has_no_author() {
        let msg = Message::system("notice");
        assert_eq!(msg.author(), None);
        assert!(msg.is_system());
        assert_eq!(msg.kind(), &MessageKind::System);
    }

    #[test]
    fn ids_are_distinct() {
        assert_ne!(ThreadId::new(), ThreadId::new());
        assert_ne!(Message::system("a").id(), Message::system("a").id());
    }

    #[test]
    fn rendered_thread_lookup_uses_column() {
        let mut app = App::test_default();
        let id = app.active_id().unwrap();
        app.rendered_threads = vec![RenderedThread {
            id,
            column: Rect::new(0, 0, 10, 10),
            content: Rect::new(0, 1, 9, 9),
            track: Rect::new(9, 1, 1, 9),
        }];
        assert_eq!(app.rendered_thread_at(3, 3).map(|t| t.id), Some(id));
        assert_eq!(app.rendered_thread_at(10, 3), None);
    }
}
