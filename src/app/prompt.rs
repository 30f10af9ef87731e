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

use super::ThreadId;
use super::input::InputState;

pub const PLACEHOLDER: &str = "Say something\u{2026}";

/// Attachment changes, in the order they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEvent {
    Detached(ThreadId),
    Attached(ThreadId),
}

pub type PromptObserver = Box<dyn FnMut(PromptEvent)>;

/// The single text-entry surface. Lives in at most one thread at a time.
pub struct Prompt {
    input: InputState,
    thread: Option<ThreadId>,
    observer: Option<PromptObserver>,
}

impl std::fmt::Debug for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prompt")
            .field("input", &self.input)
            .field("thread", &self.thread)
            .finish_non_exhaustive()
    }
}

impl Prompt {
    #[must_use]
    pub fn new() -> Self {
        Self { input: InputState::new(), thread: None, observer: None }
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Thread whose message list currently ends with the prompt.
    #[must_use]
    pub fn thread(&self) -> Option<ThreadId> {
        self.thread
    }

    #[must_use]
    pub fn is_attached_to(&self, thread: ThreadId) -> bool {
        self.thread == Some(thread)
    }

    pub fn set_observer(&mut self, observer: PromptObserver) {
        self.observer = Some(observer);
    }

    /// Move into `thread`, leaving the previous one first.
    ///
    /// Both steps happen inside this call, so nobody can see the prompt in
    /// two threads. Attaching to the current thread does nothing.
    pub fn attach_to(&mut self, thread: ThreadId) {
        if self.is_attached_to(thread) {
            return;
        }
        self.detach();
        self.thread = Some(thread);
        tracing::debug!(%thread, "prompt attached");
        self.emit(PromptEvent::Attached(thread));
    }

    /// Leave the current thread, if any.
    pub fn detach(&mut self) {
        if let Some(thread) = self.thread.take() {
            tracing::debug!(%thread, "prompt detached");
            self.emit(PromptEvent::Detached(thread));
        }
    }

    /// Detach only if attached to `thread`.
    pub fn detach_from(&mut self, thread: ThreadId) {
        if self.is_attached_to(thread) {
            self.detach();
        }
    }

    /// Enter pressed: returns the text if there is any. The input is cleared
    /// either way.
    pub fn take_submission(&mut self) -> Option<String> {
        let text = self.input.take();
        (!text.is_empty()).then_some(text)
    }

    fn emit(&mut self, event: PromptEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer(event);
        }
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}
