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

use super::input_submit::{COMMAND_STUB_NOTICE, Submission, classify};
use super::{App, Message, MessageId, Thread, ThreadId};

impl App {
    #[must_use]
    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    #[must_use]
    pub fn thread(&self, id: ThreadId) -> Option<&Thread> {
        self.threads.iter().find(|t| t.id() == id)
    }

    pub fn thread_mut(&mut self, id: ThreadId) -> Option<&mut Thread> {
        self.threads.iter_mut().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn active_id(&self) -> Option<ThreadId> {
        self.active
    }

    #[must_use]
    pub fn active_thread(&self) -> Option<&Thread> {
        self.active.and_then(|id| self.thread(id))
    }

    pub fn active_thread_mut(&mut self) -> Option<&mut Thread> {
        let id = self.active?;
        self.thread_mut(id)
    }

    /// Create an empty thread at the end of the collection. Does not open it.
    pub fn create_thread(&mut self, name: Option<String>) -> ThreadId {
        let thread = Thread::new(name, self.capture.clone());
        self.adopt_thread(thread)
    }

    /// Take ownership of a thread built elsewhere (possibly removed from
    /// another app) and append it. Does not open it.
    pub fn adopt_thread(&mut self, mut thread: Thread) -> ThreadId {
        let id = thread.id();
        if self.thread(id).is_some() {
            return id;
        }
        thread.rebind_capture(self.capture.clone());
        tracing::debug!(thread = %id, name = ?thread.name(), "thread added");
        self.threads.push(thread);
        id
    }

    /// Make `id` the active thread and move the prompt into it.
    ///
    /// Returns `false` for threads this app does not own.
    pub fn open_thread(&mut self, id: ThreadId) -> bool {
        if self.thread(id).is_none() {
            tracing::warn!(thread = %id, "cannot open a thread this app does not own");
            return false;
        }
        self.active = Some(id);
        self.prompt.attach_to(id);
        tracing::debug!(thread = %id, "thread opened");
        true
    }

    /// Adopt and open in one step.
    pub fn open_new(&mut self, thread: Thread) -> ThreadId {
        let id = self.adopt_thread(thread);
        self.open_thread(id);
        id
    }

    /// Unlink a thread and hand it back.
    ///
    /// Removing the active thread clears the active reference and detaches
    /// the prompt; someone has to open another thread before sending works
    /// again. A drag in progress on the thread is abandoned.
    pub fn remove_thread(&mut self, id: ThreadId) -> Option<Thread> {
        let pos = self.threads.iter().position(|t| t.id() == id)?;
        let mut thread = self.threads.remove(pos);
        thread.view_mut().cancel_drag();
        if self.active == Some(id) {
            self.active = None;
        }
        self.prompt.detach_from(id);
        self.rendered_threads.retain(|r| r.id != id);
        tracing::debug!(thread = %id, "thread removed");
        Some(thread)
    }

    /// Open the next (or previous) thread in collection order.
    pub fn cycle_active(&mut self, forward: bool) -> Option<ThreadId> {
        let count = self.threads.len();
        if count == 0 {
            return None;
        }
        let current = self.active.and_then(|id| self.threads.iter().position(|t| t.id() == id));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        let id = self.threads[next].id();
        self.open_thread(id);
        Some(id)
    }

    /// Append to the active thread, just above the prompt, and scroll to it.
    pub fn post_from_prompt(&mut self, message: Message) -> Option<MessageId> {
        let Some(thread) = self.active_thread_mut() else {
            tracing::warn!("no active thread; message dropped");
            return None;
        };
        Some(thread.reply(message))
    }

    /// Answer in whichever thread holds the prompt.
    pub fn reply(&mut self, message: Message) -> Option<MessageId> {
        let Some(id) = self.prompt.thread() else {
            tracing::warn!("prompt is not attached; reply dropped");
            return None;
        };
        self.thread_mut(id).map(|thread| thread.reply(message))
    }

    /// Route submitted prompt text: commands get the stub notice, anything
    /// else becomes a chat message from the current user.
    pub fn submit(&mut self, text: &str) -> Option<MessageId> {
        match classify(text) {
            Submission::Command(command) => {
                tracing::debug!(command, "command submitted");
                self.reply(Message::system(COMMAND_STUB_NOTICE))
            }
            Submission::Chat(body) => {
                let author = self.user.clone();
                self.post_from_prompt(Message::chat(author, body))
            }
        }
    }

    /// Move a message into thread `to`, unlinking it from wherever it is.
    pub fn move_message(&mut self, message: MessageId, to: ThreadId) -> bool {
        if self.thread(to).is_none() {
            return false;
        }
        let Some(taken) = self.threads.iter_mut().find_map(|t| t.remove_message(message)) else {
            return false;
        };
        if let Some(target) = self.thread_mut(to) {
            target.append(taken);
        }
        true
    }

    /// End whatever scrollbar drag holds the pointer (focus lost).
    pub fn cancel_drag(&mut self) {
        if let Some(owner) = self.capture.owner()
            && let Some(thread) = self.thread_mut(owner)
        {
            thread.view_mut().cancel_drag();
        }
    }
}
