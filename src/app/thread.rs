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

use super::{Message, MessageId, ThreadId};
use crate::scroll::{PointerCapture, ScrollableThreadView};

/// An ordered list of messages (newest last) with its own scroll view.
#[derive(Debug)]
pub struct Thread {
    id: ThreadId,
    name: Option<String>,
    messages: Vec<Message>,
    view: ScrollableThreadView,
}

impl Thread {
    #[must_use]
    pub fn new(name: Option<String>, capture: PointerCapture) -> Self {
        let id = ThreadId::new();
        Self {
            id,
            name: normalize_name(name),
            messages: Vec::new(),
            view: ScrollableThreadView::new(id, capture),
        }
    }

    #[must_use]
    pub fn id(&self) -> ThreadId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Named threads draw a title row; an empty name counts as no name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = normalize_name(name);
        tracing::debug!(thread = %self.id, name = ?self.name, "thread renamed");
    }

    #[must_use]
    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn message(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id() == id)
    }

    #[must_use]
    pub fn view(&self) -> &ScrollableThreadView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ScrollableThreadView {
        &mut self.view
    }

    pub(super) fn rebind_capture(&mut self, capture: PointerCapture) {
        self.view.rebind_capture(capture);
    }

    /// Add a message after all existing ones (and so before the prompt slot).
    ///
    /// The caller reports the new content height through the view once the
    /// message has been laid out.
    pub fn append(&mut self, message: Message) -> MessageId {
        let id = message.id();
        self.messages.push(message);
        id
    }

    /// Append and force the view to follow the newest content.
    pub fn reply(&mut self, message: Message) -> MessageId {
        self.view.follow_newest();
        self.append(message)
    }

    /// Unlink a message. Unknown ids are a no-op.
    pub fn remove_message(&mut self, id: MessageId) -> Option<Message> {
        let pos = self.messages.iter().position(|m| m.id() == id)?;
        Some(self.messages.remove(pos))
    }
}

fn normalize_name(name: Option<String>) -> Option<String> {
    name.filter(|n| !n.trim().is_empty())
}
