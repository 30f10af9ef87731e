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

use super::App;

/// Leading character that marks prompt input as a command.
pub const COMMAND_PREFIX: char = '/';

/// Fixed answer to every command until commands exist.
pub const COMMAND_STUB_NOTICE: &str = "Commands are not implemented";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Command text without the prefix.
    Command(String),
    Chat(String),
}

#[must_use]
pub fn classify(text: &str) -> Submission {
    match text.strip_prefix(COMMAND_PREFIX) {
        Some(command) => Submission::Command(command.to_owned()),
        None => Submission::Chat(text.to_owned()),
    }
}

/// Enter in the prompt.
pub(super) fn submit_input(app: &mut App) {
    let Some(text) = app.prompt.take_submission() else {
        return;
    };
    if app.active.is_none() {
        tracing::warn!("submit with no open thread");
        return;
    }
    app.submit(&text);
}
