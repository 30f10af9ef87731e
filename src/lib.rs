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

pub mod app;
pub mod error;
pub mod scroll;
pub mod ui;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hoth", about = "Threaded terminal chat")]
pub struct Cli {
    /// Name shown on your messages (defaults to $USER)
    #[arg(long, short)]
    pub user: Option<String>,

    /// Thread to open at startup; repeat for more columns
    #[arg(long = "thread", short = 't', value_name = "NAME", default_value = "main")]
    pub thread: Vec<String>,

    /// Rows scrolled per mouse wheel notch
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..))]
    pub wheel_lines: u16,

    /// Write tracing output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}

impl Cli {
    /// `--user`, then `$USER`, then `$USERNAME`, then "anonymous".
    #[must_use]
    pub fn user_name(&self) -> String {
        self.user
            .clone()
            .filter(|u| !u.trim().is_empty())
            .or_else(|| std::env::var("USER").ok().filter(|u| !u.is_empty()))
            .or_else(|| std::env::var("USERNAME").ok().filter(|u| !u.is_empty()))
            .unwrap_or_else(|| "anonymous".to_owned())
    }
}
