// SPDX-FileCopyrightText: 2026 The weekplan authors
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_event;
mod cmd_generate_completion;
mod cmd_show;
mod config;
mod day_view;
mod event_formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
