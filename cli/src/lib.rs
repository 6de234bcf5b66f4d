// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for the calgrid layout engine: loads a JSON event
//! file, runs the requested view's packer, and prints the placement records
//! as an ASCII grid, a table, or JSON.

mod arg;
mod cli;
mod cmd_day;
mod cmd_generate_completion;
mod cmd_month;
mod cmd_week;
mod config;
mod event_label;
mod layout_formatter;
mod render;
mod store;
mod table;

pub use crate::{
    cli::{Cli, Commands, run},
    config::Config,
    event_label::{HourCycle, ViewKind, event_label},
};
