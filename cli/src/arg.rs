// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};
use clap_num::number_range;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Arguments shared by the view commands.
#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn date() -> Arg {
        arg!(-d --date [DATE] "Date to view (YYYY-MM-DD), defaults to today")
            .value_parser(value_parser!(NaiveDate))
    }

    pub fn get_date(matches: &ArgMatches) -> Option<NaiveDate> {
        matches.get_one("date").copied()
    }

    pub fn events() -> Arg {
        arg!(-e --events <FILE> "Path to a JSON file holding the event list")
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn get_events(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("events")
            .cloned()
            .unwrap_or_default()
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show placement geometry in table output")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }
}

/// Arguments specific to views with an all-day banner.
#[derive(Debug, Clone, Copy)]
pub struct BannerArgs;

impl BannerArgs {
    pub fn expanded() -> Arg {
        arg!(--expanded "Show every banner row instead of capping them")
    }

    pub fn get_expanded(matches: &ArgMatches) -> bool {
        matches.get_flag("expanded")
    }

    pub fn max_rows() -> Arg {
        arg!(--"max-rows" [N] "Banner rows shown while collapsed, overriding the config")
            .value_parser(banner_rows_in_range)
    }

    pub fn get_max_rows(matches: &ArgMatches) -> Option<usize> {
        matches.get_one("max-rows").copied()
    }
}

fn banner_rows_in_range(s: &str) -> Result<usize, String> {
    number_range(s, 1, 16)
}
