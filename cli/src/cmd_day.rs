// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use calgrid_core::{BannerLayout, TimedLayout, layout_banner, layout_day};
use chrono::{Local, NaiveDate};
use clap::{ArgMatches, Command};
use colored::Colorize;
use serde::Serialize;

use crate::arg::{BannerArgs, CommonArgs, OutputFormat};
use crate::config::Config;
use crate::event_label::ViewKind;
use crate::layout_formatter::LayoutFormatter;
use crate::render::render_banner;
use crate::store::load_events;

#[derive(Debug, Clone)]
pub struct CmdDay {
    pub date: Option<NaiveDate>,
    pub events: PathBuf,
    pub expanded: bool,
    pub max_rows: Option<usize>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

/// JSON shape of a laid-out day: its banner and its packed columns.
#[derive(Debug, Serialize)]
struct DayLayout {
    day: NaiveDate,
    banner: BannerLayout,
    layouts: Vec<TimedLayout>,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("d")
            .about("Show the all-day banner and packed columns for a single day")
            .arg(CommonArgs::date())
            .arg(CommonArgs::events())
            .arg(BannerArgs::expanded())
            .arg(BannerArgs::max_rows())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: CommonArgs::get_date(matches),
            events: CommonArgs::get_events(matches),
            expanded: BannerArgs::get_expanded(matches),
            max_rows: BannerArgs::get_max_rows(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "rendering day view...");
        let events = load_events(&self.events)?;

        let day = self.date.unwrap_or_else(|| Local::now().date_naive());
        let days = [day];
        let max_rows = self.max_rows.unwrap_or(config.layout.max_banner_rows);

        let banner = layout_banner(&days, &events, self.expanded, max_rows);
        let layouts = layout_day(&events, day);

        match self.output_format {
            OutputFormat::Json => {
                let output = DayLayout {
                    day,
                    banner,
                    layouts,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                let rendered = render_banner(&banner, &days);
                if !rendered.is_empty() {
                    print!("{rendered}");
                    println!();
                }

                if layouts.is_empty() {
                    println!("{}", "No timed events found".italic());
                } else {
                    let mut formatter = LayoutFormatter::new(ViewKind::Day, config.hour_cycle);
                    if self.verbose {
                        formatter = formatter.with_geometry();
                    }
                    print!("{}", formatter.format(&layouts));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdDay::command());

        let matches = cmd
            .try_get_matches_from([
                "test",
                "day",
                "-d",
                "2025-03-10",
                "-e",
                "events.json",
                "--output-format",
                "json",
            ])
            .unwrap();
        let sub_matches = matches.subcommand_matches("day").unwrap();
        let parsed = CmdDay::from(sub_matches);

        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2025, 3, 10));
        assert_eq!(parsed.output_format, OutputFormat::Json);
        assert!(!parsed.expanded);
    }

    #[test]
    fn test_parse_day_alias() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdDay::command());

        let matches = cmd
            .try_get_matches_from(["test", "d", "-e", "events.json", "--expanded"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("day").unwrap();
        let parsed = CmdDay::from(sub_matches);
        assert!(parsed.expanded);
    }
}
