// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use calgrid_core::{BannerLayout, TimedLayout, layout_banner, layout_day, week_of};
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
pub struct CmdWeek {
    pub date: Option<NaiveDate>,
    pub events: PathBuf,
    pub expanded: bool,
    pub max_rows: Option<usize>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

/// JSON shape of a laid-out week: the banner plus one column layout per day.
#[derive(Debug, Serialize)]
struct WeekLayout {
    days: Vec<NaiveDate>,
    banner: BannerLayout,
    columns: Vec<DayColumns>,
}

#[derive(Debug, Serialize)]
struct DayColumns {
    day: NaiveDate,
    layouts: Vec<TimedLayout>,
}

impl CmdWeek {
    pub const NAME: &str = "week";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("w")
            .about("Show the all-day banner and day columns for a week")
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
        tracing::debug!(?self, "rendering week view...");
        let events = load_events(&self.events)?;

        let selected = self.date.unwrap_or_else(|| Local::now().date_naive());
        let days = week_of(selected, config.layout.week_start).to_vec();
        let max_rows = self.max_rows.unwrap_or(config.layout.max_banner_rows);

        let banner = layout_banner(&days, &events, self.expanded, max_rows);
        let columns: Vec<DayColumns> = days
            .iter()
            .map(|&day| DayColumns {
                day,
                layouts: layout_day(&events, day),
            })
            .collect();

        match self.output_format {
            OutputFormat::Json => {
                let week = WeekLayout {
                    days,
                    banner,
                    columns,
                };
                println!("{}", serde_json::to_string_pretty(&week)?);
            }
            OutputFormat::Table => {
                print_week(&days, &banner, &columns, config, self.verbose);
            }
        }
        Ok(())
    }
}

fn print_week(
    days: &[NaiveDate],
    banner: &BannerLayout,
    columns: &[DayColumns],
    config: &Config,
    verbose: bool,
) {
    let rendered = render_banner(banner, days);
    if !rendered.is_empty() {
        print!("{rendered}");
        println!();
    }

    let mut formatter = LayoutFormatter::new(ViewKind::Week, config.hour_cycle);
    if verbose {
        formatter = formatter.with_geometry();
    }

    let mut any = false;
    for column in columns {
        if column.layouts.is_empty() {
            continue;
        }
        any = true;
        println!(" {} {}", "►".green(), column.day.format("%a %Y-%m-%d"));
        print!("{}", formatter.format(&column.layouts));
    }
    if !any {
        println!("{}", "No timed events found".italic());
    }
}
