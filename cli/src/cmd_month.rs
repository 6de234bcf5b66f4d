// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use calgrid_core::MonthGrid;
use chrono::{Local, NaiveDate};
use clap::{ArgMatches, Command};

use crate::arg::{CommonArgs, OutputFormat};
use crate::config::Config;
use crate::render::render_month;
use crate::store::load_events;

#[derive(Debug, Clone)]
pub struct CmdMonth {
    pub date: Option<NaiveDate>,
    pub events: PathBuf,
    pub output_format: OutputFormat,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("m")
            .about("Show the month grid around a date")
            .arg(CommonArgs::date())
            .arg(CommonArgs::events())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: CommonArgs::get_date(matches),
            events: CommonArgs::get_events(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "rendering month grid...");
        let events = load_events(&self.events)?;

        let today = Local::now().date_naive();
        let selected = self.date.unwrap_or(today);
        let grid = MonthGrid::generate(selected, today, &events, config.layout.week_start);

        match self.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&grid)?),
            OutputFormat::Table => print!("{}", render_month(&grid)),
        }
        Ok(())
    }
}
