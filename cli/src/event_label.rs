// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calgrid_core::{Event, EventTime};
use chrono::NaiveTime;

/// Whether times render as 12-hour or 24-hour clock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourCycle {
    /// 12-hour clock with AM/PM markers.
    H12,

    /// 24-hour clock.
    #[default]
    H24,
}

impl HourCycle {
    fn format(self, time: NaiveTime) -> String {
        match self {
            HourCycle::H12 => time.format("%-I:%M %p").to_string(),
            HourCycle::H24 => time.format("%H:%M").to_string(),
        }
    }
}

/// The calendar view a label is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Month,
    Week,
    Day,
}

/// Human-readable label for an event: the tooltip/title text of a rendered
/// bar or block. Month cells lead with the date; day and week blocks append
/// the time span instead.
pub fn event_label(event: &Event, view: ViewKind, hour_cycle: HourCycle) -> String {
    match view {
        ViewKind::Month => format!("{} - {}", event.start_day(), event.title),
        ViewKind::Week | ViewKind::Day => match time_span(event, hour_cycle) {
            Some(span) => format!("{} ({span})", event.title),
            None => event.title.clone(),
        },
    }
}

fn time_span(event: &Event, hour_cycle: HourCycle) -> Option<String> {
    let start = event.start.time()?;
    match event.end.as_ref().and_then(EventTime::time) {
        Some(end) => Some(format!(
            "{} - {}",
            hour_cycle.format(start),
            hour_cycle.format(end)
        )),
        None => Some(hour_cycle.format(start)),
    }
}
