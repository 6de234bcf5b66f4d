// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! ASCII renderers for the month grid and the all-day banner. Cells have a
//! fixed display width; titles are truncated by terminal width, not bytes.

use calgrid_core::{BannerLayout, DayCell, DaySlot, MonthGrid};
use chrono::{Datelike, NaiveDate};
use colored::Colorize;
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CELL_WIDTH: usize = 14;

/// Slot lines shown per month cell before falling back to a "+K more" chip.
const MAX_CELL_EVENTS: usize = 3;

/// Render the month grid: a header of weekday names, then per week a line of
/// day numbers and the stacked event lanes. Today is highlighted, padding
/// days are dimmed.
pub fn render_month(grid: &MonthGrid) -> String {
    let mut out = String::new();
    let Some(first_week) = grid.weeks.first() else {
        return out;
    };

    for cell in first_week {
        let name = cell.date.format("%a").to_string();
        let _ = write!(out, "{}", fit_cell(&name, CELL_WIDTH).bold());
    }
    out.push('\n');
    out.push_str(&"-".repeat(CELL_WIDTH * 7));
    out.push('\n');

    for week in &grid.weeks {
        render_day_numbers(&mut out, week);

        let lanes = week
            .iter()
            .map(|c| c.slots.len().min(MAX_CELL_EVENTS))
            .max()
            .unwrap_or_default();
        for lane in 0..lanes {
            for cell in week {
                let text = match cell.slots.get(lane) {
                    Some(DaySlot::Segment(segment)) => fit_cell(&segment.event.title, CELL_WIDTH),
                    Some(DaySlot::Spacer) => continuation_cell(),
                    _ => " ".repeat(CELL_WIDTH),
                };
                out.push_str(&text);
            }
            out.push('\n');
        }

        for cell in week {
            let chip = match hidden_in_cell(cell) {
                0 => " ".repeat(CELL_WIDTH),
                hidden => fit_cell(&format!("+{hidden} more"), CELL_WIDTH),
            };
            let _ = write!(out, "{}", chip.italic());
        }
        out.push('\n');
        out.push('\n');
    }
    out
}

fn render_day_numbers(out: &mut String, week: &[DayCell]) {
    for cell in week {
        let label = fit_cell(&cell.date.day().to_string(), CELL_WIDTH);
        if cell.is_today {
            let _ = write!(out, "{}", label.bold().green());
        } else if cell.in_month {
            out.push_str(&label);
        } else {
            let _ = write!(out, "{}", label.dimmed());
        }
    }
    out.push('\n');
}

/// Events pushed out of a cell once its lanes are capped, mirroring the
/// banner's hidden accounting: spacers still stand for a rendered event, so
/// only genuinely invisible events count.
fn hidden_in_cell(cell: &DayCell) -> usize {
    if cell.slots.len() <= MAX_CELL_EVENTS && cell.event_count <= MAX_CELL_EVENTS {
        return 0;
    }
    let visible_real = cell
        .slots
        .iter()
        .take(MAX_CELL_EVENTS)
        .filter(|s| !matches!(s, DaySlot::Empty))
        .count();
    cell.event_count.saturating_sub(visible_real)
}

/// Render the packed all-day banner above a day or week view: one line per
/// visible row, then the per-day "+K more" chips.
pub fn render_banner(layout: &BannerLayout, days: &[NaiveDate]) -> String {
    let mut out = String::new();
    if layout.row_count == 0 || days.is_empty() {
        return out;
    }

    for row in 0..layout.visible_rows {
        let mut index = 0;
        while index < days.len() {
            let bar = layout
                .events
                .iter()
                .find(|b| b.row == row && b.start_index == index);
            match bar {
                Some(bar) => {
                    let cells = bar.end_index - bar.start_index + 1;
                    let mut title = bar.event.title.clone();
                    if bar.clipped_left {
                        title = format!("◂{title}");
                    }
                    if bar.clipped_right {
                        title.push('▸');
                    }
                    out.push_str(&fit_bar(&title, CELL_WIDTH * cells));
                    index += cells;
                }
                None => {
                    let covered = layout
                        .events
                        .iter()
                        .any(|b| b.row == row && b.start_index < index && b.end_index >= index);
                    // covered cells were emitted by the bar's start cell
                    if !covered {
                        out.push_str(&" ".repeat(CELL_WIDTH));
                    }
                    index += 1;
                }
            }
        }
        out.push('\n');
    }

    if layout.hidden_counts.iter().any(|&c| c > 0) {
        for &hidden in &layout.hidden_counts {
            let chip = match hidden {
                0 => " ".repeat(CELL_WIDTH),
                hidden => fit_cell(&format!("+{hidden} more"), CELL_WIDTH),
            };
            let _ = write!(out, "{}", chip.italic());
        }
        out.push('\n');
    }
    out
}

/// Truncate to the display width, reserving one column for an ellipsis, and
/// pad to exactly `width` columns.
fn fit_cell(s: &str, width: usize) -> String {
    let text = s.trim_end();
    if text.width() < width {
        return format!("{text}{}", " ".repeat(width - text.width()));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width.saturating_sub(2) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    format!("{out}{}", " ".repeat(width - used))
}

/// A bar spanning multiple cells: the title followed by a rule filling the
/// remaining span.
fn fit_bar(title: &str, width: usize) -> String {
    let fitted = fit_cell(title, width);
    let text = fitted.trim_end();
    let used = text.width();
    format!("{text}{}", "─".repeat(width.saturating_sub(used + 1)) + " ")
}

fn continuation_cell() -> String {
    format!("{} ", "─".repeat(CELL_WIDTH - 1))
}
