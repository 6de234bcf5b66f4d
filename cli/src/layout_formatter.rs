// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use calgrid_core::TimedLayout;
use colored::Color;

use crate::event_label::{HourCycle, ViewKind, event_label};
use crate::table::{Column, PaddingDirection, Table};

/// Formats the column-packed layouts of one day as an aligned table.
#[derive(Debug)]
pub struct LayoutFormatter {
    columns: Vec<LayoutColumn>,
}

impl LayoutFormatter {
    pub fn new(view: ViewKind, hour_cycle: HourCycle) -> Self {
        Self {
            columns: vec![
                LayoutColumn::Placement(LayoutColumnPlacement),
                LayoutColumn::Label(LayoutColumnLabel { view, hour_cycle }),
            ],
        }
    }

    /// Append the raw placement geometry, for callers debugging a layout.
    pub fn with_geometry(mut self) -> Self {
        self.columns
            .push(LayoutColumn::Geometry(LayoutColumnGeometry));
        self
    }

    pub fn format<'a>(&'a self, layouts: &'a [TimedLayout]) -> Display<'a> {
        Display {
            layouts,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    layouts: &'a [TimedLayout],
    formatter: &'a LayoutFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = Table {
            columns: self.formatter.columns.clone(),
            separator: "  ".to_string(),
            padding: true,
            data: self.layouts,
        };

        let mut buf = Vec::new();
        table.write_to(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

#[derive(Debug, Clone)]
pub enum LayoutColumn {
    Label(LayoutColumnLabel),
    Placement(LayoutColumnPlacement),
    Geometry(LayoutColumnGeometry),
}

impl Column<TimedLayout> for LayoutColumn {
    fn format(&self, data: &TimedLayout) -> String {
        match self {
            LayoutColumn::Label(a) => a.format(data),
            LayoutColumn::Placement(a) => a.format(data),
            LayoutColumn::Geometry(a) => a.format(data),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            LayoutColumn::Placement(_) => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &TimedLayout) -> Option<Color> {
        match self {
            LayoutColumn::Label(_) => data.event.color.as_deref().and_then(parse_color),
            _ => None,
        }
    }
}

/// The event label with its time span.
#[derive(Debug, Clone)]
pub struct LayoutColumnLabel {
    view: ViewKind,
    hour_cycle: HourCycle,
}

impl LayoutColumnLabel {
    fn format(&self, layout: &TimedLayout) -> String {
        event_label(&layout.event, self.view, self.hour_cycle)
    }
}

/// Column position within the cluster, 1-based.
#[derive(Debug, Clone)]
pub struct LayoutColumnPlacement;

impl LayoutColumnPlacement {
    fn format(&self, layout: &TimedLayout) -> String {
        format!("{}/{}", layout.column + 1, layout.total_columns)
    }
}

/// Raw geometry as handed to a renderer.
#[derive(Debug, Clone)]
pub struct LayoutColumnGeometry;

impl LayoutColumnGeometry {
    fn format(&self, layout: &TimedLayout) -> String {
        format!(
            "top {}px h {}px left {}% w {}%",
            layout.top, layout.height, layout.left, layout.width
        )
    }
}

/// Terminal color for the named event colors; hex and unknown names render
/// unstyled.
fn parse_color(name: &str) -> Option<Color> {
    match name.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" | "purple" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_core::{Event, layout_day};
    use chrono::NaiveDate;

    fn layouts() -> Vec<TimedLayout> {
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let events = [
            Event {
                id: None,
                title: "Standup".into(),
                start: day.and_hms_opt(9, 30, 0).unwrap().into(),
                end: Some(day.and_hms_opt(10, 0, 0).unwrap().into()),
                color: None,
            },
            Event {
                id: None,
                title: "Review".into(),
                start: day.and_hms_opt(9, 45, 0).unwrap().into(),
                end: Some(day.and_hms_opt(10, 30, 0).unwrap().into()),
                color: None,
            },
        ];
        layout_day(&events, day)
    }

    #[test]
    fn test_format_table() {
        colored::control::set_override(false);
        let formatter = LayoutFormatter::new(ViewKind::Day, HourCycle::H24);
        let output = formatter.format(&layouts()).to_string();
        assert_eq!(output, "1/2  Standup (09:30 - 10:00)\n2/2  Review (09:45 - 10:30)\n");
    }

    #[test]
    fn test_format_with_geometry() {
        colored::control::set_override(false);
        let formatter = LayoutFormatter::new(ViewKind::Day, HourCycle::H24).with_geometry();
        let output = formatter.format(&layouts()).to_string();
        assert!(output.contains("top 570px h 30px left 0% w 50%"));
        assert!(output.contains("top 585px h 45px left 50% w 50%"));
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Blue"), Some(Color::Blue));
        assert_eq!(parse_color("purple"), Some(Color::Magenta));
        assert_eq!(parse_color("#1a73e8"), None);
    }
}
