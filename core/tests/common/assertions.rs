// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calgrid_core::{BannerLayout, DaySlot, MonthGrid, TimedLayout};
use chrono::Timelike;

/// Every rendered bar in the month grid must be backed by spacers on the
/// remaining days of its span, and no cell may hold two bars in one lane by
/// construction of `Vec<DaySlot>`. Checks the spacer bookkeeping explicitly.
#[allow(dead_code)]
pub fn assert_segments_consistent(grid: &MonthGrid) {
    for week in &grid.weeks {
        for (day_idx, cell) in week.iter().enumerate() {
            for (slot, lane) in cell.slots.iter().enumerate() {
                let DaySlot::Segment(segment) = lane else {
                    continue;
                };
                assert!(
                    segment.start_in_week == cell.date,
                    "segment for {:?} must start at its emitting cell",
                    segment.event.title
                );
                let span = segment.span_days() as usize;
                assert!(
                    day_idx + span <= 7,
                    "segment for {:?} runs past the week row",
                    segment.event.title
                );
                for follow in &week[day_idx + 1..day_idx + span] {
                    assert_eq!(
                        follow.slots.get(slot),
                        Some(&DaySlot::Spacer),
                        "day {} should hold a spacer for {:?} in slot {}",
                        follow.date,
                        segment.event.title,
                        slot
                    );
                }
            }
        }
    }
}

/// No two blocks sharing a column within a cluster may overlap in time.
/// Rendered heights are floored, so overlap is judged on the logical minute
/// ranges recomputed from the events themselves.
#[allow(dead_code)]
pub fn assert_columns_disjoint(layouts: &[TimedLayout]) {
    for (i, a) in layouts.iter().enumerate() {
        for b in &layouts[i + 1..] {
            if a.column != b.column {
                continue;
            }
            let disjoint = logical_end(a) <= b.top || logical_end(b) <= a.top;
            assert!(
                disjoint,
                "{:?} and {:?} share column {} and overlap",
                a.event.title, b.event.title, a.column
            );
        }
    }
}

fn logical_end(layout: &TimedLayout) -> u32 {
    let end = layout
        .event
        .end
        .as_ref()
        .and_then(|e| e.time())
        .map_or(layout.top, |t| t.hour() * 60 + t.minute());
    if end <= layout.top { layout.top + 1 } else { end }
}

/// No two bars in one banner row may overlap in day indices.
#[allow(dead_code)]
pub fn assert_banner_rows_disjoint(layout: &BannerLayout) {
    for (i, a) in layout.events.iter().enumerate() {
        for b in &layout.events[i + 1..] {
            if a.row != b.row {
                continue;
            }
            let disjoint = a.end_index < b.start_index || b.end_index < a.start_index;
            assert!(
                disjoint,
                "{:?} and {:?} share row {} and overlap",
                a.event.title, b.event.title, a.row
            );
        }
    }
}
