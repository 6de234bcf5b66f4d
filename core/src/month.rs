// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Reverse;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::datetime::{days_between, weeks_of_month};
use crate::event::Event;

/// A month of calendar days with every event assigned a vertical slot, ready
/// for cell-based rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGrid {
    /// Week rows in chronological order; each row holds exactly seven cells.
    pub weeks: Vec<Vec<DayCell>>,
}

/// A single day cell of the month grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    /// The calendar date of this cell.
    pub date: NaiveDate,

    /// Whether the date belongs to the selected month. Padding days of the
    /// adjacent months still receive event placement.
    pub in_month: bool,

    /// Whether the date is the caller's "today". Never set on padding days.
    pub is_today: bool,

    /// Vertical lanes of the cell, ordered by slot index.
    pub slots: Vec<DaySlot>,

    /// Events genuinely active on this day. Spacers and empty lanes are
    /// layout artifacts and do not count; overflow chips are computed from
    /// this number.
    pub event_count: usize,
}

/// One vertical lane in a day cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DaySlot {
    /// An event bar starts rendering in this cell.
    Segment(EventSegment),

    /// The lane is held by an event drawn in an earlier cell of the same
    /// row; the placeholder keeps later lanes vertically aligned.
    Spacer,

    /// No event occupies the lane on this day.
    Empty,
}

/// An event clipped to the portion of the week row it occupies, starting at
/// the cell that emits it. The rendered bar spans
/// `start_in_week..=end_in_week` day cells while the underlying event keeps
/// its full range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSegment {
    /// The event this segment belongs to, with its unclipped range.
    pub event: Event,

    /// First day cell covered by the rendered bar.
    pub start_in_week: NaiveDate,

    /// Last day cell covered by the rendered bar, clamped to the row end.
    pub end_in_week: NaiveDate,
}

impl EventSegment {
    /// Width of the rendered bar in day cells.
    pub fn span_days(&self) -> i64 {
        days_between(self.start_in_week, self.end_in_week) + 1
    }
}

impl MonthGrid {
    /// Lay out `events` over the month containing `selected`.
    ///
    /// The grid covers every week row intersecting the month. `today` is the
    /// caller's notion of the current date. Events are placed greedily into
    /// the lowest free slot per week row, longest-first among events starting
    /// the same day, so bars stay aligned across the row and continue across
    /// week boundaries as separate clipped segments.
    pub fn generate(
        selected: NaiveDate,
        today: NaiveDate,
        events: &[Event],
        week_start: Weekday,
    ) -> Self {
        let mut by_start: Vec<&Event> = events.iter().collect();
        by_start.sort_by_key(|e| e.start_day());

        let weeks = weeks_of_month(selected, week_start)
            .iter()
            .map(|days| layout_week(days, &by_start, selected, today))
            .collect();
        Self { weeks }
    }
}

fn layout_week(
    days: &[NaiveDate; 7],
    events: &[&Event],
    selected: NaiveDate,
    today: NaiveDate,
) -> Vec<DayCell> {
    let row_start = days[0];
    let row_end = days[6];

    // Events whose day range crosses this row, re-sorted so that among events
    // starting the same day the longest one claims the lowest slot. Placing
    // long bars first keeps them on stable top lanes and reduces
    // fragmentation of the slots below.
    let mut week_events: Vec<&Event> = events
        .iter()
        .copied()
        .filter(|e| e.start_day() <= row_end && e.end_day() >= row_start)
        .collect();
    week_events.sort_by_key(|e| (e.start_day(), Reverse(e.duration_days())));

    // Greedy slot assignment over a day-by-slot occupancy table. The slot of
    // each event is kept in a side table indexed by its position in
    // `week_events`; input events are never touched.
    let mut occupied: [Vec<Option<usize>>; 7] = Default::default();
    let mut slot_of = vec![0usize; week_events.len()];

    for (idx, event) in week_events.iter().enumerate() {
        event.warn_if_inverted();

        let lo = days_between(row_start, event.start_day()).max(0) as usize;
        let hi = (days_between(row_start, event.end_day()).min(6)) as usize;

        let mut slot = 0;
        while !(lo..=hi).all(|d| occupied[d].get(slot).is_none_or(Option::is_none)) {
            slot += 1;
        }

        for day in &mut occupied[lo..=hi] {
            if day.len() <= slot {
                day.resize(slot + 1, None);
            }
            day[slot] = Some(idx);
        }
        slot_of[idx] = slot;
    }

    days.iter()
        .enumerate()
        .map(|(day_idx, &date)| {
            let active: Vec<usize> = (0..week_events.len())
                .filter(|&i| week_events[i].start_day() <= date && week_events[i].end_day() >= date)
                .collect();

            let lanes = active
                .iter()
                .map(|&i| slot_of[i] + 1)
                .max()
                .unwrap_or_default();

            let slots = (0..lanes)
                .map(|slot| {
                    let owner = active.iter().copied().find(|&i| slot_of[i] == slot);
                    match owner {
                        Some(i) => {
                            let event = week_events[i];
                            // Render the bar where the event starts, or at the
                            // row start for events carried over from an
                            // earlier week.
                            if event.start_day() == date || day_idx == 0 {
                                DaySlot::Segment(EventSegment {
                                    event: event.clone(),
                                    start_in_week: date,
                                    end_in_week: event.end_day().min(row_end),
                                })
                            } else {
                                DaySlot::Spacer
                            }
                        }
                        None => DaySlot::Empty,
                    }
                })
                .collect();

            let in_month = date.year() == selected.year() && date.month() == selected.month();
            DayCell {
                date,
                in_month,
                is_today: in_month && date == today,
                slots,
                event_count: active.len(),
            }
        })
        .collect()
}
