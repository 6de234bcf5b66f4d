// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Reverse;

use chrono::NaiveDate;
use serde::Serialize;

use crate::datetime::days_between;
use crate::event::Event;

/// Height of one banner row in pixels.
pub const BANNER_ROW_HEIGHT: u32 = 24;

const BANNER_PADDING: u32 = 4;
const BANNER_MIN_HEIGHT: u32 = 28;

/// A multi-day or all-day event stacked into a banner row over a visible day
/// range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerEvent {
    /// The event being placed, with its unclipped range.
    pub event: Event,

    /// Offset of the bar's first day in the visible day sequence.
    pub start_index: usize,

    /// Offset of the bar's last day in the visible day sequence, inclusive.
    pub end_index: usize,

    /// Banner row the bar was stacked into.
    pub row: usize,

    /// The event starts before the visible range; rendered with a cut-off
    /// left edge.
    pub clipped_left: bool,

    /// The event ends after the visible range; rendered with a cut-off right
    /// edge.
    pub clipped_right: bool,
}

/// The packed banner for a visible day range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerLayout {
    /// Bars in visible rows, in placement order.
    pub events: Vec<BannerEvent>,

    /// Per visible day, how many events were pushed out of sight by the row
    /// cap. All zeros when expanded. A day earns a "+K more" chip whenever
    /// its count is at least one.
    pub hidden_counts: Vec<usize>,

    /// Rows the stacking produced, visible or not.
    pub row_count: usize,

    /// Rows actually rendered.
    pub visible_rows: usize,

    /// Banner container height in pixels for the current expansion state.
    pub height: u32,

    /// Whether an expand/collapse affordance should be offered, i.e. the
    /// collapsed rendering hides at least one row.
    pub can_toggle: bool,
}

impl BannerLayout {
    fn empty(days: usize) -> Self {
        Self {
            events: Vec::new(),
            hidden_counts: vec![0; days],
            row_count: 0,
            visible_rows: 0,
            height: 0,
            can_toggle: false,
        }
    }
}

/// Caller-owned expansion state of an all-day banner.
///
/// The engine never stores this; the caller keeps one per view instance and
/// passes `is_expanded` into [`layout_banner`]. Navigating to a different day
/// range must reset the state to collapsed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    /// Rows beyond the cap are hidden behind "+K more" chips.
    #[default]
    Collapsed,

    /// All rows are rendered.
    Expanded,
}

impl BannerState {
    /// The state after clicking the expand icon or a "+K more" chip.
    pub fn toggled(self) -> Self {
        match self {
            BannerState::Collapsed => BannerState::Expanded,
            BannerState::Expanded => BannerState::Collapsed,
        }
    }

    /// Collapse when the visible day range changes.
    pub fn reset(&mut self) {
        *self = BannerState::Collapsed;
    }

    pub fn is_expanded(self) -> bool {
        self == BannerState::Expanded
    }
}

/// Stack the multi-day and all-day events intersecting `days` into banner
/// rows.
///
/// Events are clipped to the range, greedily placed into the lowest row free
/// of day-index overlap, and capped at `max_visible_rows` unless `expanded`.
/// When the stacking overflows the cap by exactly one row, that row renders
/// directly instead of being replaced by a chip that would occupy the same
/// space.
pub fn layout_banner(
    days: &[NaiveDate],
    events: &[Event],
    expanded: bool,
    max_visible_rows: usize,
) -> BannerLayout {
    let (Some(&view_start), Some(&view_end)) = (days.first(), days.last()) else {
        return BannerLayout::empty(0);
    };

    let mut selected: Vec<&Event> = events
        .iter()
        .filter(|e| e.is_multi_day() || e.is_all_day())
        .filter(|e| e.start_day() <= view_end && e.end_day() >= view_start)
        .collect();
    selected.sort_by_key(|e| (e.start_day(), Reverse(e.duration_days())));

    // Greedy row stacking over the 1-D day axis: lowest row whose bars do
    // not overlap the new bar's index range.
    let mut rows: Vec<Vec<(usize, usize)>> = Vec::new();
    let mut placed = Vec::with_capacity(selected.len());

    for event in selected {
        event.warn_if_inverted();

        let start_index = days_between(view_start, event.start_day()).max(0) as usize;
        let end_index = days_between(view_start, event.end_day()).min(days.len() as i64 - 1) as usize;

        let free_row = rows.iter().position(|row| {
            row.iter()
                .all(|&(start, end)| end_index < start || start_index > end)
        });
        let row = match free_row {
            Some(row) => row,
            None => {
                rows.push(Vec::new());
                rows.len() - 1
            }
        };
        rows[row].push((start_index, end_index));

        placed.push(BannerEvent {
            event: event.clone(),
            start_index,
            end_index,
            row,
            clipped_left: event.start_day() < view_start,
            clipped_right: event.end_day() > view_end,
        });
    }

    let row_count = rows.len();
    if row_count == 0 {
        return BannerLayout::empty(days.len());
    }

    // Overflowing the cap by a single row renders that row directly: a "+1
    // more" chip would spend the same row height to show less.
    let effective_max = if row_count == max_visible_rows + 1 {
        row_count
    } else {
        max_visible_rows
    };
    let visible_rows = if expanded {
        row_count
    } else {
        row_count.min(effective_max)
    };

    let mut hidden_counts = vec![0; days.len()];
    for bar in placed.iter().filter(|b| b.row >= visible_rows) {
        for count in &mut hidden_counts[bar.start_index..=bar.end_index] {
            *count += 1;
        }
    }

    let events = placed
        .into_iter()
        .filter(|b| b.row < visible_rows)
        .collect();

    BannerLayout {
        events,
        hidden_counts,
        row_count,
        visible_rows,
        height: (visible_rows as u32 * BANNER_ROW_HEIGHT + BANNER_PADDING).max(BANNER_MIN_HEIGHT),
        can_toggle: row_count > effective_max,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Mar 9 2025 (a Sunday) through Mar 15.
    fn week() -> Vec<NaiveDate> {
        (0..7).map(|i| date(2025, 3, 9) + TimeDelta::days(i)).collect()
    }

    fn spanning(title: &str, start: NaiveDate, end: NaiveDate) -> Event {
        Event {
            id: None,
            title: title.into(),
            start: start.into(),
            end: Some(end.into()),
            color: None,
        }
    }

    #[test]
    fn test_empty_days() {
        let layout = layout_banner(&[], &[], false, 3);
        assert_eq!(layout, BannerLayout::empty(0));
    }

    #[test]
    fn test_no_banner_events_zero_height() {
        let timed = Event {
            id: None,
            title: "timed".into(),
            start: date(2025, 3, 10).and_hms_opt(9, 0, 0).unwrap().into(),
            end: None,
            color: None,
        };
        let layout = layout_banner(&week(), &[timed], false, 3);
        assert_eq!(layout.row_count, 0);
        assert_eq!(layout.height, 0);
        assert_eq!(layout.hidden_counts, vec![0; 7]);
        assert!(!layout.can_toggle);
    }

    #[test]
    fn test_single_event_indices() {
        let events = [spanning("trip", date(2025, 3, 10), date(2025, 3, 12))];
        let layout = layout_banner(&week(), &events, false, 3);

        assert_eq!(layout.events.len(), 1);
        let bar = &layout.events[0];
        assert_eq!((bar.start_index, bar.end_index), (1, 3));
        assert_eq!(bar.row, 0);
        assert!(!bar.clipped_left);
        assert!(!bar.clipped_right);
        assert_eq!(layout.height, BANNER_MIN_HEIGHT);
    }

    #[test]
    fn test_clipping_to_view() {
        let events = [spanning("monthlong", date(2025, 2, 20), date(2025, 4, 2))];
        let layout = layout_banner(&week(), &events, false, 3);

        let bar = &layout.events[0];
        assert_eq!((bar.start_index, bar.end_index), (0, 6));
        assert!(bar.clipped_left);
        assert!(bar.clipped_right);
        // the underlying event keeps its full range
        assert_eq!(bar.event.start_day(), date(2025, 2, 20));
    }

    #[test]
    fn test_outside_events_excluded() {
        let events = [
            spanning("before", date(2025, 3, 1), date(2025, 3, 8)),
            spanning("after", date(2025, 3, 16), date(2025, 3, 20)),
        ];
        let layout = layout_banner(&week(), &events, false, 3);
        assert_eq!(layout.row_count, 0);
        assert!(layout.events.is_empty());
    }

    #[test]
    fn test_disjoint_events_share_a_row() {
        let events = [
            spanning("early", date(2025, 3, 9), date(2025, 3, 10)),
            spanning("late", date(2025, 3, 12), date(2025, 3, 13)),
        ];
        let layout = layout_banner(&week(), &events, false, 3);
        assert_eq!(layout.row_count, 1);
        assert!(layout.events.iter().all(|b| b.row == 0));
    }

    #[test]
    fn test_overlapping_events_stack() {
        let events = [
            spanning("a", date(2025, 3, 9), date(2025, 3, 11)),
            spanning("b", date(2025, 3, 10), date(2025, 3, 12)),
        ];
        let layout = layout_banner(&week(), &events, false, 3);
        assert_eq!(layout.row_count, 2);
        let rows: Vec<usize> = layout.events.iter().map(|b| b.row).collect();
        assert_eq!(rows, vec![0, 1]);
    }

    #[test]
    fn test_longest_first_on_shared_start() {
        let events = [
            spanning("short", date(2025, 3, 10), date(2025, 3, 11)),
            spanning("long", date(2025, 3, 10), date(2025, 3, 14)),
        ];
        let layout = layout_banner(&week(), &events, false, 3);
        let long = layout.events.iter().find(|b| b.event.title == "long").unwrap();
        let short = layout.events.iter().find(|b| b.event.title == "short").unwrap();
        assert_eq!(long.row, 0);
        assert_eq!(short.row, 1);
    }

    #[test]
    fn test_overflow_by_one_renders_directly() {
        // four rows against a cap of three: the N+1 exception shows them all
        let events = [
            spanning("a", date(2025, 3, 9), date(2025, 3, 12)),
            spanning("b", date(2025, 3, 9), date(2025, 3, 12)),
            spanning("c", date(2025, 3, 9), date(2025, 3, 12)),
            spanning("d", date(2025, 3, 10), date(2025, 3, 11)),
        ];
        let layout = layout_banner(&week(), &events, false, 3);
        assert_eq!(layout.row_count, 4);
        assert_eq!(layout.visible_rows, 4);
        assert_eq!(layout.events.len(), 4);
        assert_eq!(layout.hidden_counts, vec![0; 7]);
        assert!(!layout.can_toggle);
    }

    #[test]
    fn test_overflow_by_two_hides_rows() {
        let events = [
            spanning("a", date(2025, 3, 9), date(2025, 3, 12)),
            spanning("b", date(2025, 3, 9), date(2025, 3, 12)),
            spanning("c", date(2025, 3, 9), date(2025, 3, 12)),
            spanning("d", date(2025, 3, 9), date(2025, 3, 12)),
            spanning("e", date(2025, 3, 10), date(2025, 3, 11)),
        ];
        let layout = layout_banner(&week(), &events, false, 3);
        assert_eq!(layout.row_count, 5);
        assert_eq!(layout.visible_rows, 3);
        assert_eq!(layout.events.len(), 3);
        // "d" covers indices 0..=3, "e" covers 1..=2
        assert_eq!(layout.hidden_counts, vec![1, 2, 2, 1, 0, 0, 0]);
        assert!(layout.can_toggle);
    }

    #[test]
    fn test_expanded_shows_everything() {
        let events = [
            spanning("a", date(2025, 3, 9), date(2025, 3, 12)),
            spanning("b", date(2025, 3, 9), date(2025, 3, 12)),
            spanning("c", date(2025, 3, 9), date(2025, 3, 12)),
            spanning("d", date(2025, 3, 9), date(2025, 3, 12)),
            spanning("e", date(2025, 3, 10), date(2025, 3, 11)),
        ];
        let layout = layout_banner(&week(), &events, true, 3);
        assert_eq!(layout.visible_rows, 5);
        assert_eq!(layout.events.len(), 5);
        assert_eq!(layout.hidden_counts, vec![0; 7]);
        // the affordance stays available to collapse back
        assert!(layout.can_toggle);
        assert_eq!(layout.height, 5 * BANNER_ROW_HEIGHT + 4);
    }

    #[test]
    fn test_single_day_view() {
        let days = [date(2025, 3, 10)];
        let events = [spanning("trip", date(2025, 3, 9), date(2025, 3, 12))];
        let layout = layout_banner(&days, &events, false, 3);

        let bar = &layout.events[0];
        assert_eq!((bar.start_index, bar.end_index), (0, 0));
        assert!(bar.clipped_left);
        assert!(bar.clipped_right);
    }

    #[test]
    fn test_all_day_single_day_event_included() {
        let events = [Event {
            id: None,
            title: "holiday".into(),
            start: date(2025, 3, 11).into(),
            end: None,
            color: None,
        }];
        let layout = layout_banner(&week(), &events, false, 3);
        assert_eq!(layout.events.len(), 1);
        assert_eq!(layout.events[0].start_index, 2);
        assert_eq!(layout.events[0].end_index, 2);
    }

    #[test]
    fn test_deterministic() {
        let events = [
            spanning("twin", date(2025, 3, 9), date(2025, 3, 11)),
            spanning("twin", date(2025, 3, 9), date(2025, 3, 11)),
        ];
        let a = layout_banner(&week(), &events, false, 3);
        let b = layout_banner(&week(), &events, false, 3);
        assert_eq!(a, b);
        assert_eq!(a.events.len(), 2);
    }

    #[test]
    fn test_banner_state_machine() {
        let mut state = BannerState::default();
        assert!(!state.is_expanded());

        state = state.toggled();
        assert!(state.is_expanded());

        state = state.toggled();
        assert!(!state.is_expanded());

        // navigating to another range collapses an expanded banner
        let mut state = BannerState::Expanded;
        state.reset();
        assert_eq!(state, BannerState::Collapsed);
    }
}
