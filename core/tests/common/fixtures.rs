// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calgrid_core::Event;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[allow(dead_code)]
pub fn datetime(y: i32, m: u32, d: u32, h: u32, mm: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, mm, 0).unwrap()
}

/// A timed event with explicit start and end.
#[allow(dead_code)]
pub fn timed(title: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
    Event {
        id: None,
        title: title.into(),
        start: start.into(),
        end: Some(end.into()),
        color: None,
    }
}

/// A date-ranged event as produced by all-day editors.
#[allow(dead_code)]
pub fn spanning(title: &str, start: NaiveDate, end: NaiveDate) -> Event {
    Event {
        id: None,
        title: title.into(),
        start: start.into(),
        end: Some(end.into()),
        color: None,
    }
}

/// A single-day all-day event.
#[allow(dead_code)]
pub fn all_day(title: &str, day: NaiveDate) -> Event {
    Event {
        id: None,
        title: title.into(),
        start: day.into(),
        end: None,
        color: None,
    }
}

/// Seven consecutive days starting at `start`.
#[allow(dead_code)]
pub fn week_from(start: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|i| start + TimeDelta::days(i)).collect()
}
