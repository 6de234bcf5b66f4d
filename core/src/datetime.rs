// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Months, NaiveDate, TimeDelta, Weekday};

/// Minutes in a civil day, the vertical extent of a day column.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Number of whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// The first day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 must exist in every month")
}

/// The last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .expect("month end must stay within the supported date range")
}

/// The day starting the week that contains `date`.
pub fn week_start_of(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = date.weekday().days_since(week_start);
    date - TimeDelta::days(i64::from(offset))
}

/// The seven days of the week containing `date`, in order.
pub fn week_of(date: NaiveDate, week_start: Weekday) -> [NaiveDate; 7] {
    let start = week_start_of(date, week_start);
    std::array::from_fn(|i| start + TimeDelta::days(i as i64))
}

/// Every week row touching the month of `date`, from the row containing the
/// 1st through the row containing the last day. Rows always hold seven
/// consecutive days, so the first and last rows may reach into the adjacent
/// months.
pub fn weeks_of_month(date: NaiveDate, week_start: Weekday) -> Vec<[NaiveDate; 7]> {
    let last = last_of_month(date);
    let mut cursor = week_start_of(first_of_month(date), week_start);

    let mut weeks = Vec::with_capacity(6);
    while cursor <= last {
        weeks.push(std::array::from_fn(|i| cursor + TimeDelta::days(i as i64)));
        cursor += TimeDelta::days(7);
    }
    weeks
}
