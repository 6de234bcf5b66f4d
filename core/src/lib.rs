// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Deterministic event layout for calendar views.
//!
//! Three packers share one idea, separating overlapping events into parallel
//! lanes on different axes: vertical slots per day cell in the month grid,
//! side-by-side columns in the timed day view, and stacked rows in the
//! all-day banner. Every entry point is a pure function of the visible range
//! and the event list; no state survives a call.

mod banner;
mod columns;
mod config;
mod datetime;
mod event;
mod month;

pub use crate::banner::{
    BANNER_ROW_HEIGHT, BannerEvent, BannerLayout, BannerState, layout_banner,
};
pub use crate::columns::{MIN_BLOCK_MINUTES, TimedLayout, layout_day};
pub use crate::config::{APP_NAME, LayoutOptions};
pub use crate::datetime::{
    MINUTES_PER_DAY, days_between, first_of_month, last_of_month, week_of, week_start_of,
    weeks_of_month,
};
pub use crate::event::{Event, EventTime, ParseEventTimeError};
pub use crate::month::{DayCell, DaySlot, EventSegment, MonthGrid};
