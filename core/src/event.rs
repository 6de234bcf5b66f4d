// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize, de};

/// A wall-clock point in time attached to an event, either a bare date or a
/// date with a time of day. No timezone is involved: layout happens in the
/// caller's local wall-clock frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    /// Date only without time, as used by all-day events.
    Date(NaiveDate),

    /// Floating date and time without timezone.
    DateTime(NaiveDateTime),
}

const FORMAT_DATEONLY: &str = "%Y-%m-%d";
const FORMAT_DATETIME_MINUTES: &str = "%Y-%m-%dT%H:%M";
const FORMAT_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";

impl EventTime {
    /// Returns the date part.
    pub fn date(&self) -> NaiveDate {
        match self {
            EventTime::Date(d) => *d,
            EventTime::DateTime(dt) => dt.date(),
        }
    }

    /// Returns the time part, if available.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            EventTime::Date(_) => None,
            EventTime::DateTime(dt) => Some(dt.time()),
        }
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTime::Date(d) => write!(f, "{}", d.format(FORMAT_DATEONLY)),
            EventTime::DateTime(dt) => write!(f, "{}", dt.format(FORMAT_DATETIME)),
        }
    }
}

impl FromStr for EventTime {
    type Err = ParseEventTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.len() {
            // 2006-01-02
            10 => NaiveDate::parse_from_str(s, FORMAT_DATEONLY)
                .map(Self::Date)
                .map_err(|_| ParseEventTimeError::new(s)),

            // 2006-01-02T15:04
            16 => NaiveDateTime::parse_from_str(s, FORMAT_DATETIME_MINUTES)
                .map(Self::DateTime)
                .map_err(|_| ParseEventTimeError::new(s)),

            // 2006-01-02T15:04:05
            19 => NaiveDateTime::parse_from_str(s, FORMAT_DATETIME)
                .map(Self::DateTime)
                .map_err(|_| ParseEventTimeError::new(s)),

            _ => Err(ParseEventTimeError::new(s)),
        }
    }
}

impl From<NaiveDate> for EventTime {
    fn from(d: NaiveDate) -> Self {
        EventTime::Date(d)
    }
}

impl From<NaiveDateTime> for EventTime {
    fn from(dt: NaiveDateTime) -> Self {
        EventTime::DateTime(dt)
    }
}

impl Serialize for EventTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct EventTimeVisitor;

        impl de::Visitor<'_> for EventTimeVisitor {
            type Value = EventTime;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(
                    r#"a date like "2006-01-02" or a datetime like "2006-01-02T15:04[:05]""#,
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(EventTimeVisitor)
    }
}

/// Error returned when a string is not a recognizable event time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEventTimeError {
    input: String,
}

impl ParseEventTimeError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseEventTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid event time {:?}, expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]",
            self.input
        )
    }
}

impl std::error::Error for ParseEventTimeError {}

/// A calendar event to be placed by the layout engine.
///
/// The engine never mutates events; every layout record carries its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Caller-supplied identifier, if any. Layout does not depend on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The display title of the event.
    pub title: String,

    /// When the event starts.
    pub start: EventTime,

    /// When the event ends, inclusive of the end day. Absent means an
    /// implicit duration at `start`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<EventTime>,

    /// Presentation color hint, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Event {
    /// The first calendar day the event covers.
    pub fn start_day(&self) -> NaiveDate {
        self.start.date()
    }

    /// The last calendar day the event covers. A missing end means a one-day
    /// event; an end before the start clamps to the start day so a malformed
    /// record cannot break the layout of a whole view.
    pub fn end_day(&self) -> NaiveDate {
        match &self.end {
            Some(end) if end.date() >= self.start.date() => end.date(),
            _ => self.start.date(),
        }
    }

    /// Days covered, at least 1.
    pub fn duration_days(&self) -> i64 {
        (self.end_day() - self.start_day()).num_days() + 1
    }

    /// True when the event covers more than one calendar day.
    pub fn is_multi_day(&self) -> bool {
        self.end_day() != self.start_day()
    }

    /// True when the event carries no time-of-day component at all.
    pub fn is_all_day(&self) -> bool {
        let start_is_date = matches!(self.start, EventTime::Date(_));
        let end_is_date = match &self.end {
            Some(end) => matches!(end, EventTime::Date(_)),
            None => true,
        };
        start_is_date && end_is_date
    }

    /// Log when the record's end precedes its start; the range itself is
    /// clamped by [`Event::end_day`].
    pub(crate) fn warn_if_inverted(&self) {
        if let Some(end) = &self.end {
            if end.date() < self.start.date() {
                tracing::warn!(
                    title = %self.title,
                    start = %self.start,
                    end = %end,
                    "event ends before it starts, clamping to its start day"
                );
            }
        }
    }
}
