// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::Weekday;
use serde::de;

/// The name of the calgrid application.
pub const APP_NAME: &str = "calgrid";

/// View-independent layout options threaded through by callers. The engine
/// itself holds no configuration state.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// First day of the week for month and week views.
    #[serde(deserialize_with = "deserialize_week_start")]
    pub week_start: Weekday,

    /// Banner rows rendered while the all-day banner is collapsed.
    pub max_banner_rows: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            max_banner_rows: 3,
        }
    }
}

fn deserialize_week_start<'de, D>(deserializer: D) -> Result<Weekday, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct WeekStartVisitor;

    impl de::Visitor<'_> for WeekStartVisitor {
        type Value = Weekday;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str(r#"a weekday name like "sunday" or "mon""#)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value
                .parse()
                .map_err(|_| de::Error::custom(format!("unknown weekday: {value}")))
        }
    }

    deserializer.deserialize_str(WeekStartVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = LayoutOptions::default();
        assert_eq!(options.week_start, Weekday::Sun);
        assert_eq!(options.max_banner_rows, 3);
    }

    #[test]
    fn test_deserialize_from_toml() {
        let options: LayoutOptions = toml::from_str(
            r#"
week_start = "monday"
max_banner_rows = 5
"#,
        )
        .unwrap();
        assert_eq!(options.week_start, Weekday::Mon);
        assert_eq!(options.max_banner_rows, 5);
    }

    #[test]
    fn test_deserialize_abbreviated_weekday() {
        let options: LayoutOptions = toml::from_str(r#"week_start = "wed""#).unwrap();
        assert_eq!(options.week_start, Weekday::Wed);
    }

    #[test]
    fn test_deserialize_partial_falls_back_to_defaults() {
        let options: LayoutOptions = toml::from_str("").unwrap();
        assert_eq!(options.week_start, Weekday::Sun);
        assert_eq!(options.max_banner_rows, 3);
    }

    #[test]
    fn test_deserialize_rejects_unknown_weekday() {
        let result: Result<LayoutOptions, _> = toml::from_str(r#"week_start = "someday""#);
        assert!(result.is_err());
    }
}
