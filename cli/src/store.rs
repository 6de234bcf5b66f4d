// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::Path};

use calgrid_core::Event;

/// Load the event list from a JSON file: an array of event records like
/// `{"title": "Standup", "start": "2025-03-10T09:30", "end": "2025-03-10T10:00"}`.
pub fn load_events(path: &Path) -> Result<Vec<Event>, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read events file at {}: {}", path.display(), e))?;

    let events: Vec<Event> = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse events file at {}: {}", path.display(), e))?;

    tracing::debug!(count = events.len(), "loaded events");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_events() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.json");
        fs::write(
            &path,
            r#"[
  {"title": "Standup", "start": "2025-03-10T09:30", "end": "2025-03-10T10:00"},
  {"id": "trip-1", "title": "Trip", "start": "2025-03-10", "end": "2025-03-12", "color": "blue"}
]"#,
        )
        .unwrap();

        let events = load_events(&path).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Standup");
        assert_eq!(events[1].id.as_deref(), Some("trip-1"));
        assert!(events[1].is_all_day());
    }

    #[test]
    fn test_load_events_empty_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.json");
        fs::write(&path, "[]").unwrap();
        assert!(load_events(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_events(&temp_dir.path().join("absent.json"));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Failed to read events file"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.json");
        fs::write(&path, r#"[{"title": "broken""#).unwrap();
        let message = load_events(&path).unwrap_err().to_string();
        assert!(message.contains("Failed to parse events file"));
    }

    #[test]
    fn test_bad_event_time_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.json");
        fs::write(&path, r#"[{"title": "bad", "start": "soon"}]"#).unwrap();
        assert!(load_events(&path).is_err());
    }
}
