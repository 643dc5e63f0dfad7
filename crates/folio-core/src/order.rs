use crate::model::Project;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Epoch-millisecond timestamp used for ordering. `date` wins over
/// `createdAt`; a record with neither, or with an unparseable value, sorts
/// as epoch 0.
pub fn effective_timestamp_ms(project: &Project) -> i64 {
    date_field(&project.date)
        .or_else(|| date_field(&project.created_at))
        .map(date_value_to_ms)
        .unwrap_or(0)
}

/// Newest-first copy of the collection. The input slice is left untouched
/// and ties may land in either relative order.
pub fn sort_newest_first(projects: &[Project]) -> Vec<Project> {
    let mut sorted = projects.to_vec();
    sorted.sort_by_key(|p| std::cmp::Reverse(effective_timestamp_ms(p)));
    sorted
}

fn date_field(v: &Option<Value>) -> Option<&Value> {
    v.as_ref().filter(|value| !value.is_null())
}

fn date_value_to_ms(v: &Value) -> i64 {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => parse_date_text(s).unwrap_or(0),
        _ => 0,
    }
}

fn parse_date_text(s: &str) -> Option<i64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dated(title: &str, date: Value) -> Project {
        Project {
            title: Some(json!(title)),
            date: Some(date),
            ..Project::default()
        }
    }

    fn title_of(project: &Project) -> String {
        project
            .title
            .as_ref()
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn test_sort_newest_first_with_undated_last() {
        let input = vec![
            dated("b", json!("2024-01-01")),
            dated("c", json!("2023-06-01")),
            dated("a", json!("2025-03-01")),
            Project {
                title: Some(json!("d")),
                ..Project::default()
            },
        ];

        let sorted = sort_newest_first(&input);
        let titles: Vec<String> = sorted.iter().map(title_of).collect();
        assert_eq!(titles, vec!["a", "b", "c", "d"]);

        // Input order must survive the call.
        let original: Vec<String> = input.iter().map(title_of).collect();
        assert_eq!(original, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_created_at_is_the_fallback_field() {
        let project = Project {
            created_at: Some(json!("2024-05-05")),
            ..Project::default()
        };
        assert!(effective_timestamp_ms(&project) > 0);

        let both = Project {
            date: Some(json!("2020-01-01")),
            created_at: Some(json!("2024-05-05")),
            ..Project::default()
        };
        let date_only = Project {
            date: Some(json!("2020-01-01")),
            ..Project::default()
        };
        assert_eq!(
            effective_timestamp_ms(&both),
            effective_timestamp_ms(&date_only),
            "date must win over createdAt"
        );
    }

    #[test]
    fn test_numeric_timestamps_are_epoch_millis() {
        let project = Project {
            date: Some(json!(1_700_000_000_000_i64)),
            ..Project::default()
        };
        assert_eq!(effective_timestamp_ms(&project), 1_700_000_000_000);
    }

    #[test]
    fn test_rfc3339_and_datetime_formats_parse() {
        let rfc = Project {
            date: Some(json!("2024-01-01T12:00:00Z")),
            ..Project::default()
        };
        let plain = Project {
            date: Some(json!("2024-01-01 12:00:00")),
            ..Project::default()
        };
        assert_eq!(
            effective_timestamp_ms(&rfc),
            effective_timestamp_ms(&plain)
        );
    }

    #[test]
    fn test_unparseable_date_sorts_as_epoch() {
        let project = Project {
            date: Some(json!("next tuesday")),
            ..Project::default()
        };
        assert_eq!(effective_timestamp_ms(&project), 0);
    }
}
