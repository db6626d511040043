//! Frontend Models
//!
//! Data structures matching backend entities and request payloads.
//! The backend is the source of truth for all of these; the client never
//! mutates them locally except as an optimistic preview before a re-fetch.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority (matches backend wire labels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// All priorities, highest first
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Fixed sort rank: high < medium < low (high sorts first ascending)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Parse a wire label (form select values)
    pub fn from_str_opt(s: &str) -> Option<Priority> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// Task status (matches backend wire labels, space included)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    /// All statuses, in board column order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// Wire label (also the lexicographic sort key)
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Done => "done",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Board column index for this status
    pub fn column_index(&self) -> usize {
        match self {
            TaskStatus::Todo => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Done => 2,
        }
    }

    /// Status for a board column index
    pub fn from_column_index(index: usize) -> Option<TaskStatus> {
        TaskStatus::ALL.get(index).copied()
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Attached media as a backend URL or data URL
    #[serde(default)]
    pub media: Option<String>,
    /// Ids of the responsible users
    #[serde(default)]
    pub responsible: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl User {
    /// Full name, falling back to the username
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

// ========================
// Request Payloads
// ========================

/// Create-task payload
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    pub responsible: Vec<i32>,
}

/// Single-attribute task update, one call per mutated field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", content = "value", rename_all = "snake_case")]
pub enum TaskAttribute {
    Title(String),
    Description(String),
    Priority(Priority),
    Status(TaskStatus),
    StartDate(DateTime<Utc>),
    EndDate(DateTime<Utc>),
    Media(Option<String>),
    Responsible(Vec<i32>),
}

impl TaskAttribute {
    /// Wire name of the attribute, for logging
    pub fn name(&self) -> &'static str {
        match self {
            TaskAttribute::Title(_) => "title",
            TaskAttribute::Description(_) => "description",
            TaskAttribute::Priority(_) => "priority",
            TaskAttribute::Status(_) => "status",
            TaskAttribute::StartDate(_) => "start_date",
            TaskAttribute::EndDate(_) => "end_date",
            TaskAttribute::Media(_) => "media",
            TaskAttribute::Responsible(_) => "responsible",
        }
    }
}

/// Profile update payload; omitted fields stay untouched, except `image`
/// which is always sent so a null clears the avatar
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub image: Option<String>,
}

// ========================
// Auth Payloads
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Login/refresh response data
#[derive(Debug, Clone, Deserialize)]
pub struct AuthData {
    pub token: String,
    pub refresh_token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecoverRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub code: String,
    pub password: String,
}

/// Per-user chat SaaS credential minted by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct ChatTokenData {
    pub token: String,
}

// ========================
// Trend Data
// ========================

/// Which pre-aggregated series to fetch for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendKind {
    Activity,
    Progress,
    Priority,
}

impl TrendKind {
    pub const ALL: [TrendKind; 3] = [TrendKind::Activity, TrendKind::Progress, TrendKind::Priority];

    /// URL path segment
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendKind::Activity => "activity",
            TrendKind::Progress => "progress",
            TrendKind::Priority => "priority",
        }
    }

    /// Widget title
    pub fn label(&self) -> &'static str {
        match self {
            TrendKind::Activity => "Activity",
            TrendKind::Progress => "Progress",
            TrendKind::Priority => "Priority Breakdown",
        }
    }
}

/// One point of a pre-aggregated series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
}

/// A fetched series paired with its kind, for chart widgets
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub kind: TrendKind,
    pub points: Vec<TrendPoint>,
}

// ========================
// Date Helpers
// ========================

/// Parse the value of an `<input type="date">` into a UTC midnight timestamp
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let midnight = date.and_time(NaiveTime::MIN);
    Some(DateTime::from_naive_utc_and_offset(midnight, Utc))
}

/// Format a timestamp back into an `<input type="date">` value
pub fn date_input_value(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Short human-readable date for cards and tables
pub fn fmt_date(dt: DateTime<Utc>) -> String {
    dt.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_labels_round_trip() {
        for status in TaskStatus::ALL {
            let s = serde_json::to_string(&status).unwrap();
            assert_eq!(s, format!("\"{}\"", status.as_str()));
            let back: TaskStatus = serde_json::from_str(&s).unwrap();
            assert_eq!(back, status);
        }
        // The backend label keeps the space
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in progress\""
        );
    }

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }

    #[test]
    fn test_task_deserializes_backend_shape() {
        let task: Task = serde_json::from_value(json!({
            "id": 7,
            "title": "Write lab report",
            "description": "Physics lab 3",
            "priority": "high",
            "status": "in progress",
            "start_date": "2026-03-01T00:00:00Z",
            "end_date": "2026-03-10T00:00:00Z",
            "responsible": [2, 5],
            "created_at": "2026-03-01T08:30:00Z",
            "updated_at": "2026-03-02T09:00:00Z"
        }))
        .unwrap();

        assert_eq!(task.id, 7);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.media, None);
        assert_eq!(task.responsible, vec![2, 5]);
    }

    #[test]
    fn test_attribute_payload_shape() {
        let payload = serde_json::to_value(TaskAttribute::Status(TaskStatus::Done)).unwrap();
        assert_eq!(payload, json!({ "name": "status", "value": "done" }));

        let payload = serde_json::to_value(TaskAttribute::Priority(Priority::Low)).unwrap();
        assert_eq!(payload, json!({ "name": "priority", "value": "low" }));

        let payload = serde_json::to_value(TaskAttribute::Responsible(vec![1, 4])).unwrap();
        assert_eq!(payload, json!({ "name": "responsible", "value": [1, 4] }));
    }

    #[test]
    fn test_user_display_name_falls_back_to_username() {
        let user = User {
            id: 1,
            username: "jdoe".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: "jdoe@example.edu".to_string(),
            contact: None,
            image: None,
        };
        assert_eq!(user.display_name(), "jdoe");

        let named = User {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            ..user
        };
        assert_eq!(named.display_name(), "Jane Doe");
    }

    #[test]
    fn test_date_input_round_trip() {
        let parsed = parse_date_input("2026-05-04").unwrap();
        assert_eq!(date_input_value(parsed), "2026-05-04");
        assert!(parse_date_input("not a date").is_none());
    }

    #[test]
    fn test_trend_point_deserializes() {
        let point: TrendPoint = serde_json::from_value(json!({
            "label": "Mon",
            "value": 4.0
        }))
        .unwrap();
        assert_eq!(point.label, "Mon");
        assert_eq!(point.value, 4.0);
    }
}
