//! Frontend Models
//!
//! Data structures matching the task API's JSON payloads.

use std::convert::Infallible;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ApiError, ApiResult};

/// Completion status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Completed,
    #[default]
    Incomplete,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "completed",
            TaskStatus::Incomplete => "incomplete",
        }
    }

}

/// Anything but "completed" reads as incomplete
impl FromStr for TaskStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Incomplete,
        })
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "dueDate", default, deserialize_with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub archived: bool,
}

const TITLE_LIMIT: usize = 20;
const DESCRIPTION_LIMIT: usize = 300;
const DESCRIPTION_CUT: usize = 280;

impl Task {
    /// Title as shown on a card
    pub fn card_title(&self) -> String {
        shorten(&self.title, TITLE_LIMIT, TITLE_LIMIT)
    }

    /// Description as shown on a card
    pub fn card_description(&self) -> String {
        shorten(&self.description, DESCRIPTION_LIMIT, DESCRIPTION_CUT)
    }

    pub fn due_date_label(&self) -> String {
        match self.due_date {
            Some(date) => date.format("%m/%d/%Y").to_string(),
            None => "Not specified".to_string(),
        }
    }
}

/// Keep `text` if it has at most `limit` chars, otherwise cut to `cut` chars plus "..."
fn shorten(text: &str, limit: usize, cut: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(cut).collect();
        short.push_str("...");
        short
    }
}

/// Accepts an RFC 3339 timestamp, a plain `YYYY-MM-DD` date, null or an empty string
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Ok(None);
    };
    if let Ok(stamp) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(stamp.date_naive()));
    }
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map(Some)
        .map_err(serde::de::Error::custom)
}

/// Fields changed by an update; `None` leaves the cached value alone
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl TaskPatch {
    /// Copy the patched fields onto `task`
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(archived) = self.archived {
            task.archived = archived;
        }
    }
}

/// Body of a create-task request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    /// Checks done before the request is sent
    pub fn validate(&self, today: NaiveDate) -> ApiResult<()> {
        match self.due_date {
            Some(due) if due < today => {
                Err(ApiError::Validation("Due date cannot be in the past.".to_string()))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Registration form contents, sent as multipart
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub avatar: Option<web_sys::File>,
}

impl Registration {
    pub fn validate(&self) -> ApiResult<()> {
        let fields = [&self.name, &self.email, &self.phone, &self.password];
        if fields.iter().any(|f| f.trim().is_empty()) || self.avatar.is_none() {
            return Err(ApiError::Validation("Please fill in all fields.".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Profile of the signed-in user (matches backend)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone: String,
    #[serde(default)]
    pub avatar: Option<Avatar>,
}

impl UserProfile {
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar.as_ref().and_then(|a| a.url.as_deref())
    }
}

/// Placeholder for empty profile fields
pub fn or_na(value: &str) -> String {
    if value.is_empty() { "N/A".to_string() } else { value.to_string() }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Phone {
        Text(String),
        Number(i64),
        Float(f64),
    }

    Ok(match Option::<Phone>::deserialize(deserializer)? {
        Some(Phone::Text(s)) => s,
        Some(Phone::Number(n)) => n.to_string(),
        Some(Phone::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

// ========================
// Response Envelopes
// ========================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub user: UserProfile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TasksResponse {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskResponse {
    pub task: Task,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTaskResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub task: Task,
}
