//! Wire DTOs for the PlagiGuard backend and their normalized client forms.
//!
//! DESIGN
//! ======
//! The backend omits or nulls fields freely. Every DTO here defaults missing
//! values instead of failing to decode, and identifiers are normalized to
//! strings whether they arrive as numbers or strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::session::deserialize_id;

fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn id_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<serde_json::Value>::deserialize(deserializer)?
        .map(|v| match v {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            _ => String::new(),
        })
        .unwrap_or_default())
}

/// Parse a backend timestamp.
///
/// Accepts `LocalDateTime` renderings (`2024-03-01T10:15:30.123`), RFC 3339,
/// and bare dates.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts);
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(ts);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}

// =============================================================================
// UPLOADS
// =============================================================================

/// One entry of `GET /api/files/history/{userId}` as sent by the backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryEntry {
    #[serde(deserialize_with = "id_or_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub filename: String,
    #[serde(rename = "percentAI", deserialize_with = "null_default")]
    pub percent_ai: f64,
    #[serde(deserialize_with = "null_default")]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HistoryResponse {
    #[serde(deserialize_with = "null_default")]
    pub uploads: Vec<HistoryEntry>,
}

/// A normalized upload record; `similarity_score` is a `0..=1` fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub id: String,
    pub file_name: String,
    pub similarity_score: f64,
    pub upload_date: String,
}

impl UploadRecord {
    #[must_use]
    pub fn uploaded_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.upload_date)
    }
}

impl From<HistoryEntry> for UploadRecord {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            id: entry.id,
            file_name: entry.filename,
            similarity_score: entry.percent_ai / 100.0,
            upload_date: entry.timestamp,
        }
    }
}

/// Normalize history entries and order them newest first.
///
/// Records with unparseable timestamps sort last.
#[must_use]
pub fn normalize_history(entries: Vec<HistoryEntry>) -> Vec<UploadRecord> {
    let mut records: Vec<UploadRecord> = entries.into_iter().map(UploadRecord::from).collect();
    records.sort_by(|a, b| b.uploaded_at().cmp(&a.uploaded_at()));
    records
}

/// Response of `POST /api/files/upload/user`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadResult {
    pub success: bool,
    pub message: Option<String>,
    pub file_name: Option<String>,
    pub similarity_score: Option<f64>,
    pub content: Option<String>,
    pub ai_parts: Option<Vec<usize>>,
}

impl From<&UploadRecord> for UploadResult {
    fn from(record: &UploadRecord) -> Self {
        Self {
            success: true,
            message: None,
            file_name: Some(record.file_name.clone()),
            similarity_score: Some(record.similarity_score),
            content: None,
            ai_parts: None,
        }
    }
}

// =============================================================================
// PROFILE / REGISTRATION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub user_id: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSignup {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
}

// =============================================================================
// ADMIN
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminDocument {
    #[serde(deserialize_with = "id_or_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub file_name: String,
    #[serde(deserialize_with = "null_default")]
    pub user_email: String,
    #[serde(deserialize_with = "null_default")]
    pub upload_date: String,
    /// Percentage, `0..=100`.
    #[serde(deserialize_with = "null_default")]
    pub ai_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    #[serde(deserialize_with = "null_default")]
    pub total_documents: u64,
    #[serde(deserialize_with = "null_default")]
    pub total_users: u64,
    #[serde(deserialize_with = "null_default")]
    pub documents_today: u64,
    #[serde(rename = "averageAIScore", deserialize_with = "null_default")]
    pub average_ai_score: f64,
    #[serde(deserialize_with = "null_default")]
    pub recent_documents: Vec<AdminDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminUser {
    #[serde(deserialize_with = "id_or_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub role: String,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
}

impl AdminUser {
    #[must_use]
    pub fn status(&self) -> UserStatus {
        UserStatus::parse(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Suspended,
}

impl UserStatus {
    /// Anything other than `suspended` counts as active.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("suspended") { Self::Suspended } else { Self::Active }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Suspended,
            Self::Suspended => Self::Active,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthCount {
    #[serde(deserialize_with = "null_default")]
    pub month: String,
    #[serde(deserialize_with = "null_default")]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBucket {
    #[serde(deserialize_with = "null_default")]
    pub range: String,
    #[serde(deserialize_with = "null_default")]
    pub count: u64,
    #[serde(deserialize_with = "null_default")]
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadTimeSlot {
    #[serde(deserialize_with = "null_default")]
    pub period: String,
    #[serde(deserialize_with = "null_default")]
    pub uploads: u64,
    #[serde(deserialize_with = "null_default")]
    pub avg_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Analytics {
    #[serde(deserialize_with = "null_default")]
    pub documents_by_month: Vec<MonthCount>,
    #[serde(deserialize_with = "null_default")]
    pub user_growth: Vec<MonthCount>,
    #[serde(deserialize_with = "null_default")]
    pub ai_score_distribution: Vec<ScoreBucket>,
    #[serde(deserialize_with = "null_default")]
    pub upload_times: Vec<UploadTimeSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemSettings {
    pub email_notifications: bool,
    pub dark_mode: bool,
    pub ai_threshold: u32,
    /// Megabytes.
    pub max_file_size: u32,
    pub allowed_file_types: String,
    pub backup_interval: String,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            dark_mode: false,
            ai_threshold: 70,
            max_file_size: 10,
            allowed_file_types: ".txt,.doc,.docx,.pdf".to_owned(),
            backup_interval: "daily".to_owned(),
        }
    }
}

// =============================================================================
// ADMIN QUERIES
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Column + direction for a sortable admin table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sort<C> {
    pub column: C,
    pub order: SortOrder,
}

impl<C: Copy + PartialEq> Sort<C> {
    /// Select `column`; re-clicking an ascending column flips it to
    /// descending, every other click sorts ascending.
    #[must_use]
    pub fn toggle(self, column: C) -> Self {
        let order = if self.column == column && self.order == SortOrder::Asc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        Self { column, order }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserSortColumn {
    FullName,
    Email,
    #[default]
    CreatedAt,
}

impl UserSortColumn {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Suspended,
}

impl StatusFilter {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Suspended => "suspended",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "active" => Self::Active,
            "suspended" => Self::Suspended,
            _ => Self::All,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub sort: Sort<UserSortColumn>,
    pub status: StatusFilter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentSortColumn {
    FileName,
    UserEmail,
    #[default]
    UploadDate,
    AiScore,
}

impl DocumentSortColumn {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FileName => "file_name",
            Self::UserEmail => "user_email",
            Self::UploadDate => "upload_date",
            Self::AiScore => "ai_score",
        }
    }
}

/// Filters for `GET /api/admin/documents`; blank fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentQuery {
    pub sort: Sort<DocumentSortColumn>,
    pub ai_score_min: String,
    pub ai_score_max: String,
    pub date_from: String,
    pub date_to: String,
}
