use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A contact-form inquiry. Immutable once stored; the store assigns `id`
/// and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub interested_in: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for a contact submission. Fields default to empty strings so
/// an omitted field fails boundary validation rather than deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub interested_in: String,
    pub message: String,
}
