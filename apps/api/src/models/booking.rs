use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A consultation booking. `booking_id` is the human-readable reference
/// quoted back to the customer, distinct from the storage `id`. Only
/// `status` is mutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub booking_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub consultation_type: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub experience: String,
    pub goals: String,
    pub special_requests: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for a consultation booking. Fields default to empty strings
/// so an omitted field fails boundary validation rather than
/// deserialization; `special_requests` is genuinely optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewBooking {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub consultation_type: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub experience: String,
    pub goals: String,
    pub special_requests: Option<String>,
}
