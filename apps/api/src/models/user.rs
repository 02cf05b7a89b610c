use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Auth-adjacent user record. No exposed endpoint reads or writes users;
/// the table exists for completeness of the storage interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
