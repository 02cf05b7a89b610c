use std::sync::OnceLock;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::db;
use crate::models::{Booking, Contact, NewBooking, NewContact, NewUser, User};

use super::{booking_reference, Storage, StorageError};

/// Durable backend over the managed Postgres cluster.
///
/// The pool is built on first use, not at construction: a missing or foreign
/// connection string surfaces as an error on the first operation, which is
/// what trips the manager's fallback. Row ids are the creation instant in
/// milliseconds, stringified.
pub struct PgStorage {
    database_url: String,
    pool: OnceLock<PgPool>,
}

impl PgStorage {
    pub fn new(database_url: String) -> Self {
        Self {
            database_url,
            pool: OnceLock::new(),
        }
    }

    fn db(&self) -> Result<&PgPool, StorageError> {
        if let Some(pool) = self.pool.get() {
            return Ok(pool);
        }
        if !db::is_managed_url(&self.database_url) {
            return Err(StorageError::Unavailable(format!(
                "database url does not point at a {} host",
                db::MANAGED_HOST
            )));
        }
        let pool = db::lazy_pool(&self.database_url)?;
        Ok(self.pool.get_or_init(|| pool))
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError> {
        let user =
            sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(self.db()?)
                .await?;
        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.db()?)
        .await?;
        Ok(user)
    }

    async fn create_user(&self, input: NewUser) -> Result<User, StorageError> {
        let user = User {
            id: Utc::now().timestamp_millis().to_string(),
            username: input.username,
            password: input.password,
        };
        sqlx::query("INSERT INTO users (id, username, password) VALUES ($1, $2, $3)")
            .bind(&user.id)
            .bind(&user.username)
            .bind(&user.password)
            .execute(self.db()?)
            .await?;
        Ok(user)
    }

    async fn create_contact(&self, input: NewContact) -> Result<Contact, StorageError> {
        let created_at = Utc::now();
        let contact = Contact {
            id: created_at.timestamp_millis().to_string(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            interested_in: input.interested_in,
            message: input.message,
            created_at,
        };
        sqlx::query(
            "INSERT INTO contacts \
                (id, first_name, last_name, email, phone, interested_in, message, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&contact.id)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.interested_in)
        .bind(&contact.message)
        .bind(contact.created_at)
        .execute(self.db()?)
        .await?;
        Ok(contact)
    }

    async fn get_contacts(&self) -> Result<Vec<Contact>, StorageError> {
        let contacts = sqlx::query_as::<_, Contact>(
            "SELECT id, first_name, last_name, email, phone, interested_in, message, created_at \
             FROM contacts ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(self.db()?)
        .await?;
        Ok(contacts)
    }

    async fn create_booking(&self, input: NewBooking) -> Result<Booking, StorageError> {
        let created_at = Utc::now();
        let booking = Booking {
            id: created_at.timestamp_millis().to_string(),
            booking_id: booking_reference(created_at),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            consultation_type: input.consultation_type,
            preferred_date: input.preferred_date,
            preferred_time: input.preferred_time,
            experience: input.experience,
            goals: input.goals,
            special_requests: input.special_requests.filter(|s| !s.is_empty()),
            status: "pending".to_string(),
            created_at,
        };
        sqlx::query(
            "INSERT INTO bookings \
                (id, booking_id, first_name, last_name, email, phone, consultation_type, \
                 preferred_date, preferred_time, experience, goals, special_requests, status, \
                 created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)",
        )
        .bind(&booking.id)
        .bind(&booking.booking_id)
        .bind(&booking.first_name)
        .bind(&booking.last_name)
        .bind(&booking.email)
        .bind(&booking.phone)
        .bind(&booking.consultation_type)
        .bind(&booking.preferred_date)
        .bind(&booking.preferred_time)
        .bind(&booking.experience)
        .bind(&booking.goals)
        .bind(&booking.special_requests)
        .bind(&booking.status)
        .bind(booking.created_at)
        .execute(self.db()?)
        .await?;
        Ok(booking)
    }

    async fn get_bookings(&self) -> Result<Vec<Booking>, StorageError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT id, booking_id, first_name, last_name, email, phone, consultation_type, \
                    preferred_date, preferred_time, experience, goals, special_requests, status, \
                    created_at \
             FROM bookings ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(self.db()?)
        .await?;
        Ok(bookings)
    }

    async fn update_booking_status(&self, id: &str, status: &str) -> Result<(), StorageError> {
        sqlx::query("UPDATE bookings SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(self.db()?)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_foreign_url_fails_before_any_connection() {
        let storage = PgStorage::new("postgres://user:pw@db.example.com/app".to_string());
        let err = storage.get_contacts().await.unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));
    }
}
