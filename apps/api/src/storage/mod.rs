//! Submission store: one capability interface, two backends.
//!
//! `PgStorage` persists to the managed Postgres cluster; `MemStorage` keeps
//! everything in process memory. `StorageManager` wraps both and owns the
//! one-directional fallback policy: the first durable-backend failure flips
//! the manager to the in-memory backend for the rest of the process
//! lifetime. Callers only see an error if the in-memory backend fails too.

pub mod mem;
pub mod pg;

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;
use tracing::warn;

use crate::models::{Booking, Contact, NewBooking, NewContact, NewUser, User};

use self::mem::MemStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Capability interface shared by the durable and volatile backends.
/// Inputs are assumed already validated at the HTTP boundary.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;
    async fn create_user(&self, input: NewUser) -> Result<User, StorageError>;

    async fn create_contact(&self, input: NewContact) -> Result<Contact, StorageError>;
    async fn get_contacts(&self) -> Result<Vec<Contact>, StorageError>;

    async fn create_booking(&self, input: NewBooking) -> Result<Booking, StorageError>;
    async fn get_bookings(&self) -> Result<Vec<Booking>, StorageError>;
    async fn update_booking_status(&self, id: &str, status: &str) -> Result<(), StorageError>;
}

const REFERENCE_PREFIX: &str = "SY";
const REFERENCE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const REFERENCE_SUFFIX_LEN: usize = 3;

/// Human-readable booking reference: the studio prefix, the low six digits
/// of the creation instant in milliseconds, and three random alphanumeric
/// characters. Two bookings stamped within the same millisecond can collide
/// when the random suffix repeats.
pub fn booking_reference(created_at: DateTime<Utc>) -> String {
    booking_reference_with(created_at, &mut rand::thread_rng())
}

fn booking_reference_with(created_at: DateTime<Utc>, rng: &mut impl Rng) -> String {
    let millis = created_at.timestamp_millis().to_string();
    let digits = &millis[millis.len().saturating_sub(6)..];
    let suffix: String = (0..REFERENCE_SUFFIX_LEN)
        .map(|_| REFERENCE_ALPHABET[rng.gen_range(0..REFERENCE_ALPHABET.len())] as char)
        .collect();
    format!("{REFERENCE_PREFIX}{digits}{suffix}")
}

/// Store facade owning the durable-to-volatile fallback.
///
/// Operations go to the durable backend until one fails. The failure is
/// logged, the manager flips to the in-memory backend and re-issues the
/// same operation there. The switch never reverses: once degraded, the
/// durable backend is not probed again for the process lifetime.
pub struct StorageManager {
    durable: Option<Box<dyn Storage>>,
    volatile: MemStorage,
    degraded: AtomicBool,
}

impl StorageManager {
    pub fn new(durable: Option<Box<dyn Storage>>) -> Self {
        let degraded = durable.is_none();
        Self {
            durable,
            volatile: MemStorage::new(),
            degraded: AtomicBool::new(degraded),
        }
    }

    fn active_durable(&self) -> Option<&dyn Storage> {
        if self.degraded.load(Ordering::Relaxed) {
            return None;
        }
        self.durable.as_deref()
    }

    // Concurrent downgrades are idempotent: the flag only ever moves
    // durable -> volatile.
    fn downgrade(&self, error: &StorageError) {
        warn!("Durable storage failed, falling back to in-memory storage: {error}");
        self.degraded.store(true, Ordering::Relaxed);
    }
}

#[async_trait]
impl Storage for StorageManager {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError> {
        if let Some(durable) = self.active_durable() {
            match durable.get_user(id).await {
                Ok(user) => return Ok(user),
                Err(e) => self.downgrade(&e),
            }
        }
        self.volatile.get_user(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        if let Some(durable) = self.active_durable() {
            match durable.get_user_by_username(username).await {
                Ok(user) => return Ok(user),
                Err(e) => self.downgrade(&e),
            }
        }
        self.volatile.get_user_by_username(username).await
    }

    async fn create_user(&self, input: NewUser) -> Result<User, StorageError> {
        if let Some(durable) = self.active_durable() {
            match durable.create_user(input.clone()).await {
                Ok(user) => return Ok(user),
                Err(e) => self.downgrade(&e),
            }
        }
        self.volatile.create_user(input).await
    }

    async fn create_contact(&self, input: NewContact) -> Result<Contact, StorageError> {
        if let Some(durable) = self.active_durable() {
            match durable.create_contact(input.clone()).await {
                Ok(contact) => return Ok(contact),
                Err(e) => self.downgrade(&e),
            }
        }
        self.volatile.create_contact(input).await
    }

    async fn get_contacts(&self) -> Result<Vec<Contact>, StorageError> {
        if let Some(durable) = self.active_durable() {
            match durable.get_contacts().await {
                Ok(contacts) => return Ok(contacts),
                Err(e) => self.downgrade(&e),
            }
        }
        self.volatile.get_contacts().await
    }

    async fn create_booking(&self, input: NewBooking) -> Result<Booking, StorageError> {
        if let Some(durable) = self.active_durable() {
            match durable.create_booking(input.clone()).await {
                Ok(booking) => return Ok(booking),
                Err(e) => self.downgrade(&e),
            }
        }
        self.volatile.create_booking(input).await
    }

    async fn get_bookings(&self) -> Result<Vec<Booking>, StorageError> {
        if let Some(durable) = self.active_durable() {
            match durable.get_bookings().await {
                Ok(bookings) => return Ok(bookings),
                Err(e) => self.downgrade(&e),
            }
        }
        self.volatile.get_bookings().await
    }

    async fn update_booking_status(&self, id: &str, status: &str) -> Result<(), StorageError> {
        if let Some(durable) = self.active_durable() {
            match durable.update_booking_status(id, status).await {
                Ok(()) => return Ok(()),
                Err(e) => self.downgrade(&e),
            }
        }
        self.volatile.update_booking_status(id, status).await
    }
}
