use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{Booking, Contact, NewBooking, NewContact, NewUser, User};

use super::{booking_reference, Storage, StorageError};

/// Volatile in-process backend. Nothing survives a restart; submissions are
/// accepted anyway so the site keeps working while the database is down.
#[derive(Default)]
pub struct MemStorage {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<String, User>,
    contacts: Vec<Contact>,
    bookings: Vec<Booking>,
    next_user_id: u64,
    next_contact_id: u64,
    next_booking_id: u64,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("storage mutex poisoned")
    }
}

/// Newest-first listing: created_at descending, later insertions first
/// among records stamped in the same millisecond.
fn newest_first<T, F>(items: &[T], created_at: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> DateTime<Utc>,
{
    let mut out: Vec<T> = items.iter().rev().cloned().collect();
    out.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    out
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: &str) -> Result<Option<User>, StorageError> {
        Ok(self.lock().users.get(id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        Ok(self
            .lock()
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, input: NewUser) -> Result<User, StorageError> {
        let mut inner = self.lock();
        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id.to_string(),
            username: input.username,
            password: input.password,
        };
        inner.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn create_contact(&self, input: NewContact) -> Result<Contact, StorageError> {
        let mut inner = self.lock();
        inner.next_contact_id += 1;
        let contact = Contact {
            id: inner.next_contact_id.to_string(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            interested_in: input.interested_in,
            message: input.message,
            created_at: Utc::now(),
        };
        inner.contacts.push(contact.clone());
        Ok(contact)
    }

    async fn get_contacts(&self) -> Result<Vec<Contact>, StorageError> {
        Ok(newest_first(&self.lock().contacts, |c| c.created_at))
    }

    async fn create_booking(&self, input: NewBooking) -> Result<Booking, StorageError> {
        let mut inner = self.lock();
        inner.next_booking_id += 1;
        let created_at = Utc::now();
        let booking = Booking {
            id: inner.next_booking_id.to_string(),
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
        inner.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn get_bookings(&self) -> Result<Vec<Booking>, StorageError> {
        Ok(newest_first(&self.lock().bookings, |b| b.created_at))
    }

    async fn update_booking_status(&self, id: &str, status: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();
        if let Some(booking) = inner.bookings.iter_mut().find(|b| b.id == id) {
            booking.status = status.to_string();
        }
        Ok(())
    }
}
