use axum::{extract::State, Json};
use serde::Serialize;
use tracing::error;

use crate::errors::AppError;
use crate::models::{Booking, Contact, NewBooking, NewContact};
use crate::state::AppState;
use crate::storage::Storage;
use crate::submissions::validation::{validate_booking, validate_contact};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmitted {
    pub message: String,
    pub id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmitted {
    pub message: String,
    pub id: String,
    pub booking_id: String,
}

/// POST /api/contact
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    Json(input): Json<NewContact>,
) -> Result<Json<ContactSubmitted>, AppError> {
    validate_contact(&input)?;
    let contact = state.storage.create_contact(input).await?;

    // Delivery problems must not fail the submission; log and move on.
    if let Err(e) = state.notifier.send_contact_confirmation(&contact).await {
        error!("Failed to send contact confirmation email: {e}");
    }

    Ok(Json(ContactSubmitted {
        message: "Contact form submitted successfully".to_string(),
        id: contact.id,
    }))
}

/// POST /api/bookings
pub async fn handle_submit_booking(
    State(state): State<AppState>,
    Json(input): Json<NewBooking>,
) -> Result<Json<BookingSubmitted>, AppError> {
    validate_booking(&input)?;
    let booking = state.storage.create_booking(input).await?;

    if let Err(e) = state.notifier.send_booking_confirmation(&booking).await {
        error!("Failed to send booking confirmation email: {e}");
    }

    Ok(Json(BookingSubmitted {
        message: "Booking submitted successfully".to_string(),
        id: booking.id,
        booking_id: booking.booking_id,
    }))
}

/// GET /api/contacts
pub async fn handle_list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, AppError> {
    let contacts = state.storage.get_contacts().await?;
    Ok(Json(contacts))
}

/// GET /api/bookings
pub async fn handle_list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.storage.get_bookings().await?;
    Ok(Json(bookings))
}
