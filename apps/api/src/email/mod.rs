//! Notification dispatcher over the Mailgun messages API.
//!
//! Every submission produces two messages: a confirmation to the submitter
//! and an alert to the studio operator. Delivery errors propagate to the
//! caller; the HTTP layer decides to swallow them. Missing credentials are
//! NOT a delivery failure: the dispatcher degrades to a logged dry run.

pub mod templates;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::models::{Booking, Contact};

const MAILGUN_API_BASE: &str = "https://api.mailgun.net/v3";

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Mailgun API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Outbound notification interface, injected into handlers as a trait
/// object so the endpoint contract can be exercised without a Mailgun
/// account.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_contact_confirmation(&self, contact: &Contact) -> Result<(), EmailError>;
    async fn send_booking_confirmation(&self, booking: &Booking) -> Result<(), EmailError>;
}

#[derive(Debug, Clone)]
struct MailgunCredentials {
    api_key: String,
    domain: String,
}

/// Mailgun-backed implementation of [`Notifier`].
pub struct EmailService {
    client: Client,
    credentials: Option<MailgunCredentials>,
    from_email: String,
    notify_email: String,
}

impl EmailService {
    pub fn new(config: &Config) -> Self {
        let credentials = match (&config.mailgun_api_key, &config.mailgun_domain) {
            (Some(api_key), Some(domain)) => Some(MailgunCredentials {
                api_key: api_key.clone(),
                domain: domain.clone(),
            }),
            _ => None,
        };
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            credentials,
            from_email: config.from_email.clone(),
            notify_email: config.notify_email.clone(),
        }
    }

    /// Sends one message through the Mailgun API. Without credentials this
    /// logs the would-be delivery and returns Ok: a local or staging
    /// process runs as a dry run, which is not a failure. A rejected API
    /// call with credentials present IS one.
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), EmailError> {
        let Some(credentials) = &self.credentials else {
            info!("Mailgun not configured; skipping email to {to}: {subject}");
            return Ok(());
        };

        let from = format!("Saanvi Yoga Studio <{}>", self.from_email);
        let response = self
            .client
            .post(format!(
                "{MAILGUN_API_BASE}/{}/messages",
                credentials.domain
            ))
            .basic_auth("api", Some(&credentials.api_key))
            .form(&[
                ("from", from.as_str()),
                ("to", to),
                ("subject", subject),
                ("html", html),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        info!("Email sent via Mailgun to {to}");
        Ok(())
    }
}

#[async_trait]
impl Notifier for EmailService {
    async fn send_contact_confirmation(&self, contact: &Contact) -> Result<(), EmailError> {
        let confirmation_body = templates::contact_confirmation(contact);
        let notification_subject = format!(
            "New Contact Form Submission - {} {}",
            contact.first_name, contact.last_name
        );
        let notification_body = templates::contact_notification(contact);

        let confirmation = self.send(
            &contact.email,
            "Message Received - Saanvi Yoga Studio",
            &confirmation_body,
        );
        let notification = self.send(
            &self.notify_email,
            &notification_subject,
            &notification_body,
        );

        tokio::try_join!(confirmation, notification)?;
        info!("Contact confirmation and notification emails dispatched");
        Ok(())
    }

    async fn send_booking_confirmation(&self, booking: &Booking) -> Result<(), EmailError> {
        self.send(
            &booking.email,
            &format!(
                "Consultation Confirmed - Booking ID: {} - Saanvi Yoga Studio",
                booking.booking_id
            ),
            &templates::booking_confirmation(booking),
        )
        .await?;

        self.send(
            &self.notify_email,
            &format!("New Consultation Booking - {}", booking.booking_id),
            &templates::booking_notification(booking),
        )
        .await?;

        info!(
            "Consultation booking emails dispatched for {}",
            booking.booking_id
        );
        Ok(())
    }
}
