//! HTML bodies for the four outbound messages. Markup is intentionally
//! plain; every field the studio needs to act on a submission is included.

use crate::models::{Booking, Contact};

const STUDIO_NAME: &str = "Saanvi Yoga Studio";
const STUDIO_CONTACT_LINE: &str = "Email: info@saanviyoga.com | Phone: +91 9999999999";

/// Confirmation sent to the customer after a consultation booking.
pub fn booking_confirmation(booking: &Booking) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<body style="font-family: Georgia, serif; max-width: 600px; margin: 0 auto; padding: 20px; color: #2d1b0e;">
  <h1 style="color: #f97316;">{STUDIO_NAME}</h1>
  <h2>Consultation Request Received</h2>
  <p>Dear {first_name} {last_name},</p>
  <p>Thank you for choosing {STUDIO_NAME}! We have received your consultation
  request and our team will contact you within 24 hours to confirm your
  appointment.</p>
  <table style="background: #ffedd5; border-radius: 8px; padding: 16px; width: 100%;">
    <tr><td><strong>Booking ID</strong></td><td>{booking_id}</td></tr>
    <tr><td><strong>Consultation Type</strong></td><td>{consultation_type}</td></tr>
    <tr><td><strong>Preferred Date</strong></td><td>{preferred_date}</td></tr>
    <tr><td><strong>Preferred Time</strong></td><td>{preferred_time}</td></tr>
    <tr><td><strong>Experience Level</strong></td><td>{experience}</td></tr>
    <tr><td><strong>Status</strong></td><td>{status}</td></tr>
  </table>
  <h3>Your Goals &amp; Expectations</h3>
  <p>{goals}</p>
  {special_requests}
  <hr style="border: none; border-top: 1px solid #fed7aa;">
  <p style="color: #92400e;">{STUDIO_CONTACT_LINE}</p>
  <p style="font-size: 12px; color: #999;">This is an automated confirmation email. Please do not reply to this message.</p>
</body>
</html>"#,
        first_name = booking.first_name,
        last_name = booking.last_name,
        booking_id = booking.booking_id,
        consultation_type = booking.consultation_type,
        preferred_date = booking.preferred_date,
        preferred_time = booking.preferred_time,
        experience = booking.experience,
        status = booking.status,
        goals = booking.goals,
        special_requests = special_requests_block(booking),
    )
}

/// Operator alert for a new consultation booking.
pub fn booking_notification(booking: &Booking) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<body style="font-family: 'Segoe UI', sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; color: #333;">
  <h1 style="color: #f97316;">{STUDIO_NAME} - Admin Notification</h1>
  <p style="background: #fff3cd; color: #856404; padding: 10px; border-radius: 5px;">
    <strong>New Consultation Booking</strong> - Please respond within 24 hours
  </p>
  <h2>Booking ID: {booking_id}</h2>
  <table style="background: #fef3e6; border-radius: 8px; padding: 16px; width: 100%;">
    <tr><td><strong>Name</strong></td><td>{first_name} {last_name}</td></tr>
    <tr><td><strong>Email</strong></td><td>{email}</td></tr>
    <tr><td><strong>Phone</strong></td><td>{phone}</td></tr>
    <tr><td><strong>Consultation Type</strong></td><td>{consultation_type}</td></tr>
    <tr><td><strong>Preferred Date</strong></td><td>{preferred_date}</td></tr>
    <tr><td><strong>Preferred Time</strong></td><td>{preferred_time}</td></tr>
    <tr><td><strong>Experience Level</strong></td><td>{experience}</td></tr>
    <tr><td><strong>Submitted</strong></td><td>{created_at}</td></tr>
  </table>
  <h3>Goals &amp; Expectations</h3>
  <p>{goals}</p>
  {special_requests}
  <p style="color: #666; font-size: 14px;">Please contact the client within 24 hours
  to confirm their consultation appointment and discuss next steps.</p>
</body>
</html>"#,
        booking_id = booking.booking_id,
        first_name = booking.first_name,
        last_name = booking.last_name,
        email = booking.email,
        phone = booking.phone,
        consultation_type = booking.consultation_type,
        preferred_date = booking.preferred_date,
        preferred_time = booking.preferred_time,
        experience = booking.experience,
        created_at = booking.created_at.to_rfc2822(),
        goals = booking.goals,
        special_requests = special_requests_block(booking),
    )
}

/// Confirmation sent to the customer after a contact inquiry.
pub fn contact_confirmation(contact: &Contact) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<body style="font-family: Georgia, serif; max-width: 600px; margin: 0 auto; padding: 20px; color: #2d1b0e;">
  <h1 style="color: #f97316;">{STUDIO_NAME}</h1>
  <h2>Namaste {first_name} {last_name}</h2>
  <p>Thank you for connecting with {STUDIO_NAME}. Your message has been
  received, and our team will respond within 24 hours during our regular
  hours.</p>
  <table style="background: #ffedd5; border-radius: 8px; padding: 16px; width: 100%;">
    <tr><td><strong>Interest Area</strong></td><td>{interested_in}</td></tr>
    <tr><td><strong>Phone</strong></td><td>{phone}</td></tr>
  </table>
  <h3>Your Message</h3>
  <p style="font-style: italic;">"{message}"</p>
  <hr style="border: none; border-top: 1px solid #fed7aa;">
  <p style="color: #92400e;">{STUDIO_CONTACT_LINE}</p>
  <p style="font-size: 12px; color: #999;">This is an automated confirmation. Please do not reply to this message.</p>
</body>
</html>"#,
        first_name = contact.first_name,
        last_name = contact.last_name,
        interested_in = contact.interested_in,
        phone = contact.phone,
        message = contact.message,
    )
}

/// Operator alert for a new contact inquiry.
pub fn contact_notification(contact: &Contact) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<body style="font-family: 'Segoe UI', sans-serif; max-width: 700px; margin: 0 auto; padding: 20px; color: #333;">
  <h1 style="color: #f97316;">New Contact Form Submission</h1>
  <p>Someone has reached out through the {STUDIO_NAME} website.</p>
  <table style="background: #f8fafc; border-radius: 8px; padding: 16px; width: 100%;">
    <tr><td><strong>Full Name</strong></td><td>{first_name} {last_name}</td></tr>
    <tr><td><strong>Email</strong></td><td><a href="mailto:{email}">{email}</a></td></tr>
    <tr><td><strong>Phone</strong></td><td><a href="tel:{phone}">{phone}</a></td></tr>
    <tr><td><strong>Interested In</strong></td><td>{interested_in}</td></tr>
    <tr><td><strong>Submitted</strong></td><td>{created_at}</td></tr>
  </table>
  <h3>Their Message</h3>
  <p style="font-style: italic;">"{message}"</p>
</body>
</html>"#,
        first_name = contact.first_name,
        last_name = contact.last_name,
        email = contact.email,
        phone = contact.phone,
        interested_in = contact.interested_in,
        created_at = contact.created_at.to_rfc2822(),
        message = contact.message,
    )
}

fn special_requests_block(booking: &Booking) -> String {
    match booking.special_requests.as_deref() {
        Some(text) => format!(
            "<h3 style=\"color: #dc3545;\">Special Requests/Health Considerations</h3>\n  <p>{text}</p>"
        ),
        None => String::new(),
    }
}
