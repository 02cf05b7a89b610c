use crate::errors::AppError;
use crate::models::{NewBooking, NewContact};

/// Class types offered on the contact form.
pub const CLASS_TYPES: &[&str] = &[
    "Hatha Yoga",
    "Vinyasa Flow",
    "Meditation & Pranayama",
    "Private Sessions",
    "Family Yoga",
    "Corporate Wellness",
];

/// Consultation formats offered on the booking form.
pub const CONSULTATION_TYPES: &[&str] =
    &["initial", "private", "group", "corporate", "specialized"];

pub const EXPERIENCE_LEVELS: &[&str] = &["beginner", "some", "intermediate", "advanced", "teacher"];

/// Bookable one-hour slots, 6 AM through 7 PM.
pub const TIME_SLOTS: &[&str] = &[
    "6:00 AM", "7:00 AM", "8:00 AM", "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM",
    "2:00 PM", "3:00 PM", "4:00 PM", "5:00 PM", "6:00 PM", "7:00 PM",
];

pub fn validate_contact(input: &NewContact) -> Result<(), AppError> {
    validate_min_len("firstName", &input.first_name, 2)?;
    validate_min_len("lastName", &input.last_name, 2)?;
    validate_email(&input.email)?;
    validate_phone(&input.phone)?;
    validate_choice("interestedIn", &input.interested_in, CLASS_TYPES)?;
    validate_min_len("message", &input.message, 10)?;
    Ok(())
}

pub fn validate_booking(input: &NewBooking) -> Result<(), AppError> {
    validate_min_len("firstName", &input.first_name, 2)?;
    validate_min_len("lastName", &input.last_name, 2)?;
    validate_email(&input.email)?;
    validate_phone(&input.phone)?;
    validate_choice("consultationType", &input.consultation_type, CONSULTATION_TYPES)?;
    if input.preferred_date.trim().is_empty() {
        return Err(invalid("preferredDate", "is required"));
    }
    validate_choice("preferredTime", &input.preferred_time, TIME_SLOTS)?;
    validate_choice("experience", &input.experience, EXPERIENCE_LEVELS)?;
    validate_min_len("goals", &input.goals, 10)?;
    Ok(())
}

fn invalid(field: &str, problem: &str) -> AppError {
    AppError::Validation(format!("{field} {problem}"))
}

fn validate_min_len(field: &str, value: &str, min: usize) -> Result<(), AppError> {
    if value.trim().chars().count() < min {
        return Err(invalid(
            field,
            &format!("must be at least {min} characters"),
        ));
    }
    Ok(())
}

fn validate_email(value: &str) -> Result<(), AppError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(invalid("email", "must be a valid email address"));
    }
    Ok(())
}

fn validate_phone(value: &str) -> Result<(), AppError> {
    if value.trim().len() < 10 {
        return Err(invalid("phone", "must be at least 10 digits"));
    }
    Ok(())
}

fn validate_choice(field: &str, value: &str, allowed: &[&str]) -> Result<(), AppError> {
    if !allowed.contains(&value) {
        return Err(invalid(field, "is not one of the offered options"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_contact() -> NewContact {
        NewContact {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            interested_in: "Hatha Yoga".to_string(),
            message: "Looking for morning classes".to_string(),
        }
    }

    fn valid_booking() -> NewBooking {
        NewBooking {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            consultation_type: "initial".to_string(),
            preferred_date: "2025-03-01".to_string(),
            preferred_time: "9:00 AM".to_string(),
            experience: "beginner".to_string(),
            goals: "reduce stress and improve flexibility".to_string(),
            special_requests: None,
        }
    }

    #[test]
    fn test_valid_contact_passes() {
        assert!(validate_contact(&valid_contact()).is_ok());
    }

    #[test]
    fn test_valid_booking_passes() {
        assert!(validate_booking(&valid_booking()).is_ok());
    }

    #[test]
    fn test_short_first_name_rejected() {
        let mut input = valid_contact();
        input.first_name = "A".to_string();
        assert!(validate_contact(&input).is_err());
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let mut input = valid_contact();
        input.first_name = "  ".to_string();
        assert!(validate_contact(&input).is_err());
    }

    #[test]
    fn test_email_without_at_rejected() {
        let mut input = valid_contact();
        input.email = "asha.example.com".to_string();
        assert!(validate_contact(&input).is_err());
    }

    #[test]
    fn test_email_without_domain_dot_rejected() {
        let mut input = valid_contact();
        input.email = "asha@example".to_string();
        assert!(validate_contact(&input).is_err());
    }

    #[test]
    fn test_short_phone_rejected() {
        let mut input = valid_contact();
        input.phone = "12345".to_string();
        assert!(validate_contact(&input).is_err());
    }

    #[test]
    fn test_unknown_class_type_rejected() {
        let mut input = valid_contact();
        input.interested_in = "Hot Yoga".to_string();
        assert!(validate_contact(&input).is_err());
    }

    #[test]
    fn test_short_message_rejected() {
        let mut input = valid_contact();
        input.message = "hi".to_string();
        assert!(validate_contact(&input).is_err());
    }

    #[test]
    fn test_unknown_consultation_type_rejected() {
        let mut input = valid_booking();
        input.consultation_type = "walk-in".to_string();
        assert!(validate_booking(&input).is_err());
    }

    #[test]
    fn test_missing_preferred_date_rejected() {
        let mut input = valid_booking();
        input.preferred_date = String::new();
        assert!(validate_booking(&input).is_err());
    }

    #[test]
    fn test_off_schedule_time_rejected() {
        let mut input = valid_booking();
        input.preferred_time = "9:30 PM".to_string();
        assert!(validate_booking(&input).is_err());
    }

    #[test]
    fn test_unknown_experience_level_rejected() {
        let mut input = valid_booking();
        input.experience = "expert".to_string();
        assert!(validate_booking(&input).is_err());
    }

    #[test]
    fn test_short_goals_rejected() {
        let mut input = valid_booking();
        input.goals = "relax".to_string();
        assert!(validate_booking(&input).is_err());
    }

    #[test]
    fn test_special_requests_not_required() {
        let mut input = valid_booking();
        input.special_requests = Some("lower back injury".to_string());
        assert!(validate_booking(&input).is_ok());
    }
}
