use std::sync::LazyLock;

use chrono::{Months, NaiveDate};
use regex::Regex;

use crate::modules::users::core::user::User;

// Lowercase local part and domain labels, TLD of 2 to 4 lowercase letters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,4}$").expect("email pattern compiles")
});

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid email format")]
    InvalidEmail,

    #[error("first name must not be empty")]
    EmptyFirstName,

    #[error("last name must not be empty")]
    EmptyLastName,

    #[error("birth date must be in the past")]
    BirthDateNotInPast,
}

/// Schema-level checks shared by create and replace. The birth date must be
/// strictly before `today`.
pub fn validate_user(candidate: &User, today: NaiveDate) -> Result<(), ValidationError> {
    if !EMAIL_PATTERN.is_match(&candidate.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if candidate.first_name.is_empty() {
        return Err(ValidationError::EmptyFirstName);
    }
    if candidate.last_name.is_empty() {
        return Err(ValidationError::EmptyLastName);
    }
    if candidate.birth_date >= today {
        return Err(ValidationError::BirthDateNotInPast);
    }
    Ok(())
}

/// The floor is met when the birth date is on or before `today` minus
/// `minimum_age` years.
pub fn meets_minimum_age(birth_date: NaiveDate, today: NaiveDate, minimum_age: u32) -> bool {
    birth_date <= today - Months::new(minimum_age * 12)
}
