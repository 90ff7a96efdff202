//! Member Field Validation
//!
//! Checks applied to the fields a visitor types in when signing up or
//! editing a profile. Names are trimmed and emails normalized before any
//! check runs; the checked values are returned so callers store exactly
//! what was validated.
//!
//! # Passwords
//!
//! bcrypt only reads the first 72 bytes of its input and stops at a NUL
//! byte, so two passwords differing past that point would hash alike.
//! Such passwords are rejected outright.
//!
//! ```rust
//! use jazz_chronicle::shared::validation::validate_signup;
//!
//! let fields = validate_signup(" Ann ", "Ann@X.com", "secret1").unwrap();
//! assert_eq!(fields.name, "Ann");
//! assert_eq!(fields.email, "ann@x.com");
//! assert!(validate_signup("Ann", "ann@x.com", "short").is_err());
//! ```

use crate::shared::error::SharedError;
use crate::shared::identity::normalize_email;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Longest password bcrypt reads in full, in bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Name and email after trimming and normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberFields {
    pub name: String,
    pub email: String,
}

impl MemberFields {
    fn normalized(name: &str, email: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: normalize_email(email),
        }
    }
}

/// Validate the signup form
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
) -> Result<MemberFields, SharedError> {
    let fields = MemberFields::normalized(name, email);
    if fields.name.is_empty() || fields.email.is_empty() || password.is_empty() {
        return Err(SharedError::validation(
            "credentials",
            "Name, email, and password are required",
        ));
    }
    check_email(&fields.email)?;
    check_password(password)?;
    Ok(fields)
}

/// Validate the profile form
pub fn validate_profile(name: &str, email: &str) -> Result<MemberFields, SharedError> {
    let fields = MemberFields::normalized(name, email);
    if fields.name.is_empty() || fields.email.is_empty() {
        return Err(SharedError::validation("profile", "Name and email are required"));
    }
    check_email(&fields.email)?;
    Ok(fields)
}

/// Length and content rules for a new password
pub fn check_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }
    if !fits_bcrypt(password) {
        return Err(SharedError::validation(
            "password",
            format!(
                "Password must be at most {} bytes and contain no NUL characters",
                MAX_PASSWORD_BYTES
            ),
        ));
    }
    Ok(())
}

/// Whether bcrypt sees every byte of `password`
pub fn fits_bcrypt(password: &str) -> bool {
    password.len() <= MAX_PASSWORD_BYTES && !password.contains('\0')
}

fn check_email(email: &str) -> Result<(), SharedError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(SharedError::validation("email", "Invalid email format")),
    }
}
