//! Client-side form validation for the signup flows.
//!
//! Forms never talk to a store themselves; a successful `submit` yields the
//! create payload the caller hands to the matching client.

pub mod customer_signup;
pub mod partner_signup;

pub use customer_signup::*;
pub use partner_signup::*;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Passwords don't match!")]
    PasswordMismatch,

    #[error("{0} is not a valid email address")]
    InvalidEmail(String),

    /// `submit` was called before the final step.
    #[error("Complete step {current} of {last} first")]
    Incomplete { current: u8, last: u8 },
}

pub(crate) fn required(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(())
}

pub(crate) fn email(value: &str) -> Result<(), FormError> {
    let value = value.trim();
    match value.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(FormError::InvalidEmail(value.to_string())),
    }
}

pub(crate) fn passwords_match(password: &str, confirmation: &str) -> Result<(), FormError> {
    required("Password", password)?;
    if password != confirmation {
        return Err(FormError::PasswordMismatch);
    }
    Ok(())
}
