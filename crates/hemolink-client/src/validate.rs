//! Form validation.
//!
//! The same rules the sign-up and profile forms enforced before submitting:
//! required fields, an email shape check, and a 7-15 digit phone number
//! with optional country prefix.

use std::sync::LazyLock;

use regex::Regex;

use hemolink_core::model::{NewDonorProfile, RegisterRequest};
use hemolink_core::{Error, Result};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").expect("valid email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("valid phone regex"));

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate a sign-up form before it is posted.
pub fn signup(form: &RegisterRequest) -> Result<()> {
    if form.full_name.trim().is_empty() {
        return Err(Error::validation_field("fullName", "full name is required"));
    }

    let email = form.email.trim();
    if email.is_empty() {
        return Err(Error::validation_field("email", "email is required"));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(Error::validation_field(
            "email",
            "please enter a valid email address",
        ));
    }

    let phone = form.phone.as_deref().unwrap_or("").trim();
    if phone.is_empty() {
        return Err(Error::validation_field("phone", "phone number is required"));
    }
    if !PHONE_RE.is_match(phone) {
        return Err(Error::validation_field(
            "phone",
            "please enter a valid phone number (7-15 digits, optional country code)",
        ));
    }

    if form.password.is_empty() {
        return Err(Error::validation_field("password", "password is required"));
    }
    if form.password.len() < MIN_PASSWORD_LEN {
        return Err(Error::validation_field(
            "password",
            "password must be at least 6 characters long",
        ));
    }

    if form
        .home_address
        .as_deref()
        .unwrap_or("")
        .trim()
        .is_empty()
    {
        return Err(Error::validation_field(
            "homeAddress",
            "home address is required",
        ));
    }

    if form.blood_type.is_none() {
        return Err(Error::validation_field(
            "bloodType",
            "please select a blood type",
        ));
    }
    if form.rhesus.is_none() {
        return Err(Error::validation_field(
            "rhesus",
            "please select a rhesus factor (+ or -)",
        ));
    }

    Ok(())
}

/// Validate a donor profile form before it is posted.
///
/// Blood type and rhesus are enforced by the payload type; what can still
/// be missing is the owning user reference.
pub fn profile(form: &NewDonorProfile) -> Result<()> {
    if form.user.is_none() {
        return Err(Error::validation_field("user", "donor user id is required"));
    }
    Ok(())
}
