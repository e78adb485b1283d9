//! Credential input validation
//!
//! Shape checks for sign-up and login input. Nothing here touches storage.

use crate::error::AuthError;
use crate::utils::{is_blank, strip_whitespace};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Prefixes accepted in front of the `1[3-9]XXXXXXXX` mobile number
const BD_PHONE_PREFIXES: [&str; 3] = ["+880", "880", "0"];

pub fn validate_email(email: &str) -> Result<(), AuthError> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(AuthError::InvalidEmail(email.to_string()))
    }
}

pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        Err(AuthError::PasswordTooShort(MIN_PASSWORD_LENGTH))
    } else {
        Ok(())
    }
}

/// Matches `^(\+880|880|0)1[3-9]\d{8}$` on an already whitespace-free string
pub fn is_bd_mobile(phone: &str) -> bool {
    BD_PHONE_PREFIXES.iter().any(|prefix| {
        phone
            .strip_prefix(prefix)
            .is_some_and(is_bd_subscriber_number)
    })
}

fn is_bd_subscriber_number(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    bytes.len() == 10
        && bytes[0] == b'1'
        && (b'3'..=b'9').contains(&bytes[1])
        && bytes[2..].iter().all(u8::is_ascii_digit)
}

/// Strips whitespace and validates; returns the normalized number
pub fn normalize_phone(phone: &str) -> Result<String, AuthError> {
    let cleaned = strip_whitespace(phone);
    if is_bd_mobile(&cleaned) {
        Ok(cleaned)
    } else {
        Err(AuthError::InvalidPhone(phone.to_string()))
    }
}

/// Validates sign-up input, returning the normalized phone number.
pub fn validate_registration(
    email: &str,
    phone: &str,
    password: &str,
) -> Result<String, AuthError> {
    if is_blank(email) || is_blank(phone) || password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    validate_email(email)?;
    validate_password(password)?;
    normalize_phone(phone)
}

pub fn validate_login(email: &str, password: &str) -> Result<(), AuthError> {
    if is_blank(email) || password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    validate_email(email)?;
    validate_password(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_all_bangladesh_prefixes() {
        assert!(is_bd_mobile("+8801712345678"));
        assert!(is_bd_mobile("8801712345678"));
        assert!(is_bd_mobile("01712345678"));
        assert!(is_bd_mobile("01312345678"));
        assert!(is_bd_mobile("01912345678"));
    }

    #[test]
    fn rejects_bad_operator_digit_and_short_numbers() {
        assert!(!is_bd_mobile("01212345678"));
        assert!(!is_bd_mobile("123456"));
        assert!(!is_bd_mobile("0171234567"));
        assert!(!is_bd_mobile("017123456789"));
        assert!(!is_bd_mobile("+880171234567a"));
        assert!(!is_bd_mobile("+01712345678"));
    }

    #[test]
    fn normalize_strips_spaces() {
        assert_eq!(
            normalize_phone("+880 1712 345678").unwrap(),
            "+8801712345678"
        );
        assert!(matches!(
            normalize_phone("01212345678"),
            Err(AuthError::InvalidPhone(_))
        ));
    }

    #[test]
    fn registration_checks_in_order() {
        assert!(matches!(
            validate_registration("", "01712345678", "secret1"),
            Err(AuthError::MissingFields)
        ));
        assert!(matches!(
            validate_registration("no-at-sign", "01712345678", "secret1"),
            Err(AuthError::InvalidEmail(_))
        ));
        assert!(matches!(
            validate_registration("a@b.com", "01712345678", "short"),
            Err(AuthError::PasswordTooShort(6))
        ));
        assert!(matches!(
            validate_registration("a@b.com", "123456", "secret1"),
            Err(AuthError::InvalidPhone(_))
        ));
        assert_eq!(
            validate_registration("a@b.com", "01712345678", "secret1").unwrap(),
            "01712345678"
        );
    }

    #[test]
    fn login_shape_checks() {
        assert!(matches!(
            validate_login("a@b.com", ""),
            Err(AuthError::MissingFields)
        ));
        assert!(matches!(
            validate_login("ab.com", "secret1"),
            Err(AuthError::InvalidEmail(_))
        ));
        assert!(validate_login("a@b.com", "secret1").is_ok());
    }
}
