//! Credential records and password encoding
//!
//! The "hash" here is plain base64 of the password bytes. It is reversible
//! and offers no protection; it only reproduces the dashboard's mock login.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ADMIN_ID: &str = "1";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@topperformers.com";
pub const DEFAULT_ADMIN_PHONE: &str = "+8801700000000";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// A registered user as persisted under the `users` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCredential {
    pub id: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    /// Admins can edit the roster and branding; everyone else only views
    pub is_admin: bool,
}

pub fn encode_password(password: &str) -> String {
    B64.encode(password.as_bytes())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    encode_password(password) == hash
}

/// The user list written on first start when no `users` key exists
pub fn default_users() -> Vec<UserCredential> {
    vec![UserCredential {
        id: DEFAULT_ADMIN_ID.to_string(),
        email: DEFAULT_ADMIN_EMAIL.to_string(),
        phone: DEFAULT_ADMIN_PHONE.to_string(),
        password_hash: encode_password(DEFAULT_ADMIN_PASSWORD),
        is_admin: true,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_matches_base64_text() {
        assert_eq!(encode_password("admin123"), "YWRtaW4xMjM=");
        assert!(verify_password("admin123", "YWRtaW4xMjM="));
        assert!(!verify_password("admin124", "YWRtaW4xMjM="));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(&default_users()[0]).unwrap();
        assert_eq!(json["passwordHash"], "YWRtaW4xMjM=");
        assert_eq!(json["isAdmin"], true);
        assert_eq!(json["id"], "1");
    }
}
