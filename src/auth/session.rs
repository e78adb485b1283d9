//! Session state
//!
//! The single logged-in user, persisted under the `auth` key as
//! `{"user":{"email":..,"phone":..},"isAdmin":..}`.

use serde::{Deserialize, Serialize};

use super::credentials::UserCredential;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: SessionUser,
    pub is_admin: bool,
}

impl Session {
    pub fn for_user(user: &UserCredential) -> Self {
        Self {
            user: SessionUser {
                email: user.email.clone(),
                phone: user.phone.clone(),
            },
            is_admin: user.is_admin,
        }
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }

    pub fn role(&self) -> &'static str {
        if self.is_admin { "admin" } else { "viewer" }
    }
}
