//! Credential store
//!
//! Owns the persisted user list and the current session. Every operation
//! re-reads the `users` key so that the storage stays the source of truth.

use log::{debug, info, warn};

use super::credentials::{UserCredential, default_users, encode_password, verify_password};
use super::session::Session;
use super::validator::{validate_login, validate_registration};
use crate::error::{AuthError, LeaderboardError, StorageError};
use crate::storage::{AUTH_KEY, KeyValueStore, USERS_KEY, read_json, write_json};
use crate::utils::now_millis_string;

pub struct CredentialStore {
    storage: Box<dyn KeyValueStore>,
    session: Option<Session>,
}

impl CredentialStore {
    /// Seeds the default admin if no user list exists, then restores any
    /// persisted session. A session that fails to parse is dropped.
    pub fn open(storage: Box<dyn KeyValueStore>) -> Result<Self, StorageError> {
        let mut store = Self {
            storage,
            session: None,
        };
        store.seed_default_users()?;
        store.session = store.restore_session()?;
        Ok(store)
    }

    fn seed_default_users(&mut self) -> Result<(), StorageError> {
        if self.storage.get(USERS_KEY)?.is_none() {
            write_json(self.storage.as_mut(), USERS_KEY, &default_users())?;
            info!("Seeded default administrator account");
        }
        Ok(())
    }

    fn restore_session(&mut self) -> Result<Option<Session>, StorageError> {
        match read_json::<Session>(self.storage.as_ref(), AUTH_KEY) {
            Ok(Some(session)) => {
                info!("Restored session for {}", session.email());
                Ok(Some(session))
            }
            Ok(None) => Ok(None),
            Err(StorageError::Serialization(_, e)) => {
                debug!("Discarding malformed session: {}", e);
                self.storage.remove(AUTH_KEY)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub fn users(&self) -> Result<Vec<UserCredential>, StorageError> {
        Ok(read_json(self.storage.as_ref(), USERS_KEY)?.unwrap_or_default())
    }

    /// Creates an account and logs it in.
    pub fn register(
        &mut self,
        email: &str,
        phone: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<Session, LeaderboardError> {
        let phone = validate_registration(email, phone, password)?;

        let mut users = self.users()?;
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::EmailTaken(email.to_string()).into());
        }
        if users.iter().any(|u| u.phone == phone) {
            return Err(AuthError::PhoneTaken(phone).into());
        }

        let user = UserCredential {
            id: now_millis_string(),
            email: email.to_string(),
            phone,
            password_hash: encode_password(password),
            is_admin,
        };
        users.push(user.clone());
        write_json(self.storage.as_mut(), USERS_KEY, &users)?;
        info!("Registered {} (admin: {})", user.email, user.is_admin);

        Ok(self.establish_session(&user)?)
    }

    pub fn authenticate(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<Session, LeaderboardError> {
        validate_login(email, password)?;

        let users = self.users()?;
        let user = users
            .iter()
            .find(|u| u.email == email)
            .filter(|u| verify_password(password, &u.password_hash));

        match user {
            Some(user) => {
                info!("Login: {}", user.email);
                Ok(self.establish_session(user)?)
            }
            None => {
                warn!("Failed login attempt for {}", email);
                Err(AuthError::InvalidCredentials.into())
            }
        }
    }

    /// Clears the session. Safe to call when nobody is logged in.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        if let Some(session) = self.session.take() {
            info!("Logout: {}", session.email());
        }
        self.storage.remove(AUTH_KEY)
    }

    fn establish_session(&mut self, user: &UserCredential) -> Result<Session, StorageError> {
        let session = Session::for_user(user);
        write_json(self.storage.as_mut(), AUTH_KEY, &session)?;
        self.session = Some(session.clone());
        Ok(session)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn require_session(&self) -> Result<&Session, AuthError> {
        self.session.as_ref().ok_or(AuthError::NotLoggedIn)
    }

    pub fn require_admin(&self) -> Result<&Session, AuthError> {
        let session = self.require_session()?;
        if session.is_admin {
            Ok(session)
        } else {
            Err(AuthError::AdminRequired)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credentials::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD};
    use crate::error::ErrorKind;
    use crate::storage::MemoryStore;

    fn fresh() -> CredentialStore {
        CredentialStore::open(Box::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn bootstrap_seeds_exactly_one_admin() {
        let store = fresh();
        let users = store.users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, DEFAULT_ADMIN_EMAIL);
        assert!(users[0].is_admin);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn existing_user_list_is_not_reseeded() {
        let mut storage = MemoryStore::new();
        storage.set(USERS_KEY, "[]").unwrap();
        let store = CredentialStore::open(Box::new(storage)).unwrap();
        assert!(store.users().unwrap().is_empty());
    }

    #[test]
    fn register_persists_and_logs_in() {
        let mut store = fresh();
        let session = store
            .register("viewer@example.com", "01712 345678", "secret1", false)
            .unwrap();
        assert_eq!(session.user.phone, "01712345678");
        assert!(!session.is_admin);
        assert_eq!(store.session(), Some(&session));

        let users = store.users().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].password_hash, encode_password("secret1"));
    }

    #[test]
    fn duplicate_email_and_phone_conflict() {
        let mut store = fresh();
        store
            .register("a@example.com", "01712345678", "secret1", false)
            .unwrap();

        let email = store
            .register("a@example.com", "01812345678", "secret1", false)
            .unwrap_err();
        assert_eq!(email.kind(), ErrorKind::Conflict);

        let phone = store
            .register("b@example.com", "01712345678", "secret1", false)
            .unwrap_err();
        assert_eq!(phone.kind(), ErrorKind::Conflict);
        assert_eq!(store.users().unwrap().len(), 2);
    }

    #[test]
    fn authenticate_requires_matching_encoding() {
        let mut store = fresh();
        let err = store
            .authenticate(DEFAULT_ADMIN_EMAIL, "wrongpass")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Auth);
        assert!(!store.is_authenticated());

        let err = store
            .authenticate("nobody@example.com", DEFAULT_ADMIN_PASSWORD)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Auth);

        let session = store
            .authenticate(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
            .unwrap();
        assert!(session.is_admin);
    }

    #[test]
    fn authenticate_validates_shape_first() {
        let mut store = fresh();
        let err = store.authenticate("admin", "admin123").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        let err = store.authenticate(DEFAULT_ADMIN_EMAIL, "12345").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn logout_is_idempotent_and_gates_access() {
        let mut store = fresh();
        store
            .authenticate(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
            .unwrap();
        assert!(store.require_admin().is_ok());

        store.logout().unwrap();
        store.logout().unwrap();
        assert!(matches!(store.require_session(), Err(AuthError::NotLoggedIn)));

        store
            .authenticate(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
            .unwrap();
        assert!(store.require_session().is_ok());
    }

    #[test]
    fn viewers_are_not_admins() {
        let mut store = fresh();
        store
            .register("v@example.com", "01912345678", "secret1", false)
            .unwrap();
        assert!(store.require_session().is_ok());
        assert!(matches!(store.require_admin(), Err(AuthError::AdminRequired)));
    }

    #[test]
    fn session_is_restored_from_storage() {
        let mut storage = MemoryStore::new();
        storage
            .set(
                AUTH_KEY,
                r#"{"user":{"email":"a@b.com","phone":"01712345678"},"isAdmin":true}"#,
            )
            .unwrap();
        let store = CredentialStore::open(Box::new(storage)).unwrap();
        let session = store.session().unwrap();
        assert_eq!(session.email(), "a@b.com");
        assert!(session.is_admin);
    }

    #[test]
    fn malformed_session_is_discarded() {
        let mut storage = MemoryStore::new();
        storage.set(AUTH_KEY, "{broken").unwrap();
        let store = CredentialStore::open(Box::new(storage)).unwrap();
        assert!(store.session().is_none());
    }

    #[test]
    fn malformed_user_list_is_a_storage_error() {
        let mut storage = MemoryStore::new();
        storage.set(USERS_KEY, "{broken").unwrap();
        let mut store = CredentialStore::open(Box::new(storage)).unwrap();

        assert!(matches!(
            store.users(),
            Err(StorageError::Serialization(key, _)) if key == USERS_KEY
        ));
        let err = store
            .register("a@example.com", "01712345678", "secret1", false)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
        let err = store
            .authenticate(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);

        assert!(!store.is_authenticated());
        assert_eq!(
            store.storage.get(USERS_KEY).unwrap().as_deref(),
            Some("{broken")
        );
        assert_eq!(store.storage.get(AUTH_KEY).unwrap(), None);
    }
}
