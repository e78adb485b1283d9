//! Authentication system
//!
//! Handles user registration, credential validation, and session management.

pub mod credentials;
pub mod session;
pub mod store;
pub mod validator;

pub use credentials::UserCredential;
pub use session::{Session, SessionUser};
pub use store::CredentialStore;
pub use validator::{is_bd_mobile, normalize_phone};
